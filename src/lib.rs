//! Travel-time and energy-budget estimates for brachistochrone transfers between
//! solar-system bodies and relativistic cruises to nearby stars.
//!
//! The library is a façade over the workspace crates so front-ends (the bundled CLIs,
//! tests, other tools) depend on a single crate.

pub mod logging;

pub use solar_config as config;
pub use solar_core::{PhysicalConstants, constants, time, units};
pub use solar_export as export;
pub use solar_lowthrust as lowthrust;
pub use solar_orbits as orbits;
pub use solar_propulsion as propulsion;
pub use solar_transfer as transfer;

/// Returns the version of the library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
