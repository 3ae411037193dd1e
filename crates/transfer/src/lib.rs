//! Report façade: turns engine output into route tables, travel matrices, and drive
//! comparisons, and re-exports the engine crates for downstream consumers.

pub mod comparison;
pub mod report;

pub use facade::*;
pub use solar_lowthrust as lowthrust;
pub use solar_propulsion as propulsion;

mod facade;
