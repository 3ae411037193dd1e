//! Continuous-thrust analytical engines.
//!
//! [`brachistochrone`] covers flip-and-burn transfers between catalog bodies at a fixed
//! acceleration; [`relativistic`] covers constant-thrust cruises to nearby stars with a
//! Lorentz correction on the coast phase.

pub mod brachistochrone;
pub mod relativistic;

pub use brachistochrone::{KinematicsError, TravelMetrics, compute_metrics};
pub use relativistic::{CruiseError, CruiseProfile, JourneyResult, plan_journey};
