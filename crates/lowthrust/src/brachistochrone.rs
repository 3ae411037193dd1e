//! Flip-and-burn transfers: accelerate to the midpoint, then decelerate symmetrically.

use serde::Serialize;
use solar_config::OrbitingBody;
use solar_core::PhysicalConstants;
use solar_core::time::seconds_to_days;
use solar_orbits::{median_distance, separation_bounds};
use thiserror::Error;
use tracing::trace;

#[derive(Debug, Error, PartialEq)]
pub enum KinematicsError {
    #[error("acceleration must be positive and finite (got {0} km/s²)")]
    NonPositiveAcceleration(f64),
}

/// Summary of one origin/destination evaluation at a single acceleration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TravelMetrics {
    pub min_distance_au: f64,
    pub max_distance_au: f64,
    pub median_distance_au: f64,
    pub min_time_days: f64,
    pub max_time_days: f64,
    pub median_time_days: f64,
    /// Delta-v for the minimum separation, km/s.
    pub min_delta_v_km_s: f64,
    /// Delta-v for the maximum separation, km/s.
    pub max_delta_v_km_s: f64,
}

/// One-way transfer time in seconds, `2·sqrt(d/a)`.
///
/// `accel_km_s2` must be strictly positive and `distance_km` non-negative.
#[inline]
pub fn brachistochrone_time(distance_km: f64, accel_km_s2: f64) -> f64 {
    debug_assert!(accel_km_s2 > 0.0, "acceleration must be positive");
    debug_assert!(distance_km >= 0.0, "distance must be non-negative");
    2.0 * (distance_km / accel_km_s2).sqrt()
}

/// Peak (midpoint) velocity in km/s for a transfer lasting `time_s`.
#[inline]
pub fn max_velocity(time_s: f64, accel_km_s2: f64) -> f64 {
    accel_km_s2 * (time_s / 2.0)
}

/// Total delta-v: accelerate to the peak, then cancel it.
#[inline]
pub fn total_delta_v(max_velocity_km_s: f64) -> f64 {
    2.0 * max_velocity_km_s
}

/// Evaluate minimum, maximum, and median transfers between two bodies.
pub fn compute_metrics(
    origin: &OrbitingBody,
    destination: &OrbitingBody,
    accel_km_s2: f64,
    constants: &PhysicalConstants,
) -> Result<TravelMetrics, KinematicsError> {
    if !(accel_km_s2.is_finite() && accel_km_s2 > 0.0) {
        return Err(KinematicsError::NonPositiveAcceleration(accel_km_s2));
    }

    let (min_au, max_au) = separation_bounds(origin, destination);
    let median_au = median_distance(origin, destination);

    let min_time = brachistochrone_time(constants.au_to_km(min_au), accel_km_s2);
    let max_time = brachistochrone_time(constants.au_to_km(max_au), accel_km_s2);
    let median_time = brachistochrone_time(constants.au_to_km(median_au), accel_km_s2);

    let metrics = TravelMetrics {
        min_distance_au: min_au,
        max_distance_au: max_au,
        median_distance_au: median_au,
        min_time_days: seconds_to_days(min_time),
        max_time_days: seconds_to_days(max_time),
        median_time_days: seconds_to_days(median_time),
        min_delta_v_km_s: total_delta_v(max_velocity(min_time, accel_km_s2)),
        max_delta_v_km_s: total_delta_v(max_velocity(max_time, accel_km_s2)),
    };
    trace!(
        origin = origin.name(),
        destination = destination.name(),
        accel_km_s2,
        min_days = metrics.min_time_days,
        max_days = metrics.max_time_days,
        "brachistochrone metrics"
    );
    Ok(metrics)
}
