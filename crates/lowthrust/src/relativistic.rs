//! Constant-thrust interstellar cruise with a special-relativistic coast.
//!
//! The acceleration phase is Newtonian: acceleration is fixed at its value with the dry
//! mass plus one hour of propellant aboard, and mass depletion is ignored. Only the time
//! dilation of the whole trip is corrected, using the Lorentz factor at cruise speed.

use serde::Serialize;
use solar_core::PhysicalConstants;
use solar_core::time::{seconds_to_days, seconds_to_years};
use solar_core::units::kg_to_tons;
use solar_propulsion::DriveParameters;
use thiserror::Error;
use tracing::debug;

/// Burn length used to estimate the mass carried at ignition.
pub const REFERENCE_BURN_S: f64 = 3_600.0;

/// Cruise speed of the Tau Ceti study, as a fraction of c.
pub const CRUISE_FRACTION_C: f64 = 0.119;

#[derive(Debug, Error, PartialEq)]
pub enum CruiseError {
    #[error("cruise velocity must lie strictly between 0 and c (got {0} c)")]
    SuperluminalCruise(f64),
    #[error("target distance must be positive and finite (got {0} ly)")]
    InvalidDistance(f64),
    #[error(
        "acceleration and deceleration cover {burn_ly:.4} ly, more than the {distance_ly} ly to the target"
    )]
    InsufficientDistance { distance_ly: f64, burn_ly: f64 },
}

/// Cruise assumptions that are not part of the drive itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CruiseProfile {
    pub cruise_fraction_c: f64,
}

impl Default for CruiseProfile {
    fn default() -> Self {
        Self {
            cruise_fraction_c: CRUISE_FRACTION_C,
        }
    }
}

/// Outcome of a cruise. Times are seconds and masses kilograms; the accessor methods give
/// the display units used by the reports.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct JourneyResult {
    pub initial_acceleration_m_s2: f64,
    pub acceleration_time_s: f64,
    pub coast_time_s: f64,
    pub coordinate_time_s: f64,
    pub proper_time_s: f64,
    pub fuel_mass_kg: f64,
    pub mass_ratio: f64,
    pub peak_velocity_fraction_c: f64,
    pub lorentz_factor: f64,
    pub power_output_w: f64,
    pub theoretical_power_w: f64,
    pub mass_flow_kg_s: f64,
}

impl JourneyResult {
    pub fn acceleration_days(&self) -> f64 {
        seconds_to_days(self.acceleration_time_s)
    }

    pub fn coast_years(&self) -> f64 {
        seconds_to_years(self.coast_time_s)
    }

    /// Trip length for an observer at rest relative to origin and target.
    pub fn total_years(&self) -> f64 {
        seconds_to_years(self.coordinate_time_s)
    }

    /// Trip length aboard the ship.
    pub fn ship_years(&self) -> f64 {
        seconds_to_years(self.proper_time_s)
    }

    pub fn fuel_mass_tons(&self) -> f64 {
        kg_to_tons(self.fuel_mass_kg)
    }
}

/// `γ = 1 / sqrt(1 − β²)` for `0 ≤ β < 1`.
pub fn lorentz_factor(beta: f64) -> Result<f64, CruiseError> {
    if !(0.0..1.0).contains(&beta) {
        return Err(CruiseError::SuperluminalCruise(beta));
    }
    Ok(1.0 / (1.0 - beta * beta).sqrt())
}

/// Plan an accelerate / coast / decelerate trip of `distance_ly` light-years.
pub fn plan_journey(
    drive: &DriveParameters,
    distance_ly: f64,
    profile: &CruiseProfile,
    constants: &PhysicalConstants,
) -> Result<JourneyResult, CruiseError> {
    if !(distance_ly.is_finite() && distance_ly > 0.0) {
        return Err(CruiseError::InvalidDistance(distance_ly));
    }
    let beta = profile.cruise_fraction_c;
    if beta <= 0.0 {
        return Err(CruiseError::SuperluminalCruise(beta));
    }
    let gamma = lorentz_factor(beta)?;

    let distance_m = constants.ly_to_m(distance_ly);
    let initial_mass = drive.dry_mass_kg() + drive.fuel_mass_for(REFERENCE_BURN_S);
    let acceleration = drive.total_thrust_n() / initial_mass;

    let cruise_velocity = beta * constants.c_m_s;
    let accel_time = cruise_velocity / acceleration;

    let fuel_per_phase = drive.fuel_mass_for(accel_time);
    let total_fuel = 2.0 * fuel_per_phase;
    let mass_ratio = (drive.dry_mass_kg() + total_fuel) / drive.dry_mass_kg();

    let burn_distance = 2.0 * (0.5 * acceleration * accel_time * accel_time);
    let coast_distance = distance_m - burn_distance;
    if coast_distance < 0.0 {
        return Err(CruiseError::InsufficientDistance {
            distance_ly,
            burn_ly: burn_distance / constants.light_year_m,
        });
    }
    let coast_time = coast_distance / cruise_velocity;

    let coordinate_time = coast_time + 2.0 * accel_time;
    let proper_time = coast_time / gamma + 2.0 * accel_time / gamma;

    let result = JourneyResult {
        initial_acceleration_m_s2: acceleration,
        acceleration_time_s: accel_time,
        coast_time_s: coast_time,
        coordinate_time_s: coordinate_time,
        proper_time_s: proper_time,
        fuel_mass_kg: total_fuel,
        mass_ratio,
        peak_velocity_fraction_c: beta,
        lorentz_factor: gamma,
        power_output_w: drive.total_power_w(),
        theoretical_power_w: drive.theoretical_power_w(),
        mass_flow_kg_s: drive.mass_flow_rate_kg_s(),
    };
    debug!(
        distance_ly,
        efficiency = drive.efficiency(),
        total_years = result.total_years(),
        ship_years = result.ship_years(),
        "planned relativistic cruise"
    );
    Ok(result)
}
