//! Drive descriptors and the quantities derived from them.

use serde::Serialize;
use solar_core::constants::DHE3_ENERGY_J_KG;
use thiserror::Error;

/// Reasons a drive definition is rejected.
#[derive(Debug, Error, PartialEq)]
pub enum DriveError {
    #[error("thrust per engine must be positive (got {0} N)")]
    NonPositiveThrust(f64),
    #[error("a drive needs at least one engine")]
    NoEngines,
    #[error("exhaust velocity must be positive (got {0} m/s)")]
    NonPositiveExhaustVelocity(f64),
    #[error("dry mass must be positive (got {0} kg)")]
    NonPositiveDryMass(f64),
    #[error("efficiency must lie in (0, 1] (got {0})")]
    EfficiencyOutOfRange(f64),
}

/// A multi-engine constant-thrust drive. One instance per efficiency scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DriveParameters {
    thrust_per_engine_n: f64,
    engine_count: u32,
    exhaust_velocity_m_s: f64,
    dry_mass_kg: f64,
    efficiency: f64,
}

impl DriveParameters {
    pub fn new(
        thrust_per_engine_n: f64,
        engine_count: u32,
        exhaust_velocity_m_s: f64,
        dry_mass_kg: f64,
        efficiency: f64,
    ) -> Result<Self, DriveError> {
        if !(thrust_per_engine_n.is_finite() && thrust_per_engine_n > 0.0) {
            return Err(DriveError::NonPositiveThrust(thrust_per_engine_n));
        }
        if engine_count == 0 {
            return Err(DriveError::NoEngines);
        }
        if !(exhaust_velocity_m_s.is_finite() && exhaust_velocity_m_s > 0.0) {
            return Err(DriveError::NonPositiveExhaustVelocity(exhaust_velocity_m_s));
        }
        if !(dry_mass_kg.is_finite() && dry_mass_kg > 0.0) {
            return Err(DriveError::NonPositiveDryMass(dry_mass_kg));
        }
        if !(efficiency > 0.0 && efficiency <= 1.0) {
            return Err(DriveError::EfficiencyOutOfRange(efficiency));
        }
        Ok(Self {
            thrust_per_engine_n,
            engine_count,
            exhaust_velocity_m_s,
            dry_mass_kg,
            efficiency,
        })
    }

    pub fn thrust_per_engine_n(&self) -> f64 {
        self.thrust_per_engine_n
    }

    pub fn engine_count(&self) -> u32 {
        self.engine_count
    }

    pub fn exhaust_velocity_m_s(&self) -> f64 {
        self.exhaust_velocity_m_s
    }

    pub fn dry_mass_kg(&self) -> f64 {
        self.dry_mass_kg
    }

    pub fn efficiency(&self) -> f64 {
        self.efficiency
    }

    pub fn total_thrust_n(&self) -> f64 {
        self.thrust_per_engine_n * f64::from(self.engine_count)
    }

    /// Propellant consumed per second at full thrust.
    pub fn mass_flow_rate_kg_s(&self) -> f64 {
        self.total_thrust_n() / self.exhaust_velocity_m_s
    }

    /// Jet power of one engine, `F·v_e / 2`.
    pub fn power_per_engine_w(&self) -> f64 {
        self.thrust_per_engine_n * self.exhaust_velocity_m_s / 2.0
    }

    pub fn total_power_w(&self) -> f64 {
        self.power_per_engine_w() * f64::from(self.engine_count)
    }

    /// Upper bound on power if the whole propellant stream were burned as D-He3.
    pub fn theoretical_power_w(&self) -> f64 {
        self.mass_flow_rate_kg_s() * DHE3_ENERGY_J_KG
    }

    /// Propellant needed for a burn of `burn_time_s` seconds.
    pub fn fuel_mass_for(&self, burn_time_s: f64) -> f64 {
        self.mass_flow_rate_kg_s() * burn_time_s
    }
}
