//! Core units, constants, and shared primitives for the Solar Travel Estimator workspace.

/// Physical constants. Units are stated per constant; kinematics in the brachistochrone
/// engine run in km and km/s², the relativistic engine in SI.
pub mod constants {
    /// One standard gravity expressed in km/s², as used by the brachistochrone tables.
    pub const G_KM_S2: f64 = 0.0098;
    /// One third of a standard gravity in km/s².
    pub const THIRD_G_KM_S2: f64 = 0.003_266_67;
    /// Standard gravity at Earth's surface (m/s²).
    pub const G0: f64 = 9.80665;
    /// Kilometres per astronomical unit (rounded table value).
    pub const AU_KM: f64 = 1.496e8;
    /// Speed of light in km/s.
    pub const SPEED_OF_LIGHT_KM_S: f64 = 299_792.458;
    /// Speed of light in m/s.
    pub const SPEED_OF_LIGHT_M_S: f64 = 299_792_458.0;
    /// Metres per light-year.
    pub const LIGHT_YEAR_M: f64 = 9.461e15;
    /// Specific energy released by D-He3 fusion (J/kg).
    pub const DHE3_ENERGY_J_KG: f64 = 3.52e14;
    /// Seconds per day.
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
    /// Days per Julian year.
    pub const DAYS_PER_YEAR: f64 = 365.25;
    /// Seconds per Julian year.
    pub const SECONDS_PER_YEAR: f64 = DAYS_PER_YEAR * SECONDS_PER_DAY;
}

/// Immutable bundle of the constants every calculation needs.
///
/// Built once at start-up and handed to the engines by reference. The field values default
/// to the tables in [`constants`]; tests may construct variants to check sensitivity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    /// 1 g in km/s².
    pub g_km_s2: f64,
    /// 1/3 g in km/s².
    pub third_g_km_s2: f64,
    /// Kilometres per AU.
    pub au_km: f64,
    /// Speed of light in km/s.
    pub c_km_s: f64,
    /// Speed of light in m/s.
    pub c_m_s: f64,
    /// Metres per light-year.
    pub light_year_m: f64,
    /// D-He3 specific energy in J/kg.
    pub fusion_energy_j_kg: f64,
}

impl PhysicalConstants {
    /// The standard table used by every CLI.
    pub const STANDARD: PhysicalConstants = PhysicalConstants {
        g_km_s2: constants::G_KM_S2,
        third_g_km_s2: constants::THIRD_G_KM_S2,
        au_km: constants::AU_KM,
        c_km_s: constants::SPEED_OF_LIGHT_KM_S,
        c_m_s: constants::SPEED_OF_LIGHT_M_S,
        light_year_m: constants::LIGHT_YEAR_M,
        fusion_energy_j_kg: constants::DHE3_ENERGY_J_KG,
    };

    /// Convert astronomical units to kilometres.
    #[inline]
    pub fn au_to_km(&self, au: f64) -> f64 {
        au * self.au_km
    }

    /// Convert light-years to metres.
    #[inline]
    pub fn ly_to_m(&self, ly: f64) -> f64 {
        ly * self.light_year_m
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Basic unit conversion helpers.
pub mod units {
    /// Convert kilograms to metric tons.
    #[inline]
    pub fn kg_to_tons(v: f64) -> f64 {
        v / 1_000.0
    }

    /// Convert newtons to meganewtons.
    #[inline]
    pub fn n_to_mn(v: f64) -> f64 {
        v / 1.0e6
    }

    /// Format a power figure with a PW/TW/GW suffix.
    pub fn format_power(watts: f64) -> String {
        if watts >= 1e15 {
            format!("{:.1} PW", watts / 1e15)
        } else if watts >= 1e12 {
            format!("{:.1} TW", watts / 1e12)
        } else {
            format!("{:.1} GW", watts / 1e9)
        }
    }
}

/// Lightweight time utilities shared across crates.
pub mod time {
    use super::constants::{SECONDS_PER_DAY, SECONDS_PER_YEAR};

    /// Convert seconds to days.
    #[inline]
    pub fn seconds_to_days(seconds: f64) -> f64 {
        seconds / SECONDS_PER_DAY
    }

    /// Convert seconds to Julian years.
    #[inline]
    pub fn seconds_to_years(seconds: f64) -> f64 {
        seconds / SECONDS_PER_YEAR
    }

    /// Split fractional days into whole days and whole hours (both truncated).
    pub fn days_to_dh(days: f64) -> (i64, i64) {
        let total_hours = days.max(0.0) * 24.0;
        let d = (total_hours / 24.0).floor() as i64;
        let h = (total_hours % 24.0).floor() as i64;
        (d, h)
    }

    /// Render fractional days as `"{d}d {h}h"`.
    pub fn format_days(days: f64) -> String {
        let (d, h) = days_to_dh(days);
        format!("{d}d {h}h")
    }
}
