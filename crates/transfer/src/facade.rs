//! Re-exported APIs for consumers of the transfer crate.

pub use crate::comparison::{DriveComparison, ScenarioOutcome, compare_drive_scenarios};
pub use crate::report::{
    Acceleration, Field, NO_ROUTE, PairKey, ParseSortKeyError, ROUTE_HEADERS, ReportError,
    RouteRow, SortKey, TimeRange, TravelMatrix, build_route_table, sorted_by, sorted_by_key,
};
pub use solar_lowthrust::{CruiseProfile, JourneyResult, TravelMetrics};
pub use solar_propulsion::{DriveError, DriveParameters};

pub mod drive {
    use solar_config::{DriveManifest, DriveScenario};
    use solar_core::PhysicalConstants;
    use solar_lowthrust::CruiseProfile;
    use solar_propulsion::{DriveError, DriveParameters};

    /// Convert one manifest scenario into runtime drive parameters.
    pub fn from_manifest(
        manifest: &DriveManifest,
        scenario: &DriveScenario,
        constants: &PhysicalConstants,
    ) -> Result<DriveParameters, DriveError> {
        DriveParameters::new(
            manifest.thrust_per_engine_n(),
            manifest.engine_count,
            manifest.exhaust_velocity_fraction_c * constants.c_m_s,
            manifest.dry_mass_kg,
            scenario.efficiency,
        )
    }

    /// Cruise assumptions carried by the manifest.
    pub fn cruise_profile(manifest: &DriveManifest) -> CruiseProfile {
        CruiseProfile {
            cruise_fraction_c: manifest.cruise_fraction_c,
        }
    }
}
