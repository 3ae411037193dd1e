//! Side-by-side evaluation of one drive under several efficiency scenarios.

use serde::Serialize;
use solar_config::DriveManifest;
use solar_core::PhysicalConstants;
use solar_lowthrust::relativistic::{JourneyResult, plan_journey};
use tracing::debug;

use crate::facade::drive;
use crate::report::ReportError;

/// A scenario label with the journey it produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioOutcome {
    pub label: String,
    pub efficiency: f64,
    pub journey: JourneyResult,
}

impl ScenarioOutcome {
    /// Column heading such as `"0.65% (Current)"`.
    pub fn heading(&self) -> String {
        format!("{}% ({})", percent(self.efficiency), self.label)
    }
}

/// Efficiency as a percentage with trailing zeros trimmed: 0.0065 -> "0.65", 0.2 -> "20".
fn percent(fraction: f64) -> String {
    let text = format!("{:.4}", fraction * 100.0);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Common drive parameters plus one outcome per scenario, in manifest order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriveComparison {
    pub drive_name: String,
    pub target_name: String,
    pub distance_ly: f64,
    pub total_thrust_n: f64,
    pub exhaust_velocity_m_s: f64,
    pub exhaust_velocity_fraction_c: f64,
    pub dry_mass_kg: f64,
    pub scenarios: Vec<ScenarioOutcome>,
}

/// Plan the manifest's target journey once per scenario.
pub fn compare_drive_scenarios(
    manifest: &DriveManifest,
    constants: &PhysicalConstants,
) -> Result<DriveComparison, ReportError> {
    let profile = drive::cruise_profile(manifest);
    let mut scenarios = Vec::with_capacity(manifest.scenarios.len());
    for scenario in &manifest.scenarios {
        let params = drive::from_manifest(manifest, scenario, constants)?;
        let journey = plan_journey(&params, manifest.target.distance_ly, &profile, constants)?;
        scenarios.push(ScenarioOutcome {
            label: scenario.label.clone(),
            efficiency: scenario.efficiency,
            journey,
        });
    }
    debug!(
        drive = %manifest.name,
        target = %manifest.target.name,
        scenarios = scenarios.len(),
        "compared drive scenarios"
    );

    Ok(DriveComparison {
        drive_name: manifest.name.clone(),
        target_name: manifest.target.name.clone(),
        distance_ly: manifest.target.distance_ly,
        total_thrust_n: manifest.total_thrust_n,
        exhaust_velocity_m_s: manifest.exhaust_velocity_fraction_c * constants.c_m_s,
        exhaust_velocity_fraction_c: manifest.exhaust_velocity_fraction_c,
        dry_mass_kg: manifest.dry_mass_kg,
        scenarios,
    })
}

#[cfg(test)]
mod tests {
    use super::percent;

    #[test]
    fn percent_trims_trailing_zeros() {
        assert_eq!(percent(0.0065), "0.65");
        assert_eq!(percent(0.008), "0.8");
        assert_eq!(percent(0.2), "20");
    }
}
