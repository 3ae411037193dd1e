use std::path::PathBuf;

use clap::Parser;
use solar_travel_estimator::PhysicalConstants;
use solar_travel_estimator::config::{DriveManifest, load_drive_manifest};
use solar_travel_estimator::export::{self, Artifact, drive as export_drive};
use solar_travel_estimator::logging::init_logging;
use solar_travel_estimator::transfer::compare_drive_scenarios;
use solar_travel_estimator::units::format_power;

/// Relativistic drive efficiency analysis for an interstellar cruise.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Relativistic constant-thrust cruise across efficiency scenarios"
)]
struct Cli {
    /// Drive manifest (YAML or TOML); defaults to the built-in Nauvoo / Tau Ceti study
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Override the target distance in light-years
    #[arg(long)]
    distance_ly: Option<f64>,

    /// Directory receiving the exported files (created if missing)
    #[arg(long, default_value = "exports")]
    output_dir: PathBuf,

    /// Also write a JSON sidecar with the full results
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Compute and print without writing any files
    #[arg(long, default_value_t = false)]
    no_export: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging("info");
    let cli = Cli::parse();
    let constants = PhysicalConstants::default();
    let mut manifest = match &cli.manifest {
        Some(path) => load_drive_manifest(path)?,
        None => DriveManifest::nauvoo(),
    };
    if let Some(distance) = cli.distance_ly {
        manifest.target.distance_ly = distance;
    }

    let comparison = compare_drive_scenarios(&manifest, &constants)?;

    let title = format!("{} Drive Efficiency Analysis", comparison.drive_name);
    println!("\n{title}");
    println!("{}", "=".repeat(title.chars().count()));
    for outcome in &comparison.scenarios {
        let journey = &outcome.journey;
        println!("\nEfficiency: {:.1}% ({})", outcome.efficiency * 100.0, outcome.label);
        println!("Mass flow rate: {:.1} kg/s", journey.mass_flow_kg_s);
        println!("Total fuel mass: {:.0} tons", journey.fuel_mass_tons());
        println!("Mass ratio: {:.3}", journey.mass_ratio);
        println!("Power output: {}", format_power(journey.power_output_w));
        println!(
            "Acceleration phase: {:.1} days at {:.2} m/s²",
            journey.acceleration_days(),
            journey.initial_acceleration_m_s2
        );
        println!("Journey time to {}:", comparison.target_name);
        println!("  Earth time: {:.1} years", journey.total_years());
        println!("  Ship time: {:.1} years", journey.ship_years());
    }

    if cli.no_export {
        return Ok(());
    }

    let category = format!("{}_efficiency", comparison.drive_name.to_lowercase());
    let now = export::now();
    let mut artifacts = vec![Artifact {
        path: export::timestamped_path(&cli.output_dir, &category, "csv", now),
        contents: export_drive::render_csv(&comparison)?,
    }];
    if cli.json {
        artifacts.push(Artifact {
            path: export::timestamped_path(&cli.output_dir, &category, "json", now),
            contents: export_drive::render_json(&comparison)?,
        });
    }
    export::ensure_output_dir(&cli.output_dir)?;
    export::write_artifacts(&artifacts)?;
    for artifact in &artifacts {
        println!("\nResults saved to {}", artifact.path.display());
    }

    Ok(())
}
