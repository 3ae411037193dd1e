//! Export helpers for CSV, Markdown, and JSON artifacts.
//!
//! Renderers produce bytes in memory; [`write_artifacts`] then puts every file of a run on
//! disk together, so a failed run leaves no half-written report behind.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O failure while exporting: {0}")]
    Io(#[from] io::Error),
    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// A rendered file waiting to be written.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub path: PathBuf,
    pub contents: Vec<u8>,
}

/// `YYYYMMDD_HHMMSS` stamp used in export filenames.
pub fn timestamp(now: NaiveDateTime) -> String {
    now.format("%Y%m%d_%H%M%S").to_string()
}

/// Current local time, the default stamp for a run.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// `{dir}/{category}_{stamp}.{ext}`. Two runs in the same second collide.
pub fn timestamped_path(dir: &Path, category: &str, ext: &str, now: NaiveDateTime) -> PathBuf {
    dir.join(format!("{category}_{}.{ext}", timestamp(now)))
}

/// Create the output directory if missing. Safe to call repeatedly.
pub fn ensure_output_dir(dir: &Path) -> io::Result<()> {
    if !dir.as_os_str().is_empty() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        ensure_output_dir(parent)?;
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

/// Write every artifact, or none of them.
///
/// Each file is first written next to its target with a `.partial` suffix; only when all
/// of them succeed are they renamed into place. On failure the partial files are removed,
/// along with any target already renamed by this call.
pub fn write_artifacts(artifacts: &[Artifact]) -> Result<(), ExportError> {
    let mut staged: Vec<(PathBuf, &Path)> = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        let partial = partial_path(&artifact.path);
        let result = stage(&partial, &artifact.contents);
        staged.push((partial, artifact.path.as_path()));
        if let Err(err) = result {
            discard(&staged);
            return Err(err.into());
        }
    }
    let mut renamed: Vec<&Path> = Vec::with_capacity(staged.len());
    for (partial, target) in &staged {
        if let Err(err) = fs::rename(partial, target) {
            discard(&staged);
            for done in &renamed {
                let _ = fs::remove_file(done);
            }
            return Err(err.into());
        }
        renamed.push(*target);
    }
    for target in renamed {
        info!(path = %target.display(), "exported");
    }
    Ok(())
}

fn stage(partial: &Path, contents: &[u8]) -> io::Result<()> {
    let mut writer = writer_for_path(partial)?;
    writer.write_all(contents)?;
    writer.flush()
}

fn discard(staged: &[(PathBuf, &Path)]) {
    for (partial, _) in staged {
        let _ = fs::remove_file(partial);
    }
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".partial");
    PathBuf::from(name)
}

/// Round to an integer and group thousands with commas: `1234567.6` -> `"1,234,568"`.
pub fn format_thousands(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        grouped.insert(0, '-');
    }
    grouped
}

pub mod routes {
    //! Brachistochrone route table (CSV) and travel report (Markdown).

    use std::fmt::Write as _;

    use solar_transfer::{Acceleration, ROUTE_HEADERS, RouteRow, TravelMatrix};

    use super::{ExportError, format_thousands};
    use solar_core::time::format_days;

    /// CSV with the route header and one record per row, numbers at full precision so the
    /// file reads back to exactly the values the engine produced.
    pub fn render_csv(rows: &[RouteRow]) -> Result<Vec<u8>, ExportError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(ROUTE_HEADERS)?;
        for row in rows {
            writer.write_record(row.fields().iter().map(|field| field.to_string()))?;
        }
        writer
            .into_inner()
            .map_err(|err| ExportError::Io(err.into_error()))
    }

    /// Markdown report: travel-time matrix followed by the sorted route table.
    pub fn render_markdown(
        matrix: &TravelMatrix,
        sorted: &[&RouteRow],
        accel: Acceleration,
    ) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "## Brachistochrone Travel Times ({})\n", accel.label());
        out.push_str("### Travel Time Matrix\n\n");
        out.push_str(&render_matrix(matrix));
        out.push_str("\n\n### Routes Sorted by Delta-V\n\n");
        out.push_str("| Route | Min Time | Max Time | Min dv | Max dv |\n");
        out.push_str("|--------|-----------|-----------|---------|--------|\n");
        for row in sorted {
            let m = row.metrics(accel);
            let _ = writeln!(
                out,
                "| {} | {} | {} | {} | {} |",
                row.route_label(),
                format_days(m.min_time_days),
                format_days(m.max_time_days),
                format_thousands(m.min_delta_v_km_s),
                format_thousands(m.max_delta_v_km_s),
            );
        }
        out
    }

    fn render_matrix(matrix: &TravelMatrix) -> String {
        let mut out = String::from("*Travel time ranges (min-max)*\n\n");
        let _ = writeln!(out, "| From → To | {} |", matrix.order().join(" | "));
        let _ = writeln!(
            out,
            "|-----------|{}",
            "---------|".repeat(matrix.order().len())
        );
        for (origin, cells) in matrix.rows() {
            let _ = writeln!(out, "| **{origin}** | {} |", cells.join(" | "));
        }
        out
    }
}

pub mod drive {
    //! Drive efficiency comparison (CSV key/value block plus table, JSON sidecar).

    use solar_core::units::{kg_to_tons, n_to_mn};
    use solar_transfer::{DriveComparison, JourneyResult};

    use super::ExportError;

    type Metric = (&'static str, fn(&JourneyResult) -> f64);

    const METRICS: [Metric; 6] = [
        ("Mass Flow Kg S", |j| j.mass_flow_kg_s),
        ("Fuel Mass Tons", |j| j.fuel_mass_tons()),
        ("Power Output W", |j| j.power_output_w),
        ("Theoretical Power W", |j| j.theoretical_power_w),
        ("Total Years", |j| j.total_years()),
        ("Ship Years", |j| j.ship_years()),
    ];

    pub fn render_csv(comparison: &DriveComparison) -> Result<Vec<u8>, ExportError> {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(Vec::new());

        writer.write_record([format!(
            "Efficiency Analysis for {} Drive",
            comparison.drive_name
        )])?;
        writer.write_record([""])?;

        writer.write_record(["Common Parameters"])?;
        writer.write_record(["Parameter", "Value"])?;
        writer.write_record([
            "Total Thrust (MN)".to_string(),
            format!("{:.1}", n_to_mn(comparison.total_thrust_n)),
        ])?;
        writer.write_record([
            "Exhaust Velocity (c)".to_string(),
            format!("{:.3}", comparison.exhaust_velocity_fraction_c),
        ])?;
        writer.write_record([
            "Dry Mass (tons)".to_string(),
            format!("{:.0}", kg_to_tons(comparison.dry_mass_kg)),
        ])?;
        writer.write_record([
            "Target".to_string(),
            format!("{} ({} ly)", comparison.target_name, comparison.distance_ly),
        ])?;
        writer.write_record([""])?;

        writer.write_record(["Efficiency Comparison"])?;
        let header = std::iter::once("Parameter".to_string())
            .chain(comparison.scenarios.iter().map(|s| s.heading()));
        writer.write_record(header)?;
        for (name, metric) in METRICS {
            let record = std::iter::once(name.to_string()).chain(
                comparison
                    .scenarios
                    .iter()
                    .map(|s| format!("{:.1}", metric(&s.journey))),
            );
            writer.write_record(record)?;
        }

        writer
            .into_inner()
            .map_err(|err| ExportError::Io(err.into_error()))
    }

    /// Pretty-printed JSON of the full comparison, SI units throughout.
    pub fn render_json(comparison: &DriveComparison) -> Result<Vec<u8>, ExportError> {
        Ok(serde_json::to_vec_pretty(comparison)?)
    }
}
