use std::path::PathBuf;

use clap::Parser;
use clap::builder::{PossibleValuesParser, TypedValueParser};
use solar_travel_estimator::PhysicalConstants;
use solar_travel_estimator::config::{Catalog, load_catalog};
use solar_travel_estimator::export::{self, Artifact, routes as export_routes};
use solar_travel_estimator::logging::init_logging;
use solar_travel_estimator::time::format_days;
use solar_travel_estimator::transfer::{
    Acceleration, RouteRow, SortKey, TravelMatrix, build_route_table, sorted_by_key,
};

/// Brachistochrone travel-time tables between solar-system bodies.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Brachistochrone travel times at 1/3g and 1g (CSV + Markdown)"
)]
struct Cli {
    /// Body catalog: YAML list, TOML file, or directory of TOML files (defaults to built-in)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Directory receiving the exported files (created if missing)
    #[arg(long, default_value = "exports")]
    output_dir: PathBuf,

    /// Sort key for the Markdown route table (1/3g metrics)
    #[arg(long, value_parser = sort_key_parser(), default_value = "min-delta-v")]
    sort: SortKey,

    /// Only evaluate a single route from this body (requires --to)
    #[arg(long, requires = "to")]
    from: Option<String>,

    /// Destination for a single-route query (requires --from)
    #[arg(long, requires = "from")]
    to: Option<String>,

    /// Compute and print without writing any files
    #[arg(long, default_value_t = false)]
    no_export: bool,
}

fn sort_key_parser() -> impl TypedValueParser<Value = SortKey> {
    PossibleValuesParser::new(SortKey::ALL.map(SortKey::as_str))
        .try_map(|name: String| name.parse::<SortKey>())
}

const REPORT_ACCEL: Acceleration = Acceleration::ThirdG;

fn main() -> anyhow::Result<()> {
    init_logging("info");
    let cli = Cli::parse();
    let constants = PhysicalConstants::default();
    let catalog = match &cli.catalog {
        Some(path) => load_catalog(path)?,
        None => Catalog::builtin(),
    };

    if let (Some(from), Some(to)) = (&cli.from, &cli.to) {
        let origin = catalog
            .body(from)
            .ok_or_else(|| anyhow::anyhow!("Body '{}' not found in catalog", from))?;
        let destination = catalog
            .body(to)
            .ok_or_else(|| anyhow::anyhow!("Body '{}' not found in catalog", to))?;
        if origin == destination {
            anyhow::bail!("origin and destination are the same body");
        }
        let row = RouteRow::compute(origin, destination, &constants)?;
        print_route(&row);
        return Ok(());
    }

    let rows = build_route_table(&catalog, &constants)?;
    let sorted = sorted_by_key(&rows, cli.sort, REPORT_ACCEL);
    let matrix = TravelMatrix::from_rows(catalog.names().as_slice(), &rows, REPORT_ACCEL);

    let csv = export_routes::render_csv(&rows)?;
    let markdown = export_routes::render_markdown(&matrix, &sorted, REPORT_ACCEL);

    if cli.no_export {
        print!("{markdown}");
    } else {
        let now = export::now();
        let csv_path =
            export::timestamped_path(&cli.output_dir, "brachistochrone_extended", "csv", now);
        let md_path = export::timestamped_path(&cli.output_dir, "brachistochrone_1_3g", "md", now);
        export::ensure_output_dir(&cli.output_dir)?;
        export::write_artifacts(&[
            Artifact {
                path: csv_path.clone(),
                contents: csv,
            },
            Artifact {
                path: md_path.clone(),
                contents: markdown.into_bytes(),
            },
        ])?;
        println!("CSV data saved to: {}", csv_path.display());
        println!("Markdown data saved to: {}", md_path.display());
    }
    println!("Total routes calculated: {}", rows.len());

    Ok(())
}

fn print_route(row: &RouteRow) {
    println!("=== {} ===", row.route_label());
    println!(
        "Separation     : min = {:.6} AU ({:.0} km), max = {:.6} AU ({:.0} km)",
        row.one_g.min_distance_au, row.min_distance_km, row.one_g.max_distance_au, row.max_distance_km
    );
    for accel in [Acceleration::ThirdG, Acceleration::OneG] {
        let m = row.metrics(accel);
        println!(
            "{:<15}: min = {}, max = {}, median = {}, Δv = {:.2}-{:.2} km/s",
            accel.label(),
            format_days(m.min_time_days),
            format_days(m.max_time_days),
            format_days(m.median_time_days),
            m.min_delta_v_km_s,
            m.max_delta_v_km_s,
        );
    }
}
