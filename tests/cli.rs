use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

fn exported(dir: &Path, prefix: &str, ext: &str) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .expect("output dir")
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
            name.starts_with(prefix) && name.ends_with(&format!(".{ext}"))
        })
        .collect();
    files.sort();
    files
}

#[test]
fn brachistochrone_exports_csv_and_markdown() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("exports");

    Command::cargo_bin("brachistochrone")
        .expect("brachistochrone bin")
        .args(["--output-dir", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total routes calculated: 36"))
        .stdout(predicate::str::contains("CSV data saved to:"));

    let csvs = exported(&out, "brachistochrone_extended_", "csv");
    let mds = exported(&out, "brachistochrone_1_3g_", "md");
    assert_eq!(csvs.len(), 1);
    assert_eq!(mds.len(), 1);

    let stem = csvs[0].file_stem().unwrap().to_str().unwrap();
    let stamp = stem.trim_start_matches("brachistochrone_extended_");
    assert_eq!(stamp.len(), "YYYYMMDD_HHMMSS".len());
    assert_eq!(stamp.as_bytes()[8], b'_');

    let mut reader = csv::Reader::from_path(&csvs[0]).expect("csv");
    assert_eq!(reader.records().count(), 36);
    let markdown = fs::read_to_string(&mds[0]).expect("markdown");
    assert!(markdown.contains("### Travel Time Matrix"));
}

#[test]
fn brachistochrone_single_route_prints_without_exporting() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("exports");

    Command::cargo_bin("brachistochrone")
        .expect("brachistochrone bin")
        .args(["--from", "earth", "--to", "MARS"])
        .args(["--output-dir", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Earth -> Mars"))
        .stdout(predicate::str::contains("1g"));
    assert!(!out.exists());
}

#[test]
fn brachistochrone_rejects_unknown_body() {
    Command::cargo_bin("brachistochrone")
        .expect("brachistochrone bin")
        .args(["--from", "Vulcan", "--to", "Mars", "--no-export"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Vulcan"));
}

#[test]
fn brachistochrone_sorts_by_requested_key() {
    Command::cargo_bin("brachistochrone")
        .expect("brachistochrone bin")
        .args(["--sort", "max-time", "--no-export"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total routes calculated: 36"));

    Command::cargo_bin("brachistochrone")
        .expect("brachistochrone bin")
        .args(["--sort", "fastest", "--no-export"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("min-delta-v"));
}

#[test]
fn brachistochrone_reads_catalog_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let catalog = dir.path().join("bodies.yaml");
    fs::write(
        &catalog,
        "- name: Earth\n  perihelion_au: 0.983\n  aphelion_au: 1.017\n- name: Mars\n  perihelion_au: 1.381\n  aphelion_au: 1.666\n- name: Ceres\n  perihelion_au: 2.5518\n  aphelion_au: 2.9775\n",
    )
    .unwrap();

    Command::cargo_bin("brachistochrone")
        .expect("brachistochrone bin")
        .args(["--catalog", catalog.to_str().unwrap(), "--no-export"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| From → To | Earth | Mars | Ceres |"))
        .stdout(predicate::str::contains("Total routes calculated: 3"));
}

#[test]
fn epstein_exports_csv_and_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("exports");

    Command::cargo_bin("epstein")
        .expect("epstein bin")
        .args(["--output-dir", out.to_str().unwrap(), "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nauvoo Drive Efficiency Analysis"))
        .stdout(predicate::str::contains("Journey time to Tau Ceti:"))
        .stdout(predicate::str::contains("Earth time: 100.1 years"));

    assert_eq!(exported(&out, "nauvoo_efficiency_", "csv").len(), 1);
    assert_eq!(exported(&out, "nauvoo_efficiency_", "json").len(), 1);
}

#[test]
fn epstein_rejects_superluminal_manifest() {
    let dir = tempfile::tempdir().expect("tempdir");
    let manifest = dir.path().join("fast.toml");
    fs::write(
        &manifest,
        r#"
name = "Fast"
total_thrust_n = 1.0e6
engine_count = 1
exhaust_velocity_fraction_c = 0.1
dry_mass_kg = 1.0e5
cruise_fraction_c = 1.0

[target]
name = "Proxima"
distance_ly = 4.2465

[[scenarios]]
label = "Only"
efficiency = 0.5
"#,
    )
    .unwrap();

    Command::cargo_bin("epstein")
        .expect("epstein bin")
        .args(["--manifest", manifest.to_str().unwrap(), "--no-export"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cruise velocity"));
}
