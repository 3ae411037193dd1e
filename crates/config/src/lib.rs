//! Configuration models and loaders for the Solar Travel Estimator.
//!
//! Two kinds of input feed the engines: the ordered catalog of orbiting bodies used by the
//! brachistochrone tables, and the drive manifest describing a relativistic cruise study.
//! Both ship with built-in defaults and can be overridden from YAML or TOML files.

use std::collections::HashSet;
use std::fs::File;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error(
        "body '{name}' has an invalid orbit (perihelion {perihelion_au} AU, aphelion {aphelion_au} AU)"
    )]
    InvalidOrbit {
        name: String,
        perihelion_au: f64,
        aphelion_au: f64,
    },
    #[error("body '{0}' appears more than once in the catalog")]
    DuplicateBody(String),
    #[error("body catalog is empty")]
    EmptyCatalog,
    #[error("drive manifest '{0}' lists no efficiency scenarios")]
    EmptyScenarios(String),
}

/// A solar-system body's orbit reduced to its perihelion/aphelion annulus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BodyRecord")]
pub struct OrbitingBody {
    name: String,
    perihelion_au: f64,
    aphelion_au: f64,
}

#[derive(Deserialize)]
struct BodyRecord {
    name: String,
    perihelion_au: f64,
    aphelion_au: f64,
}

impl TryFrom<BodyRecord> for OrbitingBody {
    type Error = ConfigError;

    fn try_from(value: BodyRecord) -> Result<Self, Self::Error> {
        OrbitingBody::new(value.name, value.perihelion_au, value.aphelion_au)
    }
}

impl OrbitingBody {
    /// Build a body, rejecting non-positive or inverted orbits.
    pub fn new(
        name: impl Into<String>,
        perihelion_au: f64,
        aphelion_au: f64,
    ) -> Result<Self, ConfigError> {
        let name = name.into();
        let valid = perihelion_au.is_finite()
            && aphelion_au.is_finite()
            && perihelion_au > 0.0
            && aphelion_au > 0.0
            && perihelion_au <= aphelion_au;
        if !valid {
            return Err(ConfigError::InvalidOrbit {
                name,
                perihelion_au,
                aphelion_au,
            });
        }
        Ok(Self {
            name,
            perihelion_au,
            aphelion_au,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn perihelion_au(&self) -> f64 {
        self.perihelion_au
    }

    pub fn aphelion_au(&self) -> f64 {
        self.aphelion_au
    }

    /// Mean orbital radius, `(perihelion + aphelion) / 2`.
    pub fn mean_radius_au(&self) -> f64 {
        (self.perihelion_au + self.aphelion_au) / 2.0
    }
}

const BUILTIN_BODIES: [(&str, f64, f64); 9] = [
    ("Mercury", 0.307, 0.467),
    ("Venus", 0.718, 0.728),
    ("Earth", 0.983, 1.017),
    ("Mars", 1.381, 1.666),
    ("Ceres", 2.5518, 2.9775),
    ("Jupiter", 4.950, 5.457),
    ("Saturn", 9.041, 10.124),
    ("Uranus", 18.375, 20.063),
    ("Neptune", 29.767, 30.441),
];

/// Ordered catalog of bodies. The order is canonical: it drives route generation and the
/// row/column layout of every travel matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    bodies: Vec<OrbitingBody>,
}

impl Catalog {
    /// The nine-body catalog, Mercury through Neptune.
    pub fn builtin() -> Self {
        let bodies = BUILTIN_BODIES
            .iter()
            .map(|&(name, perihelion_au, aphelion_au)| OrbitingBody {
                name: name.to_string(),
                perihelion_au,
                aphelion_au,
            })
            .collect();
        Self { bodies }
    }

    /// Build a catalog from already-validated bodies, rejecting duplicates (case-insensitive).
    pub fn from_bodies(bodies: Vec<OrbitingBody>) -> Result<Self, ConfigError> {
        if bodies.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        let mut seen = HashSet::new();
        for body in &bodies {
            if !seen.insert(body.name.to_uppercase()) {
                return Err(ConfigError::DuplicateBody(body.name.clone()));
            }
        }
        Ok(Self { bodies })
    }

    pub fn bodies(&self) -> &[OrbitingBody] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Body names in canonical order.
    pub fn names(&self) -> Vec<&str> {
        self.bodies.iter().map(|b| b.name.as_str()).collect()
    }

    /// Case-insensitive lookup.
    pub fn body(&self, name: &str) -> Option<&OrbitingBody> {
        let upper = name.to_uppercase();
        self.bodies.iter().find(|b| b.name.to_uppercase() == upper)
    }

    /// Every unordered pair exactly once: outer loop in catalog order, inner loop over the
    /// bodies that follow it.
    pub fn pairs(&self) -> impl Iterator<Item = (&OrbitingBody, &OrbitingBody)> + '_ {
        self.bodies
            .iter()
            .enumerate()
            .flat_map(move |(i, a)| self.bodies[i + 1..].iter().map(move |b| (a, b)))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// One efficiency scenario evaluated against a drive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriveScenario {
    pub label: String,
    /// Fraction in (0, 1].
    pub efficiency: f64,
}

/// Interstellar destination for a cruise study.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetConfig {
    pub name: String,
    pub distance_ly: f64,
}

/// Drive study manifest: common drive parameters plus the scenarios to compare.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriveManifest {
    pub name: String,
    pub total_thrust_n: f64,
    pub engine_count: u32,
    pub exhaust_velocity_fraction_c: f64,
    pub dry_mass_kg: f64,
    /// Cruise speed as a fraction of c; the Tau Ceti study uses 0.119.
    #[serde(default = "default_cruise_fraction")]
    pub cruise_fraction_c: f64,
    pub target: TargetConfig,
    pub scenarios: Vec<DriveScenario>,
}

fn default_cruise_fraction() -> f64 {
    0.119
}

impl DriveManifest {
    /// The Nauvoo study: 144 MN over eight engines, 0.08 c exhaust, 13 500 t dry, Tau Ceti.
    pub fn nauvoo() -> Self {
        Self {
            name: "Nauvoo".to_string(),
            total_thrust_n: 144.0e6,
            engine_count: 8,
            exhaust_velocity_fraction_c: 0.08,
            dry_mass_kg: 13.5e6,
            cruise_fraction_c: default_cruise_fraction(),
            target: TargetConfig {
                name: "Tau Ceti".to_string(),
                distance_ly: 11.9,
            },
            scenarios: vec![
                DriveScenario {
                    label: "Current".to_string(),
                    efficiency: 0.0065,
                },
                DriveScenario {
                    label: "Improved".to_string(),
                    efficiency: 0.008,
                },
                DriveScenario {
                    label: "Theoretical".to_string(),
                    efficiency: 0.2,
                },
            ],
        }
    }

    /// Thrust carried by each engine.
    pub fn thrust_per_engine_n(&self) -> f64 {
        self.total_thrust_n / f64::from(self.engine_count.max(1))
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.scenarios.is_empty() {
            return Err(ConfigError::EmptyScenarios(self.name));
        }
        Ok(self)
    }
}

impl Default for DriveManifest {
    fn default() -> Self {
        Self::nauvoo()
    }
}

/// Load a body catalog from a YAML list, a single TOML file, or a directory of TOML files.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, ConfigError> {
    let path = path.as_ref();
    let bodies: Vec<OrbitingBody> = load_records(path)?;
    debug!(path = %path.display(), bodies = bodies.len(), "loaded body catalog");
    Catalog::from_bodies(bodies)
}

/// Load a drive manifest from a YAML or TOML file.
pub fn load_drive_manifest<P: AsRef<Path>>(path: P) -> Result<DriveManifest, ConfigError> {
    let path = path.as_ref();
    let manifest: DriveManifest = if is_toml(path) {
        toml::from_str(&std::fs::read_to_string(path)?)?
    } else {
        serde_yaml::from_reader(File::open(path)?)?
    };
    debug!(path = %path.display(), drive = %manifest.name, "loaded drive manifest");
    manifest.validate()
}

#[derive(Deserialize)]
struct TomlBodies {
    bodies: Vec<OrbitingBody>,
}

fn load_records(path: &Path) -> Result<Vec<OrbitingBody>, ConfigError> {
    if path.is_dir() {
        read_dir_records(path)
    } else if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        let parsed: TomlBodies = toml::from_str(&contents)?;
        Ok(parsed.bodies)
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

/// One TOML file per body, read in file-name order. Name files with a numeric prefix
/// (`01_mercury.toml`) to control the canonical ordering.
fn read_dir_records(dir: &Path) -> Result<Vec<OrbitingBody>, ConfigError> {
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_toml(path))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: OrbitingBody = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}

fn is_toml(path: &Path) -> bool {
    path.extension().map(|ext| ext == "toml").unwrap_or(false)
}
