//! Route tables and travel-time matrices built from brachistochrone metrics.
//!
//! Nothing here computes physics: rows carry the engine output verbatim and the matrix and
//! sorted views only reshape it.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use solar_config::{Catalog, OrbitingBody};
use solar_core::PhysicalConstants;
use solar_core::time::format_days;
use solar_lowthrust::brachistochrone::{KinematicsError, TravelMetrics, compute_metrics};
use solar_lowthrust::relativistic::CruiseError;
use solar_propulsion::DriveError;
use thiserror::Error;
use tracing::debug;

/// Marker for matrix cells without a route (the diagonal, or a pair never computed).
pub const NO_ROUTE: &str = "—";

/// Column names of the route table, in field order.
pub const ROUTE_HEADERS: [&str; 20] = [
    "origin_planet",
    "destination_planet",
    "min_time_days_1_3g",
    "max_time_days_1_3g",
    "median_time_days_1_3g",
    "min_time_days_1g",
    "max_time_days_1g",
    "median_time_days_1g",
    "min_distance_au",
    "max_distance_au",
    "min_distance_km",
    "max_distance_km",
    "min_deltav_kms_1_3g",
    "max_deltav_kms_1_3g",
    "min_deltav_kms_1g",
    "max_deltav_kms_1g",
    "origin_perihelion_au",
    "origin_aphelion_au",
    "destination_perihelion_au",
    "destination_aphelion_au",
];

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("kinematics failed: {0}")]
    Kinematics(#[from] KinematicsError),
    #[error("cruise planning failed: {0}")]
    Cruise(#[from] CruiseError),
    #[error("invalid drive: {0}")]
    Drive(#[from] DriveError),
}

/// The two accelerations every route is evaluated at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acceleration {
    ThirdG,
    OneG,
}

impl Acceleration {
    pub fn km_s2(self, constants: &PhysicalConstants) -> f64 {
        match self {
            Acceleration::ThirdG => constants.third_g_km_s2,
            Acceleration::OneG => constants.g_km_s2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Acceleration::ThirdG => "1/3g",
            Acceleration::OneG => "1g",
        }
    }
}

/// A single route-table value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field<'a> {
    Text(&'a str),
    Number(f64),
}

impl fmt::Display for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Text(s) => f.write_str(s),
            Field::Number(v) => write!(f, "{v}"),
        }
    }
}

/// One unordered body pair evaluated at both accelerations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteRow {
    pub origin: OrbitingBody,
    pub destination: OrbitingBody,
    pub third_g: TravelMetrics,
    pub one_g: TravelMetrics,
    pub min_distance_km: f64,
    pub max_distance_km: f64,
}

impl RouteRow {
    /// Evaluate one route at 1/3 g and 1 g.
    pub fn compute(
        origin: &OrbitingBody,
        destination: &OrbitingBody,
        constants: &PhysicalConstants,
    ) -> Result<Self, ReportError> {
        let third_g = compute_metrics(
            origin,
            destination,
            Acceleration::ThirdG.km_s2(constants),
            constants,
        )?;
        let one_g = compute_metrics(
            origin,
            destination,
            Acceleration::OneG.km_s2(constants),
            constants,
        )?;
        Ok(Self {
            origin: origin.clone(),
            destination: destination.clone(),
            min_distance_km: constants.au_to_km(one_g.min_distance_au),
            max_distance_km: constants.au_to_km(one_g.max_distance_au),
            third_g,
            one_g,
        })
    }

    pub fn metrics(&self, accel: Acceleration) -> &TravelMetrics {
        match accel {
            Acceleration::ThirdG => &self.third_g,
            Acceleration::OneG => &self.one_g,
        }
    }

    /// `"Origin -> Destination"`.
    pub fn route_label(&self) -> String {
        format!("{} -> {}", self.origin.name(), self.destination.name())
    }

    /// Values in [`ROUTE_HEADERS`] order.
    pub fn fields(&self) -> [Field<'_>; 20] {
        use Field::{Number, Text};
        [
            Text(self.origin.name()),
            Text(self.destination.name()),
            Number(self.third_g.min_time_days),
            Number(self.third_g.max_time_days),
            Number(self.third_g.median_time_days),
            Number(self.one_g.min_time_days),
            Number(self.one_g.max_time_days),
            Number(self.one_g.median_time_days),
            Number(self.one_g.min_distance_au),
            Number(self.one_g.max_distance_au),
            Number(self.min_distance_km),
            Number(self.max_distance_km),
            Number(self.third_g.min_delta_v_km_s),
            Number(self.third_g.max_delta_v_km_s),
            Number(self.one_g.min_delta_v_km_s),
            Number(self.one_g.max_delta_v_km_s),
            Number(self.origin.perihelion_au()),
            Number(self.origin.aphelion_au()),
            Number(self.destination.perihelion_au()),
            Number(self.destination.aphelion_au()),
        ]
    }
}

/// Evaluate every unordered catalog pair once, in catalog order.
pub fn build_route_table(
    catalog: &Catalog,
    constants: &PhysicalConstants,
) -> Result<Vec<RouteRow>, ReportError> {
    let rows = catalog
        .pairs()
        .map(|(origin, destination)| RouteRow::compute(origin, destination, constants))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(bodies = catalog.len(), routes = rows.len(), "built route table");
    Ok(rows)
}

/// Stable ascending sort on an arbitrary numeric key. Ties keep their input order.
pub fn sorted_by<F>(rows: &[RouteRow], key: F) -> Vec<&RouteRow>
where
    F: Fn(&RouteRow) -> f64,
{
    let mut sorted: Vec<&RouteRow> = rows.iter().collect();
    sorted.sort_by(|a, b| key(a).total_cmp(&key(b)));
    sorted
}

/// Named sort keys for the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    MinDeltaV,
    MaxDeltaV,
    MinTime,
    MaxTime,
    MedianTime,
    MinDistance,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::MinDeltaV,
        SortKey::MaxDeltaV,
        SortKey::MinTime,
        SortKey::MaxTime,
        SortKey::MedianTime,
        SortKey::MinDistance,
    ];

    /// Kebab-case name, as accepted on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::MinDeltaV => "min-delta-v",
            SortKey::MaxDeltaV => "max-delta-v",
            SortKey::MinTime => "min-time",
            SortKey::MaxTime => "max-time",
            SortKey::MedianTime => "median-time",
            SortKey::MinDistance => "min-distance",
        }
    }

    pub fn value(self, row: &RouteRow, accel: Acceleration) -> f64 {
        let m = row.metrics(accel);
        match self {
            SortKey::MinDeltaV => m.min_delta_v_km_s,
            SortKey::MaxDeltaV => m.max_delta_v_km_s,
            SortKey::MinTime => m.min_time_days,
            SortKey::MaxTime => m.max_time_days,
            SortKey::MedianTime => m.median_time_days,
            SortKey::MinDistance => m.min_distance_au,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort key '{0}'")]
pub struct ParseSortKeyError(pub String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseSortKeyError(s.to_string()))
    }
}

pub fn sorted_by_key(rows: &[RouteRow], key: SortKey, accel: Acceleration) -> Vec<&RouteRow> {
    sorted_by(rows, |row| key.value(row, accel))
}

/// Order-independent key for a pair of body names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PairKey {
    first: String,
    second: String,
}

impl PairKey {
    /// Names compare case-insensitively, matching catalog lookup.
    pub fn new(a: &str, b: &str) -> Self {
        let (a, b) = (a.to_uppercase(), b.to_uppercase());
        let (first, second) = match a.cmp(&b) {
            Ordering::Greater => (b, a),
            _ => (a, b),
        };
        Self { first, second }
    }

    pub fn is_diagonal(&self) -> bool {
        self.first == self.second
    }
}

/// Minimum and maximum transfer time for a pair, in days.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeRange {
    pub min_days: f64,
    pub max_days: f64,
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            format_days(self.min_days),
            format_days(self.max_days)
        )
    }
}

/// Symmetric travel-time matrix laid out in a fixed body order.
#[derive(Debug, Clone, PartialEq)]
pub struct TravelMatrix {
    order: Vec<String>,
    cells: HashMap<PairKey, TimeRange>,
}

impl TravelMatrix {
    /// Collect the time ranges of `rows` at `accel`, laid out in `order`.
    pub fn from_rows<S: AsRef<str>>(order: &[S], rows: &[RouteRow], accel: Acceleration) -> Self {
        let cells = rows
            .iter()
            .map(|row| {
                let m = row.metrics(accel);
                (
                    PairKey::new(row.origin.name(), row.destination.name()),
                    TimeRange {
                        min_days: m.min_time_days,
                        max_days: m.max_time_days,
                    },
                )
            })
            .collect();
        Self {
            order: order.iter().map(|s| s.as_ref().to_string()).collect(),
            cells,
        }
    }

    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// Range for a pair in either direction; `None` on the diagonal or for unknown pairs.
    pub fn get(&self, a: &str, b: &str) -> Option<TimeRange> {
        let key = PairKey::new(a, b);
        if key.is_diagonal() {
            return None;
        }
        self.cells.get(&key).copied()
    }

    /// Rendered cell text, [`NO_ROUTE`] when there is no range.
    pub fn cell(&self, a: &str, b: &str) -> String {
        self.get(a, b)
            .map(|range| range.to_string())
            .unwrap_or_else(|| NO_ROUTE.to_string())
    }

    /// One `(row name, cells)` entry per body, columns in the same order.
    pub fn rows(&self) -> Vec<(&str, Vec<String>)> {
        self.order
            .iter()
            .map(|origin| {
                let cells = self
                    .order
                    .iter()
                    .map(|destination| self.cell(origin, destination))
                    .collect();
                (origin.as_str(), cells)
            })
            .collect()
    }
}
