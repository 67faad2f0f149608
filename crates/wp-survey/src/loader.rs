//! CSV polygon loader.
//!
//! # CSV format
//!
//! One row per vertex, in ring order.  `lat` / `lon` are accepted as
//! header aliases.
//!
//! ```csv
//! latitude,longitude
//! 23.7800,90.4000
//! 23.7800,90.4100
//! 23.7900,90.4100
//! 23.7900,90.4000
//! ```
//!
//! The ring may be open or closed; the result goes through
//! [`Polygon::new`] validation.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use wp_core::{GeoPoint, PlanError, PlanResult};

use crate::Polygon;

#[derive(Deserialize)]
struct VertexRecord {
    #[serde(alias = "lat")]
    latitude:  f64,
    #[serde(alias = "lon", alias = "lng")]
    longitude: f64,
}

/// Load a survey polygon from a CSV file.
pub fn load_polygon_csv(path: &Path) -> PlanResult<Polygon> {
    let file = std::fs::File::open(path)?;
    load_polygon_reader(file)
}

/// Like [`load_polygon_csv`] but accepts any `Read` source.
pub fn load_polygon_reader<R: Read>(reader: R) -> PlanResult<Polygon> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let vertices = csv_reader
        .deserialize::<VertexRecord>()
        .enumerate()
        .map(|(row, result)| {
            result
                .map(|r| GeoPoint::new(r.latitude, r.longitude))
                .map_err(|e| PlanError::Parse(format!("vertex row {}: {e}", row + 1)))
        })
        .collect::<PlanResult<Vec<_>>>()?;

    Polygon::new(vertices)
}
