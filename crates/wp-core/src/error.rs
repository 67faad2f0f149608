//! Planner error type.
//!
//! Every failure the planning core can detect is reported synchronously as
//! one of these variants.  Nothing is swallowed and turned into an empty
//! path: a caller can always tell "legitimately empty" from "failed".

use thiserror::Error;

/// The top-level error type for `wp-core` and the crates built on it.
#[derive(Debug, Error)]
pub enum PlanError {
    /// Too few polygon vertices, or a vertex with a missing / out-of-range
    /// coordinate.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// The overlap consumes the whole footprint (or more), so a sweep would
    /// never advance toward its boundary.
    #[error("invalid overlap: {overlap_m} m overlap on a {footprint_m} m footprint leaves no forward step")]
    InvalidOverlap { footprint_m: f64, overlap_m: f64 },

    /// The spacing is valid but would produce more waypoints than a mission
    /// may hold.
    #[error("{what} would need {requested} waypoints, limit is {limit}")]
    TooManyWaypoints { what: &'static str, requested: f64, limit: usize },

    #[error("invalid altitude {0} m: must be finite and greater than zero")]
    InvalidAltitude(f64),

    #[error("invalid camera profile: {0}")]
    InvalidCamera(String),

    /// A trigonometric argument left its domain by more than rounding drift.
    #[error("numeric domain error: {0}")]
    NumericDomain(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `wp-*` crates.
pub type PlanResult<T> = Result<T, PlanError>;
