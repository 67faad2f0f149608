//! Sweep-line generation along one axis of a bounding box.
//!
//! # Spacing
//!
//! ```text
//! overlap   = overlap distance for this axis (see Overlap)
//! step      = footprint − overlap                       (must be > 0)
//! start     = −(step − |footprint/2 − overlap|)
//! ```
//!
//! Both sweeps start from the bounding box's south-east corner, offset by
//! `start` metres along bearing 0° and then along bearing 270° so the first
//! pass is centred on the area rather than on its edge.
//!
//! | Axis        | Footprint  | Step bearing | Boundary                                   |
//! |-------------|------------|--------------|--------------------------------------------|
//! | `Longitude` | horizontal | 270° (west)  | `min_lon` moved one step further west      |
//! | `Latitude`  | vertical   | 0° (north)   | `max_lat` moved one step further north     |
//!
//! The extra step past the box edge keeps the last pass's footprint over the
//! boundary.  The number of waypoints is derived in closed form from
//! `span ÷ step_deg`, so termination never hinges on comparing recomputed
//! coordinates.

use std::fmt;

use wp_core::{GeoPoint, PlanError, PlanResult, normalize_lon};

use crate::{BoundingBox, Footprint};

const BEARING_NORTH: f64 = 0.0;
const BEARING_WEST: f64 = 270.0;

/// Slack applied to `span / step` before rounding to a waypoint count.
const COUNT_EPSILON: f64 = 1e-9;

/// Upper bound on the waypoints of a single sweep.
pub const MAX_SWEEP_WAYPOINTS: usize = 100_000;

// ── Overlap ───────────────────────────────────────────────────────────────────

/// How much consecutive footprints overlap.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Overlap {
    /// A fixed ground distance in metres, independent of the footprint.
    Metres(f64),
    /// A percentage of the footprint on each axis, in `[0, 100)`.
    Percent(f64),
}

impl Overlap {
    /// Overlap distance in metres for a footprint dimension of `footprint_m`.
    pub fn distance_m(self, footprint_m: f64) -> PlanResult<f64> {
        match self {
            Overlap::Metres(m) if m.is_finite() && m >= 0.0 => Ok(m),
            Overlap::Percent(p) if p.is_finite() && (0.0..100.0).contains(&p) => {
                Ok(footprint_m * p / 100.0)
            }
            Overlap::Metres(m) => Err(PlanError::InvalidOverlap { footprint_m, overlap_m: m }),
            Overlap::Percent(p) => Err(PlanError::InvalidOverlap {
                footprint_m,
                overlap_m: footprint_m * p / 100.0,
            }),
        }
    }
}

// ── SweepAxis ─────────────────────────────────────────────────────────────────

/// Which coordinate a sweep steps along.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SweepAxis {
    /// Steps north; its latitudes become the rows of the flight path.
    Latitude,
    /// Steps west; its longitudes become the passes of the flight path.
    Longitude,
}

impl SweepAxis {
    /// The footprint dimension that spaces this axis.
    #[inline]
    pub fn footprint_m(self, footprint: &Footprint) -> f64 {
        match self {
            SweepAxis::Latitude  => footprint.vertical_m,
            SweepAxis::Longitude => footprint.horizontal_m,
        }
    }

    #[inline]
    pub fn bearing_deg(self) -> f64 {
        match self {
            SweepAxis::Latitude  => BEARING_NORTH,
            SweepAxis::Longitude => BEARING_WEST,
        }
    }
}

impl fmt::Display for SweepAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepAxis::Latitude  => write!(f, "latitude"),
            SweepAxis::Longitude => write!(f, "longitude"),
        }
    }
}

// ── SweepSpacing ──────────────────────────────────────────────────────────────

/// Overlap-derived distances for one sweep axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SweepSpacing {
    pub footprint_m:    f64,
    pub overlap_m:      f64,
    /// Distance between consecutive waypoints.
    pub step_m:         f64,
    /// Offset applied to the start corner along 0° and then 270°.
    pub start_offset_m: f64,
}

impl SweepSpacing {
    /// # Errors
    ///
    /// [`PlanError::InvalidOverlap`] if the overlap is invalid or leaves a
    /// step of zero or less.
    pub fn new(footprint_m: f64, overlap: Overlap) -> PlanResult<Self> {
        let overlap_m = overlap.distance_m(footprint_m)?;
        let step_m = footprint_m - overlap_m;
        if !step_m.is_finite() || step_m <= 0.0 {
            return Err(PlanError::InvalidOverlap { footprint_m, overlap_m });
        }
        let start_offset_m = -(step_m - (footprint_m / 2.0 - overlap_m).abs());

        Ok(Self { footprint_m, overlap_m, step_m, start_offset_m })
    }

    pub fn for_axis(axis: SweepAxis, footprint: &Footprint, overlap: Overlap) -> PlanResult<Self> {
        Self::new(axis.footprint_m(footprint), overlap)
    }
}

// ── Generation ────────────────────────────────────────────────────────────────

/// Generate the waypoints of one sweep across `bbox`.
///
/// Always returns at least one waypoint.
///
/// # Errors
///
/// [`PlanError::TooManyWaypoints`] if the spacing would need more than
/// [`MAX_SWEEP_WAYPOINTS`] points; nothing is allocated in that case.
pub fn generate_sweep(
    bbox:    &BoundingBox,
    spacing: &SweepSpacing,
    axis:    SweepAxis,
) -> PlanResult<Vec<GeoPoint>> {
    let start = sweep_start(bbox, spacing)?;
    let first_step = start.moved(spacing.step_m, axis.bearing_deg())?;

    let (span_deg, step_deg) = match axis {
        SweepAxis::Longitude => {
            let boundary = GeoPoint::new(bbox.min_lat, bbox.min_lon)
                .moved(spacing.step_m, BEARING_WEST)?
                .longitude;
            (
                normalize_lon(start.longitude - boundary),
                normalize_lon(start.longitude - first_step.longitude),
            )
        }
        SweepAxis::Latitude => {
            let boundary = GeoPoint::new(bbox.max_lat, bbox.max_lon)
                .moved(spacing.step_m, BEARING_NORTH)?
                .latitude;
            (boundary - start.latitude, first_step.latitude - start.latitude)
        }
    };

    if step_deg.is_nan() || step_deg <= 0.0 {
        return Err(PlanError::NumericDomain(format!(
            "{axis} sweep step of {} m does not advance (Δ = {step_deg}°)",
            spacing.step_m
        )));
    }

    let count = waypoint_count(axis, span_deg, step_deg)?;

    let mut points = Vec::with_capacity(count);
    let mut current = start;
    points.push(current);
    for _ in 1..count {
        current = current.moved(spacing.step_m, axis.bearing_deg())?;
        points.push(current);
    }
    Ok(points)
}

/// South-east corner shifted by the start offset, north then west.
fn sweep_start(bbox: &BoundingBox, spacing: &SweepSpacing) -> PlanResult<GeoPoint> {
    bbox.south_east()
        .moved(spacing.start_offset_m, BEARING_NORTH)?
        .moved(spacing.start_offset_m, BEARING_WEST)
}

/// Number of waypoints strictly past the boundary (longitude, `current >
/// boundary`) or up to and including it (latitude, `current <= boundary`).
fn waypoint_count(axis: SweepAxis, span_deg: f64, step_deg: f64) -> PlanResult<usize> {
    let ratio = span_deg / step_deg;
    let count = match axis {
        SweepAxis::Longitude => (ratio - COUNT_EPSILON).ceil(),
        SweepAxis::Latitude  => (ratio + COUNT_EPSILON).floor() + 1.0,
    };
    if count > MAX_SWEEP_WAYPOINTS as f64 {
        let what = match axis {
            SweepAxis::Latitude  => "latitude sweep",
            SweepAxis::Longitude => "longitude sweep",
        };
        return Err(PlanError::TooManyWaypoints {
            what,
            requested: count,
            limit: MAX_SWEEP_WAYPOINTS,
        });
    }
    Ok(if count >= 1.0 { count as usize } else { 1 })
}
