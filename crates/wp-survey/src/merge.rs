//! Boustrophedon ("lawnmower") merge of the two sweeps into one path.
//!
//! For each longitude of the longitude sweep, in order, the latitudes of the
//! latitude sweep are emitted forward on even passes and reversed on odd
//! passes:
//!
//! ```text
//!   pass 0   pass 1   pass 2
//!    L3 ┐    ┌ L3      L3
//!    L2 │    │ L2      L2
//!    L1 │    │ L1      L1
//!    L0 └────┘ L0 ─────L0
//! ```
//!
//! Consecutive points across a pass boundary share their latitude, so the
//! aircraft never transits back to the start edge.

use wp_core::{GeoPoint, PlanError, PlanResult};

/// Upper bound on the waypoints of a merged flight path.
pub const MAX_PATH_WAYPOINTS: usize = 1_000_000;

/// The ordered waypoint list handed to the caller.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FlightPath(Vec<GeoPoint>);

impl FlightPath {
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self(points)
    }

    #[inline]
    pub fn points(&self) -> &[GeoPoint] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GeoPoint> {
        self.0.iter()
    }

    /// Sum of great-circle leg lengths in metres.
    pub fn total_length_m(&self) -> f64 {
        self.0.windows(2).map(|w| w[0].distance_m(w[1])).sum()
    }

}

impl<'a> IntoIterator for &'a FlightPath {
    type Item = &'a GeoPoint;
    type IntoIter = std::slice::Iter<'a, GeoPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Interleave the latitude sweep and the longitude sweep.
///
/// The result has `latitude_sweep.len() × longitude_sweep.len()` points.
/// Direction is derived from the pass index, never from comparing
/// coordinates.
///
/// # Errors
///
/// [`PlanError::TooManyWaypoints`] if the product exceeds
/// [`MAX_PATH_WAYPOINTS`].
pub fn merge_boustrophedon(
    latitude_sweep:  &[GeoPoint],
    longitude_sweep: &[GeoPoint],
) -> PlanResult<FlightPath> {
    let total = latitude_sweep
        .len()
        .checked_mul(longitude_sweep.len())
        .filter(|&n| n <= MAX_PATH_WAYPOINTS)
        .ok_or_else(|| PlanError::TooManyWaypoints {
            what:      "flight path",
            requested: latitude_sweep.len() as f64 * longitude_sweep.len() as f64,
            limit:     MAX_PATH_WAYPOINTS,
        })?;

    let latitudes: Vec<f64> = latitude_sweep.iter().map(|p| p.latitude).collect();
    let mut points = Vec::with_capacity(total);

    for (pass, column) in longitude_sweep.iter().enumerate() {
        let lon = column.longitude;
        if pass % 2 == 0 {
            points.extend(latitudes.iter().map(|&lat| GeoPoint::new(lat, lon)));
        } else {
            points.extend(latitudes.iter().rev().map(|&lat| GeoPoint::new(lat, lon)));
        }
    }

    Ok(FlightPath(points))
}
