//! Forward-geodesic (direct) solution on a spherical Earth.
//!
//! ```text
//! δ    = d / R
//! lat2 = asin( sin(lat1)·cos(δ) + cos(lat1)·sin(δ)·cos(θ) )
//! lon2 = lon1 + atan2( sin(θ)·sin(δ)·cos(lat1), cos(δ) − sin(lat1)·sin(lat2) )
//! ```
//!
//! Inputs and outputs are in degrees; the trigonometry runs in radians.

use crate::{EARTH_RADIUS_M, GeoPoint, PlanError, PlanResult};

/// How far an `asin` argument may drift past ±1 and still be clamped.
const ASIN_CLAMP_SLACK: f64 = 1e-12;

/// Move `point` by `distance_m` metres along the initial bearing
/// `bearing_deg` (clockwise from true north).
///
/// A negative distance moves along the reciprocal bearing.  The resulting
/// longitude is normalised to `[-180, 180]`.
///
/// # Errors
///
/// [`PlanError::NumericDomain`] if any input is non-finite or the `asin`
/// argument leaves `[-1, 1]` by more than rounding drift.
pub fn destination(point: GeoPoint, distance_m: f64, bearing_deg: f64) -> PlanResult<GeoPoint> {
    if !distance_m.is_finite() || !bearing_deg.is_finite() {
        return Err(PlanError::NumericDomain(format!(
            "non-finite move: distance {distance_m} m, bearing {bearing_deg}°"
        )));
    }
    if !point.latitude.is_finite() || !point.longitude.is_finite() {
        return Err(PlanError::NumericDomain(format!("non-finite origin {point}")));
    }

    let delta = distance_m / EARTH_RADIUS_M;
    let theta = bearing_deg.to_radians();
    let lat1 = point.latitude.to_radians();
    let lon1 = point.longitude.to_radians();

    let sin_lat2 = lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * theta.cos();
    let lat2 = clamped_asin(sin_lat2)?;

    let lon2 = lon1
        + (theta.sin() * delta.sin() * lat1.cos())
            .atan2(delta.cos() - lat1.sin() * lat2.sin());

    Ok(GeoPoint::new(lat2.to_degrees(), normalize_lon(lon2.to_degrees())))
}

/// Wrap a longitude in degrees into `[-180, 180]`.
pub fn normalize_lon(lon: f64) -> f64 {
    if (-180.0..=180.0).contains(&lon) {
        return lon;
    }
    let wrapped = (lon + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped == -180.0 && lon > 0.0 { 180.0 } else { wrapped }
}

fn clamped_asin(x: f64) -> PlanResult<f64> {
    if x.abs() <= 1.0 {
        return Ok(x.asin());
    }
    if x.abs() <= 1.0 + ASIN_CLAMP_SLACK {
        return Ok(x.clamp(-1.0, 1.0).asin());
    }
    Err(PlanError::NumericDomain(format!("asin argument {x} outside [-1, 1]")))
}
