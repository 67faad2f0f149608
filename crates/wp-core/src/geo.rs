//! Geographic coordinate type and great-circle utilities.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  Survey passes are tens of
//! metres apart, so single precision (~1 m at the equator) would visibly
//! distort the sweep spacing.

use std::fmt;

use crate::{PlanError, PlanResult};

/// Mean Earth radius in metres (spherical model).
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Tolerance, in degrees, under which two coordinates are the same vertex.
pub const COORD_EPSILON_DEG: f64 = 1e-9;

/// A geographic coordinate in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub latitude:  f64,
    pub longitude: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Check that both components are finite and inside
    /// `[-90, 90] × [-180, 180]`.
    pub fn validate(self) -> PlanResult<Self> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(PlanError::InvalidGeometry(format!(
                "latitude {} outside [-90, 90]",
                self.latitude
            )));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(PlanError::InvalidGeometry(format!(
                "longitude {} outside [-180, 180]",
                self.longitude
            )));
        }
        Ok(self)
    }

    /// Component-wise comparison within `eps` degrees.
    #[inline]
    pub fn approx_eq(self, other: GeoPoint, eps: f64) -> bool {
        (self.latitude - other.latitude).abs() <= eps
            && (self.longitude - other.longitude).abs() <= eps
    }

    /// Haversine great-circle distance in metres.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();

        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }

    /// Project this point `distance_m` metres along `bearing_deg`.
    ///
    /// See [`destination`][crate::geodesy::destination].
    #[inline]
    pub fn moved(self, distance_m: f64, bearing_deg: f64) -> PlanResult<GeoPoint> {
        crate::geodesy::destination(self, distance_m, bearing_deg)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.7}, {:.7})", self.latitude, self.longitude)
    }
}
