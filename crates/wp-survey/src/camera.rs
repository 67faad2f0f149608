//! Pinhole camera model and ground footprint.
//!
//! ```text
//! fov°      = 2 · atan(sensor / (2 · focal)) · 180/π
//! coverage  = 2 · altitude · tan(fov / 2)
//! ```
//!
//! Applied once with the sensor width (horizontal footprint) and once with
//! the sensor height (vertical footprint).

use wp_core::{PlanError, PlanResult};

/// Fixed sensor / focal-length pair of the survey camera.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CameraProfile {
    pub sensor_width_mm:  f64,
    pub sensor_height_mm: f64,
    pub focal_length_mm:  f64,
}

impl CameraProfile {
    /// GoPro HERO9 Black.
    pub const GOPRO_HERO9: CameraProfile = CameraProfile {
        sensor_width_mm:  6.17,
        sensor_height_mm: 4.55,
        focal_length_mm:  3.0,
    };

    pub fn new(sensor_width_mm: f64, sensor_height_mm: f64, focal_length_mm: f64) -> Self {
        Self { sensor_width_mm, sensor_height_mm, focal_length_mm }
    }

    pub fn validate(&self) -> PlanResult<()> {
        for (name, value) in [
            ("sensor width", self.sensor_width_mm),
            ("sensor height", self.sensor_height_mm),
            ("focal length", self.focal_length_mm),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PlanError::InvalidCamera(format!(
                    "{name} must be finite and positive, got {value} mm"
                )));
            }
        }
        Ok(())
    }

    #[inline]
    pub fn horizontal_fov_deg(&self) -> f64 {
        field_of_view_deg(self.sensor_width_mm, self.focal_length_mm)
    }

    #[inline]
    pub fn vertical_fov_deg(&self) -> f64 {
        field_of_view_deg(self.sensor_height_mm, self.focal_length_mm)
    }
}

impl Default for CameraProfile {
    fn default() -> Self {
        Self::GOPRO_HERO9
    }
}

/// Ground-projected size of one image at a given altitude.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Footprint {
    pub horizontal_m: f64,
    pub vertical_m:   f64,
}

impl Footprint {
    /// Compute the footprint of `camera` flown at `altitude_m`.
    ///
    /// # Errors
    ///
    /// - [`PlanError::InvalidAltitude`] if the altitude is not finite and
    ///   strictly positive.
    /// - [`PlanError::InvalidCamera`] if a camera dimension is not positive.
    pub fn compute(camera: &CameraProfile, altitude_m: f64) -> PlanResult<Self> {
        if !altitude_m.is_finite() || altitude_m <= 0.0 {
            return Err(PlanError::InvalidAltitude(altitude_m));
        }
        camera.validate()?;

        Ok(Self {
            horizontal_m: coverage_m(camera.horizontal_fov_deg(), altitude_m),
            vertical_m:   coverage_m(camera.vertical_fov_deg(), altitude_m),
        })
    }
}

/// Angular field of view in degrees for one sensor dimension.
#[inline]
pub fn field_of_view_deg(sensor_mm: f64, focal_mm: f64) -> f64 {
    2.0 * (sensor_mm / (2.0 * focal_mm)).atan().to_degrees()
}

/// Ground coverage in metres of a `fov_deg` field of view at `altitude_m`.
#[inline]
pub fn coverage_m(fov_deg: f64, altitude_m: f64) -> f64 {
    2.0 * altitude_m * (fov_deg / 2.0).to_radians().tan()
}
