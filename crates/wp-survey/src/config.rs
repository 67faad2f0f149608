//! Planner configuration.
//!
//! Defaults describe the GoPro HERO9 Black with overlap given in metres.
//! [`PlannerConfig::from_env`] overrides any of them from the environment:
//!
//! | Variable              | Field                      | Default  |
//! |-----------------------|----------------------------|----------|
//! | `WP_SENSOR_WIDTH_MM`  | `camera.sensor_width_mm`   | `6.17`   |
//! | `WP_SENSOR_HEIGHT_MM` | `camera.sensor_height_mm`  | `4.55`   |
//! | `WP_FOCAL_LENGTH_MM`  | `camera.focal_length_mm`   | `3.0`    |
//! | `WP_OVERLAP_UNIT`     | `overlap_unit`             | `metres` |
//!
//! Missing or unparseable values fall back to the default.

use std::env;

use crate::{CameraProfile, Overlap};

/// How a bare overlap number supplied by a caller is interpreted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OverlapUnit {
    #[default]
    Metres,
    Percent,
}

impl OverlapUnit {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "m" | "metre" | "metres" | "meter" | "meters" => Some(Self::Metres),
            "%" | "pct" | "percent" | "percentage" => Some(Self::Percent),
            _ => None,
        }
    }

    #[inline]
    pub fn overlap(self, value: f64) -> Overlap {
        match self {
            Self::Metres  => Overlap::Metres(value),
            Self::Percent => Overlap::Percent(value),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannerConfig {
    pub camera:       CameraProfile,
    pub overlap_unit: OverlapUnit,
}

impl PlannerConfig {
    pub fn from_env() -> Self {
        let defaults = CameraProfile::default();
        let camera = CameraProfile {
            sensor_width_mm:  env_var_f64("WP_SENSOR_WIDTH_MM", defaults.sensor_width_mm),
            sensor_height_mm: env_var_f64("WP_SENSOR_HEIGHT_MM", defaults.sensor_height_mm),
            focal_length_mm:  env_var_f64("WP_FOCAL_LENGTH_MM", defaults.focal_length_mm),
        };
        let overlap_unit = env::var("WP_OVERLAP_UNIT")
            .ok()
            .and_then(|value| OverlapUnit::parse(&value))
            .unwrap_or_default();

        Self { camera, overlap_unit }
    }
}

fn env_var_f64(key: &str, default: f64) -> f64 {
    env::var(key)
        .ok()
        .and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(default)
}
