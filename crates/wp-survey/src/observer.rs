//! Planner observer trait for logging and diagnostics.
//!
//! The planner itself never touches process-wide logging state: callers pass
//! an observer into [`CoveragePlanner::plan`][crate::CoveragePlanner::plan]
//! and decide what, if anything, is recorded.

use wp_core::{GeoPoint, PlanError};

use crate::{BoundingBox, FlightPath, Footprint, SweepAxis, SweepSpacing};

/// Callbacks invoked by the planner at each stage of a mission.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — pass counter
///
/// ```rust,ignore
/// struct PassCounter { passes: usize }
///
/// impl PlanObserver for PassCounter {
///     fn on_sweep(&mut self, axis: SweepAxis, _: &SweepSpacing, points: &[GeoPoint]) {
///         if axis == SweepAxis::Longitude {
///             self.passes = points.len();
///         }
///     }
/// }
/// ```
pub trait PlanObserver {
    fn on_bounding_box(&mut self, _bbox: &BoundingBox) {}

    fn on_footprint(&mut self, _footprint: &Footprint) {}

    /// Called once per axis after its waypoints have been generated.
    fn on_sweep(&mut self, _axis: SweepAxis, _spacing: &SweepSpacing, _points: &[GeoPoint]) {}

    /// Called with the merged path just before it is returned.
    fn on_path(&mut self, _path: &FlightPath) {}

    /// Called when planning fails, before the error is returned.
    fn on_error(&mut self, _error: &PlanError) {}
}

/// A [`PlanObserver`] that does nothing.
pub struct NoopObserver;

impl PlanObserver for NoopObserver {}

/// A [`PlanObserver`] that emits structured `tracing` events.
///
/// Intermediate stages log at `debug`, the finished path at `info`, and
/// failures at `warn`.
#[derive(Clone, Debug, Default)]
pub struct TracingObserver {
    mission: Option<String>,
}

impl TracingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag every event with a mission label.
    pub fn for_mission(label: impl Into<String>) -> Self {
        Self { mission: Some(label.into()) }
    }

    fn mission(&self) -> &str {
        self.mission.as_deref().unwrap_or("-")
    }
}

impl PlanObserver for TracingObserver {
    fn on_bounding_box(&mut self, bbox: &BoundingBox) {
        tracing::debug!(
            mission = %self.mission(),
            min_lat = bbox.min_lat,
            max_lat = bbox.max_lat,
            min_lon = bbox.min_lon,
            max_lon = bbox.max_lon,
            "bounding box generated"
        );
    }

    fn on_footprint(&mut self, footprint: &Footprint) {
        tracing::debug!(
            mission = %self.mission(),
            horizontal_m = footprint.horizontal_m,
            vertical_m = footprint.vertical_m,
            "camera footprint computed"
        );
    }

    fn on_sweep(&mut self, axis: SweepAxis, spacing: &SweepSpacing, points: &[GeoPoint]) {
        tracing::debug!(
            mission = %self.mission(),
            axis = %axis,
            step_m = spacing.step_m,
            overlap_m = spacing.overlap_m,
            waypoints = points.len(),
            "sweep generated"
        );
    }

    fn on_path(&mut self, path: &FlightPath) {
        tracing::info!(
            mission = %self.mission(),
            waypoints = path.len(),
            length_m = path.total_length_m(),
            "flight path planned"
        );
    }

    fn on_error(&mut self, error: &PlanError) {
        tracing::warn!(mission = %self.mission(), error = %error, "coverage planning failed");
    }
}
