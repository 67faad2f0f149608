//! Coverage mission planner: the composed entry point.
//!
//! ```text
//! polygon ─▶ BoundingBox ─┐
//! altitude, camera ─▶ Footprint ─┤
//!                                ├─▶ latitude sweep  ─┐
//!                 overlap ───────┤                    ├─▶ boustrophedon ─▶ FlightPath
//!                                └─▶ longitude sweep ─┘
//! ```
//!
//! Each call derives its boundaries and spacing locally from immutable
//! inputs, so missions are independent and may be planned concurrently.

use wp_core::{GeoPoint, PlanResult};

use crate::{
    BoundingBox, CameraProfile, FlightPath, Footprint, NoopObserver, Overlap, PlanObserver,
    PlannerConfig, Polygon, SweepAxis, SweepSpacing, generate_sweep, merge_boustrophedon,
};

/// One area to survey.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MissionRequest {
    pub polygon:    Polygon,
    pub altitude_m: f64,
    pub overlap:    Overlap,
}

impl MissionRequest {
    /// Validate the polygon and bundle it with the flight parameters.
    ///
    /// Altitude and overlap are validated when the mission is planned.
    pub fn new(vertices: Vec<GeoPoint>, altitude_m: f64, overlap: Overlap) -> PlanResult<Self> {
        Ok(Self { polygon: Polygon::new(vertices)?, altitude_m, overlap })
    }
}

/// Plans boustrophedon coverage paths for a fixed camera.
#[derive(Clone, Debug, Default)]
pub struct CoveragePlanner {
    config: PlannerConfig,
}

impl CoveragePlanner {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn with_camera(camera: CameraProfile) -> Self {
        Self::new(PlannerConfig { camera, ..PlannerConfig::default() })
    }

    #[inline]
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Build a request from a bare overlap number, read in the configured
    /// [`OverlapUnit`][crate::OverlapUnit].
    pub fn request(
        &self,
        vertices:   Vec<GeoPoint>,
        altitude_m: f64,
        overlap:    f64,
    ) -> PlanResult<MissionRequest> {
        MissionRequest::new(vertices, altitude_m, self.config.overlap_unit.overlap(overlap))
    }

    /// Plan one mission, reporting each stage to `observer`.
    ///
    /// On failure the error is passed to [`PlanObserver::on_error`] and then
    /// returned; an empty path is never substituted for an error.
    pub fn plan<O: PlanObserver + ?Sized>(
        &self,
        request:  &MissionRequest,
        observer: &mut O,
    ) -> PlanResult<FlightPath> {
        let result = self.plan_stages(request, observer);
        if let Err(e) = &result {
            observer.on_error(e);
        }
        result
    }

    fn plan_stages<O: PlanObserver + ?Sized>(
        &self,
        request:  &MissionRequest,
        observer: &mut O,
    ) -> PlanResult<FlightPath> {
        let bbox = BoundingBox::from_polygon(&request.polygon);
        observer.on_bounding_box(&bbox);

        let footprint = Footprint::compute(&self.config.camera, request.altitude_m)?;
        observer.on_footprint(&footprint);

        // Validate both spacings before generating either sweep.
        let lat_spacing = SweepSpacing::for_axis(SweepAxis::Latitude, &footprint, request.overlap)?;
        let lon_spacing = SweepSpacing::for_axis(SweepAxis::Longitude, &footprint, request.overlap)?;

        let rows = generate_sweep(&bbox, &lat_spacing, SweepAxis::Latitude)?;
        observer.on_sweep(SweepAxis::Latitude, &lat_spacing, &rows);

        let passes = generate_sweep(&bbox, &lon_spacing, SweepAxis::Longitude)?;
        observer.on_sweep(SweepAxis::Longitude, &lon_spacing, &passes);

        let path = merge_boustrophedon(&rows, &passes)?;
        observer.on_path(&path);
        Ok(path)
    }

    /// Plan every request independently.
    ///
    /// Results are returned in request order.  With the `parallel` Cargo
    /// feature the missions run on Rayon's thread pool.
    pub fn plan_batch(&self, requests: &[MissionRequest]) -> Vec<PlanResult<FlightPath>> {
        #[cfg(not(feature = "parallel"))]
        {
            requests
                .iter()
                .map(|request| self.plan(request, &mut NoopObserver))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            requests
                .par_iter()
                .map(|request| self.plan(request, &mut NoopObserver))
                .collect()
        }
    }
}

/// Plan a coverage path over `polygon` with `overlap_m` metres of overlap.
///
/// Convenience wrapper around [`CoveragePlanner::plan`] with no observer.
pub fn plan_coverage(
    polygon:    &[GeoPoint],
    altitude_m: f64,
    overlap_m:  f64,
    camera:     CameraProfile,
) -> PlanResult<FlightPath> {
    let request = MissionRequest::new(polygon.to_vec(), altitude_m, Overlap::Metres(overlap_m))?;
    CoveragePlanner::with_camera(camera).plan(&request, &mut NoopObserver)
}
