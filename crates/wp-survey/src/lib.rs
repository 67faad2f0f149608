//! `wp-survey` — aerial-photography coverage planning.
//!
//! Given a polygon, a flight altitude, a camera and an overlap, produces an
//! ordered boustrophedon ("lawnmower") waypoint list whose camera footprints
//! overlap by the requested amount.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`camera`]   | `CameraProfile`, `Footprint`, field-of-view / coverage maths  |
//! | [`polygon`]  | `Polygon`, `BoundingBox`                                      |
//! | [`sweep`]    | `Overlap`, `SweepAxis`, `SweepSpacing`, `generate_sweep`      |
//! | [`merge`]    | `FlightPath`, `merge_boustrophedon`                           |
//! | [`planner`]  | `MissionRequest`, `CoveragePlanner`, `plan_coverage`          |
//! | [`observer`] | `PlanObserver`, `NoopObserver`, `TracingObserver`             |
//! | [`config`]   | `PlannerConfig`, `OverlapUnit`                                |
//! | [`loader`]   | `load_polygon_csv`, `load_polygon_reader`                     |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `parallel` | `CoveragePlanner::plan_batch` runs on Rayon's thread pool. |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.         |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use wp_core::GeoPoint;
//! use wp_survey::{CameraProfile, plan_coverage};
//!
//! let square = [
//!     GeoPoint::new(0.0, 0.0),
//!     GeoPoint::new(0.0, 0.01),
//!     GeoPoint::new(0.01, 0.01),
//!     GeoPoint::new(0.01, 0.0),
//! ];
//! let path = plan_coverage(&square, 50.0, 10.0, CameraProfile::GOPRO_HERO9)?;
//! ```

pub mod camera;
pub mod config;
pub mod loader;
pub mod merge;
pub mod observer;
pub mod planner;
pub mod polygon;
pub mod sweep;


pub use camera::{CameraProfile, Footprint, coverage_m, field_of_view_deg};
pub use config::{OverlapUnit, PlannerConfig};
pub use loader::{load_polygon_csv, load_polygon_reader};
pub use merge::{FlightPath, MAX_PATH_WAYPOINTS, merge_boustrophedon};
pub use observer::{NoopObserver, PlanObserver, TracingObserver};
pub use planner::{CoveragePlanner, MissionRequest, plan_coverage};
pub use polygon::{BoundingBox, MIN_VERTICES, Polygon};
pub use sweep::{MAX_SWEEP_WAYPOINTS, Overlap, SweepAxis, SweepSpacing, generate_sweep};
