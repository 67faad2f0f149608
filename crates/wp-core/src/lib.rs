//! `wp-core` — foundational types for the coverage waypoint planner.
//!
//! This crate is a dependency of every other `wp-*` crate.  It has no
//! `wp-*` dependencies and a single external one (`thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`geo`]       | `GeoPoint`, haversine distance, `EARTH_RADIUS_M`        |
//! | [`geodesy`]   | `destination`, forward-geodesic point projection        |
//! | [`angle`]     | `Dms`, `decimal_to_dms`, `dms_to_decimal`               |
//! | [`error`]     | `PlanError`, `PlanResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod angle;
pub mod error;
pub mod geo;
pub mod geodesy;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use angle::{Dms, decimal_to_dms, dms_to_decimal};
pub use error::{PlanError, PlanResult};
pub use geo::{COORD_EPSILON_DEG, EARTH_RADIUS_M, GeoPoint};
pub use geodesy::{destination, normalize_lon};
