//! square — plans the 0.01° equatorial square survey end to end.
//!
//! Flies the HERO9 (or the camera from `WP_*` environment variables) at
//! 50 m with 10 m overlap and writes the path to `./output` as CSV and JSON.
//! Pass a `latitude,longitude` CSV path as the first argument to survey a
//! different polygon.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use wp_core::{GeoPoint, decimal_to_dms};
use wp_output::{CsvWriter, PathWriter};
use wp_survey::{CoveragePlanner, PlannerConfig, TracingObserver, load_polygon_csv};

// ── Constants ─────────────────────────────────────────────────────────────────

const ALTITUDE_M: f64 = 50.0;
const OVERLAP:    f64 = 10.0; // in PlannerConfig::overlap_unit
const OUTPUT_DIR: &str = "output";

fn square() -> Vec<GeoPoint> {
    vec![
        GeoPoint::new(0.0, 0.0),
        GeoPoint::new(0.0, 0.01),
        GeoPoint::new(0.01, 0.01),
        GeoPoint::new(0.01, 0.0),
    ]
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let level = std::env::var("WP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    let config = PlannerConfig::from_env();
    tracing::info!(
        sensor_width_mm = config.camera.sensor_width_mm,
        sensor_height_mm = config.camera.sensor_height_mm,
        focal_length_mm = config.camera.focal_length_mm,
        overlap_unit = ?config.overlap_unit,
        "planner configured"
    );

    // 1. Survey polygon: from the CSV argument, else the built-in square.
    let vertices = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => load_polygon_csv(&path)
            .with_context(|| format!("loading polygon from {}", path.display()))?
            .vertices()
            .to_vec(),
        None => square(),
    };

    // 2. Plan.
    let planner = CoveragePlanner::new(config);
    let request = planner.request(vertices, ALTITUDE_M, OVERLAP)?;
    let t0 = Instant::now();
    let path = planner.plan(&request, &mut TracingObserver::for_mission("square"))?;
    let elapsed = t0.elapsed();

    println!("Waypoints: {}  |  Length: {:.0} m  |  Planned in {elapsed:?}",
        path.len(), path.total_length_m());
    if let (Some(first), Some(last)) = (path.points().first(), path.points().last()) {
        println!(
            "First: {} {}  |  Last: {} {}",
            decimal_to_dms(first.latitude), decimal_to_dms(first.longitude),
            decimal_to_dms(last.latitude), decimal_to_dms(last.longitude),
        );
    }

    // 3. Write output.
    let out = Path::new(OUTPUT_DIR);
    fs::create_dir_all(out).context("creating output directory")?;

    let mut writer = CsvWriter::new(out)?;
    writer.write_path(&path)?;
    writer.finish()?;

    let json = serde_json::to_string_pretty(&path)?;
    fs::write(out.join("flight_path.json"), json).context("writing flight_path.json")?;

    println!("Wrote {} rows to {}/", writer.rows_written(), out.display());
    Ok(())
}
