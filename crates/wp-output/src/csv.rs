//! CSV output backend.
//!
//! Creates `flight_path.csv` in the configured output directory with one
//! row per waypoint:
//!
//! ```csv
//! seq,latitude,longitude
//! 0,-0.0003409928,0.0103409928
//! ```

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;
use wp_survey::FlightPath;

use crate::OutputResult;
use crate::writer::PathWriter;

/// File name written inside the output directory.
pub const FLIGHT_PATH_FILE: &str = "flight_path.csv";

/// Writes waypoints as `seq,latitude,longitude` rows.
pub struct CsvWriter<W: Write = File> {
    waypoints: Writer<W>,
    next_seq:  usize,
    finished:  bool,
}

impl CsvWriter<File> {
    /// Open (or create) `flight_path.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        Self::from_writer(File::create(dir.join(FLIGHT_PATH_FILE))?)
    }
}

impl<W: Write> CsvWriter<W> {
    /// Write to any `Write` sink, e.g. stdout or an in-memory buffer.
    pub fn from_writer(inner: W) -> OutputResult<Self> {
        let mut waypoints = Writer::from_writer(inner);
        waypoints.write_record(["seq", "latitude", "longitude"])?;
        Ok(Self { waypoints, next_seq: 0, finished: false })
    }

    /// Number of waypoint rows written so far.
    #[inline]
    pub fn rows_written(&self) -> usize {
        self.next_seq
    }
}

impl<W: Write> PathWriter for CsvWriter<W> {
    fn write_path(&mut self, path: &FlightPath) -> OutputResult<()> {
        for p in path {
            self.waypoints.write_record(&[
                self.next_seq.to_string(),
                format!("{:.10}", p.latitude),
                format!("{:.10}", p.longitude),
            ])?;
            self.next_seq += 1;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.waypoints.flush()?;
        Ok(())
    }
}
