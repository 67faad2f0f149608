//! The `PathWriter` trait implemented by all backend writers.

use wp_survey::FlightPath;

use crate::OutputResult;

/// Sink for planned flight paths.
pub trait PathWriter {
    /// Append every waypoint of `path`, numbering from the next free
    /// sequence index.
    fn write_path(&mut self, path: &FlightPath) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
