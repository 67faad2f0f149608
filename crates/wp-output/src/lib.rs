//! `wp-output` — flight-path writers for the coverage planner.
//!
//! | Backend     | Files created        |
//! |-------------|----------------------|
//! | CSV         | `flight_path.csv`    |
//!
//! All backends implement [`PathWriter`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use wp_output::{CsvWriter, PathWriter};
//!
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! writer.write_path(&path)?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::{CsvWriter, FLIGHT_PATH_FILE};
pub use error::{OutputError, OutputResult};
pub use writer::PathWriter;
