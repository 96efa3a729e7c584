//! Parsing statistics and result structures for apt.dat ingestion
//!
//! This module provides types for tracking how many lines and rows of each
//! kind were seen and for handing the parsed airports to the database.

use crate::app::models::Airport;
use std::path::PathBuf;
use std::time::Duration;

/// Parsing result with airports and statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Airports in header-row order
    pub airports: Vec<Airport>,

    /// Files that were read in full
    pub source_files: Vec<PathBuf>,

    /// Parsing statistics
    pub stats: ParseStats,
}

/// Statistics gathered over both parser passes
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Number of input files requested
    pub files_requested: usize,

    /// Number of files read successfully
    pub files_read: usize,

    /// Number of files skipped because they could not be read
    pub files_skipped: usize,

    /// Lines read during the fill pass
    pub lines_read: usize,

    /// `##` comment lines
    pub comment_lines: usize,

    /// Empty or whitespace-only lines
    pub blank_lines: usize,

    /// Lines whose first field is not an integer row code
    pub invalid_lines: usize,

    /// Land airport header rows
    pub header_rows: usize,

    /// Airport records in the result
    pub airports_loaded: usize,

    /// Seaplane base and heliport headers
    pub excluded_facilities: usize,

    /// Known rows whose content was not attributed to a record
    pub ignored_rows: usize,

    /// Rows with a code the parser does not act on
    pub unhandled_rows: usize,

    /// Rows shorter than their row code requires
    pub malformed_rows: usize,

    /// Wall time across both passes
    #[serde(with = "duration_secs")]
    pub load_duration: Duration,

    /// Per-file errors for files that were skipped
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if any file was skipped
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Airports parsed per second
    pub fn airports_per_second(&self) -> f64 {
        if self.load_duration.is_zero() {
            0.0
        } else {
            self.airports_loaded as f64 / self.load_duration.as_secs_f64()
        }
    }

    /// Get a summary string of the parse
    pub fn summary(&self) -> String {
        format!(
            "Read {}/{} files, {} lines, loaded {} airports ({} facilities excluded, {} malformed rows) in {:.2}s",
            self.files_read,
            self.files_requested,
            self.lines_read,
            self.airports_loaded,
            self.excluded_facilities,
            self.malformed_rows,
            self.load_duration.as_secs_f64()
        )
    }
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(duration.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Ok(Duration::try_from_secs_f64(secs).unwrap_or_default())
    }
}
