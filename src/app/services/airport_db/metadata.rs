//! Airport database metadata

use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Metadata about a loaded airport database
#[derive(Debug, Clone)]
pub struct DatabaseMetadata {
    /// Files the records were read from
    pub source_files: Vec<PathBuf>,

    /// Total number of airports
    pub airport_count: usize,

    /// Total number of runways across all airports
    pub runway_count: usize,

    /// Airports with at least one boundary vertex (drawable)
    pub airports_with_boundary: usize,

    /// Records whose ICAO code repeats an earlier one
    pub duplicate_icaos: usize,

    /// When the database was built
    pub load_time: Instant,
}

impl DatabaseMetadata {
    /// Get the age of the database since loading
    pub fn age(&self) -> Duration {
        self.load_time.elapsed()
    }

    /// Check if records came from more than one file
    pub fn is_multi_file(&self) -> bool {
        self.source_files.len() > 1
    }

    /// Get a summary string of the database contents
    pub fn summary(&self) -> String {
        format!(
            "{} airports ({} drawable, {} runways, {} duplicate ICAO codes) from {} file(s)",
            self.airport_count,
            self.airports_with_boundary,
            self.runway_count,
            self.duplicate_icaos,
            self.source_files.len()
        )
    }
}
