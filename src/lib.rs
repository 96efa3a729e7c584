//! aptmap Library
//!
//! A Rust library for reading X-Plane `apt.dat` airport data and projecting
//! airport layouts into a flat, locally consistent draw space.
//!
//! This library provides tools for:
//! - Parsing row-coded apt.dat files into an immutable airport database
//! - Exact and tolerant ICAO lookups plus name, region and proximity queries
//! - Haversine-based projection of an airport's boundary, pavement and runways
//! - Pixels-per-meter calibration from a reference runway
//!
//! ## Usage
//!
//! ```no_run
//! use aptmap::{AirportDatabase, Config, ProjectionFrame};
//!
//! # fn example() -> aptmap::Result<()> {
//! let config = Config::default();
//! let (db, stats) = AirportDatabase::load(&["apt.dat"], &config.parser)?;
//! println!("{}", stats.summary());
//!
//! let index = db.find("KSEA");
//! let frame = ProjectionFrame::prepare(&db, index, &config.projection)?;
//! let point = frame.project(47.449, -122.309);
//! println!("datum at ({:.1}, {:.1})", point.x, point.y);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod airport_db;
        pub mod apt_dat_parser;
        pub mod projection;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
}

// Re-export commonly used types
pub use app::models::{Airport, DrawPoint, GeoPoint, Polygon, Runway};
pub use app::services::airport_db::AirportDatabase;
pub use app::services::apt_dat_parser::{AptDatParser, ParseStats};
pub use app::services::projection::{AirportDrawing, BoundingBox, ProjectionFrame};
pub use config::Config;

/// Result type alias for aptmap
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for airport parsing, lookup and projection
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}: {source}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// No land airport header rows were found in any input file
    #[error("No airports found in {files_read} of {files_requested} apt.dat files")]
    NoAirportsFound {
        files_requested: usize,
        files_read: usize,
    },

    /// A row carried fewer fields than its row code requires
    #[error(
        "Malformed row {row_code} at line {line_number}: expected at least {expected} fields, found {found}"
    )]
    MalformedRow {
        line_number: usize,
        row_code: i64,
        expected: usize,
        found: usize,
    },

    /// Airport not found by tolerant lookup
    #[error("Airport not found: {icao}")]
    AirportNotFound { icao: String },

    /// Airport index outside the database
    #[error("Airport index {index} out of range (database holds {count} airports)")]
    AirportIndexOutOfRange { index: usize, count: usize },

    /// Airport has no boundary vertices to frame
    #[error("Airport {icao} has no boundary polygon")]
    EmptyBoundary { icao: String },

    /// Airport boundary spans zero distance on both axes
    #[error("Airport {icao} boundary has zero extent")]
    DegenerateBounds { icao: String },

    /// Airport has no runway usable as a calibration segment
    #[error("Airport {icao} has no runway usable for pixels-per-meter calibration")]
    NoReferenceRunway { icao: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// JSON (de)serialization failed
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a no-airports error
    pub fn no_airports_found(files_requested: usize, files_read: usize) -> Self {
        Self::NoAirportsFound {
            files_requested,
            files_read,
        }
    }

    /// Create a malformed row error
    pub fn malformed_row(line_number: usize, row_code: i64, expected: usize, found: usize) -> Self {
        Self::MalformedRow {
            line_number,
            row_code,
            expected,
            found,
        }
    }

    /// Create an airport not found error
    pub fn airport_not_found(icao: impl Into<String>) -> Self {
        Self::AirportNotFound { icao: icao.into() }
    }

    /// Create an index out of range error
    pub fn airport_index_out_of_range(index: usize, count: usize) -> Self {
        Self::AirportIndexOutOfRange { index, count }
    }

    /// Create an empty boundary error
    pub fn empty_boundary(icao: impl Into<String>) -> Self {
        Self::EmptyBoundary { icao: icao.into() }
    }

    /// Create a degenerate bounds error
    pub fn degenerate_bounds(icao: impl Into<String>) -> Self {
        Self::DegenerateBounds { icao: icao.into() }
    }

    /// Create a missing reference runway error
    pub fn no_reference_runway(icao: impl Into<String>) -> Self {
        Self::NoReferenceRunway { icao: icao.into() }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON processing failed".to_string(),
            source: error,
        }
    }
}
