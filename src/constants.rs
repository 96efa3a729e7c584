//! Application constants for aptmap
//!
//! This module contains the apt.dat wire-format constants, geodesy constants
//! and default drawing dimensions used throughout the crate.

// =============================================================================
// apt.dat Format
// =============================================================================

/// Prefix marking a comment line in apt.dat files
pub const COMMENT_PREFIX: &str = "##";

/// File name the CLI looks for when walking a scenery directory
pub const APT_DAT_FILE_NAME: &str = "apt.dat";

/// Row codes of the apt.dat format handled by the parser
///
/// These values are the wire format and must not change.
pub mod row_codes {
    /// Land airport header
    pub const LAND_AIRPORT: i64 = 1;

    /// Seaplane base header
    pub const SEAPLANE_BASE: i64 = 16;

    /// Heliport header
    pub const HELIPORT: i64 = 17;

    /// Land runway
    pub const RUNWAY: i64 = 100;

    /// Pavement (taxiway or ramp) section header
    pub const PAVEMENT: i64 = 110;

    /// Node
    pub const NODE: i64 = 111;

    /// Node with bezier control point
    pub const BEZIER_NODE: i64 = 112;

    /// Node with implicit close of loop
    pub const CLOSE_NODE: i64 = 113;

    /// Node with bezier control point and implicit close of loop
    pub const CLOSE_BEZIER_NODE: i64 = 114;

    /// Linear feature (painted line or light string) header
    pub const LINEAR_FEATURE: i64 = 120;

    /// Airport boundary section header
    pub const BOUNDARY: i64 = 130;

    /// Airport metadata key/value
    pub const METADATA: i64 = 1302;
}

/// Field offsets within the whitespace-delimited rows
pub mod fields {
    /// Header row: elevation in feet
    pub const HEADER_ELEVATION: usize = 1;
    /// Header row: ICAO identifier
    pub const HEADER_ICAO: usize = 4;
    /// Header row: first word of the airport name
    pub const HEADER_NAME: usize = 5;

    /// Runway row: width in meters
    pub const RUNWAY_WIDTH: usize = 1;
    /// Runway row: first end label
    pub const RUNWAY_END1_LABEL: usize = 8;
    /// Runway row: first end latitude
    pub const RUNWAY_END1_LAT: usize = 9;
    /// Runway row: first end longitude
    pub const RUNWAY_END1_LON: usize = 10;
    /// Runway row: second end label
    pub const RUNWAY_END2_LABEL: usize = 17;
    /// Runway row: second end latitude
    pub const RUNWAY_END2_LAT: usize = 18;
    /// Runway row: second end longitude
    pub const RUNWAY_END2_LON: usize = 19;

    /// Node rows: latitude
    pub const NODE_LAT: usize = 1;
    /// Node rows: longitude
    pub const NODE_LON: usize = 2;

    /// Metadata row: key token
    pub const METADATA_KEY: usize = 1;
    /// Metadata row: value (text runs to end of line)
    pub const METADATA_VALUE: usize = 2;
}

/// Keys of 1302 metadata rows stored as typed record fields
pub mod metadata_keys {
    pub const CITY: &str = "city";
    pub const COUNTRY: &str = "country";
    pub const STATE: &str = "state";
    pub const DATUM_LAT: &str = "datum_lat";
    pub const DATUM_LON: &str = "datum_lon";
}

// =============================================================================
// Geodesy
// =============================================================================

/// Mean Earth radius used by the haversine formula, in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Mean Earth radius in meters
pub const EARTH_RADIUS_M: f64 = EARTH_RADIUS_KM * 1000.0;

/// Bounding box seed values no real coordinate can reach
pub const BOUNDS_SENTINEL_MAX: f64 = -1000.0;
pub const BOUNDS_SENTINEL_MIN: f64 = 1000.0;

// =============================================================================
// Drawing Defaults
// =============================================================================

/// Default window width in draw units
pub const DEFAULT_WINDOW_WIDTH: f64 = 738.0;

/// Default window height in draw units
pub const DEFAULT_WINDOW_HEIGHT: f64 = 520.0;

/// Default target width of an airport drawing (half the window)
pub const DEFAULT_DRAW_WIDTH: f64 = DEFAULT_WINDOW_WIDTH / 2.0;

/// Default target height of an airport drawing (half the window)
pub const DEFAULT_DRAW_HEIGHT: f64 = DEFAULT_WINDOW_HEIGHT / 2.0;

/// Runway stroke width used when a runway declares no usable width
pub const DEFAULT_RUNWAY_WIDTH_PX: f64 = 2.0;

/// Stroke width of the airport boundary outline
pub const DEFAULT_BOUNDARY_LINE_WIDTH_PX: f64 = 2.0;

// =============================================================================
// Configuration
// =============================================================================

/// Directory name below the user config directory
pub const CONFIG_DIR_NAME: &str = "aptmap";

/// Config file name inside [`CONFIG_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default number of results printed by the search command
pub const DEFAULT_SEARCH_LIMIT: usize = 20;
