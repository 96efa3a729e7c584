//! Configuration management and validation.
//!
//! Provides configuration structures for apt.dat parsing and airport
//! projection, layered from defaults, an optional JSON file and CLI overrides.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_BOUNDARY_LINE_WIDTH_PX, DEFAULT_DRAW_HEIGHT,
    DEFAULT_DRAW_WIDTH, DEFAULT_RUNWAY_WIDTH_PX, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Global configuration for aptmap
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// apt.dat parsing settings
    pub parser: ParserConfig,

    /// Projection and draw-plan settings
    pub projection: ProjectionConfig,
}

/// Settings for the apt.dat parser
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Display a progress bar while reading files
    pub show_progress: bool,

    /// ICAO code whose full record is logged once parsing completes
    pub inspect_icao: Option<String>,
}

/// Settings for the geo-projection engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Target drawing width when the north-south extent binds
    pub draw_width: f64,

    /// Target drawing height when the east-west extent binds
    pub draw_height: f64,

    /// Width of the window the drawing is centered in
    pub window_width: f64,

    /// Height of the window the drawing is centered in
    pub window_height: f64,

    /// Runway stroke width used when a runway has no positive width
    pub default_runway_width_px: f64,

    /// Stroke width of the boundary outline
    pub boundary_line_width_px: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            draw_width: DEFAULT_DRAW_WIDTH,
            draw_height: DEFAULT_DRAW_HEIGHT,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            default_runway_width_px: DEFAULT_RUNWAY_WIDTH_PX,
            boundary_line_width_px: DEFAULT_BOUNDARY_LINE_WIDTH_PX,
        }
    }
}

impl ProjectionConfig {
    /// Validate that every dimension is finite and positive
    pub fn validate(&self) -> Result<()> {
        let dimensions = [
            ("draw_width", self.draw_width),
            ("draw_height", self.draw_height),
            ("window_width", self.window_width),
            ("window_height", self.window_height),
            ("default_runway_width_px", self.default_runway_width_px),
            ("boundary_line_width_px", self.boundary_line_width_px),
        ];

        for (name, value) in dimensions {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::configuration(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}

impl Config {
    /// Set the target drawing size
    pub fn with_draw_size(mut self, width: f64, height: f64) -> Self {
        self.projection.draw_width = width;
        self.projection.draw_height = height;
        self
    }

    /// Set the window the drawing is centered in
    pub fn with_window_size(mut self, width: f64, height: f64) -> Self {
        self.projection.window_width = width;
        self.projection.window_height = height;
        self
    }

    /// Enable or disable the parse progress bar
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.parser.show_progress = show_progress;
        self
    }

    /// Log the full record of one airport after parsing
    pub fn with_inspect_icao(mut self, icao: impl Into<String>) -> Self {
        self.parser.inspect_icao = Some(icao.into());
        self
    }

    /// Validate the whole configuration
    pub fn validate(&self) -> Result<()> {
        self.projection.validate()
    }

    /// Default config file location (`<config dir>/aptmap/config.json`)
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))
    }

    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read config file {}", path.display()), e)
        })?;

        let config: Config = serde_json::from_str(&contents).map_err(|e| {
            Error::serialization(format!("Invalid config file {}", path.display()), e)
        })?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration using layered approach (defaults -> file)
    ///
    /// An explicit path must exist. Without one, the default location is used
    /// when present and silently skipped otherwise.
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path() {
                Ok(path) if path.exists() => Self::from_file(&path)?,
                _ => {
                    debug!("No config file found, using defaults");
                    Self::default()
                }
            },
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_projection_matches_window() {
        let config = Config::default();
        assert_eq!(config.projection.window_width, 738.0);
        assert_eq!(config.projection.window_height, 520.0);
        assert_eq!(config.projection.draw_width, 369.0);
        assert_eq!(config.projection.draw_height, 260.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = Config::default()
            .with_draw_size(800.0, 600.0)
            .with_window_size(1600.0, 1200.0)
            .with_progress(true)
            .with_inspect_icao("KSEA");

        assert_eq!(config.projection.draw_width, 800.0);
        assert_eq!(config.projection.window_height, 1200.0);
        assert!(config.parser.show_progress);
        assert_eq!(config.parser.inspect_icao.as_deref(), Some("KSEA"));
    }

    #[test]
    fn test_validate_rejects_bad_dimensions() {
        let config = Config::default().with_draw_size(0.0, 260.0);
        assert!(matches!(
            config.validate(),
            Err(Error::Configuration { .. })
        ));

        let config = Config::default().with_draw_size(369.0, f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{ "projection": { "draw_width": 500.0 } }"#).unwrap();

        let config = Config::load_layered(Some(&path)).unwrap();
        assert_eq!(config.projection.draw_width, 500.0);
        assert_eq!(config.projection.draw_height, 260.0);
        assert!(!config.parser.show_progress);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");

        assert!(matches!(
            Config::load_layered(Some(&path)),
            Err(Error::Io { .. })
        ));
    }

    #[test]
    fn test_invalid_json_is_serialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            Config::from_file(&path),
            Err(Error::Serialization { .. })
        ));
    }
}
