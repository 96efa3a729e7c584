//! Shared components for CLI commands
//!
//! This module contains common types, utilities, and functions used across
//! multiple CLI command implementations.

use crate::app::services::airport_db::AirportDatabase;
use crate::app::services::apt_dat_parser::ParseStats;
use crate::cli::args::CommonArgs;
use crate::cli::input::collect_input_files;
use crate::config::Config;
use crate::{Error, Result};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

/// Statistics reported back to `main` by every command
#[derive(Debug, Clone, Default)]
pub struct CommandStats {
    /// Number of apt.dat files read
    pub files_read: usize,
    /// Number of airports in the loaded database
    pub airports_loaded: usize,
    /// Number of records printed (airports, matches or drawings)
    pub results_reported: usize,
    /// Number of files that could not be read
    pub errors_encountered: usize,
    /// Total command time
    pub processing_time: Duration,
}

impl CommandStats {
    /// Start from the statistics of a database load
    pub fn from_parse_stats(stats: &ParseStats) -> Self {
        Self {
            files_read: stats.files_read,
            airports_loaded: stats.airports_loaded,
            errors_encountered: stats.errors.len(),
            ..Self::default()
        }
    }
}

/// Set up structured logging on stderr
///
/// `RUST_LOG` takes precedence over the verbosity flags.
pub fn setup_logging(args: &CommonArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("aptmap={}", log_level)));

    let init_result = if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    init_result
        .map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load layered configuration and apply the shared CLI overrides
pub fn load_configuration(args: &CommonArgs) -> Result<Config> {
    let config = Config::load_layered(args.config_file.as_deref())?
        .with_progress(args.show_progress());

    debug!("Effective configuration: {:?}", config);
    Ok(config)
}

/// Resolve the inputs and parse them into a database
pub fn load_database(args: &CommonArgs, config: &Config) -> Result<(AirportDatabase, ParseStats)> {
    let files = collect_input_files(&args.inputs)?;
    info!("Loading airports from {} file(s)", files.len());

    AirportDatabase::load(&files, &config.parser)
}

/// Pretty-print a value as JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| Error::serialization("Failed to serialize report", e))?;
    println!("{}", json);
    Ok(())
}

/// Format a distance in meters for reports
pub fn format_distance(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{:.0} m", meters)
    } else {
        format!("{:.1} km", meters / 1000.0)
    }
}
