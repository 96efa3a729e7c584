//! Command-line argument definitions for aptmap
//!
//! This module defines the complete CLI interface using the clap derive API.
//! Every subcommand reads the same set of apt.dat inputs and shares the
//! logging, config and output-format flags in [`CommonArgs`].

use crate::app::models::GeoPoint;
use crate::app::services::airport_db::{GeographicRegion, SearchCriteria};
use crate::constants::DEFAULT_SEARCH_LIMIT;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the apt.dat airport mapper
///
/// Reads X-Plane apt.dat scenery files into an airport database and projects
/// airport layouts into a flat draw space.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "aptmap",
    version,
    about = "Parse X-Plane apt.dat airport data and project airport layouts",
    long_about = "Reads one or more X-Plane apt.dat files into an in-memory airport database. \
                  Airports can be summarised, looked up by ICAO code, searched by name, region \
                  or proximity, and projected into a flat draw space sized for a display window."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse apt.dat files and report load statistics
    Summary(SummaryArgs),
    /// Print one airport record
    Show(ShowArgs),
    /// Search airports by name, region or proximity
    Search(SearchArgs),
    /// Project an airport into draw space
    Project(ProjectArgs),
}

impl Commands {
    /// Flags shared by every subcommand
    pub fn common(&self) -> &CommonArgs {
        match self {
            Commands::Summary(args) => &args.common,
            Commands::Show(args) => &args.common,
            Commands::Search(args) => &args.common,
            Commands::Project(args) => &args.common,
        }
    }
}

/// Inputs and output flags shared by every subcommand
#[derive(Debug, Clone, Parser)]
pub struct CommonArgs {
    /// apt.dat files, scenery directories or glob patterns
    ///
    /// Directories are searched recursively for files named apt.dat. Files
    /// are parsed in the order given; when an ICAO code appears in more than
    /// one file the first occurrence wins.
    #[arg(
        value_name = "INPUT",
        required = true,
        help = "apt.dat files, directories or glob patterns"
    )]
    pub inputs: Vec<PathBuf>,

    /// Path to configuration file
    ///
    /// JSON configuration file. If not specified, looks for
    /// <config dir>/aptmap/config.json and falls back to defaults.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (JSON format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Also hides the parse progress bar.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for results
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub format: OutputFormat,
}

impl CommonArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Arguments for the summary command
#[derive(Debug, Clone, Parser)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the show command
#[derive(Debug, Clone, Parser)]
pub struct ShowArgs {
    /// ICAO code of the airport to print
    #[arg(value_name = "ICAO", help = "ICAO code of the airport")]
    pub icao: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the search command
#[derive(Debug, Clone, Parser)]
pub struct SearchArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Case-insensitive substring matched against airport name and city
    #[arg(
        long = "name",
        value_name = "PATTERN",
        help = "Match airport name or city (case-insensitive)"
    )]
    pub name: Option<String>,

    /// Filter airports by geographic region
    ///
    /// Specify a bounding box as min_lat,max_lat,min_lon,max_lon
    #[arg(
        long = "region",
        value_name = "BBOX",
        allow_hyphen_values = true,
        help = "Filter airports by bounding box (min_lat,max_lat,min_lon,max_lon)"
    )]
    pub region: Option<String>,

    /// Order results by distance from a point
    ///
    /// Specify the point as lat,lon in decimal degrees
    #[arg(
        long = "near",
        value_name = "LAT,LON",
        allow_hyphen_values = true,
        help = "Sort results by distance from lat,lon"
    )]
    pub near: Option<String>,

    /// Maximum number of results
    #[arg(
        short = 'n',
        long = "limit",
        value_name = "COUNT",
        default_value_t = DEFAULT_SEARCH_LIMIT,
        help = "Maximum number of results to print"
    )]
    pub limit: usize,
}

impl SearchArgs {
    /// Validate the search command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.limit == 0 {
            return Err(Error::configuration(
                "Result limit must be greater than 0".to_string(),
            ));
        }

        if let Some(region) = &self.region {
            self.parse_region(region)?;
        }

        if let Some(near) = &self.near {
            self.parse_near(near)?;
        }

        Ok(())
    }

    /// Build query criteria from the flags
    pub fn criteria(&self) -> Result<SearchCriteria> {
        Ok(SearchCriteria {
            name_pattern: self.name.clone(),
            region: self
                .region
                .as_deref()
                .map(|region| self.parse_region(region))
                .transpose()?,
            near: self
                .near
                .as_deref()
                .map(|near| self.parse_near(near))
                .transpose()?,
            limit: Some(self.limit),
        })
    }

    /// Parse region bounding box string
    pub fn parse_region(&self, region: &str) -> Result<GeographicRegion> {
        let parts: Vec<&str> = region.split(',').collect();
        if parts.len() != 4 {
            return Err(Error::configuration(
                "Region must be in format: min_lat,max_lat,min_lon,max_lon".to_string(),
            ));
        }

        let min_lat = parse_coordinate("min_lat", parts[0])?;
        let max_lat = parse_coordinate("max_lat", parts[1])?;
        let min_lon = parse_coordinate("min_lon", parts[2])?;
        let max_lon = parse_coordinate("max_lon", parts[3])?;

        if min_lat >= max_lat {
            return Err(Error::configuration(
                "min_lat must be less than max_lat".to_string(),
            ));
        }
        if min_lon >= max_lon {
            return Err(Error::configuration(
                "min_lon must be less than max_lon".to_string(),
            ));
        }

        Ok(GeographicRegion::new(min_lat, max_lat, min_lon, max_lon))
    }

    /// Parse a lat,lon point string
    pub fn parse_near(&self, near: &str) -> Result<GeoPoint> {
        let parts: Vec<&str> = near.split(',').collect();
        if parts.len() != 2 {
            return Err(Error::configuration(
                "Point must be in format: lat,lon".to_string(),
            ));
        }

        let lat = parse_coordinate("lat", parts[0])?;
        let lon = parse_coordinate("lon", parts[1])?;

        if !(-90.0..=90.0).contains(&lat) {
            return Err(Error::configuration(format!(
                "Latitude out of range: {}",
                lat
            )));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(Error::configuration(format!(
                "Longitude out of range: {}",
                lon
            )));
        }

        Ok(GeoPoint::new(lat, lon))
    }
}

/// Arguments for the project command
#[derive(Debug, Clone, Parser)]
pub struct ProjectArgs {
    /// ICAO code of the airport to project
    #[arg(value_name = "ICAO", help = "ICAO code of the airport")]
    pub icao: String,

    #[command(flatten)]
    pub common: CommonArgs,

    /// Target drawing width, overriding the configured value
    #[arg(
        long = "draw-width",
        value_name = "UNITS",
        help = "Target drawing width in draw units"
    )]
    pub draw_width: Option<f64>,

    /// Target drawing height, overriding the configured value
    #[arg(
        long = "draw-height",
        value_name = "UNITS",
        help = "Target drawing height in draw units"
    )]
    pub draw_height: Option<f64>,
}

/// Output format options for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

fn parse_coordinate(name: &str, value: &str) -> Result<f64> {
    let parsed: f64 = value
        .trim()
        .parse()
        .map_err(|_| Error::configuration(format!("Invalid {}: {}", name, value)))?;

    if !parsed.is_finite() {
        return Err(Error::configuration(format!("Invalid {}: {}", name, value)));
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    fn search_args(argv: &[&str]) -> SearchArgs {
        match parse(argv).command {
            Some(Commands::Search(args)) => args,
            other => panic!("expected search command, got {:?}", other),
        }
    }

    #[test]
    fn test_no_subcommand_is_accepted() {
        let args = parse(&["aptmap"]);
        assert!(args.command.is_none());
    }

    #[test]
    fn test_show_takes_icao_before_inputs() {
        let args = parse(&["aptmap", "show", "KSEA", "a/apt.dat", "b/apt.dat"]);
        match args.command {
            Some(Commands::Show(show)) => {
                assert_eq!(show.icao, "KSEA");
                assert_eq!(
                    show.common.inputs,
                    vec![PathBuf::from("a/apt.dat"), PathBuf::from("b/apt.dat")]
                );
                assert_eq!(show.common.format, OutputFormat::Human);
            }
            other => panic!("expected show command, got {:?}", other),
        }
    }

    #[test]
    fn test_inputs_are_required() {
        assert!(Args::try_parse_from(["aptmap", "summary"]).is_err());
        assert!(Args::try_parse_from(["aptmap", "show", "KSEA"]).is_err());
    }

    #[test]
    fn test_log_levels() {
        let args = parse(&["aptmap", "summary", "apt.dat"]);
        let common = args.command.as_ref().map(Commands::common).unwrap();
        assert_eq!(common.get_log_level(), "warn");
        assert!(common.show_progress());

        let args = parse(&["aptmap", "summary", "-vv", "apt.dat"]);
        let common = args.command.as_ref().map(Commands::common).unwrap();
        assert_eq!(common.get_log_level(), "debug");

        let args = parse(&["aptmap", "summary", "-vvvv", "apt.dat"]);
        let common = args.command.as_ref().map(Commands::common).unwrap();
        assert_eq!(common.get_log_level(), "trace");

        let args = parse(&["aptmap", "summary", "-q", "apt.dat"]);
        let common = args.command.as_ref().map(Commands::common).unwrap();
        assert_eq!(common.get_log_level(), "error");
        assert!(!common.show_progress());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["aptmap", "summary", "-q", "-v", "apt.dat"]).is_err());
    }

    #[test]
    fn test_json_format() {
        let args = parse(&["aptmap", "summary", "--format", "json", "apt.dat"]);
        let common = args.command.as_ref().map(Commands::common).unwrap();
        assert_eq!(common.format, OutputFormat::Json);
    }

    #[test]
    fn test_search_defaults() {
        let args = search_args(&["aptmap", "search", "apt.dat"]);
        assert_eq!(args.limit, DEFAULT_SEARCH_LIMIT);
        assert!(args.validate().is_ok());

        let criteria = args.criteria().unwrap();
        assert!(criteria.name_pattern.is_none());
        assert!(criteria.region.is_none());
        assert!(criteria.near.is_none());
        assert_eq!(criteria.limit, Some(DEFAULT_SEARCH_LIMIT));
    }

    #[test]
    fn test_search_criteria_from_flags() {
        let args = search_args(&[
            "aptmap",
            "search",
            "apt.dat",
            "--name",
            "seattle",
            "--region",
            "47.0,48.0,-123.0,-122.0",
            "--near",
            "47.45,-122.31",
            "--limit",
            "5",
        ]);
        assert!(args.validate().is_ok());

        let criteria = args.criteria().unwrap();
        assert_eq!(criteria.name_pattern.as_deref(), Some("seattle"));
        assert_eq!(
            criteria.region,
            Some(GeographicRegion::new(47.0, 48.0, -123.0, -122.0))
        );
        assert_eq!(criteria.near, Some(GeoPoint::new(47.45, -122.31)));
        assert_eq!(criteria.limit, Some(5));
    }

    #[test]
    fn test_parse_region() {
        let args = search_args(&["aptmap", "search", "apt.dat"]);

        let region = args.parse_region(" 47.0, 48.0 ,-123.0,-122.0").unwrap();
        assert_eq!(region, GeographicRegion::new(47.0, 48.0, -123.0, -122.0));

        assert!(args.parse_region("47.0,48.0,-123.0").is_err());
        assert!(args.parse_region("48.0,47.0,-123.0,-122.0").is_err());
        assert!(args.parse_region("47.0,48.0,-122.0,-122.0").is_err());
        assert!(args.parse_region("north,48.0,-123.0,-122.0").is_err());
    }

    #[test]
    fn test_parse_near() {
        let args = search_args(&["aptmap", "search", "apt.dat"]);

        assert_eq!(
            args.parse_near("-33.94,151.18").unwrap(),
            GeoPoint::new(-33.94, 151.18)
        );
        assert!(args.parse_near("47.45").is_err());
        assert!(args.parse_near("91.0,0.0").is_err());
        assert!(args.parse_near("0.0,181.0").is_err());
        assert!(args.parse_near("NaN,0.0").is_err());
    }

    #[test]
    fn test_search_validate_rejects_zero_limit() {
        let mut args = search_args(&["aptmap", "search", "apt.dat"]);
        args.limit = 0;
        assert!(matches!(args.validate(), Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_project_draw_size_overrides() {
        let args = parse(&[
            "aptmap",
            "project",
            "KSEA",
            "apt.dat",
            "--draw-width",
            "800",
            "--draw-height",
            "600",
        ]);
        match args.command {
            Some(Commands::Project(project)) => {
                assert_eq!(project.icao, "KSEA");
                assert_eq!(project.draw_width, Some(800.0));
                assert_eq!(project.draw_height, Some(600.0));
            }
            other => panic!("expected project command, got {:?}", other),
        }
    }
}
