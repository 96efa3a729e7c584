//! Summary command implementation
//!
//! Parses the inputs and reports load statistics alongside the size of the
//! resulting airport database.

use super::shared::{CommandStats, load_configuration, load_database, print_json, setup_logging};
use crate::Result;
use crate::app::services::airport_db::{AirportDatabase, DatabaseMetadata};
use crate::app::services::apt_dat_parser::ParseStats;
use crate::cli::args::{OutputFormat, SummaryArgs};
use colored::*;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

/// Machine-readable summary report
#[derive(Debug, Serialize)]
struct SummaryReport<'a> {
    source_files: &'a [PathBuf],
    airport_count: usize,
    runway_count: usize,
    airports_with_boundary: usize,
    duplicate_icaos: usize,
    stats: &'a ParseStats,
}

impl<'a> SummaryReport<'a> {
    fn new(metadata: &'a DatabaseMetadata, stats: &'a ParseStats) -> Self {
        Self {
            source_files: &metadata.source_files,
            airport_count: metadata.airport_count,
            runway_count: metadata.runway_count,
            airports_with_boundary: metadata.airports_with_boundary,
            duplicate_icaos: metadata.duplicate_icaos,
            stats,
        }
    }
}

/// Summary command runner
pub fn run_summary(args: SummaryArgs) -> Result<CommandStats> {
    let start_time = Instant::now();

    setup_logging(&args.common)?;
    info!("Starting apt.dat summary");
    debug!("Summary arguments: {:?}", args);

    let config = load_configuration(&args.common)?;
    let (db, parse_stats) = load_database(&args.common, &config)?;
    let metadata = db.metadata();

    match args.common.format {
        OutputFormat::Human => print_human_summary(&db, &metadata, &parse_stats),
        OutputFormat::Json => print_json(&SummaryReport::new(&metadata, &parse_stats))?,
    }

    let mut stats = CommandStats::from_parse_stats(&parse_stats);
    stats.results_reported = 1;
    stats.processing_time = start_time.elapsed();

    info!(
        "Summary completed in {:.2}s",
        stats.processing_time.as_secs_f64()
    );
    Ok(stats)
}

fn print_human_summary(db: &AirportDatabase, metadata: &DatabaseMetadata, stats: &ParseStats) {
    println!("{}", "📊 apt.dat Summary".bright_green().bold());
    println!("==================");

    for path in &metadata.source_files {
        println!("📁 {}", path.display());
    }
    println!();

    println!("{}", "Files".bright_white().bold());
    println!(
        "   • Read: {} of {} ({} skipped)",
        stats.files_read, stats.files_requested, stats.files_skipped
    );
    println!(
        "   • Lines: {} ({} comments, {} blank, {} unrecognised)",
        stats.lines_read, stats.comment_lines, stats.blank_lines, stats.invalid_lines
    );
    println!();

    println!("{}", "Rows".bright_white().bold());
    println!("   • Land airport headers: {}", stats.header_rows);
    println!(
        "   • Seaplane bases and heliports excluded: {}",
        stats.excluded_facilities
    );
    println!("   • Ignored rows: {}", stats.ignored_rows);
    println!("   • Unhandled row codes: {}", stats.unhandled_rows);
    println!("   • Malformed rows: {}", stats.malformed_rows);
    println!();

    println!("{}", "Airports".bright_white().bold());
    println!("   • Loaded: {}", metadata.airport_count);
    println!("   • With boundary (drawable): {}", metadata.airports_with_boundary);
    println!("   • Runways: {}", metadata.runway_count);
    if metadata.duplicate_icaos > 0 {
        println!(
            "   • Duplicate ICAO codes: {} (first occurrence kept)",
            metadata.duplicate_icaos.to_string().yellow()
        );
    }
    if let Some(airport) = db.airports().first() {
        println!("   • First record: {}", airport.display_label());
    }
    println!();

    println!(
        "⏱️  Load time: {:.2}s ({:.0} airports/s)",
        stats.load_duration.as_secs_f64(),
        stats.airports_per_second()
    );

    if stats.has_errors() {
        println!();
        println!(
            "{}",
            format!("⚠️  {} file(s) could not be read:", stats.errors.len()).yellow()
        );
        for error in &stats.errors {
            println!("   • {}", error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::Airport;

    #[test]
    fn test_summary_report_serialization() {
        let db = AirportDatabase::from_airports(vec![
            Airport::new("KSEA", "Seattle Tacoma Intl", 433.0),
            Airport::new("KPDX", "Portland Intl", 31.0),
        ]);
        let metadata = db.metadata();
        let mut stats = ParseStats::new();
        stats.files_read = 1;
        stats.airports_loaded = 2;

        let json = serde_json::to_value(SummaryReport::new(&metadata, &stats)).unwrap();

        assert_eq!(json["airport_count"], 2);
        assert_eq!(json["duplicate_icaos"], 0);
        assert_eq!(json["stats"]["files_read"], 1);
        assert_eq!(json["stats"]["airports_loaded"], 2);
    }
}
