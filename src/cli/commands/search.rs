//! Search command implementation
//!
//! Runs name, region and proximity queries against the loaded database.

use super::shared::{
    CommandStats, format_distance, load_configuration, load_database, print_json, setup_logging,
};
use crate::Result;
use crate::app::services::airport_db::AirportMatch;
use crate::cli::args::{OutputFormat, SearchArgs};
use colored::*;
use std::time::Instant;
use tracing::{debug, info};

/// Search command runner
pub fn run_search(args: SearchArgs) -> Result<CommandStats> {
    let start_time = Instant::now();

    setup_logging(&args.common)?;
    info!("Starting airport search");
    debug!("Search arguments: {:?}", args);

    args.validate()?;
    let criteria = args.criteria()?;

    let config = load_configuration(&args.common)?;
    let (db, parse_stats) = load_database(&args.common, &config)?;

    let matches = db.find_by_criteria(&criteria);
    info!("Search matched {} airport(s)", matches.len());

    match args.common.format {
        OutputFormat::Human => print_matches(&matches),
        OutputFormat::Json => print_json(&matches)?,
    }

    let mut stats = CommandStats::from_parse_stats(&parse_stats);
    stats.results_reported = matches.len();
    stats.processing_time = start_time.elapsed();
    Ok(stats)
}

fn print_matches(matches: &[AirportMatch<'_>]) {
    if matches.is_empty() {
        println!("{}", "No airports matched".yellow());
        return;
    }

    println!(
        "{}",
        format!("🔍 {} airport(s) found", matches.len())
            .bright_green()
            .bold()
    );
    println!("ICAO   | Name                           | City                 | Distance");
    println!("-------|--------------------------------|----------------------|----------");

    for found in matches {
        let airport = found.airport;
        println!(
            "{:6} | {:30} | {:20} | {}",
            airport.icao,
            truncate(&airport.name, 30),
            truncate(airport.city.as_deref().unwrap_or("-"), 20),
            found
                .distance_m
                .map(format_distance)
                .unwrap_or_else(|| "-".to_string())
        );
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        let kept: String = text.chars().take(width - 3).collect();
        kept + "..."
    } else {
        text.to_string()
    }
}
