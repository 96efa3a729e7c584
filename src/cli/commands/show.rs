//! Show command implementation
//!
//! Prints the full record of one airport found by tolerant ICAO lookup.

use super::shared::{CommandStats, load_configuration, load_database, print_json, setup_logging};
use crate::Result;
use crate::app::models::Airport;
use crate::cli::args::{OutputFormat, ShowArgs};
use colored::*;
use std::time::Instant;
use tracing::{debug, info};

/// Show command runner
///
/// # Errors
/// * `Error::AirportNotFound` if no loaded file declares the ICAO code
pub fn run_show(args: ShowArgs) -> Result<CommandStats> {
    let start_time = Instant::now();

    setup_logging(&args.common)?;
    info!("Looking up airport {}", args.icao);
    debug!("Show arguments: {:?}", args);

    let config = load_configuration(&args.common)?;
    let (db, parse_stats) = load_database(&args.common, &config)?;

    let index = db.require(&args.icao)?;
    let airport = &db[index];

    match args.common.format {
        OutputFormat::Human => print_airport(index, airport),
        OutputFormat::Json => print_json(airport)?,
    }

    let mut stats = CommandStats::from_parse_stats(&parse_stats);
    stats.results_reported = 1;
    stats.processing_time = start_time.elapsed();
    Ok(stats)
}

fn print_airport(index: usize, airport: &Airport) {
    println!("{}", format!("✈️  {}", airport.display_label()).bright_green().bold());
    println!("   • Record index: {}", index);
    println!("   • Elevation: {:.0} ft", airport.elevation_ft);
    if let Some(state) = &airport.state {
        println!("   • State: {}", state);
    }
    match airport.location() {
        Some(point) => println!("   • Location: {:.6}, {:.6}", point.lat, point.lon),
        None => println!("   • Location: {}", "unknown".dimmed()),
    }
    println!();

    println!(
        "{}",
        format!("Runways ({})", airport.runways.len()).bright_white().bold()
    );
    for runway in &airport.runways {
        println!(
            "   • {:<9} {:>6.1} m wide  {:.6},{:.6} -> {:.6},{:.6}",
            runway.designator(),
            runway.width_m,
            runway.ends[0].lat,
            runway.ends[0].lon,
            runway.ends[1].lat,
            runway.ends[1].lon
        );
    }
    println!();

    println!("{}", "Geometry".bright_white().bold());
    println!("   • Boundary vertices: {}", airport.boundary.len());
    println!(
        "   • Pavement sections: {} ({} vertices)",
        airport.pavements.len(),
        airport.pavements.iter().map(|p| p.len()).sum::<usize>()
    );

    if !airport.extra_metadata.is_empty() {
        println!();
        println!("{}", "Metadata".bright_white().bold());
        for (key, value) in &airport.extra_metadata {
            println!("   • {}: {}", key, value);
        }
    }
}
