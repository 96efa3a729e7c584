//! Project command implementation
//!
//! Builds the projection frame and draw plan for one airport and prints them.

use super::shared::{CommandStats, load_configuration, load_database, print_json, setup_logging};
use crate::Result;
use crate::app::services::projection::{AirportDrawing, ProjectionFrame};
use crate::cli::args::{OutputFormat, ProjectArgs};
use crate::config::Config;
use colored::*;
use std::time::Instant;
use tracing::{debug, info};

/// Project command runner
///
/// # Errors
/// * `Error::AirportNotFound` if no loaded file declares the ICAO code
/// * `Error::EmptyBoundary` / `Error::DegenerateBounds` if the airport has no
///   usable boundary
pub fn run_project(args: ProjectArgs) -> Result<CommandStats> {
    let start_time = Instant::now();

    setup_logging(&args.common)?;
    info!("Projecting airport {}", args.icao);
    debug!("Project arguments: {:?}", args);

    let config = apply_draw_size(load_configuration(&args.common)?, &args)?;
    let (db, parse_stats) = load_database(&args.common, &config)?;

    let index = db.require(&args.icao)?;
    let frame = ProjectionFrame::prepare(&db, index, &config.projection)?;
    let drawing = AirportDrawing::from_frame(&frame, &db[index], &config.projection);

    match args.common.format {
        OutputFormat::Human => print_drawing(&frame, &drawing),
        OutputFormat::Json => print_json(&drawing)?,
    }

    let mut stats = CommandStats::from_parse_stats(&parse_stats);
    stats.results_reported = 1;
    stats.processing_time = start_time.elapsed();
    Ok(stats)
}

/// Override the configured draw size with the command-line flags
fn apply_draw_size(config: Config, args: &ProjectArgs) -> Result<Config> {
    let width = args.draw_width.unwrap_or(config.projection.draw_width);
    let height = args.draw_height.unwrap_or(config.projection.draw_height);

    let config = config.with_draw_size(width, height);
    config.validate()?;
    Ok(config)
}

fn print_drawing(frame: &ProjectionFrame, drawing: &AirportDrawing) {
    println!(
        "{}",
        format!("🗺️  {} - {}", drawing.icao, drawing.name)
            .bright_green()
            .bold()
    );

    let bounds = frame.bounds();
    println!(
        "   • Bounds: lat {:.6}..{:.6}, lon {:.6}..{:.6}",
        bounds.min_lat, bounds.max_lat, bounds.min_lon, bounds.max_lon
    );
    println!(
        "   • Real extent: {:.0} m east-west, {:.0} m north-south",
        frame.real_width_m(),
        frame.real_height_m()
    );
    println!(
        "   • Draw size: {:.1} x {:.1} (offset {:.1}, {:.1})",
        drawing.draw_width, drawing.draw_height, drawing.offset.x, drawing.offset.y
    );
    match drawing.pixels_per_meter {
        Some(ppm) => println!("   • Scale: {:.4} units/m", ppm),
        None => println!("   • Scale: {}", "no reference runway".yellow()),
    }
    println!();

    println!(
        "{}",
        format!("Runways ({})", drawing.runways.len())
            .bright_white()
            .bold()
    );
    for runway in &drawing.runways {
        println!(
            "   • {:<9} ({:7.1}, {:7.1}) -> ({:7.1}, {:7.1})  width {:.1}",
            runway.designator,
            runway.start.x,
            runway.start.y,
            runway.end.x,
            runway.end.y,
            runway.width_px
        );
    }
    println!();

    println!("{}", "Geometry".bright_white().bold());
    println!(
        "   • Boundary: {} vertices, {} segments",
        drawing.boundary.len(),
        drawing.boundary_segments().count()
    );
    println!("   • Pavement polygons: {}", drawing.pavements.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::cli::args::{Args, Commands};
    use clap::Parser;

    fn project_args(argv: &[&str]) -> ProjectArgs {
        match Args::try_parse_from(argv).unwrap().command {
            Some(Commands::Project(args)) => args,
            other => panic!("expected project command, got {:?}", other),
        }
    }

    #[test]
    fn test_draw_size_defaults_to_config() {
        let args = project_args(&["aptmap", "project", "KSEA", "apt.dat"]);
        let config = apply_draw_size(Config::default(), &args).unwrap();
        assert_eq!(config.projection.draw_width, 369.0);
        assert_eq!(config.projection.draw_height, 260.0);
    }

    #[test]
    fn test_draw_size_flags_override_config() {
        let args = project_args(&[
            "aptmap",
            "project",
            "KSEA",
            "apt.dat",
            "--draw-width",
            "500",
        ]);
        let config = apply_draw_size(Config::default(), &args).unwrap();
        assert_eq!(config.projection.draw_width, 500.0);
        assert_eq!(config.projection.draw_height, 260.0);
    }

    #[test]
    fn test_non_positive_draw_size_is_rejected() {
        let args = project_args(&[
            "aptmap",
            "project",
            "KSEA",
            "apt.dat",
            "--draw-height",
            "0",
        ]);
        assert!(matches!(
            apply_draw_size(Config::default(), &args),
            Err(Error::Configuration { .. })
        ));
    }
}
