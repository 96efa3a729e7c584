use anyhow::Context;
use aptmap::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    let name = command_name(&command);
    let result = commands::run(command).with_context(|| format!("{} command failed", name));

    match result {
        Ok(_stats) => {
            // Success - the command has already printed its report
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

fn command_name(command: &aptmap::cli::args::Commands) -> &'static str {
    use aptmap::cli::args::Commands;

    match command {
        Commands::Summary(_) => "summary",
        Commands::Show(_) => "show",
        Commands::Search(_) => "search",
        Commands::Project(_) => "project",
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("aptmap - X-Plane apt.dat Airport Mapper");
    println!("=======================================");
    println!();
    println!("Parse X-Plane apt.dat airport data into an airport database and");
    println!("project airport layouts into a flat draw space.");
    println!();
    println!("USAGE:");
    println!("    aptmap <COMMAND> [OPTIONS] <INPUT>...");
    println!();
    println!("COMMANDS:");
    println!("    summary     Parse apt.dat files and report load statistics");
    println!("    show        Print one airport record");
    println!("    search      Search airports by name, region or proximity");
    println!("    project     Project an airport into draw space");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Summarise the global airport file:");
    println!("    aptmap summary \"Resources/default scenery/default apt dat/Earth nav data/apt.dat\"");
    println!();
    println!("    # Print one airport, searching a whole scenery folder:");
    println!("    aptmap show KSEA \"Custom Scenery\"");
    println!();
    println!("    # Ten airports nearest a point, as JSON:");
    println!("    aptmap search apt.dat --near 47.45,-122.31 --limit 10 --format json");
    println!();
    println!("    # Project an airport into an 800x600 draw box:");
    println!("    aptmap project KSEA apt.dat --draw-width 800 --draw-height 600");
    println!();
    println!("For detailed help on any command, use:");
    println!("    aptmap <COMMAND> --help");
}
