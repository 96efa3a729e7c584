//! Command implementations for the aptmap CLI
//!
//! Each command is implemented in its own module:
//! - `summary`: load statistics and database size
//! - `show`: one airport record
//! - `search`: name, region and proximity queries
//! - `project`: projected draw plan for one airport

pub mod project;
pub mod search;
pub mod shared;
pub mod show;
pub mod summary;

pub use shared::CommandStats;

use crate::Result;
use crate::cli::args::Commands;

/// Main command runner
///
/// Dispatches to the appropriate subcommand handler.
pub fn run(command: Commands) -> Result<CommandStats> {
    match command {
        Commands::Summary(args) => summary::run_summary(args),
        Commands::Show(args) => show::run_show(args),
        Commands::Search(args) => search::run_search(args),
        Commands::Project(args) => project::run_project(args),
    }
}
