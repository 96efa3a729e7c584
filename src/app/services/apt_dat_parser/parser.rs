//! Two-pass apt.dat parser
//!
//! The counting pass reads every file once to count land airport headers so
//! record storage is allocated exactly once. The fill pass replays the same
//! files through [`RecordBuilder`] to populate the records.

use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use super::builder::RecordBuilder;
use super::reader::LineReader;
use super::row_code::{RowCode, row_code_of};
use super::stats::{ParseResult, ParseStats};
use crate::config::ParserConfig;
use crate::{Error, Result};

/// Parser turning apt.dat files into airport records
#[derive(Debug, Clone, Default)]
pub struct AptDatParser {
    show_progress: bool,
}

impl AptDatParser {
    /// Create a parser with progress reporting disabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the per-file progress bar
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn from_config(config: &ParserConfig) -> Self {
        Self::new().with_progress(config.show_progress)
    }

    /// Parse an ordered list of apt.dat files
    ///
    /// Files that cannot be opened or read are logged, skipped and recorded
    /// in [`ParseStats::errors`]; the remaining files are still parsed.
    ///
    /// # Errors
    /// * `Error::NoAirportsFound` if no land airport header exists in any
    ///   readable file
    pub fn parse_files<P: AsRef<Path>>(&self, files: &[P]) -> Result<ParseResult> {
        let start_time = Instant::now();
        let mut stats = ParseStats::new();
        stats.files_requested = files.len();

        info!("Parsing {} apt.dat file(s)", files.len());

        let mut readable: Vec<PathBuf> = Vec::with_capacity(files.len());
        let mut header_count = 0;

        for path in files.iter().map(AsRef::as_ref) {
            match count_file(path) {
                Ok(count) => {
                    debug!("{}: {} land airport headers", path.display(), count);
                    header_count += count;
                    readable.push(path.to_path_buf());
                }
                Err(e) => record_skipped_file(&mut stats, path, &e),
            }
        }

        if header_count == 0 {
            return Err(Error::no_airports_found(files.len(), readable.len()));
        }

        let progress_bar = self.progress_bar(readable.len());
        let mut builder = RecordBuilder::with_capacity(header_count);
        let mut source_files = Vec::with_capacity(readable.len());

        for (index, path) in readable.into_iter().enumerate() {
            if let Some(pb) = &progress_bar {
                pb.set_position(index as u64);
                pb.set_message(format!("Parsing {}", path.display()));
            }

            match fill_file(&path, &mut builder, &mut stats) {
                Ok(lines) => {
                    debug!("{}: {} lines", path.display(), lines);
                    let state = builder.state();
                    if state.boundary_open() || state.pavement_open() {
                        debug!("{} ended inside an open section ({:?})", path.display(), state);
                    }
                    stats.files_read += 1;
                    source_files.push(path);
                }
                Err(e) => record_skipped_file(&mut stats, &path, &e),
            }
        }

        if let Some(pb) = &progress_bar {
            pb.finish_with_message("apt.dat parsing complete");
        }

        if builder.is_empty() {
            return Err(Error::no_airports_found(files.len(), source_files.len()));
        }

        let result = finish(builder, source_files, stats, start_time);
        info!(
            "Loaded {} airports from {} file(s) in {:.2}s",
            result.stats.airports_loaded,
            result.stats.files_read,
            result.stats.load_duration.as_secs_f64()
        );
        Ok(result)
    }

    /// Parse apt.dat content held in memory as a single source
    pub fn parse_str(&self, content: &str) -> Result<ParseResult> {
        let start_time = Instant::now();
        let mut stats = ParseStats::new();
        stats.files_requested = 1;

        let header_count = count_headers(&mut LineReader::new(content.as_bytes()))?;
        if header_count == 0 {
            return Err(Error::no_airports_found(1, 1));
        }

        let mut builder = RecordBuilder::with_capacity(header_count);
        fill_from(&mut LineReader::new(content.as_bytes()), &mut builder, &mut stats)?;
        stats.files_read = 1;

        Ok(finish(builder, Vec::new(), stats, start_time))
    }

    fn progress_bar(&self, files: usize) -> Option<ProgressBar> {
        if !self.show_progress {
            return None;
        }

        let pb = ProgressBar::new(files as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        Some(pb)
    }
}

fn count_file(path: &Path) -> Result<usize> {
    let mut reader = LineReader::open(path)?;
    count_headers(&mut reader)
        .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))
}

fn count_headers<R: BufRead>(reader: &mut LineReader<R>) -> std::io::Result<usize> {
    let mut count = 0;
    while let Some((_, line)) = reader.next_line()? {
        if row_code_of(&line) == Some(RowCode::LandAirport) {
            count += 1;
        }
    }
    Ok(count)
}

fn fill_file(path: &Path, builder: &mut RecordBuilder, stats: &mut ParseStats) -> Result<usize> {
    let reader = LineReader::open(path)?;
    fill_source(reader, builder, stats)
        .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))
}

/// Apply one whole source to the builder, or none of it
///
/// A read error partway through restores the builder and the row counters to
/// their state before the source was started.
pub(super) fn fill_source<R: BufRead>(
    mut reader: LineReader<R>,
    builder: &mut RecordBuilder,
    stats: &mut ParseStats,
) -> std::io::Result<usize> {
    let checkpoint = builder.checkpoint();
    let saved_stats = stats.clone();

    match fill_from(&mut reader, builder, stats) {
        Ok(()) => Ok(reader.lines_read()),
        Err(e) => {
            builder.rollback(checkpoint);
            *stats = saved_stats;
            Err(e)
        }
    }
}

fn fill_from<R: BufRead>(
    reader: &mut LineReader<R>,
    builder: &mut RecordBuilder,
    stats: &mut ParseStats,
) -> std::io::Result<()> {
    while let Some((line_number, line)) = reader.next_line()? {
        builder.apply_line(line_number, &line, stats);
    }
    Ok(())
}

fn record_skipped_file(stats: &mut ParseStats, path: &Path, error: &Error) {
    warn!("Skipping {}: {}", path.display(), error);
    stats.files_skipped += 1;
    stats.errors.push(format!("{}: {}", path.display(), error));
}

fn finish(
    builder: RecordBuilder,
    source_files: Vec<PathBuf>,
    mut stats: ParseStats,
    start_time: Instant,
) -> ParseResult {
    let airports = builder.into_airports();
    stats.airports_loaded = airports.len();
    stats.load_duration = start_time.elapsed();

    ParseResult {
        airports,
        source_files,
        stats,
    }
}
