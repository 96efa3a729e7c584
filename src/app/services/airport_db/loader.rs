//! Airport database loading
//!
//! Runs the apt.dat parser over a list of files and indexes the result.

use super::AirportDatabase;
use crate::app::services::apt_dat_parser::{AptDatParser, ParseResult, ParseStats};
use crate::config::ParserConfig;
use crate::Result;
use std::path::Path;
use tracing::{info, warn};

impl AirportDatabase {
    /// Load airports from apt.dat files
    ///
    /// Files are parsed in the order given. Unreadable files are skipped and
    /// reported in the returned [`ParseStats`].
    ///
    /// # Errors
    /// * `Error::NoAirportsFound` if no readable file holds a land airport
    pub fn load<P: AsRef<Path>>(files: &[P], config: &ParserConfig) -> Result<(Self, ParseStats)> {
        let result = AptDatParser::from_config(config).parse_files(files)?;
        let (db, stats) = Self::from_parse_result(result);

        info!("Airport database ready: {}", db.metadata().summary());

        if let Some(icao) = &config.inspect_icao {
            db.log_airport(icao);
        }

        Ok((db, stats))
    }

    /// Index an already parsed result
    pub fn from_parse_result(result: ParseResult) -> (Self, ParseStats) {
        let mut db = Self::from_airports(result.airports);
        db.source_files = result.source_files;
        (db, result.stats)
    }

    /// Log the full record of one airport
    pub fn log_airport(&self, icao: &str) {
        let Some(airport) = self.get_by_icao(icao) else {
            warn!("Airport {} requested for inspection is not loaded", icao);
            return;
        };

        info!("{} (elevation {} ft)", airport.display_label(), airport.elevation_ft);
        if let Some(state) = &airport.state {
            info!("  state: {}", state);
        }
        info!("  datum: {:.6}, {:.6}", airport.latitude, airport.longitude);
        for runway in &airport.runways {
            info!(
                "  runway {} width {:.2}m: ({:.6}, {:.6}) -> ({:.6}, {:.6})",
                runway.designator(),
                runway.width_m,
                runway.ends[0].lat,
                runway.ends[0].lon,
                runway.ends[1].lat,
                runway.ends[1].lon
            );
        }
        info!("  boundary: {} vertices", airport.boundary.len());
        for (i, pavement) in airport.pavements.iter().enumerate() {
            info!("  pavement {}: {} vertices", i, pavement.len());
        }
        for (key, value) in &airport.extra_metadata {
            info!("  {}: {}", key, value);
        }
    }
}
