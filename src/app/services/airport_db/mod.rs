//! Airport database with stable indices and O(1) ICAO lookups
//!
//! The database owns every airport record produced by the apt.dat parser.
//! It is immutable once built: indices never change and no method takes
//! `&mut self`, so a shared reference can be read from any number of threads.

use crate::app::models::Airport;
use crate::{Error, Result};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::ops::Index;
use std::path::PathBuf;
use std::time::Instant;
use tracing::warn;

pub mod loader;
pub mod metadata;
pub mod query;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use metadata::DatabaseMetadata;
pub use query::{AirportMatch, GeographicRegion, SearchCriteria};

/// In-memory airport database
#[derive(Debug, Clone)]
pub struct AirportDatabase {
    /// Airports in header-row order
    pub(crate) airports: Vec<Airport>,

    /// ICAO code to index of its first occurrence
    pub(crate) icao_index: HashMap<String, usize>,

    /// apt.dat files the records were read from
    pub(crate) source_files: Vec<PathBuf>,

    /// When the database was built
    pub(crate) load_time: Instant,

    /// Records whose ICAO code repeats an earlier one
    pub(crate) duplicate_icaos: usize,
}

impl AirportDatabase {
    /// Build a database from parsed records, keeping their order
    ///
    /// When an ICAO code repeats, lookups resolve to the first occurrence;
    /// the later record stays reachable by index.
    pub fn from_airports(airports: Vec<Airport>) -> Self {
        let mut icao_index = HashMap::with_capacity(airports.len());
        let mut duplicate_icaos = 0;

        for (index, airport) in airports.iter().enumerate() {
            match icao_index.entry(airport.icao.clone()) {
                Entry::Vacant(entry) => {
                    entry.insert(index);
                }
                Entry::Occupied(entry) => {
                    duplicate_icaos += 1;
                    warn!(
                        "Duplicate airport {} at index {}, lookups keep index {}",
                        airport.icao,
                        index,
                        entry.get()
                    );
                }
            }
        }

        Self {
            airports,
            icao_index,
            source_files: Vec::new(),
            load_time: Instant::now(),
            duplicate_icaos,
        }
    }

    /// Number of airports
    pub fn count(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    /// Airport at `index`
    pub fn get(&self, index: usize) -> Option<&Airport> {
        self.airports.get(index)
    }

    /// Airport at `index`, or an error naming the valid range
    pub fn airport(&self, index: usize) -> Result<&Airport> {
        self.airports
            .get(index)
            .ok_or_else(|| Error::airport_index_out_of_range(index, self.airports.len()))
    }

    /// All airports in index order
    pub fn airports(&self) -> &[Airport] {
        &self.airports
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Airport> {
        self.airports.iter()
    }

    /// Index of a known-present ICAO code
    ///
    /// # Panics
    /// If no airport has this code. Use [`try_find`](Self::try_find) or
    /// [`require`](Self::require) for codes that came from a user.
    pub fn find(&self, icao: &str) -> usize {
        self.try_find(icao)
            .unwrap_or_else(|| panic!("airport {icao} is not in the database"))
    }

    /// Index of an ICAO code, if present
    pub fn try_find(&self, icao: &str) -> Option<usize> {
        self.icao_index.get(icao).copied()
    }

    /// Index of an ICAO code, or `Error::AirportNotFound`
    pub fn require(&self, icao: &str) -> Result<usize> {
        self.try_find(icao)
            .ok_or_else(|| Error::airport_not_found(icao))
    }

    pub fn contains(&self, icao: &str) -> bool {
        self.icao_index.contains_key(icao)
    }

    /// Airport record for an ICAO code
    pub fn get_by_icao(&self, icao: &str) -> Option<&Airport> {
        self.try_find(icao).map(|index| &self.airports[index])
    }

    /// Get database metadata
    pub fn metadata(&self) -> DatabaseMetadata {
        DatabaseMetadata {
            source_files: self.source_files.clone(),
            airport_count: self.airports.len(),
            runway_count: self.airports.iter().map(|a| a.runways.len()).sum(),
            airports_with_boundary: self.airports.iter().filter(|a| a.has_boundary()).count(),
            duplicate_icaos: self.duplicate_icaos,
            load_time: self.load_time,
        }
    }
}

impl Index<usize> for AirportDatabase {
    type Output = Airport;

    fn index(&self, index: usize) -> &Airport {
        &self.airports[index]
    }
}

impl<'a> IntoIterator for &'a AirportDatabase {
    type Item = &'a Airport;
    type IntoIter = std::slice::Iter<'a, Airport>;

    fn into_iter(self) -> Self::IntoIter {
        self.airports.iter()
    }
}
