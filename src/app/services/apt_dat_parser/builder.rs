//! Row handlers that build airport records during the fill pass

use super::row_code::{LineClass, RowCode, classify};
use super::state::{ParserState, RowAction};
use super::stats::ParseStats;
use super::tokens::LineFields;
use crate::Error;
use crate::app::models::{Airport, GeoPoint, Polygon, Runway};
use crate::constants::{fields, metadata_keys};
use tracing::{debug, trace, warn};

/// Accumulates airport records as classified rows arrive
///
/// Section state carries across file boundaries and is only reset by the
/// next header row.
#[derive(Debug)]
pub(crate) struct RecordBuilder {
    airports: Vec<Airport>,
    state: ParserState,
}

/// Builder contents before a source was applied
#[derive(Debug)]
pub(crate) struct Checkpoint {
    len: usize,
    state: ParserState,
    last: Option<Airport>,
}

impl RecordBuilder {
    /// Builder whose record storage is sized from the counting pass
    pub fn with_capacity(header_count: usize) -> Self {
        Self {
            airports: Vec::with_capacity(header_count),
            state: ParserState::NoAirport,
        }
    }

    /// Snapshot taken before a source is applied
    ///
    /// Rows at the start of a file may still extend the last open record, so
    /// that record is kept alongside the record count.
    pub fn checkpoint(&self) -> Checkpoint {
        if self.state.has_airport() {
            trace!("Continuing {:?} across file boundary", self.state);
        }
        Checkpoint {
            len: self.airports.len(),
            state: self.state,
            last: self.airports.last().cloned(),
        }
    }

    /// Discard everything applied since `checkpoint` was taken
    pub fn rollback(&mut self, checkpoint: Checkpoint) {
        let dropped = self.airports.len().saturating_sub(checkpoint.len);
        if dropped > 0 {
            debug!("Discarding {} partially read airport(s)", dropped);
        }

        self.airports.truncate(checkpoint.len);
        if let (Some(last), Some(slot)) = (checkpoint.last, self.airports.last_mut()) {
            *slot = last;
        }
        self.state = checkpoint.state;
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    pub fn state(&self) -> ParserState {
        self.state
    }

    pub fn into_airports(self) -> Vec<Airport> {
        self.airports
    }

    /// Classify one line and apply it to the active record
    pub fn apply_line(&mut self, line_number: usize, line: &str, stats: &mut ParseStats) {
        stats.lines_read += 1;

        let (code, row) = match classify(line) {
            LineClass::Empty => {
                stats.blank_lines += 1;
                return;
            }
            LineClass::Comment => {
                stats.comment_lines += 1;
                return;
            }
            LineClass::Invalid => {
                stats.invalid_lines += 1;
                return;
            }
            LineClass::Row { code, fields } => (code, fields),
        };

        let (next, action) = self.state.transition(code);
        if next != self.state {
            trace!(
                "line {}: {:?} -> {:?} on row {}",
                line_number,
                self.state,
                next,
                code.code()
            );
        }
        self.state = next;

        if action != RowAction::Ignore && row.len() < code.min_fields() {
            stats.malformed_rows += 1;
            debug!(
                "Skipping {}",
                Error::malformed_row(line_number, code.code(), code.min_fields(), row.len())
            );
            return;
        }

        match action {
            RowAction::Ignore => {
                if let RowCode::Other(_) = code {
                    stats.unhandled_rows += 1;
                } else {
                    stats.ignored_rows += 1;
                }
            }
            RowAction::OpenAirport => self.open_airport(line_number, &row, stats),
            RowAction::ExcludeFacility => {
                stats.excluded_facilities += 1;
                debug!(
                    "Excluding {} '{}' at line {}",
                    code.description(),
                    row.get(fields::HEADER_ICAO).unwrap_or_default(),
                    line_number
                );
            }
            RowAction::AddRunway => {
                if let Some(airport) = self.airports.last_mut() {
                    airport.runways.push(runway_from(&row));
                }
            }
            RowAction::OpenBoundary => {}
            RowAction::OpenPavement => {
                if let Some(airport) = self.airports.last_mut() {
                    airport.pavements.push(Polygon::new());
                }
            }
            RowAction::AddBoundaryVertex => {
                if let Some(airport) = self.airports.last_mut() {
                    airport.boundary.push(vertex_from(&row));
                }
            }
            RowAction::AddPavementVertex => {
                if let Some(pavement) = self
                    .airports
                    .last_mut()
                    .and_then(|airport| airport.pavements.last_mut())
                {
                    pavement.push(vertex_from(&row));
                }
            }
            RowAction::SetMetadata => {
                if let Some(airport) = self.airports.last_mut() {
                    apply_metadata(airport, &row);
                }
            }
        }
    }

    /// Commit a record for a land airport header
    ///
    /// A header too short to carry an ICAO code still commits a record so the
    /// record count matches the header count from the counting pass.
    fn open_airport(&mut self, line_number: usize, row: &LineFields<'_>, stats: &mut ParseStats) {
        stats.header_rows += 1;

        if row.len() <= fields::HEADER_ICAO {
            stats.malformed_rows += 1;
            warn!(
                "{}",
                Error::malformed_row(
                    line_number,
                    RowCode::LandAirport.code(),
                    fields::HEADER_ICAO + 1,
                    row.len()
                )
            );
        }

        let airport = Airport::new(
            row.string_at(fields::HEADER_ICAO),
            row.rest(fields::HEADER_NAME).unwrap_or_default(),
            row.f64_at(fields::HEADER_ELEVATION),
        );
        trace!("line {}: opened airport {}", line_number, airport.icao);
        self.airports.push(airport);
    }
}

fn runway_from(row: &LineFields<'_>) -> Runway {
    Runway::new(
        row.f64_at(fields::RUNWAY_WIDTH),
        [
            row.string_at(fields::RUNWAY_END1_LABEL),
            row.string_at(fields::RUNWAY_END2_LABEL),
        ],
        [
            GeoPoint::new(
                row.f64_at(fields::RUNWAY_END1_LAT),
                row.f64_at(fields::RUNWAY_END1_LON),
            ),
            GeoPoint::new(
                row.f64_at(fields::RUNWAY_END2_LAT),
                row.f64_at(fields::RUNWAY_END2_LON),
            ),
        ],
    )
}

fn vertex_from(row: &LineFields<'_>) -> GeoPoint {
    GeoPoint::new(row.f64_at(fields::NODE_LAT), row.f64_at(fields::NODE_LON))
}

fn apply_metadata(airport: &mut Airport, row: &LineFields<'_>) {
    let key = row.get(fields::METADATA_KEY).unwrap_or_default();
    let value = row.rest(fields::METADATA_VALUE).unwrap_or_default();

    match key {
        metadata_keys::CITY => airport.city = Some(value.to_string()),
        metadata_keys::COUNTRY => airport.country = Some(value.to_string()),
        metadata_keys::STATE => airport.state = Some(value.to_string()),
        metadata_keys::DATUM_LAT => airport.latitude = row.f64_at(fields::METADATA_VALUE),
        metadata_keys::DATUM_LON => airport.longitude = row.f64_at(fields::METADATA_VALUE),
        other => {
            airport
                .extra_metadata
                .insert(other.to_string(), value.to_string());
        }
    }
}
