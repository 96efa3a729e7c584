//! Explicit parser state for the apt.dat fill pass
//!
//! Which record a row belongs to depends on the rows before it. Rather than a
//! set of independent flags, the parser carries a single [`ParserState`] and
//! every row code maps to a `(next state, action)` pair through
//! [`ParserState::transition`].

use super::row_code::RowCode;

/// Section the parser is currently attributing rows to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParserState {
    /// No land airport is active; every row except a header is ignored
    #[default]
    NoAirport,
    /// A land airport is active and no polygon section is open
    InAirport,
    /// Node rows append to the airport boundary
    InBoundary,
    /// Node rows append to the most recent pavement polygon
    InPavement,
}

/// Effect a row has on the database under construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    /// Row carries nothing for the active record
    Ignore,
    /// Commit the next record slot from a land airport header
    OpenAirport,
    /// Seaplane base or heliport: stop attributing rows until the next header
    ExcludeFacility,
    /// Append a runway to the active airport
    AddRunway,
    /// Start accumulating boundary vertices
    OpenBoundary,
    /// Start a new pavement polygon
    OpenPavement,
    /// Append a vertex to the boundary
    AddBoundaryVertex,
    /// Append a vertex to the open pavement polygon
    AddPavementVertex,
    /// Apply a 1302 key/value row
    SetMetadata,
}

impl ParserState {
    /// Next state and the action to perform for a row
    pub fn transition(self, code: RowCode) -> (ParserState, RowAction) {
        use ParserState::*;
        use RowAction::*;

        match (self, code) {
            (_, RowCode::LandAirport) => (InAirport, OpenAirport),
            (_, RowCode::SeaplaneBase | RowCode::Heliport) => (NoAirport, ExcludeFacility),
            (NoAirport, _) => (NoAirport, Ignore),

            (_, RowCode::Boundary) => (InBoundary, OpenBoundary),
            (_, RowCode::Pavement) => (InPavement, OpenPavement),
            (_, RowCode::LinearFeature) => (InAirport, Ignore),

            (InBoundary, code) if code.is_node() => {
                let next = if code.closes_loop() { InAirport } else { InBoundary };
                (next, AddBoundaryVertex)
            }
            (InPavement, code) if code.is_node() => {
                let next = if code.closes_loop() { InAirport } else { InPavement };
                (next, AddPavementVertex)
            }
            (state, code) if code.is_node() => (state, Ignore),

            (state, RowCode::Runway) => (state, AddRunway),
            (state, RowCode::Metadata) => (state, SetMetadata),
            (state, _) => (state, Ignore),
        }
    }

    /// True while a record is receiving rows
    pub fn has_airport(&self) -> bool {
        !matches!(self, ParserState::NoAirport)
    }

    pub fn boundary_open(&self) -> bool {
        matches!(self, ParserState::InBoundary)
    }

    pub fn pavement_open(&self) -> bool {
        matches!(self, ParserState::InPavement)
    }
}
