//! Row classification for apt.dat lines
//!
//! Every non-comment line starts with an integer row code naming the record
//! type. This module maps the codes the parser understands onto [`RowCode`]
//! and carries the per-code field schema used to reject short rows.

use super::tokens::LineFields;
use crate::constants::{COMMENT_PREFIX, fields, row_codes};

/// Decoded apt.dat row code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowCode {
    LandAirport,
    SeaplaneBase,
    Heliport,
    Runway,
    Pavement,
    Node,
    BezierNode,
    CloseNode,
    CloseBezierNode,
    LinearFeature,
    Boundary,
    Metadata,
    /// Any code the parser does not act on
    Other(i64),
}

impl RowCode {
    /// Map a numeric row code
    pub fn from_code(code: i64) -> Self {
        match code {
            row_codes::LAND_AIRPORT => Self::LandAirport,
            row_codes::SEAPLANE_BASE => Self::SeaplaneBase,
            row_codes::HELIPORT => Self::Heliport,
            row_codes::RUNWAY => Self::Runway,
            row_codes::PAVEMENT => Self::Pavement,
            row_codes::NODE => Self::Node,
            row_codes::BEZIER_NODE => Self::BezierNode,
            row_codes::CLOSE_NODE => Self::CloseNode,
            row_codes::CLOSE_BEZIER_NODE => Self::CloseBezierNode,
            row_codes::LINEAR_FEATURE => Self::LinearFeature,
            row_codes::BOUNDARY => Self::Boundary,
            row_codes::METADATA => Self::Metadata,
            other => Self::Other(other),
        }
    }

    /// Numeric code as it appears in the file
    pub fn code(&self) -> i64 {
        match self {
            Self::LandAirport => row_codes::LAND_AIRPORT,
            Self::SeaplaneBase => row_codes::SEAPLANE_BASE,
            Self::Heliport => row_codes::HELIPORT,
            Self::Runway => row_codes::RUNWAY,
            Self::Pavement => row_codes::PAVEMENT,
            Self::Node => row_codes::NODE,
            Self::BezierNode => row_codes::BEZIER_NODE,
            Self::CloseNode => row_codes::CLOSE_NODE,
            Self::CloseBezierNode => row_codes::CLOSE_BEZIER_NODE,
            Self::LinearFeature => row_codes::LINEAR_FEATURE,
            Self::Boundary => row_codes::BOUNDARY,
            Self::Metadata => row_codes::METADATA,
            Self::Other(code) => *code,
        }
    }

    /// Minimum number of fields (row code included) the parser reads
    ///
    /// Header rows are accepted with any field count; a short header still
    /// opens a record so indices line up with the header count.
    pub fn min_fields(&self) -> usize {
        match self {
            Self::Runway => fields::RUNWAY_END2_LON + 1,
            Self::Node | Self::BezierNode | Self::CloseNode | Self::CloseBezierNode => {
                fields::NODE_LON + 1
            }
            Self::Metadata => fields::METADATA_VALUE + 1,
            _ => 1,
        }
    }

    /// Polygon vertex rows
    pub fn is_node(&self) -> bool {
        matches!(
            self,
            Self::Node | Self::BezierNode | Self::CloseNode | Self::CloseBezierNode
        )
    }

    /// Vertex rows that implicitly close the open loop
    pub fn closes_loop(&self) -> bool {
        matches!(self, Self::CloseNode | Self::CloseBezierNode)
    }

    /// Short description for logs and reports
    pub fn description(&self) -> &'static str {
        match self {
            Self::LandAirport => "land airport header",
            Self::SeaplaneBase => "seaplane base header",
            Self::Heliport => "heliport header",
            Self::Runway => "runway",
            Self::Pavement => "pavement header",
            Self::Node => "node",
            Self::BezierNode => "bezier node",
            Self::CloseNode => "closing node",
            Self::CloseBezierNode => "closing bezier node",
            Self::LinearFeature => "linear feature header",
            Self::Boundary => "boundary header",
            Self::Metadata => "metadata",
            Self::Other(_) => "unhandled row",
        }
    }
}

/// Classification of a single line
#[derive(Debug, Clone)]
pub enum LineClass<'a> {
    /// Nothing but whitespace
    Empty,
    /// Starts with `##`
    Comment,
    /// Leading field is not an integer (e.g. the `I`/`A` file marker)
    Invalid,
    /// A row with its decoded code and fields
    Row {
        code: RowCode,
        fields: LineFields<'a>,
    },
}

/// Classify one newline-stripped line
pub fn classify(line: &str) -> LineClass<'_> {
    if line.trim_start().starts_with(COMMENT_PREFIX) {
        return LineClass::Comment;
    }

    let fields = LineFields::new(line);
    let Some(first) = fields.get(0) else {
        return LineClass::Empty;
    };

    match first.parse::<i64>() {
        Ok(code) => LineClass::Row {
            code: RowCode::from_code(code),
            fields,
        },
        Err(_) => LineClass::Invalid,
    }
}

/// Leading row code of a line, if it has one
///
/// Used by the counting pass, which only needs the code.
pub fn row_code_of(line: &str) -> Option<RowCode> {
    match classify(line) {
        LineClass::Row { code, .. } => Some(code),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip_for_handled_rows() {
        for code in [1, 16, 17, 100, 110, 111, 112, 113, 114, 120, 130, 1302] {
            let row = RowCode::from_code(code);
            assert!(!matches!(row, RowCode::Other(_)), "code {code} unhandled");
            assert_eq!(row.code(), code);
        }
        assert_eq!(RowCode::from_code(1300), RowCode::Other(1300));
    }

    #[test]
    fn test_schema_sizes() {
        assert_eq!(RowCode::Runway.min_fields(), 20);
        assert_eq!(RowCode::Node.min_fields(), 3);
        assert_eq!(RowCode::CloseBezierNode.min_fields(), 3);
        assert_eq!(RowCode::Metadata.min_fields(), 3);
        assert_eq!(RowCode::LandAirport.min_fields(), 1);
    }

    #[test]
    fn test_classify_row() {
        match classify("1302 city Seattle") {
            LineClass::Row { code, fields } => {
                assert_eq!(code, RowCode::Metadata);
                assert_eq!(fields.get(1), Some("city"));
            }
            other => panic!("Expected row, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_empty_and_invalid() {
        assert!(matches!(classify(""), LineClass::Empty));
        assert!(matches!(classify("   "), LineClass::Empty));
        assert!(matches!(classify("I"), LineClass::Invalid));
        assert!(matches!(classify("A"), LineClass::Invalid));
        assert!(matches!(classify("## generated"), LineClass::Comment));
        assert!(matches!(classify("  ## indented"), LineClass::Comment));
    }

    #[test]
    fn test_row_code_of() {
        assert_eq!(row_code_of("1 433 1 0 KSEA Seattle"), Some(RowCode::LandAirport));
        assert_eq!(row_code_of("99"), Some(RowCode::Other(99)));
        assert_eq!(row_code_of(""), None);
    }

    #[test]
    fn test_node_predicates() {
        assert!(RowCode::BezierNode.is_node());
        assert!(!RowCode::BezierNode.closes_loop());
        assert!(RowCode::CloseNode.closes_loop());
        assert!(!RowCode::Runway.is_node());
    }
}
