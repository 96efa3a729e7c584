//! Data models for airport data
//!
//! This module contains the core data structures for representing airports
//! read from apt.dat files and the points produced by projecting them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// Coordinates
// =============================================================================

/// A WGS84 latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// A point in draw space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DrawPoint {
    pub x: f64,
    pub y: f64,
}

impl DrawPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another draw point
    pub fn distance_to(&self, other: &DrawPoint) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

// =============================================================================
// Polygon
// =============================================================================

/// Ordered, growable sequence of vertices
///
/// Used for the airport boundary and for each pavement section. Vertex order
/// is the order rows appeared in the source file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polygon {
    vertices: Vec<GeoPoint>,
}

impl Polygon {
    /// Create an empty polygon
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vertex
    pub fn push(&mut self, point: GeoPoint) {
        self.vertices.push(point);
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex at `index`
    pub fn get(&self, index: usize) -> Option<&GeoPoint> {
        self.vertices.get(index)
    }

    /// Last vertex appended
    pub fn last(&self) -> Option<&GeoPoint> {
        self.vertices.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GeoPoint> {
        self.vertices.iter()
    }

    pub fn as_slice(&self) -> &[GeoPoint] {
        &self.vertices
    }
}

impl From<Vec<GeoPoint>> for Polygon {
    fn from(vertices: Vec<GeoPoint>) -> Self {
        Self { vertices }
    }
}

impl FromIterator<GeoPoint> for Polygon {
    fn from_iter<I: IntoIterator<Item = GeoPoint>>(iter: I) -> Self {
        Self {
            vertices: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Polygon {
    type Item = &'a GeoPoint;
    type IntoIter = std::slice::Iter<'a, GeoPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}

// =============================================================================
// Runway
// =============================================================================

/// One physical runway: a segment between two labelled ends with a width
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Runway {
    /// Width in meters (0 when the source value was malformed)
    pub width_m: f64,

    /// End labels (e.g. "16L", "34R")
    pub labels: [String; 2],

    /// End coordinates, index-aligned with `labels`
    pub ends: [GeoPoint; 2],
}

impl Runway {
    pub fn new(width_m: f64, labels: [String; 2], ends: [GeoPoint; 2]) -> Self {
        Self {
            width_m,
            labels,
            ends,
        }
    }

    /// Designator such as "16L/34R"
    pub fn designator(&self) -> String {
        format!("{}/{}", self.labels[0], self.labels[1])
    }
}

// =============================================================================
// Airport
// =============================================================================

/// An airport record built from one land airport header and the rows after it
///
/// Text metadata is optional and only present when a 1302 row supplied it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Airport {
    /// ICAO-style identifier (e.g. "KSEA")
    pub icao: String,

    /// Display name (may contain spaces)
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Field elevation in feet from the header row
    pub elevation_ft: f64,

    /// Reference datum latitude (0 until a `datum_lat` row is seen)
    pub latitude: f64,

    /// Reference datum longitude (0 until a `datum_lon` row is seen)
    pub longitude: f64,

    /// Runways in row order
    pub runways: Vec<Runway>,

    /// Airport boundary vertices in row order
    pub boundary: Polygon,

    /// Pavement sections, each an ordered polygon
    pub pavements: Vec<Polygon>,

    /// 1302 metadata not stored in a typed field
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra_metadata: BTreeMap<String, String>,
}

impl Airport {
    /// Create an airport from its header fields
    pub fn new(icao: impl Into<String>, name: impl Into<String>, elevation_ft: f64) -> Self {
        Self {
            icao: icao.into(),
            name: name.into(),
            elevation_ft,
            ..Self::default()
        }
    }

    /// Reference datum as a point
    pub fn datum(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }

    /// Best known position of the airport
    ///
    /// The datum when one was supplied, otherwise the first runway end.
    pub fn location(&self) -> Option<GeoPoint> {
        if self.latitude != 0.0 || self.longitude != 0.0 {
            return Some(self.datum());
        }
        self.reference_runway().map(|runway| runway.ends[0])
    }

    /// First runway, the calibration reference for projection
    pub fn reference_runway(&self) -> Option<&Runway> {
        self.runways.first()
    }

    pub fn has_boundary(&self) -> bool {
        !self.boundary.is_empty()
    }

    /// Single-line description for reports
    pub fn display_label(&self) -> String {
        match (&self.city, &self.country) {
            (Some(city), Some(country)) => {
                format!("{} - {} ({}, {})", self.icao, self.name, city, country)
            }
            (Some(city), None) => format!("{} - {} ({})", self.icao, self.name, city),
            _ => format!("{} - {}", self.icao, self.name),
        }
    }
}
