//! Shared fixtures for projection tests

use crate::app::models::{Airport, GeoPoint, Polygon, Runway};
use crate::app::services::airport_db::AirportDatabase;


pub const EPSILON: f64 = 1e-6;

/// Airport whose boundary is taller (north-south) than it is wide
pub fn tall_airport() -> Airport {
    let mut airport = Airport::new("KSEA", "Seattle Tacoma Intl", 433.0);
    airport.boundary = Polygon::from(vec![
        GeoPoint::new(47.47, -122.32),
        GeoPoint::new(47.47, -122.30),
        GeoPoint::new(47.43, -122.30),
        GeoPoint::new(47.43, -122.32),
    ]);
    airport.runways.push(Runway::new(
        45.72,
        ["16L".to_string(), "34R".to_string()],
        [GeoPoint::new(47.4638, -122.30788), GeoPoint::new(47.43134, -122.30807)],
    ));
    airport
}

/// Airport whose boundary is wider (east-west) than it is tall
pub fn wide_airport() -> Airport {
    let mut airport = Airport::new("WIDE", "Wide Field", 0.0);
    airport.boundary = Polygon::from(vec![
        GeoPoint::new(47.46, -122.35),
        GeoPoint::new(47.46, -122.30),
        GeoPoint::new(47.45, -122.30),
        GeoPoint::new(47.45, -122.35),
    ]);
    airport.runways.push(Runway::new(
        30.0,
        ["09".to_string(), "27".to_string()],
        [GeoPoint::new(47.455, -122.345), GeoPoint::new(47.455, -122.305)],
    ));
    airport
}

pub fn database(airports: Vec<Airport>) -> AirportDatabase {
    AirportDatabase::from_airports(airports)
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}
