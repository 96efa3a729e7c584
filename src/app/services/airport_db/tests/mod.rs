//! Shared test utilities and fixtures for airport database tests

use crate::app::models::{Airport, GeoPoint, Runway};
use crate::app::services::airport_db::AirportDatabase;

pub mod database_tests;
pub mod query_tests;

/// Create a test airport with a datum and optional city
pub fn create_test_airport(icao: &str, name: &str, city: Option<&str>, lat: f64, lon: f64) -> Airport {
    let mut airport = Airport::new(icao, name, 0.0);
    airport.city = city.map(str::to_string);
    airport.latitude = lat;
    airport.longitude = lon;
    airport
}

/// Create a runway between two points
pub fn create_test_runway(width_m: f64, start: (f64, f64), end: (f64, f64)) -> Runway {
    Runway::new(
        width_m,
        ["09".to_string(), "27".to_string()],
        [GeoPoint::new(start.0, start.1), GeoPoint::new(end.0, end.1)],
    )
}

/// Database of a few Pacific Northwest airports
pub fn create_test_database() -> AirportDatabase {
    let mut boeing = create_test_airport("KBFI", "Boeing Field King Co Intl", Some("Seattle"), 0.0, 0.0);
    // No datum: location comes from the first runway
    boeing
        .runways
        .push(create_test_runway(61.0, (47.5442, -122.3144), (47.5195, -122.2971)));

    AirportDatabase::from_airports(vec![
        create_test_airport("KSEA", "Seattle Tacoma Intl", Some("Seattle"), 47.4499, -122.3118),
        create_test_airport("KPDX", "Portland Intl", Some("Portland"), 45.5887, -122.5975),
        boeing,
        create_test_airport("CYVR", "Vancouver Intl", Some("Vancouver"), 49.1939, -123.1844),
        create_test_airport("XNON", "Nowhere Strip", None, 0.0, 0.0),
    ])
}
