//! Tests for airport query and search functionality

use super::*;
use crate::app::models::GeoPoint;
use crate::app::services::airport_db::{GeographicRegion, SearchCriteria};

fn codes(matches: &[crate::app::services::airport_db::AirportMatch<'_>]) -> Vec<String> {
    matches.iter().map(|m| m.airport.icao.clone()).collect()
}

#[test]
fn test_find_by_name() {
    let db = create_test_database();

    assert_eq!(codes(&db.find_by_name("INTL")), vec!["KSEA", "KPDX", "KBFI", "CYVR"]);
    assert_eq!(codes(&db.find_by_name("tacoma")), vec!["KSEA"]);
    assert!(db.find_by_name("heathrow").is_empty());
}

#[test]
fn test_find_by_name_matches_city() {
    let db = create_test_database();

    let seattle = db.find_by_name("seattle");
    assert_eq!(codes(&seattle), vec!["KSEA", "KBFI"]);
    assert_eq!(seattle[1].index, 2);
}

#[test]
fn test_find_in_region() {
    let db = create_test_database();

    // Washington state
    let washington = db.find_in_region(45.6, 49.0, -124.8, -116.9);
    assert_eq!(codes(&washington), vec!["KSEA", "KBFI"]);

    // Airports without any location never match
    let null_island = db.find_in_region(-1.0, 1.0, -1.0, 1.0);
    assert!(null_island.is_empty());
}

#[test]
fn test_find_nearest() {
    let db = create_test_database();
    let downtown_seattle = GeoPoint::new(47.6062, -122.3321);

    let nearest = db.find_nearest(downtown_seattle, 3);
    assert_eq!(codes(&nearest), vec!["KBFI", "KSEA", "CYVR"]);

    let distances: Vec<f64> = nearest.iter().map(|m| m.distance_m.unwrap()).collect();
    assert!(distances.windows(2).all(|w| w[0] <= w[1]));
    assert!(distances[0] > 5_000.0 && distances[0] < 15_000.0);
}

#[test]
fn test_find_by_criteria() {
    let db = create_test_database();

    let criteria = SearchCriteria {
        name_pattern: Some("intl".to_string()),
        region: Some(GeographicRegion::new(45.0, 48.0, -123.0, -122.0)),
        ..SearchCriteria::default()
    };
    assert_eq!(codes(&db.find_by_criteria(&criteria)), vec!["KSEA", "KPDX", "KBFI"]);

    let criteria = SearchCriteria {
        name_pattern: Some("intl".to_string()),
        near: Some(GeoPoint::new(45.5, -122.6)),
        limit: Some(2),
        ..SearchCriteria::default()
    };
    assert_eq!(codes(&db.find_by_criteria(&criteria)), vec!["KPDX", "KSEA"]);

    // No filters returns everything in index order
    assert_eq!(db.find_by_criteria(&SearchCriteria::default()).len(), 5);
}

#[test]
fn test_region_contains_edges() {
    let region = GeographicRegion::new(10.0, 20.0, -5.0, 5.0);
    assert!(region.contains(&GeoPoint::new(10.0, -5.0)));
    assert!(region.contains(&GeoPoint::new(20.0, 5.0)));
    assert!(!region.contains(&GeoPoint::new(20.1, 0.0)));
}
