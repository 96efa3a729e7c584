//! Tests for indexed access and ICAO lookups

use super::*;
use crate::Error;

#[test]
fn test_indices_follow_input_order() {
    let db = create_test_database();
    assert_eq!(db.count(), 5);
    assert!(!db.is_empty());
    assert_eq!(db[0].icao, "KSEA");
    assert_eq!(db.get(1).map(|a| a.icao.as_str()), Some("KPDX"));
    assert!(db.get(5).is_none());

    let codes: Vec<&str> = db.iter().map(|a| a.icao.as_str()).collect();
    assert_eq!(codes, vec!["KSEA", "KPDX", "KBFI", "CYVR", "XNON"]);
}

#[test]
fn test_find_known_code() {
    let db = create_test_database();
    assert_eq!(db.find("CYVR"), 3);
    assert_eq!(db.find("KSEA"), 0);
}

#[test]
#[should_panic(expected = "EGLL")]
fn test_find_unknown_code_panics() {
    let db = create_test_database();
    db.find("EGLL");
}

#[test]
fn test_tolerant_lookups() {
    let db = create_test_database();
    assert_eq!(db.try_find("KPDX"), Some(1));
    assert_eq!(db.try_find("EGLL"), None);
    assert_eq!(db.try_find("ksea"), None);
    assert!(db.contains("KBFI"));
    assert!(!db.contains("EGLL"));
    assert_eq!(
        db.get_by_icao("KSEA").map(|a| a.name.as_str()),
        Some("Seattle Tacoma Intl")
    );

    match db.require("EGLL") {
        Err(Error::AirportNotFound { icao }) => assert_eq!(icao, "EGLL"),
        other => panic!("Expected AirportNotFound, got {:?}", other),
    }
}

#[test]
fn test_airport_index_out_of_range() {
    let db = create_test_database();
    assert!(db.airport(4).is_ok());

    match db.airport(9) {
        Err(Error::AirportIndexOutOfRange { index, count }) => {
            assert_eq!(index, 9);
            assert_eq!(count, 5);
        }
        other => panic!("Expected AirportIndexOutOfRange, got {:?}", other),
    }
}

#[test]
fn test_duplicate_icao_keeps_first() {
    let db = AirportDatabase::from_airports(vec![
        create_test_airport("KSEA", "First", None, 1.0, 1.0),
        create_test_airport("KPDX", "Portland Intl", None, 2.0, 2.0),
        create_test_airport("KSEA", "Second", None, 3.0, 3.0),
    ]);

    assert_eq!(db.count(), 3);
    assert_eq!(db.find("KSEA"), 0);
    assert_eq!(db[2].name, "Second");
    assert_eq!(db.metadata().duplicate_icaos, 1);
}

#[test]
fn test_concurrent_readers() {
    let db = create_test_database();

    std::thread::scope(|scope| {
        let handles: Vec<_> = ["KSEA", "KPDX", "CYVR", "KBFI"]
            .into_iter()
            .map(|icao| {
                let db = &db;
                scope.spawn(move || db.find(icao))
            })
            .collect();

        let indices: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(indices, vec![0, 1, 3, 2]);
    });
}
