//! Shared fixtures for apt.dat parser tests

use std::fs;
use std::path::{Path, PathBuf};


/// File preamble as written by X-Plane
pub const PREAMBLE: &str = "I\n1100 Version - data cycle 2013.10, build 20131335\n\n";

/// KSEA with two runways, metadata, a boundary and one pavement section
pub const KSEA: &str = "\
1    433 1 0 KSEA Seattle Tacoma Intl
1302 city Seattle
1302 country United States
1302 state Washington
1302 datum_lat 47.449888889
1302 datum_lon -122.311777778
1302 iata_code SEA
100 45.72 1 0 0.00 1 3 0 16L 47.46380000 -122.30788000 0.00 0.00 3 0 0 1 34R 47.43134000 -122.30807000 0.00 0.00 3 0 0 1
100 45.72 1 0 0.00 1 3 0 16C 47.46384000 -122.31087000 0.00 0.00 3 0 0 1 34C 47.43803000 -122.31103000 0.00 0.00 3 0 0 1
130 Airport Boundary
111 47.4700 -122.3200
112 47.4700 -122.3000 47.4700 -122.3000
111 47.4300 -122.3000
114 47.4300 -122.3200 47.4300 -122.3200
110 1 0.25 150.29 Taxiway A
111 47.4600 -122.3050
111 47.4600 -122.3040
113 47.4500 -122.3040
";

/// Heliport whose runway rows must not attach to anything
pub const HELIPORT: &str = "\
17 0 0 0 WA09 Harborview Medical Center
100 20.00 1 0 0.00 0 0 0 H1 47.60 -122.32 0.00 0.00 0 0 0 0 H1X 47.61 -122.33 0.00 0.00 0 0 0 0
1302 city Seattle
";

/// Small airport with one runway and a square boundary
pub const SMALL_FIELD: &str = "\
1 30 0 0 TEST Test Field
100 30.00 1 0 0.00 0 0 0 09 47.0000 -122.0100 0.00 0.00 0 0 0 0 27 47.0000 -121.9900 0.00 0.00 0 0 0 0
130 Boundary
111 47.0100 -122.0100
111 47.0100 -121.9900
111 46.9900 -121.9900
113 46.9900 -122.0100
";

/// Write an apt.dat file below `dir` and return its path
pub fn write_apt_dat(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

/// Concatenate the file preamble with airport sections
pub fn apt_dat(sections: &[&str]) -> String {
    let mut content = String::from(PREAMBLE);
    for section in sections {
        content.push_str(section);
    }
    content.push_str("99\n");
    content
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
