//! Input path expansion
//!
//! Turns the paths given on the command line into the ordered list of
//! apt.dat files handed to the parser. Order matters: the first file that
//! declares an ICAO code owns it.

use crate::constants::APT_DAT_FILE_NAME;
use crate::{Error, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Expand files, scenery directories and glob patterns into apt.dat paths
///
/// - Directories are walked recursively for files named `apt.dat`, sorted by
///   path so scenery packs load in a stable order.
/// - Paths containing `*`, `?` or `[` are expanded as glob patterns.
/// - Any other path is kept as given; a missing file is reported by the
///   parser, which skips it.
///
/// Repeated paths are kept once, at their first position.
pub fn collect_input_files(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        if input.is_dir() {
            let found = find_apt_dat_files(input);
            if found.is_empty() {
                warn!("No {} files found under {}", APT_DAT_FILE_NAME, input.display());
            }
            files.extend(found);
        } else if is_glob_pattern(input) {
            let matched = expand_glob(input)?;
            if matched.is_empty() {
                warn!("Pattern {} matched no files", input.display());
            }
            files.extend(matched);
        } else {
            files.push(input.clone());
        }
    }

    let mut seen = HashSet::new();
    files.retain(|path| seen.insert(path.clone()));

    if files.is_empty() {
        return Err(Error::configuration(format!(
            "No {} files found in the given inputs",
            APT_DAT_FILE_NAME
        )));
    }

    debug!("Resolved {} input file(s)", files.len());
    Ok(files)
}

fn find_apt_dat_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", dir.display(), e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() && entry.file_name() == APT_DAT_FILE_NAME)
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}

fn is_glob_pattern(path: &Path) -> bool {
    path.to_string_lossy()
        .chars()
        .any(|c| matches!(c, '*' | '?' | '['))
}

fn expand_glob(pattern: &Path) -> Result<Vec<PathBuf>> {
    let pattern = pattern.to_string_lossy();
    let paths = glob::glob(&pattern).map_err(|e| {
        Error::configuration(format!("Invalid glob pattern '{}': {}", pattern, e))
    })?;

    let mut files = Vec::new();
    for entry in paths {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(_) => {}
            Err(e) => warn!("Skipping unreadable glob match: {}", e),
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "I\n1100 Version\n99\n").unwrap();
    }

    #[test]
    fn test_plain_paths_are_kept_in_order() {
        let inputs = vec![PathBuf::from("b/apt.dat"), PathBuf::from("a/apt.dat")];
        let files = collect_input_files(&inputs).unwrap();
        assert_eq!(files, inputs);
    }

    #[test]
    fn test_duplicates_keep_first_position() {
        let inputs = vec![
            PathBuf::from("one.dat"),
            PathBuf::from("two.dat"),
            PathBuf::from("one.dat"),
        ];
        let files = collect_input_files(&inputs).unwrap();
        assert_eq!(
            files,
            vec![PathBuf::from("one.dat"), PathBuf::from("two.dat")]
        );
    }

    #[test]
    fn test_directory_is_walked_for_apt_dat() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(&root.join("Global Airports/Earth nav data/apt.dat"));
        touch(&root.join("Custom Scenery/KSEA Demo/Earth nav data/apt.dat"));
        touch(&root.join("Custom Scenery/KSEA Demo/Earth nav data/earth_nav.dat"));

        let files = collect_input_files(&[root.to_path_buf()]).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|path| path.file_name().unwrap() == "apt.dat"));
        assert!(files[0] < files[1]);
    }

    #[test]
    fn test_glob_pattern_is_expanded() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(&root.join("north.dat"));
        touch(&root.join("south.dat"));
        touch(&root.join("notes.txt"));

        let pattern = root.join("*.dat");
        let files = collect_input_files(&[pattern]).unwrap();

        assert_eq!(files, vec![root.join("north.dat"), root.join("south.dat")]);
    }

    #[test]
    fn test_empty_expansion_is_configuration_error() {
        let temp_dir = TempDir::new().unwrap();

        let result = collect_input_files(&[temp_dir.path().to_path_buf()]);
        assert!(matches!(result, Err(Error::Configuration { .. })));

        let result = collect_input_files(&[temp_dir.path().join("*.dat")]);
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }
}
