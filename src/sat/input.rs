//! Loading instances from disk.

use crate::sat::cnf::Formula;
use crate::sat::dimacs::parse_dimacs;
use crate::sat::error::ParseResult;
use crate::sat::pairs::parse_pairs;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Whether `path` names a DIMACS file (extension `.cnf`).
#[must_use]
pub fn is_dimacs(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "cnf")
}

/// Parses the instance at `path`: DIMACS for `.cnf` files, the clause-list
/// format otherwise.
///
/// # Errors
///
/// If the file cannot be opened or read, or its contents are malformed.
pub fn parse_file<P: AsRef<Path>>(path: P) -> ParseResult<Formula> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);

    if is_dimacs(path) {
        parse_dimacs(reader)
    } else {
        parse_pairs(reader)
    }
}

/// Recursively finds instance files (`.txt` or `.cnf`) under `dir`, sorted by
/// path.
///
/// # Errors
///
/// If the directory cannot be walked.
pub fn find_instances<P: AsRef<Path>>(dir: P) -> ParseResult<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() {
            continue;
        }
        if path.extension().is_some_and(|ext| ext == "txt" || ext == "cnf") {
            files.push(path.to_path_buf());
        } else {
            log::debug!("skipping {}", path.display());
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sat::error::ParseError;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("twosat-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_parse_file_dispatches_on_extension() {
        let dir = scratch_dir("dispatch");
        let pairs = dir.join("a.txt");
        let dimacs = dir.join("b.cnf");
        fs::write(&pairs, "2\n1 2\n-1 -2\n").unwrap();
        fs::write(&dimacs, "p cnf 2 2\n1 2 0\n-1 -2 0\n").unwrap();

        assert_eq!(parse_file(&pairs).unwrap(), parse_file(&dimacs).unwrap());
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_parse_missing_file() {
        let err = parse_file("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, ParseError::Io(_)));
    }

    #[test]
    fn test_find_instances() {
        let dir = scratch_dir("find");
        fs::create_dir_all(dir.join("nested")).unwrap();
        fs::write(dir.join("b.txt"), "0\n").unwrap();
        fs::write(dir.join("nested").join("a.cnf"), "").unwrap();
        fs::write(dir.join("notes.md"), "").unwrap();

        let found = find_instances(&dir).unwrap();
        assert_eq!(found, vec![dir.join("b.txt"), dir.join("nested").join("a.cnf")]);
        fs::remove_dir_all(dir).unwrap();
    }
}
