//! Tests for the SOTA CSV parser
//!
//! Fixtures write log content to temporary files so the loaders exercise
//! the real file-reading path.


use std::path::PathBuf;
use tempfile::TempDir;

/// Write CSV content to a temporary file, returning the guard and path
pub fn write_test_log(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("log.csv");
    std::fs::write(&path, content).unwrap();
    (temp_dir, path)
}
