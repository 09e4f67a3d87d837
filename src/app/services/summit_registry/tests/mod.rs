//! Tests for the summit registry
//!
//! Loader tests build reference tables in temporary files; query tests
//! exercise park-list splitting and lookup behavior.


use std::path::PathBuf;
use tempfile::TempDir;

use crate::app::services::summit_registry::SummitRegistry;

/// Write a reference table to a temporary file, returning the guard and path
pub fn write_test_table(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("sota_pota.csv");
    std::fs::write(&path, content).unwrap();
    (temp_dir, path)
}

/// Build a registry directly from (summit, park list) pairs
pub fn create_test_registry(entries: &[(&str, &str)]) -> SummitRegistry {
    let mut registry = SummitRegistry::new(PathBuf::from("test://registry"));
    for (summit, parks) in entries {
        registry
            .parks_by_summit
            .insert(summit.to_string(), parks.to_string());
    }
    registry
}
