//! Summit registry service for O(1) summit-to-park lookups
//!
//! This module loads the summit-to-park reference table and indexes park
//! lists by summit code. Park lists are stored as the raw delimited string
//! from the table and split on demand, so the registry can also answer
//! whether a summit is known at all.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::constants;

pub mod loader;

#[cfg(test)]
pub mod tests;

/// Summit registry providing O(1) park-list lookups by summit code
///
/// The registry is built from the reference table produced by the summits
/// command (or any CSV with `SummitCode` and `Pota` columns). A summit with
/// an empty park list is a known summit with no park association; an
/// unknown summit behaves identically for expansion purposes.
#[derive(Debug, Clone)]
pub struct SummitRegistry {
    /// Raw park-list strings indexed by summit code
    pub(crate) parks_by_summit: HashMap<String, String>,

    /// Path of the reference table this registry was loaded from
    pub(crate) source_path: PathBuf,
}

impl SummitRegistry {
    /// Create a new empty registry
    pub fn new(source_path: PathBuf) -> Self {
        Self {
            parks_by_summit: HashMap::new(),
            source_path,
        }
    }

    /// Get the deduplicated park codes for a summit
    ///
    /// Returns an empty vector for summits without park associations and
    /// for summits absent from the reference table.
    pub fn parks_for_summit(&self, summit_code: &str) -> Vec<String> {
        self.parks_by_summit
            .get(summit_code)
            .map(|raw| split_park_list(raw))
            .unwrap_or_default()
    }

    /// Get the raw park-list string for a summit, if known
    pub fn raw_park_list(&self, summit_code: &str) -> Option<&str> {
        self.parks_by_summit.get(summit_code).map(String::as_str)
    }

    /// Check whether a summit appears in the reference table
    pub fn contains_summit(&self, summit_code: &str) -> bool {
        self.parks_by_summit.contains_key(summit_code)
    }

    /// Total number of summits in the registry
    pub fn summit_count(&self) -> usize {
        self.parks_by_summit.len()
    }

    /// Number of summits with at least one park association
    pub fn summits_with_parks(&self) -> usize {
        self.parks_by_summit
            .values()
            .filter(|raw| !split_park_list(raw).is_empty())
            .count()
    }

    /// Path of the reference table this registry was loaded from
    pub fn source_path(&self) -> &std::path::Path {
        &self.source_path
    }
}

/// Split a raw park-list string into deduplicated park codes
///
/// Tokens are split on the accepted delimiters, trimmed, and deduplicated
/// preserving first-seen order. Empty tokens are dropped, so `""` and
/// `"/"` both yield no parks.
pub fn split_park_list(raw: &str) -> Vec<String> {
    let mut parks: Vec<String> = Vec::new();
    for token in raw.split(constants::PARK_LIST_DELIMITERS) {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        if !parks.iter().any(|p| p == token) {
            parks.push(token.to_string());
        }
    }
    parks
}
