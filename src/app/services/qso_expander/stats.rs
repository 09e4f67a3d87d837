//! Expansion statistics and result structures
//!
//! This module provides types for tracking how activator contacts fan out
//! into park-qualified rows and how many of them carried S2S information.

use crate::app::models::ExpandedQso;

/// Statistics for a log expansion run
#[derive(Debug, Clone, PartialEq)]
pub struct ExpansionStats {
    /// Total number of activator contacts read
    pub total_input: usize,
    /// Contacts dropped because their summit maps to no park
    pub unmapped_summits: usize,
    /// Contacts that matched an S2S record
    pub s2s_matches: usize,
    /// Expanded rows carrying a counterparty park (park-to-park)
    pub p2p_rows: usize,
    /// Total expanded rows produced
    pub expanded: usize,
}

impl ExpansionStats {
    /// Create new empty expansion statistics
    pub fn new() -> Self {
        Self {
            total_input: 0,
            unmapped_summits: 0,
            s2s_matches: 0,
            p2p_rows: 0,
            expanded: 0,
        }
    }

    /// Number of input contacts whose summit mapped to at least one park
    pub fn mapped_input(&self) -> usize {
        self.total_input - self.unmapped_summits
    }

    /// Percentage of input contacts that produced at least one row
    pub fn mapped_rate(&self) -> f64 {
        if self.total_input == 0 {
            100.0
        } else {
            (self.mapped_input() as f64 / self.total_input as f64) * 100.0
        }
    }

    /// Average number of rows produced per mapped contact
    pub fn expansion_factor(&self) -> f64 {
        if self.mapped_input() == 0 {
            0.0
        } else {
            self.expanded as f64 / self.mapped_input() as f64
        }
    }

    /// Get summary of the expansion run
    pub fn summary(&self) -> String {
        format!(
            "Expansion summary: {} contacts -> {} rows ({:.1}% mapped) | \
             S2S matches: {} | P2P rows: {} | Unmapped summits: {}",
            self.total_input,
            self.expanded,
            self.mapped_rate(),
            self.s2s_matches,
            self.p2p_rows,
            self.unmapped_summits
        )
    }
}

impl Default for ExpansionStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of expanding an activator log
#[derive(Debug, Clone)]
pub struct ExpansionResult {
    /// Park-qualified rows in input order
    pub qsos: Vec<ExpandedQso>,
    /// Expansion statistics
    pub stats: ExpansionStats,
}

impl ExpansionResult {
    /// Create a new expansion result
    pub fn new(qsos: Vec<ExpandedQso>, stats: ExpansionStats) -> Self {
        Self { qsos, stats }
    }

    /// Get the number of expanded rows
    pub fn qso_count(&self) -> usize {
        self.qsos.len()
    }

    /// Get summary string for logging
    pub fn summary(&self) -> String {
        self.stats.summary()
    }
}
