//! Park mapping module
//!
//! This module builds the summit-to-park reference table consumed by the
//! converter. Park associations are not published anywhere, so the table
//! is derived from three sources: the SOTA summit list (coordinates), the
//! POTA park list (name-to-reference resolution) and the peakbagger.com
//! peak pages (land ownership of each summit).
//!
//! # Components
//!
//! - [`sources`] - Dataset download, caching and CSV parsing
//! - [`peakbagger`] - Radius search, peak page scraping and ownership parsing
//! - [`builder`] - Row assembly and table output
//!
//! # Network Behavior
//!
//! The two dataset downloads happen once and are cached. Ownership
//! lookups need two requests per summit and are paced by a configurable
//! delay, so a log with many distinct summits takes several minutes.

pub mod builder;
pub mod peakbagger;
pub mod sources;

#[cfg(test)]
pub mod tests;

pub use builder::{build_summit_table, unique_summits, BuildStats, SummitTableRow};
pub use peakbagger::{PeakProperties, PeakbaggerClient};
pub use sources::{fetch_or_cache, SummitInfo};
