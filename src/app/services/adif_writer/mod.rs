//! ADIF output module
//!
//! This module turns normalized POTA records into the per-park log files
//! the POTA submission process expects.
//!
//! # Components
//!
//! - [`planner`] - Cutoff filtering and (park, operator) file grouping
//! - [`serializer`] - Length-prefixed ADIF text generation
//! - [`writer`] - File output and write statistics
//!
//! # Output Convention
//!
//! Each (park, operator) group becomes one file named
//! `OPERATOR@PARK-YYYYMMDD.adi`, where the date is the group's earliest
//! contact date and slashes in the operator callsign are replaced with
//! hyphens. Files land in the configured output directory.

pub mod planner;
pub mod serializer;
pub mod writer;

#[cfg(test)]
pub mod tests;

pub use planner::{apply_cutoff, plan_files, FilePlan};
pub use serializer::{adif_header, serialize_qso};
pub use writer::{write_plans, WritingStats, WrittenFile};
