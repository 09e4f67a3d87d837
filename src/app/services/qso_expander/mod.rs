//! QSO expansion module
//!
//! This module turns activator contacts into park-qualified rows ready for
//! normalization. It owns the S2S matching policy and the cartesian
//! expansion over own and counterparty parks.
//!
//! # Components
//!
//! - [`expander`] - S2S matching and cartesian park expansion
//! - [`stats`] - Expansion statistics and result structures
//!
//! # Expansion Rules
//!
//! - A contact whose summit has no park mapping produces no rows.
//! - An S2S match is searched on the raw (callsign, date, time, band,
//!   mode) tuple; the first S2S record in file order wins.
//! - A matched contact whose counterparty summit has no park mapping is
//!   treated exactly like an unmatched one.
//! - Own parks iterate as the outer loop, counterparty parks as the inner
//!   loop, so rows group by own park first.

pub mod expander;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use expander::{expand_log, find_s2s_match};
pub use stats::{ExpansionResult, ExpansionStats};
