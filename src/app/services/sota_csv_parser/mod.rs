//! SOTA CSV parser for activator and S2S log exports
//!
//! This module parses the two CSV formats exported by the SOTA database:
//! the activator log and the summit-to-summit (S2S) log. Both are
//! headerless positional formats sharing the first eight columns; the S2S
//! export adds the counterparty's summit code and two point tallies.
//!
//! ## Architecture
//!
//! - [`parser`] - File loading and row-to-record conversion
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sota2pota::app::services::sota_csv_parser;
//!
//! # async fn example() -> sota2pota::Result<()> {
//! let qsos = sota_csv_parser::load_activator_log(std::path::Path::new("log.csv")).await?;
//! println!("Loaded {} QSOs", qsos.len());
//! # Ok(())
//! # }
//! ```

pub mod parser;

#[cfg(test)]
pub mod tests;

// Re-export main entry points for easy access
pub use parser::{load_activator_log, load_s2s_log};
