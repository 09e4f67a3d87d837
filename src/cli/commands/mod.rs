//! Command implementations for the SOTA to POTA converter CLI
//!
//! This module contains the main command execution logic, progress reporting,
//! and error handling for the CLI interface. Each command is implemented in
//! its own module for better organization and maintainability.

pub mod convert;
pub mod shared;
pub mod summits;

// Re-export the main types and functions for backward compatibility
pub use shared::ConversionStats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the SOTA to POTA converter
///
/// This function dispatches to the appropriate subcommand handler based on CLI args.
/// Each command is implemented in its own module:
/// - `convert`: Log conversion workflow with ADIF output
/// - `summits`: Summit-to-park reference table building
pub async fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Convert(convert_args) => {
            convert::run_convert(convert_args).await?;
        }
        Commands::Summits(summits_args) => {
            summits::run_summits(summits_args).await?;
        }
    }
    Ok(())
}
