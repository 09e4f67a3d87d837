//! Shared components for CLI commands
//!
//! This module contains common types, utilities, and functions used across
//! the convert and summits command implementations.

use crate::app::services::adif_writer::WrittenFile;
use crate::cli::args::{ConvertArgs, SummitsArgs};
use crate::config::Config;
use crate::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use tracing::{debug, info};

/// Conversion statistics for the final report
#[derive(Debug, Clone, Default)]
pub struct ConversionStats {
    /// Number of activator contacts loaded
    pub contacts_loaded: usize,
    /// Number of S2S records loaded
    pub s2s_records_loaded: usize,
    /// Number of summits in the reference table
    pub table_summits: usize,
    /// Expanded records produced across all park combinations
    pub expanded_records: usize,
    /// Expanded records carrying a counterparty park
    pub p2p_records: usize,
    /// Contacts dropped because their summit maps to no park
    pub unmapped_contacts: usize,
    /// Records written after the cutoff filter
    pub records_written: usize,
    /// ADIF files written
    pub files_written: usize,
    /// Total output size in bytes
    pub bytes_written: usize,
    /// Total processing time
    pub processing_time: std::time::Duration,
    /// Per-file details in write order
    pub output_files: Vec<WrittenFile>,
}

impl ConversionStats {
    /// Format output size in human-readable format
    pub fn format_size(bytes: usize) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }
}

/// Set up structured logging for the convert command
pub fn setup_logging(args: &ConvertArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sota2pota={}", log_level)));

    // Set up subscriber based on output format preference
    if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Set up structured logging for the summits command
pub fn setup_summits_logging(args: &SummitsArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sota2pota={}", log_level)));

    // Standard logging with timestamps
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Resolve the configuration file to read, if any
///
/// An explicitly provided path always wins. Otherwise the default user
/// configuration location is used when a file exists there.
fn resolve_config_file(explicit: &Option<PathBuf>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.clone()),
        None => Config::default_config_path()
            .ok()
            .filter(|path| path.exists()),
    }
}

/// Load configuration for the convert command (file -> args)
pub async fn load_convert_configuration(args: &ConvertArgs) -> Result<Config> {
    info!("Loading configuration");

    let config_file = resolve_config_file(&args.config_file);
    if let Some(config_path) = &config_file {
        info!("Using config file: {}", config_path.display());
    } else {
        info!("No config file found, using defaults");
    }

    let mut config = Config::load_layered(config_file.as_deref())?;

    // Apply CLI argument overrides
    if let Some(summit_table) = &args.summit_table {
        config.conversion.summit_table = summit_table.clone();
    }
    if let Some(output_path) = &args.output_path {
        config.conversion.output_path = output_path.clone();
    }
    if let Some(cutoff) = &args.cutoff {
        config.conversion.cutoff = cutoff.clone();
    }
    config.logging.level = args.get_log_level().to_string();
    config.logging.structured = !args.quiet;

    // Final validation
    config.validate()?;

    Ok(config)
}

/// Load configuration for the summits command (file -> args)
pub async fn load_summits_configuration(args: &SummitsArgs) -> Result<Config> {
    info!("Loading configuration");

    let config_file = resolve_config_file(&args.config_file);
    if let Some(config_path) = &config_file {
        info!("Using config file: {}", config_path.display());
    } else {
        info!("No config file found, using defaults");
    }

    let mut config = Config::load_layered(config_file.as_deref())?;

    // Apply CLI argument overrides
    if let Some(cache_path) = &args.cache_path {
        config.fetch.cache_path = cache_path.clone();
    }
    config.logging.level = args.get_log_level().to_string();
    config.logging.structured = !args.quiet;

    // Final validation
    config.validate()?;

    Ok(config)
}

/// Create a progress bar with appropriate styling
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg} [{per_sec}] ETA: {eta}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}
