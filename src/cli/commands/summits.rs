//! Summits command implementation
//!
//! This module builds the summit-to-park reference table for the summits
//! that appear in an activator log, combining the public SOTA summit list,
//! the POTA park list and scraped peak ownership pages.

use super::shared::{create_progress_bar, load_summits_configuration, setup_summits_logging};
use crate::app::services::park_mapper::{BuildStats, build_summit_table, unique_summits};
use crate::app::services::sota_csv_parser::load_activator_log;
use crate::cli::args::SummitsArgs;
use crate::Result;
use colored::Colorize;
use indicatif::HumanDuration;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Summits command runner
///
/// This function orchestrates the table building workflow:
/// 1. Set up logging and configuration
/// 2. Load the activator log and collect its unique summits
/// 3. Fetch (or reuse cached) summit and park reference datasets
/// 4. Scrape peak ownership for each summit and resolve park references
/// 5. Write the finished table and report statistics
pub async fn run_summits(args: SummitsArgs) -> Result<BuildStats> {
    let start_time = Instant::now();

    // Set up logging
    setup_summits_logging(&args)?;

    info!("Starting summit table build");
    debug!("Command line arguments: {:?}", args);

    // Validate arguments
    args.validate()?;

    // Load configuration with layered approach
    let config = load_summits_configuration(&args).await?;
    debug!("Loaded configuration: {:?}", config);

    // Load the activator log whose summits define the table
    let activator_log = load_activator_log(&args.activator).await?;
    let summit_count = unique_summits(&activator_log).len();
    info!(
        "Loaded {} contacts covering {} unique summits",
        activator_log.len(),
        summit_count
    );

    // Prepare the download cache
    config.ensure_cache_directory()?;

    // The table lands where the convert command looks for it by default
    let output_path = match &args.output_path {
        Some(path) => path.clone(),
        None => config.conversion.summit_table.clone(),
    };

    let progress_bar = if args.show_progress() && summit_count > 0 {
        Some(create_progress_bar(
            summit_count as u64,
            "Resolving summits...",
        ))
    } else {
        None
    };

    let stats = build_summit_table(
        &activator_log,
        &config.fetch,
        &output_path,
        progress_bar.as_ref(),
    )
    .await?;

    if let Some(pb) = &progress_bar {
        pb.finish_with_message(format!("Resolved {} summits", stats.summits));
    }
    info!("{}", stats.summary());

    // Generate final report
    generate_build_report(&stats, &output_path, start_time.elapsed());

    Ok(stats)
}

/// Generate human-readable build report
fn generate_build_report(stats: &BuildStats, output_path: &Path, elapsed: std::time::Duration) {
    println!("\n🏔  Summit Table Build Complete!");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📊 Build Summary:");
    println!("   • Summits in log: {}", stats.summits);
    println!("   • Peak pages scraped: {}", stats.scraped);
    println!("   • Summits with parks: {}", stats.with_parks);
    println!("   • Rows written: {}", stats.output_rows);
    println!("   • Build time: {}", HumanDuration(elapsed));

    if stats.missing_coordinates > 0 {
        println!(
            "⚠️  Summits without coordinates: {}",
            stats.missing_coordinates
        );
    }

    println!(
        "\n📁 Table written to {}",
        output_path.display().to_string().green()
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_build_report() {
        let stats = BuildStats {
            summits: 5,
            scraped: 4,
            with_parks: 3,
            missing_coordinates: 1,
            output_rows: 5,
        };

        // Should not panic
        generate_build_report(
            &stats,
            Path::new("data/sota_pota.csv"),
            std::time::Duration::from_secs(12),
        );
    }
}
