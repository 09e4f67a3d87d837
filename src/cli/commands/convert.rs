//! Convert command implementation
//!
//! This module contains the complete log conversion workflow: loading the
//! SOTA exports and the summit-to-park table, expanding and normalizing
//! every contact and writing the per-park ADIF files.

use super::shared::{
    ConversionStats, create_progress_bar, load_convert_configuration, setup_logging,
};
use crate::app::services::adif_writer::{apply_cutoff, plan_files, write_plans};
use crate::app::services::normalizer;
use crate::app::services::qso_expander::expand_log;
use crate::app::services::sota_csv_parser::{load_activator_log, load_s2s_log};
use crate::app::services::summit_registry::SummitRegistry;
use crate::cli::args::{ConvertArgs, ReportFormat};
use crate::Result;
use colored::Colorize;
use indicatif::HumanDuration;
use std::time::Instant;
use tracing::{debug, info};

/// Convert command runner
///
/// This function orchestrates the entire conversion workflow:
/// 1. Set up logging and configuration
/// 2. Load the activator log, S2S log and summit-to-park table
/// 3. Expand contacts across park combinations and detect park-to-park
/// 4. Normalize fields, apply the cutoff and write ADIF files
/// 5. Generate summary statistics
pub async fn run_convert(args: ConvertArgs) -> Result<ConversionStats> {
    let start_time = Instant::now();

    // Set up logging
    setup_logging(&args)?;

    info!("Starting SOTA to POTA conversion");
    debug!("Command line arguments: {:?}", args);

    // Validate arguments
    args.validate()?;

    // Load configuration with layered approach
    let config = load_convert_configuration(&args).await?;
    debug!("Loaded configuration: {:?}", config);

    // Load inputs
    let activator_log = load_activator_log(&args.activator).await?;
    let s2s_log = load_s2s_log(&args.s2s).await?;
    let registry = SummitRegistry::load(&config.conversion.summit_table).await?;

    info!(
        "Loaded {} contacts, {} S2S records, {} summit mappings",
        activator_log.len(),
        s2s_log.len(),
        registry.summit_count()
    );

    // Expand contacts across every (own park, remote park) combination
    let expand_pb = if args.show_progress() && !activator_log.is_empty() {
        Some(create_progress_bar(
            activator_log.len() as u64,
            "Expanding contacts...",
        ))
    } else {
        None
    };

    let expansion = expand_log(&activator_log, &s2s_log, &registry, expand_pb.as_ref());

    if let Some(pb) = &expand_pb {
        pb.finish_with_message(format!("Expanded {} records", expansion.qso_count()));
    }
    info!("{}", expansion.summary());

    // Normalize bands, modes, dates and times to ADIF conventions
    let records = normalizer::normalize_all(&expansion.qsos)?;

    // Drop records before the cutoff and group the rest into files
    let records = apply_cutoff(records, &config.conversion.cutoff);
    let plans = plan_files(&records);

    // Write one ADIF file per (operator, park) group
    config.ensure_output_directory()?;

    let write_pb = if args.show_progress() && !plans.is_empty() {
        Some(create_progress_bar(
            plans.len() as u64,
            "Writing ADIF files...",
        ))
    } else {
        None
    };

    let writing = write_plans(&plans, &config.conversion.output_path, write_pb.as_ref()).await?;

    if let Some(pb) = &write_pb {
        pb.finish_with_message(format!("Wrote {} files", writing.files_written));
    }
    info!("{}", writing.summary());

    let stats = ConversionStats {
        contacts_loaded: activator_log.len(),
        s2s_records_loaded: s2s_log.len(),
        table_summits: registry.summit_count(),
        expanded_records: expansion.stats.expanded,
        p2p_records: expansion.stats.p2p_rows,
        unmapped_contacts: expansion.stats.unmapped_summits,
        records_written: writing.qsos_written,
        files_written: writing.files_written,
        bytes_written: writing.bytes_written,
        processing_time: start_time.elapsed(),
        output_files: writing.files,
    };

    // Generate final report
    generate_final_report(&args, &stats)?;

    Ok(stats)
}

/// Generate final conversion report
fn generate_final_report(args: &ConvertArgs, stats: &ConversionStats) -> Result<()> {
    info!("Generating final report");

    match args.report_format {
        ReportFormat::Human => generate_human_report(stats),
        ReportFormat::Json => generate_json_report(stats),
    }
}

/// Generate human-readable report
fn generate_human_report(stats: &ConversionStats) -> Result<()> {
    let duration = HumanDuration(stats.processing_time);
    let total_size = ConversionStats::format_size(stats.bytes_written);

    println!("\n🎉 SOTA to POTA Conversion Complete!");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📊 Conversion Summary:");
    println!("   • Contacts loaded: {}", stats.contacts_loaded);
    println!("   • S2S records loaded: {}", stats.s2s_records_loaded);
    println!("   • Summits in table: {}", stats.table_summits);
    println!("   • Expanded records: {}", stats.expanded_records);
    println!("   • Park-to-park records: {}", stats.p2p_records);
    println!("   • Records written: {}", stats.records_written);
    println!("   • Total output size: {}", total_size);
    println!("   • Processing time: {}", duration);

    if stats.unmapped_contacts > 0 {
        println!(
            "⚠️  Contacts without a park mapping: {}",
            stats.unmapped_contacts
        );
    }

    if !stats.output_files.is_empty() {
        println!("\n📁 Output Files:");
        for file in &stats.output_files {
            println!(
                "   • {} \t{} \t=> {} ({} QSOs)",
                file.operator.bold(),
                file.park,
                file.filename.green(),
                file.qso_count
            );
        }
    }

    println!();
    Ok(())
}

/// Generate JSON report for machine consumption
fn generate_json_report(stats: &ConversionStats) -> Result<()> {
    let json_stats = serde_json::json!({
        "contacts_loaded": stats.contacts_loaded,
        "s2s_records_loaded": stats.s2s_records_loaded,
        "table_summits": stats.table_summits,
        "expanded_records": stats.expanded_records,
        "p2p_records": stats.p2p_records,
        "unmapped_contacts": stats.unmapped_contacts,
        "records_written": stats.records_written,
        "files_written": stats.files_written,
        "bytes_written": stats.bytes_written,
        "processing_time_seconds": stats.processing_time.as_secs_f64(),
        "output_files": stats.output_files.iter().map(|file| {
            serde_json::json!({
                "filename": file.filename,
                "operator": file.operator,
                "park": file.park,
                "qso_count": file.qso_count
            })
        }).collect::<Vec<_>>()
    });

    println!("{}", serde_json::to_string_pretty(&json_stats).unwrap());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::adif_writer::WrittenFile;

    fn sample_stats() -> ConversionStats {
        ConversionStats {
            contacts_loaded: 42,
            s2s_records_loaded: 7,
            table_summits: 12,
            expanded_records: 50,
            p2p_records: 3,
            unmapped_contacts: 2,
            records_written: 48,
            files_written: 4,
            bytes_written: 4096,
            processing_time: std::time::Duration::from_secs(2),
            output_files: vec![WrittenFile {
                filename: "AJ6X@K-1234-20240819.adi".to_string(),
                park: "K-1234".to_string(),
                operator: "AJ6X".to_string(),
                qso_count: 12,
            }],
        }
    }

    #[test]
    fn test_generate_human_report() {
        // Should not panic
        let result = generate_human_report(&sample_stats());
        assert!(result.is_ok());
    }

    #[test]
    fn test_generate_json_report() {
        // Should not panic
        let result = generate_json_report(&sample_stats());
        assert!(result.is_ok());
    }

    #[test]
    fn test_generate_final_report_formats() {
        let stats = sample_stats();

        let human = ConvertArgs {
            report_format: ReportFormat::Human,
            ..Default::default()
        };
        assert!(generate_final_report(&human, &stats).is_ok());

        let json = ConvertArgs {
            report_format: ReportFormat::Json,
            ..Default::default()
        };
        assert!(generate_final_report(&json, &stats).is_ok());
    }
}
