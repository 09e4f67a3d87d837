//! ADIF file output
//!
//! Writes one file per plan into the output directory, creating it on
//! demand. File writes go through tokio's filesystem API like the rest of
//! the application's I/O.

use std::path::Path;

use indicatif::ProgressBar;
use tracing::{debug, info};

use crate::app::services::adif_writer::planner::FilePlan;
use crate::app::services::adif_writer::serializer::{adif_header, serialize_qso};
use crate::{Error, Result};

/// One file produced by a write run
#[derive(Debug, Clone, PartialEq)]
pub struct WrittenFile {
    /// Bare filename within the output directory
    pub filename: String,
    /// Activated park code
    pub park: String,
    /// Operator callsign
    pub operator: String,
    /// Number of records in the file
    pub qso_count: usize,
}

/// Statistics for a write run
#[derive(Debug, Clone, Default)]
pub struct WritingStats {
    /// Number of files written
    pub files_written: usize,
    /// Total records written across all files
    pub qsos_written: usize,
    /// Total bytes written across all files
    pub bytes_written: usize,
    /// Per-file details in write order
    pub files: Vec<WrittenFile>,
}

impl WritingStats {
    /// Get summary string for logging
    pub fn summary(&self) -> String {
        format!(
            "Wrote {} files, {} records, {} bytes",
            self.files_written, self.qsos_written, self.bytes_written
        )
    }
}

/// Write every plan into the output directory
///
/// Existing files with the same name are overwritten, so re-running a
/// conversion refreshes its outputs in place.
pub async fn write_plans(
    plans: &[FilePlan],
    output_dir: &Path,
    progress_bar: Option<&ProgressBar>,
) -> Result<WritingStats> {
    tokio::fs::create_dir_all(output_dir).await.map_err(|e| {
        Error::io(
            format!("Failed to create output directory: {}", output_dir.display()),
            e,
        )
    })?;

    info!(
        "Writing {} ADIF files to {}",
        plans.len(),
        output_dir.display()
    );

    let mut stats = WritingStats::default();

    for plan in plans {
        let filename = plan.filename();
        let path = output_dir.join(&filename);

        let mut content = adif_header();
        for qso in &plan.qsos {
            content.push_str(&serialize_qso(qso));
        }

        tokio::fs::write(&path, &content).await.map_err(|e| {
            Error::io(format!("Failed to write ADIF file: {}", path.display()), e)
        })?;

        debug!(
            "Wrote {} ({} records for {} at {})",
            filename,
            plan.qsos.len(),
            plan.operator,
            plan.park
        );

        stats.files_written += 1;
        stats.qsos_written += plan.qsos.len();
        stats.bytes_written += content.len();
        stats.files.push(WrittenFile {
            filename,
            park: plan.park.clone(),
            operator: plan.operator.clone(),
            qso_count: plan.qsos.len(),
        });

        if let Some(pb) = progress_bar {
            pb.inc(1);
        }
    }

    info!("{}", stats.summary());

    Ok(stats)
}
