//! Core SOTA CSV parsing implementation
//!
//! This module handles file reading and positional row conversion for the
//! activator and S2S log formats. Rows shorter than the required column
//! count are fatal; trailing optional columns (comment, points) default to
//! empty strings.

use std::path::Path;
use tracing::{debug, info};

use crate::app::models::{ActivatorQso, S2sQso};
use crate::constants::{activator_columns, s2s_columns};
use crate::{Error, Result};

/// Load a SOTA activator log export into typed records
///
/// The file is headerless with fixed positional columns: version tag,
/// operator callsign, summit code, date, time, band, mode, counterparty
/// callsign, an unused column, and an optional comment. The version tag
/// and unused column are discarded.
///
/// # Errors
///
/// * `Error::FileNotFound` if the file does not exist
/// * `Error::LogFormat` if a row is missing required columns
/// * `Error::CsvParsing` for malformed CSV content
pub async fn load_activator_log(file_path: &Path) -> Result<Vec<ActivatorQso>> {
    info!("Loading SOTA activator log: {}", file_path.display());

    let mut qsos = Vec::new();
    for (row_number, record) in read_log_rows(file_path)?.into_iter().enumerate() {
        qsos.push(activator_from_record(&record, file_path, row_number + 1)?);
    }

    info!(
        "Loaded {} activator QSOs from {}",
        qsos.len(),
        file_path.display()
    );
    Ok(qsos)
}

/// Load a SOTA S2S log export into typed records
///
/// Same layout as the activator export through the counterparty callsign,
/// followed by the counterparty's summit code, an optional comment, and two
/// optional point tallies.
///
/// # Errors
///
/// * `Error::FileNotFound` if the file does not exist
/// * `Error::LogFormat` if a row is missing required columns
/// * `Error::CsvParsing` for malformed CSV content
pub async fn load_s2s_log(file_path: &Path) -> Result<Vec<S2sQso>> {
    info!("Loading SOTA S2S log: {}", file_path.display());

    let mut qsos = Vec::new();
    for (row_number, record) in read_log_rows(file_path)?.into_iter().enumerate() {
        qsos.push(s2s_from_record(&record, file_path, row_number + 1)?);
    }

    info!(
        "Loaded {} S2S QSOs from {}",
        qsos.len(),
        file_path.display()
    );
    Ok(qsos)
}

/// Read all rows from a headerless SOTA CSV export
fn read_log_rows(file_path: &Path) -> Result<Vec<csv::StringRecord>> {
    if !file_path.exists() {
        return Err(Error::file_not_found(file_path.display().to_string()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(file_path)
        .map_err(|e| {
            Error::csv_parsing(
                file_path.display().to_string(),
                "Failed to open log file",
                Some(e),
            )
        })?;

    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result.map_err(|e| {
            Error::csv_parsing(
                file_path.display().to_string(),
                format!("Malformed CSV at row {}", index + 1),
                Some(e),
            )
        })?;
        rows.push(record);
    }

    debug!("Read {} rows from {}", rows.len(), file_path.display());
    Ok(rows)
}

/// Convert one positional row into an activator record
fn activator_from_record(
    record: &csv::StringRecord,
    file_path: &Path,
    row_number: usize,
) -> Result<ActivatorQso> {
    if record.len() < activator_columns::MIN_FIELDS {
        return Err(Error::log_format(
            file_path.display().to_string(),
            format!(
                "Row {}: expected at least {} columns, found {}",
                row_number,
                activator_columns::MIN_FIELDS,
                record.len()
            ),
        ));
    }

    Ok(ActivatorQso {
        my_callsign: field_at(record, activator_columns::MY_CALLSIGN),
        summit_code: field_at(record, activator_columns::SUMMIT_CODE),
        date: field_at(record, activator_columns::DATE),
        time: field_at(record, activator_columns::TIME),
        band: field_at(record, activator_columns::BAND),
        mode: field_at(record, activator_columns::MODE),
        callsign: field_at(record, activator_columns::CALLSIGN),
        comment: field_at(record, activator_columns::COMMENT),
    })
}

/// Convert one positional row into an S2S record
fn s2s_from_record(
    record: &csv::StringRecord,
    file_path: &Path,
    row_number: usize,
) -> Result<S2sQso> {
    if record.len() < s2s_columns::MIN_FIELDS {
        return Err(Error::log_format(
            file_path.display().to_string(),
            format!(
                "Row {}: expected at least {} columns, found {}",
                row_number,
                s2s_columns::MIN_FIELDS,
                record.len()
            ),
        ));
    }

    Ok(S2sQso {
        my_callsign: field_at(record, s2s_columns::MY_CALLSIGN),
        summit_code: field_at(record, s2s_columns::SUMMIT_CODE),
        date: field_at(record, s2s_columns::DATE),
        time: field_at(record, s2s_columns::TIME),
        band: field_at(record, s2s_columns::BAND),
        mode: field_at(record, s2s_columns::MODE),
        callsign: field_at(record, s2s_columns::CALLSIGN),
        other_summit: field_at(record, s2s_columns::OTHER_SUMMIT),
        comment: field_at(record, s2s_columns::COMMENT),
        chaser_points: field_at(record, s2s_columns::CHASER_POINTS),
        activator_points: field_at(record, s2s_columns::ACTIVATOR_POINTS),
    })
}

/// Read a column by position, defaulting to empty when absent
///
/// The shape check above guarantees required columns exist; trailing
/// optional columns (comment, points) fall back to the empty string.
fn field_at(record: &csv::StringRecord, index: usize) -> String {
    record.get(index).unwrap_or_default().to_string()
}
