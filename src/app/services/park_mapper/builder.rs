//! Summit table construction
//!
//! Combines the reference datasets and ownership lookups into the
//! summit-to-park table the converter reads. Every summit appearing in
//! the activator log gets a row, even when no park could be resolved, so
//! a finished table answers every lookup the conversion will make.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use indicatif::ProgressBar;
use tracing::{debug, info, warn};

use crate::app::models::ActivatorQso;
use crate::config::FetchConfig;
use crate::constants::{self, summit_table_columns};
use crate::{Error, Result};

use super::peakbagger::{land_names, parse_ownership, PeakProperties, PeakbaggerClient};
use super::sources::{fetch_or_cache, parse_park_index, parse_summit_list};

/// Statistics for a table build run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildStats {
    /// Unique summits taken from the activator log
    pub summits: usize,
    /// Summits whose nearest peak page was fetched
    pub scraped: usize,
    /// Rows that resolved to at least one park
    pub with_parks: usize,
    /// Summits absent from the summit list or without coordinates
    pub missing_coordinates: usize,
    /// Rows written to the output table
    pub output_rows: usize,
}

impl BuildStats {
    /// Get summary string for logging
    pub fn summary(&self) -> String {
        format!(
            "Summit table: {} summits, {} scraped, {} with parks, {} without coordinates",
            self.summits, self.scraped, self.with_parks, self.missing_coordinates
        )
    }
}

/// One row of the summit-to-park table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummitTableRow {
    pub summit_code: String,
    pub summit_name: String,
    pub latitude: String,
    pub longitude: String,
    /// Resolved park names, slash-delimited
    pub park_name: String,
    /// Resolved park references, slash-delimited
    pub pota: String,
}

/// Collect the distinct summit codes of a log in first-seen order
pub fn unique_summits(activator_log: &[ActivatorQso]) -> Vec<String> {
    let mut summits: Vec<String> = Vec::new();
    for qso in activator_log {
        let code = qso.summit_code.trim();
        if code.is_empty() {
            continue;
        }
        if !summits.iter().any(|s| s == code) {
            summits.push(code.to_string());
        }
    }
    summits
}

/// Resolve a peak's ownership into park names and references
///
/// Each land entity name is looked up in the park index; names without a
/// POTA counterpart (private land, non-park public land) are dropped.
/// Returns the matched names and references, both slash-joined.
pub fn resolve_park_references(
    properties: &PeakProperties,
    park_index: &HashMap<String, String>,
) -> (String, String) {
    let ownership = parse_ownership(&properties.ownership);
    let Some(land) = ownership.land else {
        return (String::new(), String::new());
    };

    let mut names: Vec<String> = Vec::new();
    let mut references: Vec<String> = Vec::new();
    for name in land_names(&land) {
        match park_index.get(&name) {
            Some(reference) => {
                if !references.iter().any(|r| r == reference) {
                    names.push(name);
                    references.push(reference.clone());
                }
            }
            None => debug!("No POTA park named '{}'", name),
        }
    }

    (names.join("/"), references.join("/"))
}

/// Build the summit-to-park table for every summit in an activator log
///
/// Fetches the reference datasets (cached after the first run), resolves
/// each summit's coordinates, scrapes the nearest peak's ownership and
/// writes the finished table to `output_path`.
pub async fn build_summit_table(
    activator_log: &[ActivatorQso],
    fetch_config: &FetchConfig,
    output_path: &Path,
    progress_bar: Option<&ProgressBar>,
) -> Result<BuildStats> {
    let summit_codes = unique_summits(activator_log);
    info!(
        "Building summit table for {} unique summits",
        summit_codes.len()
    );

    let download_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(constants::HTTP_TIMEOUT_SECS))
        .build()
        .map_err(|e| {
            Error::download(
                &fetch_config.summits_url,
                "Failed to build HTTP client",
                Some(e),
            )
        })?;

    let summits_content = fetch_or_cache(
        &download_client,
        &fetch_config.summits_url,
        &fetch_config.cache_path.join(constants::SUMMITS_CACHE_FILENAME),
    )
    .await?;
    let parks_content = fetch_or_cache(
        &download_client,
        &fetch_config.parks_url,
        &fetch_config.cache_path.join(constants::PARKS_CACHE_FILENAME),
    )
    .await?;

    let summit_infos = parse_summit_list(&summits_content)?;
    let park_index = parse_park_index(&parks_content)?;

    let peakbagger =
        PeakbaggerClient::new(&fetch_config.peakbagger_url, fetch_config.request_delay_ms)?;

    let mut stats = BuildStats::default();
    stats.summits = summit_codes.len();

    let total = summit_codes.len();
    let mut rows = Vec::with_capacity(total);
    for (index, code) in summit_codes.iter().enumerate() {
        if let Some(pb) = progress_bar {
            pb.set_position(index as u64);
            pb.set_message(format!("Summit {} of {}: {}", index + 1, total, code));
        }

        let row = match summit_infos.get(code) {
            Some(info) => match info.coordinates() {
                Some((latitude, longitude)) => {
                    match peakbagger.lookup_ownership(latitude, longitude).await? {
                        Some(properties) => {
                            stats.scraped += 1;
                            let (park_name, pota) =
                                resolve_park_references(&properties, &park_index);
                            if !pota.is_empty() {
                                stats.with_parks += 1;
                            }
                            debug!(
                                "{}: ownership '{}' -> parks '{}'",
                                code, properties.ownership, pota
                            );
                            SummitTableRow {
                                summit_code: code.clone(),
                                summit_name: info.name.clone(),
                                latitude: latitude.to_string(),
                                longitude: longitude.to_string(),
                                park_name,
                                pota,
                            }
                        }
                        None => {
                            warn!(
                                "No peak found near {} ({}, {}), row will have no parks",
                                code, latitude, longitude
                            );
                            SummitTableRow {
                                summit_code: code.clone(),
                                summit_name: info.name.clone(),
                                latitude: latitude.to_string(),
                                longitude: longitude.to_string(),
                                ..Default::default()
                            }
                        }
                    }
                }
                None => {
                    stats.missing_coordinates += 1;
                    warn!("Summit '{}' has no coordinates in the summit list", code);
                    SummitTableRow {
                        summit_code: code.clone(),
                        summit_name: info.name.clone(),
                        ..Default::default()
                    }
                }
            },
            None => {
                stats.missing_coordinates += 1;
                warn!("Summit '{}' not found in the summit list", code);
                SummitTableRow {
                    summit_code: code.clone(),
                    ..Default::default()
                }
            }
        };

        rows.push(row);
        if let Some(pb) = progress_bar {
            pb.inc(1);
        }
    }

    write_table(&rows, output_path)?;
    stats.output_rows = rows.len();

    info!("{}", stats.summary());
    Ok(stats)
}

/// Write table rows as CSV, creating the parent directory on demand
pub fn write_table(rows: &[SummitTableRow], output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::io(
                    format!("Failed to create table directory: {}", parent.display()),
                    e,
                )
            })?;
        }
    }

    let mut writer = csv::Writer::from_path(output_path).map_err(|e| {
        Error::csv_parsing(
            output_path.display().to_string(),
            "Failed to create summit table",
            Some(e),
        )
    })?;

    writer.write_record([
        summit_table_columns::SUMMIT_CODE,
        summit_table_columns::SUMMIT_NAME,
        summit_table_columns::LATITUDE,
        summit_table_columns::LONGITUDE,
        summit_table_columns::PARK_NAME,
        summit_table_columns::POTA,
    ])?;
    for row in rows {
        writer.write_record([
            &row.summit_code,
            &row.summit_name,
            &row.latitude,
            &row.longitude,
            &row.park_name,
            &row.pota,
        ])?;
    }
    writer
        .flush()
        .map_err(|e| Error::io("Failed to flush summit table", e))?;

    info!("Wrote {} rows to {}", rows.len(), output_path.display());
    Ok(())
}
