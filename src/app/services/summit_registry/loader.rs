//! Summit registry loading
//!
//! Loads the summit-to-park reference table. The table is a header-named
//! CSV; only the summit code and park-list columns are consumed here, the
//! descriptive columns (name, coordinates, park names) are carried for
//! human readers of the table.

use std::collections::hash_map::Entry;
use std::path::Path;
use tracing::{info, warn};

use super::SummitRegistry;
use crate::constants::summit_table_columns;
use crate::{Error, Result};

impl SummitRegistry {
    /// Load a summit-to-park reference table
    ///
    /// # Arguments
    ///
    /// * `table_path` - Path to the reference table CSV
    ///
    /// # Errors
    ///
    /// * `Error::FileNotFound` if the table does not exist
    /// * `Error::MissingColumn` if the summit code or park-list column is absent
    /// * `Error::CsvParsing` for malformed CSV content
    pub async fn load(table_path: &Path) -> Result<Self> {
        info!(
            "Loading summit-to-park reference table: {}",
            table_path.display()
        );

        if !table_path.exists() {
            return Err(Error::file_not_found(table_path.display().to_string()));
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(table_path)
            .map_err(|e| {
                Error::csv_parsing(
                    table_path.display().to_string(),
                    "Failed to open reference table",
                    Some(e),
                )
            })?;

        let headers = reader.headers().map_err(|e| {
            Error::csv_parsing(
                table_path.display().to_string(),
                "Failed to read reference table header",
                Some(e),
            )
        })?;

        let summit_idx = column_index(headers, summit_table_columns::SUMMIT_CODE)
            .ok_or_else(|| {
                Error::missing_column(
                    table_path.display().to_string(),
                    summit_table_columns::SUMMIT_CODE,
                )
            })?;
        let pota_idx = column_index(headers, summit_table_columns::POTA).ok_or_else(|| {
            Error::missing_column(
                table_path.display().to_string(),
                summit_table_columns::POTA,
            )
        })?;

        let mut registry = Self::new(table_path.to_path_buf());

        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                Error::csv_parsing(
                    table_path.display().to_string(),
                    format!("Malformed CSV at row {}", index + 1),
                    Some(e),
                )
            })?;

            let summit_code = record.get(summit_idx).unwrap_or_default().trim();
            if summit_code.is_empty() {
                continue;
            }

            // Trailing empty park cells may be absent from a row entirely
            let park_list = record.get(pota_idx).unwrap_or_default().trim();

            match registry.parks_by_summit.entry(summit_code.to_string()) {
                Entry::Vacant(e) => {
                    e.insert(park_list.to_string());
                }
                Entry::Occupied(_) => {
                    warn!(
                        "Duplicate summit '{}' in reference table, keeping first entry",
                        summit_code
                    );
                }
            }
        }

        info!(
            "Summit registry loaded: {} summits, {} with park associations",
            registry.summit_count(),
            registry.summits_with_parks()
        );

        Ok(registry)
    }
}

/// Find a column position by exact header name
fn column_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}
