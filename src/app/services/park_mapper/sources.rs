//! Reference dataset acquisition and parsing
//!
//! The table builder needs two public datasets: the SOTA summit list for
//! coordinates and the POTA park list for name-to-reference resolution.
//! Both are fetched once and cached on disk; subsequent runs read the
//! cached copy so repeated builds stay offline.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::constants::{self, summit_table_columns};
use crate::{Error, Result};

/// Coordinates and display name of a summit from the SOTA summit list
#[derive(Debug, Clone, PartialEq)]
pub struct SummitInfo {
    /// Summit code (e.g. "W6/CT-226")
    pub code: String,

    /// Summit display name
    pub name: String,

    /// Decimal latitude, if the list carried a parseable value
    pub latitude: Option<f64>,

    /// Decimal longitude, if the list carried a parseable value
    pub longitude: Option<f64>,
}

impl SummitInfo {
    /// Coordinate pair when both components are present
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }
}

/// Return a dataset's contents, downloading and caching on first use
///
/// A cached copy is trusted indefinitely; delete the file under the cache
/// directory to force a refresh.
pub async fn fetch_or_cache(
    client: &reqwest::Client,
    url: &str,
    cache_path: &Path,
) -> Result<String> {
    if cache_path.exists() {
        debug!("Using cached copy: {}", cache_path.display());
        return tokio::fs::read_to_string(cache_path).await.map_err(|e| {
            Error::io(
                format!("Failed to read cached dataset: {}", cache_path.display()),
                e,
            )
        });
    }

    info!("Downloading {}", url);
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| Error::download(url, "Request failed", Some(e)))?
        .error_for_status()
        .map_err(|e| Error::download(url, "Request returned an error status", Some(e)))?;
    let body = response
        .text()
        .await
        .map_err(|e| Error::download(url, "Failed to read response body", Some(e)))?;

    if let Some(parent) = cache_path.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            Error::io(
                format!("Failed to create cache directory: {}", parent.display()),
                e,
            )
        })?;
    }
    tokio::fs::write(cache_path, &body).await.map_err(|e| {
        Error::io(
            format!("Failed to cache dataset: {}", cache_path.display()),
            e,
        )
    })?;
    info!("Cached {} bytes to {}", body.len(), cache_path.display());

    Ok(body)
}

/// Parse the SOTA summit list into a code-indexed map
///
/// The published file starts with a title line before the real header
/// row, so parsing begins at the second line.
pub fn parse_summit_list(content: &str) -> Result<HashMap<String, SummitInfo>> {
    let body = content.split_once('\n').map_or("", |(_, rest)| rest);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(body.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| Error::csv_parsing("summit list", "Failed to read header row", Some(e)))?
        .clone();
    let code_idx = column_index(&headers, summit_table_columns::SUMMIT_CODE)
        .ok_or_else(|| Error::missing_column("summit list", summit_table_columns::SUMMIT_CODE))?;
    let name_idx = column_index(&headers, summit_table_columns::SUMMIT_NAME)
        .ok_or_else(|| Error::missing_column("summit list", summit_table_columns::SUMMIT_NAME))?;
    let lat_idx = column_index(&headers, summit_table_columns::LATITUDE)
        .ok_or_else(|| Error::missing_column("summit list", summit_table_columns::LATITUDE))?;
    let lon_idx = column_index(&headers, summit_table_columns::LONGITUDE)
        .ok_or_else(|| Error::missing_column("summit list", summit_table_columns::LONGITUDE))?;

    let mut summits = HashMap::new();
    for record in reader.records() {
        let record = record
            .map_err(|e| Error::csv_parsing("summit list", "Malformed CSV row", Some(e)))?;

        let code = record.get(code_idx).unwrap_or_default().trim().to_string();
        if code.is_empty() {
            continue;
        }

        let info = SummitInfo {
            code: code.clone(),
            name: record.get(name_idx).unwrap_or_default().trim().to_string(),
            latitude: parse_coordinate(record.get(lat_idx)),
            longitude: parse_coordinate(record.get(lon_idx)),
        };

        match summits.entry(code) {
            Entry::Vacant(entry) => {
                entry.insert(info);
            }
            Entry::Occupied(entry) => {
                warn!(
                    "Duplicate summit '{}' in summit list, keeping first entry",
                    entry.key()
                );
            }
        }
    }

    info!("Parsed {} summits from the summit list", summits.len());
    Ok(summits)
}

/// Parse the POTA park list into a name-to-reference index
///
/// Park names known to differ from the spellings used by the peak
/// ownership service are rewritten while indexing, so ownership lookups
/// resolve directly against this map.
pub fn parse_park_index(content: &str) -> Result<HashMap<String, String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| Error::csv_parsing("park list", "Failed to read header row", Some(e)))?
        .clone();
    let reference_idx = column_index_ignore_case(&headers, "reference")
        .ok_or_else(|| Error::missing_column("park list", "reference"))?;
    let name_idx = column_index_ignore_case(&headers, "name")
        .ok_or_else(|| Error::missing_column("park list", "name"))?;

    let mut parks = HashMap::new();
    for record in reader.records() {
        let record =
            record.map_err(|e| Error::csv_parsing("park list", "Malformed CSV row", Some(e)))?;

        let reference = record
            .get(reference_idx)
            .unwrap_or_default()
            .trim()
            .to_string();
        let mut name = record.get(name_idx).unwrap_or_default().trim().to_string();
        if reference.is_empty() || name.is_empty() {
            continue;
        }

        for (published, ownership_spelling) in constants::PARK_NAME_FIXUPS {
            if name == *published {
                name = (*ownership_spelling).to_string();
            }
        }

        parks.entry(name).or_insert(reference);
    }

    info!("Indexed {} park names", parks.len());
    Ok(parks)
}

/// Find a column by exact header name
fn column_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|header| header.trim() == name)
}

/// Find a column by case-insensitive header name
fn column_index_ignore_case(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case(name))
}

fn parse_coordinate(value: Option<&str>) -> Option<f64> {
    value.and_then(|v| v.trim().parse::<f64>().ok())
}
