//! Peak ownership lookups against the peakbagger.com pages
//!
//! There is no API for land ownership, so the builder drives the site's
//! radius search: one request to find the peak page nearest a summit's
//! coordinates, one to fetch that page, then marker-based extraction of
//! the property table. Requests are paced by a fixed delay to stay polite.

use std::time::Duration;

use regex::Regex;
use tracing::debug;

use crate::constants;
use crate::{Error, Result};

/// Property table of a peak page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeakProperties {
    pub country: String,
    pub state_province: String,
    pub city_town: String,
    /// Raw ownership cell, possibly containing `<br/>` markup
    pub ownership: String,
}

/// Ownership cell split into its land and special-area parts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LandOwnership {
    /// Administrating land entity names, slash-delimited
    pub land: Option<String>,

    /// Wilderness or special area designation
    pub special_area: Option<String>,
}

/// HTTP client for the peak ownership service
pub struct PeakbaggerClient {
    client: reqwest::Client,
    base_url: String,
    request_delay: Duration,
}

impl PeakbaggerClient {
    /// Create a client with the standard request timeout
    pub fn new(base_url: &str, request_delay_ms: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(constants::HTTP_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::download(base_url, "Failed to build HTTP client", Some(e)))?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
            request_delay: Duration::from_millis(request_delay_ms),
        })
    }

    /// Fetch the property table of the peak nearest to a coordinate pair
    ///
    /// Returns `None` when the radius search finds no peak. Request
    /// failures are fatal since a partial table would silently drop park
    /// associations.
    pub async fn lookup_ownership(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<PeakProperties>> {
        let search_url = constants::peakbagger_search_url(&self.base_url, latitude, longitude);
        let search_html = self.fetch(&search_url).await?;

        let Some(peak_url) = extract_peak_url(&self.base_url, &search_html) else {
            return Ok(None);
        };
        self.pause().await;

        let peak_html = self.fetch(&peak_url).await?;
        self.pause().await;

        Ok(Some(extract_properties(&peak_html)))
    }

    async fn fetch(&self, url: &str) -> Result<String> {
        debug!("Fetching {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::download(url, "Request failed", Some(e)))?
            .error_for_status()
            .map_err(|e| Error::download(url, "Request returned an error status", Some(e)))?;
        response
            .text()
            .await
            .map_err(|e| Error::download(url, "Failed to read response body", Some(e)))
    }

    async fn pause(&self) {
        tokio::time::sleep(self.request_delay).await;
    }
}

/// Extract the first result link from a radius search page
///
/// The search result table puts the nearest peak in its first row, right
/// after the column headers.
pub fn extract_peak_url(base_url: &str, html: &str) -> Option<String> {
    let re = Regex::new(
        r#"<th>Prom-Ft</th><th>Radius Search</th></tr><tr><td><a href="([^"]*)""#,
    )
    .ok()?;

    re.captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| format!("{}{}", base_url, m.as_str()))
}

/// Extract the labeled property rows from a peak page
///
/// Missing rows yield empty strings, matching pages that omit City/Town
/// or Ownership entirely.
pub fn extract_properties(html: &str) -> PeakProperties {
    PeakProperties {
        country: extract_property(html, "Country"),
        state_province: extract_property(html, "State/Province"),
        city_town: extract_property(html, "City/Town"),
        ownership: extract_property(html, "Ownership"),
    }
}

fn extract_property(html: &str, label: &str) -> String {
    let pattern = format!(
        r"(?s)<tr><td valign=top>{}</td><td>(.*?)</td>",
        regex::escape(label)
    );
    let Ok(re) = Regex::new(&pattern) else {
        return String::new();
    };

    re.captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Split an ownership cell into land and special-area designations
///
/// The cell reads `Land: NAME` optionally followed by
/// `<br/>Wilderness/Special Area: NAME`. Cells without a `Land:` prefix
/// carry no usable park information.
pub fn parse_ownership(ownership: &str) -> LandOwnership {
    let Some((_, after_land)) = ownership.split_once("Land: ") else {
        return LandOwnership::default();
    };

    match after_land.split_once("<br/>Wilderness/Special Area: ") {
        Some((land, area)) => LandOwnership {
            land: Some(land.to_string()),
            special_area: Some(area.to_string()),
        },
        None => LandOwnership {
            land: Some(after_land.to_string()),
            special_area: None,
        },
    }
}

/// Split a land designation into individual entity names
///
/// A peak on a boundary lists several entities separated by slashes, and
/// the highest point of an entity gets an annotation that is not part of
/// its name.
pub fn land_names(land: &str) -> Vec<String> {
    land.replace(" (Highest Point)", "")
        .split('/')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
