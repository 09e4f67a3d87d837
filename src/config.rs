//! Configuration management and validation.
//!
//! Provides layered configuration for the converter: built-in defaults,
//! overridden by an optional TOML file, overridden by CLI arguments.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants;
use crate::{Error, Result};

/// Global configuration for log conversion and table building
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Conversion pipeline settings
    pub conversion: ConversionConfig,

    /// Reference dataset fetch settings
    pub fetch: FetchConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Settings for the convert command
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Path to the summit-to-park reference table
    pub summit_table: PathBuf,

    /// Directory for generated ADIF files
    pub output_path: PathBuf,

    /// Inclusive lower bound on reformatted QSO dates (YYYYMMDD)
    pub cutoff: String,
}

/// Settings for the summits command
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Directory for cached reference dataset downloads
    pub cache_path: PathBuf,

    /// SOTA summit list URL
    pub summits_url: String,

    /// POTA park list URL
    pub parks_url: String,

    /// Peak ownership service base URL
    pub peakbagger_url: String,

    /// Delay between consecutive remote requests in milliseconds
    pub request_delay_ms: u64,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub level: String,

    /// Include timestamps and structured fields in log output
    pub structured: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            summit_table: PathBuf::from(constants::DEFAULT_SUMMIT_TABLE),
            output_path: PathBuf::from(constants::DEFAULT_OUTPUT_DIR),
            cutoff: constants::DEFAULT_CUTOFF.to_string(),
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            cache_path: PathBuf::from(constants::DEFAULT_CACHE_DIR),
            summits_url: constants::SUMMITS_LIST_URL.to_string(),
            parks_url: constants::PARKS_LIST_URL.to_string(),
            peakbagger_url: constants::PEAKBAGGER_BASE_URL.to_string(),
            request_delay_ms: constants::DEFAULT_REQUEST_DELAY_MS,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            structured: true,
        }
    }
}

impl Config {
    /// Default config file location: `{config_dir}/sota2pota/config.toml`
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))?;
        Ok(config_dir.join("sota2pota").join("config.toml"))
    }

    /// Load configuration, layering an optional TOML file over defaults
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let config = match config_file {
            Some(path) => {
                let contents = std::fs::read_to_string(path).map_err(|e| {
                    Error::io(
                        format!("Failed to read config file '{}'", path.display()),
                        e,
                    )
                })?;
                toml::from_str(&contents).map_err(|e| {
                    Error::configuration(format!(
                        "Invalid config file '{}': {}",
                        path.display(),
                        e
                    ))
                })?
            }
            None => Self::default(),
        };

        debug!(
            "Configuration loaded (summit table: {}, output: {})",
            config.conversion.summit_table.display(),
            config.conversion.output_path.display()
        );
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !constants::is_valid_cutoff(&self.conversion.cutoff) {
            return Err(Error::configuration(format!(
                "Cutoff must be an 8-digit date (YYYYMMDD), got '{}'",
                self.conversion.cutoff
            )));
        }

        if self.fetch.summits_url.is_empty()
            || self.fetch.parks_url.is_empty()
            || self.fetch.peakbagger_url.is_empty()
        {
            return Err(Error::configuration(
                "Reference dataset URLs must not be empty",
            ));
        }

        Ok(())
    }

    /// Create the ADIF output directory if it does not exist
    pub fn ensure_output_directory(&self) -> Result<()> {
        let output_path = &self.conversion.output_path;
        if !output_path.exists() {
            std::fs::create_dir_all(output_path).map_err(|e| {
                Error::configuration(format!(
                    "Failed to create output directory '{}': {}",
                    output_path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Create the reference dataset cache directory if it does not exist
    pub fn ensure_cache_directory(&self) -> Result<()> {
        let cache_path = &self.fetch.cache_path;
        if !cache_path.exists() {
            std::fs::create_dir_all(cache_path).map_err(|e| {
                Error::configuration(format!(
                    "Failed to create cache directory '{}': {}",
                    cache_path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(
            config.conversion.summit_table,
            PathBuf::from("data/sota_pota.csv")
        );
        assert_eq!(config.conversion.output_path, PathBuf::from("out"));
        assert_eq!(config.conversion.cutoff, "00000000");
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_layered_without_file() {
        let config = Config::load_layered(None).unwrap();
        assert_eq!(config.conversion.cutoff, "00000000");
        assert_eq!(
            config.fetch.summits_url,
            "https://www.sotadata.org.uk/summitslist.csv"
        );
    }

    #[test]
    fn test_load_layered_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            r#"
[conversion]
cutoff = "20240801"

[fetch]
request_delay_ms = 250
"#,
        )
        .unwrap();

        let config = Config::load_layered(Some(&config_path)).unwrap();
        assert_eq!(config.conversion.cutoff, "20240801");
        assert_eq!(config.fetch.request_delay_ms, 250);
        // Unspecified sections keep their defaults
        assert_eq!(config.conversion.output_path, PathBuf::from("out"));
        assert_eq!(
            config.fetch.parks_url,
            "https://pota.app/all_parks_ext.csv"
        );
    }

    #[test]
    fn test_load_layered_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "not valid toml [[[").unwrap();

        let result = Config::load_layered(Some(&config_path));
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_validate_rejects_bad_cutoff() {
        let mut config = Config::default();
        config.conversion.cutoff = "2024-08".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_ensure_output_directory() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.conversion.output_path = temp_dir.path().join("nested").join("out");

        config.ensure_output_directory().unwrap();
        assert!(config.conversion.output_path.is_dir());
    }

    #[test]
    fn test_default_config_path_suffix() {
        let path = Config::default_config_path().unwrap();
        assert!(path.ends_with("sota2pota/config.toml"));
    }
}
