//! SOTA to POTA Converter Library
//!
//! A Rust library for converting SOTA (Summits on the Air) activator logs
//! into POTA (Parks on the Air) ADIF submission files.
//!
//! This library provides tools for:
//! - Parsing SOTA activator and S2S CSV log exports into typed records
//! - Loading and indexing a summit-to-park reference table for O(1) lookups
//! - Expanding contacts across every (own park, remote park) combination
//! - Normalizing band, mode, date and time fields to ADIF conventions
//! - Writing one ADIF file per (operator, park) group
//! - Building the summit-to-park reference table from public datasets

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod adif_writer;
        pub mod normalizer;
        pub mod park_mapper;
        pub mod qso_expander;
        pub mod sota_csv_parser;
        pub mod summit_registry;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ActivatorQso, ExpandedQso, PotaQso, S2sQso};
pub use config::Config;

/// Result type alias for the SOTA to POTA converter
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for log conversion operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// SOTA log format error
    #[error("SOTA log format error in file '{file}': {message}")]
    LogFormat { file: String, message: String },

    /// Required column missing from a tabular input
    #[error("Missing column '{column}' in file '{file}'")]
    MissingColumn { file: String, column: String },

    /// Frequency label not present in the band lookup table
    #[error("No band mapping for frequency label '{label}'")]
    BandMapping { label: String },

    /// Date/time parsing error
    #[error("Date/time parsing error: {message}")]
    DateTimeParsing {
        message: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Download or remote request error
    #[error("Download error for '{url}': {message}")]
    Download {
        url: String,
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a SOTA log format error
    pub fn log_format(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::LogFormat {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a missing column error
    pub fn missing_column(file: impl Into<String>, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            file: file.into(),
            column: column.into(),
        }
    }

    /// Create a band mapping error
    pub fn band_mapping(label: impl Into<String>) -> Self {
        Self::BandMapping {
            label: label.into(),
        }
    }

    /// Create a date/time parsing error
    pub fn datetime_parsing(message: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::DateTimeParsing {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a download error with context
    pub fn download(
        url: impl Into<String>,
        message: impl Into<String>,
        source: Option<reqwest::Error>,
    ) -> Self {
        Self::Download {
            url: url.into(),
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<chrono::ParseError> for Error {
    fn from(error: chrono::ParseError) -> Self {
        Self::DateTimeParsing {
            message: "Date/time parsing failed".to_string(),
            source: error,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        let url = error
            .url()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        Self::Download {
            url,
            message: "HTTP request failed".to_string(),
            source: Some(error),
        }
    }
}
