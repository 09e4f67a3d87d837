//! Application constants for the SOTA to POTA converter
//!
//! This module contains all configuration constants, default values,
//! and mappings used throughout the converter application.

// =============================================================================
// Program Identity
// =============================================================================

/// Program identifier written to the ADIF header
pub const PROGRAM_ID: &str = "sota2pota";

/// Program version written to the ADIF header
pub const PROGRAM_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// ADIF Format Constants
// =============================================================================

/// End-of-header marker
pub const ADIF_EOH_MARKER: &str = "<EOH>";

/// End-of-record marker
pub const ADIF_EOR_MARKER: &str = "<EOR>";

/// Output file extension
pub const ADIF_FILE_EXTENSION: &str = "adi";

/// Secondary activity program name for park references
pub const PARK_PROGRAM: &str = "POTA";

/// ADIF field names in canonical emission order
pub mod adif_fields {
    pub const OPERATOR: &str = "OPERATOR";
    pub const QSO_DATE: &str = "QSO_DATE";
    pub const TIME_ON: &str = "TIME_ON";
    pub const BAND: &str = "BAND";
    pub const MODE: &str = "MODE";
    pub const CALL: &str = "CALL";
    pub const MY_SIG: &str = "MY_SIG";
    pub const MY_SIG_INFO: &str = "MY_SIG_INFO";
    pub const SIG: &str = "SIG";
    pub const SIG_INFO: &str = "SIG_INFO";

    /// Canonical field emission order for POTA records
    pub const FIELD_ORDER: &[&str] = &[
        OPERATOR,
        QSO_DATE,
        TIME_ON,
        BAND,
        MODE,
        CALL,
        MY_SIG,
        MY_SIG_INFO,
        SIG,
        SIG_INFO,
    ];
}

// =============================================================================
// SOTA Log Column Layout
// =============================================================================

/// Positional columns in a SOTA activator log export (no header row)
pub mod activator_columns {
    pub const VERSION: usize = 0;
    pub const MY_CALLSIGN: usize = 1;
    pub const SUMMIT_CODE: usize = 2;
    pub const DATE: usize = 3;
    pub const TIME: usize = 4;
    pub const BAND: usize = 5;
    pub const MODE: usize = 6;
    pub const CALLSIGN: usize = 7;
    pub const COMMENT: usize = 9;

    /// Minimum field count for a valid row (comment and the unused
    /// column before it may be absent)
    pub const MIN_FIELDS: usize = 8;
}

/// Positional columns in a SOTA S2S log export (no header row)
pub mod s2s_columns {
    pub const VERSION: usize = 0;
    pub const MY_CALLSIGN: usize = 1;
    pub const SUMMIT_CODE: usize = 2;
    pub const DATE: usize = 3;
    pub const TIME: usize = 4;
    pub const BAND: usize = 5;
    pub const MODE: usize = 6;
    pub const CALLSIGN: usize = 7;
    pub const OTHER_SUMMIT: usize = 8;
    pub const COMMENT: usize = 9;
    pub const CHASER_POINTS: usize = 10;
    pub const ACTIVATOR_POINTS: usize = 11;

    /// Minimum field count for a valid row (comment and points may be absent)
    pub const MIN_FIELDS: usize = 9;
}

// =============================================================================
// Summit Reference Table Constants
// =============================================================================

/// Column names in the summit-to-park reference table
pub mod summit_table_columns {
    pub const SUMMIT_CODE: &str = "SummitCode";
    pub const SUMMIT_NAME: &str = "SummitName";
    pub const LATITUDE: &str = "Latitude";
    pub const LONGITUDE: &str = "Longitude";
    pub const PARK_NAME: &str = "ParkName";
    pub const POTA: &str = "Pota";
}

/// Delimiters accepted between park codes in the reference table
pub const PARK_LIST_DELIMITERS: &[char] = &['/', '|'];

// =============================================================================
// Reference Dataset Sources
// =============================================================================

/// SOTA summit list download URL (title line precedes the header row)
pub const SUMMITS_LIST_URL: &str = "https://www.sotadata.org.uk/summitslist.csv";

/// POTA park list download URL
pub const PARKS_LIST_URL: &str = "https://pota.app/all_parks_ext.csv";

/// Peakbagger site base URL for peak ownership lookups
pub const PEAKBAGGER_BASE_URL: &str = "https://www.peakbagger.com/";

/// Cached copy filenames within the cache directory
pub const SUMMITS_CACHE_FILENAME: &str = "summitslist.csv";
pub const PARKS_CACHE_FILENAME: &str = "all_parks_ext.csv";

/// Park names whose reference-list spelling differs from the land names
/// published by the peak ownership service
pub const PARK_NAME_FIXUPS: &[(&str, &str)] = &[(
    "Lake Tahoe Basin Management Unit National Forest",
    "Lake Tahoe Basin Management Unit",
)];

/// Delay between consecutive remote requests in milliseconds
pub const DEFAULT_REQUEST_DELAY_MS: u64 = 1000;

/// HTTP request timeout in seconds
pub const HTTP_TIMEOUT_SECS: u64 = 60;

// =============================================================================
// Conversion Defaults
// =============================================================================

/// Default summit-to-park reference table path
pub const DEFAULT_SUMMIT_TABLE: &str = "data/sota_pota.csv";

/// Default reference dataset cache directory
pub const DEFAULT_CACHE_DIR: &str = "data";

/// Default ADIF output directory
pub const DEFAULT_OUTPUT_DIR: &str = "out";

/// All-accepting cutoff date sentinel
pub const DEFAULT_CUTOFF: &str = "00000000";

// =============================================================================
// Helper Functions
// =============================================================================

/// Build the output filename for an (operator, park) group
///
/// Slash characters in the operator callsign (portable and rover suffixes)
/// are replaced with hyphens to keep the name path-safe.
pub fn adif_filename(operator: &str, park: &str, min_date: &str) -> String {
    format!(
        "{}@{}-{}.{}",
        operator.replace('/', "-"),
        park,
        min_date,
        ADIF_FILE_EXTENSION
    )
}

/// Check whether a cutoff string is a valid 8-digit date
pub fn is_valid_cutoff(cutoff: &str) -> bool {
    cutoff.len() == 8 && cutoff.chars().all(|c| c.is_ascii_digit())
}

/// Build the peak search URL for a coordinate pair
pub fn peakbagger_search_url(base_url: &str, latitude: f64, longitude: f64) -> String {
    format!(
        "{}search.aspx?tid=R&lat={}&lon={}&ss=",
        base_url, latitude, longitude
    )
}
