//! Command-line argument definitions and validation
//!
//! This module defines the CLI surface of the converter using clap's derive
//! API. Each subcommand carries its own argument struct together with the
//! validation and logging helpers the command runners rely on.

use crate::constants;
use crate::{Error, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// SOTA to POTA log converter
///
/// Converts SOTA activator log exports into POTA ADIF submission files,
/// expanding every contact made from a summit that lies inside one or more
/// parks and flagging park-to-park contacts detected from the S2S log.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "sota2pota",
    version,
    about = "Convert SOTA activator logs into POTA ADIF submission files",
    long_about = "Converts SOTA (Summits on the Air) activator logs into POTA (Parks on the \
                  Air) submission files. Contacts made from summits that lie inside one or \
                  more parks are expanded into one ADIF record per park, summit-to-summit \
                  contacts whose counterparty summit is also inside a park become \
                  park-to-park records, and the results are grouped into one ADIF file per \
                  operator and park, ready for upload."
)]
pub struct Args {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Args {
    /// Get the command to execute, falling back to a default convert command
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Convert(ConvertArgs::default()))
    }
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Convert SOTA logs into per-park ADIF files (main command)
    Convert(ConvertArgs),
    /// Build the summit-to-park reference table from public datasets
    Summits(SummitsArgs),
}

/// Report output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable output with colors and formatting
    Human,
    /// JSON output for machine processing
    Json,
}

/// Arguments for the convert command
#[derive(Debug, Clone, Parser)]
pub struct ConvertArgs {
    /// SOTA activator log CSV export
    #[arg(
        short = 'a',
        long = "activator",
        value_name = "FILE",
        help = "SOTA activator log CSV export",
        long_help = "Path to the activator log CSV downloaded from the SOTA database. \
                     Every contact in this file is considered for conversion."
    )]
    pub activator: PathBuf,

    /// SOTA summit-to-summit log CSV export
    #[arg(
        short = 's',
        long = "s2s",
        value_name = "FILE",
        help = "SOTA summit-to-summit log CSV export",
        long_help = "Path to the S2S log CSV downloaded from the SOTA database. Contacts \
                     that also appear here carry the counterparty summit, which is used \
                     to detect park-to-park contacts."
    )]
    pub s2s: PathBuf,

    /// Summit-to-park reference table
    #[arg(
        long = "summits",
        value_name = "FILE",
        help = "Summit-to-park reference table CSV",
        long_help = "Path to the summit-to-park table produced by the summits command. \
                     Overrides the location from the configuration file."
    )]
    pub summit_table: Option<PathBuf>,

    /// Output directory for generated ADIF files
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output directory for ADIF files",
        long_help = "Directory where the per-park ADIF files are written. Created if it \
                     does not exist; existing files with the same name are overwritten."
    )]
    pub output_path: Option<PathBuf>,

    /// Earliest QSO date to include
    #[arg(
        long = "cutoff",
        value_name = "YYYYMMDD",
        help = "Earliest QSO date to include (inclusive)",
        long_help = "Contacts dated before this 8-digit date are dropped after \
                     normalization. Useful for excluding contacts already submitted in \
                     an earlier run."
    )]
    pub cutoff: Option<String>,

    /// Configuration file path
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Configuration file path (TOML format)",
        long_help = "Path to TOML configuration file. If not specified, looks for \
                     config.toml in the default user configuration directory."
    )]
    pub config_file: Option<PathBuf>,

    /// Final report format
    #[arg(
        long = "report",
        value_enum,
        default_value = "human",
        help = "Final report format"
    )]
    pub report_format: ReportFormat,

    /// Increase verbosity (can be repeated: -v, -vv)
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        help = "Increase verbosity (-v for info-level detail, -vv for debug)"
    )]
    pub verbose: u8,

    /// Suppress progress output
    #[arg(
        short = 'q',
        long = "quiet",
        conflicts_with = "verbose",
        help = "Suppress progress bars and non-essential output"
    )]
    pub quiet: bool,
}

impl Default for ConvertArgs {
    fn default() -> Self {
        Self {
            activator: PathBuf::new(),
            s2s: PathBuf::new(),
            summit_table: None,
            output_path: None,
            cutoff: None,
            config_file: None,
            report_format: ReportFormat::Human,
            verbose: 0,
            quiet: false,
        }
    }
}

impl ConvertArgs {
    /// Validate argument combinations and file existence
    pub fn validate(&self) -> Result<()> {
        if !self.activator.is_file() {
            return Err(Error::file_not_found(format!(
                "Activator log does not exist: {}",
                self.activator.display()
            )));
        }

        if !self.s2s.is_file() {
            return Err(Error::file_not_found(format!(
                "S2S log does not exist: {}",
                self.s2s.display()
            )));
        }

        if let Some(summit_table) = &self.summit_table {
            if !summit_table.is_file() {
                return Err(Error::file_not_found(format!(
                    "Summit table does not exist: {}",
                    summit_table.display()
                )));
            }
        }

        if let Some(cutoff) = &self.cutoff {
            if !constants::is_valid_cutoff(cutoff) {
                return Err(Error::configuration(format!(
                    "Cutoff must be an 8-digit date (YYYYMMDD), got '{}'",
                    cutoff
                )));
            }
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::file_not_found(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Get effective log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if progress bars should be displayed
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Arguments for the summits command
#[derive(Debug, Clone, Parser)]
pub struct SummitsArgs {
    /// SOTA activator log CSV export
    #[arg(
        short = 'a',
        long = "activator",
        value_name = "FILE",
        help = "SOTA activator log CSV export",
        long_help = "Path to the activator log CSV whose summits should be resolved. \
                     The table covers exactly the summits that appear in this log."
    )]
    pub activator: PathBuf,

    /// Cache directory for downloaded reference datasets
    #[arg(
        long = "cache",
        value_name = "PATH",
        help = "Cache directory for the SOTA summit and POTA park lists",
        long_help = "Directory where the downloaded summit and park lists are cached. \
                     Delete the cached files to force a fresh download."
    )]
    pub cache_path: Option<PathBuf>,

    /// Output path for the summit-to-park table
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output path for the summit-to-park table",
        long_help = "Where to write the finished table. Defaults to the summit table \
                     location the convert command reads from."
    )]
    pub output_path: Option<PathBuf>,

    /// Configuration file path
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Configuration file path (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Increase verbosity (can be repeated: -v, -vv)
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        help = "Increase verbosity (-v for info-level detail, -vv for debug)"
    )]
    pub verbose: u8,

    /// Suppress progress output
    #[arg(
        short = 'q',
        long = "quiet",
        conflicts_with = "verbose",
        help = "Suppress progress bars and non-essential output"
    )]
    pub quiet: bool,
}

impl SummitsArgs {
    /// Validate argument combinations and file existence
    pub fn validate(&self) -> Result<()> {
        if !self.activator.is_file() {
            return Err(Error::file_not_found(format!(
                "Activator log does not exist: {}",
                self.activator.display()
            )));
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::file_not_found(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Get effective log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if progress bars should be displayed
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_log_file(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, "test").unwrap();
        path
    }

    #[test]
    fn test_default_convert_args() {
        let args = ConvertArgs::default();
        assert_eq!(args.report_format, ReportFormat::Human);
        assert_eq!(args.verbose, 0);
        assert!(!args.quiet);
        assert!(args.cutoff.is_none());
    }

    #[test]
    fn test_convert_args_validation_success() {
        let temp_dir = TempDir::new().unwrap();
        let args = ConvertArgs {
            activator: write_log_file(&temp_dir, "activator.csv"),
            s2s: write_log_file(&temp_dir, "s2s.csv"),
            ..Default::default()
        };

        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_convert_args_missing_activator() {
        let temp_dir = TempDir::new().unwrap();
        let args = ConvertArgs {
            activator: temp_dir.path().join("nonexistent.csv"),
            s2s: write_log_file(&temp_dir, "s2s.csv"),
            ..Default::default()
        };

        let result = args.validate();
        assert!(matches!(result, Err(Error::FileNotFound { .. })));
    }

    #[test]
    fn test_convert_args_missing_s2s() {
        let temp_dir = TempDir::new().unwrap();
        let args = ConvertArgs {
            activator: write_log_file(&temp_dir, "activator.csv"),
            s2s: temp_dir.path().join("nonexistent.csv"),
            ..Default::default()
        };

        let result = args.validate();
        assert!(matches!(result, Err(Error::FileNotFound { .. })));
    }

    #[test]
    fn test_convert_args_missing_summit_table() {
        let temp_dir = TempDir::new().unwrap();
        let args = ConvertArgs {
            activator: write_log_file(&temp_dir, "activator.csv"),
            s2s: write_log_file(&temp_dir, "s2s.csv"),
            summit_table: Some(temp_dir.path().join("nonexistent.csv")),
            ..Default::default()
        };

        let result = args.validate();
        assert!(matches!(result, Err(Error::FileNotFound { .. })));
    }

    #[test]
    fn test_convert_args_rejects_invalid_cutoff() {
        let temp_dir = TempDir::new().unwrap();
        let args = ConvertArgs {
            activator: write_log_file(&temp_dir, "activator.csv"),
            s2s: write_log_file(&temp_dir, "s2s.csv"),
            cutoff: Some("2024-08-01".to_string()),
            ..Default::default()
        };

        let result = args.validate();
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_convert_args_accepts_valid_cutoff() {
        let temp_dir = TempDir::new().unwrap();
        let args = ConvertArgs {
            activator: write_log_file(&temp_dir, "activator.csv"),
            s2s: write_log_file(&temp_dir, "s2s.csv"),
            cutoff: Some("20240801".to_string()),
            ..Default::default()
        };

        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_convert_args_missing_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let args = ConvertArgs {
            activator: write_log_file(&temp_dir, "activator.csv"),
            s2s: write_log_file(&temp_dir, "s2s.csv"),
            config_file: Some(temp_dir.path().join("nonexistent.toml")),
            ..Default::default()
        };

        let result = args.validate();
        assert!(matches!(result, Err(Error::FileNotFound { .. })));
    }

    #[test]
    fn test_get_log_level() {
        let mut args = ConvertArgs::default();

        args.verbose = 0;
        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 5;
        assert_eq!(args.get_log_level(), "trace");

        args.verbose = 0;
        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_show_progress() {
        let mut args = ConvertArgs::default();
        assert!(args.show_progress());

        args.quiet = true;
        assert!(!args.show_progress());
    }

    #[test]
    fn test_summits_args_validation() {
        let temp_dir = TempDir::new().unwrap();
        let args = SummitsArgs {
            activator: write_log_file(&temp_dir, "activator.csv"),
            cache_path: None,
            output_path: None,
            config_file: None,
            verbose: 0,
            quiet: false,
        };

        assert!(args.validate().is_ok());

        let missing = SummitsArgs {
            activator: temp_dir.path().join("nonexistent.csv"),
            ..args
        };
        assert!(matches!(
            missing.validate(),
            Err(Error::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_parse_convert_subcommand() {
        let args = Args::try_parse_from([
            "sota2pota",
            "convert",
            "--activator",
            "log.csv",
            "--s2s",
            "s2s.csv",
            "--report",
            "json",
            "-vv",
        ])
        .unwrap();

        match args.get_command() {
            Commands::Convert(convert_args) => {
                assert_eq!(convert_args.activator, PathBuf::from("log.csv"));
                assert_eq!(convert_args.s2s, PathBuf::from("s2s.csv"));
                assert_eq!(convert_args.report_format, ReportFormat::Json);
                assert_eq!(convert_args.verbose, 2);
            }
            _ => panic!("Expected convert subcommand"),
        }
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Args::try_parse_from([
            "sota2pota",
            "convert",
            "--activator",
            "log.csv",
            "--s2s",
            "s2s.csv",
            "--quiet",
            "-v",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn test_parse_summits_subcommand() {
        let args = Args::try_parse_from([
            "sota2pota",
            "summits",
            "--activator",
            "log.csv",
            "--cache",
            "cache_dir",
        ])
        .unwrap();

        match args.get_command() {
            Commands::Summits(summits_args) => {
                assert_eq!(summits_args.activator, PathBuf::from("log.csv"));
                assert_eq!(summits_args.cache_path, Some(PathBuf::from("cache_dir")));
                assert!(summits_args.output_path.is_none());
            }
            _ => panic!("Expected summits subcommand"),
        }
    }
}
