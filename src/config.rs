//! Run configuration
//!
//! Report parameters come from three layers, highest priority first:
//! command-line flags, a `trainreport.toml` file, built-in defaults.
//!
//! ```toml
//! [reports]
//! data = "trainings.json"
//! output_dir = "output"
//! fiscal_year = 2024
//! expiry_date = "10/01/2023"
//! trainings = ["Electrical Safety", "X-Ray Safety"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::core::services::FiscalYear;
use crate::models::DateError;
use crate::models::date::mdy_option;

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "trainreport.toml";

/// Output directory used when neither flag nor config names one
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Errors that can occur while loading or resolving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Explicitly requested config file does not exist
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    /// IO error while reading the config
    #[error("failed to read {path}: {source}")]
    Io {
        /// Config file path
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Config is not valid TOML or has unknown keys
    #[error("invalid config {path}: {source}")]
    Parse {
        /// Config file path
        path: PathBuf,
        /// Underlying error
        source: toml::de::Error,
    },

    /// No training data file was given
    #[error("no training data file given (use --data or set reports.data in trainreport.toml)")]
    MissingData,

    /// Default fiscal year could not be derived
    #[error(transparent)]
    Date(#[from] DateError),
}

/// Contents of a `trainreport.toml` file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Report defaults
    #[serde(default)]
    pub reports: ReportsConfig,
}

/// `[reports]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportsConfig {
    /// Training data file
    #[serde(default)]
    pub data: Option<PathBuf>,
    /// Directory reports are written into
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    /// Fiscal year for the graduates report
    #[serde(default)]
    pub fiscal_year: Option<i32>,
    /// Reference date for the expiry report
    #[serde(default, deserialize_with = "mdy_option::deserialize")]
    pub expiry_date: Option<NaiveDate>,
    /// Trainings listed in the graduates report
    #[serde(default)]
    pub trainings: Vec<String>,
}

/// Values supplied on the command line; `None`/empty means "not given"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportOverrides {
    /// `--data`
    pub data: Option<PathBuf>,
    /// `--output`
    pub output_dir: Option<PathBuf>,
    /// `--fiscal-year`
    pub fiscal_year: Option<i32>,
    /// `--expiry-date`
    pub expiry_date: Option<NaiveDate>,
    /// `--trainings`
    pub trainings: Vec<String>,
}

/// Fully resolved report parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSettings {
    /// Training data file
    pub data: PathBuf,
    /// Directory reports are written into
    pub output_dir: PathBuf,
    /// Fiscal year for the graduates report
    pub fiscal_year: i32,
    /// Reference date for the expiry report
    pub expiry_date: NaiveDate,
    /// Trainings listed in the graduates report
    pub trainings: Vec<String>,
}

impl Config {
    /// Load configuration
    ///
    /// An explicit path must exist. Without one, `trainreport.toml` in
    /// `base_dir` is used if present, else the defaults.
    pub fn load(explicit: Option<&Path>, base_dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_file(path);
        }

        let implicit = base_dir.join(DEFAULT_CONFIG_FILE);
        if implicit.is_file() {
            Self::load_file(&implicit)
        } else {
            log::debug!("No {DEFAULT_CONFIG_FILE} found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        log::debug!("Loading config from {}", path.display());
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Merge command-line overrides over this config
    ///
    /// `today` supplies the default expiry date and fiscal year.
    pub fn resolve(
        &self,
        overrides: ReportOverrides,
        today: NaiveDate,
    ) -> Result<ReportSettings, ConfigError> {
        let reports = &self.reports;

        let data = overrides
            .data
            .or_else(|| reports.data.clone())
            .ok_or(ConfigError::MissingData)?;

        let output_dir = overrides
            .output_dir
            .or_else(|| reports.output_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

        let fiscal_year = match overrides.fiscal_year.or(reports.fiscal_year) {
            Some(year) => year,
            None => FiscalYear::containing(today)?.year(),
        };

        let expiry_date = overrides.expiry_date.or(reports.expiry_date).unwrap_or(today);

        let trainings = if overrides.trainings.is_empty() {
            reports.trainings.clone()
        } else {
            overrides.trainings
        };

        Ok(ReportSettings {
            data,
            output_dir,
            fiscal_year,
            expiry_date,
            trainings,
        })
    }
}
