//! Report sink port
//!
//! Defines the interface for persisting generated reports.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while writing a report
#[derive(Debug, Error)]
pub enum ReportError {
    /// Report rows could not be turned into JSON
    #[error("failed to serialize {file}: {source}")]
    Serialize {
        /// Report file name
        file: String,
        /// Underlying error
        source: serde_json::Error,
    },

    /// IO error while writing the report
    #[error("failed to write {path}: {source}")]
    Io {
        /// Path being written
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },
}

/// Destination for generated reports
pub trait ReportSink {
    /// Persist a report under `file_name`
    ///
    /// Returns the location the report was written to.
    fn write(&self, file_name: &str, report: &serde_json::Value) -> Result<PathBuf, ReportError>;
}

impl<T: ReportSink + ?Sized> ReportSink for &T {
    fn write(&self, file_name: &str, report: &serde_json::Value) -> Result<PathBuf, ReportError> {
        (**self).write(file_name, report)
    }
}
