//! JSON report directory sink

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::ports::{ReportError, ReportSink};

/// Report sink writing pretty-printed JSON files into a directory
///
/// The directory is created on first write.
#[derive(Debug, Clone)]
pub struct JsonReportDir {
    dir: PathBuf,
}

impl JsonReportDir {
    /// Create a sink writing into `dir`
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Output directory
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ReportSink for JsonReportDir {
    fn write(&self, file_name: &str, report: &serde_json::Value) -> Result<PathBuf, ReportError> {
        fs::create_dir_all(&self.dir).map_err(|source| ReportError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let content =
            serde_json::to_string_pretty(report).map_err(|source| ReportError::Serialize {
                file: file_name.to_string(),
                source,
            })?;

        let path = self.dir.join(file_name);
        fs::write(&path, content).map_err(|source| ReportError::Io {
            path: path.clone(),
            source,
        })?;

        Ok(path)
    }
}
