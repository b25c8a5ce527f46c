//! JSON file roster source

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::ports::{RosterError, RosterSource};
use crate::models::Person;

use super::parser::parse_roster;

/// Roster source backed by a JSON file
#[derive(Debug, Clone)]
pub struct JsonRosterFile {
    path: PathBuf,
}

impl JsonRosterFile {
    /// Create a source reading from `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File this source reads
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RosterSource for JsonRosterFile {
    fn load(&self) -> Result<Vec<Person>, RosterError> {
        if !self.path.is_file() {
            return Err(RosterError::NotFound(self.path.clone()));
        }

        log::debug!("Reading roster from {}", self.path.display());
        let content = fs::read_to_string(&self.path).map_err(|source| RosterError::Io {
            path: self.path.clone(),
            source,
        })?;

        parse_roster(&content)
    }
}
