//! Roster source port
//!
//! Defines the interface for loading the people and completions a run
//! reports on.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::Person;

/// Errors that can occur while loading a roster
#[derive(Debug, Error)]
pub enum RosterError {
    /// Training data file does not exist
    #[error("training data file not found: {0}")]
    NotFound(PathBuf),

    /// IO error while reading the roster
    #[error("failed to read {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Malformed JSON or a record that does not fit the schema
    #[error("failed to parse training data: {0}")]
    Parse(#[from] serde_json::Error),

    /// Roster was null or held no people
    #[error("training data contains no people")]
    Empty,
}

/// Source of roster records
///
/// Implementations handle where the roster comes from (a JSON file,
/// an in-memory fixture, ...). A successful load is never empty.
pub trait RosterSource {
    /// Load every person with their completions, in input order
    fn load(&self) -> Result<Vec<Person>, RosterError>;
}

impl<T: RosterSource + ?Sized> RosterSource for &T {
    fn load(&self) -> Result<Vec<Person>, RosterError> {
        (**self).load()
    }
}
