//! Report runner - load, index, report, write
//!
//! Wires a [`RosterSource`] to a [`ReportSink`]. The roster is loaded and
//! indexed once per call; each report is written independently.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use super::counts::counts_report;
use super::expiry::expiry_report;
use super::fiscal_year::{FiscalYearGraduates, fiscal_year_report};
use super::index::{CompletionIndex, build_index};
use crate::core::ports::{ReportError, ReportSink, RosterError, RosterSource};
use crate::models::{DateError, Person};

/// Output file for the completion counts report
pub const COUNTS_FILE: &str = "CompletedTrainingsWithCounts.json";

/// Output file for the expiry report
pub const EXPIRED_FILE: &str = "ExpiredTrainings.json";

/// Output file for the fiscal-year report of `year`
#[must_use]
pub fn graduates_file(year: i32) -> String {
    format!("GraduatesFiscalYear{year}.json")
}

/// Errors that can occur during a report run
#[derive(Debug, Error)]
pub enum RunError {
    /// Roster could not be loaded
    #[error(transparent)]
    Roster(#[from] RosterError),

    /// A report could not be written
    #[error(transparent)]
    Report(#[from] ReportError),

    /// Date arithmetic failed
    #[error(transparent)]
    Date(#[from] DateError),
}

/// Which report a file holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    /// Completion counts per training
    Counts,
    /// Graduates per training within a fiscal year
    Graduates,
    /// Expired and expiring-soon trainings per person
    Expiring,
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Counts => write!(f, "counts"),
            Self::Graduates => write!(f, "graduates"),
            Self::Expiring => write!(f, "expiring"),
        }
    }
}

/// A report that was written
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportFile {
    /// Report kind
    pub kind: ReportKind,
    /// Where it was written
    pub path: PathBuf,
    /// Number of top-level rows
    pub rows: usize,
}

/// Outcome of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// People loaded from the roster
    pub people: usize,
    /// Distinct training names in the roster
    pub trainings: usize,
    /// Reports written, in generation order
    pub files: Vec<ReportFile>,
}

/// Parameters for the fiscal-year and expiry reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Reference date for expiry classification
    pub reference_date: NaiveDate,
    /// Fiscal year for the graduates report
    pub fiscal_year: i32,
    /// Trainings to list in the graduates report, in output order
    pub trainings: Vec<String>,
}

/// Runs reports from a roster source into a report sink
#[derive(Debug)]
pub struct ReportRunner<S, K> {
    source: S,
    sink: K,
}

impl<S: RosterSource, K: ReportSink> ReportRunner<S, K> {
    /// Create a runner
    pub const fn new(source: S, sink: K) -> Self {
        Self { source, sink }
    }

    /// Generate all three reports
    ///
    /// Every report is built before the first one is written, so a bad
    /// fiscal year leaves no files behind.
    pub fn generate_all(&self, options: &ReportOptions) -> Result<RunReport, RunError> {
        let people = self.load()?;
        let index = build_index(&people);

        let counts = counts_report(&index);
        let graduates = graduate_rows(&index, options.fiscal_year, &options.trainings)?;
        let expiring = expiry_report(&people, options.reference_date);

        let files = vec![
            self.emit(ReportKind::Counts, COUNTS_FILE, &counts)?,
            self.emit(ReportKind::Graduates, &graduates_file(options.fiscal_year), &graduates)?,
            self.emit(ReportKind::Expiring, EXPIRED_FILE, &expiring)?,
        ];

        Ok(Self::finish(&index, files))
    }

    /// Generate only the completion counts report
    pub fn counts(&self) -> Result<RunReport, RunError> {
        let people = self.load()?;
        let index = build_index(&people);
        let files = vec![self.write_counts(&index)?];
        Ok(Self::finish(&index, files))
    }

    /// Generate only the fiscal-year graduates report
    pub fn graduates(&self, fiscal_year: i32, trainings: &[String]) -> Result<RunReport, RunError> {
        let people = self.load()?;
        let index = build_index(&people);
        let files = vec![self.write_graduates(&index, fiscal_year, trainings)?];
        Ok(Self::finish(&index, files))
    }

    /// Generate only the expiry report
    pub fn expiring(&self, reference_date: NaiveDate) -> Result<RunReport, RunError> {
        let people = self.load()?;
        let index = build_index(&people);
        let files = vec![self.write_expiring(&people, reference_date)?];
        Ok(Self::finish(&index, files))
    }

    fn load(&self) -> Result<Vec<Person>, RunError> {
        let people = self.source.load()?;
        log::info!("Loaded {} people", people.len());
        Ok(people)
    }

    fn finish(index: &CompletionIndex<'_>, files: Vec<ReportFile>) -> RunReport {
        RunReport {
            people: index.people().len(),
            trainings: index.len(),
            files,
        }
    }

    fn write_counts(&self, index: &CompletionIndex<'_>) -> Result<ReportFile, RunError> {
        let rows = counts_report(index);
        self.emit(ReportKind::Counts, COUNTS_FILE, &rows)
    }

    fn write_graduates(
        &self,
        index: &CompletionIndex<'_>,
        fiscal_year: i32,
        trainings: &[String],
    ) -> Result<ReportFile, RunError> {
        let rows = graduate_rows(index, fiscal_year, trainings)?;
        self.emit(ReportKind::Graduates, &graduates_file(fiscal_year), &rows)
    }

    fn write_expiring(
        &self,
        people: &[Person],
        reference_date: NaiveDate,
    ) -> Result<ReportFile, RunError> {
        let rows = expiry_report(people, reference_date);
        self.emit(ReportKind::Expiring, EXPIRED_FILE, &rows)
    }

    fn emit<T: Serialize>(
        &self,
        kind: ReportKind,
        file_name: &str,
        rows: &[T],
    ) -> Result<ReportFile, RunError> {
        let value = serde_json::to_value(rows).map_err(|source| ReportError::Serialize {
            file: file_name.to_string(),
            source,
        })?;
        let path = self.sink.write(file_name, &value)?;
        log::info!("Wrote {} ({} rows)", path.display(), rows.len());

        Ok(ReportFile {
            kind,
            path,
            rows: rows.len(),
        })
    }
}

fn graduate_rows(
    index: &CompletionIndex<'_>,
    fiscal_year: i32,
    trainings: &[String],
) -> Result<Vec<FiscalYearGraduates>, DateError> {
    if trainings.is_empty() {
        log::warn!("No trainings requested; fiscal year {fiscal_year} report will be empty");
    }
    fiscal_year_report(index, fiscal_year, trainings)
}
