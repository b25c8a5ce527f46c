//! Report services
//!
//! Pure logic over in-memory rosters. Apart from [`runner`], which talks
//! to the ports, nothing here performs I/O.
//!
//! - [`temporal`] - Expiry classification and fiscal-year windows
//! - [`index`] - Training name to graduates mapping
//! - [`counts`], [`fiscal_year`], [`expiry`] - The three reports
//! - [`runner`] - Load, index, report, write

pub mod counts;
pub mod expiry;
pub mod fiscal_year;
pub mod index;
pub mod runner;
pub mod temporal;

pub use counts::{TrainingCount, counts_report};
pub use expiry::{ExpiringTraining, PersonExpiry, expiry_report};
pub use fiscal_year::{FiscalYearGraduates, fiscal_year_report};
pub use index::{CompletionIndex, PersonId, TrainingIndexEntry, build_index};
pub use runner::{
    COUNTS_FILE, EXPIRED_FILE, ReportFile, ReportKind, ReportOptions, ReportRunner, RunError,
    RunReport, graduates_file,
};
pub use temporal::{EXPIRY_WINDOW, FiscalYear, classify_expiry, fiscal_year_range};
