//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the report logic and the
//! outside world (roster files, output directories).
//!
//! Implementations live in the `adapters` module.

mod report_sink;
mod roster_source;

pub use report_sink::{ReportError, ReportSink};
pub use roster_source::{RosterError, RosterSource};
