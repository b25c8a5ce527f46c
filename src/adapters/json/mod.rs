//! JSON file adapters
//!
//! - [`parser`] - Case-insensitive roster deserialization
//! - [`roster`] - `RosterSource` reading a JSON file
//! - [`writer`] - `ReportSink` writing pretty JSON into a directory

pub mod parser;
pub mod roster;
pub mod writer;

pub use parser::{lowercase_keys, parse_roster};
pub use roster::JsonRosterFile;
pub use writer::JsonReportDir;
