//! Core domain logic for trainreport
//!
//! Report logic works on in-memory rosters. All file access is
//! abstracted through port traits.
//!
//! ## Architecture
//!
//! - `services/` - Indexing, date windows and the three reports
//! - `ports/` - Trait definitions for roster sources and report sinks

pub mod ports;
pub mod services;
