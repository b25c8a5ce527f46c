//! Data models for trainreport
//!
//! Core abstractions:
//! - Person: a roster entry owning its completion records
//! - Completion: "this person finished training X on day D, valid until E"
//! - `ExpiryStatus`: how close a completion is to lapsing

pub mod date;
mod person;
mod status;

pub use date::{DateError, parse_date};
pub use person::{Completion, Person};
pub use status::ExpiryStatus;
