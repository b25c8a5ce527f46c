//! Command implementations

mod generate;
mod reports;
mod setup;

pub use generate::generate;
pub use reports::{counts, expiring, graduates};
