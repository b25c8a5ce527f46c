//! Calendar date parsing
//!
//! Roster files carry dates as `MM/DD/YYYY` strings. ISO dates and
//! date-times are accepted too; the time of day is dropped.

use chrono::NaiveDate;
use thiserror::Error;

/// Formats tried, in order, for a bare date
const DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%Y-%m-%d"];

/// Errors that can occur when handling dates
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// Date string was empty
    #[error("empty date")]
    Empty,

    /// Date string did not match any accepted format
    #[error("invalid date '{0}' (expected MM/DD/YYYY or YYYY-MM-DD)")]
    Invalid(String),

    /// Fiscal year cannot be represented as a calendar range
    #[error("fiscal year {0} is out of range")]
    FiscalYearOutOfRange(i32),
}

/// Parse a date string into a calendar date
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use trainreport::models::parse_date;
///
/// let expected = NaiveDate::from_ymd_opt(2023, 10, 1).unwrap();
/// assert_eq!(parse_date("10/01/2023").unwrap(), expected);
/// assert_eq!(parse_date("2023-10-01").unwrap(), expected);
/// assert_eq!(parse_date("2023-10-01T08:30:00Z").unwrap(), expected);
/// ```
pub fn parse_date(input: &str) -> Result<NaiveDate, DateError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DateError::Empty);
    }

    if let Some(date) = parse_bare(trimmed) {
        return Ok(date);
    }

    // Date-time: keep only the date portion
    trimmed
        .split_once(['T', ' '])
        .and_then(|(date_part, _)| parse_bare(date_part))
        .ok_or_else(|| DateError::Invalid(trimmed.to_string()))
}

fn parse_bare(input: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(input, format).ok())
}

/// Serde helpers for required `MM/DD/YYYY` dates
pub mod mdy {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, de};

    use super::parse_date;

    /// Deserialize a date from any accepted date string
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_date(&raw).map_err(de::Error::custom)
    }
}

/// Serde helpers for optional `MM/DD/YYYY` dates
///
/// `null`, a missing field and an empty string all mean "no date".
pub mod mdy_option {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, de};

    use super::parse_date;

    /// Deserialize an optional date
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => parse_date(value).map(Some).map_err(de::Error::custom),
        }
    }
}
