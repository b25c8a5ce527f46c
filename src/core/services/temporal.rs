//! Date-window logic
//!
//! Expiry classification and fiscal-year ranges. Pure functions, no state.
//!
//! Month addition follows `chrono::Months`: when the target day does not
//! exist it clamps to the last day of the month (Jan 31 + 1 month = Feb 28,
//! or Feb 29 in a leap year).

use chrono::{Datelike, Months, NaiveDate};

use crate::models::{DateError, ExpiryStatus};

/// How far past the reference date a completion counts as "expiring soon"
pub const EXPIRY_WINDOW: Months = Months::new(1);

/// First month of a fiscal year (July)
const FISCAL_START_MONTH: u32 = 7;

/// Classify a completion's expiry date against a reference date
///
/// A training is expired the day *after* its expiry date, so an expiry
/// equal to the reference date is not yet expired. The upper bound of the
/// "expiring soon" window is inclusive.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use trainreport::core::services::classify_expiry;
/// use trainreport::models::ExpiryStatus;
///
/// let reference = NaiveDate::from_ymd_opt(2023, 10, 1).unwrap();
/// let expires = NaiveDate::from_ymd_opt(2023, 10, 15);
/// assert_eq!(classify_expiry(expires, reference), ExpiryStatus::ExpiringSoon);
/// assert_eq!(classify_expiry(None, reference), ExpiryStatus::NotExpired);
/// ```
#[must_use]
pub fn classify_expiry(expires_on: Option<NaiveDate>, reference: NaiveDate) -> ExpiryStatus {
    let Some(expires_on) = expires_on else {
        return ExpiryStatus::NotExpired;
    };

    if expires_on < reference {
        return ExpiryStatus::Expired;
    }

    // Past the end of the calendar, every representable date is in the window
    match reference.checked_add_months(EXPIRY_WINDOW) {
        Some(window_end) if expires_on > window_end => ExpiryStatus::NotExpired,
        _ => ExpiryStatus::ExpiringSoon,
    }
}

/// An inclusive fiscal-year window: July 1 of `year - 1` to June 30 of `year`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiscalYear {
    year: i32,
    start: NaiveDate,
    end: NaiveDate,
}

impl FiscalYear {
    /// Build the window for fiscal year `year`
    pub fn new(year: i32) -> Result<Self, DateError> {
        let start = year
            .checked_sub(1)
            .and_then(|prev| NaiveDate::from_ymd_opt(prev, FISCAL_START_MONTH, 1));
        let end = NaiveDate::from_ymd_opt(year, FISCAL_START_MONTH - 1, 30);

        match (start, end) {
            (Some(start), Some(end)) => Ok(Self { year, start, end }),
            _ => Err(DateError::FiscalYearOutOfRange(year)),
        }
    }

    /// The fiscal year that `date` falls in
    pub fn containing(date: NaiveDate) -> Result<Self, DateError> {
        let year = if date.month() >= FISCAL_START_MONTH {
            date.year().checked_add(1).ok_or(DateError::FiscalYearOutOfRange(date.year()))?
        } else {
            date.year()
        };
        Self::new(year)
    }

    /// Fiscal year number (the calendar year it ends in)
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// First day of the window (inclusive)
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the window (inclusive)
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether `date` lies inside the window, both ends inclusive
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Start and end dates of fiscal year `year`
pub fn fiscal_year_range(year: i32) -> Result<(NaiveDate, NaiveDate), DateError> {
    FiscalYear::new(year).map(|fy| (fy.start, fy.end))
}
