//! Tests for expiry classification and fiscal-year windows

use test_case::test_case;
use trainreport::core::services::{FiscalYear, classify_expiry, fiscal_year_range};
use trainreport::models::{ExpiryStatus, parse_date};

use crate::common::fixtures::ymd;

// =============================================================================
// Expiry Classification Tests
// =============================================================================

#[test_case("10/15/2023", ExpiryStatus::ExpiringSoon ; "inside the window")]
#[test_case("09/30/2023", ExpiryStatus::Expired ; "day before reference")]
#[test_case("10/01/2023", ExpiryStatus::ExpiringSoon ; "equal to reference is expiring soon")]
#[test_case("11/01/2023", ExpiryStatus::ExpiringSoon ; "window end is inclusive")]
#[test_case("11/02/2023", ExpiryStatus::NotExpired ; "day after window end")]
#[test_case("10/01/2024", ExpiryStatus::NotExpired ; "a year out")]
#[test_case("01/01/2020", ExpiryStatus::Expired ; "long expired")]
fn test_classify_against_october_first(expires: &str, expected: ExpiryStatus) {
    let reference = ymd(2023, 10, 1);
    let expires = parse_date(expires).unwrap();
    assert_eq!(classify_expiry(Some(expires), reference), expected);
}

#[test]
fn test_no_expiry_never_expires() {
    assert_eq!(classify_expiry(None, ymd(2023, 10, 1)), ExpiryStatus::NotExpired);
    assert_eq!(classify_expiry(None, ymd(1970, 1, 1)), ExpiryStatus::NotExpired);
}

#[test]
fn test_expired_the_day_after() {
    let expires = ymd(2024, 2, 29);
    assert_eq!(classify_expiry(Some(expires), ymd(2024, 3, 1)), ExpiryStatus::Expired);
    assert_ne!(classify_expiry(Some(expires), expires), ExpiryStatus::Expired);
}

#[test_case(ymd(2024, 1, 31), ymd(2024, 2, 29) ; "leap year clamp")]
#[test_case(ymd(2023, 1, 31), ymd(2023, 2, 28) ; "common year clamp")]
#[test_case(ymd(2023, 3, 31), ymd(2023, 4, 30) ; "thirty day month clamp")]
#[test_case(ymd(2023, 12, 15), ymd(2024, 1, 15) ; "year rollover")]
fn test_window_end_is_last_expiring_soon_day(reference: chrono::NaiveDate, window_end: chrono::NaiveDate) {
    assert_eq!(classify_expiry(Some(window_end), reference), ExpiryStatus::ExpiringSoon);
    assert_eq!(
        classify_expiry(window_end.succ_opt(), reference),
        ExpiryStatus::NotExpired
    );
}

#[test]
fn test_status_labels() {
    assert_eq!(ExpiryStatus::Expired.to_string(), "Expired");
    assert_eq!(ExpiryStatus::ExpiringSoon.to_string(), "Expires soon");
    assert_eq!(
        serde_json::to_string(&ExpiryStatus::ExpiringSoon).unwrap(),
        "\"Expires soon\""
    );
    assert!(!ExpiryStatus::NotExpired.needs_attention());
}

// =============================================================================
// Fiscal Year Tests
// =============================================================================

#[test]
fn test_fiscal_year_range_2024() {
    assert_eq!(fiscal_year_range(2024).unwrap(), (ymd(2023, 7, 1), ymd(2024, 6, 30)));
}

#[test_case(ymd(2023, 6, 30), false ; "day before start")]
#[test_case(ymd(2023, 7, 1), true ; "first day")]
#[test_case(ymd(2024, 2, 29), true ; "leap day")]
#[test_case(ymd(2024, 6, 30), true ; "last day")]
#[test_case(ymd(2024, 7, 1), false ; "day after end")]
fn test_fiscal_year_2024_membership(date: chrono::NaiveDate, expected: bool) {
    let fy = FiscalYear::new(2024).unwrap();
    assert_eq!(fy.contains(date), expected);
}

#[test]
fn test_fiscal_year_accessors() {
    let fy = FiscalYear::containing(ymd(2023, 10, 1)).unwrap();
    assert_eq!(fy.year(), 2024);
    assert_eq!(fy.start(), ymd(2023, 7, 1));
    assert_eq!(fy.end(), ymd(2024, 6, 30));
}
