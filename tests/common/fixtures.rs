//! Test fixtures and builders
//!
//! Provides convenient builders for creating test data.

use chrono::NaiveDate;
use trainreport::models::{Completion, Person};

/// Shorthand for a calendar date
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Builder for creating test people
pub struct PersonBuilder {
    person: Person,
}

impl PersonBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            person: Person::new(name),
        }
    }

    /// Add a completion that never expires
    pub fn completed(mut self, training: &str, on: NaiveDate) -> Self {
        self.person.completions.push(Completion::new(training, on, None));
        self
    }

    /// Add a completion with an expiry date
    pub fn completed_until(mut self, training: &str, on: NaiveDate, expires: NaiveDate) -> Self {
        self.person.completions.push(Completion::new(training, on, Some(expires)));
        self
    }

    pub fn build(self) -> Person {
        self.person
    }
}

/// Reference date used with [`SAMPLE_ROSTER_JSON`]
pub const SAMPLE_EXPIRY_DATE: &str = "10/01/2023";

/// A small roster exercising mixed-case keys, repeats, null expiry and
/// a person without completions.
///
/// With reference date 10/01/2023 and fiscal year 2024:
/// - counts: X-Ray Safety 2, Electrical Safety 2, Lab Orientation 2
/// - graduates: Electrical Safety [Alice, Bob], X-Ray Safety [Alice, Dan]
/// - expiring: Alice (Electrical, soon), Bob (Electrical, soon), Dan (X-Ray, expired)
pub const SAMPLE_ROSTER_JSON: &str = r#"[
  {
    "name": "Alice Adams",
    "completions": [
      { "name": "X-Ray Safety", "timestamp": "03/01/2024", "expires": "10/01/2024" },
      { "name": "Electrical Safety", "timestamp": "08/15/2023", "expires": "10/15/2023" }
    ]
  },
  {
    "Name": "Bob Brown",
    "Completions": [
      { "Name": "Electrical Safety", "Timestamp": "06/30/2023", "Expires": "09/30/2023" },
      { "Name": "Electrical Safety", "Timestamp": "07/01/2023", "Expires": "11/01/2023" },
      { "Name": "Lab Orientation", "Timestamp": "01/10/2024", "Expires": null }
    ]
  },
  {
    "name": "Carol Chen",
    "completions": []
  },
  {
    "NAME": "Dan Diaz",
    "COMPLETIONS": [
      { "name": "Lab Orientation", "timestamp": "07/01/2024" },
      { "name": "X-Ray Safety", "timestamp": "06/30/2024", "expires": "09/30/2023" }
    ]
  }
]"#;

/// The sample roster as typed records
pub fn sample_roster() -> Vec<Person> {
    vec![
        PersonBuilder::new("Alice Adams")
            .completed_until("X-Ray Safety", ymd(2024, 3, 1), ymd(2024, 10, 1))
            .completed_until("Electrical Safety", ymd(2023, 8, 15), ymd(2023, 10, 15))
            .build(),
        PersonBuilder::new("Bob Brown")
            .completed_until("Electrical Safety", ymd(2023, 6, 30), ymd(2023, 9, 30))
            .completed_until("Electrical Safety", ymd(2023, 7, 1), ymd(2023, 11, 1))
            .completed("Lab Orientation", ymd(2024, 1, 10))
            .build(),
        PersonBuilder::new("Carol Chen").build(),
        PersonBuilder::new("Dan Diaz")
            .completed("Lab Orientation", ymd(2024, 7, 1))
            .completed_until("X-Ray Safety", ymd(2024, 6, 30), ymd(2023, 9, 30))
            .build(),
    ]
}

/// Trainings requested from the sample roster, one of them unknown
pub fn sample_trainings() -> Vec<String> {
    vec![
        "Electrical Safety".to_string(),
        "X-Ray Safety".to_string(),
        "Fire Safety".to_string(),
    ]
}
