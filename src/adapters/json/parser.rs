//! Roster JSON parsing
//!
//! Field names in roster files match case-insensitively, so keys are
//! lowercased before typed deserialization.

use serde_json::Value;

use crate::core::ports::RosterError;
use crate::models::Person;

/// Parse roster JSON text into people
///
/// A `null` document or an empty array is rejected as [`RosterError::Empty`].
///
/// # Examples
///
/// ```
/// use trainreport::adapters::json::parse_roster;
///
/// let people = parse_roster(
///     r#"[{"Name": "Alice", "Completions": [{"NAME": "CPR", "Timestamp": "01/15/2023"}]}]"#,
/// )
/// .unwrap();
/// assert_eq!(people[0].completions[0].training_name, "CPR");
/// ```
pub fn parse_roster(content: &str) -> Result<Vec<Person>, RosterError> {
    let raw: Value = serde_json::from_str(content)?;
    let people: Option<Vec<Person>> = serde_json::from_value(lowercase_keys(raw))?;

    match people {
        Some(people) if !people.is_empty() => Ok(people),
        _ => Err(RosterError::Empty),
    }
}

/// Recursively lowercase every object key; values are left untouched
#[must_use]
pub fn lowercase_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key.to_lowercase(), lowercase_keys(value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(lowercase_keys).collect()),
        other => other,
    }
}
