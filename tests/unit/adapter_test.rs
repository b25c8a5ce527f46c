//! Tests for the JSON file adapters

use std::fs;

use tempfile::TempDir;
use trainreport::adapters::json::{JsonReportDir, JsonRosterFile, parse_roster};
use trainreport::core::ports::{ReportSink, RosterError, RosterSource};

use crate::common::fixtures::{SAMPLE_ROSTER_JSON, sample_roster};

// =============================================================================
// Roster Loading Tests
// =============================================================================

#[test]
fn test_sample_roster_parses_case_insensitively() {
    let people = parse_roster(SAMPLE_ROSTER_JSON).unwrap();
    assert_eq!(people, sample_roster());
}

#[test]
fn test_load_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("roster.json");
    fs::write(&path, SAMPLE_ROSTER_JSON).unwrap();

    let source = JsonRosterFile::new(&path);
    assert_eq!(source.path(), path.as_path());
    assert_eq!(source.load().unwrap().len(), 4);
}

#[test]
fn test_missing_file() {
    let temp = TempDir::new().unwrap();
    let source = JsonRosterFile::new(temp.path().join("nope.json"));
    assert!(matches!(source.load(), Err(RosterError::NotFound(_))));
}

#[test]
fn test_directory_is_not_a_roster() {
    let temp = TempDir::new().unwrap();
    let source = JsonRosterFile::new(temp.path());
    assert!(matches!(source.load(), Err(RosterError::NotFound(_))));
}

#[test]
fn test_malformed_json_keeps_parser_message() {
    let err = parse_roster("[{\"name\": \"Alice\",").unwrap_err();
    assert!(matches!(err, RosterError::Parse(_)));
    assert!(err.to_string().starts_with("failed to parse training data:"));
}

#[test]
fn test_schema_mismatch() {
    let err = parse_roster(r#"{"name": "not an array"}"#).unwrap_err();
    assert!(matches!(err, RosterError::Parse(_)));
}

#[test]
fn test_missing_timestamp_is_error() {
    let err = parse_roster(r#"[{"name": "A", "completions": [{"name": "CPR"}]}]"#).unwrap_err();
    assert!(err.to_string().contains("timestamp"));
}

#[test]
fn test_empty_roster_is_error() {
    assert!(matches!(parse_roster("[]"), Err(RosterError::Empty)));
    assert!(matches!(parse_roster("null"), Err(RosterError::Empty)));
}

#[test]
fn test_unknown_fields_are_ignored() {
    let people =
        parse_roster(r#"[{"name": "A", "email": "a@example.com", "completions": []}]"#).unwrap();
    assert_eq!(people[0].name, "A");
}

// =============================================================================
// Report Writing Tests
// =============================================================================

#[test]
fn test_report_dir_is_created_and_pretty_printed() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("nested/out");
    let sink = JsonReportDir::new(&dir);

    let path = sink.write("Report.json", &serde_json::json!([{"Name": "CPR", "Count": 2}])).unwrap();

    assert_eq!(path, dir.join("Report.json"));
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("\n  {\n    \"Name\": \"CPR\""));
}

#[test]
fn test_report_overwrites_existing_file() {
    let temp = TempDir::new().unwrap();
    let sink = JsonReportDir::new(temp.path());

    sink.write("Report.json", &serde_json::json!([1, 2, 3])).unwrap();
    sink.write("Report.json", &serde_json::json!([])).unwrap();

    let content = fs::read_to_string(temp.path().join("Report.json")).unwrap();
    assert_eq!(content, "[]");
}

#[test]
fn test_unwritable_output_dir() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("file");
    fs::write(&blocker, "not a dir").unwrap();

    let sink = JsonReportDir::new(blocker.join("out"));
    assert!(sink.write("Report.json", &serde_json::json!([])).is_err());
}
