//! Completion counts report

use serde::Serialize;

use super::index::CompletionIndex;

/// One row of the counts report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrainingCount {
    /// Training name
    #[serde(rename = "Name")]
    pub name: String,
    /// Distinct people who completed it
    #[serde(rename = "Count")]
    pub count: usize,
}

/// Count graduates per training, in first-seen order
#[must_use]
pub fn counts_report(index: &CompletionIndex<'_>) -> Vec<TrainingCount> {
    index
        .entries()
        .iter()
        .map(|entry| TrainingCount {
            name: entry.training_name().to_string(),
            count: entry.graduate_count(),
        })
        .collect()
}
