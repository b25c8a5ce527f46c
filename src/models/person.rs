//! Person and completion records
//!
//! A person owns an ordered list of completions, kept in input order.
//! Training names are compared exactly (case-sensitive) throughout.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use super::date::{mdy, mdy_option};

/// A person from the training roster
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Person {
    /// Display name (not guaranteed unique)
    pub name: String,

    /// Completed trainings, in input order
    #[serde(default, deserialize_with = "null_as_empty")]
    pub completions: Vec<Completion>,
}

/// A record that a person finished a training
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Completion {
    /// Training name, exactly as it appears in the data
    #[serde(rename = "name")]
    pub training_name: String,

    /// Day the training was completed
    #[serde(rename = "timestamp", deserialize_with = "mdy::deserialize")]
    pub completed_on: NaiveDate,

    /// Last day the completion is valid (None = never expires)
    #[serde(rename = "expires", default, deserialize_with = "mdy_option::deserialize")]
    pub expires_on: Option<NaiveDate>,
}

impl Completion {
    /// Create a new completion
    #[must_use]
    pub fn new(
        training_name: impl Into<String>,
        completed_on: NaiveDate,
        expires_on: Option<NaiveDate>,
    ) -> Self {
        Self {
            training_name: training_name.into(),
            completed_on,
            expires_on,
        }
    }
}

impl Person {
    /// Create a person with no completions
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            completions: Vec::new(),
        }
    }

    /// Append a completion (builder style)
    #[must_use]
    pub fn with_completion(mut self, completion: Completion) -> Self {
        self.completions.push(completion);
        self
    }

    /// Whether the person has any completion of `training`
    #[must_use]
    pub fn has_completed(&self, training: &str) -> bool {
        self.completions.iter().any(|c| c.training_name == training)
    }

    /// The most recent completion of `training`
    ///
    /// When two completions share the latest date, the later one in input
    /// order wins.
    #[must_use]
    pub fn latest_completion(&self, training: &str) -> Option<&Completion> {
        self.completions
            .iter()
            .filter(|c| c.training_name == training)
            .fold(None, |best: Option<&Completion>, c| match best {
                Some(b) if b.completed_on > c.completed_on => Some(b),
                _ => Some(c),
            })
    }

    /// Completions with repeats collapsed to the most recent one per training
    ///
    /// Survivors keep their input order.
    #[must_use]
    pub fn effective_completions(&self) -> Vec<&Completion> {
        let mut latest: HashMap<&str, usize> = HashMap::new();
        for (pos, completion) in self.completions.iter().enumerate() {
            latest
                .entry(completion.training_name.as_str())
                .and_modify(|best| {
                    if completion.completed_on >= self.completions[*best].completed_on {
                        *best = pos;
                    }
                })
                .or_insert(pos);
        }

        let mut keep: Vec<usize> = latest.into_values().collect();
        keep.sort_unstable();
        keep.into_iter().map(|pos| &self.completions[pos]).collect()
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Completion>, D::Error> {
    Ok(Option::<Vec<Completion>>::deserialize(deserializer)?.unwrap_or_default())
}
