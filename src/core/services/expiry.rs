//! Expired and expiring-soon trainings report

use chrono::NaiveDate;
use serde::Serialize;

use super::temporal::classify_expiry;
use crate::models::{ExpiryStatus, Person};

/// A training that has lapsed or is about to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpiringTraining {
    /// Training name
    #[serde(rename = "Training")]
    pub training: String,
    /// `Expired` or `ExpiringSoon`
    #[serde(rename = "Expires")]
    pub status: ExpiryStatus,
}

/// A person with at least one lapsed or lapsing training
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonExpiry {
    /// Person name
    #[serde(rename = "Name")]
    pub name: String,
    /// Flagged trainings, in input order
    #[serde(rename = "Trainings")]
    pub trainings: Vec<ExpiringTraining>,
}

/// Find each person's expired and expiring-soon trainings
///
/// Repeated trainings are collapsed to the most recent completion first,
/// so a renewed training never shows its stale expiry. People with nothing
/// flagged are left out.
#[must_use]
pub fn expiry_report(people: &[Person], reference: NaiveDate) -> Vec<PersonExpiry> {
    people
        .iter()
        .filter_map(|person| {
            let trainings: Vec<ExpiringTraining> = person
                .effective_completions()
                .into_iter()
                .filter_map(|c| {
                    let status = classify_expiry(c.expires_on, reference);
                    status.needs_attention().then(|| ExpiringTraining {
                        training: c.training_name.clone(),
                        status,
                    })
                })
                .collect();

            (!trainings.is_empty()).then(|| PersonExpiry {
                name: person.name.clone(),
                trainings,
            })
        })
        .collect()
}
