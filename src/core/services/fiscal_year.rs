//! Graduates-by-fiscal-year report
//!
//! Only a person's most recent completion of a training is considered, so
//! someone who repeated a training in a later fiscal year is listed under
//! that later year only.

use std::collections::HashSet;

use serde::Serialize;

use super::index::CompletionIndex;
use super::temporal::FiscalYear;
use crate::models::DateError;

/// One row of the fiscal-year report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FiscalYearGraduates {
    /// Requested training name
    #[serde(rename = "Training")]
    pub training: String,
    /// Names of people whose latest completion falls in the fiscal year
    #[serde(rename = "Graduates")]
    pub graduates: Vec<String>,
}

/// List graduates of each requested training within a fiscal year
///
/// Trainings are reported in the order requested. Names missing from the
/// index are skipped without error. Graduate names are de-duplicated by
/// name, so two people sharing a name appear once.
pub fn fiscal_year_report(
    index: &CompletionIndex<'_>,
    fiscal_year: i32,
    requested: &[String],
) -> Result<Vec<FiscalYearGraduates>, DateError> {
    let window = FiscalYear::new(fiscal_year)?;
    let mut rows = Vec::with_capacity(requested.len());

    for training in requested {
        let Some(entry) = index.get(training) else {
            log::debug!("Skipping '{training}': no completions recorded");
            continue;
        };

        let mut seen = HashSet::new();
        let mut graduates = Vec::new();
        for person in index.graduates_of(entry) {
            let in_window = person
                .latest_completion(training)
                .is_some_and(|c| window.contains(c.completed_on));
            if in_window && seen.insert(person.name.as_str()) {
                graduates.push(person.name.clone());
            }
        }

        rows.push(FiscalYearGraduates {
            training: training.clone(),
            graduates,
        });
    }

    Ok(rows)
}
