//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::services::RunReport;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Summary of a report run
#[derive(Debug, Serialize)]
pub struct RunSummary {
    /// People in the roster
    pub people: usize,
    /// Distinct trainings in the roster
    pub trainings: usize,
    /// Reports that were written
    pub reports: Vec<WrittenReport>,
}

/// A report file that was written
#[derive(Debug, Serialize)]
pub struct WrittenReport {
    /// Report kind ("counts", "graduates", "expiring")
    pub kind: String,
    /// File path
    pub path: String,
    /// Number of rows in the report
    pub rows: usize,
}

impl From<&RunReport> for RunSummary {
    fn from(report: &RunReport) -> Self {
        Self {
            people: report.people,
            trainings: report.trainings,
            reports: report
                .files
                .iter()
                .map(|f| WrittenReport {
                    kind: f.kind.to_string(),
                    path: f.path.display().to_string(),
                    rows: f.rows,
                })
                .collect(),
        }
    }
}

impl RunSummary {
    /// Render the summary based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!(
            "Read {} people with {} distinct training(s).\n",
            self.people, self.trainings
        );

        for r in &self.reports {
            println!(
                "  {} {:<10} {} ({} rows)",
                "✓".green(),
                r.kind,
                r.path.bold(),
                r.rows
            );
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
