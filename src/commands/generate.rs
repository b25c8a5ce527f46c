//! Generate command - write all three reports

use std::path::Path;

use anyhow::Context;

use trainreport::config::ReportOverrides;
use trainreport::core::services::ReportOptions;
use trainreport::output::{OutputMode, RunSummary};

use super::setup::prepare;

/// Write the counts, fiscal-year and expiry reports
pub fn generate(
    config_path: Option<&Path>,
    overrides: ReportOverrides,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    let (settings, runner) = prepare(config_path, overrides)?;

    let options = ReportOptions {
        reference_date: settings.expiry_date,
        fiscal_year: settings.fiscal_year,
        trainings: settings.trainings,
    };

    let report = runner
        .generate_all(&options)
        .with_context(|| format!("report generation failed for {}", settings.data.display()))?;

    RunSummary::from(&report).render(output_mode);
    Ok(())
}
