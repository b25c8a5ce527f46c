//! Single-report commands

use std::path::Path;

use anyhow::Context;

use trainreport::config::ReportOverrides;
use trainreport::output::{OutputMode, RunSummary};

use super::setup::prepare;

/// Write only the completion counts report
pub fn counts(
    config_path: Option<&Path>,
    overrides: ReportOverrides,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    let (settings, runner) = prepare(config_path, overrides)?;
    let report = runner
        .counts()
        .with_context(|| format!("counts report failed for {}", settings.data.display()))?;

    RunSummary::from(&report).render(output_mode);
    Ok(())
}

/// Write only the fiscal-year graduates report
pub fn graduates(
    config_path: Option<&Path>,
    overrides: ReportOverrides,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    let (settings, runner) = prepare(config_path, overrides)?;
    let report = runner
        .graduates(settings.fiscal_year, &settings.trainings)
        .with_context(|| format!("graduates report failed for {}", settings.data.display()))?;

    RunSummary::from(&report).render(output_mode);
    Ok(())
}

/// Write only the expiry report
pub fn expiring(
    config_path: Option<&Path>,
    overrides: ReportOverrides,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    let (settings, runner) = prepare(config_path, overrides)?;
    let report = runner
        .expiring(settings.expiry_date)
        .with_context(|| format!("expiry report failed for {}", settings.data.display()))?;

    RunSummary::from(&report).render(output_mode);
    Ok(())
}
