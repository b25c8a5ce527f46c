//! Shared setup for the report commands

use std::path::Path;

use anyhow::Context;
use chrono::Local;

use trainreport::adapters::json::{JsonReportDir, JsonRosterFile};
use trainreport::config::{Config, ReportOverrides, ReportSettings};
use trainreport::core::services::ReportRunner;

/// Runner reading a JSON roster file and writing JSON reports
pub type JsonRunner = ReportRunner<JsonRosterFile, JsonReportDir>;

/// Resolve settings from flags, config and defaults, and build a runner
pub fn prepare(
    config_path: Option<&Path>,
    overrides: ReportOverrides,
) -> anyhow::Result<(ReportSettings, JsonRunner)> {
    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let config = Config::load(config_path, &cwd)?;
    let settings = config.resolve(overrides, Local::now().date_naive())?;

    log::debug!(
        "Settings: data={} output={} fiscal_year={} expiry_date={}",
        settings.data.display(),
        settings.output_dir.display(),
        settings.fiscal_year,
        settings.expiry_date
    );

    let runner = ReportRunner::new(
        JsonRosterFile::new(&settings.data),
        JsonReportDir::new(&settings.output_dir),
    );
    Ok((settings, runner))
}
