use std::path::Path;

use crate::application::config::AppConfig;
use crate::application::services::probe::{ProbeError, ProbeService};
use crate::domain::ports::source::{DeviceSource, SourceError};
use crate::domain::value_objects::subcommand::Subcommand;
use crate::infrastructure::sources::snapshot::SnapshotSource;
use crate::presentation::cli::formatters::report_fmt;

/// What the plugin prints and how it exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub output: String,
    pub exit_code: i32,
}

impl CheckOutcome {
    /// Outcome of a run that stopped before producing a report.
    #[must_use]
    pub fn aborted(err: &ProbeError, color: bool) -> Self {
        tracing::warn!("check aborted: {err}");
        let severity = err.severity();
        Self {
            output: format!(
                "{}\n",
                report_fmt::format_abort(severity, &err.to_string(), color)
            ),
            exit_code: severity.exit_code(),
        }
    }
}

/// Opens the configured capture file.
///
/// # Errors
///
/// Returns `SourceError` if no capture is configured or it cannot be loaded.
pub fn open_snapshot(path: Option<&Path>) -> Result<SnapshotSource, SourceError> {
    let path = path.ok_or_else(|| {
        SourceError::Unavailable(
            "no device data configured, pass --snapshot or set [source] snapshot".to_string(),
        )
    })?;
    SnapshotSource::open(path)
}

/// Checks one device family and renders the plugin output.
#[must_use]
pub fn check(
    source: &dyn DeviceSource,
    subcommand: Subcommand,
    config: &AppConfig,
    color: bool,
) -> CheckOutcome {
    let service = ProbeService::new(source, &config.thresholds, &config.ignore);
    match service.run(subcommand) {
        Ok(report) => CheckOutcome {
            output: report_fmt::format_report(&report, color),
            exit_code: report.exit_code(),
        },
        Err(err) => CheckOutcome::aborted(&err, color),
    }
}

/// Validates thresholds, then checks the configured capture.
///
/// A misconfigured threshold aborts before the capture is opened.
#[must_use]
pub fn check_snapshot(subcommand: Subcommand, config: &AppConfig, color: bool) -> CheckOutcome {
    if let Err(err) = config.thresholds.validate() {
        return CheckOutcome::aborted(&err.into(), color);
    }
    match open_snapshot(config.source.snapshot.as_deref()) {
        Ok(source) => check(&source, subcommand, config, color),
        Err(err) => CheckOutcome::aborted(&err.into(), color),
    }
}

/// Runs the check against the configured capture and prints the result.
/// Returns the process exit code.
#[must_use]
pub fn run_check(subcommand: Subcommand, config: &AppConfig, color: bool) -> i32 {
    let outcome = check_snapshot(subcommand, config, color);
    print!("{}", outcome.output);
    outcome.exit_code
}
