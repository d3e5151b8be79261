use thiserror::Error;

use super::aggregator::{DeviceAggregator, EvaluationError};
use super::report::Report;
use crate::domain::entities::device::DeviceRecord;
use crate::domain::ports::source::{DeviceSource, SourceError};
use crate::domain::rules::catalog::{family, DeviceFamily};
use crate::domain::value_objects::exclusion::IgnoreLists;
use crate::domain::value_objects::severity::Severity;
use crate::domain::value_objects::subcommand::Subcommand;
use crate::domain::value_objects::thresholds::{ThresholdError, ThresholdSet};

/// Anything that stops a run before a report exists.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error(transparent)]
    Threshold(#[from] ThresholdError),
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}

impl ProbeError {
    /// Every abort is reported to the scheduler as WARNING.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        Severity::Warning
    }
}

/// Orchestrates one check: validate → fetch → merge → evaluate → report.
pub struct ProbeService<'a> {
    source: &'a dyn DeviceSource,
    thresholds: &'a ThresholdSet,
    ignore: &'a IgnoreLists,
}

impl<'a> ProbeService<'a> {
    #[must_use]
    pub const fn new(
        source: &'a dyn DeviceSource,
        thresholds: &'a ThresholdSet,
        ignore: &'a IgnoreLists,
    ) -> Self {
        Self {
            source,
            thresholds,
            ignore,
        }
    }

    /// Checks one device family and builds its report.
    ///
    /// Thresholds are validated before the source is touched.
    ///
    /// # Errors
    ///
    /// Returns `ProbeError` if a warning threshold exceeds its critical
    /// counterpart, the source fails, or a record cannot be evaluated.
    pub fn run(&self, subcommand: Subcommand) -> Result<Report, ProbeError> {
        self.thresholds.validate()?;

        let family = family(subcommand, self.thresholds);
        let records = self.fetch(&family)?;
        let exclusions = family.exclusions(self.ignore);
        let store = DeviceAggregator::new(&family, &exclusions).evaluate(&records)?;

        let report = Report::build(&store, records);
        tracing::info!(
            "{subcommand}: {} device(s), {} flat finding(s), verdict {}",
            report.records().len(),
            report.flat().len(),
            report.severity()
        );
        Ok(report)
    }

    fn fetch(&self, family: &DeviceFamily) -> Result<Vec<DeviceRecord>, SourceError> {
        let mut queries = family.queries.iter();
        let Some(first) = queries.next() else {
            return Ok(Vec::new());
        };
        tracing::debug!("fetching {} ({})", first.part, first.basetype);
        let mut records = self.source.fetch(first)?;

        for query in queries {
            tracing::debug!("fetching {} ({}) for merge", query.part, query.basetype);
            let extra = self.source.fetch(query)?;
            if extra.len() != records.len() {
                return Err(SourceError::Misaligned {
                    part: first.part.to_string(),
                    other: query.part.to_string(),
                    left: records.len(),
                    right: extra.len(),
                });
            }
            for (record, other) in records.iter_mut().zip(extra) {
                record.merge(other);
            }
        }
        Ok(records)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::infrastructure::sources::in_memory::InMemorySource;

    fn drive(id: &str, temp: &str) -> DeviceRecord {
        DeviceRecord::new("drives")
            .with("disk id", id)
            .with("disk status", "Up")
            .with("disk health", "OK")
            .with("disk life left", "100%")
            .with("disk power on hours", "1200")
            .with("disk temperature", temp)
    }

    fn stats(id: &str, media_errors: &str) -> DeviceRecord {
        let mut record = DeviceRecord::new("disk-statistics").with("disk id", id);
        for name in [
            "Media Errors Port 1",
            "Media Errors Port 2",
            "Non-media Errors Port 1",
            "Non-media Errors Port 2",
            "Block Reassignments Port 1",
            "Block Reassignments Port 2",
            "Bad Blocks Port 1",
            "Bad Blocks Port 2",
        ] {
            record.insert(name, "0");
        }
        record.insert("Media Errors Port 1", media_errors);
        record
    }

    fn disk_source(stat_count: usize) -> InMemorySource {
        let source = InMemorySource::new()
            .with_records("drives", vec![drive("disk_01.01", "35 C"), drive("disk_01.02", "52 C")]);
        let all = vec![stats("disk_01.01", "0"), stats("disk_01.02", "3")];
        source.with_records("disk-statistics", all.into_iter().take(stat_count).collect())
    }

    #[test]
    fn warning_above_critical_aborts_before_fetch() {
        let source = InMemorySource::new().failing_with("must not be called");
        let thresholds = ThresholdSet {
            disk_temp_warning: Some(60),
            disk_temp_critical: Some(50),
            ..ThresholdSet::default()
        };
        let ignore = IgnoreLists::default();
        let err = ProbeService::new(&source, &thresholds, &ignore)
            .run(Subcommand::Disks)
            .expect_err("invalid thresholds");
        assert!(matches!(err, ProbeError::Threshold(_)));
        assert!(source.fetched().is_empty());
        assert_eq!(err.severity(), Severity::Warning);
        assert_eq!(
            err.to_string(),
            "disk temperature warning threshold must be lower than critical threshold (60 > 50)"
        );
    }

    #[test]
    fn disks_merge_statistics_and_evaluate() {
        let source = disk_source(2);
        let thresholds = ThresholdSet {
            disk_temp_warning: Some(40),
            disk_temp_critical: Some(50),
            media_errors_1_limit: Some(1),
            ..ThresholdSet::default()
        };
        let ignore = IgnoreLists::default();
        let report = ProbeService::new(&source, &thresholds, &ignore)
            .run(Subcommand::Disks)
            .expect("run");

        assert_eq!(report.records().len(), 2);
        assert_eq!(report.records()[1].get("Media Errors Port 1"), Some("3"));
        assert_eq!(report.exit_code(), 2);
        let rolled: Vec<String> = report.visible_rollup().iter().map(ToString::to_string).collect();
        assert_eq!(
            rolled,
            ["CRITICAL - disk_01.02 temperature 52 C."]
        );
        assert!(report.flat().is_empty());
        let messages: Vec<&str> = report.rollup().iter().map(|f| f.message.as_str()).collect();
        assert_eq!(
            messages,
            ["disk_01.01 is OK.", "disk_01.02 temperature 52 C."]
        );
    }

    #[test]
    fn misaligned_statistics_abort() {
        let source = disk_source(1);
        let thresholds = ThresholdSet::default();
        let ignore = IgnoreLists::default();
        let err = ProbeService::new(&source, &thresholds, &ignore)
            .run(Subcommand::Disks)
            .expect_err("lengths differ");
        assert!(matches!(
            err,
            ProbeError::Source(SourceError::Misaligned { left: 2, right: 1, .. })
        ));
    }

    #[test]
    fn excluded_disk_still_dumped() {
        let source = disk_source(2);
        let thresholds = ThresholdSet {
            disk_temp_warning: Some(40),
            disk_temp_critical: Some(50),
            ..ThresholdSet::default()
        };
        let ignore = IgnoreLists {
            disks: vec!["DISK_01.02".to_string()],
            ..IgnoreLists::default()
        };
        let report = ProbeService::new(&source, &thresholds, &ignore)
            .run(Subcommand::Disks)
            .expect("run");
        assert_eq!(report.exit_code(), 0);
        assert_eq!(report.records().len(), 2);
        assert!(report.rollup().iter().all(|f| f.device == "disk_01.01"));
        assert!(report.to_string().contains("disk_01.02"));
    }

    #[test]
    fn source_failure_is_reported() {
        let source = InMemorySource::new().failing_with("connection refused");
        let thresholds = ThresholdSet::default();
        let ignore = IgnoreLists::default();
        let err = ProbeService::new(&source, &thresholds, &ignore)
            .run(Subcommand::System)
            .expect_err("unavailable");
        assert_eq!(err.to_string(), "device data unavailable: connection refused");
    }
}
