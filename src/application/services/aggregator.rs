use thiserror::Error;

use crate::domain::entities::device::DeviceRecord;
use crate::domain::entities::results::ResultStore;
use crate::domain::rules::catalog::DeviceFamily;
use crate::domain::rules::performance::{MetricSource, PerformanceRule, RawReading};
use crate::domain::value_objects::exclusion::ExclusionSet;
use crate::domain::value_objects::units::UnitError;

#[derive(Error, Debug)]
pub enum EvaluationError {
    #[error("{property} error. Please check output!")]
    MissingProperty { property: String },
    #[error("{device} {rule}: {source}")]
    Unit {
        device: String,
        rule: &'static str,
        #[source]
        source: UnitError,
    },
}

/// Runs every rule of one device family over the fetched records.
pub struct DeviceAggregator<'a> {
    family: &'a DeviceFamily,
    exclusions: &'a ExclusionSet,
}

impl<'a> DeviceAggregator<'a> {
    #[must_use]
    pub const fn new(family: &'a DeviceFamily, exclusions: &'a ExclusionSet) -> Self {
        Self { family, exclusions }
    }

    /// Evaluates parameter rules, then single-property performance rules,
    /// then performance-difference rules, each pass over every device.
    ///
    /// Excluded devices contribute nothing.
    ///
    /// # Errors
    ///
    /// Returns `EvaluationError` if a record lacks a property some rule reads,
    /// or if a metric value does not parse.
    pub fn evaluate(&self, records: &[DeviceRecord]) -> Result<ResultStore, EvaluationError> {
        let mut store = ResultStore::new();
        let devices = self.included(records)?;
        tracing::debug!(
            "{}: evaluating {} of {} device(s)",
            self.family.subcommand,
            devices.len(),
            records.len()
        );

        for (name, record) in &devices {
            for rule in &self.family.parameters {
                let value = require(record, rule.property)?;
                store.record(rule.evaluate(name, value, self.family.descriptions.as_ref()));
            }
        }

        let (differences, singles): (Vec<&PerformanceRule>, Vec<&PerformanceRule>) = self
            .family
            .performances
            .iter()
            .partition(|rule| rule.is_difference());

        for rules in [singles, differences] {
            for (name, record) in &devices {
                for rule in &rules {
                    Self::apply(rule, name, record, &mut store)?;
                }
            }
        }

        Ok(store)
    }

    fn included<'r>(
        &self,
        records: &'r [DeviceRecord],
    ) -> Result<Vec<(&'r str, &'r DeviceRecord)>, EvaluationError> {
        let key = self.family.name_property();
        let mut devices = Vec::with_capacity(records.len());
        for record in records {
            let name = require(record, key)?;
            if self.exclusions.contains(name) {
                tracing::debug!("skipping excluded device {name}");
                continue;
            }
            devices.push((name, record));
        }
        Ok(devices)
    }

    fn apply(
        rule: &PerformanceRule,
        device: &str,
        record: &DeviceRecord,
        store: &mut ResultStore,
    ) -> Result<(), EvaluationError> {
        if !rule.applies_to(device) {
            return Ok(());
        }
        let raw = match rule.source {
            MetricSource::Single(property) => RawReading::Single(require(record, property)?),
            MetricSource::Pair(first, second) => {
                RawReading::Pair(require(record, first)?, require(record, second)?)
            }
        };
        let reading = rule
            .evaluate(device, raw)
            .map_err(|source| EvaluationError::Unit {
                device: device.to_string(),
                rule: rule.name,
                source,
            })?;
        if let Some(perf) = reading.perf {
            store.push_perf(perf);
        }
        if let Some(outcome) = reading.outcome {
            store.record(outcome);
        }
        Ok(())
    }
}

fn require<'r>(record: &'r DeviceRecord, property: &str) -> Result<&'r str, EvaluationError> {
    record
        .get(property)
        .ok_or_else(|| EvaluationError::MissingProperty {
            property: property.to_string(),
        })
}
