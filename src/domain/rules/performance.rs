use crate::domain::entities::finding::{Finding, Outcome, PerfLine, PerfMetric};
use crate::domain::value_objects::severity::Severity;
use crate::domain::value_objects::thresholds::Levels;
use crate::domain::value_objects::units::{
    format_decimal, parse_integer, parse_rate_mb, parse_size_gb, round_to, UnitError,
};

/// Parsing and comparison semantics of a numeric metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    /// `"NN%"`, warns at or below the limit.
    LifeLeft,
    /// Plain hour count, warns at or above the limit.
    PowerOnHours,
    /// `"NN C"`, warning and critical tiers.
    Temperature,
    /// (total, available) sizes; used = total - available.
    PoolUsage,
    /// (total, allocated) sizes; used = allocated.
    VolumeUsage,
    /// Plain counter, warns at or above the limit.
    ErrorCount,
    /// Plain rpm, warns at or below the limit.
    FanSpeed,
    /// (iops, transfer rate); informational only.
    Iops,
}

impl MetricKind {
    /// Kinds that produce a verdict are skipped when no levels are configured.
    #[must_use]
    pub const fn needs_levels(self) -> bool {
        !matches!(self, Self::Iops)
    }
}

/// Which device properties feed a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricSource {
    Single(&'static str),
    /// Performance difference: two properties combined into one reading.
    Pair(&'static str, &'static str),
}

/// Raw reading pulled from a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawReading<'a> {
    Single(&'a str),
    Pair(&'a str, &'a str),
}

/// A numeric or derived metric rule for one property of a device family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerformanceRule {
    /// Name used in messages and perf labels (`disk temperature`, `pool usage`)
    pub name: &'static str,
    pub source: MetricSource,
    pub kind: MetricKind,
    pub levels: Option<Levels>,
    /// When set, only devices whose name contains one of these fragments are evaluated.
    pub device_filter: Option<&'static [&'static str]>,
}

/// Result of evaluating one performance rule on one device.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PerformanceReading {
    pub outcome: Option<Outcome>,
    pub perf: Option<PerfLine>,
}

impl PerformanceRule {
    #[must_use]
    pub const fn single(name: &'static str, kind: MetricKind, levels: Option<Levels>) -> Self {
        Self {
            name,
            source: MetricSource::Single(name),
            kind,
            levels,
            device_filter: None,
        }
    }

    #[must_use]
    pub const fn difference(
        name: &'static str,
        first: &'static str,
        second: &'static str,
        kind: MetricKind,
        levels: Option<Levels>,
    ) -> Self {
        Self {
            name,
            source: MetricSource::Pair(first, second),
            kind,
            levels,
            device_filter: None,
        }
    }

    #[must_use]
    pub fn reading(mut self, property: &'static str) -> Self {
        self.source = MetricSource::Single(property);
        self
    }

    #[must_use]
    pub fn only_for(mut self, fragments: &'static [&'static str]) -> Self {
        self.device_filter = Some(fragments);
        self
    }

    #[must_use]
    pub const fn is_difference(&self) -> bool {
        matches!(self.source, MetricSource::Pair(..))
    }

    /// Whether this rule runs at all for `device`.
    #[must_use]
    pub fn applies_to(&self, device: &str) -> bool {
        if self.kind.needs_levels() && self.levels.is_none() {
            return false;
        }
        self.device_filter
            .map_or(true, |fragments| fragments.iter().any(|f| device.contains(f)))
    }

    /// Parses `raw` according to the rule's kind and compares it with its levels.
    ///
    /// Callers are expected to check [`applies_to`](Self::applies_to) first;
    /// a kind that needs levels but has none yields an empty reading.
    ///
    /// # Errors
    ///
    /// Returns `UnitError` if a value does not parse with the units the kind
    /// expects, or if a pair kind is given a single value (or vice versa).
    pub fn evaluate(
        &self,
        device: &str,
        raw: RawReading<'_>,
    ) -> Result<PerformanceReading, UnitError> {
        let levels = match (self.levels, self.kind.needs_levels()) {
            (Some(levels), _) => levels,
            // informational kinds ignore levels entirely
            (None, false) => Levels::single(0),
            (None, true) => return Ok(PerformanceReading::default()),
        };

        match (self.kind, raw) {
            (MetricKind::LifeLeft, RawReading::Single(value)) => {
                let left = parse_integer(value, "%")?;
                let severity = if left <= levels.warning {
                    Severity::Warning
                } else {
                    Severity::Ok
                };
                let perf = PerfMetric::new(format!("{device} life left"), left)
                    .uom("%")
                    .warn(levels.warning)
                    .bounds(0, 100);
                Ok(reading(
                    device,
                    severity,
                    format!("{device} life left is {left} %"),
                    Some(perf.into()),
                ))
            }
            (MetricKind::PowerOnHours, RawReading::Single(value)) => {
                let hours = parse_integer(value, "")?;
                let severity = if hours >= levels.warning {
                    Severity::Warning
                } else {
                    Severity::Ok
                };
                let perf = PerfMetric::new(format!("{device} power on hours"), hours)
                    .warn(levels.warning)
                    .min(0);
                Ok(reading(
                    device,
                    severity,
                    format!("{device} power on hours are {hours} hours"),
                    Some(perf.into()),
                ))
            }
            (MetricKind::Temperature, RawReading::Single(value)) => {
                let celsius = parse_integer(value, "C")?;
                let severity = upper_tiers(celsius, levels.warning, levels.critical);
                let perf = PerfMetric::new(format!("{device} temperature"), celsius)
                    .warn(levels.warning)
                    .crit(levels.critical)
                    .min(0);
                Ok(reading(
                    device,
                    severity,
                    format!("{device} temperature {celsius} C"),
                    Some(perf.into()),
                ))
            }
            (MetricKind::PoolUsage | MetricKind::VolumeUsage, RawReading::Pair(total, second)) => {
                let total = parse_size_gb(total)?;
                let second = parse_size_gb(second)?;
                Ok(usage(device, self.kind, total, second, levels))
            }
            (MetricKind::ErrorCount, RawReading::Single(value)) => {
                let count = parse_integer(value, "")?;
                let severity = if count >= levels.warning {
                    Severity::Warning
                } else {
                    Severity::Ok
                };
                let perf = PerfMetric::new(format!("{device} {}", self.name), count)
                    .warn(levels.warning)
                    .bounds(0, 100);
                Ok(reading(
                    device,
                    severity,
                    format!(
                        "{device} has '{}' {count} errors. (limit: {})",
                        self.name, levels.warning
                    ),
                    Some(perf.into()),
                ))
            }
            (MetricKind::FanSpeed, RawReading::Single(value)) => {
                let rpm = parse_integer(value, "")?;
                let severity = if rpm <= levels.warning {
                    Severity::Warning
                } else {
                    Severity::Ok
                };
                let perf = PerfMetric::new(format!("{device} speed"), rpm)
                    .warn(levels.warning)
                    .min(0);
                Ok(reading(
                    device,
                    severity,
                    format!("{device} speed {rpm} rpm"),
                    Some(perf.into()),
                ))
            }
            (MetricKind::Iops, RawReading::Pair(iops, transfer)) => {
                let iops = parse_integer(iops, "")?;
                let mb = round_to(parse_rate_mb(transfer)?, 2);
                let line = PerfLine(vec![
                    PerfMetric::new(format!("{device} iops"), iops).min(0),
                    PerfMetric::new(format!("{device} transfer speed"), format_decimal(mb))
                        .uom("MB")
                        .min(0),
                ]);
                Ok(PerformanceReading {
                    outcome: None,
                    perf: Some(line),
                })
            }
            (_, raw) => Err(UnitError::Malformed {
                raw: match raw {
                    RawReading::Single(v) => v.to_string(),
                    RawReading::Pair(a, b) => format!("({a}, {b})"),
                },
            }),
        }
    }
}

fn reading(
    device: &str,
    severity: Severity,
    text: String,
    perf: Option<PerfLine>,
) -> PerformanceReading {
    PerformanceReading {
        outcome: Some(Outcome::Device(Finding::new(
            device,
            severity,
            format!("{text}."),
        ))),
        perf,
    }
}

fn upper_tiers<T: PartialOrd>(value: T, warning: T, critical: T) -> Severity {
    if value >= critical {
        Severity::Critical
    } else if value >= warning {
        Severity::Warning
    } else {
        Severity::Ok
    }
}

#[allow(clippy::cast_precision_loss)]
fn usage(
    device: &str,
    kind: MetricKind,
    total: f64,
    second: f64,
    levels: Levels,
) -> PerformanceReading {
    let used = match kind {
        MetricKind::PoolUsage => round_to(total - second, 1),
        _ => second,
    };
    let warn_at = round_to(total / 100.0 * levels.warning as f64, 1);
    let crit_at = round_to(total / 100.0 * levels.critical as f64, 1);
    let percent = if total > 0.0 {
        round_to(used / total * 100.0, 1)
    } else {
        0.0
    };

    let severity = upper_tiers(used, warn_at, crit_at);
    let perf = PerfMetric::new(format!("{device} GB"), format_decimal(used))
        .warn(format_decimal(warn_at))
        .crit(format_decimal(crit_at))
        .bounds(0, format_decimal(total));
    reading(
        device,
        severity,
        format!(
            "{device} usage is {}% ({} GB/{} GB)",
            format_decimal(percent),
            format_decimal(used),
            format_decimal(total)
        ),
        Some(perf.into()),
    )
}
