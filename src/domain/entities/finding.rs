use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::severity::Severity;

/// One severity-tagged judgement about one property of one device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub device: String,
    pub severity: Severity,
    /// Text after the `SEVERITY - ` prefix, terminal punctuation included.
    pub message: String,
}

impl Finding {
    #[must_use]
    pub fn new(device: impl Into<String>, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            device: device.into(),
            severity,
            message: message.into(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.severity, self.message)
    }
}

/// Where a finding is recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Reported as-is in the flat findings region.
    Flat(Finding),
    /// Folded into the device's rollup.
    Device(Finding),
}

impl Outcome {
    #[must_use]
    pub fn finding(&self) -> &Finding {
        match self {
            Self::Flat(f) | Self::Device(f) => f,
        }
    }
}

/// One `label=value[uom];warn;crit;min;max` metric.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerfMetric {
    pub label: String,
    pub value: String,
    pub uom: String,
    pub warn: String,
    pub crit: String,
    pub min: String,
    pub max: String,
}

impl PerfMetric {
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl ToString) -> Self {
        Self {
            label: label.into(),
            value: value.to_string(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn uom(mut self, uom: &str) -> Self {
        self.uom = uom.to_string();
        self
    }

    #[must_use]
    pub fn warn(mut self, warn: impl ToString) -> Self {
        self.warn = warn.to_string();
        self
    }

    #[must_use]
    pub fn crit(mut self, crit: impl ToString) -> Self {
        self.crit = crit.to_string();
        self
    }

    #[must_use]
    pub fn bounds(mut self, min: impl ToString, max: impl ToString) -> Self {
        self.min = min.to_string();
        self.max = max.to_string();
        self
    }

    #[must_use]
    pub fn min(mut self, min: impl ToString) -> Self {
        self.min = min.to_string();
        self
    }
}

impl fmt::Display for PerfMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={}{};{};{};{};{}",
            self.label, self.value, self.uom, self.warn, self.crit, self.min, self.max
        )
    }
}

/// A perf-data line: `|` followed by space-separated metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerfLine(pub Vec<PerfMetric>);

impl From<PerfMetric> for PerfLine {
    fn from(metric: PerfMetric) -> Self {
        Self(vec![metric])
    }
}

impl fmt::Display for PerfLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("|")?;
        for (i, metric) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{metric}")?;
        }
        Ok(())
    }
}
