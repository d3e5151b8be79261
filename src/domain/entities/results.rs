use indexmap::IndexMap;

use super::finding::{Finding, Outcome, PerfLine};

/// Append-only result store for one evaluation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultStore {
    flat: Vec<Finding>,
    by_device: IndexMap<String, Vec<Finding>>,
    perf_lines: Vec<PerfLine>,
}

impl ResultStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Flat(finding) => self.flat.push(finding),
            Outcome::Device(finding) => self
                .by_device
                .entry(finding.device.clone())
                .or_default()
                .push(finding),
        }
    }

    pub fn push_perf(&mut self, line: PerfLine) {
        self.perf_lines.push(line);
    }

    /// Flat findings in evaluation order.
    #[must_use]
    pub fn flat(&self) -> &[Finding] {
        &self.flat
    }

    /// Device findings grouped by device, devices in first-seen order.
    #[must_use]
    pub const fn by_device(&self) -> &IndexMap<String, Vec<Finding>> {
        &self.by_device
    }

    #[must_use]
    pub fn perf_lines(&self) -> &[PerfLine] {
        &self.perf_lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flat.is_empty() && self.by_device.is_empty() && self.perf_lines.is_empty()
    }
}
