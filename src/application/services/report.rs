use std::fmt;

use indexmap::IndexMap;

use super::exit_resolver;
use crate::domain::entities::device::DeviceRecord;
use crate::domain::entities::finding::{Finding, PerfLine};
use crate::domain::entities::results::ResultStore;
use crate::domain::value_objects::severity::Severity;

/// Column the raw dump aligns property values to.
const DUMP_TAB: usize = 40;

/// Region separator: a blank line and an empty line.
const SEPARATOR: &str = "\n\n";

/// Everything printed for one run, in print order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    perf_lines: Vec<PerfLine>,
    flat: Vec<Finding>,
    rollup: Vec<Finding>,
    records: Vec<DeviceRecord>,
}

impl Report {
    /// Groups the store's findings and keeps `records` for the raw dump.
    ///
    /// `records` should be every fetched record, excluded devices included.
    #[must_use]
    pub fn build(store: &ResultStore, records: Vec<DeviceRecord>) -> Self {
        let flat = Severity::REPORT_ORDER
            .iter()
            .flat_map(|severity| store.flat().iter().filter(move |f| f.severity == *severity))
            .cloned()
            .collect();
        Self {
            perf_lines: store.perf_lines().to_vec(),
            flat,
            rollup: rollup(store.by_device()),
            records,
        }
    }

    #[must_use]
    pub fn perf_lines(&self) -> &[PerfLine] {
        &self.perf_lines
    }

    /// Flat findings grouped CRITICAL, WARNING, UNKNOWN, OK.
    #[must_use]
    pub fn flat(&self) -> &[Finding] {
        &self.flat
    }

    /// One or more lines per device, carrying its worst findings.
    #[must_use]
    pub fn rollup(&self) -> &[Finding] {
        &self.rollup
    }

    #[must_use]
    pub fn records(&self) -> &[DeviceRecord] {
        &self.records
    }

    /// Rollup lines that are printed: CRITICAL lines together with WARNING
    /// lines when any device is critical, otherwise only the worst group.
    #[must_use]
    pub fn visible_rollup(&self) -> Vec<&Finding> {
        let of = |severity: Severity| self.rollup.iter().filter(move |f| f.severity == severity);
        let has = |severity: Severity| self.rollup.iter().any(|f| f.severity == severity);

        if has(Severity::Critical) {
            of(Severity::Critical).chain(of(Severity::Warning)).collect()
        } else {
            [Severity::Warning, Severity::Unknown, Severity::Ok]
                .into_iter()
                .find(|severity| has(*severity))
                .map(|severity| of(severity).collect())
                .unwrap_or_default()
        }
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        exit_resolver::resolve(&self.flat, &self.rollup)
    }

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        exit_resolver::exit_code(&self.flat, &self.rollup)
    }

    /// Writes the report, formatting each finding line with `paint`.
    ///
    /// # Errors
    ///
    /// Propagates errors from the underlying writer.
    pub fn render<W, P>(&self, out: &mut W, paint: P) -> fmt::Result
    where
        W: fmt::Write,
        P: Fn(&Finding) -> String,
    {
        for line in &self.perf_lines {
            writeln!(out, "{line}")?;
        }
        for finding in &self.flat {
            writeln!(out, "{}", paint(finding))?;
        }
        out.write_str(SEPARATOR)?;

        for finding in self.visible_rollup() {
            writeln!(out, "{}", paint(finding))?;
        }
        out.write_str(SEPARATOR)?;

        for record in &self.records {
            for (name, value) in record.iter() {
                writeln!(out, "{}", dump_line(name, value))?;
            }
            out.write_str(SEPARATOR)?;
        }
        Ok(())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, ToString::to_string)
    }
}

/// Reduces each device's findings to its worst group, or a synthesized OK line.
#[must_use]
pub fn rollup(by_device: &IndexMap<String, Vec<Finding>>) -> Vec<Finding> {
    let mut lines = Vec::new();
    for (device, findings) in by_device {
        if findings.is_empty() {
            continue;
        }
        let worst = [Severity::Critical, Severity::Warning, Severity::Unknown]
            .into_iter()
            .find(|severity| findings.iter().any(|f| f.severity == *severity));
        match worst {
            Some(severity) => lines.extend(
                findings
                    .iter()
                    .filter(|f| f.severity == severity)
                    .cloned(),
            ),
            None => lines.push(Finding::new(
                device.as_str(),
                Severity::Ok,
                format!("{device} is OK."),
            )),
        }
    }
    lines
}

/// `name` padded to the next multiple of the dump column, then `value`.
fn dump_line(name: &str, value: &str) -> String {
    let width = (name.chars().count() / DUMP_TAB + 1) * DUMP_TAB;
    format!("{name:<width$}{value}")
}
