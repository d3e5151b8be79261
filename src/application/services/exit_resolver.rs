use crate::domain::entities::finding::Finding;
use crate::domain::value_objects::severity::Severity;

/// Worst severity across the flat findings and the per-device rollup lines.
///
/// Selection follows `Severity`'s ordering, so an UNKNOWN finding only
/// decides the verdict when nothing is WARNING or CRITICAL.
#[must_use]
pub fn resolve(flat: &[Finding], rollup: &[Finding]) -> Severity {
    flat.iter()
        .chain(rollup)
        .map(|finding| finding.severity)
        .max()
        .unwrap_or(Severity::Ok)
}

/// Process exit code for the combined verdict.
#[must_use]
pub fn exit_code(flat: &[Finding], rollup: &[Finding]) -> i32 {
    resolve(flat, rollup).exit_code()
}
