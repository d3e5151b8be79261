use colored::Colorize;

use crate::application::services::report::Report;
use crate::domain::entities::finding::Finding;
use crate::domain::value_objects::severity::Severity;

/// Strips ANSI/OSC escape sequences from a string to prevent terminal injection.
fn sanitize_terminal(input: &str) -> String {
    input.chars().filter(|c| *c != '\x1b').collect()
}

fn severity_label(severity: Severity) -> String {
    format!("{}", severity.to_string().color(severity.color()).bold())
}

/// `SEVERITY - message` with a colored severity.
#[must_use]
pub fn paint_finding(finding: &Finding) -> String {
    format!(
        "{} - {}",
        severity_label(finding.severity),
        sanitize_terminal(&finding.message)
    )
}

/// Full plugin output for a finished run.
#[must_use]
pub fn format_report(report: &Report, color: bool) -> String {
    if !color {
        return report.to_string();
    }
    let mut out = String::new();
    // writing into a String cannot fail
    report.render(&mut out, paint_finding).ok();
    out
}

/// Single status line for a run that stopped early.
#[must_use]
pub fn format_abort(severity: Severity, message: &str, color: bool) -> String {
    if color {
        format!("{} - {}", severity_label(severity), sanitize_terminal(message))
    } else {
        format!("{severity} - {message}")
    }
}
