use serde::{Deserialize, Serialize};

/// Monitoring-plugin state of a finding, a device, or a whole run.
///
/// Variants are declared in selection order: when several severities compete
/// for one verdict the greatest wins. `Unknown` deliberately sits *below*
/// `Warning`, so a run with both a warning and an unknown finding exits as a
/// warning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Ok,
    Unknown,
    Warning,
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::Unknown => write!(f, "UNKNOWN"),
            Self::Warning => write!(f, "WARNING"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

impl Severity {
    /// Report sections are printed in this order.
    pub const REPORT_ORDER: [Self; 4] = [Self::Critical, Self::Warning, Self::Unknown, Self::Ok];

    /// Process exit code understood by the monitoring scheduler.
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::Warning => 1,
            Self::Critical => 2,
            Self::Unknown => 3,
        }
    }

    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Ok => "green",
            Self::Unknown => "magenta",
            Self::Warning => "yellow",
            Self::Critical => "red",
        }
    }
}
