use std::collections::{BTreeSet, HashMap};

use crate::domain::entities::finding::{Finding, Outcome};
use crate::domain::value_objects::severity::Severity;

/// One side of a status rule: a single expected value or a set of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMatch {
    Scalar(String),
    Set(BTreeSet<String>),
}

impl StatusMatch {
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        match self {
            Self::Scalar(expected) => expected == value,
            Self::Set(values) => values.contains(value),
        }
    }
}

impl From<&str> for StatusMatch {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl<const N: usize> From<[&str; N]> for StatusMatch {
    fn from(values: [&str; N]) -> Self {
        Self::Set(values.into_iter().map(str::to_string).collect())
    }
}

/// Human descriptions of raw status codes, appended to parameter messages.
pub type StatusDescriptions = HashMap<&'static str, &'static str>;

/// Classifies an enum-valued property.
///
/// Membership is checked critical first, then warning, then ok; anything
/// else is unknown. The sets may overlap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterRule {
    pub property: &'static str,
    pub ok: StatusMatch,
    pub warning: StatusMatch,
    pub critical: StatusMatch,
}

impl ParameterRule {
    #[must_use]
    pub fn new(
        property: &'static str,
        ok: impl Into<StatusMatch>,
        warning: impl Into<StatusMatch>,
        critical: impl Into<StatusMatch>,
    ) -> Self {
        Self {
            property,
            ok: ok.into(),
            warning: warning.into(),
            critical: critical.into(),
        }
    }

    #[must_use]
    pub fn classify(&self, value: &str) -> Severity {
        if self.critical.contains(value) {
            Severity::Critical
        } else if self.warning.contains(value) {
            Severity::Warning
        } else if self.ok.contains(value) {
            Severity::Ok
        } else {
            Severity::Unknown
        }
    }

    /// Judges `value` for `device` and decides where the finding is kept.
    ///
    /// Plain OK findings roll up per device; everything else, including OK
    /// findings that carry a description, is reported flat.
    #[must_use]
    pub fn evaluate(
        &self,
        device: &str,
        value: &str,
        descriptions: Option<&StatusDescriptions>,
    ) -> Outcome {
        let severity = self.classify(value);
        let text = format!("{device} {} is {value}", self.property);
        let description = descriptions.and_then(|d| d.get(value));

        let message = match (severity, description) {
            (Severity::Critical | Severity::Warning, Some(desc)) => format!("{text}. {desc}!"),
            (Severity::Critical | Severity::Warning, None) => format!("{text}!"),
            (Severity::Ok, Some(desc)) => format!("{text}. {desc}"),
            (Severity::Ok | Severity::Unknown, _) => format!("{text}."),
        };
        let finding = Finding::new(device, severity, message);

        if severity == Severity::Ok && description.is_none() {
            Outcome::Device(finding)
        } else {
            Outcome::Flat(finding)
        }
    }
}
