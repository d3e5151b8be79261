use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// How an ignore list is normalized before it is compared with device names.
///
/// Device names themselves are compared exactly as the array reports them,
/// so the rule must match the case convention of each identifier family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseRule {
    Upper,
    Lower,
    Exact,
}

impl CaseRule {
    #[must_use]
    pub fn apply(self, name: &str) -> String {
        match self {
            Self::Upper => name.to_uppercase(),
            Self::Lower => name.to_lowercase(),
            Self::Exact => name.to_string(),
        }
    }
}

/// Device names skipped during evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    names: HashSet<String>,
}

impl ExclusionSet {
    #[must_use]
    pub fn new<I, S>(names: I, rule: CaseRule) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names.into_iter().map(|n| rule.apply(n.as_ref())).collect(),
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, device_name: &str) -> bool {
        self.names.contains(device_name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Per-family ignore lists as given on the command line or in the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IgnoreLists {
    pub controllers: Vec<String>,
    pub disks: Vec<String>,
    pub fans: Vec<String>,
    pub frus: Vec<String>,
    pub fc_ports: Vec<String>,
    pub mgmt_ports: Vec<String>,
    pub pools: Vec<String>,
    pub psus: Vec<String>,
    pub sensors: Vec<String>,
    pub volumes: Vec<String>,
}

impl IgnoreLists {
    /// Appends every list of `other` to the matching list of `self`.
    #[must_use]
    pub fn extend(mut self, other: Self) -> Self {
        self.controllers.extend(other.controllers);
        self.disks.extend(other.disks);
        self.fans.extend(other.fans);
        self.frus.extend(other.frus);
        self.fc_ports.extend(other.fc_ports);
        self.mgmt_ports.extend(other.mgmt_ports);
        self.pools.extend(other.pools);
        self.psus.extend(other.psus);
        self.sensors.extend(other.sensors);
        self.volumes.extend(other.volumes);
        self
    }
}
