use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Properties of one physical or logical device, in the order they were
/// requested from the array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// Object type the record was read from (`drives`, `fan`, `port`, ...)
    pub part: String,
    pub properties: IndexMap<String, String>,
}

impl DeviceRecord {
    #[must_use]
    pub fn new(part: impl Into<String>) -> Self {
        Self {
            part: part.into(),
            properties: IndexMap::new(),
        }
    }

    /// Builder-style insert, mostly for fixtures.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(name.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Adds every property of `other`. Values of `other` replace values
    /// already held under the same name, which keep their position.
    pub fn merge(&mut self, other: Self) {
        for (name, value) in other.properties {
            self.properties.insert(name, value);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
