use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::entities::device::DeviceRecord;
use crate::domain::ports::source::{DeviceSource, SourceError, SourceQuery};

/// In-memory device source for testing purposes.
///
/// Records are keyed by object type and returned as stored; the property
/// tables of the query are not applied.
#[derive(Default)]
pub struct InMemorySource {
    records: HashMap<String, Vec<DeviceRecord>>,
    failure: Option<String>,
    fetched: Mutex<Vec<&'static str>>,
}

impl InMemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_records(mut self, basetype: &str, records: Vec<DeviceRecord>) -> Self {
        self.records.insert(basetype.to_string(), records);
        self
    }

    /// Every fetch fails with `SourceError::Unavailable(reason)`.
    #[must_use]
    pub fn failing_with(mut self, reason: &str) -> Self {
        self.failure = Some(reason.to_string());
        self
    }

    /// Listings requested so far, in call order.
    #[must_use]
    pub fn fetched(&self) -> Vec<&'static str> {
        self.fetched
            .lock()
            .map(|parts| parts.clone())
            .unwrap_or_default()
    }
}

impl DeviceSource for InMemorySource {
    fn fetch(&self, query: &SourceQuery) -> Result<Vec<DeviceRecord>, SourceError> {
        self.fetched
            .lock()
            .map_err(|_| SourceError::Unavailable("lock poisoned".into()))?
            .push(query.part);
        if let Some(reason) = &self.failure {
            return Err(SourceError::Unavailable(reason.clone()));
        }
        Ok(self
            .records
            .get(query.basetype)
            .cloned()
            .unwrap_or_default())
    }
}
