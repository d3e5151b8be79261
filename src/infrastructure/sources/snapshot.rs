use std::collections::HashMap;
use std::path::Path;

use serde_json::{Map, Value};

use crate::domain::entities::device::DeviceRecord;
use crate::domain::ports::source::{DeviceSource, SourceError, SourceQuery};

type RawObject = Map<String, Value>;

/// Device data captured from the array as JSON:
/// `{ "<basetype>": [ { "<api property>": "<value>", ... }, ... ] }`.
#[derive(Debug, Clone, Default)]
pub struct SnapshotSource {
    objects: HashMap<String, Vec<RawObject>>,
}

impl SnapshotSource {
    /// Reads a capture file.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Unavailable` if the file cannot be read and
    /// `SourceError::Malformed` if it is not a capture document.
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SourceError::Unavailable(format!("{}: {e}", path.display())))?;
        tracing::debug!("loaded capture {}", path.display());
        Self::from_json(&content)
    }

    /// Parses a capture document.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Malformed` if the JSON does not map object types
    /// to lists of objects.
    pub fn from_json(content: &str) -> Result<Self, SourceError> {
        let objects: HashMap<String, Vec<RawObject>> = serde_json::from_str(content)
            .map_err(|e| SourceError::Malformed(e.to_string()))?;
        Ok(Self { objects })
    }
}

impl DeviceSource for SnapshotSource {
    fn fetch(&self, query: &SourceQuery) -> Result<Vec<DeviceRecord>, SourceError> {
        let Some(objects) = self.objects.get(query.basetype) else {
            tracing::debug!("no {} objects in capture", query.basetype);
            return Ok(Vec::new());
        };

        objects
            .iter()
            .map(|object| {
                let mut record = DeviceRecord::new(query.basetype);
                for spec in query.properties {
                    let value = object.get(spec.api_name).ok_or_else(|| {
                        SourceError::MissingProperty {
                            property: spec.name.to_string(),
                        }
                    })?;
                    record.insert(spec.name, scalar(value, spec.name)?);
                }
                Ok(record)
            })
            .collect()
    }
}

/// Text form of a property value; `null` reads as empty.
fn scalar(value: &Value, property: &str) -> Result<String, SourceError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::new()),
        Value::Array(_) | Value::Object(_) => Err(SourceError::Malformed(format!(
            "{property} is not a scalar value"
        ))),
    }
}
