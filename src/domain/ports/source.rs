use thiserror::Error;

use crate::domain::entities::device::DeviceRecord;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("device data unavailable: {0}")]
    Unavailable(String),
    #[error("malformed device data: {0}")]
    Malformed(String),
    #[error("{property} error. Please check output!")]
    MissingProperty { property: String },
    #[error("{part}: {left} records do not line up with {right} records from {other}")]
    Misaligned {
        part: String,
        other: String,
        left: usize,
        right: usize,
    },
}

/// Maps a report property name to the property the array exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertySpec {
    pub name: &'static str,
    pub api_name: &'static str,
}

/// Shorthand for declaring property tables.
#[must_use]
pub const fn prop(name: &'static str, api_name: &'static str) -> PropertySpec {
    PropertySpec { name, api_name }
}

/// One request to the array: which listing to read and which properties to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceQuery {
    /// Listing requested from the management API (`disks`, `disk-statistics`, ...)
    pub part: &'static str,
    /// Object type selected inside the listing (`drives`, `fan`, ...)
    pub basetype: &'static str,
    /// Properties in report order; the first one names the device.
    pub properties: &'static [PropertySpec],
}

impl SourceQuery {
    #[must_use]
    pub const fn new(
        part: &'static str,
        basetype: &'static str,
        properties: &'static [PropertySpec],
    ) -> Self {
        Self {
            part,
            basetype,
            properties,
        }
    }

    /// Query whose object type has the same name as the listing.
    #[must_use]
    pub const fn listing(part: &'static str, properties: &'static [PropertySpec]) -> Self {
        Self::new(part, part, properties)
    }
}

pub trait DeviceSource {
    /// Read every object of `query.basetype` and extract the requested properties.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if the data cannot be read or parsed, or if an
    /// object lacks one of the requested properties.
    fn fetch(&self, query: &SourceQuery) -> Result<Vec<DeviceRecord>, SourceError>;
}
