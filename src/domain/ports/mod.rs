pub mod source;

pub use source::{DeviceSource, PropertySpec, SourceError, SourceQuery};
