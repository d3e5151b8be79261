pub mod catalog;
pub mod parameter;
pub mod performance;

pub use catalog::{family, DeviceFamily};
pub use parameter::{ParameterRule, StatusDescriptions, StatusMatch};
pub use performance::{MetricKind, MetricSource, PerformanceReading, PerformanceRule, RawReading};
