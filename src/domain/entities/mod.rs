pub mod device;
pub mod finding;
pub mod results;

pub use device::DeviceRecord;
pub use finding::{Finding, Outcome, PerfLine, PerfMetric};
pub use results::ResultStore;
