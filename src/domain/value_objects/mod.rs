pub mod exclusion;
pub mod severity;
pub mod subcommand;
pub mod thresholds;
pub mod units;

pub use exclusion::{CaseRule, ExclusionSet, IgnoreLists};
pub use severity::Severity;
pub use subcommand::Subcommand;
pub use thresholds::{Levels, ThresholdSet};
