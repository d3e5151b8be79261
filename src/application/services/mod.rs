pub mod aggregator;
pub mod exit_resolver;
pub mod probe;
pub mod report;
