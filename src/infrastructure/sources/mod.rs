pub mod in_memory;
pub mod snapshot;

pub use in_memory::InMemorySource;
pub use snapshot::SnapshotSource;
