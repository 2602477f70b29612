//! Storage adapters for board snapshots.
//!
//! - [`memory::InMemorySnapshotStore`]: volatile map, used by tests and by
//!   sessions without durable storage
//! - [`file::FileSnapshotStore`]: one JSON file per key inside a directory

pub mod file;
pub mod memory;
