//! In-memory snapshot store for tests and volatile sessions.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::ports::{SnapshotStore, SnapshotStoreError, SnapshotStoreResult};

/// Thread-safe in-memory snapshot store.
///
/// Clones share the same underlying map, so a test can keep a handle to the
/// store it passed to a board manager.
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemorySnapshotStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with a snapshot under `key`.
    #[must_use]
    pub fn with_entry(key: impl Into<String>, snapshot: impl Into<String>) -> Self {
        let entries = HashMap::from([(key.into(), snapshot.into())]);
        Self {
            entries: Arc::new(RwLock::new(entries)),
        }
    }

    /// Removes the snapshot stored under `key`, returning it if present.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Persistence`] if the lock is poisoned.
    pub fn remove(&self, key: &str) -> SnapshotStoreResult<Option<String>> {
        let mut entries = self.entries.write().map_err(|err| {
            SnapshotStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(entries.remove(key))
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn read(&self, key: &str) -> SnapshotStoreResult<Option<String>> {
        let entries = self.entries.read().map_err(|err| {
            SnapshotStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, snapshot: &str) -> SnapshotStoreResult<()> {
        let mut entries = self.entries.write().map_err(|err| {
            SnapshotStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        entries.insert(key.to_owned(), snapshot.to_owned());
        Ok(())
    }
}
