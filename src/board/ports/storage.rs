//! Storage port for board snapshots.

use std::sync::Arc;
use thiserror::Error;

/// Result type for snapshot store operations.
pub type SnapshotStoreResult<T> = Result<T, SnapshotStoreError>;

/// Key-value storage holding serialized board snapshots.
///
/// Implementations store opaque strings; encoding and decoding belong to the
/// board domain.
pub trait SnapshotStore {
    /// Reads the snapshot stored under `key`.
    ///
    /// Returns `None` when nothing has been stored under the key.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError`] when the backing storage cannot be read.
    fn read(&self, key: &str) -> SnapshotStoreResult<Option<String>>;

    /// Replaces the snapshot stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError`] when the backing storage rejects the
    /// write.
    fn write(&self, key: &str, snapshot: &str) -> SnapshotStoreResult<()>;
}

impl<S> SnapshotStore for Arc<S>
where
    S: SnapshotStore + ?Sized,
{
    fn read(&self, key: &str) -> SnapshotStoreResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, snapshot: &str) -> SnapshotStoreResult<()> {
        (**self).write(key, snapshot)
    }
}

/// Errors returned by snapshot store implementations.
#[derive(Debug, Clone, Error)]
pub enum SnapshotStoreError {
    /// The storage key cannot be used by this store.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    /// Storage-layer failure.
    #[error("storage error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl SnapshotStoreError {
    /// Wraps a storage-layer error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
