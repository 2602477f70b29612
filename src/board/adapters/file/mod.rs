//! Directory-backed snapshot store.
//!
//! Each key maps to `<key>.json` inside a single directory handle. Writes land
//! in a temporary sibling first and are renamed over the target, so a reader
//! never observes a half-written snapshot.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::ErrorKind;

use crate::board::ports::{SnapshotStore, SnapshotStoreError, SnapshotStoreResult};

/// Extension appended to every snapshot file.
const SNAPSHOT_EXTENSION: &str = "json";

/// Extension appended to in-flight writes.
const TEMP_EXTENSION: &str = "json.tmp";

/// Snapshot store writing one JSON file per key.
#[derive(Debug)]
pub struct FileSnapshotStore {
    root: Utf8PathBuf,
    dir: Dir,
}

impl FileSnapshotStore {
    /// Opens a store rooted at `path`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Persistence`] if the directory cannot be
    /// created or opened.
    pub fn open(path: impl AsRef<Utf8Path>) -> SnapshotStoreResult<Self> {
        let root = path.as_ref().to_path_buf();
        Dir::create_ambient_dir_all(&root, ambient_authority())
            .map_err(SnapshotStoreError::persistence)?;
        let dir = Dir::open_ambient_dir(&root, ambient_authority())
            .map_err(SnapshotStoreError::persistence)?;
        Ok(Self { root, dir })
    }

    /// Returns the directory holding the snapshot files.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Returns the file name used for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::InvalidKey`] when the key is empty or
    /// would escape the store directory.
    pub fn file_name(key: &str) -> SnapshotStoreResult<String> {
        validate_key(key)?;
        Ok(format!("{key}.{SNAPSHOT_EXTENSION}"))
    }
}

fn validate_key(key: &str) -> SnapshotStoreResult<()> {
    let is_valid = !key.is_empty()
        && key != "."
        && key != ".."
        && !key.chars().any(|c| matches!(c, '/' | '\\') || c.is_control());
    if is_valid {
        Ok(())
    } else {
        Err(SnapshotStoreError::InvalidKey(key.to_owned()))
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn read(&self, key: &str) -> SnapshotStoreResult<Option<String>> {
        let name = Self::file_name(key)?;
        match self.dir.read_to_string(&name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(SnapshotStoreError::persistence(err)),
        }
    }

    fn write(&self, key: &str, snapshot: &str) -> SnapshotStoreResult<()> {
        let name = Self::file_name(key)?;
        let temp_name = format!("{key}.{TEMP_EXTENSION}");
        self.dir
            .write(&temp_name, snapshot)
            .map_err(SnapshotStoreError::persistence)?;
        self.dir
            .rename(&temp_name, &self.dir, &name)
            .map_err(SnapshotStoreError::persistence)
    }
}
