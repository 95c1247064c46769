//! Filesystem-backed key-value store
//!
//! One UTF-8 JSON file per collection key under a root directory. Writes go
//! through the atomic temp→rename primitive.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;
use veosuite_core::{Result, StoragePort};

use crate::atomic::atomic_write;
use crate::errors::{io_error, write_rejected};

/// Filesystem StoragePort: `<root>/<key>.json` per key
pub struct FsKvStore {
    root: PathBuf,
}

impl FsKvStore {
    /// Create a store rooted at the given directory
    ///
    /// The directory is created lazily on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the file holding the value for `key`
    pub fn value_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl StoragePort for FsKvStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.value_path(key);
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error("read_value", e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.value_path(key);
        debug!(key, path = %path.display(), bytes = value.len(), "write value");
        atomic_write(&path, value.as_bytes()).map_err(|e| write_rejected(key, e.to_string()))
    }
}
