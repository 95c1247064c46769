//! Persistence port
//!
//! The collection store talks to its persistence medium through [`StoragePort`],
//! a string key-value contract. Production uses the filesystem adapter from
//! `veosuite-store`; tests use [`MemoryStorage`].

use std::cell::RefCell;
use std::collections::HashMap;

use crate::errors::Result;

/// Durable string key-value store addressed by a stable key per collection
///
/// Values are UTF-8 text containing a JSON-serialized ordered sequence of
/// records. Implementations are synchronous local calls; all access happens on
/// one thread.
pub trait StoragePort {
    /// Read the value stored under `key`, or `None` if absent
    ///
    /// # Errors
    ///
    /// Returns an error if the medium cannot be read at all (callers treat this
    /// the same as an absent value and fall back to their default).
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the write is rejected (e.g. quota exceeded). The
    /// caller's in-memory state is already applied and is not rolled back.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory StoragePort fake
///
/// Backs collections with a plain HashMap. Not thread-safe (RefCell, no
/// locking) - designed for single-threaded use, mirroring the production
/// adapter's synchronous contract.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create a new empty MemoryStorage
    pub fn new() -> Self {
        Self::default()
    }

    /// Preload a raw value under `key`
    ///
    /// Useful for seeding tests with previously-persisted (or corrupt) text.
    pub fn seed(&self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.borrow_mut().insert(key.into(), value.into());
    }

    /// Read back the raw stored text under `key`, if any
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl StoragePort for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
