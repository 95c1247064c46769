//! Persisted collection store
//!
//! One [`Collection`] manages one ordered, most-recent-first sequence of
//! records under one persistence key. Every mutation re-persists the entire
//! sequence through the injected [`StoragePort`] - O(n) per mutation, which is
//! fine at the expected scale (personal use, hundreds of records) and an
//! explicit non-goal beyond it.
//!
//! Consistency model: in-memory state is authoritative. A failed persist leaves
//! the mutation applied and surfaces a recoverable error; the next successful
//! write reconciles the medium.

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::errors::{Result, SuiteError};
use crate::model::Record;
use crate::port::StoragePort;

/// Handle returned by [`Collection::subscribe`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriberId(usize);

/// Ordered sequence of records of one kind, persisted under one key
pub struct Collection<R> {
    key: String,
    port: Rc<dyn StoragePort>,
    records: Vec<R>,
    subscribers: Vec<(SubscriberId, Box<dyn Fn(&[R])>)>,
    next_subscriber: usize,
}

impl<R> std::fmt::Debug for Collection<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collection")
            .field("key", &self.key)
            .field("records", &self.records.len())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl<R> Collection<R>
where
    R: Record + Serialize + DeserializeOwned,
{
    /// Load the collection persisted under `key`, falling back to `default`
    ///
    /// Absent, unreadable, or unparseable stored values all resolve to
    /// `default` with a warning. This never fails: a corrupt medium degrades to
    /// a fresh collection, it does not abort startup.
    pub fn load(port: Rc<dyn StoragePort>, key: impl Into<String>, default: Vec<R>) -> Self {
        let key = key.into();
        let records = match port.get(&key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(records) => records,
                Err(e) => {
                    warn!(key = %key, error = %e, "stored value unparseable, using default");
                    default
                }
            },
            Ok(None) => default,
            Err(e) => {
                warn!(key = %key, error = %e, "stored value unreadable, using default");
                default
            }
        };
        Self {
            key,
            port,
            records,
            subscribers: Vec::new(),
            next_subscriber: 0,
        }
    }

    /// The persistence key this collection lives under
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current ordered snapshot, most recent first
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Get a record by ID
    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Number of records in the collection
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the collection is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Prepend a record (most-recent-first) and re-persist
    ///
    /// # Errors
    ///
    /// * `Validation` - a required field is empty; the collection is untouched
    /// * `DuplicateId` - the id already exists; the collection is untouched
    /// * `Persistence`/`Serialization` - the write failed; the in-memory
    ///   addition stands and subscribers were already notified
    pub fn add(&mut self, record: R) -> Result<()> {
        record.validate()?;
        if self.get(record.id()).is_some() {
            return Err(SuiteError::DuplicateId {
                id: record.id().to_string(),
            });
        }
        debug!(key = %self.key, id = record.id(), "add record");
        self.records.insert(0, record);
        let outcome = self.persist();
        self.notify();
        outcome
    }

    /// Prepend a batch of records, preserving the batch's internal order
    ///
    /// The whole batch is validated and checked for duplicate ids (within the
    /// batch and against the collection) before anything is mutated.
    ///
    /// # Errors
    ///
    /// Same as [`Collection::add`]; any precondition failure rejects the whole
    /// batch with the collection untouched.
    pub fn add_many(&mut self, records: Vec<R>) -> Result<()> {
        for (i, record) in records.iter().enumerate() {
            record.validate()?;
            if self.get(record.id()).is_some()
                || records[..i].iter().any(|r| r.id() == record.id())
            {
                return Err(SuiteError::DuplicateId {
                    id: record.id().to_string(),
                });
            }
        }
        if records.is_empty() {
            return Ok(());
        }
        debug!(key = %self.key, count = records.len(), "add record batch");
        self.records.splice(0..0, records);
        let outcome = self.persist();
        self.notify();
        outcome
    }

    /// Shallow-merge `patch` into the record with the given id and re-persist
    ///
    /// A no-op returning Ok if `id` is not in the collection.
    ///
    /// # Errors
    ///
    /// `Persistence`/`Serialization` if the write failed; the in-memory merge
    /// stands.
    pub fn update(&mut self, id: &str, patch: R::Patch) -> Result<()> {
        let Some(record) = self.records.iter_mut().find(|r| r.id() == id) else {
            debug!(key = %self.key, id, "update targeted unknown id, no-op");
            return Ok(());
        };
        record.apply_patch(patch);
        debug!(key = %self.key, id, "update record");
        let outcome = self.persist();
        self.notify();
        outcome
    }

    /// Remove the record with the given id and re-persist
    ///
    /// A no-op returning Ok if `id` is not in the collection; deleting the same
    /// id twice is therefore idempotent.
    ///
    /// # Errors
    ///
    /// `Persistence`/`Serialization` if the write failed; the in-memory removal
    /// stands.
    pub fn delete(&mut self, id: &str) -> Result<()> {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);
        if self.records.len() == before {
            debug!(key = %self.key, id, "delete targeted unknown id, no-op");
            return Ok(());
        }
        debug!(key = %self.key, id, "delete record");
        let outcome = self.persist();
        self.notify();
        outcome
    }

    /// Register a subscriber called with the new snapshot after every mutation
    ///
    /// Notification follows the in-memory change, not the persist outcome:
    /// memory is authoritative, so a snapshot is delivered even when the write
    /// to the medium failed.
    pub fn subscribe(&mut self, f: impl Fn(&[R]) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_subscriber);
        self.next_subscriber += 1;
        self.subscribers.push((id, Box::new(f)));
        id
    }

    /// Remove a previously registered subscriber; unknown ids are a no-op
    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.subscribers.retain(|(sid, _)| *sid != id);
    }

    /// Serialize the full sequence and write it back under this key
    fn persist(&self) -> Result<()> {
        let raw = serde_json::to_string(&self.records)?;
        if let Err(e) = self.port.set(&self.key, &raw) {
            warn!(key = %self.key, error = %e, "persist failed, in-memory state kept");
            return Err(e);
        }
        Ok(())
    }

    fn notify(&self) {
        for (_, f) in &self.subscribers {
            f(&self.records);
        }
    }
}
