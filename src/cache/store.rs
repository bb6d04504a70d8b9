//! Store Module
//!
//! The raw storage contract the TTL layer sits on, plus an unbounded
//! in-memory implementation.

use std::collections::HashMap;

use crate::cache::StoredValue;
use crate::error::Result;

// == Store Trait ==
/// Plain key-value storage with no notion of expiry.
///
/// Implementations hold [`StoredValue`]s without interpreting them. Any
/// capacity policy is theirs; the TTL layer only forwards the hint.
pub trait Store {
    /// Builds a store, optionally bounded to `capacity` entries.
    fn with_capacity(capacity: Option<usize>) -> Self
    where
        Self: Sized;

    /// Returns the stored representation for `key`.
    ///
    /// Takes `&mut self` so bounded implementations can record access recency.
    fn raw_get(&mut self, key: &str) -> Result<Option<StoredValue>>;

    /// Stores `value` under `key`, replacing any previous record.
    fn raw_put(&mut self, key: String, value: StoredValue) -> Result<()>;

    /// Removes `key`. Removing a missing key is a no-op.
    fn raw_remove(&mut self, key: &str) -> Result<()>;
}

// == Memory Store ==
/// Unbounded HashMap-backed store. The capacity hint is ignored.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, StoredValue>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks at a record without going through the trait.
    pub fn peek(&self, key: &str) -> Option<&StoredValue> {
        self.entries.get(key)
    }

    /// Returns true if a record (expired or not) is held for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of records held, including stale ones nobody has read yet.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Store for MemoryStore {
    fn with_capacity(_capacity: Option<usize>) -> Self {
        Self::new()
    }

    fn raw_get(&mut self, key: &str) -> Result<Option<StoredValue>> {
        Ok(self.entries.get(key).cloned())
    }

    fn raw_put(&mut self, key: String, value: StoredValue) -> Result<()> {
        self.entries.insert(key, value);
        Ok(())
    }

    fn raw_remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}
