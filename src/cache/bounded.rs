//! Bounded Store Module
//!
//! In-memory store that enforces a capacity by evicting the least recently
//! used key.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::{AccessOrder, Store, StoredValue};
use crate::error::Result;

/// Upper bound on slots reserved up front; the map grows past it on demand.
const PRESIZE_LIMIT: usize = 1024;

// == Bounded Store ==
/// HashMap storage with LRU eviction once `capacity` keys are held.
///
/// Eviction knows nothing about deadlines: stale records count against the
/// capacity until they are read or pushed out.
#[derive(Debug)]
pub struct BoundedStore {
    entries: HashMap<String, StoredValue>,
    order: AccessOrder,
    /// None = unbounded
    capacity: Option<usize>,
    evictions: u64,
}

impl BoundedStore {
    /// Creates a store holding at most `capacity` keys.
    pub fn new(capacity: usize) -> Self {
        Self::with_capacity(Some(capacity))
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Number of keys pushed out to respect the capacity.
    pub fn evictions(&self) -> u64 {
        self.evictions
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn make_room(&mut self) {
        let Some(capacity) = self.capacity else {
            return;
        };

        while self.entries.len() >= capacity {
            let Some(oldest) = self.order.pop_oldest() else {
                break;
            };
            self.entries.remove(&oldest);
            self.evictions += 1;
            debug!(key = %oldest, capacity, "evicted least recently used key");
        }
    }
}

impl Store for BoundedStore {
    fn with_capacity(capacity: Option<usize>) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity.unwrap_or(0).min(PRESIZE_LIMIT)),
            order: AccessOrder::new(),
            capacity,
            evictions: 0,
        }
    }

    fn raw_get(&mut self, key: &str) -> Result<Option<StoredValue>> {
        let found = self.entries.get(key).cloned();
        if found.is_some() {
            self.order.touch(key);
        }
        Ok(found)
    }

    fn raw_put(&mut self, key: String, value: StoredValue) -> Result<()> {
        if self.capacity == Some(0) {
            // Nothing fits; the write is evicted on arrival
            self.evictions += 1;
            debug!(key = %key, "dropped write to zero-capacity store");
            return Ok(());
        }

        if !self.entries.contains_key(&key) {
            self.make_room();
        }

        self.order.touch(&key);
        self.entries.insert(key, value);
        Ok(())
    }

    fn raw_remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        self.order.remove(key);
        Ok(())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::codec::encode;

    fn put(store: &mut BoundedStore, key: &str) {
        store
            .raw_put(key.to_string(), encode(format!("{}-value", key), None))
            .unwrap();
    }

    #[test]
    fn test_evicts_oldest_when_full() {
        let mut store = BoundedStore::new(3);

        put(&mut store, "key1");
        put(&mut store, "key2");
        put(&mut store, "key3");
        put(&mut store, "key4");

        assert_eq!(store.len(), 3);
        assert_eq!(store.evictions(), 1);
        assert!(!store.contains_key("key1"));
        assert!(store.contains_key("key4"));
    }

    #[test]
    fn test_get_refreshes_recency() {
        let mut store = BoundedStore::new(3);

        put(&mut store, "key1");
        put(&mut store, "key2");
        put(&mut store, "key3");
        store.raw_get("key1").unwrap();
        put(&mut store, "key4");

        assert!(store.contains_key("key1"));
        assert!(!store.contains_key("key2"));
    }

    #[test]
    fn test_overwrite_does_not_evict() {
        let mut store = BoundedStore::new(2);

        put(&mut store, "key1");
        put(&mut store, "key2");
        put(&mut store, "key1");

        assert_eq!(store.len(), 2);
        assert_eq!(store.evictions(), 0);
    }

    #[test]
    fn test_remove_frees_a_slot() {
        let mut store = BoundedStore::new(2);

        put(&mut store, "key1");
        put(&mut store, "key2");
        store.raw_remove("key1").unwrap();
        put(&mut store, "key3");

        assert_eq!(store.evictions(), 0);
        assert!(store.contains_key("key2"));
        assert!(store.contains_key("key3"));
    }

    #[test]
    fn test_unbounded_without_hint() {
        let mut store = BoundedStore::with_capacity(None);

        for i in 0..500 {
            put(&mut store, &format!("key{}", i));
        }

        assert_eq!(store.len(), 500);
        assert_eq!(store.capacity(), None);
        assert_eq!(store.evictions(), 0);
    }

    #[test]
    fn test_zero_capacity_holds_nothing() {
        let mut store = BoundedStore::new(0);

        put(&mut store, "key1");
        put(&mut store, "key2");

        assert_eq!(store.len(), 0);
        assert_eq!(store.evictions(), 2);
        assert_eq!(store.raw_get("key2").unwrap(), None);
    }

    #[test]
    fn test_huge_capacity_hint() {
        let mut store = BoundedStore::with_capacity(Some(usize::MAX));

        put(&mut store, "key1");

        assert_eq!(store.capacity(), Some(usize::MAX));
        assert!(store.raw_get("key1").unwrap().is_some());
    }
}
