//! TTL Cache Module
//!
//! Lazy time-to-live expiry on top of any [`Store`].

use tracing::{debug, trace};

use crate::cache::codec::{self, Decoded};
use crate::cache::{CacheStats, Store};
use crate::config::Config;
use crate::error::Result;

// == TTL Cache ==
/// Key-value cache that expires entries on read.
///
/// The cache owns its store for its whole lifetime. Nothing runs in the
/// background: an expired record stays in the store until a read finds it
/// or a write replaces it.
#[derive(Debug)]
pub struct TtlCache<S: Store> {
    /// Lifetime in seconds for writes that do not name one
    default_ttl: Option<u32>,
    store: S,
    stats: CacheStats,
}

impl<S: Store> TtlCache<S> {
    // == Constructor ==
    /// Creates a cache, building its store from the capacity hint.
    ///
    /// # Arguments
    /// * `default_ttl` - Lifetime in seconds for writes without one, None = never expire
    /// * `max_capacity` - Forwarded verbatim to [`Store::with_capacity`]
    pub fn new(default_ttl: Option<u32>, max_capacity: Option<usize>) -> Self {
        Self {
            default_ttl,
            store: S::with_capacity(max_capacity),
            stats: CacheStats::new(),
        }
    }

    /// Creates a cache from a loaded [`Config`].
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.default_ttl, config.max_capacity)
    }

    // == Get ==
    /// Returns the live value for `key`, if any.
    ///
    /// An expired record is removed from the store before `None` is
    /// returned. When the store is shared with other writers outside this
    /// cache, a fresh value written between the read and that removal is
    /// removed too.
    pub fn get(&mut self, key: &str) -> Result<Option<String>> {
        let stored = self.store.raw_get(key)?;

        match codec::decode(stored) {
            Decoded::Plain(value) | Decoded::Live(value) => {
                self.stats.record_hit();
                Ok(Some(value))
            }
            Decoded::Expired => {
                debug!(key, "evicting expired entry");
                self.store.raw_remove(key)?;
                self.stats.record_expiration();
                Ok(None)
            }
            Decoded::Absent => {
                self.stats.record_miss();
                Ok(None)
            }
        }
    }

    // == Put ==
    /// Stores `value` under the default lifetime, or without expiry when no
    /// default is configured. Replaces any previous entry.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<String>) -> Result<()> {
        self.write(key.into(), value.into(), self.default_ttl)
    }

    /// Stores `value` for `ttl_seconds`, ignoring the default lifetime.
    /// Replaces any previous entry and its deadline.
    pub fn put_with_ttl(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
        ttl_seconds: u32,
    ) -> Result<()> {
        self.write(key.into(), value.into(), Some(ttl_seconds))
    }

    fn write(&mut self, key: String, value: String, ttl_seconds: Option<u32>) -> Result<()> {
        trace!(key = %key, ttl_seconds = ?ttl_seconds, "storing entry");
        let stored = codec::encode(value, ttl_seconds);
        self.store.raw_put(key, stored)
    }

    // == Remove ==
    /// Drops `key` whatever its state. No-op if absent.
    pub fn remove(&mut self, key: &str) -> Result<()> {
        self.store.raw_remove(key)
    }

    // == Accessors ==
    pub fn default_ttl(&self) -> Option<u32> {
        self.default_ttl
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Read-only view of the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the cache and hands back its store.
    pub fn into_store(self) -> S {
        self.store
    }
}
