//! Cache Statistics Module
//!
//! Counts reads served, reads missed, and entries reclaimed on read.

use serde::Serialize;

// == Cache Stats ==
/// Read counters for a TTL cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Reads that returned a value
    pub hits: u64,
    /// Reads that returned nothing, expired reads included
    pub misses: u64,
    /// Expired entries removed from the store by a read
    pub expirations: u64,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 before any read.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// An expired read is both a miss and a reclamation.
    pub fn record_expiration(&mut self) {
        self.misses += 1;
        self.expirations += 1;
    }
}
