//! Cache Entry Module
//!
//! Defines the stored representation of a cached value: either a plain value
//! that never expires, or a value wrapped with an absolute deadline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// == Cache Entry ==
/// A cached value paired with the instant it stops being valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// The stored value
    pub value: String,
    /// Deadline; the entry is invalid at or after this instant
    pub expires_at: DateTime<Utc>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry expiring at the given deadline.
    pub fn new(value: String, expires_at: DateTime<Utc>) -> Self {
        Self { value, expires_at }
    }

    // == Validity ==
    /// Returns true while `now` is strictly before the deadline.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

// == Stored Value ==
/// Opaque representation handed to the underlying store.
///
/// The variant is decided once at write time, so reads never have to guess
/// what kind of record they are looking at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StoredValue {
    /// Value without expiry
    Plain { value: String },
    /// Value with a deadline
    Expiring(CacheEntry),
}

impl StoredValue {
    /// Returns the payload regardless of expiry state.
    pub fn value(&self) -> &str {
        match self {
            StoredValue::Plain { value } => value,
            StoredValue::Expiring(entry) => &entry.value,
        }
    }

    /// Returns the deadline, if any.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        match self {
            StoredValue::Plain { .. } => None,
            StoredValue::Expiring(entry) => Some(entry.expires_at),
        }
    }
}
