//! Entry Codec Module
//!
//! Translates between a logical value with an optional lifetime and the
//! [`StoredValue`] kept by the underlying store.

use chrono::{DateTime, Duration, Utc};

use crate::cache::{CacheEntry, StoredValue};

// == Decoded ==
/// Outcome of decoding a stored representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    /// Record without expiry
    Plain(String),
    /// Record with a deadline that has not passed yet
    Live(String),
    /// Record whose deadline has passed
    Expired,
    /// Nothing was stored
    Absent,
}

impl Decoded {
    /// Returns the usable value for `Plain` and `Live`, `None` otherwise.
    pub fn into_value(self) -> Option<String> {
        match self {
            Decoded::Plain(value) | Decoded::Live(value) => Some(value),
            Decoded::Expired | Decoded::Absent => None,
        }
    }
}

// == Encode ==
/// Builds the stored representation for `value`.
///
/// With no TTL the plain variant is used; otherwise the deadline is
/// `now + ttl_seconds`. A TTL of zero yields an entry that is already
/// expired for any later read.
pub fn encode(value: String, ttl_seconds: Option<u32>) -> StoredValue {
    encode_at(value, ttl_seconds, Utc::now())
}

/// [`encode`] against an explicit clock reading.
pub fn encode_at(value: String, ttl_seconds: Option<u32>, now: DateTime<Utc>) -> StoredValue {
    match ttl_seconds {
        None => StoredValue::Plain { value },
        Some(ttl) => StoredValue::Expiring(CacheEntry::new(value, deadline(now, ttl))),
    }
}

fn deadline(now: DateTime<Utc>, ttl_seconds: u32) -> DateTime<Utc> {
    now + Duration::milliseconds(i64::from(ttl_seconds) * 1000)
}

// == Decode ==
/// Decodes what the store returned for a key.
pub fn decode(stored: Option<StoredValue>) -> Decoded {
    decode_at(stored, Utc::now())
}

/// [`decode`] against an explicit clock reading.
pub fn decode_at(stored: Option<StoredValue>, now: DateTime<Utc>) -> Decoded {
    match stored {
        None => Decoded::Absent,
        Some(StoredValue::Plain { value }) => Decoded::Plain(value),
        Some(StoredValue::Expiring(entry)) if entry.is_valid_at(now) => Decoded::Live(entry.value),
        Some(StoredValue::Expiring(_)) => Decoded::Expired,
    }
}
