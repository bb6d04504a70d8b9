//! Cache Module
//!
//! Lazy TTL expiry layered over pluggable key-value stores.

mod bounded;
pub mod codec;
mod entry;
mod lru;
mod stats;
mod store;
mod ttl;


// Re-export public types
pub use bounded::BoundedStore;
pub use codec::Decoded;
pub use entry::{CacheEntry, StoredValue};
pub use lru::AccessOrder;
pub use stats::CacheStats;
pub use store::{MemoryStore, Store};
pub use ttl::TtlCache;
