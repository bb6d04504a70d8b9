//! TTL Overlay - time-to-live expiry for plain key-value stores
//!
//! Wraps any put/get store so that entries written with a lifetime disappear
//! once it elapses. Expiry is checked lazily on read; nothing sweeps in the
//! background.

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{BoundedStore, CacheStats, MemoryStore, Store, StoredValue, TtlCache};
pub use config::Config;
pub use error::{CacheError, Result};
