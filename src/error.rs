//! Error types for the TTL overlay
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

/// Boxed failure raised by a store backend.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

// == Cache Error Enum ==
/// Unified error type for the TTL overlay.
///
/// The overlay itself never fails: a missing or expired key is `Ok(None)`.
/// Every variant here originates outside the expiry logic.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Failure reported by the underlying store, passed through untouched
    #[error("Store failure: {0}")]
    Store(#[source] BoxError),

    /// Malformed configuration value
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl CacheError {
    /// Wraps a backend error so it can travel through the overlay.
    pub fn store<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        CacheError::Store(err.into())
    }
}

// == Result Type Alias ==
/// Convenience Result type for the TTL overlay.
pub type Result<T> = std::result::Result<T, CacheError>;
