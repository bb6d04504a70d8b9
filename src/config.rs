//! Configuration Module
//!
//! Handles loading the overlay configuration from environment variables.

use std::env;

use crate::error::{CacheError, Result};

/// Environment variable holding the default TTL in seconds
pub const DEFAULT_TTL_VAR: &str = "DEFAULT_TTL";

/// Environment variable holding the store capacity hint
pub const MAX_CAPACITY_VAR: &str = "MAX_CAPACITY";

/// TTL overlay configuration.
///
/// Both values are optional. An absent default TTL means writes without an
/// explicit lifetime never expire; an absent capacity means the store decides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Default TTL in seconds for writes without an explicit TTL
    pub default_ttl: Option<u32>,
    /// Capacity hint forwarded verbatim to store construction
    pub max_capacity: Option<usize>,
}

impl Config {
    /// Creates an empty configuration: no default TTL, no capacity hint.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default TTL in seconds.
    pub fn with_default_ttl(mut self, seconds: u32) -> Self {
        self.default_ttl = Some(seconds);
        self
    }

    /// Sets the capacity hint.
    pub fn with_max_capacity(mut self, capacity: usize) -> Self {
        self.max_capacity = Some(capacity);
        self
    }

    /// Creates a Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DEFAULT_TTL` - Default TTL in seconds (default: none)
    /// - `MAX_CAPACITY` - Store capacity hint (default: none)
    ///
    /// Unset or blank values are absent; malformed ones are rejected.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            default_ttl: parse_var(DEFAULT_TTL_VAR, env::var(DEFAULT_TTL_VAR).ok())?,
            max_capacity: parse_var(MAX_CAPACITY_VAR, env::var(MAX_CAPACITY_VAR).ok())?,
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, raw: Option<String>) -> Result<Option<T>> {
    match raw {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| {
                CacheError::Config(format!("{}={:?} is not a non-negative integer", name, raw))
            }),
    }
}
