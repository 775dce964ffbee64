//! Cache construction settings

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default number of entries when no capacity is configured
pub const DEFAULT_CAPACITY: usize = 10_000;

/// Settings for building an [`LruCache`](crate::LruCache)
///
/// Deserializable so a host application can embed it in its own config file:
///
/// ```
/// let config: lrukit::CacheConfig = serde_json::from_str(r#"{ "capacity": 64 }"#).unwrap();
/// let cache = lrukit::LruCache::<u64, String>::from_config(&config).unwrap();
/// assert_eq!(cache.capacity().get(), 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of items in cache
    pub capacity: usize,
}

impl CacheConfig {
    /// Create a config with the given capacity
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Check the settings, returning the capacity as a non-zero count
    ///
    /// # Returns
    /// * `Result<NonZeroUsize>` - `Error::InvalidCapacity` if capacity is 0
    pub fn validate(&self) -> Result<NonZeroUsize> {
        NonZeroUsize::new(self.capacity).ok_or(Error::InvalidCapacity(self.capacity))
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}
