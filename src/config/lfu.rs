//! Configuration for the Least Frequently Used (LFU) cache.
//!
//! # Examples
//!
//! ```
//! use bucket_lfu::config::LfuCacheConfig;
//! use bucket_lfu::LfuCache;
//!
//! let config = LfuCacheConfig { capacity: 100 };
//! assert!(config.validate().is_ok());
//! let cache: LfuCache<String, i32> = LfuCache::init(config, None);
//! assert!(cache.is_empty());
//! ```

use crate::error::ConfigError;
use core::fmt;

/// Configuration for an LFU (Least Frequently Used) cache.
///
/// # Fields
///
/// - `capacity`: Maximum number of entries the cache can hold. Zero is
///   allowed and yields a cache that never stores anything.
///
/// # Examples
///
/// ```
/// use bucket_lfu::config::LfuCacheConfig;
///
/// let config = LfuCacheConfig { capacity: 0 };
/// assert!(config.validate().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LfuCacheConfig {
    /// Maximum number of key-value pairs the cache can hold
    pub capacity: usize,
}

impl LfuCacheConfig {
    /// Checks the configuration strictly, rejecting a zero capacity.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::new("capacity must be greater than zero"));
        }
        Ok(())
    }
}

impl fmt::Debug for LfuCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LfuCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}
