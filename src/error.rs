//! Error types.
//!
//! Lookups never fail: a missing key is reported as `None`. The only errors
//! this crate produces are about configuration and about internal structure:
//!
//! - [`ConfigError`]: the cache was configured with zero capacity, either
//!   rejected up front by a strict constructor
//!   ([`LfuCache::try_new`](crate::LfuCache::try_new)) or reported when a
//!   write reaches a zero-capacity cache through
//!   [`LfuCache::try_set`](crate::LfuCache::try_set).
//! - [`InvariantError`]: returned by
//!   [`LfuCache::check_invariants`](crate::LfuCache::check_invariants) when
//!   the bucket chain or lookup table is inconsistent.
//!
//! # Example
//!
//! ```
//! use bucket_lfu::LfuCache;
//!
//! let err = LfuCache::<u32, u32>::try_new(0).unwrap_err();
//! assert!(err.message().contains("capacity"));
//! ```

extern crate alloc;

use alloc::string::String;
use core::fmt;

/// Error returned when cache configuration parameters are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Error returned when the cache's internal structure is inconsistent.
///
/// Carries a human-readable description of the first invariant found broken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvariantError {}
