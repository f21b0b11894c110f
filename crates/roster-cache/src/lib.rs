//! Cache abstraction layer for the roster site.
//!
//! This crate decouples cache consumers from the underlying storage
//! mechanism. Two traits form the core API:
//!
//! - [`Cache`]: Factory for named cache buckets
//! - [`CacheBucket`]: Key-value store with TTL-based expiry
//!
//! Entries expire after a fixed time-to-live. The clock is always supplied
//! by the caller (`now` parameter), so expiry is testable without sleeping
//! and no implementation reads wall time itself.
//!
//! # Implementations
//!
//! - [`NullCache`] / [`NullCacheBucket`]: No-op implementations (always miss)
//! - [`MemoryCache`]: In-process map, used in tests and one-shot runs
//! - [`FileCache`]: File-based implementation with version validation
//!
//! # Example
//!
//! ```
//! use std::time::SystemTime;
//! use roster_cache::{Cache, NullCache};
//!
//! let cache = NullCache;
//! let bucket = cache.bucket("documents");
//! let now = SystemTime::now();
//! bucket.set("bundle", b"{}", now);
//! assert_eq!(bucket.get("bundle", now), None); // NullCache always misses
//! ```

mod ext;
mod file;
mod memory;

pub use ext::CacheBucketExt;
pub use file::FileCache;
pub use memory::MemoryCache;

use std::time::SystemTime;

/// A named partition within a [`Cache`].
///
/// Each bucket stores key-value pairs that expire after the cache's
/// time-to-live. A cache hit occurs only when the key exists and the entry's
/// age at `now` is within the TTL.
pub trait CacheBucket: Send + Sync {
    /// Retrieve a cached value.
    ///
    /// Returns `Some(value)` if the key exists **and** has not expired at
    /// `now`. Returns `None` on miss or expiry. An entry stored "in the
    /// future" relative to `now` (clock moved backwards) also misses.
    ///
    /// # Arguments
    ///
    /// * `key` - Cache key (e.g., "bundle")
    /// * `now` - Current time, supplied by the caller
    fn get(&self, key: &str, now: SystemTime) -> Option<Vec<u8>>;

    /// Store a value in the cache, stamped with `now`.
    ///
    /// Overwrites any existing entry for the same key. Writes are
    /// best-effort: storage failures are silently ignored and the caller
    /// proceeds as if nothing happened.
    ///
    /// # Arguments
    ///
    /// * `key` - Cache key
    /// * `value` - Raw bytes to cache
    /// * `now` - Current time, supplied by the caller
    fn set(&self, key: &str, value: &[u8], now: SystemTime);
}

/// Factory for named cache [`CacheBucket`]s.
///
/// A `Cache` produces buckets that are logically isolated from each other.
/// For example, a file-based cache stores each bucket in a separate
/// subdirectory.
pub trait Cache: Send + Sync {
    /// Open or create a named bucket.
    ///
    /// Calling `bucket` multiple times with the same name may return
    /// independent handles that share the same underlying storage.
    ///
    /// # Arguments
    ///
    /// * `name` - Bucket name (e.g., "documents")
    fn bucket(&self, name: &str) -> Box<dyn CacheBucket>;
}

/// No-op [`CacheBucket`] that never stores or retrieves data.
///
/// Every `get` returns `None`; every `set` is silently discarded.
/// Used as the bucket type for [`NullCache`].
pub struct NullCacheBucket;

impl CacheBucket for NullCacheBucket {
    fn get(&self, _key: &str, _now: SystemTime) -> Option<Vec<u8>> {
        None
    }

    fn set(&self, _key: &str, _value: &[u8], _now: SystemTime) {}
}

/// No-op [`Cache`] that always returns [`NullCacheBucket`]s.
///
/// Use when caching is disabled. All operations are no-ops and all lookups
/// return `None`.
pub struct NullCache;

impl Cache for NullCache {
    fn bucket(&self, _name: &str) -> Box<dyn CacheBucket> {
        Box::new(NullCacheBucket)
    }
}

/// Seconds since the Unix epoch for `t`, saturating at zero.
pub(crate) fn epoch_secs(t: SystemTime) -> u64 {
    t.duration_since(SystemTime::UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}

/// Whether an entry stamped at `stored_at` is still fresh at `now`.
///
/// An entry from the future (clock moved backwards) is treated as stale.
pub(crate) fn is_fresh(stored_at: u64, now: SystemTime, ttl_secs: u64) -> bool {
    let now = epoch_secs(now);
    now >= stored_at && now - stored_at <= ttl_secs
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_null_cache_always_misses() {
        let cache = NullCache;
        let bucket = cache.bucket("documents");
        let now = SystemTime::now();

        // A fresh bucket has no data
        assert_eq!(bucket.get("key", now), None);

        // Setting a value and reading it back still returns None
        bucket.set("key", b"hello", now);
        assert_eq!(bucket.get("key", now), None);
    }

    #[test]
    fn test_null_cache_different_buckets_all_miss() {
        let cache = NullCache;
        let now = SystemTime::now();

        for name in &["documents", "tokens", "meta"] {
            let bucket = cache.bucket(name);
            bucket.set("k", b"data", now);
            assert_eq!(bucket.get("k", now), None, "bucket {name} should miss");
        }
    }

    #[test]
    fn test_is_fresh_within_ttl() {
        let now = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000);
        assert!(is_fresh(1_000, now, 600));
        assert!(is_fresh(400, now, 600));
    }

    #[test]
    fn test_is_fresh_expired() {
        let now = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000);
        assert!(!is_fresh(399, now, 600));
    }

    #[test]
    fn test_is_fresh_future_entry_is_stale() {
        let now = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000);
        assert!(!is_fresh(1_001, now, 600));
    }
}
