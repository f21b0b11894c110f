//! In-memory cache implementation.
//!
//! [`MemoryCache`] keeps entries in a mutex-guarded map shared by all
//! buckets handed out from the same cache. There is no concurrent writer in
//! the load pipeline (the cache is read once at load time and written once
//! after a successful fetch), but the mutex keeps the trait's `Send + Sync`
//! contract honest.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

use crate::{Cache, CacheBucket, epoch_secs, is_fresh};

type EntryMap = HashMap<(String, String), (u64, Vec<u8>)>;

/// In-process [`Cache`] with TTL expiry.
pub struct MemoryCache {
    ttl_secs: u64,
    entries: Arc<Mutex<EntryMap>>,
}

impl MemoryCache {
    /// Create an empty in-memory cache whose entries expire after `ttl_secs`.
    #[must_use]
    pub fn new(ttl_secs: u64) -> Self {
        Self {
            ttl_secs,
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl Cache for MemoryCache {
    fn bucket(&self, name: &str) -> Box<dyn CacheBucket> {
        Box::new(MemoryCacheBucket {
            name: name.to_owned(),
            ttl_secs: self.ttl_secs,
            entries: Arc::clone(&self.entries),
        })
    }
}

/// A bucket view over the shared entry map.
struct MemoryCacheBucket {
    name: String,
    ttl_secs: u64,
    entries: Arc<Mutex<EntryMap>>,
}

impl CacheBucket for MemoryCacheBucket {
    fn get(&self, key: &str, now: SystemTime) -> Option<Vec<u8>> {
        let entries = self.entries.lock().ok()?;
        let (stored_at, data) = entries.get(&(self.name.clone(), key.to_owned()))?;
        if !is_fresh(*stored_at, now, self.ttl_secs) {
            return None;
        }
        Some(data.clone())
    }

    fn set(&self, key: &str, value: &[u8], now: SystemTime) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(
                (self.name.clone(), key.to_owned()),
                (epoch_secs(now), value.to_vec()),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    static_assertions::assert_impl_all!(MemoryCache: Send, Sync);

    fn at(secs: u64) -> SystemTime {
        SystemTime::UNIX_EPOCH + Duration::from_secs(secs)
    }

    #[test]
    fn test_set_and_get_within_ttl() {
        let cache = MemoryCache::new(600);
        let bucket = cache.bucket("documents");

        bucket.set("bundle", b"data", at(1_000));
        assert_eq!(bucket.get("bundle", at(1_000)), Some(b"data".to_vec()));
        assert_eq!(bucket.get("bundle", at(1_600)), Some(b"data".to_vec()));
    }

    #[test]
    fn test_entry_expires_after_ttl() {
        let cache = MemoryCache::new(600);
        let bucket = cache.bucket("documents");

        bucket.set("bundle", b"data", at(1_000));
        assert_eq!(bucket.get("bundle", at(1_601)), None);
    }

    #[test]
    fn test_clock_moving_backwards_misses() {
        let cache = MemoryCache::new(600);
        let bucket = cache.bucket("documents");

        bucket.set("bundle", b"data", at(1_000));
        assert_eq!(bucket.get("bundle", at(999)), None);
    }

    #[test]
    fn test_overwrite_refreshes_timestamp() {
        let cache = MemoryCache::new(600);
        let bucket = cache.bucket("documents");

        bucket.set("bundle", b"old", at(1_000));
        bucket.set("bundle", b"new", at(1_500));
        assert_eq!(bucket.get("bundle", at(2_000)), Some(b"new".to_vec()));
    }

    #[test]
    fn test_buckets_share_storage_but_not_keys() {
        let cache = MemoryCache::new(600);
        let a = cache.bucket("alpha");
        let b = cache.bucket("beta");

        a.set("key", b"alpha-data", at(1_000));
        b.set("key", b"beta-data", at(1_000));

        assert_eq!(a.get("key", at(1_000)), Some(b"alpha-data".to_vec()));
        assert_eq!(b.get("key", at(1_000)), Some(b"beta-data".to_vec()));
    }

    #[test]
    fn test_same_bucket_name_shares_entries() {
        let cache = MemoryCache::new(600);
        let first = cache.bucket("documents");
        let second = cache.bucket("documents");

        first.set("bundle", b"data", at(1_000));
        assert_eq!(second.get("bundle", at(1_000)), Some(b"data".to_vec()));
    }
}
