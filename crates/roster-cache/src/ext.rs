//! Extension trait for [`CacheBucket`] with typed convenience methods.

use std::time::SystemTime;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::CacheBucket;

/// Typed convenience methods for [`CacheBucket`].
///
/// Provides `get_json`/`set_json` for serde-serializable types. These are
/// implemented as default methods on an extension trait so that:
///
/// - [`CacheBucket`] stays object-safe with no serde dependency
/// - Implementors only need to handle raw bytes
/// - Callers get ergonomic typed access via a blanket impl
///
/// # Example
///
/// ```
/// use std::time::SystemTime;
/// use roster_cache::{Cache, CacheBucketExt, NullCache};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Bundle { total: usize }
///
/// let cache = NullCache;
/// let bucket = cache.bucket("documents");
/// let now = SystemTime::now();
///
/// bucket.set_json("bundle", &Bundle { total: 3 }, now);
/// let data: Option<Bundle> = bucket.get_json("bundle", now);
/// ```
pub trait CacheBucketExt: CacheBucket {
    /// Retrieve a JSON-deserialized value from the cache.
    ///
    /// Returns `None` on cache miss, expiry, or deserialization failure.
    fn get_json<T: DeserializeOwned>(&self, key: &str, now: SystemTime) -> Option<T> {
        let bytes = self.get(key, now)?;
        serde_json::from_slice(&bytes).ok()
    }

    /// Store a value as JSON in the cache.
    ///
    /// Silently does nothing if serialization fails.
    fn set_json<T: Serialize>(&self, key: &str, value: &T, now: SystemTime) {
        if let Ok(bytes) = serde_json::to_vec(value) {
            self.set(key, &bytes, now);
        }
    }
}

impl<B: CacheBucket + ?Sized> CacheBucketExt for B {}
