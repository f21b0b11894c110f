//! File-based cache implementation.
//!
//! [`FileCache`] stores cache entries as files on disk, organized into
//! buckets (subdirectories). Each entry is a single file with a binary
//! header followed by the data:
//!
//! ```text
//! [stored_at: u64 LE][data bytes]
//! ```
//!
//! On read, only the header is read first to check freshness. The full data
//! is read only on cache hit, avoiding unnecessary I/O on expired entries.
//!
//! On construction, [`FileCache`] validates a `VERSION` file in the cache
//! root. If the version mismatches or is missing, the entire cache directory
//! is wiped and recreated. This ensures entries written by a previous build
//! are never reused.

use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::{Cache, CacheBucket, epoch_secs, is_fresh};

/// File-based [`Cache`] rooted at a directory on disk.
///
/// Directory layout:
/// ```text
/// {root}/
/// +-- VERSION            # contains the cache version string
/// +-- documents/         # bucket "documents"
///     +-- bundle         # cache entry
/// ```
pub struct FileCache {
    root: PathBuf,
    ttl_secs: u64,
}

impl FileCache {
    /// Create a new file-based cache at `root`, validating the cache version.
    ///
    /// Entries expire after `ttl_secs`. If the `VERSION` file inside `root`
    /// does not match `version`, the entire cache directory is removed and
    /// recreated with the new version. Errors during validation are logged
    /// but never fatal.
    #[must_use]
    pub fn new(root: PathBuf, version: &str, ttl_secs: u64) -> Self {
        validate_version(&root, version);
        Self { root, ttl_secs }
    }
}

impl Cache for FileCache {
    fn bucket(&self, name: &str) -> Box<dyn CacheBucket> {
        Box::new(FileCacheBucket {
            dir: self.root.join(name),
            ttl_secs: self.ttl_secs,
        })
    }
}

/// A single bucket backed by a directory on disk.
struct FileCacheBucket {
    dir: PathBuf,
    ttl_secs: u64,
}

impl CacheBucket for FileCacheBucket {
    fn get(&self, key: &str, now: SystemTime) -> Option<Vec<u8>> {
        let path = self.dir.join(key);
        let mut file = File::open(&path).ok()?;

        // Read stored-at timestamp (u64 LE)
        let mut stamp_buf = [0u8; 8];
        file.read_exact(&mut stamp_buf).ok()?;
        let stored_at = u64::from_le_bytes(stamp_buf);

        if !is_fresh(stored_at, now, self.ttl_secs) {
            return None;
        }

        // Entry is fresh — read the data
        let mut data = Vec::new();
        file.read_to_end(&mut data).ok()?;
        Some(data)
    }

    fn set(&self, key: &str, value: &[u8], now: SystemTime) {
        let path = self.dir.join(key);

        // Silently ignore errors — cache is optional
        let Some(parent) = path.parent() else {
            return;
        };
        if fs::create_dir_all(parent).is_err() {
            return;
        }

        let mut buf = Vec::with_capacity(8 + value.len());
        buf.extend_from_slice(&epoch_secs(now).to_le_bytes());
        buf.extend_from_slice(value);

        let _ = fs::write(&path, &buf);
    }
}

/// Validate the cache version, wiping the directory on mismatch.
fn validate_version(root: &Path, version: &str) {
    let version_file = root.join("VERSION");

    // Try to read the existing version
    match fs::read_to_string(&version_file) {
        Ok(stored) if stored == version => {
            // Version matches — keep cache
            tracing::debug!("cache version matches: {version}");
            return;
        }
        Ok(stored) => {
            tracing::info!(
                "cache version mismatch (stored={stored}, current={version}), wiping cache"
            );
        }
        Err(_) => {
            tracing::info!("no cache VERSION file found, initializing cache");
        }
    }

    // Wipe and recreate
    if root.exists()
        && let Err(e) = fs::remove_dir_all(root)
    {
        tracing::warn!("failed to remove cache directory: {e}");
    }
    if let Err(e) = fs::create_dir_all(root) {
        tracing::warn!("failed to create cache directory: {e}");
        return;
    }
    if let Err(e) = fs::write(&version_file, version) {
        tracing::warn!("failed to write cache VERSION file: {e}");
    }
}
