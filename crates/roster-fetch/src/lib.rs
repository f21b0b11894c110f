//! HTTP fetcher for the roster document pair.
//!
//! The site consumes exactly two JSON documents: `config.json` (display
//! strings) and `data.json` (the roster tree). [`DocumentClient`] loads the
//! pair as one unit:
//!
//! - The injected cache bucket is checked first; a fresh entry skips the
//!   network entirely.
//! - Otherwise both documents are requested concurrently and joined before
//!   anything proceeds. Both must succeed or the whole load fails — there is
//!   no partial result with only one document.
//! - Non-success status and transport errors (including the request
//!   timeout) are [`FetchError::Fetch`]; invalid JSON is the distinct
//!   [`FetchError::Parse`].
//! - On success the parsed pair is written back to the cache best-effort.
//!
//! A cache-busting token is appended to each URL so intermediate caches are
//! bypassed. The token is derived from the current 10-minute window, so it
//! stays stable long enough for prefetched resources to remain cache-hits.

mod token;

pub use token::{BUST_WINDOW_SECS, bust_token, bust_url};

use std::time::{Duration, SystemTime};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use ureq::Agent;

use roster_cache::{CacheBucket, CacheBucketExt};
use roster_model::{Roster, SiteInfo};

/// Request watchdog: any request exceeding this duration is aborted and the
/// abort is reported as a fetch failure.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(12);

/// Cache key for the parsed document pair.
const BUNDLE_KEY: &str = "bundle";

/// The parsed document pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterBundle {
    /// Parsed `config.json`.
    pub site: SiteInfo,
    /// Parsed `data.json`.
    pub roster: Roster,
}

/// Document loading error.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// A document could not be retrieved (transport error, timeout, or
    /// non-success status).
    #[error("fetch failed for {url}: {reason}")]
    Fetch {
        /// Requested URL (without the cache-bust token).
        url: String,
        /// Transport or status detail.
        reason: String,
    },
    /// A retrieved document was not valid JSON for its expected shape.
    #[error("parse failed for {url}: {reason}")]
    Parse {
        /// Requested URL (without the cache-bust token).
        url: String,
        /// Deserialization detail.
        reason: String,
    },
}

/// Create an HTTP agent with the given global timeout.
///
/// Status errors are handled by the caller, not turned into transport
/// errors, so a 404 body can be reported alongside the status.
fn create_agent(timeout: Duration) -> Agent {
    Agent::config_builder()
        .timeout_global(Some(timeout))
        .http_status_as_error(false)
        .build()
        .into()
}

/// Client for the config/data document pair.
pub struct DocumentClient {
    agent: Agent,
    config_url: String,
    data_url: String,
}

impl DocumentClient {
    /// Create a client for the two document URLs with the default
    /// [`FETCH_TIMEOUT`].
    #[must_use]
    pub fn new(config_url: impl Into<String>, data_url: impl Into<String>) -> Self {
        Self::with_timeout(config_url, data_url, FETCH_TIMEOUT)
    }

    /// Create a client with an explicit request timeout.
    #[must_use]
    pub fn with_timeout(
        config_url: impl Into<String>,
        data_url: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            agent: create_agent(timeout),
            config_url: config_url.into(),
            data_url: data_url.into(),
        }
    }

    /// Load the document pair, cache-first.
    ///
    /// `now` is the caller's clock; it drives both cache expiry and the
    /// cache-bust window.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Fetch`] if either request fails and
    /// [`FetchError::Parse`] if either body is not a valid document.
    pub fn load(
        &self,
        cache: &dyn CacheBucket,
        now: SystemTime,
    ) -> Result<RosterBundle, FetchError> {
        if let Some(bundle) = cache.get_json::<RosterBundle>(BUNDLE_KEY, now) {
            tracing::debug!("document pair served from cache");
            return Ok(bundle);
        }

        let token = bust_token(now);
        let (site, roster) = rayon::join(
            || self.fetch_json::<SiteInfo>(&self.config_url, &token),
            || self.fetch_json::<Roster>(&self.data_url, &token),
        );

        let bundle = RosterBundle {
            site: site?,
            roster: roster?,
        };

        // Best-effort write-back; a failed write is not an error
        cache.set_json(BUNDLE_KEY, &bundle, now);

        Ok(bundle)
    }

    /// Fetch one URL (with the bust token appended) and parse its body.
    fn fetch_json<T: DeserializeOwned>(&self, url: &str, token: &str) -> Result<T, FetchError> {
        let busted = bust_url(url, token);

        let response = self.agent.get(&busted).call().map_err(|e| {
            tracing::warn!(url, error = %e, "document request failed");
            FetchError::Fetch {
                url: url.to_owned(),
                reason: e.to_string(),
            }
        })?;

        let status = response.status().as_u16();
        let mut body = response.into_body();

        if !(200..300).contains(&status) {
            return Err(FetchError::Fetch {
                url: url.to_owned(),
                reason: format!("HTTP {status}"),
            });
        }

        let text = body.read_to_string().map_err(|e| FetchError::Fetch {
            url: url.to_owned(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&text).map_err(|e| FetchError::Parse {
            url: url.to_owned(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use roster_cache::{Cache, MemoryCache};
    use roster_model::Grade;

    use super::*;

    fn at(secs: u64) -> SystemTime {
        SystemTime::UNIX_EPOCH + Duration::from_secs(secs)
    }

    fn sample_bundle() -> RosterBundle {
        RosterBundle {
            site: SiteInfo {
                title: "בית ספר".to_owned(),
                subtitle: "הקבצות".to_owned(),
                managed_by: "רכזת".to_owned(),
            },
            roster: Roster {
                grades: vec![Grade {
                    key: "z".to_owned(),
                    label: "שכבה ז".to_owned(),
                    groups: vec![],
                }],
            },
        }
    }

    #[test]
    fn test_load_serves_fresh_cache_without_network() {
        // Unresolvable URLs: the test fails loudly if load touches them
        let client = DocumentClient::new("http://invalid.test/config.json", "http://invalid.test/data.json");
        let cache = MemoryCache::new(600);
        let bucket = cache.bucket("documents");
        bucket.set_json(BUNDLE_KEY, &sample_bundle(), at(1_000));

        let bundle = client.load(bucket.as_ref(), at(1_300)).unwrap();
        assert_eq!(bundle, sample_bundle());
    }

    #[test]
    fn test_load_ignores_expired_cache() {
        let client = DocumentClient::with_timeout(
            "http://invalid.test/config.json",
            "http://invalid.test/data.json",
            Duration::from_millis(50),
        );
        let cache = MemoryCache::new(600);
        let bucket = cache.bucket("documents");
        bucket.set_json(BUNDLE_KEY, &sample_bundle(), at(1_000));

        // Entry expired — the client must go to the network, which fails here
        let err = client.load(bucket.as_ref(), at(2_000)).unwrap_err();
        assert!(matches!(err, FetchError::Fetch { .. }));
    }

    #[test]
    fn test_fetch_failure_names_clean_url() {
        let client = DocumentClient::with_timeout(
            "http://invalid.test/config.json",
            "http://invalid.test/data.json",
            Duration::from_millis(50),
        );
        let cache = MemoryCache::new(600);
        let bucket = cache.bucket("documents");

        let err = client.load(bucket.as_ref(), at(1_000)).unwrap_err();
        let FetchError::Fetch { url, .. } = err else {
            panic!("expected fetch error, got {err}");
        };
        // Error reports the configured URL, not the busted one
        assert!(!url.contains("?v="), "url should not carry the bust token: {url}");
    }
}
