//! Cache-busting token derivation.
//!
//! The token is the current 10-minute window index in hex. Deriving it from
//! the clock keeps it stable for every request inside one window (so
//! prefetched resources stay cache-hits) while guaranteeing a new value once
//! the window rolls over, without storing the token anywhere.

use std::time::SystemTime;

/// Width of the token stability window, in seconds.
pub const BUST_WINDOW_SECS: u64 = 600;

/// Cache-bust token for the window containing `now`.
#[must_use]
pub fn bust_token(now: SystemTime) -> String {
    let secs = now
        .duration_since(SystemTime::UNIX_EPOCH)
        .map_or(0, |d| d.as_secs());
    format!("{:x}", secs / BUST_WINDOW_SECS)
}

/// Append the bust token to a URL, respecting an existing query string.
#[must_use]
pub fn bust_url(url: &str, token: &str) -> String {
    if url.contains('?') {
        format!("{url}&v={token}")
    } else {
        format!("{url}?v={token}")
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::*;

    fn at(secs: u64) -> SystemTime {
        SystemTime::UNIX_EPOCH + Duration::from_secs(secs)
    }

    #[test]
    fn test_token_stable_within_window() {
        assert_eq!(bust_token(at(6_000)), bust_token(at(6_599)));
    }

    #[test]
    fn test_token_changes_across_windows() {
        assert_ne!(bust_token(at(6_599)), bust_token(at(6_600)));
    }

    #[test]
    fn test_bust_url_without_query() {
        assert_eq!(
            bust_url("https://example.test/data.json", "a"),
            "https://example.test/data.json?v=a"
        );
    }

    #[test]
    fn test_bust_url_with_existing_query() {
        assert_eq!(
            bust_url("https://example.test/data.json?lang=he", "a"),
            "https://example.test/data.json?lang=he&v=a"
        );
    }
}
