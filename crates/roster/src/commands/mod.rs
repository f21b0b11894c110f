//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod show;

pub(crate) use check::CheckArgs;
pub(crate) use show::ShowArgs;

use std::path::Path;
use std::time::SystemTime;

use roster_cache::{Cache, FileCache, NullCache};
use roster_config::Config;
use roster_fetch::{DocumentClient, FetchError, RosterBundle};

use crate::error::CliError;
use crate::output::Output;

/// Load the document pair through the configured cache.
///
/// On failure the localized message is shown in the error region first;
/// the returned error carries the technical detail for the diagnostic line.
pub(crate) fn load_bundle(
    config: &Config,
    version: &str,
    output: &Output,
) -> Result<RosterBundle, CliError> {
    let site = config.require_site()?;

    let cache: Box<dyn Cache> = if config.cache.enabled {
        ensure_project_dir(&config.project_dir)?;
        Box::new(FileCache::new(
            config.cache_dir(),
            version,
            config.cache.ttl_secs,
        ))
    } else {
        Box::new(NullCache)
    };
    let bucket = cache.bucket("documents");

    let client =
        DocumentClient::with_timeout(&site.config_url, &site.data_url, config.fetch.timeout());

    match client.load(bucket.as_ref(), SystemTime::now()) {
        Ok(bundle) => Ok(bundle),
        Err(err) => {
            let local = is_local_url(&site.config_url) || is_local_url(&site.data_url);
            output.error(roster_views::locale::load_error_message(
                local && matches!(err, FetchError::Fetch { .. }),
            ));
            Err(err.into())
        }
    }
}

/// Whether a URL points at this machine — a failed fetch then usually means
/// the local server is simply not running.
fn is_local_url(url: &str) -> bool {
    let rest = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
        .unwrap_or(url);
    let host = if let Some(bracketed) = rest.strip_prefix('[') {
        bracketed.split(']').next().unwrap_or("")
    } else {
        rest.split(['/', ':']).next().unwrap_or("")
    };
    host == "localhost" || host == "127.0.0.1" || host == "::1"
}

/// Ensure the `.roster/` project directory exists with a `.gitignore`.
fn ensure_project_dir(project_dir: &Path) -> Result<(), CliError> {
    std::fs::create_dir_all(project_dir)?;

    let gitignore_path = project_dir.join(".gitignore");
    if !gitignore_path.exists() {
        // Auto-create .gitignore like mypy does for .mypy_cache
        let _ = std::fs::write(&gitignore_path, "# Automatically created by roster\n*\n");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_local_url() {
        assert!(is_local_url("http://localhost:8080/data.json"));
        assert!(is_local_url("http://127.0.0.1/data.json"));
        assert!(is_local_url("https://[::1]:8443/config.json"));
        assert!(!is_local_url("https://example.school/data.json"));
        assert!(!is_local_url("http://localhost.example.com/data.json"));
    }
}
