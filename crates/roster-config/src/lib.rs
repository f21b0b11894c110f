//! Configuration management for the roster site tools.
//!
//! Parses `roster.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the `config.json` URL.
    pub config_url: Option<String>,
    /// Override the `data.json` URL.
    pub data_url: Option<String>,
    /// Override cache enabled flag.
    pub cache_enabled: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "roster.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Document URLs. Required by commands that fetch; see [`Config::require_site`].
    pub site: Option<SiteConfig>,
    /// Client-side cache configuration.
    pub cache: CacheConfig,
    /// Fetch configuration.
    pub fetch: FetchConfig,

    /// Project directory for roster data (`.roster/`), set after loading.
    #[serde(skip)]
    pub project_dir: PathBuf,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Document URL configuration.
#[derive(Debug, Deserialize)]
pub struct SiteConfig {
    /// URL of `config.json` (site display strings).
    pub config_url: String,
    /// URL of `data.json` (the roster tree).
    pub data_url: String,
}

impl SiteConfig {
    /// Validate that both URLs are properly set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if either URL is empty or has an
    /// invalid scheme.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.config_url, "site.config_url")?;
        require_http_url(&self.config_url, "site.config_url")?;
        require_non_empty(&self.data_url, "site.data_url")?;
        require_http_url(&self.data_url, "site.data_url")?;
        Ok(())
    }
}

/// Client-side cache configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Whether the document cache is enabled.
    pub enabled: bool,
    /// Entry time-to-live in seconds.
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl_secs: 600,
        }
    }
}

/// Fetch configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Request watchdog in seconds.
    pub timeout_secs: u64,
}

impl FetchConfig {
    /// The watchdog as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout_secs: 12 }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `roster.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to
    /// take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if settings.config_url.is_some() || settings.data_url.is_some() {
            let site = self.site.get_or_insert_with(|| SiteConfig {
                config_url: String::new(),
                data_url: String::new(),
            });
            if let Some(config_url) = &settings.config_url {
                site.config_url.clone_from(config_url);
            }
            if let Some(data_url) = &settings.data_url {
                site.data_url.clone_from(data_url);
            }
        }
        if let Some(cache_enabled) = settings.cache_enabled {
            self.cache.enabled = cache_enabled;
        }
    }

    /// Get validated document URL configuration.
    ///
    /// Returns the site config if the `[site]` section is present and both
    /// URLs are valid. Use this instead of accessing the `site` field
    /// directly when the command needs to fetch.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the section is missing or invalid.
    pub fn require_site(&self) -> Result<&SiteConfig, ConfigError> {
        let site = self
            .site
            .as_ref()
            .ok_or_else(|| ConfigError::Validation("[site] section required in config".into()))?;
        site.validate()?;
        Ok(site)
    }

    /// Cache directory path (`.roster/cache/`).
    #[must_use]
    pub fn cache_dir(&self) -> PathBuf {
        self.project_dir.join("cache")
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: None,
            cache: CacheConfig::default(),
            fetch: FetchConfig::default(),
            project_dir: base.join(".roster"),
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.project_dir = config_dir.join(".roster");
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Checks that all present fields contain valid values. Called
    /// automatically after loading from file. The `[site]` section is not
    /// eagerly validated here — commands that fetch call
    /// [`Config::require_site`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache.ttl_secs == 0 {
            return Err(ConfigError::Validation(
                "cache.ttl_secs must be greater than 0".to_owned(),
            ));
        }
        if self.fetch.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "fetch.timeout_secs must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }
}
