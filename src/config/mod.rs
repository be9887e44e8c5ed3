//! Connection configuration for the Stash client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`StashConfig`]: The resolved, immutable connection settings
//! - [`StashConfigBuilder`]: Layered resolution of those settings
//! - [`ApiKey`]: A validated API key with masked debug output
//! - [`StashUrl`]: A validated server URL overriding `host`/`port`
//!
//! # Resolution Order
//!
//! Each setting is resolved independently, first match wins:
//!
//! 1. A value passed explicitly to the builder
//! 2. The `[stash]` section of the INI configuration file
//! 3. The built-in default (`localhost`, `9999`, no API key)
//!
//! A missing or unreadable configuration file is not an error.
//!
//! # Example
//!
//! ```rust
//! use stash_client::{ApiKey, StashConfig};
//!
//! let config = StashConfig::builder()
//!     .no_config_file()
//!     .host("nas.local")
//!     .api_key(ApiKey::new("abc123").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.graphql_url(), "http://nas.local:9999/graphql");
//! ```

mod file;
mod newtypes;

pub use file::{default_config_path, FileSettings, CONFIG_SECTION};
pub use newtypes::{ApiKey, StashUrl};

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

/// Host used when none is configured.
pub const DEFAULT_HOST: &str = "localhost";

/// Port used when none is configured.
pub const DEFAULT_PORT: u16 = 9999;

/// Resolved connection settings for a Stash server.
///
/// `StashConfig` is immutable once built; clients hold their own copy.
///
/// # Example
///
/// ```rust
/// use stash_client::StashConfig;
///
/// let config = StashConfig::default();
/// assert_eq!(config.host(), "localhost");
/// assert_eq!(config.port(), 9999);
/// assert!(config.api_key().is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StashConfig {
    host: String,
    port: u16,
    api_key: Option<ApiKey>,
    url: Option<StashUrl>,
    timeout: Option<Duration>,
}

impl StashConfig {
    /// Creates a new builder for constructing a `StashConfig`.
    #[must_use]
    pub fn builder() -> StashConfigBuilder {
        StashConfigBuilder::new()
    }

    /// Loads the configuration from `path`, or from
    /// [`default_config_path`] when `path` is `None`.
    ///
    /// Never fails: anything missing or invalid in the file falls back to
    /// the defaults.
    #[must_use]
    pub fn load(path: Option<&Path>) -> Self {
        let path = path.map_or_else(default_config_path, Path::to_path_buf);
        StashConfigBuilder::new().resolve(&FileSettings::read(&path))
    }

    /// Returns the server host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the server port.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Returns the API key, if configured.
    #[must_use]
    pub const fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }

    /// Returns the server URL override, if configured.
    #[must_use]
    pub const fn url(&self) -> Option<&StashUrl> {
        self.url.as_ref()
    }

    /// Returns the request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the GraphQL endpoint URL.
    ///
    /// This is `http://{host}:{port}/graphql`, unless a server URL override
    /// is configured.
    #[must_use]
    pub fn graphql_url(&self) -> String {
        self.url.as_ref().map_or_else(
            || format!("http://{}:{}/graphql", self.host, self.port),
            StashUrl::graphql_endpoint,
        )
    }
}

impl Default for StashConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            api_key: None,
            url: None,
            timeout: None,
        }
    }
}

// Verify StashConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StashConfig>();
};

/// Where the builder looks for a configuration file.
#[derive(Clone, Debug, Default)]
enum FileSource {
    #[default]
    DefaultLocation,
    Path(PathBuf),
    Disabled,
}

/// Builder for constructing [`StashConfig`] instances.
///
/// Every field is optional. Unset fields are taken from the configuration
/// file, then from the defaults.
///
/// # Defaults
///
/// - `host`: `"localhost"`
/// - `port`: `9999`
/// - `api_key`: `None`
/// - `url`: `None`
/// - `timeout`: `None` (transport default)
/// - configuration file: [`default_config_path`]
///
/// # Example
///
/// ```rust,no_run
/// use stash_client::StashConfig;
///
/// let config = StashConfig::builder()
///     .config_path("/etc/stash-analytics/configuration.ini")
///     .port(9998)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct StashConfigBuilder {
    host: Option<String>,
    port: Option<u16>,
    api_key: Option<ApiKey>,
    url: Option<String>,
    timeout: Option<Duration>,
    file: FileSource,
}

impl StashConfigBuilder {
    /// Creates a new builder reading the default configuration file.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the configuration file at `path` instead of the default location.
    #[must_use]
    pub fn config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = FileSource::Path(path.into());
        self
    }

    /// Skips the configuration file entirely.
    #[must_use]
    pub fn no_config_file(mut self) -> Self {
        self.file = FileSource::Disabled;
        self
    }

    /// Sets the server host.
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Sets the server port.
    #[must_use]
    pub const fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Sets the API key sent in the `ApiKey` header.
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets a server URL, overriding `host` and `port`.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`StashConfig`].
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if an explicitly set value is invalid:
    /// an empty host, port `0`, or a URL without an `http`/`https` scheme.
    /// Invalid values in the configuration file are ignored instead.
    pub fn build(self) -> Result<StashConfig, ConfigError> {
        if self.host.as_deref().is_some_and(|host| host.trim().is_empty()) {
            return Err(ConfigError::EmptyHost);
        }
        if self.port == Some(0) {
            return Err(ConfigError::InvalidPort {
                port: "0".to_string(),
            });
        }
        if let Some(url) = &self.url {
            StashUrl::new(url.as_str())?;
        }

        let file_settings = match &self.file {
            FileSource::DefaultLocation => FileSettings::read(&default_config_path()),
            FileSource::Path(path) => FileSettings::read(path),
            FileSource::Disabled => FileSettings::default(),
        };

        Ok(self.resolve(&file_settings))
    }

    /// Merges explicit values, file values and defaults, field by field.
    fn resolve(self, file: &FileSettings) -> StashConfig {
        let host = self
            .host
            .map(|host| host.trim().to_string())
            .or_else(|| file_host(file))
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = self
            .port
            .or_else(|| file_port(file))
            .unwrap_or(DEFAULT_PORT);

        let api_key = self.api_key.or_else(|| {
            file.api_key
                .as_deref()
                .and_then(|key| ApiKey::new(key).ok())
        });

        let url = self
            .url
            .and_then(|url| StashUrl::new(url).ok())
            .or_else(|| file_url(file));

        let config = StashConfig {
            host,
            port,
            api_key,
            url,
            timeout: self.timeout,
        };

        tracing::debug!(
            "Resolved Stash configuration: endpoint {}, API key configured: {}",
            config.graphql_url(),
            config.api_key.is_some()
        );

        config
    }
}

fn file_host(file: &FileSettings) -> Option<String> {
    let host = file.host.as_deref()?.trim();
    if host.is_empty() {
        tracing::warn!("Ignoring empty 'host' in [{}] configuration", CONFIG_SECTION);
        return None;
    }
    Some(host.to_string())
}

fn file_port(file: &FileSettings) -> Option<u16> {
    let raw = file.port.as_deref()?.trim();
    match raw.parse::<u16>() {
        Ok(port) if port != 0 => Some(port),
        _ => {
            tracing::warn!(
                "Ignoring invalid 'port' value '{}' in [{}] configuration, using {}",
                raw,
                CONFIG_SECTION,
                DEFAULT_PORT
            );
            None
        }
    }
}

fn file_url(file: &FileSettings) -> Option<StashUrl> {
    let raw = file.url.as_deref()?;
    if raw.trim().is_empty() {
        return None;
    }
    match StashUrl::new(raw) {
        Ok(url) => Some(url),
        Err(e) => {
            tracing::warn!("Ignoring 'url' in [{}] configuration: {}", CONFIG_SECTION, e);
            None
        }
    }
}
