//! Validated newtype wrappers for configuration values.
//!
//! These wrap string values that are validated on construction. Invalid
//! values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated Stash API key.
///
/// The key is guaranteed to be non-empty. An empty key in the configuration
/// file means "no key", so it never reaches this type.
///
/// # Security
///
/// The `Debug` implementation masks the key, displaying only
/// `ApiKey(*****)`, so configurations can be logged safely.
///
/// # Example
///
/// ```rust
/// use stash_client::ApiKey;
///
/// let key = ApiKey::new("abc123").unwrap();
/// assert_eq!(key.as_ref(), "abc123");
/// assert_eq!(format!("{key:?}"), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty or only
    /// whitespace.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        let key = key.trim();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key.to_string()))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated Stash server URL, such as `http://localhost:9999`.
///
/// Used in place of `host`/`port` when the server sits behind a reverse
/// proxy or uses TLS. Trailing slashes are trimmed.
///
/// # Example
///
/// ```rust
/// use stash_client::StashUrl;
///
/// let url = StashUrl::new("https://stash.example.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://stash.example.com");
/// assert_eq!(url.graphql_endpoint(), "https://stash.example.com/graphql");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StashUrl(String);

impl StashUrl {
    const GRAPHQL_PATH: &'static str = "/graphql";

    /// Creates a new validated server URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if the scheme is not `http` or
    /// `https`, or if the host is empty.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let remainder = url
            .strip_prefix("http://")
            .or_else(|| url.strip_prefix("https://"))
            .ok_or_else(|| ConfigError::InvalidUrl { url: url.clone() })?;

        let host_end = remainder.find([':', '/', '?', '#']).unwrap_or(remainder.len());
        if remainder[..host_end].is_empty() {
            return Err(ConfigError::InvalidUrl { url });
        }

        Ok(Self(url))
    }

    /// Returns the GraphQL endpoint for this server.
    ///
    /// A URL that already points at `/graphql` is used as-is.
    #[must_use]
    pub fn graphql_endpoint(&self) -> String {
        if self.0.ends_with(Self::GRAPHQL_PATH) {
            self.0.clone()
        } else {
            format!("{}{}", self.0, Self::GRAPHQL_PATH)
        }
    }
}

impl AsRef<str> for StashUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
