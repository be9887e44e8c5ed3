//! HTTP client for Stash API communication.
//!
//! This module provides the [`HttpClient`] type, which owns the endpoint URL
//! and the fixed header set and performs one POST per call.

use std::collections::HashMap;

use crate::clients::errors::HttpError;
use crate::clients::http_response::HttpResponse;
use crate::config::StashConfig;

/// Name of the header carrying the Stash API key.
pub const API_KEY_HEADER: &str = "ApiKey";

/// HTTP client for making requests to a Stash server.
///
/// The client handles:
/// - Endpoint construction from the configuration
/// - Default headers, including the `ApiKey` header when a key is set
/// - A single attempt per request; there is no retry loop
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust
/// use stash_client::StashConfig;
/// use stash_client::clients::HttpClient;
///
/// let client = HttpClient::new(&StashConfig::default());
/// assert_eq!(client.url(), "http://localhost:9999/graphql");
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Full endpoint URL (e.g., `http://localhost:9999/graphql`).
    url: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &StashConfig) -> Self {
        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().expect("Failed to create HTTP client");

        Self {
            client,
            url: config.graphql_url(),
            default_headers: build_default_headers(config),
        }
    }

    /// Returns the endpoint URL for this client.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// POSTs `body` as JSON to the endpoint, once.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - A network error occurs or the body cannot be read (`Network`)
    /// - The status code is anything but 200 (`Response`)
    pub async fn post_json(&self, body: &serde_json::Value) -> Result<HttpResponse, HttpError> {
        let mut req_builder = self.client.post(&self.url);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        let res = req_builder.body(body.to_string()).send().await?;

        let code = res.status().as_u16();
        let body_text = res.text().await?;

        HttpResponse::new(code, body_text).error_for_status()
    }
}

/// Builds the header set sent with every request.
///
/// The `ApiKey` header is only present when a key is configured.
pub(crate) fn build_default_headers(config: &StashConfig) -> HashMap<String, String> {
    let mut headers = HashMap::new();
    headers.insert(
        "Accept-Encoding".to_string(),
        "gzip, deflate, br".to_string(),
    );
    headers.insert("Content-Type".to_string(), "application/json".to_string());
    headers.insert("Accept".to_string(), "application/json".to_string());
    headers.insert("Connection".to_string(), "keep-alive".to_string());
    headers.insert("DNT".to_string(), "1".to_string());

    if let Some(api_key) = config.api_key() {
        headers.insert(API_KEY_HEADER.to_string(), api_key.as_ref().to_string());
    }
    headers
}
