//! Blocking HTTP client for Stash API communication.

use std::collections::HashMap;

use crate::clients::{build_default_headers, HttpError, HttpResponse};
use crate::config::StashConfig;

/// Blocking counterpart of [`clients::HttpClient`](crate::clients::HttpClient).
///
/// Sends the same headers to the same endpoint, makes a single attempt per
/// request and blocks the calling thread until the response body is read.
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::blocking::Client,
    url: String,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new blocking HTTP client for the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created, or if it
    /// is created or dropped inside an async runtime.
    #[must_use]
    pub fn new(config: &StashConfig) -> Self {
        let mut builder = reqwest::blocking::Client::builder().use_rustls_tls();
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

    /// POSTs `body` as JSON to the endpoint, once, and waits for the answer.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - A network error occurs or the body cannot be read (`Network`)
    /// - The status code is anything but 200 (`Response`)
    pub fn post_json(&self, body: &serde_json::Value) -> Result<HttpResponse, HttpError> {
        let mut req_builder = self.client.post(&self.url);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        let res = req_builder.body(body.to_string()).send()?;

        let code = res.status().as_u16();
        let body_text = res.text()?;

        HttpResponse::new(code, body_text).error_for_status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocking_client_shares_header_set() {
        let config = StashConfig::default();
        let client = HttpClient::new(&config);

        assert_eq!(client.url(), "http://localhost:9999/graphql");
        assert_eq!(client.default_headers(), &build_default_headers(&config));
        assert_eq!(client.default_headers().len(), 5);
    }

    #[test]
    fn test_connection_refused_is_a_network_error() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let config = StashConfig::builder()
            .no_config_file()
            .host("127.0.0.1")
            .port(port)
            .build()
            .unwrap();

        let result = HttpClient::new(&config).post_json(&serde_json::json!({}));

        assert!(matches!(result, Err(HttpError::Network(_))));
    }
}
