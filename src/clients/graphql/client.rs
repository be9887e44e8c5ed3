//! GraphQL client implementation for the Stash API.
//!
//! This module provides the [`GraphqlClient`] type for executing GraphQL
//! queries against a Stash server.

use serde_json::Value;

use crate::clients::graphql::{GraphqlEnvelope, GraphqlError};
use crate::clients::HttpClient;
use crate::config::StashConfig;

/// GraphQL client for the Stash API.
///
/// Sends `{query, variables?}` bodies and interprets the response envelope.
/// It does not log; callers decide how to report errors.
///
/// # Thread Safety
///
/// `GraphqlClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use stash_client::StashConfig;
/// use stash_client::clients::GraphqlClient;
///
/// let client = GraphqlClient::new(&StashConfig::default());
/// let data = client.query("query { version { version } }", None).await?;
/// println!("Stash {}", data["version"]["version"]);
/// ```
#[derive(Debug)]
pub struct GraphqlClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient {
    /// Creates a new GraphQL client for the given configuration.
    #[must_use]
    pub fn new(config: &StashConfig) -> Self {
        Self {
            http_client: HttpClient::new(config),
        }
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Builds the JSON request body.
    ///
    /// `variables` is omitted entirely when `None`, rather than sent as `null`.
    #[must_use]
    pub fn request_body(query: &str, variables: Option<Value>) -> Value {
        let mut body = serde_json::json!({ "query": query });
        if let Some(variables) = variables {
            body["variables"] = variables;
        }
        body
    }

    /// Executes a GraphQL query, returning the `data` entry of the response.
    ///
    /// A response without `data` yields [`Value::Null`].
    ///
    /// # Errors
    ///
    /// - [`GraphqlError::Http`] for network errors and statuses other than 200
    /// - [`GraphqlError::Decode`] if the body is not a JSON object
    /// - [`GraphqlError::Response`] if the response carries GraphQL errors,
    ///   even when partial `data` is present
    pub async fn query(&self, query: &str, variables: Option<Value>) -> Result<Value, GraphqlError> {
        let body = Self::request_body(query, variables);
        let response = self.http_client.post_json(&body).await?;
        GraphqlEnvelope::decode(&response.body)
    }
}
