//! GraphQL-specific error types for the Stash client.
//!
//! - [`GraphqlError::Http`]: Wraps transport errors and non-200 responses
//! - [`GraphqlError::Decode`]: The body was not a JSON envelope
//! - [`GraphqlError::Response`]: The envelope carried a populated `errors` entry
//!
//! A response with a populated `errors` entry is a failure as a whole: any
//! `data` that came with it is discarded.

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for GraphQL operations.
///
/// # Example
///
/// ```rust
/// use stash_client::clients::graphql::GraphqlError;
/// use stash_client::clients::{HttpError, HttpResponseError};
///
/// let http_error = HttpError::Response(HttpResponseError {
///     code: 401,
///     body: "Unauthorized".to_string(),
/// });
/// let graphql_error: GraphqlError = http_error.into();
/// assert!(graphql_error.to_string().contains("Unauthorized"));
/// ```
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The response body was not valid JSON, or not a JSON object.
    #[error("Invalid JSON in GraphQL response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The server reported GraphQL errors.
    #[error("GraphQL errors: {errors}")]
    Response {
        /// The `errors` entry of the response, verbatim.
        errors: serde_json::Value,
    },
}
