//! HTTP-specific error types for the Stash client.
//!
//! - [`HttpResponseError`]: The server answered with a status other than 200
//! - [`HttpError`]: Unified error type for everything that can go wrong on
//!   the wire
//!
//! # Example
//!
//! ```rust,ignore
//! use stash_client::clients::{HttpClient, HttpError};
//!
//! match client.post_json(&body).await {
//!     Ok(response) => println!("Body: {}", response.body),
//!     Err(HttpError::Response(e)) => println!("Status {}: {}", e.code, e.body),
//!     Err(HttpError::Network(e)) => println!("Network error: {}", e),
//! }
//! ```

use thiserror::Error;

/// Error returned when the server answers with a status other than 200.
///
/// The raw response body is kept verbatim for logging.
///
/// # Example
///
/// ```rust
/// use stash_client::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 401,
///     body: "Unauthorized".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "HTTP 401: Unauthorized");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("HTTP {code}: {body}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub body: String,
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The server answered with a status other than 200.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Connection, DNS, timeout, or body read error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
