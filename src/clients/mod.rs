//! Transport types for Stash API communication.
//!
//! This module provides the layers underneath [`StashClient`](crate::StashClient):
//!
//! - [`HttpClient`]: POSTs JSON to the GraphQL endpoint with the fixed header set
//! - [`HttpResponse`]: A raw response (status and body text)
//! - [`HttpError`]: Transport errors and non-200 responses
//! - [`graphql::GraphqlClient`]: Request body construction and envelope handling
//! - [`graphql::GraphqlError`]: GraphQL-specific error types
//!
//! # Example
//!
//! ```rust,ignore
//! use stash_client::StashConfig;
//! use stash_client::clients::GraphqlClient;
//!
//! let client = GraphqlClient::new(&StashConfig::load(None));
//! let data = client.query("query { version { version } }", None).await?;
//! ```
//!
//! # Retry Behavior
//!
//! None. Each call makes a single attempt and reports the outcome.

mod errors;
pub mod graphql;
mod http_client;
mod http_response;

pub use errors::{HttpError, HttpResponseError};
pub(crate) use http_client::build_default_headers;
pub use http_client::{HttpClient, API_KEY_HEADER};
pub use http_response::HttpResponse;

pub use graphql::{GraphqlClient, GraphqlEnvelope, GraphqlError};
