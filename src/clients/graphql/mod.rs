//! GraphQL layer of the Stash client.
//!
//! This module provides a GraphQL client built on top of the
//! [`HttpClient`](crate::clients::HttpClient) and the envelope type used to
//! interpret responses.
//!
//! # Overview
//!
//! - [`GraphqlClient`]: Executes a query and returns the `data` entry
//! - [`GraphqlEnvelope`]: The decoded `{data, errors}` response structure
//! - [`GraphqlError`]: Error type for GraphQL operations
//!
//! # Response Structure
//!
//! Stash answers GraphQL requests with HTTP 200 and a body containing:
//!
//! - `data`: The query result
//! - `errors`: Any GraphQL errors (still HTTP 200)
//!
//! A populated `errors` entry turns the whole response into a
//! [`GraphqlError::Response`]; partial `data` is not returned.
//!
//! # Retry Behavior
//!
//! Every query is attempted exactly once.

mod client;
mod envelope;
mod errors;

pub use client::GraphqlClient;
pub use envelope::GraphqlEnvelope;
pub use errors::GraphqlError;
