//! # Stash Client
//!
//! A Rust client for the GraphQL API of a [Stash](https://stashapp.cc) media
//! server. It fetches performer and scene records for downstream analytics
//! (statistics, recommendations, dashboards, notifications).
//!
//! ## Overview
//!
//! This crate provides:
//! - Connection configuration via [`StashConfig`], resolved from explicit
//!   values, an INI file (`[stash]` section), and defaults
//! - A GraphQL client that interprets the `{data, errors}` response envelope
//! - [`StashClient`] with `get_performers` / `get_scenes` using a default
//!   pagination filter of `{per_page: 10000, page: 1}`
//! - [`blocking::StashClient`], the same calls as a plain synchronous POST
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stash_client::StashClient;
//!
//! // Reads config/configuration.ini next to the executable, if present,
//! // and falls back to localhost:9999 without an API key otherwise.
//! let client = StashClient::new(None);
//!
//! let performers = client.get_performers(None).await;
//! println!("{} performers", performers.len());
//! ```
//!
//! Without an async runtime, use the blocking client:
//!
//! ```rust,no_run
//! let client = stash_client::blocking::StashClient::new(None);
//! let scenes = client.get_scenes(None);
//! ```
//!
//! ## Configuration File
//!
//! ```ini
//! [stash]
//! host = localhost
//! port = 9999
//! api_key =
//! ```
//!
//! Every key is optional. A missing file or section is not an error.
//!
//! ## Error Handling
//!
//! The plain methods never fail for remote problems: transport errors,
//! non-200 statuses, malformed JSON and GraphQL errors are logged and
//! collapse to `None` (for [`StashClient::call_graphql`]) or an empty `Vec`
//! (for [`StashClient::get_performers`] and [`StashClient::get_scenes`]).
//!
//! The `try_*` methods return a [`StashError`] instead:
//!
//! ```rust,ignore
//! use stash_client::{StashClient, StashError};
//!
//! let client = StashClient::new(None);
//! match client.try_get_scenes(None).await {
//!     Ok(page) => println!("{} of {} scenes", page.items.len(), page.count),
//!     Err(e) => eprintln!("Stash unavailable: {e}"),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based; log events can be
//!   routed per client with [`StashClient::with_dispatch`]
//! - **Single attempt**: No retries, no backoff
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async or blocking**: [`StashClient`] is async (Tokio);
//!   [`blocking::StashClient`] has the same methods and blocks the caller
//!   instead

pub mod blocking;
pub mod clients;
pub mod config;
pub mod error;
pub mod stash;

// Re-export public types at crate root for convenience
pub use config::{ApiKey, StashConfig, StashConfigBuilder, StashUrl};
pub use error::ConfigError;

pub use clients::{
    GraphqlClient, GraphqlEnvelope, GraphqlError, HttpClient, HttpError, HttpResponse,
    HttpResponseError,
};

pub use stash::{
    FindFilter, FindResult, Performer, Scene, SortDirection, StashClient, StashError,
};
