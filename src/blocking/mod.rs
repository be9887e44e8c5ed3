//! A blocking Stash client.
//!
//! The types here mirror the async ones at the crate root, but each call
//! blocks the current thread until the single POST completes. They do not
//! need a Tokio runtime and must not be used inside one.
//!
//! - [`StashClient`]: `call_graphql`, `get_performers`, `get_scenes` and
//!   their `try_*` counterparts
//! - [`HttpClient`]: The blocking transport underneath
//!
//! # Example
//!
//! ```rust,no_run
//! use stash_client::blocking::StashClient;
//! use stash_client::FindFilter;
//!
//! let client = StashClient::new(None);
//! let first_page = client.get_performers(Some(&FindFilter::new().per_page(100)));
//! ```

mod client;
mod http_client;

pub use client::StashClient;
pub use http_client::HttpClient;
