//! High-level access to a Stash server.
//!
//! - [`StashClient`]: `call_graphql`, `get_performers`, `get_scenes` and
//!   their `try_*` counterparts
//! - [`FindFilter`]: Pagination filter with `{per_page: 10000, page: 1}` defaults
//! - [`StashError`]: Error type of the `try_*` methods
//! - [`queries`]: The GraphQL documents used by the find operations

mod client;
mod errors;
pub(crate) mod events;
mod filter;
pub(crate) mod find;
pub mod queries;

pub use client::{Performer, Scene, StashClient};
pub use errors::StashError;
pub use filter::{FindFilter, SortDirection, DEFAULT_PAGE, DEFAULT_PER_PAGE};
pub use find::FindResult;
