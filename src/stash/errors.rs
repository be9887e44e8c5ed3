//! Error type for Stash client operations.

use crate::clients::graphql::GraphqlError;
use thiserror::Error;

/// Error type returned by the `try_*` methods of
/// [`StashClient`](crate::StashClient).
///
/// The sentinel methods (`call_graphql`, `get_performers`, `get_scenes`) log
/// these errors and return `None` or an empty `Vec` instead.
#[derive(Debug, Error)]
pub enum StashError {
    /// The GraphQL request failed.
    #[error(transparent)]
    Graphql(#[from] GraphqlError),

    /// The response did not contain the expected field.
    #[error("Missing field '{path}' in Stash response")]
    MissingField {
        /// Dotted path of the missing field, e.g. `findPerformers.performers`.
        path: String,
    },
}
