//! Log events shared by the async and blocking Stash clients.
//!
//! Every event is emitted through an optional per-client [`Dispatch`]. When
//! none is set, events go to the application's default subscriber.

use serde_json::Value;
use tracing::Dispatch;

use crate::clients::{GraphqlError, HttpError};
use crate::stash::find::FindQuery;
use crate::stash::{FindResult, StashError};

#[derive(Clone, Debug, Default)]
pub(crate) struct ClientLog {
    dispatch: Option<Dispatch>,
}

impl ClientLog {
    pub(crate) const fn new(dispatch: Option<Dispatch>) -> Self {
        Self { dispatch }
    }

    /// Runs `f` with this log's dispatcher as the default, if one is set.
    pub(crate) fn emit<T>(&self, f: impl FnOnce() -> T) -> T {
        match &self.dispatch {
            Some(dispatch) => tracing::dispatcher::with_default(dispatch, f),
            None => f(),
        }
    }

    pub(crate) fn request(&self, url: &str, variables: Option<&Value>) {
        self.emit(|| tracing::debug!("POST {} (variables: {:?})", url, variables));
    }

    pub(crate) fn retrieved(&self, find: &FindQuery, result: &FindResult) {
        self.emit(|| {
            tracing::info!(
                "Retrieved {} of {} {}",
                result.items.len(),
                result.count,
                find.list
            );
        });
    }

    pub(crate) fn failure(&self, operation: &str, error: &StashError) {
        self.emit(|| match error {
            StashError::Graphql(GraphqlError::Http(HttpError::Response(response))) => {
                tracing::error!(
                    "{} failed with status code {}: {}",
                    operation,
                    response.code,
                    response.body
                );
            }
            StashError::Graphql(GraphqlError::Response { errors }) => {
                tracing::error!("{} returned GraphQL errors: {}", operation, errors);
            }
            _ => tracing::error!("Error calling Stash GraphQL API ({}): {}", operation, error),
        });
    }
}
