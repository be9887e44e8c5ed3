//! The Stash API client.
//!
//! [`StashClient`] is the entry point for callers. It offers two flavours of
//! every operation:
//!
//! - `call_graphql`, `get_performers`, `get_scenes` never fail. Remote
//!   problems are logged and collapse to `None` or an empty `Vec`.
//! - `try_call_graphql`, `try_get_performers`, `try_get_scenes` return a
//!   [`StashError`] instead, so "no results" and "request failed" can be
//!   told apart.

use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;
use tracing::Dispatch;

use crate::clients::GraphqlClient;
use crate::config::StashConfig;
use crate::stash::events::ClientLog;
use crate::stash::find::{self, FindQuery, FIND_PERFORMERS, FIND_SCENES};
use crate::stash::{FindFilter, FindResult, StashError};

/// A performer record, returned verbatim from the server.
pub type Performer = Value;

/// A scene record, returned verbatim from the server.
pub type Scene = Value;

/// Async client for a Stash server's GraphQL API.
///
/// Callers without a Tokio runtime should use
/// [`blocking::StashClient`](crate::blocking::StashClient), which has the
/// same methods and failure behavior.
///
/// # Logging
///
/// The client logs through `tracing`. By default events go to whatever
/// subscriber the application has installed. Use
/// [`new_with_dispatch`](Self::new_with_dispatch) or
/// [`with_dispatch`](Self::with_dispatch) to route this client's events to
/// a specific subscriber instead.
///
/// # Thread Safety
///
/// `StashClient` is `Send + Sync` and holds no mutable state, so a single
/// instance can be shared across tasks.
///
/// # Example
///
/// ```rust,ignore
/// use stash_client::{FindFilter, StashClient};
///
/// // Reads config/configuration.ini next to the executable, if present
/// let client = StashClient::new(None);
///
/// let performers = client.get_performers(None).await;
/// let favourites = client
///     .get_scenes(Some(&FindFilter::new().sort("o_counter")))
///     .await;
/// ```
#[derive(Debug)]
pub struct StashClient {
    config: StashConfig,
    graphql: GraphqlClient,
    log: ClientLog,
}

// Verify StashClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StashClient>();
};

impl StashClient {
    /// Creates a client from the configuration file at `config_path`, or
    /// from the default location when `None`.
    ///
    /// Never fails: a missing or incomplete file falls back to
    /// `localhost:9999` without an API key.
    #[must_use]
    pub fn new(config_path: Option<&Path>) -> Self {
        Self::from_config(StashConfig::load(config_path))
    }

    /// Like [`new`](Self::new), but every log event, including warnings
    /// about the configuration file, goes to `dispatch`.
    #[must_use]
    pub fn new_with_dispatch(config_path: Option<&Path>, dispatch: Dispatch) -> Self {
        let log = ClientLog::new(Some(dispatch));
        let config = log.emit(|| StashConfig::load(config_path));
        Self {
            graphql: GraphqlClient::new(&config),
            config,
            log,
        }
    }

    /// Creates a client from an already resolved configuration.
    #[must_use]
    pub fn from_config(config: StashConfig) -> Self {
        let graphql = GraphqlClient::new(&config);
        Self {
            config,
            graphql,
            log: ClientLog::default(),
        }
    }

    /// Routes this client's log events to `dispatch`.
    #[must_use]
    pub fn with_dispatch(mut self, dispatch: Dispatch) -> Self {
        self.log = ClientLog::new(Some(dispatch));
        self
    }

    /// Returns the resolved configuration.
    #[must_use]
    pub const fn config(&self) -> &StashConfig {
        &self.config
    }

    /// Returns the GraphQL endpoint URL.
    #[must_use]
    pub fn url(&self) -> &str {
        self.graphql.http_client().url()
    }

    /// Returns `true` if requests carry an `ApiKey` header.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.config.api_key().is_some()
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, String> {
        self.graphql.http_client().default_headers()
    }

    /// Executes a GraphQL query and returns its `data`.
    ///
    /// Absent `data` is returned as [`Value::Null`].
    ///
    /// # Errors
    ///
    /// Returns [`StashError::Graphql`] for transport errors, statuses other
    /// than 200, malformed JSON, and responses carrying GraphQL errors.
    pub async fn try_call_graphql(
        &self,
        query: &str,
        variables: Option<Value>,
    ) -> Result<Value, StashError> {
        self.log.request(self.url(), variables.as_ref());
        Ok(self.graphql.query(query, variables).await?)
    }

    /// Executes a GraphQL query and returns its `data`, or `None` on any
    /// failure.
    ///
    /// Failures are logged at `error` level. `None` is also returned when the
    /// response has no `data`.
    pub async fn call_graphql(&self, query: &str, variables: Option<Value>) -> Option<Value> {
        match self.try_call_graphql(query, variables).await {
            Ok(Value::Null) => None,
            Ok(data) => Some(data),
            Err(e) => {
                self.log.failure("GraphQL query", &e);
                None
            }
        }
    }

    /// Fetches one page of performers.
    ///
    /// `filter` overrides are applied on top of `{per_page: 10000, page: 1}`.
    ///
    /// # Errors
    ///
    /// Returns [`StashError`] if the request fails or the response lacks
    /// `findPerformers.performers`.
    pub async fn try_get_performers(
        &self,
        filter: Option<&FindFilter>,
    ) -> Result<FindResult, StashError> {
        self.try_find(&FIND_PERFORMERS, filter).await
    }

    /// Fetches one page of performers, or an empty `Vec` on any failure.
    pub async fn get_performers(&self, filter: Option<&FindFilter>) -> Vec<Performer> {
        self.find_or_empty(&FIND_PERFORMERS, filter).await
    }

    /// Fetches one page of scenes.
    ///
    /// `filter` overrides are applied on top of `{per_page: 10000, page: 1}`.
    ///
    /// # Errors
    ///
    /// Returns [`StashError`] if the request fails or the response lacks
    /// `findScenes.scenes`.
    pub async fn try_get_scenes(
        &self,
        filter: Option<&FindFilter>,
    ) -> Result<FindResult, StashError> {
        self.try_find(&FIND_SCENES, filter).await
    }

    /// Fetches one page of scenes, or an empty `Vec` on any failure.
    pub async fn get_scenes(&self, filter: Option<&FindFilter>) -> Vec<Scene> {
        self.find_or_empty(&FIND_SCENES, filter).await
    }

    async fn try_find(
        &self,
        query: &FindQuery,
        filter: Option<&FindFilter>,
    ) -> Result<FindResult, StashError> {
        let data = self
            .try_call_graphql(query.document, Some(find::variables(filter)))
            .await?;
        find::unwrap_find_result(data, query)
    }

    async fn find_or_empty(&self, query: &FindQuery, filter: Option<&FindFilter>) -> Vec<Value> {
        match self.try_find(query, filter).await {
            Ok(result) => {
                self.log.retrieved(query, &result);
                result.items
            }
            Err(e) => {
                self.log.failure(query.root, &e);
                Vec::new()
            }
        }
    }
}
