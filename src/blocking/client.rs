//! The blocking Stash API client.

use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;
use tracing::Dispatch;

use crate::blocking::HttpClient;
use crate::clients::{GraphqlClient, GraphqlEnvelope, GraphqlError};
use crate::config::StashConfig;
use crate::stash::events::ClientLog;
use crate::stash::find::{self, FindQuery, FIND_PERFORMERS, FIND_SCENES};
use crate::stash::{FindFilter, FindResult, Performer, Scene, StashError};

/// Blocking client for a Stash server's GraphQL API.
///
/// Every call issues a single POST and blocks the calling thread until it
/// completes or fails. No async runtime is needed. The sentinel methods
/// never panic or return an error for remote problems.
///
/// # Example
///
/// ```rust,no_run
/// use stash_client::blocking::StashClient;
///
/// let client = StashClient::new(None);
/// let scenes = client.get_scenes(None);
/// println!("{} scenes", scenes.len());
/// ```
#[derive(Debug)]
pub struct StashClient {
    config: StashConfig,
    http_client: HttpClient,
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
            http_client: HttpClient::new(&config),
            config,
            log,
        }
    }

    /// Creates a client from an already resolved configuration.
    #[must_use]
    pub fn from_config(config: StashConfig) -> Self {
        let http_client = HttpClient::new(&config);
        Self {
            config,
            http_client,
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
        self.http_client.url()
    }

    /// Returns `true` if requests carry an `ApiKey` header.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.config.api_key().is_some()
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, String> {
        self.http_client.default_headers()
    }

    /// Executes a GraphQL query and returns its `data`.
    ///
    /// Absent `data` is returned as [`Value::Null`].
    ///
    /// # Errors
    ///
    /// Returns [`StashError::Graphql`] for transport errors, statuses other
    /// than 200, malformed JSON, and responses carrying GraphQL errors.
    pub fn try_call_graphql(&self, query: &str, variables: Option<Value>) -> Result<Value, StashError> {
        self.log.request(self.url(), variables.as_ref());
        let body = GraphqlClient::request_body(query, variables);
        let data = self
            .http_client
            .post_json(&body)
            .map_err(GraphqlError::from)
            .and_then(|response| GraphqlEnvelope::decode(&response.body))?;
        Ok(data)
    }

    /// Executes a GraphQL query and returns its `data`, or `None` on any
    /// failure.
    pub fn call_graphql(&self, query: &str, variables: Option<Value>) -> Option<Value> {
        match self.try_call_graphql(query, variables) {
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
    /// # Errors
    ///
    /// Returns [`StashError`] if the request fails or the response lacks
    /// `findPerformers.performers`.
    pub fn try_get_performers(&self, filter: Option<&FindFilter>) -> Result<FindResult, StashError> {
        self.try_find(&FIND_PERFORMERS, filter)
    }

    /// Fetches one page of performers, or an empty `Vec` on any failure.
    pub fn get_performers(&self, filter: Option<&FindFilter>) -> Vec<Performer> {
        self.find_or_empty(&FIND_PERFORMERS, filter)
    }

    /// Fetches one page of scenes.
    ///
    /// # Errors
    ///
    /// Returns [`StashError`] if the request fails or the response lacks
    /// `findScenes.scenes`.
    pub fn try_get_scenes(&self, filter: Option<&FindFilter>) -> Result<FindResult, StashError> {
        self.try_find(&FIND_SCENES, filter)
    }

    /// Fetches one page of scenes, or an empty `Vec` on any failure.
    pub fn get_scenes(&self, filter: Option<&FindFilter>) -> Vec<Scene> {
        self.find_or_empty(&FIND_SCENES, filter)
    }

    fn try_find(&self, query: &FindQuery, filter: Option<&FindFilter>) -> Result<FindResult, StashError> {
        let data = self.try_call_graphql(query.document, Some(find::variables(filter)))?;
        find::unwrap_find_result(data, query)
    }

    fn find_or_empty(&self, query: &FindQuery, filter: Option<&FindFilter>) -> Vec<Value> {
        match self.try_find(query, filter) {
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
