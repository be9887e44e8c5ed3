//! End-to-end tests: configuration file to client to mock Stash server.
//!
//! These tests exercise the full path a caller takes, including log output
//! routed through a per-client dispatcher.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use serde_json::json;
use stash_client::{FindFilter, SortDirection, StashClient};
use tracing_subscriber::fmt::MakeWriter;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Collects formatted log output in memory.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture_logs() -> (tracing::Dispatch, LogBuffer) {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    (tracing::Dispatch::new(subscriber), buffer)
}

/// Writes a `[stash]` section pointing at the mock server.
fn config_file_for(server: &MockServer, api_key: &str) -> tempfile::NamedTempFile {
    let address = server.address();
    let mut file = tempfile::Builder::new().suffix(".ini").tempfile().unwrap();
    write!(
        file,
        "[stash]\nhost = {}\nport = {}\napi_key = {}\n",
        address.ip(),
        address.port(),
        api_key
    )
    .unwrap();
    file
}

// ============================================================================
// End-to-End
// ============================================================================

#[tokio::test]
async fn test_config_file_to_authenticated_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("ApiKey", "abc123"))
        .and(body_partial_json(json!({"variables": {"filter": {"per_page": 10000, "page": 1}}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"findPerformers": {"count": 1, "performers": [{"id": "1", "name": "A"}]}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let file = config_file_for(&server, "abc123");
    let client = StashClient::new(Some(file.path()));

    assert!(client.has_api_key());
    assert_eq!(
        client.get_performers(None).await,
        vec![json!({"id": "1", "name": "A"})]
    );
}

#[tokio::test]
async fn test_sorted_scene_query_with_overrides() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({
            "variables": {"filter": {
                "per_page": 50,
                "page": 1,
                "sort": "o_counter",
                "direction": "DESC"
            }}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"findScenes": {"count": 120, "scenes": [{"id": "9", "o_counter": 14}]}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let file = config_file_for(&server, "");
    let client = StashClient::new(Some(file.path()));
    let filter = FindFilter::new()
        .per_page(50)
        .sort("o_counter")
        .direction(SortDirection::Desc);

    let page = client.try_get_scenes(Some(&filter)).await.unwrap();

    assert_eq!(page.count, 120);
    assert_eq!(page.items, vec![json!({"id": "9", "o_counter": 14})]);
}

// ============================================================================
// Logging
// ============================================================================

#[tokio::test]
async fn test_status_failure_is_logged_with_code_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database is locked"))
        .mount(&server)
        .await;

    let (dispatch, logs) = capture_logs();
    let file = config_file_for(&server, "");
    let client = StashClient::new(Some(file.path())).with_dispatch(dispatch);

    assert!(client.get_scenes(None).await.is_empty());

    let output = logs.contents();
    assert!(output.contains("ERROR"), "log output: {output}");
    assert!(output.contains("500"), "log output: {output}");
    assert!(output.contains("database is locked"), "log output: {output}");
}

#[tokio::test]
async fn test_graphql_errors_are_logged() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [{"message": "Cannot query field \"bogus\""}]
        })))
        .mount(&server)
        .await;

    let (dispatch, logs) = capture_logs();
    let file = config_file_for(&server, "");
    let client = StashClient::new(Some(file.path())).with_dispatch(dispatch);

    assert_eq!(client.call_graphql("query { bogus }", None).await, None);

    let output = logs.contents();
    assert!(output.contains("GraphQL errors"), "log output: {output}");
    assert!(output.contains("bogus"), "log output: {output}");
}

#[tokio::test]
async fn test_successful_fetch_logs_summary() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"findPerformers": {"count": 3, "performers": [{"id": "1"}, {"id": "2"}]}}
        })))
        .mount(&server)
        .await;

    let (dispatch, logs) = capture_logs();
    let file = config_file_for(&server, "");
    let client = StashClient::new(Some(file.path())).with_dispatch(dispatch);

    assert_eq!(client.get_performers(None).await.len(), 2);

    let output = logs.contents();
    assert!(output.contains("Retrieved 2 of 3 performers"), "log output: {output}");
    assert!(!output.contains("ERROR"), "log output: {output}");
}

// ============================================================================
// Configuration Logging
// ============================================================================

#[test]
fn test_config_warnings_go_to_injected_dispatch() {
    let mut file = tempfile::Builder::new().suffix(".ini").tempfile().unwrap();
    writeln!(file, "[stash]\nhost = nas.local\nport = abc").unwrap();

    let (dispatch, logs) = capture_logs();
    let client = StashClient::new_with_dispatch(Some(file.path()), dispatch);

    assert_eq!(client.config().port(), 9999);
    assert_eq!(client.url(), "http://nas.local:9999/graphql");

    let output = logs.contents();
    assert!(output.contains("WARN"), "log output: {output}");
    assert!(
        output.contains("Ignoring invalid 'port' value 'abc'"),
        "log output: {output}"
    );
}

#[test]
fn test_config_resolution_is_reported_to_injected_dispatch() {
    let dir = tempfile::tempdir().unwrap();

    let (dispatch, logs) = capture_logs();
    let client = StashClient::new_with_dispatch(Some(dir.path()), dispatch);

    assert_eq!(client.url(), "http://localhost:9999/graphql");
    let output = logs.contents();
    assert!(
        output.contains("Resolved Stash configuration"),
        "log output: {output}"
    );
}
