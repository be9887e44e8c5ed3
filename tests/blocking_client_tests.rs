//! Integration tests for the blocking Stash client.
//!
//! The mock server needs a runtime, so each call is made from
//! `spawn_blocking`, where a blocking client may be created and dropped.
//! The unreachable-server tests run without any runtime at all.

use serde_json::{json, Value};
use stash_client::blocking::StashClient;
use stash_client::{ApiKey, FindFilter, StashConfig, StashError};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> StashConfig {
    StashConfig::builder()
        .no_config_file()
        .url(server.uri())
        .build()
        .unwrap()
}

/// Runs `f` against a blocking client on a thread that may block.
async fn with_blocking_client<T, F>(config: StashConfig, f: F) -> T
where
    T: Send + 'static,
    F: FnOnce(&StashClient) -> T + Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let client = StashClient::from_config(config);
        f(&client)
    })
    .await
    .unwrap()
}

async fn respond_with(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(template)
        .mount(server)
        .await;
}

async fn sent_body(server: &MockServer) -> Value {
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests[0].body_json::<Value>().unwrap()
}

fn unreachable_config() -> StashConfig {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    StashConfig::builder()
        .no_config_file()
        .host("127.0.0.1")
        .port(port)
        .build()
        .unwrap()
}

// ============================================================================
// Without a Runtime
// ============================================================================

#[test]
fn test_sync_caller_gets_none_for_unreachable_server() {
    let client = StashClient::from_config(unreachable_config());

    assert_eq!(client.call_graphql("{ ok }", None), None);
}

#[test]
fn test_sync_caller_gets_empty_lists_for_unreachable_server() {
    let client = StashClient::from_config(unreachable_config());

    assert!(client.get_performers(None).is_empty());
    assert!(client.get_scenes(Some(&FindFilter::new().page(3))).is_empty());
    assert!(matches!(
        client.try_get_performers(None),
        Err(StashError::Graphql(_))
    ));
}

// ============================================================================
// call_graphql
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_call_graphql_returns_data() {
    let server = MockServer::start().await;
    respond_with(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"data": {"version": {"version": "v0.27.2"}}})),
    )
    .await;

    let data = with_blocking_client(config_for(&server), |client| {
        client.call_graphql("query { version { version } }", None)
    })
    .await;

    assert_eq!(data, Some(json!({"version": {"version": "v0.27.2"}})));
    assert_eq!(
        sent_body(&server).await,
        json!({"query": "query { version { version } }"})
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_call_graphql_returns_none_on_graphql_errors() {
    let server = MockServer::start().await;
    respond_with(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "data": {"ok": true},
            "errors": [{"message": "boom"}]
        })),
    )
    .await;

    let data = with_blocking_client(config_for(&server), |client| {
        client.call_graphql("{ ok }", None)
    })
    .await;

    assert_eq!(data, None);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_call_graphql_returns_none_on_non_200_status() {
    let server = MockServer::start().await;
    respond_with(&server, ResponseTemplate::new(502).set_body_string("Bad Gateway")).await;

    let (sentinel, error) = with_blocking_client(config_for(&server), |client| {
        (
            client.call_graphql("{ ok }", None),
            client.try_call_graphql("{ ok }", None).unwrap_err().to_string(),
        )
    })
    .await;

    assert_eq!(sentinel, None);
    assert!(error.contains("502"));
    assert!(error.contains("Bad Gateway"));
}

// ============================================================================
// get_performers / get_scenes
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_get_performers_sends_default_filter_and_unwraps_list() {
    let server = MockServer::start().await;
    respond_with(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "data": {"findPerformers": {"count": 5, "performers": [{"id": "1"}, {"id": "2"}]}}
        })),
    )
    .await;

    let performers =
        with_blocking_client(config_for(&server), |client| client.get_performers(None)).await;

    assert_eq!(performers, vec![json!({"id": "1"}), json!({"id": "2"})]);
    assert_eq!(
        sent_body(&server).await["variables"],
        json!({"filter": {"per_page": 10000, "page": 1}})
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_scenes_applies_page_override() {
    let server = MockServer::start().await;
    respond_with(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "data": {"findScenes": {"count": 12, "scenes": [{"id": "11"}]}}
        })),
    )
    .await;

    let page = with_blocking_client(config_for(&server), |client| {
        client.try_get_scenes(Some(&FindFilter::new().page(2)))
    })
    .await
    .unwrap();

    assert_eq!(page.items, vec![json!({"id": "11"})]);
    assert_eq!(page.count, 12);
    assert_eq!(
        sent_body(&server).await["variables"],
        json!({"filter": {"per_page": 10000, "page": 2}})
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_scenes_returns_empty_on_unexpected_shape() {
    let server = MockServer::start().await;
    respond_with(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"data": {"findScenes": {"count": 1}}})),
    )
    .await;

    let scenes = with_blocking_client(config_for(&server), |client| client.get_scenes(None)).await;

    assert!(scenes.is_empty());
}

// ============================================================================
// Headers
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_api_key_header_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("ApiKey", "abc123"))
        .and(header("DNT", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"ok": true}})))
        .expect(1)
        .mount(&server)
        .await;

    let config = StashConfig::builder()
        .no_config_file()
        .url(server.uri())
        .api_key(ApiKey::new("abc123").unwrap())
        .build()
        .unwrap();

    let data = with_blocking_client(config, |client| client.call_graphql("{ ok }", None)).await;

    assert_eq!(data, Some(json!({"ok": true})));
}
