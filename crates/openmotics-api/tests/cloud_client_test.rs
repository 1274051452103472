#![allow(clippy::unwrap_used)]
// Integration tests for `OpenMoticsCloud` using wiremock.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use openmotics_api::{Error, OpenMoticsCloud, ResponseBody, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, OpenMoticsCloud) {
    let server = MockServer::start().await;
    let client = OpenMoticsCloud::with_base_url(
        "test_token".to_string().into(),
        server.uri(),
        &TransportConfig::default(),
    );
    (server, client)
}

// ── Request surface tests ───────────────────────────────────────────

#[tokio::test]
async fn test_get_parses_json_and_sends_bearer_auth() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/test"))
        .and(header("Authorization", "Bearer test_token"))
        .and(header("Accept", "application/json"))
        .and(header("User-Agent", client.user_agent()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"key": "value"})))
        .expect(1)
        .mount(&server)
        .await;

    let body = client.get("/test").await.unwrap();
    assert_eq!(body, ResponseBody::Json(json!({"key": "value"})));
}

#[tokio::test]
async fn test_get_with_params_appends_the_query() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/test"))
        .and(query_param("param", "value"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"key": "value"})))
        .expect(1)
        .mount(&server)
        .await;

    client.get_with_params("/test", &[("param", "value")]).await.unwrap();
}

#[tokio::test]
async fn test_post_sends_the_json_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/test"))
        .and(body_partial_json(json!({"data": "test"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"key": "value"})))
        .expect(1)
        .mount(&server)
        .await;

    let body = client.post("/test", Some(&json!({"data": "test"}))).await.unwrap();
    assert_eq!(body, ResponseBody::Json(json!({"key": "value"})));
}

#[tokio::test]
async fn test_non_json_body_is_returned_as_text() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/test"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Invalid JSON"))
        .mount(&server)
        .await;

    let body = client.get("/test").await.unwrap();
    assert_eq!(body, ResponseBody::Text("Invalid JSON".into()));
}

// ── Error classification tests ──────────────────────────────────────

#[tokio::test]
async fn test_not_found_is_a_connection_error_with_status() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/test"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .expect(3)
        .mount(&server)
        .await;

    match client.get("/test").await {
        Err(Error::Connection { status, message }) => {
            assert_eq!(status, Some(404));
            assert!(message.contains("Not Found"), "message: {message}");
        }
        other => panic!("expected Connection error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_is_a_connection_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/test"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Server Error"))
        .mount(&server)
        .await;

    let result = client.get("/test").await;
    assert!(
        matches!(result, Err(Error::Connection { status: Some(500), .. })),
        "expected Connection error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_forbidden_is_an_authentication_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/test"))
        .respond_with(ResponseTemplate::new(403))
        .expect(1)
        .mount(&server)
        .await;

    let result = client.get("/test").await;
    assert!(
        matches!(result, Err(Error::Authentication { .. })),
        "expected Authentication error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_timeout_surfaces_as_connection_timeout() {
    let server = MockServer::start().await;
    let transport = TransportConfig::default().with_timeout(Duration::from_millis(100));
    let client = OpenMoticsCloud::with_base_url(
        "test_token".to_string().into(),
        server.uri(),
        &transport,
    );

    Mock::given(method("GET"))
        .and(path("/test"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(2)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = client.get("/test").await;
    assert!(
        matches!(result, Err(Error::ConnectionTimeout { .. })),
        "expected ConnectionTimeout error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_transient_failure_is_retried_to_success() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/test"))
        .respond_with(ResponseTemplate::new(502))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    client.get("/test").await.unwrap();
}

// ── Installation scoping tests ──────────────────────────────────────

#[tokio::test]
async fn test_outputs_path_reflects_the_selected_installation() {
    let (server, client) = setup().await;
    client.set_installation_id(123);

    Mock::given(method("GET"))
        .and(path("/base/installations/123/outputs"))
        .and(query_param("filter", r#"{"usage":"CONTROL"}"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": 5,
                "local_id": 5,
                "name": "Kitchen",
                "capabilities": ["ON_OFF"],
                "location": {"room_id": 2},
                "status": {"on": true, "value": 100},
            }],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let outputs = client.outputs().get_all(None).await.unwrap();

    assert_eq!(outputs.len(), 1);
    assert_eq!(outputs[0].idx, 5);
    assert_eq!(outputs[0].name, "Kitchen");
    assert_eq!(outputs[0].location.as_ref().unwrap().room_id, 2);
    assert!(outputs[0].status.as_ref().unwrap().on);
}

#[tokio::test]
async fn test_accessors_require_an_installation() {
    let (_server, client) = setup().await;

    let result = client.outputs().get_all(None).await;
    assert!(
        matches!(result, Err(Error::MissingInstallation)),
        "expected MissingInstallation error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_installations_list_decodes_the_envelope() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/base/installations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": 1,
                "name": "Home",
                "gateway_model": "openmotics",
                "_acl": {"view": {"allowed": true}},
                "_version": 1.0,
                "network": {"local_ip_address": "172.16.1.25"},
            }],
        })))
        .mount(&server)
        .await;

    let installations = client.installations().get_all().await.unwrap();

    assert_eq!(installations.len(), 1);
    assert_eq!(installations[0].idx, 1);
    assert_eq!(installations[0].name, "Home");
    assert_eq!(
        installations[0]
            .network
            .as_ref()
            .unwrap()
            .local_ip_address
            .as_deref(),
        Some("172.16.1.25")
    );
}

#[tokio::test]
async fn test_ventilation_units_decode() {
    let (server, client) = setup().await;
    client.set_installation_id(1);

    Mock::given(method("GET"))
        .and(path("/base/installations/1/ventilations/units"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": 1,
                "name": "Unit 1",
                "status": {"state": "ON", "mode": "AUTO"},
                "local_id": 101,
            }],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let units = client.ventilations().get_all().await.unwrap();

    assert_eq!(units.len(), 1);
    assert_eq!(units[0].idx, 1);
    assert_eq!(units[0].name, "Unit 1");
    assert_eq!(units[0].local_id, 101);
    assert_eq!(
        units[0].status.as_ref().unwrap().state.as_deref(),
        Some("ON")
    );
}

#[tokio::test]
async fn test_output_toggle_hits_the_command_path() {
    let (server, client) = setup().await;
    client.set_installation_id(123);

    Mock::given(method("POST"))
        .and(path("/base/installations/123/outputs/5/toggle"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    client.outputs().toggle(5).await.unwrap();
}

#[tokio::test]
async fn test_turn_off_without_id_targets_all_outputs() {
    let (server, client) = setup().await;
    client.set_installation_id(123);

    Mock::given(method("POST"))
        .and(path("/base/installations/123/outputs/turn_off"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    client.outputs().turn_off(None).await.unwrap();
}

#[tokio::test]
async fn test_energy_sensors_are_an_empty_parity_stub() {
    let (_server, client) = setup().await;
    client.set_installation_id(123);

    let sensors = client.energysensors().get_all().await.unwrap();
    assert!(sensors.is_empty());
}

// ── Webhook tests ───────────────────────────────────────────────────

#[tokio::test]
async fn test_webhook_subscribe_posts_to_ws_events() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/ws/events"))
        .and(body_partial_json(json!({
            "installation_ids": [123],
            "types": ["OUTPUT_CHANGE"],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    client
        .subscribe_webhook(&[123], &["OUTPUT_CHANGE"])
        .await
        .unwrap();
}

#[tokio::test]
async fn test_webhook_unsubscribe_deletes_ws_events() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/ws/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    client.unsubscribe_webhook().await.unwrap();
}
