// crates/thruai-client/tests/api_client.rs
// ============================================================================
// Module: API Client Integration Tests
// Description: End-to-end request tests against a local mock platform.
// Purpose: Validate URL construction, headers, query assembly, body
//          serialization, and envelope decoding over a real HTTP exchange.
// Dependencies: serde_json, thruai-client, tiny_http, tokio
// ============================================================================

//! ## Overview
//! Each test spins up a one-shot `tiny_http` server, points a client at it,
//! and asserts both sides of the exchange: what the client sent on the wire
//! and what it decoded from the canned response.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "Test-only panic-based assertions."
)]

use std::thread;

use serde_json::json;
use thruai_client::CreateAgentRequest;
use thruai_client::ThruAiClient;
use thruai_client::USER_AGENT;

// ============================================================================
// SECTION: Mock Platform
// ============================================================================

/// What the mock platform observed on the wire.
struct CapturedRequest {
    /// HTTP method.
    method: String,
    /// Path plus query string.
    url: String,
    /// `Authorization` header value, if sent.
    authorization: Option<String>,
    /// `User-Agent` header value, if sent.
    user_agent: Option<String>,
    /// Raw request body.
    body: String,
}

/// Serves exactly one request, replying with the given status and body.
///
/// Returns the base URL to point a client at and a handle yielding the
/// captured request once the exchange completes.
fn serve_once(
    status: u16,
    response_body: &'static str,
) -> (String, thread::JoinHandle<CapturedRequest>) {
    let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
    let port = server.server_addr().to_ip().unwrap().port();
    let handle = thread::spawn(move || {
        let mut request = server.recv().unwrap();
        let mut body = String::new();
        request.as_reader().read_to_string(&mut body).unwrap();
        let captured = CapturedRequest {
            method: request.method().to_string(),
            url: request.url().to_owned(),
            authorization: header_value(&request, "authorization"),
            user_agent: header_value(&request, "user-agent"),
            body,
        };
        let response = tiny_http::Response::from_string(response_body)
            .with_status_code(status)
            .with_header(
                tiny_http::Header::from_bytes(
                    &b"Content-Type"[..],
                    &b"application/json"[..],
                )
                .unwrap(),
            );
        request.respond(response).unwrap();
        captured
    });
    (format!("http://127.0.0.1:{port}"), handle)
}

/// Extracts a request header by case-insensitive name.
fn header_value(request: &tiny_http::Request, name: &'static str) -> Option<String> {
    request
        .headers()
        .iter()
        .find(|header| header.field.equiv(name))
        .map(|header| header.value.as_str().to_owned())
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[tokio::test]
async fn list_agents_sends_credentials_and_decodes_the_envelope() {
    let (base_url, platform) = serve_once(
        200,
        r#"{"success":true,"data":{"agents":[{"id":"ag_1","name":"Support"}],"pagination":{"page":2,"pageSize":10,"total":12}}}"#,
    );
    let client = ThruAiClient::new("sk_test_abc", &base_url).unwrap();

    let listing = client.list_agents(Some(2), Some(10)).await.unwrap();
    let captured = platform.join().unwrap();

    assert_eq!(captured.method, "GET");
    assert_eq!(captured.url, "/api/v1/public/agents?page=2&pageSize=10");
    assert_eq!(captured.authorization.as_deref(), Some("Bearer sk_test_abc"));
    assert_eq!(captured.user_agent.as_deref(), Some(USER_AGENT));
    assert_eq!(listing.agents.len(), 1);
    let pagination = listing.pagination.unwrap();
    assert_eq!(pagination.page, 2);
    assert_eq!(pagination.total, 12);
}

#[tokio::test]
async fn business_failure_surfaces_the_remote_message() {
    let (base_url, platform) = serve_once(
        200,
        r#"{"success":false,"error":{"message":"not found"}}"#,
    );
    let client = ThruAiClient::new("sk_test_abc", &base_url).unwrap();

    let error = client.get_agent("ag_missing").await.unwrap_err();
    let captured = platform.join().unwrap();

    assert_eq!(captured.url, "/api/v1/public/agents/ag_missing");
    assert_eq!(error.to_string(), "not found");
}

#[tokio::test]
async fn non_2xx_without_details_falls_back_to_the_status_line() {
    let (base_url, platform) = serve_once(500, r#"{"success":false,"data":null}"#);
    let client = ThruAiClient::new("sk_test_abc", &base_url).unwrap();

    let error = client.get_agent("ag_1").await.unwrap_err();
    platform.join().unwrap();

    assert_eq!(
        error.to_string(),
        "API request failed: 500 Internal Server Error"
    );
}

#[tokio::test]
async fn create_agent_omits_absent_optional_fields() {
    let (base_url, platform) = serve_once(
        200,
        r#"{"success":true,"data":{"id":"ag_2","name":"Sales"}}"#,
    );
    let client = ThruAiClient::new("sk_test_abc", &base_url).unwrap();

    let request = CreateAgentRequest {
        name: "Sales".to_owned(),
        system_prompt: None,
        description: None,
        pipeline_mode: Some("s2s".to_owned()),
        s2s_provider: Some("openai-realtime".to_owned()),
        s2s_model: Some("gpt-4o-realtime-preview-2024-12-17".to_owned()),
        s2s_voice: None,
    };
    let created = client.create_agent(&request).await.unwrap();
    let captured = platform.join().unwrap();

    assert_eq!(captured.method, "POST");
    assert_eq!(captured.url, "/api/v1/public/agents");
    let sent: serde_json::Value = serde_json::from_str(&captured.body).unwrap();
    assert_eq!(
        sent,
        json!({
            "name": "Sales",
            "pipelineMode": "s2s",
            "s2sProvider": "openai-realtime",
            "s2sModel": "gpt-4o-realtime-preview-2024-12-17",
        })
    );
    assert_eq!(created["id"], "ag_2");
}

#[tokio::test]
async fn quickstart_decodes_the_partial_failure_branch() {
    let (base_url, platform) = serve_once(
        200,
        r#"{"success":true,"data":{"agent":{"id":"ag_3","name":"Greeter"},"error":{"message":"no numbers available in area code 415"}}}"#,
    );
    let client = ThruAiClient::new("sk_test_abc", &base_url).unwrap();

    let request = thruai_client::QuickstartRequest {
        name: "Greeter".to_owned(),
        system_prompt: None,
        area_code: Some("415".to_owned()),
        voice: Some("alloy".to_owned()),
        model: Some("gpt-realtime".to_owned()),
    };
    let outcome = client.quickstart(&request).await.unwrap();
    platform.join().unwrap();

    assert_eq!(outcome.agent["id"], "ag_3");
    assert!(outcome.phone_number.is_none());
    let failure = outcome.error.unwrap();
    assert_eq!(failure.message, "no numbers available in area code 415");
}
