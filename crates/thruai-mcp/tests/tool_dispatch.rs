// crates/thruai-mcp/tests/tool_dispatch.rs
// ============================================================================
// Module: Tool Dispatch Integration Tests
// Description: End-to-end tool calls against a mock platform endpoint.
// Purpose: Validate that dispatched tools reach the platform with the right
//          request shape and fold outcomes into protocol envelopes.
// Dependencies: serde_json, thruai-client, tiny_http, tokio
// ============================================================================

//! ## Overview
//! Each test stands up a one-shot HTTP listener standing in for the
//! platform, drives a tool call through the dispatcher, and asserts both
//! sides: the captured platform request and the returned envelope.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "Test-only panic-based assertions."
)]

use std::sync::Arc;
use std::thread;

use serde_json::Value;
use serde_json::json;
use thruai_client::ThruAiClient;
use thruai_mcp::ContentBlock;
use thruai_mcp::Dispatcher;
use thruai_mcp::NoopAuditSink;
use thruai_mcp::ResourceRegistry;
use thruai_mcp::ToolContext;
use thruai_mcp::tools::register_all;

/// One platform request captured by the mock listener.
struct CapturedRequest {
    /// Request path and query.
    url: String,
    /// Request body, when any.
    body: String,
}

/// Serves exactly one request, capturing it and answering with `body`.
fn serve_once(body: &'static str) -> (String, thread::JoinHandle<CapturedRequest>) {
    let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
    let port = server.server_addr().to_ip().unwrap().port();
    let base_url = format!("http://127.0.0.1:{port}");
    let handle = thread::spawn(move || {
        let mut request = server.recv().unwrap();
        let url = request.url().to_owned();
        let mut captured_body = String::new();
        request.as_reader().read_to_string(&mut captured_body).unwrap();
        let response = tiny_http::Response::from_string(body).with_header(
            tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                .unwrap(),
        );
        request.respond(response).unwrap();
        CapturedRequest {
            url,
            body: captured_body,
        }
    });
    (base_url, handle)
}

/// Builds a dispatcher over the full tool surface against `base_url`.
fn dispatcher(base_url: &str) -> Dispatcher {
    let context = Arc::new(ToolContext {
        client: ThruAiClient::new("sk_test_abc", base_url).unwrap(),
    });
    Dispatcher::new(register_all().unwrap(), context, Arc::new(NoopAuditSink))
}

/// Extracts the single text payload from an envelope.
fn envelope_text(content: &[ContentBlock]) -> &str {
    match content {
        [ContentBlock::Text { text }] => text,
        other => panic!("expected one text block, got {}", other.len()),
    }
}

#[tokio::test]
async fn create_agent_injects_the_s2s_defaults_and_reports_the_new_id() {
    let (base_url, handle) = serve_once(
        r#"{"success":true,"data":{"id":"AGT-1","name":"Sales"}}"#,
    );
    let envelope = dispatcher(&base_url)
        .call_tool("create_agent", &json!({ "name": "Sales" }))
        .await
        .unwrap();
    let captured = handle.join().unwrap();

    assert_eq!(captured.url, "/api/v1/public/agents");
    let sent: Value = serde_json::from_str(&captured.body).unwrap();
    assert_eq!(
        sent,
        json!({
            "name": "Sales",
            "pipelineMode": "s2s",
            "s2sProvider": "openai-realtime",
            "s2sModel": "gpt-4o-realtime-preview-2024-12-17",
            "s2sVoice": "alloy",
        })
    );

    assert!(envelope.is_error.is_none());
    let payload: Value = serde_json::from_str(envelope_text(&envelope.content)).unwrap();
    assert_eq!(payload["success"], true);
    assert_eq!(payload["agent"]["id"], "AGT-1");
    assert_eq!(
        payload["message"],
        "Agent \"Sales\" created successfully! ID: AGT-1"
    );
    assert_eq!(payload["nextSteps"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn list_agents_passes_the_defaulted_paging_and_formats_the_page_count() {
    let (base_url, handle) = serve_once(
        r#"{"success":true,"data":{"agents":[{"id":"AGT-1"}],"pagination":{"page":1,"pageSize":50,"total":120}}}"#,
    );
    let envelope = dispatcher(&base_url)
        .call_tool("list_agents", &json!({}))
        .await
        .unwrap();
    let captured = handle.join().unwrap();

    assert_eq!(captured.url, "/api/v1/public/agents?page=1&pageSize=50");
    let payload: Value = serde_json::from_str(envelope_text(&envelope.content)).unwrap();
    assert_eq!(payload["message"], "Found 1 agent(s) (page 1 of 3)");
    assert_eq!(payload["pagination"]["total"], 120);
}

#[tokio::test]
async fn a_platform_business_failure_folds_into_a_failure_envelope() {
    let (base_url, handle) = serve_once(
        r#"{"success":false,"error":{"message":"not found"}}"#,
    );
    let envelope = dispatcher(&base_url)
        .call_tool("get_agent", &json!({ "agentId": "AGT-404" }))
        .await
        .unwrap();
    handle.join().unwrap();

    assert_eq!(envelope.is_error, Some(true));
    assert_eq!(
        envelope_text(&envelope.content),
        r#"{"success":false,"error":"not found"}"#
    );
}

#[tokio::test]
async fn invalid_input_never_reaches_the_platform() {
    // Closed port: any platform request would fail the test differently.
    let envelope = dispatcher("http://127.0.0.1:1")
        .call_tool("create_agent", &json!({}))
        .await
        .unwrap();
    assert_eq!(envelope.is_error, Some(true));
    assert_eq!(
        envelope_text(&envelope.content),
        r#"{"success":false,"error":"Invalid input: name: missing"}"#
    );
}

#[tokio::test]
async fn quickstart_reports_a_partial_outcome_when_provisioning_failed() {
    let (base_url, handle) = serve_once(
        r#"{"success":true,"data":{"agent":{"id":"AGT-9"},"error":{"message":"no numbers in 999"}}}"#,
    );
    let envelope = dispatcher(&base_url)
        .call_tool("quickstart", &json!({ "name": "Intake", "areaCode": "999" }))
        .await
        .unwrap();
    handle.join().unwrap();

    // The handler completed, so this is a success envelope carrying a
    // business-level failure payload.
    assert!(envelope.is_error.is_none());
    let payload: Value = serde_json::from_str(envelope_text(&envelope.content)).unwrap();
    assert_eq!(payload["success"], false);
    assert_eq!(payload["agent"]["id"], "AGT-9");
    assert_eq!(payload["error"]["message"], "no numbers in 999");
    assert!(
        payload["message"]
            .as_str()
            .unwrap()
            .starts_with("Agent created but phone provisioning failed: no numbers in 999")
    );
}

#[tokio::test]
async fn resources_read_serves_pretty_printed_platform_data() {
    let (base_url, handle) = serve_once(
        r#"{"success":true,"data":{"llm":[{"id":"openai"}],"tts":[],"stt":[]}}"#,
    );
    let context = Arc::new(ToolContext {
        client: ThruAiClient::new("sk_test_abc", &base_url).unwrap(),
    });
    let resources = ResourceRegistry::new(context, Arc::new(NoopAuditSink));
    let content = resources.read("thruai://providers").await.unwrap();
    handle.join().unwrap();

    assert_eq!(content.uri, "thruai://providers");
    assert_eq!(content.mime_type, "application/json");
    // Pretty-printed JSON spans multiple lines.
    assert!(content.text.contains('\n'));
    let decoded: Value = serde_json::from_str(&content.text).unwrap();
    assert_eq!(decoded["llm"][0]["id"], "openai");
}
