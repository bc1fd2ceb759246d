// crates/thruai-mcp/src/server/tests.rs
// ============================================================================
// Module: Server Unit Tests
// Description: Unit tests for framing and JSON-RPC method handling.
// Purpose: Validate frame parsing, error codes, and the served surface
//          without a live platform.
// Dependencies: serde_json, tokio
// ============================================================================

//! ## Overview
//! Exercises the framing helpers and `handle_frame` directly; handlers that
//! would reach the platform are covered by the integration suite.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "Test-only panic-based assertions."
)]

use std::sync::Arc;

use serde_json::Value;
use serde_json::json;
use tokio::io::BufReader;

use super::McpServer;
use super::read_framed;
use super::write_framed;
use crate::audit::NoopAuditSink;
use crate::config::ThruAiConfig;

/// Builds a server over a closed port; no platform request is ever sent.
fn server() -> McpServer {
    let config = ThruAiConfig::new("sk_test_abc", "http://127.0.0.1:1").unwrap();
    McpServer::from_config(&config, Arc::new(NoopAuditSink)).unwrap()
}

/// Runs one frame through the server and decodes the reply.
async fn roundtrip(server: &McpServer, frame: &str) -> Option<Value> {
    let response = server.handle_frame(frame.as_bytes()).await?;
    Some(serde_json::to_value(response).unwrap())
}

#[tokio::test]
async fn framing_round_trips_a_payload() {
    let payload = br#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#;
    let mut framed = Vec::new();
    write_framed(&mut framed, payload).await.unwrap();

    let mut reader = BufReader::new(&framed[..]);
    let first = read_framed(&mut reader).await.unwrap().unwrap();
    assert_eq!(first, payload);
    let second = read_framed(&mut reader).await.unwrap();
    assert!(second.is_none());
}

#[tokio::test]
async fn eof_mid_frame_is_a_transport_error() {
    let truncated = b"Content-Length: 10\r\n\r\n{\"a\"";
    let mut reader = BufReader::new(&truncated[..]);
    assert!(read_framed(&mut reader).await.is_err());
}

#[tokio::test]
async fn missing_content_length_is_a_transport_error() {
    let framed = b"X-Other: 1\r\n\r\n{}";
    let mut reader = BufReader::new(&framed[..]);
    assert!(read_framed(&mut reader).await.is_err());
}

#[tokio::test]
async fn oversized_frames_are_rejected_before_the_body_is_read() {
    let framed = b"Content-Length: 99999999\r\n\r\n";
    let mut reader = BufReader::new(&framed[..]);
    assert!(read_framed(&mut reader).await.is_err());
}

#[tokio::test]
async fn initialize_reports_protocol_version_and_capabilities() {
    let server = server();
    let reply = roundtrip(
        &server,
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#,
    )
    .await
    .unwrap();
    assert_eq!(reply["result"]["protocolVersion"], "2024-11-05");
    assert_eq!(reply["result"]["serverInfo"]["name"], "thruai-mcp-server");
    assert!(reply["result"]["capabilities"]["tools"].is_object());
    assert!(reply["result"]["capabilities"]["resources"].is_object());
}

#[tokio::test]
async fn tools_list_serves_the_full_surface() {
    let server = server();
    let reply = roundtrip(&server, r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#)
        .await
        .unwrap();
    let tools = reply["result"]["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 52);
    assert!(tools.iter().all(|tool| tool["inputSchema"]["type"] == "object"));
}

#[tokio::test]
async fn resources_list_serves_seven_entries() {
    let server = server();
    let reply = roundtrip(&server, r#"{"jsonrpc":"2.0","id":3,"method":"resources/list"}"#)
        .await
        .unwrap();
    let resources = reply["result"]["resources"].as_array().unwrap();
    assert_eq!(resources.len(), 7);
}

#[tokio::test]
async fn unknown_methods_get_method_not_found() {
    let server = server();
    let reply = roundtrip(&server, r#"{"jsonrpc":"2.0","id":4,"method":"shutdown"}"#)
        .await
        .unwrap();
    assert_eq!(reply["error"]["code"], -32601);
}

#[tokio::test]
async fn parse_errors_get_minus_32700() {
    let server = server();
    let reply = roundtrip(&server, "{not json").await.unwrap();
    assert_eq!(reply["error"]["code"], -32700);
    assert_eq!(reply["id"], Value::Null);
}

#[tokio::test]
async fn wrong_version_gets_invalid_request() {
    let server = server();
    let reply = roundtrip(&server, r#"{"jsonrpc":"1.0","id":5,"method":"ping"}"#)
        .await
        .unwrap();
    assert_eq!(reply["error"]["code"], -32600);
}

#[tokio::test]
async fn notifications_get_no_reply() {
    let server = server();
    let reply =
        roundtrip(&server, r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#).await;
    assert!(reply.is_none());
}

#[tokio::test]
async fn unknown_tool_names_get_invalid_params() {
    let server = server();
    let reply = roundtrip(
        &server,
        r#"{"jsonrpc":"2.0","id":6,"method":"tools/call","params":{"name":"nope","arguments":{}}}"#,
    )
    .await
    .unwrap();
    assert_eq!(reply["error"]["code"], -32602);
}

#[tokio::test]
async fn unknown_resource_uris_get_invalid_params() {
    let server = server();
    let reply = roundtrip(
        &server,
        r#"{"jsonrpc":"2.0","id":7,"method":"resources/read","params":{"uri":"thruai://nope"}}"#,
    )
    .await
    .unwrap();
    assert_eq!(reply["error"]["code"], -32602);
}

#[tokio::test]
async fn ping_returns_an_empty_result() {
    let server = server();
    let reply = roundtrip(&server, r#"{"jsonrpc":"2.0","id":8,"method":"ping"}"#)
        .await
        .unwrap();
    assert_eq!(reply["result"], json!({}));
}
