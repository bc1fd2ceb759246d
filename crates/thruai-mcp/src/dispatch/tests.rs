// crates/thruai-mcp/src/dispatch/tests.rs
// ============================================================================
// Module: Dispatcher Unit Tests
// Description: Unit tests for envelope folding and validation gating.
// Purpose: Validate that every dispatched call yields a well-formed envelope
//          and that invalid arguments never reach a handler.
// Dependencies: serde_json, thruai-client, thruai-contract, tokio
// ============================================================================

//! ## Overview
//! Exercises the dispatch pipeline with stub handlers; no platform calls.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "Test-only panic-based assertions."
)]

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

use serde_json::Value;
use serde_json::json;
use thruai_client::ThruAiClient;
use thruai_contract::ToolContract;
use thruai_contract::defaulted;
use thruai_contract::object;
use thruai_contract::string;

use super::ContentBlock;
use super::DispatchError;
use super::Dispatcher;
use crate::audit::McpAuditEvent;
use crate::audit::McpAuditSink;
use crate::audit::McpOutcome;
use crate::audit::NoopAuditSink;
use crate::registry::ToolCallError;
use crate::registry::ToolContext;
use crate::registry::ToolRegistry;
use crate::registry::handler;

/// Audit sink that keeps every recorded event.
struct RecordingSink {
    /// Recorded events in order.
    events: Mutex<Vec<McpAuditEvent>>,
}

impl McpAuditSink for RecordingSink {
    fn record(&self, event: &McpAuditEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

/// Builds a context pointing at a closed port; no request is ever sent.
fn context() -> Arc<ToolContext> {
    Arc::new(ToolContext {
        client: ThruAiClient::new("sk_test_abc", "http://127.0.0.1:1").unwrap(),
    })
}

/// Extracts the single text block from an envelope.
fn envelope_text(envelope: &super::WireEnvelope) -> &str {
    let ContentBlock::Text {
        text,
    } = &envelope.content[0];
    text
}

#[tokio::test]
async fn handler_failure_folds_into_a_compact_failure_envelope() {
    let mut registry = ToolRegistry::new();
    registry
        .register(
            ToolContract {
                name: "explode",
                description: "always fails",
                input: object(vec![]),
            },
            handler(|_, _| async { Err(ToolCallError::Internal("boom".to_owned())) }),
        )
        .unwrap();
    let dispatcher = Dispatcher::new(registry, context(), Arc::new(NoopAuditSink));

    let envelope = dispatcher.call_tool("explode", &json!({})).await.unwrap();

    assert_eq!(envelope.is_error, Some(true));
    assert_eq!(envelope_text(&envelope), r#"{"success":false,"error":"boom"}"#);
}

#[tokio::test]
async fn invalid_arguments_never_reach_the_handler() {
    let invoked = Arc::new(AtomicBool::new(false));
    let seen = Arc::clone(&invoked);
    let mut registry = ToolRegistry::new();
    registry
        .register(
            ToolContract {
                name: "create",
                description: "requires a name",
                input: object(vec![("name", string())]),
            },
            handler(move |args, _| {
                seen.store(true, Ordering::SeqCst);
                async move { Ok(args) }
            }),
        )
        .unwrap();
    let dispatcher = Dispatcher::new(registry, context(), Arc::new(NoopAuditSink));

    let envelope = dispatcher.call_tool("create", &json!({})).await.unwrap();

    assert_eq!(envelope.is_error, Some(true));
    assert_eq!(
        envelope_text(&envelope),
        r#"{"success":false,"error":"Invalid input: name: missing"}"#
    );
    assert!(!invoked.load(Ordering::SeqCst));
}

#[tokio::test]
async fn unknown_keys_are_stripped_and_defaults_applied_before_the_handler() {
    let mut registry = ToolRegistry::new();
    registry
        .register(
            ToolContract {
                name: "echo",
                description: "echoes validated arguments",
                input: object(vec![
                    ("name", string()),
                    ("mode", defaulted(string(), json!("s2s"))),
                ]),
            },
            handler(|args, _| async move { Ok(args) }),
        )
        .unwrap();
    let dispatcher = Dispatcher::new(registry, context(), Arc::new(NoopAuditSink));

    let envelope = dispatcher
        .call_tool("echo", &json!({"name": "Support", "rogue": true}))
        .await
        .unwrap();

    assert!(envelope.is_error.is_none());
    let payload: Value = serde_json::from_str(envelope_text(&envelope)).unwrap();
    assert_eq!(payload, json!({"name": "Support", "mode": "s2s"}));
}

#[tokio::test]
async fn unknown_tool_escapes_to_the_error_path() {
    let dispatcher =
        Dispatcher::new(ToolRegistry::new(), context(), Arc::new(NoopAuditSink));

    let result = dispatcher.call_tool("missing", &json!({})).await;

    assert!(matches!(result, Err(DispatchError::UnknownTool(name)) if name == "missing"));
}

#[tokio::test]
async fn outcomes_are_audited() {
    let sink = Arc::new(RecordingSink {
        events: Mutex::new(Vec::new()),
    });
    let mut registry = ToolRegistry::new();
    registry
        .register(
            ToolContract {
                name: "echo",
                description: "echoes validated arguments",
                input: object(vec![]),
            },
            handler(|args, _| async move { Ok(args) }),
        )
        .unwrap();
    let dispatcher = Dispatcher::new(registry, context(), Arc::clone(&sink) as _);

    dispatcher.call_tool("echo", &json!({})).await.unwrap();
    let _ = dispatcher.call_tool("missing", &json!({})).await;

    let events = sink.events.lock().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].outcome, McpOutcome::Ok);
    assert_eq!(events[0].target.as_deref(), Some("echo"));
    assert_eq!(events[1].outcome, McpOutcome::NotFound);
}
