// crates/thruai-mcp/src/audit/tests.rs
// ============================================================================
// Module: Audit Unit Tests
// Description: Unit tests for audit event serialization.
// Purpose: Validate the JSON-line shape consumed by log pipelines.
// Dependencies: serde_json, thruai-mcp
// ============================================================================

//! ## Overview
//! Exercises the serialized shape of audit events.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "Test-only panic-based assertions."
)]

use super::McpAuditEvent;
use super::McpMethod;
use super::McpOutcome;

#[test]
fn tool_call_event_serializes_with_snake_case_labels() {
    let event = McpAuditEvent::new(
        McpMethod::ToolsCall,
        Some("create_agent".to_owned()),
        McpOutcome::Ok,
    );
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["event"], "mcp_request");
    assert_eq!(value["method"], "tools_call");
    assert_eq!(value["target"], "create_agent");
    assert_eq!(value["outcome"], "ok");
    assert!(value.get("detail").is_none());
}

#[test]
fn detail_appears_only_when_attached() {
    let event = McpAuditEvent::new(
        McpMethod::ResourcesRead,
        Some("thruai://agents".to_owned()),
        McpOutcome::Failed,
    )
    .with_detail("not found");
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["outcome"], "failed");
    assert_eq!(value["detail"], "not found");
}
