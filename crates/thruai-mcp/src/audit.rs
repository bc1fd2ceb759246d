// crates/thruai-mcp/src/audit.rs
// ============================================================================
// Module: MCP Audit Logging
// Description: Structured audit events for MCP request handling.
// Purpose: Emit JSON-line audit logs without a logging framework dependency.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! This module defines audit event payloads and sinks for MCP request
//! logging. Events go to stderr because stdout carries the protocol stream;
//! deployments can route them elsewhere by supplying their own sink.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;

// ============================================================================
// SECTION: Labels
// ============================================================================

/// JSON-RPC method classification for audit events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum McpMethod {
    /// `initialize` handshake.
    Initialize,
    /// `ping` liveness check.
    Ping,
    /// `tools/list` enumeration.
    ToolsList,
    /// `tools/call` invocation.
    ToolsCall,
    /// `resources/list` enumeration.
    ResourcesList,
    /// `resources/read` fetch.
    ResourcesRead,
    /// Any unrecognized method.
    Unknown,
}

/// Request outcome classification for audit events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum McpOutcome {
    /// The request completed and produced a result.
    Ok,
    /// Tool arguments failed contract validation.
    InvalidInput,
    /// The handler or a collaborator reported a failure.
    Failed,
    /// The named tool or resource is not registered.
    NotFound,
    /// The request was malformed at the protocol layer.
    Malformed,
    /// The method is not part of the served surface.
    UnknownMethod,
}

// ============================================================================
// SECTION: Events
// ============================================================================

/// MCP audit event payload.
#[derive(Debug, Clone, Serialize)]
pub struct McpAuditEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// JSON-RPC method classification.
    pub method: McpMethod,
    /// Tool name or resource URI when the request targets one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Request outcome.
    pub outcome: McpOutcome,
    /// Normalized error detail when the outcome is not `Ok`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl McpAuditEvent {
    /// Creates a new audit event with a consistent timestamp.
    #[must_use]
    pub fn new(method: McpMethod, target: Option<String>, outcome: McpOutcome) -> Self {
        let timestamp_ms =
            SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis();
        Self {
            event: "mcp_request",
            timestamp_ms,
            method,
            target,
            outcome,
            detail: None,
        }
    }

    /// Attaches a normalized error detail to the event.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

// ============================================================================
// SECTION: Sinks
// ============================================================================

/// Audit sink for MCP request events.
pub trait McpAuditSink: Send + Sync {
    /// Record an audit event.
    fn record(&self, event: &McpAuditEvent);
}

/// Audit sink that logs JSON lines to stderr.
pub struct StderrAuditSink;

impl McpAuditSink for StderrAuditSink {
    fn record(&self, event: &McpAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// No-op audit sink.
pub struct NoopAuditSink;

impl McpAuditSink for NoopAuditSink {
    fn record(&self, _event: &McpAuditEvent) {}
}

#[cfg(test)]
mod tests;
