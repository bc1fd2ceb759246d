// crates/thruai-mcp/src/dispatch.rs
// ============================================================================
// Module: Tool Dispatcher
// Description: Validates tool arguments and folds handler outcomes into
//              protocol envelopes.
// Purpose: Guarantee every dispatched call yields a well-formed envelope.
// Dependencies: thruai-contract, serde, serde_json
// ============================================================================

//! ## Overview
//! The dispatcher is the only path from a `tools/call` request to a handler.
//! Arguments are validated against the tool's contract before the handler
//! runs; validation failures and handler failures both fold into an
//! `isError` envelope carrying a `{"success":false,"error":…}` payload, so a
//! caller never sees a JSON-RPC error for a tool-level failure. Only an
//! unknown tool name escapes to the JSON-RPC error path.
//! Security posture: arguments are untrusted until validation strips unknown
//! keys and applies defaults.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use thruai_contract::ToolDefinition;
use thruai_contract::describe_failures;
use thruai_contract::validate;

use crate::audit::McpAuditEvent;
use crate::audit::McpAuditSink;
use crate::audit::McpMethod;
use crate::audit::McpOutcome;
use crate::registry::ToolContext;
use crate::registry::ToolRegistry;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Dispatch failure that escapes to the JSON-RPC error path.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The named tool is not registered.
    #[error("unknown tool: {0}")]
    UnknownTool(String),
}

// ============================================================================
// SECTION: Envelope
// ============================================================================

/// Protocol envelope returned for every completed tool call.
#[derive(Debug, Serialize)]
pub struct WireEnvelope {
    /// Ordered content blocks; always exactly one text block.
    pub content: Vec<ContentBlock>,
    /// Set to `true` when the payload describes a failure.
    #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

/// Content block inside a protocol envelope.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    /// Text block carrying serialized JSON.
    Text {
        /// Compact JSON payload.
        text: String,
    },
}

/// Failure payload; field order is part of the wire shape.
#[derive(Debug, Serialize)]
struct ToolFailure {
    /// Always `false`.
    success: bool,
    /// Human-readable failure description.
    error: String,
}

/// Builds a failure envelope around the given message.
fn failure_envelope(message: String) -> WireEnvelope {
    let payload = ToolFailure {
        success: false,
        error: message,
    };
    let text = serde_json::to_string(&payload).unwrap_or_else(|_| {
        r#"{"success":false,"error":"serialization failed"}"#.to_owned()
    });
    WireEnvelope {
        content: vec![ContentBlock::Text {
            text,
        }],
        is_error: Some(true),
    }
}

/// Builds a success envelope around the handler's payload.
fn success_envelope(payload: &Value) -> WireEnvelope {
    match serde_json::to_string(payload) {
        Ok(text) => WireEnvelope {
            content: vec![ContentBlock::Text {
                text,
            }],
            is_error: None,
        },
        Err(err) => failure_envelope(format!("serialization failed: {err}")),
    }
}

// ============================================================================
// SECTION: Dispatcher
// ============================================================================

/// Routes validated tool calls to their handlers.
pub struct Dispatcher {
    /// Served tool surface, immutable after startup.
    registry: ToolRegistry,
    /// Shared collaborators for handlers.
    context: Arc<ToolContext>,
    /// Audit sink for call outcomes.
    audit: Arc<dyn McpAuditSink>,
}

impl Dispatcher {
    /// Builds a dispatcher over a fixed registry.
    #[must_use]
    pub fn new(
        registry: ToolRegistry,
        context: Arc<ToolContext>,
        audit: Arc<dyn McpAuditSink>,
    ) -> Self {
        Self {
            registry,
            context,
            audit,
        }
    }

    /// Projects every registered contract into its listing definition.
    #[must_use]
    pub fn tool_definitions(&self) -> Vec<ToolDefinition> {
        self.registry.contracts().map(thruai_contract::ToolContract::definition).collect()
    }

    /// Dispatches one tool call.
    ///
    /// Validation and handler failures return a failure envelope; only an
    /// unknown tool name returns an error.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::UnknownTool`] when the name is unregistered.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: &Value,
    ) -> Result<WireEnvelope, DispatchError> {
        let Some(tool) = self.registry.lookup(name) else {
            self.audit.record(&McpAuditEvent::new(
                McpMethod::ToolsCall,
                Some(name.to_owned()),
                McpOutcome::NotFound,
            ));
            return Err(DispatchError::UnknownTool(name.to_owned()));
        };
        let validated = match validate(&tool.contract.input, arguments) {
            Ok(validated) => validated,
            Err(failures) => {
                let message = format!("Invalid input: {}", describe_failures(&failures));
                self.audit.record(
                    &McpAuditEvent::new(
                        McpMethod::ToolsCall,
                        Some(name.to_owned()),
                        McpOutcome::InvalidInput,
                    )
                    .with_detail(message.clone()),
                );
                return Ok(failure_envelope(message));
            }
        };
        match (tool.handler)(validated, Arc::clone(&self.context)).await {
            Ok(payload) => {
                self.audit.record(&McpAuditEvent::new(
                    McpMethod::ToolsCall,
                    Some(name.to_owned()),
                    McpOutcome::Ok,
                ));
                Ok(success_envelope(&payload))
            }
            Err(err) => {
                let message = err.to_string();
                self.audit.record(
                    &McpAuditEvent::new(
                        McpMethod::ToolsCall,
                        Some(name.to_owned()),
                        McpOutcome::Failed,
                    )
                    .with_detail(message.clone()),
                );
                Ok(failure_envelope(message))
            }
        }
    }
}

#[cfg(test)]
mod tests;
