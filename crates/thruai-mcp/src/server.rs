// crates/thruai-mcp/src/server.rs
// ============================================================================
// Module: MCP Server
// Description: MCP server over stdio with Content-Length framing.
// Purpose: Expose ThruAI tools and resources via JSON-RPC 2.0.
// Dependencies: thruai-client, serde, serde_json, tokio
// ============================================================================

//! ## Overview
//! The server reads framed JSON-RPC 2.0 requests from stdin and writes
//! framed responses to stdout; stderr carries audit events and startup
//! notices. Requests are served sequentially: the tool and resource
//! surfaces are immutable after startup, so there is no shared mutable
//! state to coordinate. Requests without an `id` are notifications and get
//! no reply. Security posture: frames arrive from an untrusted MCP client;
//! oversized or malformed frames never reach a handler.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use serde_json::json;
use thiserror::Error;
use thruai_client::ThruAiClient;
use tokio::io::AsyncBufRead;
use tokio::io::AsyncBufReadExt;
use tokio::io::AsyncReadExt;
use tokio::io::AsyncWrite;
use tokio::io::AsyncWriteExt;
use tokio::io::BufReader;

use crate::audit::McpAuditEvent;
use crate::audit::McpAuditSink;
use crate::audit::McpMethod;
use crate::audit::McpOutcome;
use crate::config::ThruAiConfig;
use crate::dispatch::DispatchError;
use crate::dispatch::Dispatcher;
use crate::registry::ToolContext;
use crate::resources::ResourceError;
use crate::resources::ResourceRegistry;
use crate::tools;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// MCP protocol version served by `initialize`.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Server name reported in `initialize`.
pub const SERVER_NAME: &str = "thruai-mcp-server";

/// Maximum accepted frame body size.
const MAX_FRAME_BYTES: usize = 4 * 1024 * 1024;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// MCP server errors.
#[derive(Debug, Error)]
pub enum McpServerError {
    /// Initialization failed before serving.
    #[error("init error: {0}")]
    Init(String),
    /// The stdio transport failed.
    #[error("transport error: {0}")]
    Transport(String),
}

// ============================================================================
// SECTION: JSON-RPC Frames
// ============================================================================

/// Incoming JSON-RPC request payload, tolerant of malformed shapes.
#[derive(Debug, Deserialize)]
struct JsonRpcRequest {
    /// JSON-RPC protocol version.
    #[serde(default)]
    jsonrpc: Option<String>,
    /// Request identifier; absent for notifications.
    #[serde(default)]
    id: Option<Value>,
    /// Method name.
    #[serde(default)]
    method: Option<String>,
    /// Optional parameters payload.
    #[serde(default)]
    params: Option<Value>,
}

/// JSON-RPC response envelope.
#[derive(Debug, Serialize)]
struct JsonRpcResponse {
    /// JSON-RPC protocol version.
    jsonrpc: &'static str,
    /// Request identifier.
    id: Value,
    /// Successful result payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Value>,
    /// Error payload when the request fails.
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonRpcError>,
}

/// JSON-RPC error payload.
#[derive(Debug, Serialize)]
struct JsonRpcError {
    /// Error code.
    code: i64,
    /// Human-readable error message.
    message: String,
}

/// Tool call parameters inside a tools/call request.
#[derive(Debug, Deserialize)]
struct ToolCallParams {
    /// Tool name.
    name: String,
    /// Raw JSON arguments; defaults to an empty object.
    #[serde(default = "empty_object")]
    arguments: Value,
}

/// Resource read parameters inside a resources/read request.
#[derive(Debug, Deserialize)]
struct ResourceReadParams {
    /// Resource URI.
    uri: String,
}

/// Default arguments payload when a call omits them.
fn empty_object() -> Value {
    json!({})
}

// ============================================================================
// SECTION: Server
// ============================================================================

/// MCP server instance.
pub struct McpServer {
    /// Tool dispatch pipeline.
    dispatcher: Dispatcher,
    /// Fixed resource surface.
    resources: ResourceRegistry,
    /// Audit sink for protocol-level outcomes.
    audit: Arc<dyn McpAuditSink>,
}

impl McpServer {
    /// Builds a server from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`McpServerError::Init`] when the platform client cannot be
    /// constructed or the tool surface fails to assemble.
    pub fn from_config(
        config: &ThruAiConfig,
        audit: Arc<dyn McpAuditSink>,
    ) -> Result<Self, McpServerError> {
        let client = ThruAiClient::new(config.api_key.clone(), config.base_url.clone())
            .map_err(|err| McpServerError::Init(err.to_string()))?;
        let context = Arc::new(ToolContext {
            client,
        });
        let registry =
            tools::register_all().map_err(|err| McpServerError::Init(err.to_string()))?;
        let dispatcher = Dispatcher::new(registry, Arc::clone(&context), Arc::clone(&audit));
        let resources = ResourceRegistry::new(context, Arc::clone(&audit));
        Ok(Self {
            dispatcher,
            resources,
            audit,
        })
    }

    /// Serves framed JSON-RPC requests over stdin/stdout until EOF.
    ///
    /// # Errors
    ///
    /// Returns [`McpServerError::Transport`] when the stdio transport fails.
    pub async fn serve_stdio(&self) -> Result<(), McpServerError> {
        let mut reader = BufReader::new(tokio::io::stdin());
        let mut writer = tokio::io::stdout();
        loop {
            let Some(frame) = read_framed(&mut reader).await? else {
                return Ok(());
            };
            if let Some(response) = self.handle_frame(&frame).await {
                let payload = serde_json::to_vec(&response).map_err(|err| {
                    McpServerError::Transport(format!("response serialization failed: {err}"))
                })?;
                write_framed(&mut writer, &payload).await?;
            }
        }
    }

    /// Handles one raw frame; returns `None` when no reply is owed.
    async fn handle_frame(&self, frame: &[u8]) -> Option<JsonRpcResponse> {
        let Ok(request) = serde_json::from_slice::<JsonRpcRequest>(frame) else {
            self.audit.record(
                &McpAuditEvent::new(McpMethod::Unknown, None, McpOutcome::Malformed)
                    .with_detail("parse error"),
            );
            return Some(error_response(Value::Null, -32700, "parse error"));
        };
        let id = request.id.clone();
        if request.jsonrpc.as_deref() != Some("2.0") || request.method.is_none() {
            self.audit.record(
                &McpAuditEvent::new(McpMethod::Unknown, None, McpOutcome::Malformed)
                    .with_detail("invalid request"),
            );
            return Some(error_response(id.unwrap_or(Value::Null), -32600, "invalid request"));
        }
        let method = request.method.as_deref().unwrap_or_default().to_owned();
        let response = self.handle_request(&method, request.params).await;
        match id {
            Some(id) => Some(finish_response(id, response)),
            // Notification: the work is done, the reply is dropped.
            None => None,
        }
    }

    /// Dispatches one identified request to its method handler.
    async fn handle_request(
        &self,
        method: &str,
        params: Option<Value>,
    ) -> Result<Value, JsonRpcError> {
        match method {
            "initialize" => Ok(json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": { "tools": {}, "resources": {} },
                "serverInfo": {
                    "name": SERVER_NAME,
                    "version": env!("CARGO_PKG_VERSION"),
                },
            })),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(json!({ "tools": self.dispatcher.tool_definitions() })),
            "tools/call" => self.handle_tool_call(params).await,
            "resources/list" => Ok(json!({ "resources": self.resources.descriptors() })),
            "resources/read" => self.handle_resource_read(params).await,
            _ => {
                self.audit.record(
                    &McpAuditEvent::new(McpMethod::Unknown, None, McpOutcome::UnknownMethod)
                        .with_detail(method.to_owned()),
                );
                Err(JsonRpcError {
                    code: -32601,
                    message: format!("method not found: {method}"),
                })
            }
        }
    }

    /// Handles a tools/call request.
    async fn handle_tool_call(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let params = params.unwrap_or(Value::Null);
        let call: ToolCallParams =
            serde_json::from_value(params).map_err(|_| JsonRpcError {
                code: -32602,
                message: "invalid tool params".to_owned(),
            })?;
        let envelope = self.dispatcher.call_tool(&call.name, &call.arguments).await.map_err(
            |DispatchError::UnknownTool(name)| JsonRpcError {
                code: -32602,
                message: format!("unknown tool: {name}"),
            },
        )?;
        serde_json::to_value(envelope).map_err(|err| JsonRpcError {
            code: -32603,
            message: format!("serialization failed: {err}"),
        })
    }

    /// Handles a resources/read request.
    async fn handle_resource_read(
        &self,
        params: Option<Value>,
    ) -> Result<Value, JsonRpcError> {
        let params = params.unwrap_or(Value::Null);
        let read: ResourceReadParams =
            serde_json::from_value(params).map_err(|_| JsonRpcError {
                code: -32602,
                message: "invalid resource params".to_owned(),
            })?;
        let content = self.resources.read(&read.uri).await.map_err(|err| match err {
            ResourceError::Unknown(uri) => JsonRpcError {
                code: -32602,
                message: format!("unknown resource: {uri}"),
            },
            ResourceError::Fetch(message) => JsonRpcError {
                code: -32603,
                message,
            },
        })?;
        Ok(json!({ "contents": [content] }))
    }
}

/// Folds a method outcome into a response envelope.
fn finish_response(id: Value, outcome: Result<Value, JsonRpcError>) -> JsonRpcResponse {
    match outcome {
        Ok(result) => JsonRpcResponse {
            jsonrpc: "2.0",
            id,
            result: Some(result),
            error: None,
        },
        Err(error) => JsonRpcResponse {
            jsonrpc: "2.0",
            id,
            result: None,
            error: Some(error),
        },
    }
}

/// Builds an error response.
fn error_response(id: Value, code: i64, message: &str) -> JsonRpcResponse {
    JsonRpcResponse {
        jsonrpc: "2.0",
        id,
        result: None,
        error: Some(JsonRpcError {
            code,
            message: message.to_owned(),
        }),
    }
}

// ============================================================================
// SECTION: Framing Helpers
// ============================================================================

/// Reads one framed payload; `None` means clean EOF before a frame began.
async fn read_framed<R: AsyncBufRead + Unpin>(
    reader: &mut R,
) -> Result<Option<Vec<u8>>, McpServerError> {
    let mut content_length: Option<usize> = None;
    let mut line = String::new();
    let mut saw_header = false;
    loop {
        line.clear();
        let bytes = reader
            .read_line(&mut line)
            .await
            .map_err(|err| McpServerError::Transport(format!("stdio read failed: {err}")))?;
        if bytes == 0 {
            if saw_header {
                return Err(McpServerError::Transport("stdio closed mid-frame".to_owned()));
            }
            return Ok(None);
        }
        saw_header = true;
        if line.trim().is_empty() {
            break;
        }
        if let Some(value) = line.strip_prefix("Content-Length:") {
            let parsed = value.trim().parse::<usize>().map_err(|_| {
                McpServerError::Transport("invalid content length".to_owned())
            })?;
            content_length = Some(parsed);
        }
    }
    let len = content_length
        .ok_or_else(|| McpServerError::Transport("missing content length".to_owned()))?;
    if len > MAX_FRAME_BYTES {
        return Err(McpServerError::Transport("payload too large".to_owned()));
    }
    let mut buf = vec![0u8; len];
    reader
        .read_exact(&mut buf)
        .await
        .map_err(|err| McpServerError::Transport(format!("stdio read failed: {err}")))?;
    Ok(Some(buf))
}

/// Writes one framed payload.
async fn write_framed(
    writer: &mut (impl AsyncWrite + Unpin),
    payload: &[u8],
) -> Result<(), McpServerError> {
    let header = format!("Content-Length: {}\r\n\r\n", payload.len());
    writer
        .write_all(header.as_bytes())
        .await
        .map_err(|err| McpServerError::Transport(format!("stdio write failed: {err}")))?;
    writer
        .write_all(payload)
        .await
        .map_err(|err| McpServerError::Transport(format!("stdio write failed: {err}")))?;
    writer
        .flush()
        .await
        .map_err(|err| McpServerError::Transport(format!("stdio write failed: {err}")))
}

#[cfg(test)]
mod tests;
