// crates/thruai-mcp/src/tools/custom_tools.rs
// ============================================================================
// Module: Custom Tool Tools
// Description: Webhook-backed custom tool management.
// Purpose: Expose CRUD and test invocations for the custom tools agents call
//          during live conversations.
// Dependencies: thruai-client, thruai-contract, serde, serde_json
// ============================================================================

//! ## Overview
//! Custom tools are invoked BY agents mid-conversation, unlike webhooks
//! which notify after events. `test_tool` mirrors the platform's success
//! flag and reports the endpoint's error text when the test failed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;
use serde_json::json;
use thruai_client::CreateToolRequest;
use thruai_client::UpdateToolRequest;
use thruai_contract::ToolContract;
use thruai_contract::any;
use thruai_contract::defaulted;
use thruai_contract::map;
use thruai_contract::number;
use thruai_contract::object;
use thruai_contract::optional;
use thruai_contract::string;
use thruai_contract::string_min;

use crate::registry::RegistryError;
use crate::registry::ToolCallError;
use crate::registry::ToolContext;
use crate::registry::ToolRegistry;
use crate::registry::decode_args;
use crate::registry::handler;
use crate::tools::display_field;
use crate::tools::found_message;
use crate::tools::listing_payload;
use crate::tools::to_payload;

// ============================================================================
// SECTION: Registration
// ============================================================================

/// Registers the custom tool tools.
pub(crate) fn register(registry: &mut ToolRegistry) -> Result<(), RegistryError> {
    registry.register(
        ToolContract {
            name: "list_tools",
            description: "List all custom webhook-based tools that agents can call during live voice conversations.",
            input: object(vec![
                (
                    "page",
                    defaulted(number().describe("Page number for pagination"), json!(1)),
                ),
                (
                    "pageSize",
                    defaulted(number().describe("Number of tools per page"), json!(50)),
                ),
            ]),
        },
        handler(list_tools),
    )?;
    registry.register(
        ToolContract {
            name: "get_tool",
            description: "Get detailed information about a specific custom tool.",
            input: object(vec![(
                "toolId",
                string().describe("ID of the tool to retrieve (format: TOOL-xxxxx)"),
            )]),
        },
        handler(get_tool),
    )?;
    registry.register(
        ToolContract {
            name: "create_tool",
            description: "Create a custom webhook-based tool that agents can invoke in real-time during calls. Unlike webhooks (post-event notifications), tools are called BY the agent during conversations.",
            input: object(vec![
                (
                    "name",
                    string_min(1).describe("Name of the tool (used by agent for invocation)"),
                ),
                (
                    "description",
                    optional(string().describe("Description of what the tool does")),
                ),
                (
                    "url",
                    string().describe("HTTPS URL endpoint to call when tool is invoked"),
                ),
                (
                    "parameters",
                    optional(map(any()).describe("JSON schema defining tool parameters")),
                ),
                (
                    "secret",
                    optional(string().describe("Secret for HMAC signature verification")),
                ),
                (
                    "headers",
                    optional(map(string()).describe("Custom headers to send with requests")),
                ),
                (
                    "timeout",
                    optional(number().describe("Request timeout in seconds (1-30)")),
                ),
            ]),
        },
        handler(create_tool),
    )?;
    registry.register(
        ToolContract {
            name: "update_tool",
            description: "Update a custom tool's configuration. Tool name cannot be changed.",
            input: object(vec![
                (
                    "toolId",
                    string().describe("ID of the tool to update (format: TOOL-xxxxx)"),
                ),
                ("description", optional(string().describe("New description"))),
                ("url", optional(string().describe("New URL"))),
                (
                    "parameters",
                    optional(map(any()).describe("New parameter schema")),
                ),
                ("secret", optional(string().describe("New secret"))),
                ("headers", optional(map(string()).describe("New headers"))),
                ("timeout", optional(number().describe("New timeout (1-30 seconds)"))),
            ]),
        },
        handler(update_tool),
    )?;
    registry.register(
        ToolContract {
            name: "delete_tool",
            description: "Delete a custom tool. Returns warnings if agents still reference it.",
            input: object(vec![(
                "toolId",
                string().describe("ID of the tool to delete (format: TOOL-xxxxx)"),
            )]),
        },
        handler(delete_tool),
    )?;
    registry.register(
        ToolContract {
            name: "test_tool",
            description: "Test a custom tool by sending a sample request to its webhook URL.",
            input: object(vec![
                (
                    "toolId",
                    string().describe("ID of the tool to test (format: TOOL-xxxxx)"),
                ),
                (
                    "testPayload",
                    optional(map(any()).describe("Test payload to send to the tool")),
                ),
            ]),
        },
        handler(test_tool),
    )
}

// ============================================================================
// SECTION: Inputs
// ============================================================================

/// Validated arguments for `list_tools`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListToolsInput {
    /// 1-based page number.
    page: u64,
    /// Entries per page.
    page_size: u64,
}

/// Validated arguments for single-tool tools.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ToolIdInput {
    /// Tool identifier.
    tool_id: String,
}

/// Validated arguments for `create_tool`.
#[derive(Debug, Deserialize)]
struct CreateToolInput {
    /// Tool name agents use for invocation.
    name: String,
    /// Short summary of the tool's behavior.
    description: Option<String>,
    /// HTTPS endpoint invoked when the tool is called.
    url: String,
    /// JSON schema of the tool's parameters.
    parameters: Option<Map<String, Value>>,
    /// Secret for HMAC signature verification.
    secret: Option<String>,
    /// Custom headers sent with each invocation.
    headers: Option<Map<String, Value>>,
    /// Request timeout in seconds.
    timeout: Option<f64>,
}

/// Validated arguments for `update_tool`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateToolInput {
    /// Tool identifier.
    tool_id: String,
    /// New description.
    description: Option<String>,
    /// New endpoint URL.
    url: Option<String>,
    /// New parameter schema.
    parameters: Option<Map<String, Value>>,
    /// New secret.
    secret: Option<String>,
    /// New headers.
    headers: Option<Map<String, Value>>,
    /// New timeout in seconds.
    timeout: Option<f64>,
}

/// Validated arguments for `test_tool`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TestToolInput {
    /// Tool identifier.
    tool_id: String,
    /// Optional payload sent to the endpoint.
    test_payload: Option<Map<String, Value>>,
}

// ============================================================================
// SECTION: Responses
// ============================================================================

/// Response shape for `test_tool`; absent fields are omitted, not null.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TestToolResponse {
    /// Whether the endpoint responded successfully.
    success: bool,
    /// HTTP status when the endpoint was reachable.
    #[serde(skip_serializing_if = "Option::is_none")]
    status_code: Option<u64>,
    /// Response body returned by the endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    response: Option<Value>,
    /// Round-trip time in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    response_time: Option<f64>,
    /// Endpoint error text, or a success summary.
    message: String,
}

// ============================================================================
// SECTION: Handlers
// ============================================================================

/// Lists custom tools.
async fn list_tools(arguments: Value, context: Arc<ToolContext>) -> Result<Value, ToolCallError> {
    let input: ListToolsInput = decode_args(arguments)?;
    let listing = context
        .client
        .list_tools(Some(input.page), Some(input.page_size))
        .await?;
    let message = found_message(listing.tools.len(), "custom tool");
    listing_payload("tools", listing.tools, listing.pagination, message)
}

/// Fetches one custom tool.
async fn get_tool(arguments: Value, context: Arc<ToolContext>) -> Result<Value, ToolCallError> {
    let input: ToolIdInput = decode_args(arguments)?;
    let tool = context.client.get_tool(&input.tool_id).await?;
    Ok(json!({
        "success": true,
        "tool": tool,
        "message": format!("Retrieved tool {}", input.tool_id),
    }))
}

/// Creates a custom tool.
async fn create_tool(arguments: Value, context: Arc<ToolContext>) -> Result<Value, ToolCallError> {
    let input: CreateToolInput = decode_args(arguments)?;
    let request = CreateToolRequest {
        name: input.name.clone(),
        description: input.description,
        url: input.url,
        parameters: input.parameters,
        secret: input.secret,
        headers: input.headers,
        timeout: input.timeout,
    };
    let tool = context.client.create_tool(&request).await?;
    let id = display_field(&tool, "id");
    Ok(json!({
        "success": true,
        "tool": tool,
        "message": format!(
            "Tool \"{name}\" created! ID: {id}\n\nNext steps:\n1. Attach to agent: update_agent with enabledTools: [\"{name}\"]\n2. Agent can now call this tool during conversations\n3. Test with test_tool",
            name = input.name,
        ),
    }))
}

/// Updates a custom tool's configuration.
async fn update_tool(arguments: Value, context: Arc<ToolContext>) -> Result<Value, ToolCallError> {
    let input: UpdateToolInput = decode_args(arguments)?;
    let request = UpdateToolRequest {
        description: input.description,
        url: input.url,
        parameters: input.parameters,
        secret: input.secret,
        headers: input.headers,
        timeout: input.timeout,
    };
    let tool = context.client.update_tool(&input.tool_id, &request).await?;
    Ok(json!({
        "success": true,
        "tool": tool,
        "message": format!("Tool {} updated successfully!", input.tool_id),
    }))
}

/// Deletes a custom tool, surfacing dangling-reference warnings.
async fn delete_tool(arguments: Value, context: Arc<ToolContext>) -> Result<Value, ToolCallError> {
    let input: ToolIdInput = decode_args(arguments)?;
    let receipt = context.client.delete_tool(&input.tool_id).await?;
    let mut payload = Map::new();
    payload.insert("success".to_owned(), Value::Bool(true));
    payload.insert("message".to_owned(), Value::String(receipt.message));
    if let Some(warnings) = receipt.warnings {
        payload.insert("warnings".to_owned(), to_payload(&warnings)?);
    }
    Ok(Value::Object(payload))
}

/// Tests a custom tool against its endpoint.
async fn test_tool(arguments: Value, context: Arc<ToolContext>) -> Result<Value, ToolCallError> {
    let input: TestToolInput = decode_args(arguments)?;
    let result = context.client.test_tool(&input.tool_id, input.test_payload).await?;
    let message = result.error.clone().unwrap_or_else(|| {
        format!(
            "Tool responded successfully in {}ms",
            result.response_time.unwrap_or(0.0),
        )
    });
    to_payload(&TestToolResponse {
        success: result.success,
        status_code: result.status_code,
        response: result.response,
        response_time: result.response_time,
        message,
    })
}
