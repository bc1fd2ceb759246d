// crates/thruai-mcp/src/tools/calls.rs
// ============================================================================
// Module: Call Tools
// Description: Outbound call initiation and call history tools.
// Purpose: Expose call placement, listing with filters, and transcript
//          retrieval over the tool surface.
// Dependencies: thruai-client, thruai-contract, serde, serde_json
// ============================================================================

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use serde_json::json;
use thruai_client::OutboundCallRequest;
use thruai_contract::ToolContract;
use thruai_contract::defaulted;
use thruai_contract::number;
use thruai_contract::object;
use thruai_contract::optional;
use thruai_contract::string;

use crate::registry::RegistryError;
use crate::registry::ToolCallError;
use crate::registry::ToolContext;
use crate::registry::ToolRegistry;
use crate::registry::decode_args;
use crate::registry::handler;
use crate::tools::listing_payload;
use crate::tools::paged_found_message;
use crate::tools::to_payload;

// ============================================================================
// SECTION: Registration
// ============================================================================

/// Registers the call tools.
pub(crate) fn register(registry: &mut ToolRegistry) -> Result<(), RegistryError> {
    registry.register(
        ToolContract {
            name: "make_call",
            description: "Make an outbound call from a voice agent to a phone number. The agent must have a phone number assigned. The call will be initiated immediately and the agent will start speaking when the recipient answers.",
            input: object(vec![
                (
                    "agentId",
                    string().describe("ID of the agent to make the call (format: AGT-xxxxx)"),
                ),
                (
                    "to",
                    string().describe("Phone number to call in E.164 format (e.g., \"+14155551234\")"),
                ),
                (
                    "from",
                    optional(string().describe(
                        "Phone number to call from (must be assigned to the agent). If not provided, uses the agent's default number.",
                    )),
                ),
            ]),
        },
        handler(make_call),
    )?;
    registry.register(
        ToolContract {
            name: "list_calls",
            description: "List recent calls with transcripts. Returns call metadata including duration, cost, and full conversation transcript. Filter by agent or status.",
            input: object(vec![
                (
                    "page",
                    defaulted(number().describe("Page number for pagination"), json!(1)),
                ),
                (
                    "pageSize",
                    defaulted(number().describe("Number of calls per page"), json!(50)),
                ),
                ("agentId", optional(string().describe("Filter by agent ID"))),
                (
                    "status",
                    optional(string().describe(
                        "Filter by call status (e.g., \"completed\", \"failed\")",
                    )),
                ),
            ]),
        },
        handler(list_calls),
    )?;
    registry.register(
        ToolContract {
            name: "get_call",
            description: "Get detailed information about a specific call, including full conversation transcript with timestamps, duration, cost, and status.",
            input: object(vec![(
                "callId",
                string().describe("ID of the call to retrieve (format: CALL-xxxxx)"),
            )]),
        },
        handler(get_call),
    )
}

// ============================================================================
// SECTION: Inputs
// ============================================================================

/// Validated arguments for `make_call`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MakeCallInput {
    /// Agent placing the call.
    agent_id: String,
    /// Destination number in E.164 form.
    to: String,
    /// Source number; the agent's default when absent.
    from: Option<String>,
}

/// Validated arguments for `list_calls`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListCallsInput {
    /// 1-based page number.
    page: u64,
    /// Entries per page.
    page_size: u64,
    /// Optional agent filter.
    agent_id: Option<String>,
    /// Optional status filter.
    status: Option<String>,
}

/// Validated arguments for `get_call`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GetCallInput {
    /// Call identifier.
    call_id: String,
}

// ============================================================================
// SECTION: Handlers
// ============================================================================

/// Initiates an outbound call.
async fn make_call(arguments: Value, context: Arc<ToolContext>) -> Result<Value, ToolCallError> {
    let input: MakeCallInput = decode_args(arguments)?;
    let request = OutboundCallRequest {
        agent_id: input.agent_id,
        to: input.to.clone(),
        from: input.from,
    };
    let receipt = context.client.make_call(&request).await?;
    Ok(json!({
        "success": true,
        "call": to_payload(&receipt)?,
        "message": format!(
            "Call initiated to {}!\n\nCall ID: {}\nSession ID: {}\nStatus: {}\n\nUse get_call with callId to check status and retrieve transcript.",
            input.to, receipt.call_id, receipt.session_id, receipt.status,
        ),
    }))
}

/// Lists calls with optional filters.
async fn list_calls(arguments: Value, context: Arc<ToolContext>) -> Result<Value, ToolCallError> {
    let input: ListCallsInput = decode_args(arguments)?;
    let listing = context
        .client
        .list_calls(
            Some(input.page),
            Some(input.page_size),
            input.agent_id.as_deref(),
            input.status.as_deref(),
        )
        .await?;
    let message = paged_found_message(listing.calls.len(), "call", listing.pagination.as_ref());
    listing_payload("calls", listing.calls, listing.pagination, message)
}

/// Fetches one call with its transcript.
async fn get_call(arguments: Value, context: Arc<ToolContext>) -> Result<Value, ToolCallError> {
    let input: GetCallInput = decode_args(arguments)?;
    let call = context.client.get_call(&input.call_id).await?;
    Ok(json!({
        "success": true,
        "call": call,
        "message": format!("Call details retrieved for {}", input.call_id),
    }))
}
