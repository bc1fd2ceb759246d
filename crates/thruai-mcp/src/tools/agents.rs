// crates/thruai-mcp/src/tools/agents.rs
// ============================================================================
// Module: Agent Tools
// Description: Agent lifecycle tools, quickstart, and number assignment.
// Purpose: Expose agent CRUD, the one-call quickstart path, and phone number
//          assignment over the tool surface.
// Dependencies: thruai-client, thruai-contract, serde, serde_json
// ============================================================================

//! ## Overview
//! `create_agent` applies the speech-to-speech defaults so a bare name is
//! enough to get a working agent; `quickstart` additionally provisions a
//! phone number and reports a partial outcome when only the number failed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Map;
use serde_json::Value;
use serde_json::json;
use thruai_client::CreateAgentRequest;
use thruai_client::QuickstartRequest;
use thruai_client::UpdateAgentRequest;
use thruai_contract::ToolContract;
use thruai_contract::defaulted;
use thruai_contract::number;
use thruai_contract::object;
use thruai_contract::optional;
use thruai_contract::string;
use thruai_contract::string_enum;
use thruai_contract::string_min;

use crate::registry::RegistryError;
use crate::registry::ToolCallError;
use crate::registry::ToolContext;
use crate::registry::ToolRegistry;
use crate::registry::decode_args;
use crate::registry::handler;
use crate::tools::display_field;
use crate::tools::listing_payload;
use crate::tools::paged_found_message;
use crate::tools::to_payload;

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Speech-to-speech provider applied to every created agent.
const S2S_PROVIDER: &str = "openai-realtime";

/// Speech-to-speech model applied to every created agent.
const S2S_MODEL: &str = "gpt-4o-realtime-preview-2024-12-17";

// ============================================================================
// SECTION: Registration
// ============================================================================

/// Registers the agent tools.
pub(crate) fn register(registry: &mut ToolRegistry) -> Result<(), RegistryError> {
    registry.register(
        ToolContract {
            name: "create_agent",
            description: "Create a new voice AI agent with smart defaults. Creates an S2S (Speech-to-Speech) agent for lowest latency by default. The agent will be created but not yet callable - you need to provision and assign a phone number.",
            input: object(vec![
                ("name", string_min(1).describe("Name of the voice agent")),
                (
                    "systemPrompt",
                    optional(string().describe(
                        "Instructions for the AI agent (what it should say, how it should behave)",
                    )),
                ),
                (
                    "description",
                    optional(string().describe("Brief description of what this agent does")),
                ),
                (
                    "pipelineMode",
                    defaulted(
                        string_enum(&["s2s", "traditional"]).describe(
                            "Pipeline mode: \"s2s\" for Speech-to-Speech (recommended, lower latency) or \"traditional\" for STT\u{2192}LLM\u{2192}TTS",
                        ),
                        json!("s2s"),
                    ),
                ),
                (
                    "s2sVoice",
                    defaulted(
                        string().describe(
                            "Voice for S2S mode. Options: alloy, ash, ballad, coral, echo, sage, shimmer, verse",
                        ),
                        json!("alloy"),
                    ),
                ),
            ]),
        },
        handler(create_agent),
    )?;
    registry.register(
        ToolContract {
            name: "quickstart",
            description: "Create a fully configured voice agent with phone number in ONE CALL. This is the fastest way to get started. Creates an S2S agent with smart defaults and automatically provisions a phone number in the specified area code. The agent will be ready to receive calls immediately.",
            input: object(vec![
                ("name", string_min(1).describe("Name of the voice agent")),
                (
                    "systemPrompt",
                    optional(string().describe(
                        "Instructions for the AI agent (what it should say, how it should behave)",
                    )),
                ),
                (
                    "areaCode",
                    defaulted(
                        string().describe("Area code for phone number (e.g., \"415\", \"212\", \"650\")"),
                        json!("415"),
                    ),
                ),
                (
                    "voice",
                    defaulted(
                        string().describe(
                            "Voice for the agent. Options: alloy, ash, ballad, coral, echo, sage, shimmer, verse",
                        ),
                        json!("alloy"),
                    ),
                ),
                (
                    "model",
                    defaulted(
                        string().describe("AI model to use (default: gpt-realtime)"),
                        json!("gpt-realtime"),
                    ),
                ),
            ]),
        },
        handler(quickstart),
    )?;
    registry.register(
        ToolContract {
            name: "list_agents",
            description: "List all voice agents in your account. Returns agent metadata including name, status, and configuration.",
            input: object(vec![
                (
                    "page",
                    defaulted(number().describe("Page number for pagination"), json!(1)),
                ),
                (
                    "pageSize",
                    defaulted(number().describe("Number of agents per page"), json!(50)),
                ),
            ]),
        },
        handler(list_agents),
    )?;
    registry.register(
        ToolContract {
            name: "get_agent",
            description: "Get detailed information about a specific agent including configuration, status, and metadata.",
            input: object(vec![(
                "agentId",
                string().describe("ID of the agent to retrieve (format: AGT-xxxxx)"),
            )]),
        },
        handler(get_agent),
    )?;
    registry.register(
        ToolContract {
            name: "update_agent",
            description: "Update an existing agent's configuration. You can update the name, system prompt, description, or status.",
            input: object(vec![
                (
                    "agentId",
                    string().describe("ID of the agent to update (format: AGT-xxxxx)"),
                ),
                ("name", optional(string().describe("New name for the agent"))),
                (
                    "systemPrompt",
                    optional(string().describe("New system prompt with AI instructions")),
                ),
                ("description", optional(string().describe("New description"))),
                ("status", optional(string().describe("New status"))),
            ]),
        },
        handler(update_agent),
    )?;
    registry.register(
        ToolContract {
            name: "delete_agent",
            description: "Permanently delete an agent. This cannot be undone. All associated phone number assignments will be removed.",
            input: object(vec![(
                "agentId",
                string().describe("ID of the agent to delete (format: AGT-xxxxx)"),
            )]),
        },
        handler(delete_agent),
    )?;
    registry.register(
        ToolContract {
            name: "assign_number",
            description: "Assign a provisioned phone number to a voice agent. Once assigned, the agent will answer calls to this number and can make outbound calls from it.",
            input: object(vec![
                (
                    "agentId",
                    string().describe("ID of the agent to assign the number to (format: AGT-xxxxx)"),
                ),
                (
                    "phoneNumberId",
                    string().describe("ID of the phone number to assign (format: TEL-xxxxx)"),
                ),
            ]),
        },
        handler(assign_number),
    )
}

// ============================================================================
// SECTION: Inputs
// ============================================================================

/// Validated arguments for `create_agent`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateAgentInput {
    /// Agent display name.
    name: String,
    /// Instructions driving the agent's behavior.
    system_prompt: Option<String>,
    /// Short summary of the agent's purpose.
    description: Option<String>,
    /// Pipeline mode, defaulted to `s2s`.
    pipeline_mode: String,
    /// Voice identifier, defaulted to `alloy`.
    s2s_voice: String,
}

/// Validated arguments for `quickstart`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuickstartInput {
    /// Agent display name.
    name: String,
    /// Instructions driving the agent's behavior.
    system_prompt: Option<String>,
    /// Area code for the auto-provisioned number, defaulted to `415`.
    area_code: String,
    /// Voice identifier, defaulted to `alloy`.
    voice: String,
    /// Model identifier, defaulted to `gpt-realtime`.
    model: String,
}

/// Validated arguments for `list_agents`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListAgentsInput {
    /// 1-based page number.
    page: u64,
    /// Entries per page.
    page_size: u64,
}

/// Validated arguments for `get_agent` and `delete_agent`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AgentIdInput {
    /// Agent identifier.
    agent_id: String,
}

/// Validated arguments for `update_agent`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateAgentInput {
    /// Agent identifier.
    agent_id: String,
    /// New display name.
    name: Option<String>,
    /// New system prompt.
    system_prompt: Option<String>,
    /// New description.
    description: Option<String>,
    /// New status.
    status: Option<String>,
}

/// Validated arguments for `assign_number`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AssignNumberInput {
    /// Agent identifier.
    agent_id: String,
    /// Phone number identifier.
    phone_number_id: String,
}

// ============================================================================
// SECTION: Handlers
// ============================================================================

/// Creates an agent with the speech-to-speech defaults applied.
async fn create_agent(
    arguments: Value,
    context: Arc<ToolContext>,
) -> Result<Value, ToolCallError> {
    let input: CreateAgentInput = decode_args(arguments)?;
    let request = CreateAgentRequest {
        name: input.name.clone(),
        system_prompt: input.system_prompt,
        description: input.description,
        pipeline_mode: Some(input.pipeline_mode),
        s2s_provider: Some(S2S_PROVIDER.to_owned()),
        s2s_model: Some(S2S_MODEL.to_owned()),
        s2s_voice: Some(input.s2s_voice),
    };
    let agent = context.client.create_agent(&request).await?;
    let id = display_field(&agent, "id");
    Ok(json!({
        "success": true,
        "agent": agent,
        "message": format!("Agent \"{}\" created successfully! ID: {id}", input.name),
        "nextSteps": [
            "1. Provision a phone number: use search_numbers to find available numbers",
            "2. Then use provision_number to purchase a number",
            "3. Assign the number to this agent: use assign_number",
            "OR use quickstart tool to do all of this in one call",
        ],
    }))
}

/// Creates an agent and provisions a phone number in one call.
async fn quickstart(
    arguments: Value,
    context: Arc<ToolContext>,
) -> Result<Value, ToolCallError> {
    let input: QuickstartInput = decode_args(arguments)?;
    let request = QuickstartRequest {
        name: input.name.clone(),
        system_prompt: input.system_prompt,
        area_code: Some(input.area_code),
        voice: Some(input.voice),
        model: Some(input.model),
    };
    let outcome = context.client.quickstart(&request).await?;
    let agent_id = display_field(&outcome.agent, "id");

    if let Some(number) = outcome.phone_number {
        return Ok(json!({
            "success": true,
            "agent": outcome.agent,
            "phoneNumber": to_payload(&number)?,
            "message": format!(
                "\u{1F389} Success! Agent \"{}\" is ready!\n\nPhone: {phone}\nAgent ID: {agent_id}\n\nYou can now:\n\u{2022} Call {phone} to test the agent\n\u{2022} Make outbound calls with make_call tool\n\u{2022} View call history with list_calls tool",
                input.name,
                phone = number.phone_number,
            ),
        }));
    }

    let reason = outcome
        .error
        .as_ref()
        .map_or_else(|| "unknown".to_owned(), |failure| failure.message.clone());
    let mut payload = Map::new();
    payload.insert("success".to_owned(), Value::Bool(false));
    payload.insert("agent".to_owned(), outcome.agent);
    if let Some(failure) = outcome.error {
        payload.insert("error".to_owned(), to_payload(&failure)?);
    }
    payload.insert(
        "message".to_owned(),
        Value::String(format!(
            "Agent created but phone provisioning failed: {reason}\n\nAgent ID: {agent_id}\n\nNext steps:\n1. Use search_numbers to find available numbers\n2. Use provision_number to purchase a number\n3. Use assign_number to assign it to this agent",
        )),
    );
    Ok(Value::Object(payload))
}

/// Lists agents with pagination.
async fn list_agents(
    arguments: Value,
    context: Arc<ToolContext>,
) -> Result<Value, ToolCallError> {
    let input: ListAgentsInput = decode_args(arguments)?;
    let listing = context
        .client
        .list_agents(Some(input.page), Some(input.page_size))
        .await?;
    let message = paged_found_message(listing.agents.len(), "agent", listing.pagination.as_ref());
    listing_payload("agents", listing.agents, listing.pagination, message)
}

/// Fetches one agent.
async fn get_agent(arguments: Value, context: Arc<ToolContext>) -> Result<Value, ToolCallError> {
    let input: AgentIdInput = decode_args(arguments)?;
    let agent = context.client.get_agent(&input.agent_id).await?;
    Ok(json!({
        "success": true,
        "agent": agent,
        "message": format!("Retrieved agent details for {}", input.agent_id),
    }))
}

/// Updates an agent's configuration.
async fn update_agent(
    arguments: Value,
    context: Arc<ToolContext>,
) -> Result<Value, ToolCallError> {
    let input: UpdateAgentInput = decode_args(arguments)?;
    let request = UpdateAgentRequest {
        name: input.name,
        system_prompt: input.system_prompt,
        description: input.description,
        status: input.status,
    };
    let agent = context.client.update_agent(&input.agent_id, &request).await?;
    Ok(json!({
        "success": true,
        "agent": agent,
        "message": format!("Agent {} updated successfully!", input.agent_id),
    }))
}

/// Deletes an agent.
async fn delete_agent(
    arguments: Value,
    context: Arc<ToolContext>,
) -> Result<Value, ToolCallError> {
    let input: AgentIdInput = decode_args(arguments)?;
    let receipt = context.client.delete_agent(&input.agent_id).await?;
    Ok(json!({
        "success": true,
        "message": receipt.message,
    }))
}

/// Assigns a provisioned number to an agent.
async fn assign_number(
    arguments: Value,
    context: Arc<ToolContext>,
) -> Result<Value, ToolCallError> {
    let input: AssignNumberInput = decode_args(arguments)?;
    let assignment = context
        .client
        .assign_number(&input.agent_id, &input.phone_number_id)
        .await?;
    Ok(json!({
        "success": true,
        "assignment": to_payload(&assignment)?,
        "message": format!(
            "Phone number assigned to agent successfully!\n\nAgent ID: {}\nPhone Number ID: {}\n\nThe agent is now ready to receive and make calls!",
            assignment.agent_id, assignment.phone_number_id,
        ),
    }))
}
