// crates/thruai-mcp/src/tools/campaigns.rs
// ============================================================================
// Module: Campaign Tools
// Description: Outbound calling campaign tools.
// Purpose: Expose campaign CRUD, start/pause transitions, contact imports,
//          and progress statistics over the tool surface.
// Dependencies: thruai-client, thruai-contract, serde, serde_json
// ============================================================================

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use serde_json::json;
use thruai_client::CampaignContact;
use thruai_client::CreateCampaignRequest;
use thruai_client::UpdateCampaignRequest;
use thruai_contract::ToolContract;
use thruai_contract::any;
use thruai_contract::array;
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

/// Registers the campaign tools.
pub(crate) fn register(registry: &mut ToolRegistry) -> Result<(), RegistryError> {
    registry.register(
        ToolContract {
            name: "list_campaigns",
            description: "List all outbound calling campaigns. Campaigns enable automated calling at scale.",
            input: object(vec![
                (
                    "page",
                    defaulted(number().describe("Page number for pagination"), json!(1)),
                ),
                (
                    "pageSize",
                    defaulted(number().describe("Number of campaigns per page"), json!(50)),
                ),
                ("status", optional(string().describe("Filter by status"))),
            ]),
        },
        handler(list_campaigns),
    )?;
    registry.register(
        ToolContract {
            name: "get_campaign",
            description: "Get detailed information about a specific campaign including configuration and progress.",
            input: object(vec![(
                "campaignId",
                string().describe("ID of the campaign to retrieve (format: CMP-xxxxx)"),
            )]),
        },
        handler(get_campaign),
    )?;
    registry.register(
        ToolContract {
            name: "create_campaign",
            description: "Create a new outbound calling campaign. Assign an agent or workflow to process contacts at scale.",
            input: object(vec![
                ("name", string_min(1).describe("Name of the campaign")),
                (
                    "description",
                    optional(string().describe("Description of the campaign")),
                ),
                (
                    "agentId",
                    optional(string().describe("Agent to use for calls (format: AGT-xxxxx)")),
                ),
                (
                    "workflowId",
                    optional(string().describe(
                        "Workflow to execute for each contact (format: WFL-xxxxx)",
                    )),
                ),
            ]),
        },
        handler(create_campaign),
    )?;
    registry.register(
        ToolContract {
            name: "update_campaign",
            description: "Update an existing campaign's configuration.",
            input: object(vec![
                (
                    "campaignId",
                    string().describe("ID of the campaign to update (format: CMP-xxxxx)"),
                ),
                ("name", optional(string().describe("New name"))),
                ("description", optional(string().describe("New description"))),
                ("status", optional(string().describe("New status"))),
            ]),
        },
        handler(update_campaign),
    )?;
    registry.register(
        ToolContract {
            name: "delete_campaign",
            description: "Permanently delete a campaign. This cannot be undone.",
            input: object(vec![(
                "campaignId",
                string().describe("ID of the campaign to delete (format: CMP-xxxxx)"),
            )]),
        },
        handler(delete_campaign),
    )?;
    registry.register(
        ToolContract {
            name: "start_campaign",
            description: "Start a campaign to begin calling contacts. Calls will be made according to the campaign configuration.",
            input: object(vec![(
                "campaignId",
                string().describe("ID of the campaign to start (format: CMP-xxxxx)"),
            )]),
        },
        handler(start_campaign),
    )?;
    registry.register(
        ToolContract {
            name: "pause_campaign",
            description: "Pause a running campaign to temporarily stop making calls.",
            input: object(vec![(
                "campaignId",
                string().describe("ID of the campaign to pause (format: CMP-xxxxx)"),
            )]),
        },
        handler(pause_campaign),
    )?;
    registry.register(
        ToolContract {
            name: "add_campaign_contacts",
            description: "Add contacts to a campaign. Each contact should have a phone number and optional metadata.",
            input: object(vec![
                (
                    "campaignId",
                    string().describe("ID of the campaign (format: CMP-xxxxx)"),
                ),
                (
                    "contacts",
                    array(object(vec![
                        (
                            "phoneNumber",
                            string().describe("Phone number in E.164 format"),
                        ),
                        ("name", optional(string().describe("Contact name"))),
                        (
                            "customData",
                            optional(map(any()).describe("Custom data for this contact")),
                        ),
                    ]))
                    .describe("Array of contacts to add to the campaign"),
                ),
            ]),
        },
        handler(add_campaign_contacts),
    )?;
    registry.register(
        ToolContract {
            name: "get_campaign_stats",
            description: "Get real-time statistics for a campaign including contact status breakdown, progress, and success rate.",
            input: object(vec![(
                "campaignId",
                string().describe("ID of the campaign (format: CMP-xxxxx)"),
            )]),
        },
        handler(get_campaign_stats),
    )
}

// ============================================================================
// SECTION: Inputs
// ============================================================================

/// Validated arguments for `list_campaigns`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListCampaignsInput {
    /// 1-based page number.
    page: u64,
    /// Entries per page.
    page_size: u64,
    /// Optional status filter.
    status: Option<String>,
}

/// Validated arguments for single-campaign tools.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CampaignIdInput {
    /// Campaign identifier.
    campaign_id: String,
}

/// Validated arguments for `create_campaign`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateCampaignInput {
    /// Campaign display name.
    name: String,
    /// Short summary of the campaign's purpose.
    description: Option<String>,
    /// Agent handling the campaign's calls.
    agent_id: Option<String>,
    /// Workflow executed per contact.
    workflow_id: Option<String>,
}

/// Validated arguments for `update_campaign`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateCampaignInput {
    /// Campaign identifier.
    campaign_id: String,
    /// New display name.
    name: Option<String>,
    /// New description.
    description: Option<String>,
    /// New status.
    status: Option<String>,
}

/// Validated arguments for `add_campaign_contacts`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddContactsInput {
    /// Campaign identifier.
    campaign_id: String,
    /// Contacts to import.
    contacts: Vec<CampaignContact>,
}

// ============================================================================
// SECTION: Handlers
// ============================================================================

/// Lists campaigns with an optional status filter.
async fn list_campaigns(
    arguments: Value,
    context: Arc<ToolContext>,
) -> Result<Value, ToolCallError> {
    let input: ListCampaignsInput = decode_args(arguments)?;
    let listing = context
        .client
        .list_campaigns(Some(input.page), Some(input.page_size), input.status.as_deref())
        .await?;
    let message = found_message(listing.campaigns.len(), "campaign");
    listing_payload("campaigns", listing.campaigns, listing.pagination, message)
}

/// Fetches one campaign.
async fn get_campaign(
    arguments: Value,
    context: Arc<ToolContext>,
) -> Result<Value, ToolCallError> {
    let input: CampaignIdInput = decode_args(arguments)?;
    let campaign = context.client.get_campaign(&input.campaign_id).await?;
    Ok(json!({
        "success": true,
        "campaign": campaign,
        "message": format!("Retrieved campaign {}", input.campaign_id),
    }))
}

/// Creates a campaign.
async fn create_campaign(
    arguments: Value,
    context: Arc<ToolContext>,
) -> Result<Value, ToolCallError> {
    let input: CreateCampaignInput = decode_args(arguments)?;
    let request = CreateCampaignRequest {
        name: input.name.clone(),
        description: input.description,
        agent_id: input.agent_id,
        workflow_id: input.workflow_id,
    };
    let campaign = context.client.create_campaign(&request).await?;
    let id = display_field(&campaign, "id");
    Ok(json!({
        "success": true,
        "campaign": campaign,
        "message": format!(
            "Campaign \"{}\" created! ID: {id}\n\nNext steps:\n1. Add contacts with add_campaign_contacts\n2. Start the campaign with start_campaign\n3. Monitor progress with get_campaign_stats",
            input.name,
        ),
    }))
}

/// Updates a campaign's configuration.
async fn update_campaign(
    arguments: Value,
    context: Arc<ToolContext>,
) -> Result<Value, ToolCallError> {
    let input: UpdateCampaignInput = decode_args(arguments)?;
    let request = UpdateCampaignRequest {
        name: input.name,
        description: input.description,
        status: input.status,
    };
    let campaign = context.client.update_campaign(&input.campaign_id, &request).await?;
    Ok(json!({
        "success": true,
        "campaign": campaign,
        "message": format!("Campaign {} updated successfully!", input.campaign_id),
    }))
}

/// Deletes a campaign.
async fn delete_campaign(
    arguments: Value,
    context: Arc<ToolContext>,
) -> Result<Value, ToolCallError> {
    let input: CampaignIdInput = decode_args(arguments)?;
    let receipt = context.client.delete_campaign(&input.campaign_id).await?;
    Ok(json!({
        "success": true,
        "message": receipt.message,
    }))
}

/// Starts a campaign.
async fn start_campaign(
    arguments: Value,
    context: Arc<ToolContext>,
) -> Result<Value, ToolCallError> {
    let input: CampaignIdInput = decode_args(arguments)?;
    let campaign = context.client.start_campaign(&input.campaign_id).await?;
    Ok(json!({
        "success": true,
        "campaign": campaign,
        "message": format!(
            "Campaign {} started! Calls are now being made.\n\nMonitor progress with get_campaign_stats.",
            input.campaign_id,
        ),
    }))
}

/// Pauses a running campaign.
async fn pause_campaign(
    arguments: Value,
    context: Arc<ToolContext>,
) -> Result<Value, ToolCallError> {
    let input: CampaignIdInput = decode_args(arguments)?;
    let campaign = context.client.pause_campaign(&input.campaign_id).await?;
    Ok(json!({
        "success": true,
        "campaign": campaign,
        "message": format!(
            "Campaign {} paused. Resume with start_campaign.",
            input.campaign_id,
        ),
    }))
}

/// Imports contacts into a campaign.
async fn add_campaign_contacts(
    arguments: Value,
    context: Arc<ToolContext>,
) -> Result<Value, ToolCallError> {
    let input: AddContactsInput = decode_args(arguments)?;
    let receipt = context
        .client
        .add_campaign_contacts(&input.campaign_id, &input.contacts)
        .await?;
    let failures = if receipt.failed > 0 {
        format!(". {} failed.", receipt.failed)
    } else {
        String::new()
    };
    Ok(json!({
        "success": true,
        "added": receipt.added,
        "failed": receipt.failed,
        "message": format!(
            "Added {} contact(s) to campaign {}{failures}",
            receipt.added, input.campaign_id,
        ),
    }))
}

/// Fetches real-time campaign statistics.
async fn get_campaign_stats(
    arguments: Value,
    context: Arc<ToolContext>,
) -> Result<Value, ToolCallError> {
    let input: CampaignIdInput = decode_args(arguments)?;
    let stats = context.client.get_campaign_stats(&input.campaign_id).await?;
    Ok(json!({
        "success": true,
        "stats": to_payload(&stats)?,
        "message": format!(
            "Campaign {} Statistics:\n\nTotal: {}\nQueued: {}\nIn Progress: {}\nCompleted: {}\nFailed: {}\n\nProgress: {}%\nSuccess Rate: {}%",
            input.campaign_id,
            stats.stats.total,
            stats.stats.queued,
            stats.stats.in_progress,
            stats.stats.completed,
            stats.stats.failed,
            stats.percent_complete,
            stats.success_rate,
        ),
    }))
}
