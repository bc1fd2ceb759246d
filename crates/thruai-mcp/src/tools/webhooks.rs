// crates/thruai-mcp/src/tools/webhooks.rs
// ============================================================================
// Module: Webhook Tools
// Description: Webhook subscription and delivery tools.
// Purpose: Expose webhook CRUD, test deliveries, and delivery history over
//          the tool surface.
// Dependencies: thruai-client, thruai-contract, serde, serde_json
// ============================================================================

//! ## Overview
//! `test_webhook` mirrors the platform's success flag into the response
//! instead of reporting unconditional success, so a failing endpoint is
//! visible to the caller.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use serde_json::json;
use thruai_client::CreateWebhookRequest;
use thruai_client::UpdateWebhookRequest;
use thruai_contract::ToolContract;
use thruai_contract::array;
use thruai_contract::boolean;
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
use crate::tools::display_field;
use crate::tools::found_message;
use crate::tools::listing_payload;
use crate::tools::to_payload;

// ============================================================================
// SECTION: Registration
// ============================================================================

/// Registers the webhook tools.
pub(crate) fn register(registry: &mut ToolRegistry) -> Result<(), RegistryError> {
    registry.register(
        ToolContract {
            name: "list_webhooks",
            description: "List all webhook subscriptions for real-time event notifications.",
            input: object(vec![
                (
                    "page",
                    defaulted(number().describe("Page number for pagination"), json!(1)),
                ),
                (
                    "pageSize",
                    defaulted(number().describe("Number of webhooks per page"), json!(50)),
                ),
            ]),
        },
        handler(list_webhooks),
    )?;
    registry.register(
        ToolContract {
            name: "get_webhook",
            description: "Get detailed information about a specific webhook subscription.",
            input: object(vec![(
                "webhookId",
                string().describe("ID of the webhook to retrieve (format: WHK-xxxxx)"),
            )]),
        },
        handler(get_webhook),
    )?;
    registry.register(
        ToolContract {
            name: "create_webhook",
            description: "Create a webhook subscription to receive real-time notifications for events like call.completed, transcript.ready, workflow.completed.",
            input: object(vec![
                ("url", string().describe("HTTPS URL to send webhook events to")),
                (
                    "events",
                    array(string()).describe(
                        "Array of event types to subscribe to (e.g., [\"call.completed\", \"transcript.ready\"])",
                    ),
                ),
                (
                    "secret",
                    optional(string().describe("Secret for HMAC signature verification")),
                ),
            ]),
        },
        handler(create_webhook),
    )?;
    registry.register(
        ToolContract {
            name: "update_webhook",
            description: "Update a webhook subscription's URL, events, or active status.",
            input: object(vec![
                (
                    "webhookId",
                    string().describe("ID of the webhook to update (format: WHK-xxxxx)"),
                ),
                ("url", optional(string().describe("New webhook URL"))),
                (
                    "events",
                    optional(array(string()).describe("New event subscriptions")),
                ),
                (
                    "isActive",
                    optional(boolean().describe("Enable or disable the webhook")),
                ),
            ]),
        },
        handler(update_webhook),
    )?;
    registry.register(
        ToolContract {
            name: "delete_webhook",
            description: "Delete a webhook subscription. You will no longer receive events at this URL.",
            input: object(vec![(
                "webhookId",
                string().describe("ID of the webhook to delete (format: WHK-xxxxx)"),
            )]),
        },
        handler(delete_webhook),
    )?;
    registry.register(
        ToolContract {
            name: "test_webhook",
            description: "Send a test event to a webhook to verify it's configured correctly.",
            input: object(vec![(
                "webhookId",
                string().describe("ID of the webhook to test (format: WHK-xxxxx)"),
            )]),
        },
        handler(test_webhook),
    )?;
    registry.register(
        ToolContract {
            name: "list_webhook_deliveries",
            description: "List webhook delivery attempts to track reliability and debug issues.",
            input: object(vec![
                (
                    "webhookId",
                    string().describe("ID of the webhook (format: WHK-xxxxx)"),
                ),
                ("page", defaulted(number().describe("Page number"), json!(1))),
                (
                    "limit",
                    defaulted(number().describe("Results per page"), json!(50)),
                ),
            ]),
        },
        handler(list_webhook_deliveries),
    )
}

// ============================================================================
// SECTION: Inputs
// ============================================================================

/// Validated arguments for `list_webhooks`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListWebhooksInput {
    /// 1-based page number.
    page: u64,
    /// Entries per page.
    page_size: u64,
}

/// Validated arguments for single-webhook tools.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WebhookIdInput {
    /// Webhook identifier.
    webhook_id: String,
}

/// Validated arguments for `create_webhook`.
#[derive(Debug, Deserialize)]
struct CreateWebhookInput {
    /// HTTPS endpoint receiving events.
    url: String,
    /// Event types to subscribe to.
    events: Vec<String>,
    /// Secret for HMAC signature verification.
    secret: Option<String>,
}

/// Validated arguments for `update_webhook`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateWebhookInput {
    /// Webhook identifier.
    webhook_id: String,
    /// New endpoint URL.
    url: Option<String>,
    /// New event subscriptions.
    events: Option<Vec<String>>,
    /// Enables or disables delivery.
    is_active: Option<bool>,
}

/// Validated arguments for `list_webhook_deliveries`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListDeliveriesInput {
    /// Webhook identifier.
    webhook_id: String,
    /// 1-based page number.
    page: u64,
    /// Entries per page.
    limit: u64,
}

// ============================================================================
// SECTION: Handlers
// ============================================================================

/// Lists webhook subscriptions.
async fn list_webhooks(
    arguments: Value,
    context: Arc<ToolContext>,
) -> Result<Value, ToolCallError> {
    let input: ListWebhooksInput = decode_args(arguments)?;
    let listing = context
        .client
        .list_webhooks(Some(input.page), Some(input.page_size))
        .await?;
    let message = found_message(listing.webhooks.len(), "webhook");
    listing_payload("webhooks", listing.webhooks, listing.pagination, message)
}

/// Fetches one webhook subscription.
async fn get_webhook(
    arguments: Value,
    context: Arc<ToolContext>,
) -> Result<Value, ToolCallError> {
    let input: WebhookIdInput = decode_args(arguments)?;
    let webhook = context.client.get_webhook(&input.webhook_id).await?;
    Ok(json!({
        "success": true,
        "webhook": webhook,
        "message": format!("Retrieved webhook {}", input.webhook_id),
    }))
}

/// Creates a webhook subscription.
async fn create_webhook(
    arguments: Value,
    context: Arc<ToolContext>,
) -> Result<Value, ToolCallError> {
    let input: CreateWebhookInput = decode_args(arguments)?;
    let request = CreateWebhookRequest {
        url: input.url.clone(),
        events: input.events.clone(),
        secret: input.secret,
    };
    let webhook = context.client.create_webhook(&request).await?;
    let id = display_field(&webhook, "id");
    Ok(json!({
        "success": true,
        "webhook": webhook,
        "message": format!(
            "Webhook created! ID: {id}\n\nSubscribed to: {}\n\nEvents will be sent to: {}\n\nTest with test_webhook.",
            input.events.join(", "),
            input.url,
        ),
    }))
}

/// Updates a webhook subscription.
async fn update_webhook(
    arguments: Value,
    context: Arc<ToolContext>,
) -> Result<Value, ToolCallError> {
    let input: UpdateWebhookInput = decode_args(arguments)?;
    let request = UpdateWebhookRequest {
        url: input.url,
        events: input.events,
        is_active: input.is_active,
    };
    let webhook = context.client.update_webhook(&input.webhook_id, &request).await?;
    Ok(json!({
        "success": true,
        "webhook": webhook,
        "message": format!("Webhook {} updated successfully!", input.webhook_id),
    }))
}

/// Deletes a webhook subscription.
async fn delete_webhook(
    arguments: Value,
    context: Arc<ToolContext>,
) -> Result<Value, ToolCallError> {
    let input: WebhookIdInput = decode_args(arguments)?;
    let receipt = context.client.delete_webhook(&input.webhook_id).await?;
    Ok(json!({
        "success": true,
        "message": receipt.message,
    }))
}

/// Sends a test event to a webhook.
async fn test_webhook(
    arguments: Value,
    context: Arc<ToolContext>,
) -> Result<Value, ToolCallError> {
    let input: WebhookIdInput = decode_args(arguments)?;
    let result = context.client.test_webhook(&input.webhook_id).await?;
    to_payload(&result)
}

/// Lists delivery attempts for a webhook.
async fn list_webhook_deliveries(
    arguments: Value,
    context: Arc<ToolContext>,
) -> Result<Value, ToolCallError> {
    let input: ListDeliveriesInput = decode_args(arguments)?;
    let listing = context
        .client
        .list_webhook_deliveries(&input.webhook_id, Some(input.page), Some(input.limit))
        .await?;
    let message = format!(
        "Found {} delivery attempt(s) for webhook {}",
        listing.deliveries.len(),
        input.webhook_id,
    );
    listing_payload("deliveries", listing.deliveries, listing.pagination, message)
}
