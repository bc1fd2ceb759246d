// crates/thruai-mcp/src/tools/feedback.rs
// ============================================================================
// Module: Feedback Tools
// Description: Feedback submission and review tools.
// Purpose: Expose bug reports, feature requests, and feedback history over
//          the tool surface.
// Dependencies: thruai-client, thruai-contract, serde, serde_json
// ============================================================================

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use serde_json::json;
use thruai_client::FeedbackRequest;
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

// ============================================================================
// SECTION: Registration
// ============================================================================

/// Registers the feedback tools.
pub(crate) fn register(registry: &mut ToolRegistry) -> Result<(), RegistryError> {
    registry.register(
        ToolContract {
            name: "submit_feedback",
            description: "Submit bug reports, feature requests, or general feedback to the ThruAI team.",
            input: object(vec![
                (
                    "type",
                    string_enum(&["bug", "feature", "general"]).describe("Type of feedback"),
                ),
                ("subject", string_min(1).describe("Brief subject line")),
                ("description", string_min(1).describe("Detailed description")),
                (
                    "priority",
                    optional(string_enum(&["low", "medium", "high"]).describe("Priority level")),
                ),
            ]),
        },
        handler(submit_feedback),
    )?;
    registry.register(
        ToolContract {
            name: "list_feedback",
            description: "List all feedback submissions from your organization.",
            input: object(vec![
                ("page", defaulted(number().describe("Page number"), json!(1))),
                (
                    "pageSize",
                    defaulted(number().describe("Results per page"), json!(50)),
                ),
                ("type", optional(string().describe("Filter by type"))),
            ]),
        },
        handler(list_feedback),
    )?;
    registry.register(
        ToolContract {
            name: "get_feedback",
            description: "Get detailed information about a specific feedback submission.",
            input: object(vec![(
                "feedbackId",
                string().describe("ID of the feedback item (format: FB-xxxxx)"),
            )]),
        },
        handler(get_feedback),
    )
}

// ============================================================================
// SECTION: Inputs
// ============================================================================

/// Validated arguments for `submit_feedback`.
#[derive(Debug, Deserialize)]
struct SubmitFeedbackInput {
    /// Feedback category.
    #[serde(rename = "type")]
    kind: String,
    /// Brief subject line.
    subject: String,
    /// Detailed description.
    description: String,
    /// Priority level.
    priority: Option<String>,
}

/// Validated arguments for `list_feedback`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListFeedbackInput {
    /// 1-based page number.
    page: u64,
    /// Entries per page.
    page_size: u64,
    /// Optional category filter.
    #[serde(rename = "type")]
    kind: Option<String>,
}

/// Validated arguments for `get_feedback`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GetFeedbackInput {
    /// Feedback identifier.
    feedback_id: String,
}

// ============================================================================
// SECTION: Handlers
// ============================================================================

/// Submits feedback to the platform team.
async fn submit_feedback(
    arguments: Value,
    context: Arc<ToolContext>,
) -> Result<Value, ToolCallError> {
    let input: SubmitFeedbackInput = decode_args(arguments)?;
    let request = FeedbackRequest {
        kind: input.kind,
        subject: input.subject,
        description: input.description,
        priority: input.priority,
    };
    let submission = context.client.submit_feedback(&request).await?;
    let message = format!(
        "Feedback submitted! ID: {}\n\nType: {}\nSubject: {}\nStatus: {}\n\nThank you for helping improve ThruAI!",
        display_field(&submission, "id"),
        display_field(&submission, "type"),
        display_field(&submission, "subject"),
        display_field(&submission, "status"),
    );
    Ok(json!({
        "success": true,
        "feedback": submission,
        "message": message,
    }))
}

/// Lists feedback submissions with an optional category filter.
async fn list_feedback(
    arguments: Value,
    context: Arc<ToolContext>,
) -> Result<Value, ToolCallError> {
    let input: ListFeedbackInput = decode_args(arguments)?;
    let listing = context
        .client
        .list_feedback(Some(input.page), Some(input.page_size), input.kind.as_deref())
        .await?;
    let message = format!("Found {} feedback item(s)", listing.feedback.len());
    listing_payload("feedback", listing.feedback, listing.pagination, message)
}

/// Fetches one feedback submission.
async fn get_feedback(
    arguments: Value,
    context: Arc<ToolContext>,
) -> Result<Value, ToolCallError> {
    let input: GetFeedbackInput = decode_args(arguments)?;
    let submission = context.client.get_feedback(&input.feedback_id).await?;
    Ok(json!({
        "success": true,
        "feedback": submission,
        "message": format!("Retrieved feedback {}", input.feedback_id),
    }))
}
