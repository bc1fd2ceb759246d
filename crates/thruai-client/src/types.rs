// crates/thruai-client/src/types.rs
// ============================================================================
// Module: Response Shapes
// Description: Typed shapes for fixed platform response payloads.
// Purpose: Type pagination, receipts, stats, and analytics totals while
//          leaving domain entities opaque.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Listing wrappers carry their entity arrays as opaque values plus an
//! optional [`Pagination`] block; small fixed receipts (outbound call,
//! provisioned number, contact import, test results, deletions) are fully
//! typed. Unknown fields on entity-bearing receipts are preserved through
//! re-serialization via flattened maps.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

// ============================================================================
// SECTION: Pagination & Listings
// ============================================================================

/// Pagination block attached to listing payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// 1-based page number.
    pub page: u64,
    /// Entries per page.
    pub page_size: u64,
    /// Total entries across all pages.
    pub total: u64,
}

/// Agents listing payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentList {
    /// Agent entities, opaque to this layer.
    pub agents: Vec<Value>,
    /// Pagination block when the platform returns one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// Calls listing payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallList {
    /// Call entities, opaque to this layer.
    pub calls: Vec<Value>,
    /// Pagination block when the platform returns one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// Workflows listing payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowList {
    /// Workflow entities, opaque to this layer.
    pub workflows: Vec<Value>,
    /// Pagination block when the platform returns one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// Workflow executions listing payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionList {
    /// Execution entities, opaque to this layer.
    pub executions: Vec<Value>,
    /// Pagination block when the platform returns one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// Campaigns listing payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignList {
    /// Campaign entities, opaque to this layer.
    pub campaigns: Vec<Value>,
    /// Pagination block when the platform returns one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// Webhooks listing payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookList {
    /// Webhook entities, opaque to this layer.
    pub webhooks: Vec<Value>,
    /// Pagination block when the platform returns one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// Webhook deliveries listing payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryList {
    /// Delivery-attempt entities, opaque to this layer.
    pub deliveries: Vec<Value>,
    /// Pagination block when the platform returns one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// Custom tools listing payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomToolList {
    /// Custom tool entities, opaque to this layer.
    pub tools: Vec<Value>,
    /// Pagination block when the platform returns one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// Feedback listing payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackList {
    /// Feedback entities, opaque to this layer.
    pub feedback: Vec<Value>,
    /// Pagination block when the platform returns one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// Available phone number search payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableNumbers {
    /// Candidate numbers with locality metadata, opaque to this layer.
    pub numbers: Vec<Value>,
}

/// Provider voices listing payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceList {
    /// Voice entities, opaque to this layer.
    pub voices: Vec<Value>,
}

/// Provider models listing payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelList {
    /// Model entities, opaque to this layer.
    pub models: Vec<Value>,
}

/// Provider catalog grouped by pipeline role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderCatalog {
    /// LLM providers.
    pub llm: Vec<Value>,
    /// Text-to-speech providers.
    pub tts: Vec<Value>,
    /// Speech-to-text providers.
    pub stt: Vec<Value>,
}

// ============================================================================
// SECTION: Receipts
// ============================================================================

/// Receipt for an initiated outbound call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundCall {
    /// Identifier of the created call.
    pub call_id: String,
    /// Identifier of the live session.
    pub session_id: String,
    /// Initial call status.
    pub status: String,
    /// Remote confirmation message.
    pub message: String,
}

/// Receipt for a number-to-agent assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberAssignment {
    /// Agent the number was assigned to.
    pub agent_id: String,
    /// Assigned phone number identifier.
    pub phone_number_id: String,
    /// Remote confirmation message.
    pub message: String,
}

/// Provisioned phone number record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionedNumber {
    /// Phone number identifier.
    pub id: String,
    /// Number in E.164 form.
    pub phone_number: String,
    /// Optional display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
    /// Provisioning status.
    pub status: String,
    /// Fields this layer does not interpret, preserved on re-serialization.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Quickstart outcome: agent plus best-effort phone provisioning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickstartOutcome {
    /// Created agent entity, opaque to this layer.
    pub agent: Value,
    /// Provisioned number when phone setup succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<ProvisionedNumber>,
    /// Provisioning failure details when phone setup failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<QuickstartFailure>,
}

/// Phone provisioning failure inside a quickstart outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickstartFailure {
    /// Human-readable failure summary.
    pub message: String,
    /// Additional remote detail when provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Receipt for a contact import into a campaign.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactsAdded {
    /// Contacts accepted.
    pub added: u64,
    /// Contacts rejected.
    pub failed: u64,
    /// Remote confirmation message.
    pub message: String,
}

/// Campaign progress statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignStats {
    /// Campaign the statistics belong to.
    pub campaign_id: String,
    /// Contact counts by state.
    pub stats: CampaignStatCounts,
    /// Completion percentage (0–100).
    pub percent_complete: f64,
    /// Success percentage (0–100).
    pub success_rate: f64,
}

/// Contact counts by state within a campaign.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignStatCounts {
    /// All contacts in the campaign.
    pub total: u64,
    /// Contacts waiting to be called.
    pub queued: u64,
    /// Contacts currently being called.
    pub in_progress: u64,
    /// Contacts successfully processed.
    pub completed: u64,
    /// Contacts whose calls failed.
    pub failed: u64,
    /// Contacts excluded by suppression rules.
    pub suppressed: u64,
}

/// Receipt for a webhook test delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookTestResult {
    /// Whether the endpoint accepted the test event.
    pub success: bool,
    /// HTTP status returned by the endpoint when reachable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u64>,
    /// Remote summary of the test outcome.
    pub message: String,
}

/// Receipt for a custom tool test invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolTestResult {
    /// Whether the tool endpoint responded successfully.
    pub success: bool,
    /// HTTP status returned by the endpoint when reachable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u64>,
    /// Response body returned by the endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
    /// Round-trip time in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time: Option<f64>,
    /// Failure description when the test failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Receipt for a deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteReceipt {
    /// Remote confirmation message.
    pub message: String,
    /// Warnings about dangling references, when any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
}

/// Receipt for a triggered workflow execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowExecution {
    /// Identifier of the created execution.
    pub execution_id: String,
    /// Initial execution status.
    pub status: String,
    /// Remote confirmation message.
    pub message: String,
}

// ============================================================================
// SECTION: Analytics & Discovery
// ============================================================================

/// Usage analytics payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageAnalytics {
    /// Per-period usage rows, opaque to this layer.
    pub usage: Vec<Value>,
    /// Aggregated totals across the requested range.
    pub totals: UsageTotals,
}

/// Aggregated usage totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageTotals {
    /// Total calls.
    pub calls: u64,
    /// Total call minutes.
    pub minutes: f64,
    /// Total transcription minutes when tracked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcription_minutes: Option<f64>,
}

/// Cost analytics payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostAnalytics {
    /// Per-period cost rows, opaque to this layer.
    pub costs: Vec<Value>,
    /// Aggregated totals across the requested range.
    pub totals: CostTotals,
}

/// Aggregated cost totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostTotals {
    /// Total cost in account currency.
    pub total: f64,
    /// Per-component breakdown when available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<CostBreakdown>,
}

/// Cost breakdown by pipeline component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// LLM cost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub llm: Option<f64>,
    /// Text-to-speech cost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tts: Option<f64>,
    /// Speech-to-text cost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stt: Option<f64>,
    /// Telephony cost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephony: Option<f64>,
}

/// Schema discovery payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaCatalog {
    /// Per-resource schema documents, opaque to this layer.
    pub schemas: Value,
    /// Schema catalog version.
    pub version: String,
}
