// crates/thruai-client/src/lib.rs
// ============================================================================
// Module: ThruAI Client
// Description: HTTP client for the ThruAI public REST API.
// Purpose: Provide one thin typed method per platform endpoint over a shared
//          request core that decodes the API response envelope.
// Dependencies: reqwest, serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! ThruAI Client wraps the platform's `/api/v1/public` REST surface. The
//! request core fixes authentication, the user agent, and envelope decoding;
//! each domain module adds thin methods that fix an HTTP method and path and
//! forward typed parameters. Domain entities (agents, calls, campaigns, …)
//! stay opaque [`serde_json::Value`] payloads; only small fixed receipt
//! shapes are typed.
//! Security posture: the API key is held in memory only and never logged;
//! error messages carry the remote diagnostic but never the credential.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod agents;
pub mod analytics;
pub mod calls;
pub mod campaigns;
pub mod client;
pub mod custom_tools;
pub mod discovery;
pub mod feedback;
pub mod providers;
pub mod telephony;
pub mod types;
pub mod webhooks;
pub mod workflows;

#[cfg(test)]
mod tests {
    //! Test-only lint relaxations for panic-based assertions and debug output.
    #![allow(
        clippy::panic,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::use_debug,
        clippy::dbg_macro,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        reason = "Test-only output and panic-based assertions are permitted."
    )]
}

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use agents::CreateAgentRequest;
pub use agents::QuickstartRequest;
pub use agents::UpdateAgentRequest;
pub use calls::OutboundCallRequest;
pub use campaigns::CampaignContact;
pub use campaigns::CreateCampaignRequest;
pub use campaigns::UpdateCampaignRequest;
pub use client::ClientError;
pub use client::ThruAiClient;
pub use client::USER_AGENT;
pub use custom_tools::CreateToolRequest;
pub use custom_tools::UpdateToolRequest;
pub use feedback::FeedbackRequest;
pub use telephony::ProvisionNumberRequest;
pub use types::AgentList;
pub use types::AvailableNumbers;
pub use types::CallList;
pub use types::CampaignList;
pub use types::CampaignStatCounts;
pub use types::CampaignStats;
pub use types::ContactsAdded;
pub use types::CostAnalytics;
pub use types::CostBreakdown;
pub use types::CostTotals;
pub use types::CustomToolList;
pub use types::DeleteReceipt;
pub use types::DeliveryList;
pub use types::ExecutionList;
pub use types::FeedbackList;
pub use types::ModelList;
pub use types::NumberAssignment;
pub use types::OutboundCall;
pub use types::Pagination;
pub use types::ProviderCatalog;
pub use types::ProvisionedNumber;
pub use types::QuickstartFailure;
pub use types::QuickstartOutcome;
pub use types::SchemaCatalog;
pub use types::ToolTestResult;
pub use types::UsageAnalytics;
pub use types::UsageTotals;
pub use types::VoiceList;
pub use types::WebhookList;
pub use types::WebhookTestResult;
pub use types::WorkflowExecution;
pub use types::WorkflowList;
pub use workflows::CreateWorkflowRequest;
pub use workflows::UpdateWorkflowRequest;
pub use webhooks::CreateWebhookRequest;
pub use webhooks::UpdateWebhookRequest;
