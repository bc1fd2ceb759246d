// crates/thruai-client/src/calls.rs
// ============================================================================
// Module: Call Endpoints
// Description: Call history and outbound call initiation.
// Purpose: Thin typed wrappers over the /calls endpoint family.
// Dependencies: reqwest, serde, serde_json
// ============================================================================

//! ## Overview
//! Call entities (including transcripts) stay opaque; only the outbound call
//! receipt is typed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::client::ClientError;
use crate::client::ThruAiClient;
use crate::client::decode;
use crate::client::push_query;
use crate::types::CallList;
use crate::types::OutboundCall;

// ============================================================================
// SECTION: Requests
// ============================================================================

/// Body for outbound call initiation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundCallRequest {
    /// Agent placing the call.
    pub agent_id: String,
    /// Destination number in E.164 form.
    pub to: String,
    /// Source number; the agent's default when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

// ============================================================================
// SECTION: Endpoints
// ============================================================================

impl ThruAiClient {
    /// Lists calls, optionally filtered by agent and status.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn list_calls(
        &self,
        page: Option<u64>,
        page_size: Option<u64>,
        agent_id: Option<&str>,
        status: Option<&str>,
    ) -> Result<CallList, ClientError> {
        let mut query = Vec::new();
        push_query(&mut query, "page", page);
        push_query(&mut query, "pageSize", page_size);
        push_query(&mut query, "agentId", agent_id);
        push_query(&mut query, "status", status);
        decode(self.request(Method::GET, "/calls", &query, None).await?)
    }

    /// Fetches one call with its transcript.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn get_call(&self, call_id: &str) -> Result<Value, ClientError> {
        self.request(Method::GET, &format!("/calls/{call_id}"), &[], None).await
    }

    /// Initiates an outbound call.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn make_call(
        &self,
        request: &OutboundCallRequest,
    ) -> Result<OutboundCall, ClientError> {
        let body = serde_json::to_value(request)?;
        decode(self.request(Method::POST, "/calls/outbound", &[], Some(body)).await?)
    }
}
