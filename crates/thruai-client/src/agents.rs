// crates/thruai-client/src/agents.rs
// ============================================================================
// Module: Agent Endpoints
// Description: Agent CRUD, quickstart, and number assignment.
// Purpose: Thin typed wrappers over the /agents endpoint family.
// Dependencies: reqwest, serde, serde_json
// ============================================================================

//! ## Overview
//! Agent entities stay opaque; create/update requests are typed so absent
//! optional fields are omitted from the serialized body rather than sent as
//! `null`.

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
use crate::types::AgentList;
use crate::types::DeleteReceipt;
use crate::types::NumberAssignment;
use crate::types::QuickstartOutcome;

// ============================================================================
// SECTION: Requests
// ============================================================================

/// Body for agent creation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAgentRequest {
    /// Agent display name.
    pub name: String,
    /// Instructions driving the agent's behavior.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
    /// Short summary of the agent's purpose.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Pipeline mode (`s2s` or `traditional`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline_mode: Option<String>,
    /// Speech-to-speech provider identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s2s_provider: Option<String>,
    /// Speech-to-speech model identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s2s_model: Option<String>,
    /// Speech-to-speech voice identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s2s_voice: Option<String>,
}

/// Body for the quickstart endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickstartRequest {
    /// Agent display name.
    pub name: String,
    /// Instructions driving the agent's behavior.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
    /// Area code for the auto-provisioned number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_code: Option<String>,
    /// Voice identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
    /// Model identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// Body for agent updates; only present fields are sent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAgentRequest {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New system prompt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

// ============================================================================
// SECTION: Endpoints
// ============================================================================

impl ThruAiClient {
    /// Lists agents.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn list_agents(
        &self,
        page: Option<u64>,
        page_size: Option<u64>,
    ) -> Result<AgentList, ClientError> {
        let mut query = Vec::new();
        push_query(&mut query, "page", page);
        push_query(&mut query, "pageSize", page_size);
        decode(self.request(Method::GET, "/agents", &query, None).await?)
    }

    /// Fetches one agent.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn get_agent(&self, agent_id: &str) -> Result<Value, ClientError> {
        self.request(Method::GET, &format!("/agents/{agent_id}"), &[], None).await
    }

    /// Creates an agent.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn create_agent(
        &self,
        request: &CreateAgentRequest,
    ) -> Result<Value, ClientError> {
        let body = serde_json::to_value(request)?;
        self.request(Method::POST, "/agents", &[], Some(body)).await
    }

    /// Creates an agent and provisions a phone number in one call.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn quickstart(
        &self,
        request: &QuickstartRequest,
    ) -> Result<QuickstartOutcome, ClientError> {
        let body = serde_json::to_value(request)?;
        decode(self.request(Method::POST, "/agents/quickstart", &[], Some(body)).await?)
    }

    /// Updates an agent's configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn update_agent(
        &self,
        agent_id: &str,
        request: &UpdateAgentRequest,
    ) -> Result<Value, ClientError> {
        let body = serde_json::to_value(request)?;
        self.request(Method::PATCH, &format!("/agents/{agent_id}"), &[], Some(body))
            .await
    }

    /// Deletes an agent.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn delete_agent(&self, agent_id: &str) -> Result<DeleteReceipt, ClientError> {
        decode(
            self.request(Method::DELETE, &format!("/agents/{agent_id}"), &[], None)
                .await?,
        )
    }

    /// Assigns a provisioned phone number to an agent.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn assign_number(
        &self,
        agent_id: &str,
        phone_number_id: &str,
    ) -> Result<NumberAssignment, ClientError> {
        let body = serde_json::json!({ "phoneNumberId": phone_number_id });
        decode(
            self.request(
                Method::POST,
                &format!("/agents/{agent_id}/telephony"),
                &[],
                Some(body),
            )
            .await?,
        )
    }
}
