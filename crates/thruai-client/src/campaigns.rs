// crates/thruai-client/src/campaigns.rs
// ============================================================================
// Module: Campaign Endpoints
// Description: Campaign CRUD, lifecycle control, contacts, and stats.
// Purpose: Thin typed wrappers over the /campaigns endpoint family.
// Dependencies: reqwest, serde, serde_json
// ============================================================================

//! ## Overview
//! Campaign entities stay opaque; contact imports and progress statistics
//! are typed because tool handlers summarize them.

// ============================================================================
// SECTION: Imports
// ============================================================================

use reqwest::Method;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use crate::client::ClientError;
use crate::client::ThruAiClient;
use crate::client::decode;
use crate::client::push_query;
use crate::types::CampaignList;
use crate::types::CampaignStats;
use crate::types::ContactsAdded;
use crate::types::DeleteReceipt;

// ============================================================================
// SECTION: Requests
// ============================================================================

/// Body for campaign creation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCampaignRequest {
    /// Campaign display name.
    pub name: String,
    /// Short summary of the campaign's purpose.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Agent handling the campaign's calls.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,
    /// Workflow executed per contact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_id: Option<String>,
}

/// Body for campaign updates; only present fields are sent.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateCampaignRequest {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// One contact in a campaign import.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignContact {
    /// Phone number in E.164 form.
    pub phone_number: String,
    /// Contact display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-form per-contact data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<Map<String, Value>>,
}

// ============================================================================
// SECTION: Endpoints
// ============================================================================

impl ThruAiClient {
    /// Lists campaigns, optionally filtered by status.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn list_campaigns(
        &self,
        page: Option<u64>,
        page_size: Option<u64>,
        status: Option<&str>,
    ) -> Result<CampaignList, ClientError> {
        let mut query = Vec::new();
        push_query(&mut query, "page", page);
        push_query(&mut query, "pageSize", page_size);
        push_query(&mut query, "status", status);
        decode(self.request(Method::GET, "/campaigns", &query, None).await?)
    }

    /// Fetches one campaign.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn get_campaign(&self, campaign_id: &str) -> Result<Value, ClientError> {
        self.request(Method::GET, &format!("/campaigns/{campaign_id}"), &[], None).await
    }

    /// Creates a campaign.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn create_campaign(
        &self,
        request: &CreateCampaignRequest,
    ) -> Result<Value, ClientError> {
        let body = serde_json::to_value(request)?;
        self.request(Method::POST, "/campaigns", &[], Some(body)).await
    }

    /// Updates a campaign's configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn update_campaign(
        &self,
        campaign_id: &str,
        request: &UpdateCampaignRequest,
    ) -> Result<Value, ClientError> {
        let body = serde_json::to_value(request)?;
        self.request(
            Method::PATCH,
            &format!("/campaigns/{campaign_id}"),
            &[],
            Some(body),
        )
        .await
    }

    /// Deletes a campaign.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn delete_campaign(
        &self,
        campaign_id: &str,
    ) -> Result<DeleteReceipt, ClientError> {
        decode(
            self.request(Method::DELETE, &format!("/campaigns/{campaign_id}"), &[], None)
                .await?,
        )
    }

    /// Starts calling the campaign's contacts.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn start_campaign(&self, campaign_id: &str) -> Result<Value, ClientError> {
        self.request(
            Method::POST,
            &format!("/campaigns/{campaign_id}/start"),
            &[],
            None,
        )
        .await
    }

    /// Pauses a running campaign.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn pause_campaign(&self, campaign_id: &str) -> Result<Value, ClientError> {
        self.request(
            Method::POST,
            &format!("/campaigns/{campaign_id}/pause"),
            &[],
            None,
        )
        .await
    }

    /// Adds contacts to a campaign.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn add_campaign_contacts(
        &self,
        campaign_id: &str,
        contacts: &[CampaignContact],
    ) -> Result<ContactsAdded, ClientError> {
        let body = serde_json::json!({ "contacts": contacts });
        decode(
            self.request(
                Method::POST,
                &format!("/campaigns/{campaign_id}/contacts"),
                &[],
                Some(body),
            )
            .await?,
        )
    }

    /// Fetches real-time campaign statistics.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn get_campaign_stats(
        &self,
        campaign_id: &str,
    ) -> Result<CampaignStats, ClientError> {
        decode(
            self.request(
                Method::GET,
                &format!("/campaigns/{campaign_id}/stats"),
                &[],
                None,
            )
            .await?,
        )
    }
}
