// crates/thruai-client/src/webhooks.rs
// ============================================================================
// Module: Webhook Endpoints
// Description: Webhook subscription CRUD, testing, and delivery history.
// Purpose: Thin typed wrappers over the /webhooks endpoint family.
// Dependencies: reqwest, serde, serde_json
// ============================================================================

//! ## Overview
//! Webhook entities and delivery rows stay opaque; the test receipt is typed
//! because its `success` flag drives the tool envelope.

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
use crate::types::DeleteReceipt;
use crate::types::DeliveryList;
use crate::types::WebhookList;
use crate::types::WebhookTestResult;

// ============================================================================
// SECTION: Requests
// ============================================================================

/// Body for webhook creation.
#[derive(Debug, Clone, Serialize)]
pub struct CreateWebhookRequest {
    /// HTTPS endpoint receiving events.
    pub url: String,
    /// Event types to subscribe to.
    pub events: Vec<String>,
    /// Secret for HMAC signature verification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

/// Body for webhook updates; only present fields are sent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWebhookRequest {
    /// New endpoint URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// New event subscriptions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<String>>,
    /// Enables or disables delivery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

// ============================================================================
// SECTION: Endpoints
// ============================================================================

impl ThruAiClient {
    /// Lists webhook subscriptions.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn list_webhooks(
        &self,
        page: Option<u64>,
        page_size: Option<u64>,
    ) -> Result<WebhookList, ClientError> {
        let mut query = Vec::new();
        push_query(&mut query, "page", page);
        push_query(&mut query, "pageSize", page_size);
        decode(self.request(Method::GET, "/webhooks", &query, None).await?)
    }

    /// Fetches one webhook subscription.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn get_webhook(&self, webhook_id: &str) -> Result<Value, ClientError> {
        self.request(Method::GET, &format!("/webhooks/{webhook_id}"), &[], None).await
    }

    /// Creates a webhook subscription.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn create_webhook(
        &self,
        request: &CreateWebhookRequest,
    ) -> Result<Value, ClientError> {
        let body = serde_json::to_value(request)?;
        self.request(Method::POST, "/webhooks", &[], Some(body)).await
    }

    /// Updates a webhook subscription.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn update_webhook(
        &self,
        webhook_id: &str,
        request: &UpdateWebhookRequest,
    ) -> Result<Value, ClientError> {
        let body = serde_json::to_value(request)?;
        self.request(
            Method::PATCH,
            &format!("/webhooks/{webhook_id}"),
            &[],
            Some(body),
        )
        .await
    }

    /// Deletes a webhook subscription.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn delete_webhook(
        &self,
        webhook_id: &str,
    ) -> Result<DeleteReceipt, ClientError> {
        decode(
            self.request(Method::DELETE, &format!("/webhooks/{webhook_id}"), &[], None)
                .await?,
        )
    }

    /// Sends a test event to a webhook endpoint.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn test_webhook(
        &self,
        webhook_id: &str,
    ) -> Result<WebhookTestResult, ClientError> {
        decode(
            self.request(
                Method::POST,
                &format!("/webhooks/{webhook_id}/test"),
                &[],
                None,
            )
            .await?,
        )
    }

    /// Lists delivery attempts for a webhook.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn list_webhook_deliveries(
        &self,
        webhook_id: &str,
        page: Option<u64>,
        limit: Option<u64>,
    ) -> Result<DeliveryList, ClientError> {
        let mut query = Vec::new();
        push_query(&mut query, "page", page);
        push_query(&mut query, "limit", limit);
        decode(
            self.request(
                Method::GET,
                &format!("/webhooks/{webhook_id}/deliveries"),
                &query,
                None,
            )
            .await?,
        )
    }
}
