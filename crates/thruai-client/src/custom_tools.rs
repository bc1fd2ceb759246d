// crates/thruai-client/src/custom_tools.rs
// ============================================================================
// Module: Custom Tool Endpoints
// Description: Webhook-based tool CRUD and test invocation.
// Purpose: Thin typed wrappers over the /tools endpoint family.
// Dependencies: reqwest, serde, serde_json
// ============================================================================

//! ## Overview
//! Custom tools are endpoints agents call during live conversations, as
//! opposed to webhooks which deliver post-event notifications. Tool entities
//! stay opaque; the test receipt is typed because its `success` flag drives
//! the tool envelope.

// ============================================================================
// SECTION: Imports
// ============================================================================

use reqwest::Method;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use crate::client::ClientError;
use crate::client::ThruAiClient;
use crate::client::decode;
use crate::client::push_query;
use crate::types::CustomToolList;
use crate::types::DeleteReceipt;
use crate::types::ToolTestResult;

// ============================================================================
// SECTION: Requests
// ============================================================================

/// Body for custom tool creation.
#[derive(Debug, Clone, Serialize)]
pub struct CreateToolRequest {
    /// Tool name agents use for invocation.
    pub name: String,
    /// Short summary of the tool's behavior.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// HTTPS endpoint invoked when the tool is called.
    pub url: String,
    /// JSON schema of the tool's parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Map<String, Value>>,
    /// Secret for HMAC signature verification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    /// Custom headers sent with each invocation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Map<String, Value>>,
    /// Request timeout in seconds (1-30).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<f64>,
}

/// Body for custom tool updates; the name cannot change.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateToolRequest {
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New endpoint URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// New parameter schema.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Map<String, Value>>,
    /// New secret.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    /// New headers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Map<String, Value>>,
    /// New timeout in seconds (1-30).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<f64>,
}

// ============================================================================
// SECTION: Endpoints
// ============================================================================

impl ThruAiClient {
    /// Lists custom tools.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn list_tools(
        &self,
        page: Option<u64>,
        page_size: Option<u64>,
    ) -> Result<CustomToolList, ClientError> {
        let mut query = Vec::new();
        push_query(&mut query, "page", page);
        push_query(&mut query, "pageSize", page_size);
        decode(self.request(Method::GET, "/tools", &query, None).await?)
    }

    /// Fetches one custom tool.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn get_tool(&self, tool_id: &str) -> Result<Value, ClientError> {
        self.request(Method::GET, &format!("/tools/{tool_id}"), &[], None).await
    }

    /// Creates a custom tool.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn create_tool(
        &self,
        request: &CreateToolRequest,
    ) -> Result<Value, ClientError> {
        let body = serde_json::to_value(request)?;
        self.request(Method::POST, "/tools", &[], Some(body)).await
    }

    /// Updates a custom tool's configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn update_tool(
        &self,
        tool_id: &str,
        request: &UpdateToolRequest,
    ) -> Result<Value, ClientError> {
        let body = serde_json::to_value(request)?;
        self.request(Method::PATCH, &format!("/tools/{tool_id}"), &[], Some(body)).await
    }

    /// Deletes a custom tool.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn delete_tool(&self, tool_id: &str) -> Result<DeleteReceipt, ClientError> {
        decode(
            self.request(Method::DELETE, &format!("/tools/{tool_id}"), &[], None)
                .await?,
        )
    }

    /// Tests a custom tool against its endpoint.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn test_tool(
        &self,
        tool_id: &str,
        test_payload: Option<Map<String, Value>>,
    ) -> Result<ToolTestResult, ClientError> {
        let mut body = Map::new();
        if let Some(payload) = test_payload {
            body.insert("testPayload".to_owned(), Value::Object(payload));
        }
        decode(
            self.request(
                Method::POST,
                &format!("/tools/{tool_id}/test"),
                &[],
                Some(Value::Object(body)),
            )
            .await?,
        )
    }
}
