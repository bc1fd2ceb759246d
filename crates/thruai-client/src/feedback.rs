// crates/thruai-client/src/feedback.rs
// ============================================================================
// Module: Feedback Endpoints
// Description: Feedback submission and retrieval.
// Purpose: Thin typed wrappers over the /feedback endpoint family.
// Dependencies: reqwest, serde, serde_json
// ============================================================================

//! ## Overview
//! Feedback entities stay opaque; the submission body is typed so absent
//! priority is omitted.

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
use crate::types::FeedbackList;

// ============================================================================
// SECTION: Requests
// ============================================================================

/// Body for feedback submission.
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackRequest {
    /// Feedback category (`bug`, `feature`, or `general`).
    #[serde(rename = "type")]
    pub kind: String,
    /// Brief subject line.
    pub subject: String,
    /// Detailed description.
    pub description: String,
    /// Priority level (`low`, `medium`, or `high`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

// ============================================================================
// SECTION: Endpoints
// ============================================================================

impl ThruAiClient {
    /// Submits feedback to the platform team.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn submit_feedback(
        &self,
        request: &FeedbackRequest,
    ) -> Result<Value, ClientError> {
        let body = serde_json::to_value(request)?;
        self.request(Method::POST, "/feedback", &[], Some(body)).await
    }

    /// Lists feedback submissions, optionally filtered by category.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn list_feedback(
        &self,
        page: Option<u64>,
        page_size: Option<u64>,
        kind: Option<&str>,
    ) -> Result<FeedbackList, ClientError> {
        let mut query = Vec::new();
        push_query(&mut query, "page", page);
        push_query(&mut query, "pageSize", page_size);
        push_query(&mut query, "type", kind);
        decode(self.request(Method::GET, "/feedback", &query, None).await?)
    }

    /// Fetches one feedback submission.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn get_feedback(&self, feedback_id: &str) -> Result<Value, ClientError> {
        self.request(Method::GET, &format!("/feedback/{feedback_id}"), &[], None).await
    }
}
