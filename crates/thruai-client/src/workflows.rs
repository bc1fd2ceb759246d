// crates/thruai-client/src/workflows.rs
// ============================================================================
// Module: Workflow Endpoints
// Description: Workflow CRUD, publishing, and execution control.
// Purpose: Thin typed wrappers over the /workflows endpoint family.
// Dependencies: reqwest, serde, serde_json
// ============================================================================

//! ## Overview
//! Workflow graphs (nodes/edges) and execution rows stay opaque; only the
//! trigger receipt is typed.

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
use crate::types::DeleteReceipt;
use crate::types::ExecutionList;
use crate::types::WorkflowExecution;
use crate::types::WorkflowList;

// ============================================================================
// SECTION: Requests
// ============================================================================

/// Body for workflow creation.
#[derive(Debug, Clone, Serialize)]
pub struct CreateWorkflowRequest {
    /// Workflow display name.
    pub name: String,
    /// Short summary of the workflow's purpose.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Workflow nodes (handlers), opaque to this layer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodes: Option<Vec<Value>>,
    /// Workflow edges (connections), opaque to this layer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edges: Option<Vec<Value>>,
}

/// Body for workflow updates; only present fields are sent.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateWorkflowRequest {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Updated nodes, opaque to this layer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodes: Option<Vec<Value>>,
    /// Updated edges, opaque to this layer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edges: Option<Vec<Value>>,
}

/// Body for a manual workflow trigger.
#[derive(Debug, Clone, Serialize)]
struct TriggerWorkflowRequest {
    /// Input data handed to the execution.
    #[serde(skip_serializing_if = "Option::is_none")]
    input: Option<Map<String, Value>>,
}

// ============================================================================
// SECTION: Endpoints
// ============================================================================

impl ThruAiClient {
    /// Lists workflows.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn list_workflows(
        &self,
        page: Option<u64>,
        page_size: Option<u64>,
    ) -> Result<WorkflowList, ClientError> {
        let mut query = Vec::new();
        push_query(&mut query, "page", page);
        push_query(&mut query, "pageSize", page_size);
        decode(self.request(Method::GET, "/workflows", &query, None).await?)
    }

    /// Fetches one workflow with its graph.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn get_workflow(&self, workflow_id: &str) -> Result<Value, ClientError> {
        self.request(Method::GET, &format!("/workflows/{workflow_id}"), &[], None).await
    }

    /// Creates a workflow.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn create_workflow(
        &self,
        request: &CreateWorkflowRequest,
    ) -> Result<Value, ClientError> {
        let body = serde_json::to_value(request)?;
        self.request(Method::POST, "/workflows", &[], Some(body)).await
    }

    /// Updates a workflow's configuration or graph.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn update_workflow(
        &self,
        workflow_id: &str,
        request: &UpdateWorkflowRequest,
    ) -> Result<Value, ClientError> {
        let body = serde_json::to_value(request)?;
        self.request(
            Method::PATCH,
            &format!("/workflows/{workflow_id}"),
            &[],
            Some(body),
        )
        .await
    }

    /// Deletes a workflow.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn delete_workflow(
        &self,
        workflow_id: &str,
    ) -> Result<DeleteReceipt, ClientError> {
        decode(
            self.request(Method::DELETE, &format!("/workflows/{workflow_id}"), &[], None)
                .await?,
        )
    }

    /// Publishes a workflow so it can execute.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn publish_workflow(&self, workflow_id: &str) -> Result<Value, ClientError> {
        self.request(
            Method::POST,
            &format!("/workflows/{workflow_id}/publish"),
            &[],
            None,
        )
        .await
    }

    /// Unpublishes a workflow, blocking new executions.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn unpublish_workflow(
        &self,
        workflow_id: &str,
    ) -> Result<Value, ClientError> {
        self.request(
            Method::POST,
            &format!("/workflows/{workflow_id}/unpublish"),
            &[],
            None,
        )
        .await
    }

    /// Triggers a workflow execution.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn trigger_workflow(
        &self,
        workflow_id: &str,
        input: Option<Map<String, Value>>,
    ) -> Result<WorkflowExecution, ClientError> {
        let body = serde_json::to_value(TriggerWorkflowRequest { input })?;
        decode(
            self.request(
                Method::POST,
                &format!("/workflows/{workflow_id}/trigger"),
                &[],
                Some(body),
            )
            .await?,
        )
    }

    /// Lists execution history for a workflow.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn list_workflow_executions(
        &self,
        workflow_id: &str,
        page: Option<u64>,
        page_size: Option<u64>,
    ) -> Result<ExecutionList, ClientError> {
        let mut query = Vec::new();
        push_query(&mut query, "page", page);
        push_query(&mut query, "pageSize", page_size);
        decode(
            self.request(
                Method::GET,
                &format!("/workflows/{workflow_id}/executions"),
                &query,
                None,
            )
            .await?,
        )
    }
}
