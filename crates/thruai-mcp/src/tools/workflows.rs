// crates/thruai-mcp/src/tools/workflows.rs
// ============================================================================
// Module: Workflow Tools
// Description: Workflow lifecycle, publishing, and execution tools.
// Purpose: Expose workflow CRUD, publish state transitions, manual triggers,
//          and execution history over the tool surface.
// Dependencies: thruai-client, thruai-contract, serde, serde_json
// ============================================================================

//! ## Overview
//! Workflow graphs (nodes and edges) stay opaque; the contracts accept them
//! as free-form arrays and hand them to the platform unchanged.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Map;
use serde_json::Value;
use serde_json::json;
use thruai_client::CreateWorkflowRequest;
use thruai_client::UpdateWorkflowRequest;
use thruai_contract::ToolContract;
use thruai_contract::any;
use thruai_contract::array;
use thruai_contract::defaulted;
use thruai_contract::map;
use thruai_contract::number;
use thruai_contract::object;
use thruai_contract::optional;
use thruai_contract::string;
use thruai_contract::string_min;

use crate::registry::RegistryError;
use crate::registry::ToolCallError;
use crate::registry::ToolContext;
use crate::registry::ToolRegistry;
use crate::registry::decode_args;
use crate::registry::handler;
use crate::tools::display_field;
use crate::tools::found_message;
use crate::tools::listing_payload;
use crate::tools::to_payload;

// ============================================================================
// SECTION: Registration
// ============================================================================

/// Registers the workflow tools.
pub(crate) fn register(registry: &mut ToolRegistry) -> Result<(), RegistryError> {
    registry.register(
        ToolContract {
            name: "list_workflows",
            description: "List all workflows for your organization. Workflows automate complex multi-step processes with 30+ node types (CRM, calendar, email, sheets, web, social, logic).",
            input: object(vec![
                (
                    "page",
                    defaulted(number().describe("Page number for pagination"), json!(1)),
                ),
                (
                    "pageSize",
                    defaulted(number().describe("Number of workflows per page"), json!(50)),
                ),
            ]),
        },
        handler(list_workflows),
    )?;
    registry.register(
        ToolContract {
            name: "get_workflow",
            description: "Get detailed information about a specific workflow including nodes, edges, and execution history.",
            input: object(vec![(
                "workflowId",
                string().describe("ID of the workflow to retrieve (format: WFL-xxxxx)"),
            )]),
        },
        handler(get_workflow),
    )?;
    registry.register(
        ToolContract {
            name: "create_workflow",
            description: "Create a new workflow to automate multi-step processes. Define nodes (handlers) and edges (connections) to build complex automation.",
            input: object(vec![
                ("name", string_min(1).describe("Name of the workflow")),
                (
                    "description",
                    optional(string().describe("Description of what the workflow does")),
                ),
                (
                    "nodes",
                    optional(array(any()).describe("Array of workflow nodes (handlers)")),
                ),
                (
                    "edges",
                    optional(array(any()).describe("Array of workflow edges (connections)")),
                ),
            ]),
        },
        handler(create_workflow),
    )?;
    registry.register(
        ToolContract {
            name: "update_workflow",
            description: "Update an existing workflow's configuration, nodes, or edges.",
            input: object(vec![
                (
                    "workflowId",
                    string().describe("ID of the workflow to update (format: WFL-xxxxx)"),
                ),
                ("name", optional(string().describe("New name"))),
                ("description", optional(string().describe("New description"))),
                ("nodes", optional(array(any()).describe("Updated nodes"))),
                ("edges", optional(array(any()).describe("Updated edges"))),
            ]),
        },
        handler(update_workflow),
    )?;
    registry.register(
        ToolContract {
            name: "delete_workflow",
            description: "Permanently delete a workflow. This cannot be undone.",
            input: object(vec![(
                "workflowId",
                string().describe("ID of the workflow to delete (format: WFL-xxxxx)"),
            )]),
        },
        handler(delete_workflow),
    )?;
    registry.register(
        ToolContract {
            name: "publish_workflow",
            description: "Publish a workflow to make it ready for execution. Workflows must be published before they can be triggered.",
            input: object(vec![(
                "workflowId",
                string().describe("ID of the workflow to publish (format: WFL-xxxxx)"),
            )]),
        },
        handler(publish_workflow),
    )?;
    registry.register(
        ToolContract {
            name: "unpublish_workflow",
            description: "Unpublish a workflow to prevent new executions while you make changes.",
            input: object(vec![(
                "workflowId",
                string().describe("ID of the workflow to unpublish (format: WFL-xxxxx)"),
            )]),
        },
        handler(unpublish_workflow),
    )?;
    registry.register(
        ToolContract {
            name: "trigger_workflow",
            description: "Manually trigger a workflow execution. The workflow must be published first.",
            input: object(vec![
                (
                    "workflowId",
                    string().describe("ID of the workflow to trigger (format: WFL-xxxxx)"),
                ),
                (
                    "input",
                    optional(map(any()).describe("Input data for the workflow execution")),
                ),
            ]),
        },
        handler(trigger_workflow),
    )?;
    registry.register(
        ToolContract {
            name: "list_workflow_executions",
            description: "List execution history for a workflow to monitor progress and debug issues.",
            input: object(vec![
                (
                    "workflowId",
                    string().describe("ID of the workflow (format: WFL-xxxxx)"),
                ),
                ("page", defaulted(number().describe("Page number"), json!(1))),
                (
                    "pageSize",
                    defaulted(number().describe("Results per page"), json!(50)),
                ),
            ]),
        },
        handler(list_workflow_executions),
    )
}

// ============================================================================
// SECTION: Inputs
// ============================================================================

/// Validated arguments for `list_workflows`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListWorkflowsInput {
    /// 1-based page number.
    page: u64,
    /// Entries per page.
    page_size: u64,
}

/// Validated arguments for single-workflow tools.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WorkflowIdInput {
    /// Workflow identifier.
    workflow_id: String,
}

/// Validated arguments for `create_workflow`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateWorkflowInput {
    /// Workflow display name.
    name: String,
    /// Short summary of the workflow's purpose.
    description: Option<String>,
    /// Workflow nodes, opaque to this layer.
    nodes: Option<Vec<Value>>,
    /// Workflow edges, opaque to this layer.
    edges: Option<Vec<Value>>,
}

/// Validated arguments for `update_workflow`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateWorkflowInput {
    /// Workflow identifier.
    workflow_id: String,
    /// New display name.
    name: Option<String>,
    /// New description.
    description: Option<String>,
    /// Updated nodes.
    nodes: Option<Vec<Value>>,
    /// Updated edges.
    edges: Option<Vec<Value>>,
}

/// Validated arguments for `trigger_workflow`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TriggerWorkflowInput {
    /// Workflow identifier.
    workflow_id: String,
    /// Input data handed to the execution.
    input: Option<Map<String, Value>>,
}

/// Validated arguments for `list_workflow_executions`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListExecutionsInput {
    /// Workflow identifier.
    workflow_id: String,
    /// 1-based page number.
    page: u64,
    /// Entries per page.
    page_size: u64,
}

// ============================================================================
// SECTION: Handlers
// ============================================================================

/// Lists workflows.
async fn list_workflows(
    arguments: Value,
    context: Arc<ToolContext>,
) -> Result<Value, ToolCallError> {
    let input: ListWorkflowsInput = decode_args(arguments)?;
    let listing = context
        .client
        .list_workflows(Some(input.page), Some(input.page_size))
        .await?;
    let message = found_message(listing.workflows.len(), "workflow");
    listing_payload("workflows", listing.workflows, listing.pagination, message)
}

/// Fetches one workflow with its graph.
async fn get_workflow(
    arguments: Value,
    context: Arc<ToolContext>,
) -> Result<Value, ToolCallError> {
    let input: WorkflowIdInput = decode_args(arguments)?;
    let workflow = context.client.get_workflow(&input.workflow_id).await?;
    Ok(json!({
        "success": true,
        "workflow": workflow,
        "message": format!("Retrieved workflow {}", input.workflow_id),
    }))
}

/// Creates a workflow.
async fn create_workflow(
    arguments: Value,
    context: Arc<ToolContext>,
) -> Result<Value, ToolCallError> {
    let input: CreateWorkflowInput = decode_args(arguments)?;
    let request = CreateWorkflowRequest {
        name: input.name.clone(),
        description: input.description,
        nodes: input.nodes,
        edges: input.edges,
    };
    let workflow = context.client.create_workflow(&request).await?;
    let id = display_field(&workflow, "id");
    Ok(json!({
        "success": true,
        "workflow": workflow,
        "message": format!(
            "Workflow \"{}\" created successfully! ID: {id}\n\nNext steps:\n1. Add nodes and edges to define the workflow logic\n2. Publish the workflow with publish_workflow\n3. Trigger execution with trigger_workflow",
            input.name,
        ),
    }))
}

/// Updates a workflow's configuration or graph.
async fn update_workflow(
    arguments: Value,
    context: Arc<ToolContext>,
) -> Result<Value, ToolCallError> {
    let input: UpdateWorkflowInput = decode_args(arguments)?;
    let request = UpdateWorkflowRequest {
        name: input.name,
        description: input.description,
        nodes: input.nodes,
        edges: input.edges,
    };
    let workflow = context.client.update_workflow(&input.workflow_id, &request).await?;
    Ok(json!({
        "success": true,
        "workflow": workflow,
        "message": format!("Workflow {} updated successfully!", input.workflow_id),
    }))
}

/// Deletes a workflow.
async fn delete_workflow(
    arguments: Value,
    context: Arc<ToolContext>,
) -> Result<Value, ToolCallError> {
    let input: WorkflowIdInput = decode_args(arguments)?;
    let receipt = context.client.delete_workflow(&input.workflow_id).await?;
    Ok(json!({
        "success": true,
        "message": receipt.message,
    }))
}

/// Publishes a workflow so it can execute.
async fn publish_workflow(
    arguments: Value,
    context: Arc<ToolContext>,
) -> Result<Value, ToolCallError> {
    let input: WorkflowIdInput = decode_args(arguments)?;
    let workflow = context.client.publish_workflow(&input.workflow_id).await?;
    Ok(json!({
        "success": true,
        "workflow": workflow,
        "message": format!(
            "Workflow {} published successfully! It is now ready to execute.",
            input.workflow_id,
        ),
    }))
}

/// Unpublishes a workflow, blocking new executions.
async fn unpublish_workflow(
    arguments: Value,
    context: Arc<ToolContext>,
) -> Result<Value, ToolCallError> {
    let input: WorkflowIdInput = decode_args(arguments)?;
    let workflow = context.client.unpublish_workflow(&input.workflow_id).await?;
    Ok(json!({
        "success": true,
        "workflow": workflow,
        "message": format!(
            "Workflow {} unpublished. It will not execute until published again.",
            input.workflow_id,
        ),
    }))
}

/// Triggers a workflow execution.
async fn trigger_workflow(
    arguments: Value,
    context: Arc<ToolContext>,
) -> Result<Value, ToolCallError> {
    let input: TriggerWorkflowInput = decode_args(arguments)?;
    let execution = context
        .client
        .trigger_workflow(&input.workflow_id, input.input)
        .await?;
    Ok(json!({
        "success": true,
        "execution": to_payload(&execution)?,
        "message": format!(
            "Workflow triggered! Execution ID: {}\nStatus: {}\n\nUse list_workflow_executions to check progress.",
            execution.execution_id, execution.status,
        ),
    }))
}

/// Lists execution history for a workflow.
async fn list_workflow_executions(
    arguments: Value,
    context: Arc<ToolContext>,
) -> Result<Value, ToolCallError> {
    let input: ListExecutionsInput = decode_args(arguments)?;
    let listing = context
        .client
        .list_workflow_executions(&input.workflow_id, Some(input.page), Some(input.page_size))
        .await?;
    let message = format!(
        "Found {} execution(s) for workflow {}",
        listing.executions.len(),
        input.workflow_id,
    );
    listing_payload("executions", listing.executions, listing.pagination, message)
}
