// crates/thruai-mcp/src/tools/discovery.rs
// ============================================================================
// Module: Discovery Tools
// Description: API schema discovery tool.
// Purpose: Expose the platform's schema catalog so callers can learn exact
//          field names and request shapes.
// Dependencies: thruai-client, thruai-contract, serde_json
// ============================================================================

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use serde_json::Value;
use serde_json::json;
use thruai_contract::ToolContract;
use thruai_contract::object;

use crate::registry::RegistryError;
use crate::registry::ToolCallError;
use crate::registry::ToolContext;
use crate::registry::ToolRegistry;
use crate::registry::handler;

// ============================================================================
// SECTION: Registration
// ============================================================================

/// Registers the discovery tools.
pub(crate) fn register(registry: &mut ToolRegistry) -> Result<(), RegistryError> {
    registry.register(
        ToolContract {
            name: "get_schemas",
            description: "Discover API schemas for all resources to prevent field name typos and understand exact request formats.",
            input: object(vec![]),
        },
        handler(get_schemas),
    )
}

// ============================================================================
// SECTION: Handlers
// ============================================================================

/// Fetches the schema catalog.
async fn get_schemas(
    _arguments: Value,
    context: Arc<ToolContext>,
) -> Result<Value, ToolCallError> {
    let catalog = context.client.get_schemas().await?;
    let message = format!(
        "Retrieved API schemas (version {}). Use these to discover exact field names and types.",
        catalog.version,
    );
    Ok(json!({
        "success": true,
        "schemas": catalog.schemas,
        "version": catalog.version,
        "message": message,
    }))
}
