// crates/thruai-mcp/src/tools.rs
// ============================================================================
// Module: Tool Surface
// Description: Assembly of the full MCP tool surface.
// Purpose: Register every tool contract and handler in a fixed order and
//          share the response-shaping helpers the handlers use.
// Dependencies: thruai-client, thruai-contract, serde, serde_json
// ============================================================================

//! ## Overview
//! Each submodule owns one platform domain and registers its tools; this
//! module fixes the overall registration order and provides the helpers
//! that shape handler responses (entity field display, listing messages,
//! payload serialization). The surface is assembled once at startup.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod agents;
mod analytics;
mod calls;
mod campaigns;
mod custom_tools;
mod discovery;
mod feedback;
mod providers;
mod telephony;
mod webhooks;
mod workflows;

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;
use serde_json::Map;
use serde_json::Value;
use thruai_client::Pagination;

use crate::registry::RegistryError;
use crate::registry::ToolCallError;
use crate::registry::ToolRegistry;

// ============================================================================
// SECTION: Assembly
// ============================================================================

/// Builds the full tool registry in its fixed registration order.
///
/// # Errors
///
/// Returns a [`RegistryError`] when two tools share a name.
pub fn register_all() -> Result<ToolRegistry, RegistryError> {
    let mut registry = ToolRegistry::new();
    agents::register(&mut registry)?;
    calls::register(&mut registry)?;
    telephony::register(&mut registry)?;
    workflows::register(&mut registry)?;
    campaigns::register(&mut registry)?;
    webhooks::register(&mut registry)?;
    custom_tools::register(&mut registry)?;
    analytics::register(&mut registry)?;
    providers::register(&mut registry)?;
    feedback::register(&mut registry)?;
    discovery::register(&mut registry)?;
    Ok(registry)
}

// ============================================================================
// SECTION: Response Helpers
// ============================================================================

/// Renders one field of an opaque entity for a human-readable message.
pub(crate) fn display_field(entity: &Value, key: &str) -> String {
    match entity.get(key) {
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
        None => "unknown".to_owned(),
    }
}

/// `Found N noun(s)` message for unpaged listings.
pub(crate) fn found_message(count: usize, noun: &str) -> String {
    format!("Found {count} {noun}(s)")
}

/// `Found N noun(s) (page X of Y)` message for paged listings.
pub(crate) fn paged_found_message(
    count: usize,
    noun: &str,
    pagination: Option<&Pagination>,
) -> String {
    match pagination {
        Some(pagination) if pagination.page_size > 0 => format!(
            "Found {count} {noun}(s) (page {} of {})",
            pagination.page,
            pagination.total.div_ceil(pagination.page_size),
        ),
        _ => found_message(count, noun),
    }
}

/// Serializes a typed response shape into a handler payload.
pub(crate) fn to_payload<T: Serialize>(payload: &T) -> Result<Value, ToolCallError> {
    serde_json::to_value(payload)
        .map_err(|err| ToolCallError::Internal(format!("serialization failed: {err}")))
}

/// Assembles a success payload for a listing; the pagination block is
/// carried only when the platform returned one.
pub(crate) fn listing_payload(
    key: &str,
    items: Vec<Value>,
    pagination: Option<Pagination>,
    message: String,
) -> Result<Value, ToolCallError> {
    let mut payload = Map::new();
    payload.insert("success".to_owned(), Value::Bool(true));
    payload.insert(key.to_owned(), Value::Array(items));
    if let Some(pagination) = pagination {
        payload.insert("pagination".to_owned(), to_payload(&pagination)?);
    }
    payload.insert("message".to_owned(), Value::String(message));
    Ok(Value::Object(payload))
}

#[cfg(test)]
mod tests;
