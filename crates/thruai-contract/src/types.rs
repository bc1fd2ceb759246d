// crates/thruai-contract/src/types.rs
// ============================================================================
// Module: Contract Types
// Description: Protocol-facing tool and resource listing shapes.
// Purpose: Define the wire shapes MCP clients see in tools/list and
//          resources/list responses.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! A [`ToolContract`] couples a tool's stable name and description with its
//! input [`FieldDescriptor`]; [`ToolContract::definition`] projects it into
//! the [`ToolDefinition`] wire shape served to clients. Resources carry no
//! input contract and list as plain [`ResourceDescriptor`]s.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::descriptor::FieldDescriptor;
use crate::project::project;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Declared tool contract: name, description, and input shape.
///
/// # Invariants
/// - `input` is an `Object` descriptor; tool arguments are always a JSON
///   object.
#[derive(Debug, Clone)]
pub struct ToolContract {
    /// Stable tool name (part of the versioned protocol surface).
    pub name: &'static str,
    /// Human-readable tool description shown to clients.
    pub description: &'static str,
    /// Input contract validated before every invocation.
    pub input: FieldDescriptor,
}

impl ToolContract {
    /// Projects the contract into its tools/list wire shape.
    #[must_use]
    pub fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name.to_owned(),
            description: self.description.to_owned(),
            input_schema: project(&self.input),
        }
    }
}

/// Tool entry as served in tools/list responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Stable tool name.
    pub name: String,
    /// Human-readable tool description.
    pub description: String,
    /// Projected JSON Schema for the tool's arguments.
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Resource entry as served in resources/list responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    /// Stable resource URI.
    pub uri: String,
    /// Short resource name.
    pub name: String,
    /// Human-readable resource description.
    pub description: String,
    /// Media type of the resource body.
    #[serde(rename = "mimeType")]
    pub mime_type: String,
}
