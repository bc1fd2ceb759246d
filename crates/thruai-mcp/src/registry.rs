// crates/thruai-mcp/src/registry.rs
// ============================================================================
// Module: Tool Registry
// Description: Ordered registry binding tool contracts to async handlers.
// Purpose: Fix the served tool surface at startup and route lookups by name.
// Dependencies: thruai-client, thruai-contract, serde_json, thiserror, tokio
// ============================================================================

//! ## Overview
//! Tools register once at startup and the registry is immutable afterwards.
//! Registration order is listing order. Duplicate names are a fatal startup
//! error rather than a silent overwrite, so a misassembled surface never
//! serves.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use thruai_client::ClientError;
use thruai_client::ThruAiClient;
use thruai_contract::ToolContract;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Registry assembly failure.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Two tools attempted to register under the same name.
    #[error("duplicate tool name: {0}")]
    DuplicateName(String),
}

/// Failure raised by a tool handler.
///
/// Handler failures fold into the protocol envelope, never the JSON-RPC
/// error path, so the message text is exactly what the caller sees.
#[derive(Debug, Error)]
pub enum ToolCallError {
    /// The platform call behind the tool failed.
    #[error("{0}")]
    Platform(#[from] ClientError),
    /// The handler itself could not complete.
    #[error("{0}")]
    Internal(String),
}

// ============================================================================
// SECTION: Execution Context
// ============================================================================

/// Shared collaborators handed to every tool handler.
#[derive(Debug)]
pub struct ToolContext {
    /// Platform API client.
    pub client: ThruAiClient,
}

// ============================================================================
// SECTION: Handlers
// ============================================================================

/// Boxed future returned by a tool handler.
pub type HandlerFuture = Pin<Box<dyn Future<Output = Result<Value, ToolCallError>> + Send>>;

/// Async tool handler taking validated arguments.
pub type ToolHandler = Box<dyn Fn(Value, Arc<ToolContext>) -> HandlerFuture + Send + Sync>;

/// Boxes an async function as a registrable tool handler.
pub fn handler<F, Fut>(func: F) -> ToolHandler
where
    F: Fn(Value, Arc<ToolContext>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Value, ToolCallError>> + Send + 'static,
{
    Box::new(move |arguments, context| Box::pin(func(arguments, context)))
}

/// Decodes validated arguments into a handler's typed input.
///
/// Validated arguments conform to the tool contract, so a decode failure
/// means the contract and the typed input disagree.
///
/// # Errors
///
/// Returns [`ToolCallError::Internal`] when decoding fails.
pub fn decode_args<T: DeserializeOwned>(arguments: Value) -> Result<T, ToolCallError> {
    serde_json::from_value(arguments)
        .map_err(|err| ToolCallError::Internal(format!("invalid arguments: {err}")))
}

// ============================================================================
// SECTION: Registry
// ============================================================================

/// A contract bound to its handler.
pub struct RegisteredTool {
    /// Input contract and listing metadata.
    pub contract: ToolContract,
    /// Async handler invoked with validated arguments.
    pub handler: ToolHandler,
}

/// Ordered tool registry.
#[derive(Default)]
pub struct ToolRegistry {
    /// Registered tools in registration order.
    tools: Vec<RegisteredTool>,
}

impl ToolRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a tool, rejecting duplicate names.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateName`] when the name is taken.
    pub fn register(
        &mut self,
        contract: ToolContract,
        handler: ToolHandler,
    ) -> Result<(), RegistryError> {
        if self.tools.iter().any(|tool| tool.contract.name == contract.name) {
            return Err(RegistryError::DuplicateName(contract.name.to_owned()));
        }
        self.tools.push(RegisteredTool {
            contract,
            handler,
        });
        Ok(())
    }

    /// Looks up a tool by name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&RegisteredTool> {
        self.tools.iter().find(|tool| tool.contract.name == name)
    }

    /// Iterates contracts in registration order.
    pub fn contracts(&self) -> impl Iterator<Item = &ToolContract> {
        self.tools.iter().map(|tool| &tool.contract)
    }

    /// Number of registered tools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests;
