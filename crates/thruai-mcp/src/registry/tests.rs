// crates/thruai-mcp/src/registry/tests.rs
// ============================================================================
// Module: Registry Unit Tests
// Description: Unit tests for tool registration and lookup.
// Purpose: Validate duplicate rejection and registration-order listing.
// Dependencies: serde_json, thruai-client, thruai-contract, tokio
// ============================================================================

//! ## Overview
//! Exercises registry assembly rules ahead of the full tool surface.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "Test-only panic-based assertions."
)]

use std::sync::Arc;

use serde_json::json;
use thruai_client::ThruAiClient;
use thruai_contract::ToolContract;
use thruai_contract::object;
use thruai_contract::string;

use super::RegistryError;
use super::ToolContext;
use super::ToolRegistry;
use super::handler;

/// Builds a minimal contract under the given name.
fn contract(name: &'static str) -> ToolContract {
    ToolContract {
        name,
        description: "test tool",
        input: object(vec![("value", string())]),
    }
}

/// Builds a context pointing at a closed port; no request is ever sent.
fn context() -> Arc<ToolContext> {
    Arc::new(ToolContext {
        client: ThruAiClient::new("sk_test_abc", "http://127.0.0.1:1").unwrap(),
    })
}

#[test]
fn duplicate_names_are_rejected() {
    let mut registry = ToolRegistry::new();
    registry.register(contract("echo"), handler(|args, _| async move { Ok(args) })).unwrap();
    let result = registry.register(contract("echo"), handler(|args, _| async move { Ok(args) }));
    assert!(matches!(result, Err(RegistryError::DuplicateName(name)) if name == "echo"));
    assert_eq!(registry.len(), 1);
}

#[test]
fn contracts_list_in_registration_order() {
    let mut registry = ToolRegistry::new();
    registry.register(contract("first"), handler(|args, _| async move { Ok(args) })).unwrap();
    registry.register(contract("second"), handler(|args, _| async move { Ok(args) })).unwrap();
    let names: Vec<&str> = registry.contracts().map(|contract| contract.name).collect();
    assert_eq!(names, vec!["first", "second"]);
}

#[tokio::test]
async fn lookup_returns_the_bound_handler() {
    let mut registry = ToolRegistry::new();
    registry.register(contract("echo"), handler(|args, _| async move { Ok(args) })).unwrap();
    assert!(registry.lookup("missing").is_none());
    let tool = registry.lookup("echo").unwrap();
    let result = (tool.handler)(json!({"value": "hi"}), context()).await.unwrap();
    assert_eq!(result, json!({"value": "hi"}));
}
