// crates/thruai-mcp/src/resources/tests.rs
// ============================================================================
// Module: Resource Registry Unit Tests
// Description: Unit tests for the fixed resource surface.
// Purpose: Validate listing order, descriptor shape, and unknown-URI
//          rejection.
// Dependencies: thruai-client, tokio
// ============================================================================

//! ## Overview
//! Exercises registry shape without touching the platform; fetch behavior
//! is covered by the server integration suite.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "Test-only panic-based assertions."
)]

use std::sync::Arc;

use thruai_client::ThruAiClient;

use super::ResourceError;
use super::ResourceRegistry;
use crate::audit::NoopAuditSink;
use crate::registry::ToolContext;

/// Builds a registry over a closed port; listing tests send no requests.
fn registry() -> ResourceRegistry {
    let context = Arc::new(ToolContext {
        client: ThruAiClient::new("sk_test_abc", "http://127.0.0.1:1").unwrap(),
    });
    ResourceRegistry::new(context, Arc::new(NoopAuditSink))
}

#[test]
fn seven_resources_list_in_fixed_order() {
    let descriptors = registry().descriptors();
    let uris: Vec<&str> = descriptors.iter().map(|entry| entry.uri.as_str()).collect();
    assert_eq!(
        uris,
        vec![
            "thruai://agents",
            "thruai://workflows",
            "thruai://providers",
            "thruai://campaigns",
            "thruai://webhooks",
            "thruai://tools",
            "thruai://calls/recent",
        ]
    );
}

#[test]
fn every_resource_serves_json() {
    for descriptor in registry().descriptors() {
        assert_eq!(descriptor.mime_type, "application/json");
        assert!(!descriptor.name.is_empty());
        assert!(!descriptor.description.is_empty());
    }
}

#[tokio::test]
async fn unknown_uri_is_rejected_without_a_fetch() {
    let result = registry().read("thruai://nope").await;
    assert!(matches!(result, Err(ResourceError::Unknown(uri)) if uri == "thruai://nope"));
}
