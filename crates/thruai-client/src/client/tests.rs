// crates/thruai-client/src/client/tests.rs
// ============================================================================
// Module: Request Core Unit Tests
// Description: Unit tests for client construction and error rendering.
// Purpose: Validate base URL normalization and error message passthrough.
// Dependencies: thruai-client
// ============================================================================

//! ## Overview
//! Exercises the request core's constructor invariants and the error
//! messages surfaced to tool envelopes.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "Test-only panic-based assertions."
)]

use super::ClientError;
use super::ThruAiClient;
use super::USER_AGENT;

#[test]
fn base_url_drops_trailing_slashes() {
    let client = ThruAiClient::new("sk_test_abc", "https://api.thru.ai/").unwrap();
    assert_eq!(client.base_url(), "https://api.thru.ai");
}

#[test]
fn base_url_passes_through_unchanged_otherwise() {
    let client = ThruAiClient::new("sk_test_abc", "http://127.0.0.1:9000").unwrap();
    assert_eq!(client.base_url(), "http://127.0.0.1:9000");
}

#[test]
fn user_agent_names_the_server_and_version() {
    assert_eq!(
        USER_AGENT,
        format!("thruai-mcp-server/{}", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn api_error_displays_the_remote_message_verbatim() {
    let error = ClientError::Api {
        message: "not found".to_owned(),
    };
    assert_eq!(error.to_string(), "not found");
}
