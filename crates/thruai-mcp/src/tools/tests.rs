// crates/thruai-mcp/src/tools/tests.rs
// ============================================================================
// Module: Tool Surface Unit Tests
// Description: Unit tests for the assembled tool surface and its helpers.
// Purpose: Validate surface size, naming, contract projections, and the
//          response-shaping helpers without a live platform.
// Dependencies: serde_json, thruai-client
// ============================================================================

//! ## Overview
//! Handler behavior against a real HTTP exchange is covered by the
//! integration suite; these tests pin the declared surface itself.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "Test-only panic-based assertions."
)]

use std::collections::HashSet;

use serde_json::json;
use thruai_client::Pagination;

use super::display_field;
use super::found_message;
use super::listing_payload;
use super::paged_found_message;
use super::register_all;

#[test]
fn the_full_surface_registers_fifty_two_tools() {
    let registry = register_all().unwrap();
    assert_eq!(registry.len(), 52);
}

#[test]
fn tool_names_are_unique() {
    let registry = register_all().unwrap();
    let names: HashSet<&str> = registry.contracts().map(|contract| contract.name).collect();
    assert_eq!(names.len(), registry.len());
}

#[test]
fn every_contract_projects_an_object_schema() {
    let registry = register_all().unwrap();
    for contract in registry.contracts() {
        let definition = contract.definition();
        assert_eq!(definition.input_schema["type"], "object", "{}", contract.name);
        assert!(!definition.description.is_empty(), "{}", contract.name);
    }
}

#[test]
fn create_agent_defaults_pipeline_mode_and_voice() {
    let registry = register_all().unwrap();
    let contract = registry.lookup("create_agent").unwrap();
    let schema = contract.contract.definition().input_schema;
    assert_eq!(schema["required"], json!(["name"]));
    assert_eq!(schema["properties"]["pipelineMode"]["default"], "s2s");
    assert_eq!(schema["properties"]["s2sVoice"]["default"], "alloy");
}

#[test]
fn quickstart_defaults_the_area_code_and_model() {
    let registry = register_all().unwrap();
    let contract = registry.lookup("quickstart").unwrap();
    let schema = contract.contract.definition().input_schema;
    assert_eq!(schema["properties"]["areaCode"]["default"], "415");
    assert_eq!(schema["properties"]["model"]["default"], "gpt-realtime");
}

#[test]
fn list_tools_default_to_page_one_of_fifty() {
    let registry = register_all().unwrap();
    for name in ["list_agents", "list_calls", "list_workflows", "list_campaigns"] {
        let contract = registry.lookup(name).unwrap();
        let schema = contract.contract.definition().input_schema;
        assert_eq!(schema["properties"]["page"]["default"], 1, "{name}");
        assert_eq!(schema["properties"]["pageSize"]["default"], 50, "{name}");
    }
}

#[test]
fn submit_feedback_constrains_the_category() {
    let registry = register_all().unwrap();
    let contract = registry.lookup("submit_feedback").unwrap();
    let schema = contract.contract.definition().input_schema;
    assert_eq!(
        schema["properties"]["type"]["enum"],
        json!(["bug", "feature", "general"])
    );
}

#[test]
fn display_field_renders_strings_bare_and_other_values_as_json() {
    let entity = json!({ "id": "AGT-1", "count": 3 });
    assert_eq!(display_field(&entity, "id"), "AGT-1");
    assert_eq!(display_field(&entity, "count"), "3");
    assert_eq!(display_field(&entity, "missing"), "unknown");
}

#[test]
fn paged_found_message_rounds_the_page_count_up() {
    let pagination = Pagination {
        page: 2,
        page_size: 10,
        total: 25,
    };
    assert_eq!(
        paged_found_message(10, "agent", Some(&pagination)),
        "Found 10 agent(s) (page 2 of 3)"
    );
}

#[test]
fn paged_found_message_omits_page_info_without_pagination() {
    assert_eq!(paged_found_message(4, "call", None), "Found 4 call(s)");
    assert_eq!(found_message(4, "call"), "Found 4 call(s)");
}

#[test]
fn listing_payload_drops_an_absent_pagination_block() {
    let payload = listing_payload(
        "agents",
        vec![json!({ "id": "AGT-1" })],
        None,
        "Found 1 agent(s)".to_owned(),
    )
    .unwrap();
    assert_eq!(payload["success"], true);
    assert!(payload.get("pagination").is_none());
    assert_eq!(payload["agents"][0]["id"], "AGT-1");
}
