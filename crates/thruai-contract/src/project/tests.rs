// crates/thruai-contract/src/project/tests.rs
// ============================================================================
// Module: Projection Unit Tests
// Description: Unit tests for JSON Schema projection.
// Purpose: Validate schema shapes, required-list rules, and purity.
// Dependencies: thruai-contract
// ============================================================================

//! ## Overview
//! Exercises the projector one variant at a time and confirms optionality is
//! carried only through the enclosing `required` list.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "Test-only panic-based assertions."
)]

use serde_json::json;

use super::project;
use crate::descriptor::any;
use crate::descriptor::array;
use crate::descriptor::defaulted;
use crate::descriptor::map;
use crate::descriptor::number;
use crate::descriptor::object;
use crate::descriptor::optional;
use crate::descriptor::string;
use crate::descriptor::string_enum;
use crate::descriptor::string_min;

#[test]
fn optional_number_field_omits_required_key() {
    let contract = object(vec![("age", optional(number()))]);
    assert_eq!(
        project(&contract),
        json!({
            "type": "object",
            "properties": {"age": {"type": "number"}},
        })
    );
}

#[test]
fn required_list_names_exactly_the_unwrapped_fields() {
    let contract = object(vec![
        ("name", string_min(1)),
        ("description", optional(string())),
        ("pipelineMode", defaulted(string_enum(&["s2s", "traditional"]), json!("s2s"))),
        ("to", string()),
    ]);
    let schema = project(&contract);
    assert_eq!(schema["required"], json!(["name", "to"]));
}

#[test]
fn string_projection_carries_min_length_and_description() {
    let schema = project(&string_min(1).describe("Name of the voice agent"));
    assert_eq!(
        schema,
        json!({
            "type": "string",
            "description": "Name of the voice agent",
            "minLength": 1,
        })
    );
}

#[test]
fn enum_projects_as_string_with_values() {
    let schema = project(&string_enum(&["bug", "feature", "general"]));
    assert_eq!(
        schema,
        json!({"type": "string", "enum": ["bug", "feature", "general"]})
    );
}

#[test]
fn defaulted_merges_default_into_inner_schema() {
    let schema = project(&defaulted(string(), json!("alloy")));
    assert_eq!(schema, json!({"type": "string", "default": "alloy"}));
}

#[test]
fn array_projects_items_recursively() {
    let schema = project(&array(object(vec![("phoneNumber", string())])));
    assert_eq!(
        schema,
        json!({
            "type": "array",
            "items": {
                "type": "object",
                "properties": {"phoneNumber": {"type": "string"}},
                "required": ["phoneNumber"],
            },
        })
    );
}

#[test]
fn map_projects_additional_properties() {
    let schema = project(&map(string()));
    assert_eq!(
        schema,
        json!({"type": "object", "additionalProperties": {"type": "string"}})
    );
}

#[test]
fn any_projects_generic_object_schema() {
    assert_eq!(project(&any()), json!({"type": "object"}));
}

#[test]
fn optional_projection_is_transparent() {
    assert_eq!(project(&optional(number())), project(&number()));
}

#[test]
fn projection_is_pure() {
    let contract = object(vec![
        ("events", array(string())),
        ("secret", optional(string())),
    ]);
    assert_eq!(project(&contract), project(&contract));
}
