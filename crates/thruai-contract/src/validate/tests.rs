// crates/thruai-contract/src/validate/tests.rs
// ============================================================================
// Module: Validation Unit Tests
// Description: Unit tests for contract validation semantics.
// Purpose: Validate stripping, defaulting, fail-complete aggregation, and
//          path rendering against untrusted input.
// Dependencies: thruai-contract
// ============================================================================

//! ## Overview
//! Exercises the validator against the shapes tools actually declare:
//! defaulted enums, minimum-length strings, nested contact arrays, and
//! free-form maps.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "Test-only panic-based assertions."
)]

use serde_json::json;

use super::FailureReason;
use super::PathSegment;
use super::describe_failures;
use super::validate;
use crate::descriptor::any;
use crate::descriptor::array;
use crate::descriptor::boolean;
use crate::descriptor::defaulted;
use crate::descriptor::map;
use crate::descriptor::number;
use crate::descriptor::object;
use crate::descriptor::optional;
use crate::descriptor::string;
use crate::descriptor::string_enum;
use crate::descriptor::string_min;

#[test]
fn defaulted_enum_applied_on_absence() {
    let contract = object(vec![
        ("name", string_min(1)),
        (
            "pipelineMode",
            defaulted(string_enum(&["s2s", "traditional"]), json!("s2s")),
        ),
    ]);
    let validated = validate(&contract, &json!({"name": "Bot"})).unwrap();
    assert_eq!(validated, json!({"name": "Bot", "pipelineMode": "s2s"}));
}

#[test]
fn missing_required_field_reports_path_and_reason() {
    let contract = object(vec![
        ("name", string_min(1)),
        (
            "pipelineMode",
            defaulted(string_enum(&["s2s", "traditional"]), json!("s2s")),
        ),
    ]);
    let failures = validate(&contract, &json!({})).unwrap_err();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].path, vec![PathSegment::Key("name".to_owned())]);
    assert_eq!(failures[0].reason, FailureReason::Missing);
}

#[test]
fn string_array_passes_through_unchanged() {
    let contract = object(vec![("events", array(string()))]);
    let raw = json!({"events": ["a", "b"]});
    assert_eq!(validate(&contract, &raw).unwrap(), raw);
}

#[test]
fn empty_string_fails_min_length() {
    let contract = object(vec![("name", string_min(1))]);
    let failures = validate(&contract, &json!({"name": ""})).unwrap_err();
    assert_eq!(failures[0].reason, FailureReason::BelowMinLength);
}

#[test]
fn fail_complete_reports_every_invalid_field() {
    let contract = object(vec![
        ("subject", string_min(1)),
        ("priority", string_enum(&["low", "medium", "high"])),
    ]);
    let failures =
        validate(&contract, &json!({"subject": 7, "priority": "urgent"})).unwrap_err();
    assert_eq!(failures.len(), 2);
    assert_eq!(failures[0].reason, FailureReason::WrongType);
    assert_eq!(failures[1].reason, FailureReason::NotInEnum);
    assert_eq!(
        describe_failures(&failures),
        "subject: wrong-type; priority: not-in-enum"
    );
}

#[test]
fn unknown_keys_are_stripped_not_rejected() {
    let contract = object(vec![("agentId", string())]);
    let validated = validate(
        &contract,
        &json!({"agentId": "AGT-1", "rogue": true, "extra": [1, 2]}),
    )
    .unwrap();
    assert_eq!(validated, json!({"agentId": "AGT-1"}));
}

#[test]
fn null_is_wrong_type_not_absence() {
    let contract = object(vec![("note", optional(string()))]);
    let failures = validate(&contract, &json!({"note": null})).unwrap_err();
    assert_eq!(failures[0].reason, FailureReason::WrongType);
}

#[test]
fn absent_optional_field_is_omitted_from_output() {
    let contract = object(vec![
        ("agentId", string()),
        ("from", optional(string())),
    ]);
    let validated = validate(&contract, &json!({"agentId": "AGT-1"})).unwrap();
    assert_eq!(validated, json!({"agentId": "AGT-1"}));
}

#[test]
fn no_coercion_between_primitives() {
    let contract = object(vec![
        ("page", number()),
        ("isActive", boolean()),
    ]);
    let failures =
        validate(&contract, &json!({"page": "1", "isActive": "true"})).unwrap_err();
    assert_eq!(failures.len(), 2);
    assert!(failures.iter().all(|f| f.reason == FailureReason::WrongType));
}

#[test]
fn nested_array_failure_renders_indexed_path() {
    let contract = object(vec![(
        "contacts",
        array(object(vec![
            ("phoneNumber", string()),
            ("name", optional(string())),
        ])),
    )]);
    let raw = json!({"contacts": [{"phoneNumber": "+14155550100"}, {"name": "Ada"}]});
    let failures = validate(&contract, &raw).unwrap_err();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].to_string(), "contacts[1].phoneNumber: missing");
}

#[test]
fn map_values_are_checked_and_keys_pass_through() {
    let contract = object(vec![("headers", optional(map(string())))]);
    let validated =
        validate(&contract, &json!({"headers": {"x-a": "1", "x-b": "2"}})).unwrap();
    assert_eq!(validated, json!({"headers": {"x-a": "1", "x-b": "2"}}));

    let failures = validate(&contract, &json!({"headers": {"x-a": 1}})).unwrap_err();
    assert_eq!(failures[0].to_string(), "headers.x-a: wrong-type");
}

#[test]
fn any_accepts_arbitrary_values() {
    let contract = object(vec![("customData", optional(map(any())))]);
    let raw = json!({"customData": {"nested": {"deep": [1, "two", null]}}});
    assert_eq!(validate(&contract, &raw).unwrap(), raw);
}

#[test]
fn non_object_input_fails_at_root() {
    let contract = object(vec![("name", string())]);
    let failures = validate(&contract, &json!("not an object")).unwrap_err();
    assert_eq!(failures[0].to_string(), "input: wrong-type");
}
