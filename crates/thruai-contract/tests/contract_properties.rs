// crates/thruai-contract/tests/contract_properties.rs
// ============================================================================
// Module: Contract Property Tests
// Description: Property-based tests for projection and validation.
// Purpose: Validate required-set correctness and projection purity across
//          arbitrary field combinations.
// Dependencies: thruai-contract, proptest
// ============================================================================

//! ## Overview
//! Generates contracts with arbitrary mixes of required, optional, and
//! defaulted fields and checks the projected `required` list and the
//! validator's behavior on empty input against the declared shape.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "Test-only panic-based assertions."
)]

use proptest::prelude::proptest;
use serde_json::Value;
use serde_json::json;
use thruai_contract::FailureReason;
use thruai_contract::FieldDescriptor;
use thruai_contract::defaulted;
use thruai_contract::optional;
use thruai_contract::project;
use thruai_contract::string;
use thruai_contract::validate;

/// Field kind selector used by the generators.
fn build_field(kind: u8) -> FieldDescriptor {
    match kind {
        0 => string(),
        1 => optional(string()),
        _ => defaulted(string(), json!("fallback")),
    }
}

/// Builds an object contract from generated field kinds.
fn build_contract(kinds: &[u8]) -> FieldDescriptor {
    FieldDescriptor::Object {
        fields: kinds
            .iter()
            .enumerate()
            .map(|(index, kind)| (format!("field{index}"), build_field(*kind)))
            .collect(),
        description: None,
    }
}

proptest! {
    #[test]
    fn required_list_is_exactly_the_unwrapped_fields(
        kinds in proptest::collection::vec(0u8..3, 0..8),
    ) {
        let contract = build_contract(&kinds);
        let schema = project(&contract);
        let expected: Vec<Value> = kinds
            .iter()
            .enumerate()
            .filter(|(_, kind)| **kind == 0)
            .map(|(index, _)| json!(format!("field{index}")))
            .collect();
        match schema.get("required") {
            Some(Value::Array(required)) => assert_eq!(required, &expected),
            None => assert!(expected.is_empty()),
            Some(other) => panic!("unexpected required shape: {other}"),
        }
    }

    #[test]
    fn projection_is_referentially_transparent(
        kinds in proptest::collection::vec(0u8..3, 0..8),
    ) {
        let contract = build_contract(&kinds);
        assert_eq!(project(&contract), project(&contract));
    }

    #[test]
    fn empty_input_fails_required_and_defaults_the_rest(
        kinds in proptest::collection::vec(0u8..3, 0..8),
    ) {
        let contract = build_contract(&kinds);
        let required_count = kinds.iter().filter(|kind| **kind == 0).count();
        match validate(&contract, &json!({})) {
            Ok(value) => {
                assert_eq!(required_count, 0);
                let entries = value.as_object().unwrap();
                for (index, kind) in kinds.iter().enumerate() {
                    let name = format!("field{index}");
                    match kind {
                        1 => assert!(!entries.contains_key(&name)),
                        _ => assert_eq!(entries.get(&name), Some(&json!("fallback"))),
                    }
                }
            }
            Err(failures) => {
                assert_eq!(failures.len(), required_count);
                assert!(
                    failures.iter().all(|f| f.reason == FailureReason::Missing)
                );
            }
        }
    }
}
