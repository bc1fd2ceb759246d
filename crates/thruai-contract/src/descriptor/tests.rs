// crates/thruai-contract/src/descriptor/tests.rs
// ============================================================================
// Module: Descriptor Unit Tests
// Description: Unit tests for descriptor construction and wrappers.
// Purpose: Validate requiredness and description placement rules.
// Dependencies: thruai-contract
// ============================================================================

//! ## Overview
//! Exercises the descriptor constructors, the one-layer requiredness rule,
//! and description delegation through `Optional`/`Defaulted` wrappers.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "Test-only panic-based assertions."
)]

use serde_json::json;

use super::FieldDescriptor;
use super::array;
use super::defaulted;
use super::object;
use super::optional;
use super::string;
use super::string_enum;
use super::string_min;

#[test]
fn required_iff_not_optional_or_defaulted() {
    assert!(string().is_required());
    assert!(string_min(1).is_required());
    assert!(array(string()).is_required());
    assert!(!optional(string()).is_required());
    assert!(!defaulted(string_enum(&["a", "b"]), json!("a")).is_required());
}

#[test]
fn requiredness_unwraps_exactly_one_layer() {
    // The wrapper itself decides requiredness; the inner shape never does.
    let wrapped = optional(array(string_min(1)));
    assert!(!wrapped.is_required());
    if let FieldDescriptor::Optional { inner } = wrapped {
        assert!(inner.is_required());
    } else {
        panic!("expected optional wrapper");
    }
}

#[test]
fn describe_sets_leaf_description() {
    let described = string().describe("Agent name");
    assert_eq!(
        described,
        FieldDescriptor::String {
            min_length: None,
            description: Some("Agent name".to_owned()),
        }
    );
}

#[test]
fn describe_delegates_through_wrappers() {
    let described = optional(string()).describe("Optional note");
    let FieldDescriptor::Optional { inner } = described else {
        panic!("expected optional wrapper");
    };
    assert_eq!(
        *inner,
        FieldDescriptor::String {
            min_length: None,
            description: Some("Optional note".to_owned()),
        }
    );
}

#[test]
fn object_preserves_declaration_order() {
    let contract = object(vec![
        ("zeta", string()),
        ("alpha", string()),
        ("mid", optional(string())),
    ]);
    let FieldDescriptor::Object { fields, .. } = contract else {
        panic!("expected object descriptor");
    };
    let names: Vec<&str> = fields.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["zeta", "alpha", "mid"]);
}
