// crates/thruai-contract/src/descriptor.rs
// ============================================================================
// Module: Field Descriptors
// Description: Tagged descriptor tree for tool input contracts.
// Purpose: Represent input shapes as inspectable data instead of imperative
//          validation code.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! A [`FieldDescriptor`] is a closed sum type describing one node of a tool
//! input contract: primitives, enums, arrays, fixed-key objects, free-form
//! maps, and the `Optional`/`Defaulted` wrappers that control the projected
//! `required` list. Contracts are built compositionally from the helper
//! constructors at process start and never mutated afterward.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;

// ============================================================================
// SECTION: Descriptor Tree
// ============================================================================

/// One node of a tool input contract.
///
/// # Invariants
/// - `Optional` and `Defaulted` never wrap one another on the same field.
/// - A field is required iff its descriptor is neither `Optional` nor
///   `Defaulted` after unwrapping exactly one layer.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldDescriptor {
    /// UTF-8 string, optionally with a minimum character count.
    String {
        /// Minimum number of characters accepted.
        min_length: Option<usize>,
        /// Human-readable field description for the projected schema.
        description: Option<String>,
    },
    /// JSON number (integer or float).
    Number {
        /// Human-readable field description for the projected schema.
        description: Option<String>,
    },
    /// JSON boolean.
    Boolean {
        /// Human-readable field description for the projected schema.
        description: Option<String>,
    },
    /// String restricted to an ordered set of allowed values.
    Enum {
        /// Allowed values, in declaration order.
        values: Vec<String>,
        /// Human-readable field description for the projected schema.
        description: Option<String>,
    },
    /// Ordered sequence with a uniform element shape.
    Array {
        /// Descriptor every element must satisfy.
        element: Box<FieldDescriptor>,
        /// Human-readable field description for the projected schema.
        description: Option<String>,
    },
    /// Fixed-key object; declaration order drives the `required` list.
    Object {
        /// Declared fields, in declaration order.
        fields: Vec<(String, FieldDescriptor)>,
        /// Human-readable field description for the projected schema.
        description: Option<String>,
    },
    /// Free-form string-keyed map with a uniform value shape.
    Map {
        /// Descriptor every value must satisfy.
        value_type: Box<FieldDescriptor>,
    },
    /// Unconstrained value; validates anything and projects as the generic
    /// object schema.
    Any,
    /// Field that may be absent; absent fields stay absent after validation.
    Optional {
        /// Descriptor applied when the field is present.
        inner: Box<FieldDescriptor>,
    },
    /// Field that receives `default` when absent.
    Defaulted {
        /// Descriptor applied when the field is present.
        inner: Box<FieldDescriptor>,
        /// Value substituted when the field is absent.
        default: Value,
    },
}

impl FieldDescriptor {
    /// Attaches a description, delegating through `Optional`/`Defaulted`
    /// wrappers so the text lands on the projected leaf schema.
    ///
    /// `Map` carries no description in the projected form; describing one is
    /// a no-op.
    #[must_use]
    pub fn describe(self, text: &str) -> Self {
        match self {
            Self::String { min_length, .. } => Self::String {
                min_length,
                description: Some(text.to_owned()),
            },
            Self::Number { .. } => Self::Number {
                description: Some(text.to_owned()),
            },
            Self::Boolean { .. } => Self::Boolean {
                description: Some(text.to_owned()),
            },
            Self::Enum { values, .. } => Self::Enum {
                values,
                description: Some(text.to_owned()),
            },
            Self::Array { element, .. } => Self::Array {
                element,
                description: Some(text.to_owned()),
            },
            Self::Object { fields, .. } => Self::Object {
                fields,
                description: Some(text.to_owned()),
            },
            Self::Map { value_type } => Self::Map { value_type },
            Self::Any => Self::Any,
            Self::Optional { inner } => Self::Optional {
                inner: Box::new(inner.describe(text)),
            },
            Self::Defaulted { inner, default } => Self::Defaulted {
                inner: Box::new(inner.describe(text)),
                default,
            },
        }
    }

    /// Returns whether a field with this descriptor is required, i.e. the
    /// descriptor is neither `Optional` nor `Defaulted`.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        !matches!(self, Self::Optional { .. } | Self::Defaulted { .. })
    }
}

// ============================================================================
// SECTION: Constructors
// ============================================================================

/// Unconstrained string descriptor.
#[must_use]
pub fn string() -> FieldDescriptor {
    FieldDescriptor::String {
        min_length: None,
        description: None,
    }
}

/// String descriptor with a minimum character count.
#[must_use]
pub fn string_min(min_length: usize) -> FieldDescriptor {
    FieldDescriptor::String {
        min_length: Some(min_length),
        description: None,
    }
}

/// Number descriptor.
#[must_use]
pub fn number() -> FieldDescriptor {
    FieldDescriptor::Number { description: None }
}

/// Boolean descriptor.
#[must_use]
pub fn boolean() -> FieldDescriptor {
    FieldDescriptor::Boolean { description: None }
}

/// Enum descriptor over the given string values.
#[must_use]
pub fn string_enum(values: &[&str]) -> FieldDescriptor {
    FieldDescriptor::Enum {
        values: values.iter().map(|value| (*value).to_owned()).collect(),
        description: None,
    }
}

/// Array descriptor with a uniform element shape.
#[must_use]
pub fn array(element: FieldDescriptor) -> FieldDescriptor {
    FieldDescriptor::Array {
        element: Box::new(element),
        description: None,
    }
}

/// Fixed-key object descriptor; field order is preserved.
#[must_use]
pub fn object(fields: Vec<(&str, FieldDescriptor)>) -> FieldDescriptor {
    FieldDescriptor::Object {
        fields: fields
            .into_iter()
            .map(|(name, field)| (name.to_owned(), field))
            .collect(),
        description: None,
    }
}

/// Free-form map descriptor with a uniform value shape.
#[must_use]
pub fn map(value_type: FieldDescriptor) -> FieldDescriptor {
    FieldDescriptor::Map {
        value_type: Box::new(value_type),
    }
}

/// Unconstrained value descriptor.
#[must_use]
pub const fn any() -> FieldDescriptor {
    FieldDescriptor::Any
}

/// Marks a field as optional; absent input stays absent.
#[must_use]
pub fn optional(inner: FieldDescriptor) -> FieldDescriptor {
    FieldDescriptor::Optional {
        inner: Box::new(inner),
    }
}

/// Marks a field as defaulted; absent input receives `default`.
#[must_use]
pub fn defaulted(inner: FieldDescriptor, default: Value) -> FieldDescriptor {
    FieldDescriptor::Defaulted {
        inner: Box::new(inner),
        default,
    }
}

#[cfg(test)]
mod tests;
