// crates/thruai-contract/src/validate.rs
// ============================================================================
// Module: Contract Validation
// Description: Recursive validation of untrusted input against a contract.
// Purpose: Produce normalized, defaulted, type-checked values or a complete
//          ordered list of structured failures.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! [`validate`] walks a [`FieldDescriptor`] tree mirrored against an
//! untrusted JSON value and either returns a normalized value (unknown keys
//! stripped, defaults applied on absence, no primitive coercion) or the full
//! ordered list of [`ValidationFailure`]s. Validation is fail-complete: a
//! mismatch short-circuits its own subtree but sibling fields are still
//! checked so callers see every problem at once.
//! Security posture: this is the only gate between raw MCP call arguments
//! and tool handlers; `null` is a type mismatch, never treated as absence.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde_json::Value;

use crate::descriptor::FieldDescriptor;

// ============================================================================
// SECTION: Failure Types
// ============================================================================

/// One step of a failing field's path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Object or map key.
    Key(String),
    /// Array element index.
    Index(usize),
}

/// Why a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// Required field absent from the input.
    Missing,
    /// Value present but of the wrong JSON type.
    WrongType,
    /// String shorter than the contract's minimum length.
    BelowMinLength,
    /// String not a member of the declared enum values.
    NotInEnum,
}

impl FailureReason {
    /// Returns the stable label for the reason.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::WrongType => "wrong-type",
            Self::BelowMinLength => "below-min-length",
            Self::NotInEnum => "not-in-enum",
        }
    }
}

/// A single validation failure with the path to the offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    /// Ordered path from the contract root to the failing field.
    pub path: Vec<PathSegment>,
    /// Failure classification.
    pub reason: FailureReason,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            f.write_str("input")?;
        } else {
            for (position, segment) in self.path.iter().enumerate() {
                match segment {
                    PathSegment::Key(name) => {
                        if position > 0 {
                            f.write_str(".")?;
                        }
                        f.write_str(name)?;
                    }
                    PathSegment::Index(index) => write!(f, "[{index}]")?,
                }
            }
        }
        write!(f, ": {}", self.reason.as_str())
    }
}

/// Joins failures into the single human-readable diagnostic surfaced on the
/// wire.
#[must_use]
pub fn describe_failures(failures: &[ValidationFailure]) -> String {
    failures.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

// ============================================================================
// SECTION: Validation
// ============================================================================

/// Outcome of checking one descriptor node.
enum Checked {
    /// Node validated; carries the normalized value.
    Valid(Value),
    /// Optional field absent; omit it from the normalized output.
    Absent,
    /// Node failed; failures were appended to the shared list.
    Invalid,
}

/// Validates `raw` against `contract`.
///
/// On success the returned value contains only declared fields, with
/// defaults substituted for absent `Defaulted` fields and absent `Optional`
/// fields omitted entirely.
///
/// # Errors
///
/// Returns the complete ordered list of failures when any field fails.
pub fn validate(
    contract: &FieldDescriptor,
    raw: &Value,
) -> Result<Value, Vec<ValidationFailure>> {
    let mut path = Vec::new();
    let mut failures = Vec::new();
    match check(contract, Some(raw), &mut path, &mut failures) {
        Checked::Valid(value) => Ok(value),
        Checked::Absent => Ok(Value::Null),
        Checked::Invalid => Err(failures),
    }
}

/// Records a failure at the current path.
fn fail(
    path: &[PathSegment],
    failures: &mut Vec<ValidationFailure>,
    reason: FailureReason,
) -> Checked {
    failures.push(ValidationFailure {
        path: path.to_vec(),
        reason,
    });
    Checked::Invalid
}

/// Checks a descriptor against a possibly-absent raw value.
fn check(
    descriptor: &FieldDescriptor,
    raw: Option<&Value>,
    path: &mut Vec<PathSegment>,
    failures: &mut Vec<ValidationFailure>,
) -> Checked {
    match descriptor {
        FieldDescriptor::Optional { inner } => match raw {
            None => Checked::Absent,
            Some(value) => check_present(inner, value, path, failures),
        },
        FieldDescriptor::Defaulted { inner, default } => match raw {
            None => Checked::Valid(default.clone()),
            Some(value) => check_present(inner, value, path, failures),
        },
        _ => match raw {
            None => fail(path, failures, FailureReason::Missing),
            Some(value) => check_present(descriptor, value, path, failures),
        },
    }
}

/// Checks a descriptor against a value that is known to be present.
fn check_present(
    descriptor: &FieldDescriptor,
    value: &Value,
    path: &mut Vec<PathSegment>,
    failures: &mut Vec<ValidationFailure>,
) -> Checked {
    match descriptor {
        FieldDescriptor::String { min_length, .. } => match value {
            Value::String(text) => {
                if min_length.is_some_and(|min| text.chars().count() < min) {
                    fail(path, failures, FailureReason::BelowMinLength)
                } else {
                    Checked::Valid(value.clone())
                }
            }
            _ => fail(path, failures, FailureReason::WrongType),
        },
        FieldDescriptor::Number { .. } => match value {
            Value::Number(_) => Checked::Valid(value.clone()),
            _ => fail(path, failures, FailureReason::WrongType),
        },
        FieldDescriptor::Boolean { .. } => match value {
            Value::Bool(_) => Checked::Valid(value.clone()),
            _ => fail(path, failures, FailureReason::WrongType),
        },
        FieldDescriptor::Enum { values, .. } => match value {
            Value::String(text) => {
                if values.iter().any(|allowed| allowed == text) {
                    Checked::Valid(value.clone())
                } else {
                    fail(path, failures, FailureReason::NotInEnum)
                }
            }
            _ => fail(path, failures, FailureReason::WrongType),
        },
        FieldDescriptor::Array { element, .. } => match value {
            Value::Array(items) => {
                let mut normalized = Vec::with_capacity(items.len());
                let mut invalid = false;
                for (index, item) in items.iter().enumerate() {
                    path.push(PathSegment::Index(index));
                    match check(element, Some(item), path, failures) {
                        Checked::Valid(checked) => normalized.push(checked),
                        Checked::Absent => {}
                        Checked::Invalid => invalid = true,
                    }
                    path.pop();
                }
                if invalid {
                    Checked::Invalid
                } else {
                    Checked::Valid(Value::Array(normalized))
                }
            }
            _ => fail(path, failures, FailureReason::WrongType),
        },
        FieldDescriptor::Object { fields, .. } => match value {
            Value::Object(entries) => {
                let mut normalized = serde_json::Map::new();
                let mut invalid = false;
                for (name, field) in fields {
                    path.push(PathSegment::Key(name.clone()));
                    match check(field, entries.get(name), path, failures) {
                        Checked::Valid(checked) => {
                            normalized.insert(name.clone(), checked);
                        }
                        Checked::Absent => {}
                        Checked::Invalid => invalid = true,
                    }
                    path.pop();
                }
                if invalid {
                    Checked::Invalid
                } else {
                    Checked::Valid(Value::Object(normalized))
                }
            }
            _ => fail(path, failures, FailureReason::WrongType),
        },
        FieldDescriptor::Map { value_type } => match value {
            Value::Object(entries) => {
                let mut normalized = serde_json::Map::new();
                let mut invalid = false;
                for (key, entry) in entries {
                    path.push(PathSegment::Key(key.clone()));
                    match check(value_type, Some(entry), path, failures) {
                        Checked::Valid(checked) => {
                            normalized.insert(key.clone(), checked);
                        }
                        Checked::Absent => {}
                        Checked::Invalid => invalid = true,
                    }
                    path.pop();
                }
                if invalid {
                    Checked::Invalid
                } else {
                    Checked::Valid(Value::Object(normalized))
                }
            }
            _ => fail(path, failures, FailureReason::WrongType),
        },
        FieldDescriptor::Any => Checked::Valid(value.clone()),
        FieldDescriptor::Optional { inner } | FieldDescriptor::Defaulted { inner, .. } => {
            check_present(inner, value, path, failures)
        }
    }
}

#[cfg(test)]
mod tests;
