// crates/thruai-contract/src/project.rs
// ============================================================================
// Module: Schema Projection
// Description: Pure projection of field descriptors into JSON Schema.
// Purpose: Render each tool's input contract as a protocol-facing schema
//          document for MCP clients.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! [`project`] is a pure, total recursion over [`FieldDescriptor`]: every
//! variant maps to one JSON Schema fragment. Optionality never appears on
//! the field itself; it is conveyed only through the enclosing object's
//! `required` list, which is omitted entirely when empty. The output depends
//! on nothing but the input descriptor.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Map;
use serde_json::Value;
use serde_json::json;

use crate::descriptor::FieldDescriptor;

// ============================================================================
// SECTION: Projection
// ============================================================================

/// Projects a descriptor into its JSON Schema document.
#[must_use]
pub fn project(descriptor: &FieldDescriptor) -> Value {
    match descriptor {
        FieldDescriptor::String {
            min_length,
            description,
        } => {
            let mut schema = typed_schema("string", description);
            if let Some(min) = min_length {
                schema.insert("minLength".to_owned(), json!(min));
            }
            Value::Object(schema)
        }
        FieldDescriptor::Number { description } => {
            Value::Object(typed_schema("number", description))
        }
        FieldDescriptor::Boolean { description } => {
            Value::Object(typed_schema("boolean", description))
        }
        FieldDescriptor::Enum {
            values,
            description,
        } => {
            let mut schema = typed_schema("string", description);
            schema.insert("enum".to_owned(), json!(values));
            Value::Object(schema)
        }
        FieldDescriptor::Array {
            element,
            description,
        } => {
            let mut schema = typed_schema("array", description);
            schema.insert("items".to_owned(), project(element));
            Value::Object(schema)
        }
        FieldDescriptor::Object {
            fields,
            description,
        } => {
            let mut properties = Map::new();
            let mut required = Vec::new();
            for (name, field) in fields {
                properties.insert(name.clone(), project(field));
                if field.is_required() {
                    required.push(name.clone());
                }
            }
            let mut schema = typed_schema("object", description);
            schema.insert("properties".to_owned(), Value::Object(properties));
            if !required.is_empty() {
                schema.insert("required".to_owned(), json!(required));
            }
            Value::Object(schema)
        }
        FieldDescriptor::Map { value_type } => {
            let mut schema = typed_schema("object", &None);
            schema.insert("additionalProperties".to_owned(), project(value_type));
            Value::Object(schema)
        }
        // Free-form payloads project as the generic object schema.
        FieldDescriptor::Any => Value::Object(typed_schema("object", &None)),
        FieldDescriptor::Optional { inner } => project(inner),
        FieldDescriptor::Defaulted { inner, default } => {
            let mut schema = project(inner);
            if let Value::Object(entries) = &mut schema {
                entries.insert("default".to_owned(), default.clone());
            }
            schema
        }
    }
}

/// Base schema object carrying `type` and an optional `description`.
fn typed_schema(kind: &str, description: &Option<String>) -> Map<String, Value> {
    let mut schema = Map::new();
    schema.insert("type".to_owned(), Value::String(kind.to_owned()));
    if let Some(text) = description {
        schema.insert("description".to_owned(), Value::String(text.clone()));
    }
    schema
}

#[cfg(test)]
mod tests;
