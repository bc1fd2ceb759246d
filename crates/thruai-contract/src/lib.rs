// crates/thruai-contract/src/lib.rs
// ============================================================================
// Module: ThruAI Contract
// Description: Tool input contracts, validation, and schema projection.
// Purpose: Declare each tool's typed input shape once and derive both the
//          protocol-facing JSON Schema and the runtime validator from it.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! ThruAI Contract models tool input contracts as an explicit descriptor
//! tree ([`FieldDescriptor`]), then provides two pure structural recursions
//! over it: [`validate`] normalizes untrusted call arguments (strip unknown
//! keys, apply defaults, type-check) and [`project`] renders the contract as
//! a JSON Schema document for MCP clients. No validation library internals
//! are inspected at runtime; the descriptor tree is the single source of
//! truth.
//! Security posture: call arguments are untrusted; handlers only ever see
//! values that passed [`validate`].

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod descriptor;
pub mod project;
pub mod types;
pub mod validate;

#[cfg(test)]
mod tests {
    //! Test-only lint relaxations for panic-based assertions and debug output.
    #![allow(
        clippy::panic,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::use_debug,
        clippy::dbg_macro,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        reason = "Test-only output and panic-based assertions are permitted."
    )]
}

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use descriptor::FieldDescriptor;
pub use descriptor::any;
pub use descriptor::array;
pub use descriptor::boolean;
pub use descriptor::defaulted;
pub use descriptor::map;
pub use descriptor::number;
pub use descriptor::object;
pub use descriptor::optional;
pub use descriptor::string;
pub use descriptor::string_enum;
pub use descriptor::string_min;
pub use project::project;
pub use types::ResourceDescriptor;
pub use types::ToolContract;
pub use types::ToolDefinition;
pub use validate::FailureReason;
pub use validate::PathSegment;
pub use validate::ValidationFailure;
pub use validate::describe_failures;
pub use validate::validate;
