// crates/thruai-mcp/src/lib.rs
// ============================================================================
// Module: ThruAI MCP
// Description: MCP server exposing the ThruAI voice-agent platform.
// Purpose: Provide MCP tool and resource adapters over the ThruAI public API.
// Dependencies: thruai-client, thruai-contract, tokio
// ============================================================================

//! ## Overview
//! ThruAI MCP exposes the ThruAI voice-agent platform through MCP tools and
//! resources over a stdio JSON-RPC transport. All tools are thin wrappers over
//! [`thruai_client::ThruAiClient`]: input contracts validate untrusted
//! arguments before any platform call, and every handler outcome is folded
//! into a protocol envelope so callers always receive a well-formed reply.
//! Security posture: tool arguments arrive from an untrusted MCP client and
//! must pass contract validation before they reach the platform.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod audit;
pub mod config;
pub mod dispatch;
pub mod registry;
pub mod resources;
pub mod server;
pub mod tools;

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

pub use audit::McpAuditEvent;
pub use audit::McpAuditSink;
pub use audit::McpMethod;
pub use audit::McpOutcome;
pub use audit::NoopAuditSink;
pub use audit::StderrAuditSink;
pub use config::ConfigError;
pub use config::DEFAULT_BASE_URL;
pub use config::ThruAiConfig;
pub use dispatch::ContentBlock;
pub use dispatch::DispatchError;
pub use dispatch::Dispatcher;
pub use dispatch::WireEnvelope;
pub use registry::RegistryError;
pub use registry::ToolCallError;
pub use registry::ToolContext;
pub use registry::ToolHandler;
pub use registry::ToolRegistry;
pub use resources::ResourceContent;
pub use resources::ResourceError;
pub use resources::ResourceRegistry;
pub use server::McpServer;
pub use server::McpServerError;
