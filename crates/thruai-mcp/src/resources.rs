// crates/thruai-mcp/src/resources.rs
// ============================================================================
// Module: Resource Registry
// Description: Fixed read-only resources backed by platform listings.
// Purpose: Serve browsable snapshots of agents, workflows, providers,
//          campaigns, webhooks, custom tools, and recent calls.
// Dependencies: thruai-client, thruai-contract, serde_json
// ============================================================================

//! ## Overview
//! Exactly seven resources exist and the set never changes at runtime. A
//! read fetches a fresh listing from the platform and pretty-prints the raw
//! array; unlike tool calls, a collaborator failure here propagates to the
//! JSON-RPC error path because there is no envelope to fold it into.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use thruai_contract::ResourceDescriptor;

use crate::audit::McpAuditEvent;
use crate::audit::McpAuditSink;
use crate::audit::McpMethod;
use crate::audit::McpOutcome;
use crate::registry::ToolContext;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Media type every resource serves.
const RESOURCE_MIME: &str = "application/json";

/// Page size for full listings.
const LISTING_PAGE_SIZE: u64 = 100;

/// Page size for the recent-calls snapshot.
const RECENT_CALLS_PAGE_SIZE: u64 = 50;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Resource read failure.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The URI names no registered resource.
    #[error("unknown resource: {0}")]
    Unknown(String),
    /// The platform listing behind the resource failed.
    #[error("{0}")]
    Fetch(String),
}

// ============================================================================
// SECTION: Types
// ============================================================================

/// Body of a completed resource read.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceContent {
    /// Resource URI echoed back to the caller.
    pub uri: String,
    /// Media type of the body.
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    /// Pretty-printed JSON listing.
    pub text: String,
}

/// Boxed future returned by a resource fetcher.
type FetchFuture = Pin<Box<dyn Future<Output = Result<String, String>> + Send>>;

/// Async fetcher producing a resource body.
type ResourceFetcher = Box<dyn Fn(Arc<ToolContext>) -> FetchFuture + Send + Sync>;

/// A descriptor bound to its fetcher.
struct ResourceEntry {
    /// Listing metadata.
    descriptor: ResourceDescriptor,
    /// Fetcher invoked on every read.
    fetch: ResourceFetcher,
}

// ============================================================================
// SECTION: Registry
// ============================================================================

/// Fixed resource surface.
pub struct ResourceRegistry {
    /// Registered resources in listing order.
    entries: Vec<ResourceEntry>,
    /// Shared collaborators for fetchers.
    context: Arc<ToolContext>,
    /// Audit sink for read outcomes.
    audit: Arc<dyn McpAuditSink>,
}

impl ResourceRegistry {
    /// Builds the registry with the seven fixed resources.
    #[must_use]
    pub fn new(context: Arc<ToolContext>, audit: Arc<dyn McpAuditSink>) -> Self {
        let entries = vec![
            entry(
                "thruai://agents",
                "agents",
                "All voice agents in your organization",
                |context| {
                    Box::pin(async move {
                        let listing = context
                            .client
                            .list_agents(Some(1), Some(LISTING_PAGE_SIZE))
                            .await
                            .map_err(|err| err.to_string())?;
                        pretty(&listing.agents)
                    })
                },
            ),
            entry(
                "thruai://workflows",
                "workflows",
                "All workflows in your organization",
                |context| {
                    Box::pin(async move {
                        let listing = context
                            .client
                            .list_workflows(Some(1), Some(LISTING_PAGE_SIZE))
                            .await
                            .map_err(|err| err.to_string())?;
                        pretty(&listing.workflows)
                    })
                },
            ),
            entry(
                "thruai://providers",
                "providers",
                "Available LLM, TTS, and STT providers",
                |context| {
                    Box::pin(async move {
                        let catalog = context
                            .client
                            .list_providers()
                            .await
                            .map_err(|err| err.to_string())?;
                        pretty(&catalog)
                    })
                },
            ),
            entry(
                "thruai://campaigns",
                "campaigns",
                "All calling campaigns in your organization",
                |context| {
                    Box::pin(async move {
                        let listing = context
                            .client
                            .list_campaigns(Some(1), Some(LISTING_PAGE_SIZE), None)
                            .await
                            .map_err(|err| err.to_string())?;
                        pretty(&listing.campaigns)
                    })
                },
            ),
            entry(
                "thruai://webhooks",
                "webhooks",
                "All webhook subscriptions in your organization",
                |context| {
                    Box::pin(async move {
                        let listing = context
                            .client
                            .list_webhooks(Some(1), Some(LISTING_PAGE_SIZE))
                            .await
                            .map_err(|err| err.to_string())?;
                        pretty(&listing.webhooks)
                    })
                },
            ),
            entry(
                "thruai://tools",
                "custom-tools",
                "All custom tools registered for your agents",
                |context| {
                    Box::pin(async move {
                        let listing = context
                            .client
                            .list_tools(Some(1), Some(LISTING_PAGE_SIZE))
                            .await
                            .map_err(|err| err.to_string())?;
                        pretty(&listing.tools)
                    })
                },
            ),
            entry(
                "thruai://calls/recent",
                "recent-calls",
                "The most recent calls across all agents",
                |context| {
                    Box::pin(async move {
                        let listing = context
                            .client
                            .list_calls(Some(1), Some(RECENT_CALLS_PAGE_SIZE), None, None)
                            .await
                            .map_err(|err| err.to_string())?;
                        pretty(&listing.calls)
                    })
                },
            ),
        ];
        Self {
            entries,
            context,
            audit,
        }
    }

    /// Lists every resource descriptor in registration order.
    #[must_use]
    pub fn descriptors(&self) -> Vec<ResourceDescriptor> {
        self.entries.iter().map(|entry| entry.descriptor.clone()).collect()
    }

    /// Reads one resource by URI.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Unknown`] for an unregistered URI and
    /// [`ResourceError::Fetch`] when the platform listing fails.
    pub async fn read(&self, uri: &str) -> Result<ResourceContent, ResourceError> {
        let Some(entry) = self.entries.iter().find(|entry| entry.descriptor.uri == uri)
        else {
            self.audit.record(&McpAuditEvent::new(
                McpMethod::ResourcesRead,
                Some(uri.to_owned()),
                McpOutcome::NotFound,
            ));
            return Err(ResourceError::Unknown(uri.to_owned()));
        };
        match (entry.fetch)(Arc::clone(&self.context)).await {
            Ok(text) => {
                self.audit.record(&McpAuditEvent::new(
                    McpMethod::ResourcesRead,
                    Some(uri.to_owned()),
                    McpOutcome::Ok,
                ));
                Ok(ResourceContent {
                    uri: uri.to_owned(),
                    mime_type: RESOURCE_MIME.to_owned(),
                    text,
                })
            }
            Err(message) => {
                self.audit.record(
                    &McpAuditEvent::new(
                        McpMethod::ResourcesRead,
                        Some(uri.to_owned()),
                        McpOutcome::Failed,
                    )
                    .with_detail(message.clone()),
                );
                Err(ResourceError::Fetch(message))
            }
        }
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Builds a registry entry from its parts.
fn entry(
    uri: &str,
    name: &str,
    description: &str,
    fetch: impl Fn(Arc<ToolContext>) -> FetchFuture + Send + Sync + 'static,
) -> ResourceEntry {
    ResourceEntry {
        descriptor: ResourceDescriptor {
            uri: uri.to_owned(),
            name: name.to_owned(),
            description: description.to_owned(),
            mime_type: RESOURCE_MIME.to_owned(),
        },
        fetch: Box::new(fetch),
    }
}

/// Pretty-prints a listing payload.
fn pretty<T: Serialize>(payload: &T) -> Result<String, String> {
    serde_json::to_string_pretty(payload).map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests;
