// crates/thruai-client/src/client.rs
// ============================================================================
// Module: Request Core
// Description: Shared HTTP request path and envelope decoding.
// Purpose: Fix authentication, user agent, URL construction, and error
//          mapping for every endpoint method.
// Dependencies: reqwest, serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Every endpoint method funnels through [`ThruAiClient::request`]: build
//! the `/api/v1/public` URL, attach the bearer credential, send, and decode
//! the platform's `{success, data, error}` envelope. A non-2xx status or a
//! `success: false` envelope becomes a [`ClientError::Api`] carrying the
//! remote `error.message` when present, else a generic status-line message.
//! No retries are attempted; callers see exactly one outcome per call.

// ============================================================================
// SECTION: Imports
// ============================================================================

use reqwest::Method;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// User agent sent with every platform request.
pub const USER_AGENT: &str = concat!("thruai-mcp-server/", env!("CARGO_PKG_VERSION"));

/// Path prefix of the public API surface.
const API_PREFIX: &str = "/api/v1/public";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Failure raised by a platform API call.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The platform reported a business failure or a non-2xx status.
    #[error("{message}")]
    Api {
        /// Remote diagnostic, or the generic status-line fallback.
        message: String,
    },
    /// The HTTP transport failed before a response envelope was decoded.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The response body was not a valid API envelope.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

// ============================================================================
// SECTION: Envelope
// ============================================================================

/// Platform response envelope wrapping every endpoint payload.
#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    /// Remote success flag; `false` means a business failure.
    #[serde(default)]
    success: bool,
    /// Endpoint payload when successful.
    data: Option<Value>,
    /// Remote error details when unsuccessful.
    error: Option<ApiErrorBody>,
}

/// Remote error details inside a failed envelope.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    /// Human-readable remote diagnostic.
    message: String,
}

// ============================================================================
// SECTION: Client
// ============================================================================

/// HTTP client for the ThruAI public API.
///
/// # Invariants
/// - `base_url` carries no trailing slash.
/// - The client is cheap to clone and safe to share across tasks.
#[derive(Debug, Clone)]
pub struct ThruAiClient {
    /// Shared reqwest client.
    http: reqwest::Client,
    /// Platform origin, e.g. `https://api.thru.ai`.
    base_url: String,
    /// Bearer credential for every request.
    api_key: String,
}

impl ThruAiClient {
    /// Builds a client for the given credential and platform origin.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            api_key: api_key.into(),
        })
    }

    /// Returns the platform origin this client targets.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends one request against the public API and decodes its envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] when the request cannot be sent,
    /// [`ClientError::Decode`] when the body is not an API envelope, and
    /// [`ClientError::Api`] when the status is non-2xx or the envelope
    /// reports failure.
    pub(crate) async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        body: Option<Value>,
    ) -> Result<Value, ClientError> {
        let url = format!("{}{API_PREFIX}{path}", self.base_url);
        let mut builder =
            self.http.request(method, url).bearer_auth(&self.api_key);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(payload) = body {
            builder = builder.json(&payload);
        }
        let response = builder.send().await?;
        let status = response.status();
        let raw = response.bytes().await?;
        let envelope: ApiEnvelope = serde_json::from_slice(&raw)?;
        if !status.is_success() || !envelope.success {
            let message = envelope.error.map_or_else(
                || format!("API request failed: {status}"),
                |error| error.message,
            );
            return Err(ClientError::Api { message });
        }
        Ok(envelope.data.unwrap_or(Value::Null))
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Appends a query parameter when a value is present.
pub(crate) fn push_query(
    query: &mut Vec<(&'static str, String)>,
    key: &'static str,
    value: Option<impl ToString>,
) {
    if let Some(present) = value {
        query.push((key, present.to_string()));
    }
}

/// Decodes an endpoint payload into its typed shape.
pub(crate) fn decode<T: DeserializeOwned>(data: Value) -> Result<T, ClientError> {
    Ok(serde_json::from_value(data)?)
}

#[cfg(test)]
mod tests;
