// crates/thruai-mcp/src/config.rs
// ============================================================================
// Module: Server Configuration
// Description: Environment-derived configuration for the MCP server.
// Purpose: Resolve and validate the platform credential and base URL before
//          any request is served.
// Dependencies: thiserror, url
// ============================================================================

//! ## Overview
//! Configuration comes from the environment: `THRUAI_API_KEY` carries the
//! platform credential and `THRUAI_BASE_URL` optionally overrides the
//! platform origin. Validation failures are fatal at startup; the server
//! never starts with a credential it cannot use.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;
use url::Url;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default platform origin when `THRUAI_BASE_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "https://api.thru.ai";

/// Environment variable carrying the platform credential.
pub const API_KEY_VAR: &str = "THRUAI_API_KEY";

/// Environment variable overriding the platform origin.
pub const BASE_URL_VAR: &str = "THRUAI_BASE_URL";

/// Accepted credential prefixes.
const KEY_PREFIXES: [&str; 2] = ["sk_live_", "sk_test_"];

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration validation failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The credential environment variable is unset or empty.
    #[error("{API_KEY_VAR} environment variable is required")]
    MissingApiKey,
    /// The credential does not carry a recognized prefix.
    #[error("{API_KEY_VAR} must start with sk_live_ or sk_test_")]
    InvalidApiKey,
    /// The base URL is not a valid http/https URL.
    #[error("invalid base URL: {url}")]
    InvalidBaseUrl {
        /// The rejected URL text.
        url: String,
    },
}

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Validated server configuration.
#[derive(Debug, Clone)]
pub struct ThruAiConfig {
    /// Platform credential sent as a bearer token.
    pub api_key: String,
    /// Platform origin, e.g. `https://api.thru.ai`.
    pub base_url: String,
}

impl ThruAiConfig {
    /// Builds a validated configuration from explicit values.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the credential is missing or
    /// malformed, or when the base URL is not an http/https URL.
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        if !KEY_PREFIXES.iter().any(|prefix| api_key.starts_with(prefix)) {
            return Err(ConfigError::InvalidApiKey);
        }
        let base_url = base_url.into();
        let parsed = Url::parse(&base_url).map_err(|_| ConfigError::InvalidBaseUrl {
            url: base_url.clone(),
        })?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ConfigError::InvalidBaseUrl {
                url: base_url,
            });
        }
        Ok(Self {
            api_key,
            base_url,
        })
    }

    /// Resolves configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when `THRUAI_API_KEY` is unset or the
    /// resolved values fail validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var(API_KEY_VAR).map_err(|_| ConfigError::MissingApiKey)?;
        let base_url =
            std::env::var(BASE_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
        Self::new(api_key, base_url)
    }
}
