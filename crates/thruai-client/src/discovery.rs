// crates/thruai-client/src/discovery.rs
// ============================================================================
// Module: Discovery Endpoint
// Description: API schema discovery.
// Purpose: Thin typed wrapper over the /_debug/schemas endpoint.
// Dependencies: reqwest
// ============================================================================

//! ## Overview
//! Exposes the platform's schema catalog so clients can discover exact field
//! names and request formats.

// ============================================================================
// SECTION: Imports
// ============================================================================

use reqwest::Method;

use crate::client::ClientError;
use crate::client::ThruAiClient;
use crate::client::decode;
use crate::types::SchemaCatalog;

// ============================================================================
// SECTION: Endpoints
// ============================================================================

impl ThruAiClient {
    /// Fetches the API schema catalog.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn get_schemas(&self) -> Result<SchemaCatalog, ClientError> {
        decode(self.request(Method::GET, "/_debug/schemas", &[], None).await?)
    }
}
