// crates/thruai-client/src/providers.rs
// ============================================================================
// Module: Provider Endpoints
// Description: Provider catalog, voices, and models discovery.
// Purpose: Thin typed wrappers over the /providers endpoint family.
// Dependencies: reqwest, serde
// ============================================================================

//! ## Overview
//! The catalog groups providers by pipeline role; voice and model entities
//! stay opaque.

// ============================================================================
// SECTION: Imports
// ============================================================================

use reqwest::Method;
use serde::Deserialize;

use crate::client::ClientError;
use crate::client::ThruAiClient;
use crate::client::decode;
use crate::types::ModelList;
use crate::types::ProviderCatalog;
use crate::types::VoiceList;

// ============================================================================
// SECTION: Payloads
// ============================================================================

/// Wrapper the catalog endpoint returns around the grouped providers.
#[derive(Debug, Deserialize)]
struct ProviderCatalogPayload {
    /// Providers grouped by pipeline role.
    providers: ProviderCatalog,
}

// ============================================================================
// SECTION: Endpoints
// ============================================================================

impl ThruAiClient {
    /// Lists LLM, TTS, and STT providers.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn list_providers(&self) -> Result<ProviderCatalog, ClientError> {
        let payload: ProviderCatalogPayload =
            decode(self.request(Method::GET, "/providers", &[], None).await?)?;
        Ok(payload.providers)
    }

    /// Lists voices offered by a TTS provider.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn list_voices(&self, provider_id: &str) -> Result<VoiceList, ClientError> {
        decode(
            self.request(
                Method::GET,
                &format!("/providers/{provider_id}/voices"),
                &[],
                None,
            )
            .await?,
        )
    }

    /// Lists models offered by an LLM or STT provider.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn list_models(&self, provider_id: &str) -> Result<ModelList, ClientError> {
        decode(
            self.request(
                Method::GET,
                &format!("/providers/{provider_id}/models"),
                &[],
                None,
            )
            .await?,
        )
    }
}
