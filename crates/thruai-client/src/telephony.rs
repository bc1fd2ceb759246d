// crates/thruai-client/src/telephony.rs
// ============================================================================
// Module: Telephony Endpoints
// Description: Phone number search and provisioning.
// Purpose: Thin typed wrappers over the /telephony endpoint family.
// Dependencies: reqwest, serde, serde_json
// ============================================================================

//! ## Overview
//! Number search results stay opaque; the provisioning receipt is typed
//! because tool handlers summarize it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use reqwest::Method;
use serde::Serialize;

use crate::client::ClientError;
use crate::client::ThruAiClient;
use crate::client::decode;
use crate::client::push_query;
use crate::types::AvailableNumbers;
use crate::types::ProvisionedNumber;

// ============================================================================
// SECTION: Requests
// ============================================================================

/// Body for number provisioning.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionNumberRequest {
    /// Number to purchase, in E.164 form.
    pub phone_number: String,
    /// Optional display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
}

// ============================================================================
// SECTION: Endpoints
// ============================================================================

impl ThruAiClient {
    /// Searches for available phone numbers.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn search_numbers(
        &self,
        area_code: Option<&str>,
        country: Option<&str>,
        limit: Option<u64>,
    ) -> Result<AvailableNumbers, ClientError> {
        let mut query = Vec::new();
        push_query(&mut query, "areaCode", area_code);
        push_query(&mut query, "country", country);
        push_query(&mut query, "limit", limit);
        decode(
            self.request(Method::GET, "/telephony/numbers/search", &query, None)
                .await?,
        )
    }

    /// Provisions (purchases) a phone number.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn provision_number(
        &self,
        request: &ProvisionNumberRequest,
    ) -> Result<ProvisionedNumber, ClientError> {
        let body = serde_json::to_value(request)?;
        decode(
            self.request(Method::POST, "/telephony/numbers/provision", &[], Some(body))
                .await?,
        )
    }
}
