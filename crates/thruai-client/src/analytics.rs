// crates/thruai-client/src/analytics.rs
// ============================================================================
// Module: Analytics Endpoints
// Description: Usage and cost analytics queries.
// Purpose: Thin typed wrappers over the /analytics endpoint family.
// Dependencies: reqwest, serde_json
// ============================================================================

//! ## Overview
//! Per-period rows stay opaque; the totals blocks are typed because tool
//! handlers render them into summaries.

// ============================================================================
// SECTION: Imports
// ============================================================================

use reqwest::Method;

use crate::client::ClientError;
use crate::client::ThruAiClient;
use crate::client::decode;
use crate::client::push_query;
use crate::types::CostAnalytics;
use crate::types::UsageAnalytics;

// ============================================================================
// SECTION: Endpoints
// ============================================================================

impl ThruAiClient {
    /// Fetches usage analytics for an optional date range.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn get_usage_analytics(
        &self,
        start_date: Option<&str>,
        end_date: Option<&str>,
        granularity: Option<&str>,
    ) -> Result<UsageAnalytics, ClientError> {
        let mut query = Vec::new();
        push_query(&mut query, "startDate", start_date);
        push_query(&mut query, "endDate", end_date);
        push_query(&mut query, "granularity", granularity);
        decode(self.request(Method::GET, "/analytics/usage", &query, None).await?)
    }

    /// Fetches cost analytics for an optional date range.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the platform call fails.
    pub async fn get_cost_analytics(
        &self,
        start_date: Option<&str>,
        end_date: Option<&str>,
        granularity: Option<&str>,
    ) -> Result<CostAnalytics, ClientError> {
        let mut query = Vec::new();
        push_query(&mut query, "startDate", start_date);
        push_query(&mut query, "endDate", end_date);
        push_query(&mut query, "granularity", granularity);
        decode(self.request(Method::GET, "/analytics/costs", &query, None).await?)
    }
}
