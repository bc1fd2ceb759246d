// crates/thruai-mcp/src/tools/analytics.rs
// ============================================================================
// Module: Analytics Tools
// Description: Usage and cost analytics tools.
// Purpose: Expose usage volume and cost breakdown queries over the tool
//          surface.
// Dependencies: thruai-client, thruai-contract, serde, serde_json
// ============================================================================

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use serde_json::json;
use thruai_contract::ToolContract;
use thruai_contract::object;
use thruai_contract::optional;
use thruai_contract::string;
use thruai_contract::string_enum;

use crate::registry::RegistryError;
use crate::registry::ToolCallError;
use crate::registry::ToolContext;
use crate::registry::ToolRegistry;
use crate::registry::decode_args;
use crate::registry::handler;
use crate::tools::to_payload;

// ============================================================================
// SECTION: Registration
// ============================================================================

/// Registers the analytics tools.
pub(crate) fn register(registry: &mut ToolRegistry) -> Result<(), RegistryError> {
    registry.register(
        ToolContract {
            name: "get_usage_analytics",
            description: "Get usage analytics including call volume, minutes, and transcription usage over time.",
            input: object(vec![
                (
                    "startDate",
                    optional(string().describe(
                        "Start date in ISO 8601 format (e.g., \"2024-01-01\")",
                    )),
                ),
                (
                    "endDate",
                    optional(string().describe("End date in ISO 8601 format")),
                ),
                (
                    "granularity",
                    optional(string_enum(&["day", "week", "month"]).describe("Data granularity")),
                ),
            ]),
        },
        handler(get_usage_analytics),
    )?;
    registry.register(
        ToolContract {
            name: "get_cost_analytics",
            description: "Get cost analytics with breakdown by component (LLM, TTS, STT, telephony).",
            input: object(vec![
                (
                    "startDate",
                    optional(string().describe(
                        "Start date in ISO 8601 format (e.g., \"2024-01-01\")",
                    )),
                ),
                (
                    "endDate",
                    optional(string().describe("End date in ISO 8601 format")),
                ),
                (
                    "granularity",
                    optional(string_enum(&["day", "week", "month"]).describe("Data granularity")),
                ),
            ]),
        },
        handler(get_cost_analytics),
    )
}

// ============================================================================
// SECTION: Inputs
// ============================================================================

/// Validated arguments for both analytics tools.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalyticsRangeInput {
    /// Range start, ISO 8601.
    start_date: Option<String>,
    /// Range end, ISO 8601.
    end_date: Option<String>,
    /// Aggregation granularity.
    granularity: Option<String>,
}

// ============================================================================
// SECTION: Handlers
// ============================================================================

/// Fetches usage analytics.
async fn get_usage_analytics(
    arguments: Value,
    context: Arc<ToolContext>,
) -> Result<Value, ToolCallError> {
    let input: AnalyticsRangeInput = decode_args(arguments)?;
    let analytics = context
        .client
        .get_usage_analytics(
            input.start_date.as_deref(),
            input.end_date.as_deref(),
            input.granularity.as_deref(),
        )
        .await?;
    Ok(json!({
        "success": true,
        "usage": analytics.usage,
        "totals": to_payload(&analytics.totals)?,
        "message": format!(
            "Usage Analytics:\n\nTotal Calls: {}\nTotal Minutes: {}\nTranscription Minutes: {}",
            analytics.totals.calls,
            analytics.totals.minutes,
            analytics.totals.transcription_minutes.unwrap_or(0.0),
        ),
    }))
}

/// Fetches cost analytics.
async fn get_cost_analytics(
    arguments: Value,
    context: Arc<ToolContext>,
) -> Result<Value, ToolCallError> {
    let input: AnalyticsRangeInput = decode_args(arguments)?;
    let analytics = context
        .client
        .get_cost_analytics(
            input.start_date.as_deref(),
            input.end_date.as_deref(),
            input.granularity.as_deref(),
        )
        .await?;
    let component = |pick: fn(&thruai_client::CostBreakdown) -> Option<f64>| {
        analytics.totals.breakdown.as_ref().and_then(pick).unwrap_or(0.0)
    };
    Ok(json!({
        "success": true,
        "costs": analytics.costs,
        "totals": to_payload(&analytics.totals)?,
        "message": format!(
            "Cost Analytics:\n\nTotal Cost: ${}\n\nBreakdown:\n- LLM: ${}\n- TTS: ${}\n- STT: ${}\n- Telephony: ${}",
            analytics.totals.total,
            component(|breakdown| breakdown.llm),
            component(|breakdown| breakdown.tts),
            component(|breakdown| breakdown.stt),
            component(|breakdown| breakdown.telephony),
        ),
    }))
}
