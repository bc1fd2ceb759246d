// crates/thruai-mcp/src/tools/telephony.rs
// ============================================================================
// Module: Telephony Tools
// Description: Phone number search and provisioning tools.
// Purpose: Expose number discovery and purchase over the tool surface.
// Dependencies: thruai-client, thruai-contract, serde, serde_json
// ============================================================================

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use serde_json::json;
use thruai_client::ProvisionNumberRequest;
use thruai_contract::ToolContract;
use thruai_contract::defaulted;
use thruai_contract::number;
use thruai_contract::object;
use thruai_contract::optional;
use thruai_contract::string;

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

/// Registers the telephony tools.
pub(crate) fn register(registry: &mut ToolRegistry) -> Result<(), RegistryError> {
    registry.register(
        ToolContract {
            name: "search_numbers",
            description: "Search for available phone numbers to provision. Search by area code and country. Returns a list of available numbers with locality information.",
            input: object(vec![
                (
                    "areaCode",
                    optional(string().describe("Area code to search (e.g., \"415\", \"212\")")),
                ),
                (
                    "country",
                    defaulted(string().describe("Country code (default: US)"), json!("US")),
                ),
                (
                    "limit",
                    defaulted(number().describe("Maximum number of results"), json!(10)),
                ),
            ]),
        },
        handler(search_numbers),
    )?;
    registry.register(
        ToolContract {
            name: "provision_number",
            description: "Provision (purchase) a phone number. The number must be found via search_numbers first. Once provisioned, use assign_number to assign it to an agent.",
            input: object(vec![
                (
                    "phoneNumber",
                    string().describe(
                        "Phone number to provision in E.164 format (e.g., \"+14155551234\")",
                    ),
                ),
                (
                    "friendlyName",
                    optional(string().describe("Friendly name for the number (e.g., \"Support Line\")")),
                ),
            ]),
        },
        handler(provision_number),
    )
}

// ============================================================================
// SECTION: Inputs
// ============================================================================

/// Validated arguments for `search_numbers`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchNumbersInput {
    /// Optional area code filter.
    area_code: Option<String>,
    /// Country code, defaulted to `US`.
    country: String,
    /// Maximum results, defaulted to 10.
    limit: u64,
}

/// Validated arguments for `provision_number`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProvisionNumberInput {
    /// Number to purchase, in E.164 form.
    phone_number: String,
    /// Optional display name.
    friendly_name: Option<String>,
}

// ============================================================================
// SECTION: Handlers
// ============================================================================

/// Searches for available phone numbers.
async fn search_numbers(
    arguments: Value,
    context: Arc<ToolContext>,
) -> Result<Value, ToolCallError> {
    let input: SearchNumbersInput = decode_args(arguments)?;
    let result = context
        .client
        .search_numbers(input.area_code.as_deref(), Some(&input.country), Some(input.limit))
        .await?;
    let scope = input
        .area_code
        .map_or_else(String::new, |code| format!(" in area code {code}"));
    let count = result.numbers.len();
    Ok(json!({
        "success": true,
        "numbers": result.numbers,
        "message": format!(
            "Found {count} available number(s){scope}.\n\nUse provision_number with the phoneNumber field to purchase one.",
        ),
    }))
}

/// Provisions (purchases) a phone number.
async fn provision_number(
    arguments: Value,
    context: Arc<ToolContext>,
) -> Result<Value, ToolCallError> {
    let input: ProvisionNumberInput = decode_args(arguments)?;
    let request = ProvisionNumberRequest {
        phone_number: input.phone_number,
        friendly_name: input.friendly_name,
    };
    let number = context.client.provision_number(&request).await?;
    Ok(json!({
        "success": true,
        "phoneNumber": to_payload(&number)?,
        "message": format!(
            "Phone number provisioned successfully!\n\nNumber: {}\nID: {}\nStatus: {}\n\nNext step: Use assign_number to assign this number to an agent.",
            number.phone_number, number.id, number.status,
        ),
    }))
}
