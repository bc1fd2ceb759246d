// crates/thruai-mcp/src/tools/providers.rs
// ============================================================================
// Module: Provider Tools
// Description: Provider, voice, and model catalog tools.
// Purpose: Expose the provider catalog and per-provider voice and model
//          listings over the tool surface.
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

/// Registers the provider tools.
pub(crate) fn register(registry: &mut ToolRegistry) -> Result<(), RegistryError> {
    registry.register(
        ToolContract {
            name: "list_providers",
            description: "List all available LLM, TTS, and STT providers with their metadata.",
            input: object(vec![]),
        },
        handler(list_providers),
    )?;
    registry.register(
        ToolContract {
            name: "list_voices",
            description: "List available voices for a TTS provider (e.g., ElevenLabs, Cartesia, Google).",
            input: object(vec![(
                "providerId",
                string().describe("Provider ID (e.g., \"elevenlabs\", \"cartesia\", \"google\")"),
            )]),
        },
        handler(list_voices),
    )?;
    registry.register(
        ToolContract {
            name: "list_models",
            description: "List available models for an LLM or STT provider (e.g., OpenAI, Anthropic, Groq).",
            input: object(vec![(
                "providerId",
                string().describe("Provider ID (e.g., \"openai\", \"anthropic\", \"groq\")"),
            )]),
        },
        handler(list_models),
    )
}

// ============================================================================
// SECTION: Inputs
// ============================================================================

/// Validated arguments for `list_voices` and `list_models`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProviderIdInput {
    /// Provider identifier.
    provider_id: String,
}

// ============================================================================
// SECTION: Handlers
// ============================================================================

/// Lists the provider catalog grouped by pipeline role.
async fn list_providers(
    _arguments: Value,
    context: Arc<ToolContext>,
) -> Result<Value, ToolCallError> {
    let catalog = context.client.list_providers().await?;
    let message = format!(
        "Found {} LLM, {} TTS, and {} STT providers",
        catalog.llm.len(),
        catalog.tts.len(),
        catalog.stt.len(),
    );
    Ok(json!({
        "success": true,
        "providers": to_payload(&catalog)?,
        "message": message,
    }))
}

/// Lists voices for a TTS provider.
async fn list_voices(
    arguments: Value,
    context: Arc<ToolContext>,
) -> Result<Value, ToolCallError> {
    let input: ProviderIdInput = decode_args(arguments)?;
    let listing = context.client.list_voices(&input.provider_id).await?;
    let count = listing.voices.len();
    Ok(json!({
        "success": true,
        "voices": listing.voices,
        "message": format!("Found {count} voice(s) for provider {}", input.provider_id),
    }))
}

/// Lists models for an LLM or STT provider.
async fn list_models(
    arguments: Value,
    context: Arc<ToolContext>,
) -> Result<Value, ToolCallError> {
    let input: ProviderIdInput = decode_args(arguments)?;
    let listing = context.client.list_models(&input.provider_id).await?;
    let count = listing.models.len();
    Ok(json!({
        "success": true,
        "models": listing.models,
        "message": format!("Found {count} model(s) for provider {}", input.provider_id),
    }))
}
