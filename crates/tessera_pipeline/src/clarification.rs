//! Clarification fallback when selection finds nothing to do.

use tessera_core::{ApplicationContent, ChatMessage};
use tessera_error::TesseraResult;
use tessera_interface::ReasoningEngine;
use tracing::instrument;

/// Ask the engine for a clarifying question to send back to the user.
///
/// A first-class alternate success outcome, not a failure path.
///
/// # Errors
///
/// Propagates the engine's [`InferenceError`](tessera_error::InferenceError).
#[instrument(skip_all)]
pub async fn clarify<E: ReasoningEngine>(
    engine: &E,
    applications: &[ApplicationContent],
    instruction: &str,
    history: &[ChatMessage],
) -> TesseraResult<String> {
    let question = engine.clarify(applications, instruction, history).await?;
    tracing::info!("Clarification complete");
    Ok(question)
}
