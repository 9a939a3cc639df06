//! Selection stage: partition the instruction into groupings.

use tessera_core::{ApplicationContent, ChatMessage, Grouping};
use tessera_error::TesseraResult;
use tessera_interface::ReasoningEngine;
use tracing::instrument;

/// Ask the engine to partition the instruction into (task, application,
/// table, method) groupings.
///
/// One sequential call. An empty list is a valid outcome and routes the
/// request to clarification; it is never retried here.
///
/// # Errors
///
/// Propagates the engine's [`InferenceError`](tessera_error::InferenceError)
/// unchanged; it is terminal for the request.
#[instrument(skip_all, fields(applications = applications.len()))]
pub async fn select_groupings<E: ReasoningEngine>(
    engine: &E,
    applications: &[ApplicationContent],
    instruction: &str,
    history: &[ChatMessage],
) -> TesseraResult<Vec<Grouping>> {
    let groupings = engine.select(applications, instruction, history).await?;
    tracing::info!(groupings = groupings.len(), "Selection complete");
    Ok(groupings)
}
