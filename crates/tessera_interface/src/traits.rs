//! Trait definitions for reasoning-engine backends.

use async_trait::async_trait;
use tessera_core::{ApplicationContent, ChatMessage, Grouping, HttpMethod, Table};
use tessera_error::TesseraResult;

/// The external service this pipeline delegates semantic interpretation to.
///
/// Implementations own transport, prompt text, and timeout policy. Every
/// method is a single call: the pipeline never retries, and any failure is
/// terminal for the request that made it.
#[async_trait]
pub trait ReasoningEngine: Send + Sync {
    /// Partition the instruction into (task, application, table, method)
    /// groupings.
    ///
    /// An empty list is a valid answer and routes the request to
    /// clarification.
    ///
    /// # Errors
    ///
    /// [`InferenceError`](tessera_error::InferenceError) on transport failure
    /// or contract non-conformance.
    async fn select(
        &self,
        applications: &[ApplicationContent],
        instruction: &str,
        history: &[ChatMessage],
    ) -> TesseraResult<Vec<Grouping>>;

    /// Fill the method-specific structured-output contract for one grouping.
    ///
    /// Returns the raw JSON arguments; shaping and coercion happen in the
    /// pipeline.
    ///
    /// # Errors
    ///
    /// [`InferenceError`](tessera_error::InferenceError) on transport failure
    /// or contract non-conformance.
    async fn generate_parameters(
        &self,
        http_method: HttpMethod,
        application: &ApplicationContent,
        table: &Table,
        instruction: &str,
        history: &[ChatMessage],
    ) -> TesseraResult<serde_json::Value>;

    /// Ask the user a clarifying question when no grouping applies.
    ///
    /// # Errors
    ///
    /// [`InferenceError`](tessera_error::InferenceError) on transport failure.
    async fn clarify(
        &self,
        applications: &[ApplicationContent],
        instruction: &str,
        history: &[ChatMessage],
    ) -> TesseraResult<String>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;

    /// Model identifier the engine answers with.
    fn model_name(&self) -> &str;
}
