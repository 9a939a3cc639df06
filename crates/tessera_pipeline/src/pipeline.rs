//! The staged pipeline orchestrator.

use crate::{clarification, generation, preprocess, selection, validate};
use tessera_core::{InferenceRequest, InferenceResponse};
use tessera_error::TesseraResult;
use tessera_interface::ReasoningEngine;
use tracing::instrument;

/// Runs the full inference pipeline against one reasoning engine.
///
/// The engine is injected at construction; its lifecycle (credentials,
/// transport, timeouts) belongs to the service bootstrap, not to the
/// pipeline. The pipeline itself is stateless per request.
///
/// # Examples
///
/// ```rust,ignore
/// use tessera_pipeline::Pipeline;
/// use tessera_models::OpenAiEngine;
///
/// let engine = OpenAiEngine::from_env()?;
/// let pipeline = Pipeline::new(engine);
/// let response = pipeline.run(request).await?;
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline<E: ReasoningEngine> {
    engine: E,
}

impl<E: ReasoningEngine> Pipeline<E> {
    /// Create a pipeline around the given engine.
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Access the injected engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Run one request through every stage.
    ///
    /// Order: schema invariants, reduction, selection, then either
    /// clarification (empty selection) or concurrent parameter generation
    /// followed by sequential validation. Any stage failure is terminal for
    /// the request; there are no retries and no partial responses.
    ///
    /// # Errors
    ///
    /// The first error any stage raises, unchanged.
    #[instrument(skip_all, fields(engine = self.engine.provider_name(), applications = request.applications.len()))]
    pub async fn run(&self, request: InferenceRequest) -> TesseraResult<InferenceResponse> {
        for application in &request.applications {
            application.validate()?;
        }

        let reduced = preprocess::reduce_applications(&request.applications);

        let groupings = selection::select_groupings(
            &self.engine,
            &reduced,
            &request.message,
            &request.chat_history,
        )
        .await?;

        if groupings.is_empty() {
            let question = clarification::clarify(
                &self.engine,
                &reduced,
                &request.message,
                &request.chat_history,
            )
            .await?;
            return Ok(InferenceResponse::clarification(question));
        }

        let results = generation::generate_parameters(
            &self.engine,
            &reduced,
            &request.message,
            &request.chat_history,
            &groupings,
        )
        .await?;

        let validated = validate::validate_results(results, &request.applications)?;
        Ok(InferenceResponse::results(validated))
    }
}
