//! HTTP front door for the Tessera inference pipeline.
//!
//! One route, one envelope: `POST /inference/use` takes the applications,
//! the instruction, and the chat history, runs the pipeline, and answers
//! 200 with either generated operations or a clarification question. Every
//! failure is a 500 with a detail string; there is no partial-success
//! status.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;
use serde::{Deserialize, Serialize};
use tessera_core::{InferenceRequest, InferenceResponse};
use tessera_error::TesseraError;
use tessera_interface::ReasoningEngine;
use tessera_pipeline::Pipeline;

/// Error envelope returned with status 500.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable failure description
    pub detail: String,
}

/// A pipeline failure rendered as an HTTP response.
struct ApiError(TesseraError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("Inference failed: {}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                detail: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

/// Build the service router around one pipeline.
pub fn create_router<E>(pipeline: Pipeline<E>) -> Router
where
    E: ReasoningEngine + Clone + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/inference/use", post(inference_use::<E>))
        .with_state(pipeline)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn inference_use<E>(
    State(pipeline): State<Pipeline<E>>,
    Json(request): Json<InferenceRequest>,
) -> Result<Json<InferenceResponse>, ApiError>
where
    E: ReasoningEngine + Clone + 'static,
{
    let response = pipeline.run(request).await.map_err(ApiError)?;
    Ok(Json(response))
}
