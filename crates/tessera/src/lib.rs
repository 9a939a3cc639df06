//! Tessera - natural-language instructions to validated CRUD operations.
//!
//! Tessera sits behind an application-builder product. Given the database
//! schemas of one or more applications, an instruction, and the chat
//! history, it selects which (task, application, table, HTTP method)
//! groupings the instruction calls for, asks a reasoning engine to fill a
//! per-grouping structured-output contract, then validates, type-coerces,
//! and schema-restores the answers.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use tessera::{OpenAiEngine, Pipeline, InferenceRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = OpenAiEngine::from_env()?;
//!     let pipeline = Pipeline::new(engine);
//!
//!     let request: InferenceRequest = serde_json::from_str(payload)?;
//!     let response = pipeline.run(request).await?;
//!     println!("{} operation(s)", response.response.len());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Tessera is organized as a workspace with focused crates:
//!
//! - `tessera_core` - Schema model, chat history, condition tree, results
//! - `tessera_interface` - `ReasoningEngine` trait definition
//! - `tessera_error` - Error types
//! - `tessera_contract` - Dynamic structured-output contract builder
//! - `tessera_models` - Reasoning-engine implementations
//! - `tessera_pipeline` - Selection, generation, and validation stages
//! - `tessera_server` - HTTP front door
//!
//! This crate re-exports the public surface for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use tessera_contract::{
    FILTER_CONDITIONS, INSERTED_ROWS, PARAMETERS_FUNCTION, RELEVANT_GROUPINGS, SELECT_FUNCTION,
    UPDATED_DATA, ValueRepr, column_value_schema, parameter_contract, selection_contract,
};
pub use tessera_core::{
    ApplicationContent, BooleanClause, ChatMessage, Column, ComparisonOperator, Condition,
    ConditionGroup, ConditionLeaf, DataType, Grouping, HttpMethod, HttpMethodResult,
    InferenceRequest, InferenceResponse, PrimaryKey, Role, Row, Table,
};
pub use tessera_error::{
    CoercionError, CoercionErrorKind, ConfigurationError, ConfigurationErrorKind, InferenceError,
    InferenceErrorKind, NotFoundError, NotFoundErrorKind, SchemaError, SchemaErrorKind,
    TesseraError, TesseraErrorKind, TesseraResult,
};
pub use tessera_interface::{ReasoningEngine, ToolContract};
pub use tessera_models::{EngineConfig, EngineKind, OpenAiEngine, engine_from_env};
pub use tessera_pipeline::Pipeline;
