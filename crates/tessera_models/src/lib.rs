//! Reasoning-engine implementations for the Tessera inference pipeline.
//!
//! Provides the OpenAI-compatible [`OpenAiEngine`] plus its wire types,
//! per-stage prompt builders, and environment-driven configuration.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod config;
mod openai;
mod prompts;
mod request;
mod response;

pub use backend::{EngineKind, engine_from_env};
pub use config::EngineConfig;
pub use openai::OpenAiEngine;
pub use prompts::{clarification_messages, parameter_messages, selection_messages};
pub use request::{ChatCompletionRequest, Message, ToolChoice, ToolChoiceFunction, ToolSpec};
pub use response::{
    ChatCompletionResponse, Choice, ChoiceMessage, FunctionCall, ToolCall, Usage,
};
