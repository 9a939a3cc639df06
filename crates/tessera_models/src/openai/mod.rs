//! OpenAI-compatible engine implementation.

mod client;

pub use client::OpenAiEngine;
