//! Trait definitions for the Tessera inference pipeline.
//!
//! This crate provides the seam between the pipeline and the reasoning
//! engine: the [`ReasoningEngine`] trait and the structured-output
//! [`ToolContract`] an engine answer must satisfy.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::ReasoningEngine;
pub use types::ToolContract;
