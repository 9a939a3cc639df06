//! Engine-facing type definitions.

use serde::{Deserialize, Serialize};

/// A structured-output contract the reasoning engine must conform to.
///
/// Rendered as a function/tool definition on the wire; `parameters` is a
/// JSON Schema describing exactly the shape the answer must take.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolContract {
    /// Name of the function the engine is forced to call
    pub name: String,
    /// Human-readable description of what the answer represents
    pub description: String,
    /// JSON Schema the answer's arguments must satisfy
    pub parameters: serde_json::Value,
}

impl ToolContract {
    /// Create a new contract.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: serde_json::Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
        }
    }
}
