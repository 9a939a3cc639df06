//! OpenAI-compatible chat completion request types.

use serde::{Deserialize, Serialize};
use tessera_interface::ToolContract;

/// OpenAI-compatible chat completion request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatCompletionRequest {
    /// Model identifier
    pub model: String,
    /// Conversation messages
    pub messages: Vec<Message>,
    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Temperature for sampling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Tools the model may call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<ToolSpec>>,
    /// Force a specific tool call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<ToolChoice>,
}

impl ChatCompletionRequest {
    /// A plain text completion request with no tools attached.
    pub fn text(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            messages,
            max_tokens: None,
            temperature: None,
            tools: None,
            tool_choice: None,
        }
    }

    /// Attach one contract as the forced tool call.
    pub fn with_forced_tool(mut self, contract: ToolContract) -> Self {
        self.tool_choice = Some(ToolChoice::function(&contract.name));
        self.tools = Some(vec![ToolSpec::function(contract)]);
        self
    }
}

/// A message in the conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Message {
    /// Role of the message sender (system, user, assistant)
    pub role: String,
    /// Message content
    pub content: String,
}

impl Message {
    /// Create a new message.
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }
}

/// A tool entry on the wire: a typed wrapper around one contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolSpec {
    /// Tool kind, always "function"
    #[serde(rename = "type")]
    pub kind: String,
    /// The contract the model must satisfy when calling this tool
    pub function: ToolContract,
}

impl ToolSpec {
    /// Wrap a contract as a function tool.
    pub fn function(contract: ToolContract) -> Self {
        Self {
            kind: "function".to_string(),
            function: contract,
        }
    }
}

/// Forces the model to call one named function.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolChoice {
    /// Choice kind, always "function"
    #[serde(rename = "type")]
    pub kind: String,
    /// The function that must be called
    pub function: ToolChoiceFunction,
}

/// Names the forced function.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolChoiceFunction {
    /// Function name
    pub name: String,
}

impl ToolChoice {
    /// Force the named function.
    pub fn function(name: impl Into<String>) -> Self {
        Self {
            kind: "function".to_string(),
            function: ToolChoiceFunction { name: name.into() },
        }
    }
}
