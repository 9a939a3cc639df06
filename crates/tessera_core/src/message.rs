//! Message types for conversation history.

use serde::{Deserialize, Serialize};

/// Roles in the conversation between the end user and the builder product.
///
/// # Examples
///
/// ```
/// use tessera_core::Role;
///
/// let role: Role = serde_json::from_str("\"assistant\"").unwrap();
/// assert_eq!(role, Role::Assistant);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Messages from the human
    User,
    /// Messages from the assistant
    Assistant,
}

/// One turn of conversation history.
///
/// Assistant turns may carry the structured rows a previous pipeline run
/// produced, so the engine can resolve references like "those users".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// The role of the message sender
    pub role: Role,
    /// The message text
    pub content: String,
    /// Structured results attached to a prior assistant turn
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<serde_json::Value>>,
}

impl ChatMessage {
    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            rows: None,
        }
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            rows: None,
        }
    }
}
