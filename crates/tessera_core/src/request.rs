//! Request and response envelopes of the inference pipeline.

use crate::{ApplicationContent, ChatMessage, Condition, HttpMethod};
use serde::{Deserialize, Serialize};

/// Row payloads are JSON objects keyed by column name.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// Input to one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceRequest {
    /// Full schemas of every application the instruction may touch
    pub applications: Vec<ApplicationContent>,
    /// The natural-language instruction
    pub message: String,
    /// Prior conversation turns, oldest first
    #[serde(default)]
    pub chat_history: Vec<ChatMessage>,
}

/// One validated CRUD operation against one table.
///
/// Carries the method-specific payload and, after schema restoration, the
/// caller's original full application schema. Each value is owned by the
/// validation pass that produced it and never shared across groupings.
///
/// # Examples
///
/// ```
/// use tessera_core::{HttpMethod, HttpMethodResult};
///
/// let result: HttpMethodResult = serde_json::from_value(serde_json::json!({
///     "http_method": "GET",
///     "application": {"name": "crm", "tables": []},
///     "table_name": "users",
///     "filter_conditions": {
///         "boolean_clause": "AND",
///         "conditions": [{"column": "age", "operator": ">", "value": 30}],
///     },
/// }))
/// .unwrap();
/// assert_eq!(result.http_method, HttpMethod::Get);
/// assert!(result.inserted_rows.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpMethodResult {
    /// The CRUD method this operation performs
    pub http_method: HttpMethod,
    /// Application snapshot; the original full schema once restored
    pub application: ApplicationContent,
    /// Table the operation targets
    pub table_name: String,
    /// Rows to insert (POST)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inserted_rows: Option<Vec<Row>>,
    /// Filter predicate (GET/PUT/DELETE)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_conditions: Option<Condition>,
    /// Column values to write (PUT)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_data: Option<Row>,
}

/// Output of one pipeline run: either generated operations or a
/// clarification question, never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceResponse {
    /// Validated operations, in selection order
    pub response: Vec<HttpMethodResult>,
    /// Clarifying question when selection found nothing to do
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clarification: Option<String>,
}

impl InferenceResponse {
    /// A response carrying generated operations.
    pub fn results(response: Vec<HttpMethodResult>) -> Self {
        Self {
            response,
            clarification: None,
        }
    }

    /// A response carrying a clarification question and no operations.
    pub fn clarification(question: impl Into<String>) -> Self {
        Self {
            response: Vec::new(),
            clarification: Some(question.into()),
        }
    }
}
