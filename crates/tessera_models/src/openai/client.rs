//! OpenAI-compatible reasoning-engine client.

use crate::config::EngineConfig;
use crate::prompts;
use crate::request::{ChatCompletionRequest, Message};
use crate::response::ChatCompletionResponse;
use async_trait::async_trait;
use tessera_contract::{RELEVANT_GROUPINGS, parameter_contract, selection_contract};
use tessera_core::{ApplicationContent, ChatMessage, Grouping, HttpMethod, Table};
use tessera_error::{InferenceError, InferenceErrorKind, TesseraResult};
use tessera_interface::{ReasoningEngine, ToolContract};
use tracing::instrument;

/// Reasoning engine backed by an OpenAI-compatible chat-completions API.
///
/// One HTTP call per engine method; no retries and no local timeout policy.
/// Each structured call forces a single function tool built from the stage's
/// contract and returns the raw tool-call arguments.
#[derive(Debug, Clone)]
pub struct OpenAiEngine {
    config: EngineConfig,
    client: reqwest::Client,
}

impl OpenAiEngine {
    /// Create a new engine client.
    #[instrument(skip(config), fields(base_url = %config.base_url, model = %config.model))]
    pub fn new(config: EngineConfig) -> Self {
        tracing::debug!("Creating engine client");
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Create an engine client configured from the environment.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError`](tessera_error::ConfigurationError) when required
    /// variables are unset.
    pub fn from_env() -> TesseraResult<Self> {
        Ok(Self::new(EngineConfig::from_env()?))
    }

    /// Access the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Send one chat completion request.
    #[instrument(skip(self, request), fields(model = %request.model))]
    async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, InferenceError> {
        let url = format!("{}/v1/chat/completions", self.config.base_url);
        tracing::debug!("Sending chat completion request to {}", url);

        let mut req = self
            .client
            .post(&url)
            .json(&request)
            .header("Content-Type", "application/json");

        if let Some(api_key) = &self.config.api_key {
            req = req.header("Authorization", format!("Bearer {}", api_key));
        }

        let response = req.send().await.map_err(|e| {
            tracing::error!("Request failed: {}", e);
            InferenceError::new(InferenceErrorKind::Transport(format!("Request failed: {e}")))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Engine returned error: {}", status);
            return Err(InferenceError::new(InferenceErrorKind::Api(format!(
                "Engine returned: {status}"
            ))));
        }

        let result = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse response: {}", e);
            InferenceError::new(InferenceErrorKind::Malformed(format!(
                "Failed to parse response: {e}"
            )))
        })?;

        tracing::debug!("Chat completion successful");
        Ok(result)
    }

    /// Send messages constrained by one forced tool and return the parsed
    /// tool-call arguments.
    async fn structured_call(
        &self,
        messages: Vec<Message>,
        contract: ToolContract,
    ) -> TesseraResult<serde_json::Value> {
        let function_name = contract.name.clone();
        let request = ChatCompletionRequest {
            max_tokens: Some(self.config.max_tokens),
            temperature: Some(self.config.temperature),
            ..ChatCompletionRequest::text(self.config.model.clone(), messages)
        }
        .with_forced_tool(contract);

        let response = self.chat_completion(request).await?;
        extract_tool_arguments(&response, &function_name)
    }
}

/// Pull the forced tool call's arguments out of a response.
fn extract_tool_arguments(
    response: &ChatCompletionResponse,
    function_name: &str,
) -> TesseraResult<serde_json::Value> {
    let call = response
        .choices
        .first()
        .and_then(|choice| choice.message.tool_calls.as_ref())
        .and_then(|calls| calls.first())
        .ok_or_else(|| {
            InferenceError::new(InferenceErrorKind::MissingToolCall(
                function_name.to_string(),
            ))
        })?;

    serde_json::from_str(&call.function.arguments).map_err(|e| {
        InferenceError::new(InferenceErrorKind::Malformed(format!(
            "tool-call arguments are not valid JSON: {e}"
        )))
        .into()
    })
}

#[async_trait]
impl ReasoningEngine for OpenAiEngine {
    #[instrument(skip_all, fields(applications = applications.len()))]
    async fn select(
        &self,
        applications: &[ApplicationContent],
        instruction: &str,
        history: &[ChatMessage],
    ) -> TesseraResult<Vec<Grouping>> {
        let messages = prompts::selection_messages(applications, instruction, history);
        let contract = selection_contract(applications);
        let arguments = self.structured_call(messages, contract).await?;

        // A model that finds nothing to do may omit the groupings field
        // entirely; that is the empty selection, not a contract violation.
        match arguments.get(RELEVANT_GROUPINGS) {
            None | Some(serde_json::Value::Null) => Ok(Vec::new()),
            Some(groupings) => serde_json::from_value(groupings.clone()).map_err(|e| {
                InferenceError::new(InferenceErrorKind::Contract(format!(
                    "selection answer has the wrong shape: {e}"
                )))
                .into()
            }),
        }
    }

    #[instrument(skip_all, fields(method = %http_method, application = %application.name, table = %table.name))]
    async fn generate_parameters(
        &self,
        http_method: HttpMethod,
        application: &ApplicationContent,
        table: &Table,
        instruction: &str,
        history: &[ChatMessage],
    ) -> TesseraResult<serde_json::Value> {
        let messages =
            prompts::parameter_messages(http_method, &application.name, table, instruction, history);
        let contract = parameter_contract(http_method, table);
        self.structured_call(messages, contract).await
    }

    #[instrument(skip_all)]
    async fn clarify(
        &self,
        applications: &[ApplicationContent],
        instruction: &str,
        history: &[ChatMessage],
    ) -> TesseraResult<String> {
        let messages = prompts::clarification_messages(applications, instruction, history);
        let request = ChatCompletionRequest {
            max_tokens: Some(self.config.max_tokens),
            temperature: Some(self.config.temperature),
            ..ChatCompletionRequest::text(self.config.model.clone(), messages)
        };

        let response = self.chat_completion(request).await?;
        response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| {
                InferenceError::new(InferenceErrorKind::Contract(
                    "clarification answer carried no text".into(),
                ))
                .into()
            })
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tool_response(arguments: &str) -> ChatCompletionResponse {
        serde_json::from_value(json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "created": 1,
            "model": "gpt-4o-mini",
            "choices": [{
                "index": 0,
                "message": {
                    "role": "assistant",
                    "tool_calls": [{
                        "type": "function",
                        "function": {"name": "select", "arguments": arguments},
                    }],
                },
            }],
        }))
        .unwrap()
    }

    #[test]
    fn arguments_extract_as_json() {
        let response = tool_response("{\"relevant_groupings\": []}");
        let arguments = extract_tool_arguments(&response, "select").unwrap();
        assert_eq!(arguments["relevant_groupings"], json!([]));
    }

    #[test]
    fn missing_tool_call_is_an_inference_error() {
        let response: ChatCompletionResponse = serde_json::from_value(json!({
            "id": "chatcmpl-2",
            "object": "chat.completion",
            "created": 1,
            "model": "gpt-4o-mini",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "I cannot help with that."},
            }],
        }))
        .unwrap();
        let err = extract_tool_arguments(&response, "select").unwrap_err();
        assert!(format!("{err}").contains("select"));
    }

    #[test]
    fn unparsable_arguments_are_malformed() {
        let response = tool_response("{not json");
        assert!(extract_tool_arguments(&response, "select").is_err());
    }
}
