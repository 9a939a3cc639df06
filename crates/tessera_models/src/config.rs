//! Configuration for the reasoning-engine connection.

use tessera_error::{ConfigurationError, ConfigurationErrorKind};

/// Connection settings for an OpenAI-compatible chat-completions endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Base URL of the API (e.g., "https://api.openai.com")
    pub base_url: String,
    /// Model identifier to request
    pub model: String,
    /// Bearer token; optional for local compatible servers
    pub api_key: Option<String>,
    /// Sampling temperature
    pub temperature: f32,
    /// Output token ceiling per call
    pub max_tokens: u32,
}

impl EngineConfig {
    /// Create a configuration with the default sampling settings.
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            model: model.into(),
            api_key: None,
            temperature: 1.0,
            max_tokens: 3000,
        }
    }

    /// Read the configuration from environment variables.
    ///
    /// Reads:
    /// - `TESSERA_ENGINE_BASE_URL` (default: "https://api.openai.com")
    /// - `TESSERA_ENGINE_MODEL` (required)
    /// - `OPENAI_API_KEY` (optional, for local compatible servers)
    ///
    /// # Errors
    ///
    /// [`ConfigurationError`] when the model is unset.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        let base_url = std::env::var("TESSERA_ENGINE_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com".to_string());
        let model = std::env::var("TESSERA_ENGINE_MODEL").map_err(|_| {
            ConfigurationError::new(ConfigurationErrorKind::MissingEnv(
                "TESSERA_ENGINE_MODEL".into(),
            ))
        })?;
        let api_key = std::env::var("OPENAI_API_KEY").ok();

        Ok(Self {
            api_key,
            ..Self::new(base_url, model)
        })
    }

    /// Set the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}
