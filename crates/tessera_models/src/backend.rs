//! Engine backend selection.

use crate::OpenAiEngine;
use tessera_error::{ConfigurationError, ConfigurationErrorKind, TesseraResult};

/// The engine backends this build provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum EngineKind {
    /// OpenAI-compatible chat-completions API
    OpenAi,
}

impl std::str::FromStr for EngineKind {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "openai" => Ok(EngineKind::OpenAi),
            other => Err(ConfigurationError::new(
                ConfigurationErrorKind::UnsupportedBackend(other.to_string()),
            )),
        }
    }
}

/// Build the configured engine from the environment.
///
/// Reads `TESSERA_ENGINE_PROVIDER` (default "openai") plus the variables
/// [`EngineConfig::from_env`](crate::EngineConfig::from_env) documents.
///
/// # Errors
///
/// [`ConfigurationError`](tessera_error::ConfigurationError) on an unknown
/// backend kind or missing settings. Never retried.
pub fn engine_from_env() -> TesseraResult<OpenAiEngine> {
    let kind = std::env::var("TESSERA_ENGINE_PROVIDER").unwrap_or_else(|_| "openai".to_string());
    match kind.parse::<EngineKind>()? {
        EngineKind::OpenAi => OpenAiEngine::from_env(),
    }
}
