//! Reasoning-engine error types.

/// Specific failure conditions for reasoning-engine calls.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum InferenceErrorKind {
    /// Transport-level failure reaching the engine
    #[display("Transport failure: {}", _0)]
    Transport(String),
    /// Engine returned a non-success status
    #[display("Engine API error: {}", _0)]
    Api(String),
    /// Engine answered without the forced tool call
    #[display("No tool call in engine response for '{}'", _0)]
    MissingToolCall(String),
    /// Tool-call arguments were not parseable JSON
    #[display("Malformed tool-call arguments: {}", _0)]
    Malformed(String),
    /// Parsed answer did not satisfy the structured-output contract
    #[display("Answer violates contract: {}", _0)]
    Contract(String),
}

/// Reasoning-engine error with source location.
///
/// Fatal to the whole request: the pipeline never retries a failed
/// engine call.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Inference Error: {} at line {} in {}", kind, line, file)]
pub struct InferenceError {
    /// The error kind
    pub kind: InferenceErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl InferenceError {
    /// Create a new InferenceError with automatic location tracking.
    ///
    /// # Examples
    ///
    /// ```
    /// use tessera_error::{InferenceError, InferenceErrorKind};
    ///
    /// let err = InferenceError::new(InferenceErrorKind::Transport("connection refused".into()));
    /// assert!(format!("{}", err).contains("connection refused"));
    /// ```
    #[track_caller]
    pub fn new(kind: InferenceErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
