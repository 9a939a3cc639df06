//! Top-level error wrapper types.

use crate::{CoercionError, ConfigurationError, InferenceError, NotFoundError, SchemaError};

/// The foundation error enum. Every stage of the pipeline surfaces one of
/// these domains; all of them are terminal for the request that raised them.
///
/// # Examples
///
/// ```
/// use tessera_error::{TesseraError, InferenceError, InferenceErrorKind};
///
/// let inference = InferenceError::new(InferenceErrorKind::Api("503".into()));
/// let err: TesseraError = inference.into();
/// assert!(format!("{}", err).contains("Inference Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum TesseraErrorKind {
    /// Reasoning-engine call failed or returned non-conforming content
    #[from(InferenceError)]
    Inference(InferenceError),
    /// Grouping references an unknown application or table
    #[from(NotFoundError)]
    NotFound(NotFoundError),
    /// Generated value cannot be cast to its column's type
    #[from(CoercionError)]
    Coercion(CoercionError),
    /// Unsupported method/backend or unusable settings
    #[from(ConfigurationError)]
    Configuration(ConfigurationError),
    /// Caller-supplied schema violates a model invariant
    #[from(SchemaError)]
    Schema(SchemaError),
}

/// Tessera error with kind discrimination.
///
/// # Examples
///
/// ```
/// use tessera_error::{TesseraResult, ConfigurationError, ConfigurationErrorKind};
///
/// fn might_fail() -> TesseraResult<()> {
///     Err(ConfigurationError::new(ConfigurationErrorKind::MissingEnv(
///         "TESSERA_ENGINE_MODEL".into(),
///     )))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Tessera Error: {}", _0)]
pub struct TesseraError(Box<TesseraErrorKind>);

impl TesseraError {
    /// Create a new error from a kind.
    pub fn new(kind: TesseraErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &TesseraErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to TesseraErrorKind
impl<T> From<T> for TesseraError
where
    T: Into<TesseraErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Tessera operations.
///
/// # Examples
///
/// ```
/// use tessera_error::{TesseraResult, InferenceError, InferenceErrorKind};
///
/// fn call_engine() -> TesseraResult<String> {
///     Err(InferenceError::new(InferenceErrorKind::Transport("timed out".into())))?
/// }
/// ```
pub type TesseraResult<T> = std::result::Result<T, TesseraError>;
