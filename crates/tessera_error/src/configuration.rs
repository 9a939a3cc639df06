//! Configuration error types.

/// Specific configuration failures.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum ConfigurationErrorKind {
    /// HTTP method outside GET/POST/PUT/DELETE
    #[display("Unsupported HTTP method: {}", _0)]
    UnsupportedMethod(String),
    /// Engine backend kind this build does not provide
    #[display("Unsupported engine backend: {}", _0)]
    UnsupportedBackend(String),
    /// Required environment variable is absent
    #[display("Missing environment variable: {}", _0)]
    MissingEnv(String),
    /// Setting is present but unusable
    #[display("Invalid configuration: {}", _0)]
    Invalid(String),
}

/// Configuration error with source location. Never retried.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigurationError {
    /// The error kind
    pub kind: ConfigurationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigurationError {
    /// Create a new ConfigurationError with automatic location tracking.
    ///
    /// # Examples
    ///
    /// ```
    /// use tessera_error::{ConfigurationError, ConfigurationErrorKind};
    ///
    /// let err = ConfigurationError::new(ConfigurationErrorKind::UnsupportedMethod("PATCH".into()));
    /// assert!(format!("{}", err).contains("PATCH"));
    /// ```
    #[track_caller]
    pub fn new(kind: ConfigurationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
