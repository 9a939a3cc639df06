//! Type-coercion error types for the validation pass.

/// Specific failure conditions while coercing generated values.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum CoercionErrorKind {
    /// Value cannot be cast to the column's declared data type
    #[display("Cannot cast value '{}' for column '{}' to {}", value, column, data_type)]
    Uncastable {
        /// Column whose declared type the value missed
        column: String,
        /// Declared data type, rendered for the message
        data_type: String,
        /// Offending value, rendered for the message
        value: String,
    },
    /// Generated output references a column the table does not declare
    #[display("Unknown column '{}' in table '{}'", column, table)]
    UnknownColumn {
        /// Referenced column name
        column: String,
        /// Table that was searched
        table: String,
    },
}

/// Coercion error with source location.
///
/// Fatal to the containing result; with all-or-nothing joining this
/// terminates the request.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Coercion Error: {} at line {} in {}", kind, line, file)]
pub struct CoercionError {
    /// The error kind
    pub kind: CoercionErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl CoercionError {
    /// Create a new CoercionError with automatic location tracking.
    ///
    /// # Examples
    ///
    /// ```
    /// use tessera_error::{CoercionError, CoercionErrorKind};
    ///
    /// let err = CoercionError::new(CoercionErrorKind::UnknownColumn {
    ///     column: "agee".into(),
    ///     table: "users".into(),
    /// });
    /// assert!(format!("{}", err).contains("agee"));
    /// ```
    #[track_caller]
    pub fn new(kind: CoercionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
