//! Lookup-miss error types for selection groupings.

/// Specific lookup failures while resolving a grouping.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum NotFoundErrorKind {
    /// Grouping names an application absent from the supplied schemas
    #[display("Application '{}' not found in supplied schemas", _0)]
    Application(String),
    /// Grouping names a table absent from its application
    #[display("Table '{}' not found in application '{}'", table, application)]
    Table {
        /// Application that was searched
        application: String,
        /// Table name the grouping asked for
        table: String,
    },
}

/// Lookup-miss error with source location.
///
/// Selection leaves `table_name` unconstrained, so the engine can emit a
/// name that no supplied schema carries. Resolution failure aborts the
/// whole batch.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Not Found Error: {} at line {} in {}", kind, line, file)]
pub struct NotFoundError {
    /// The error kind
    pub kind: NotFoundErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl NotFoundError {
    /// Create a new NotFoundError with automatic location tracking.
    ///
    /// # Examples
    ///
    /// ```
    /// use tessera_error::{NotFoundError, NotFoundErrorKind};
    ///
    /// let err = NotFoundError::new(NotFoundErrorKind::Application("crm".into()));
    /// assert!(format!("{}", err).contains("crm"));
    /// ```
    #[track_caller]
    pub fn new(kind: NotFoundErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
