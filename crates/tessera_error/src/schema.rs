//! Input-schema invariant violations.

/// Specific schema invariant failures detected on caller-supplied
/// application content.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum SchemaErrorKind {
    /// Two columns in one table share a name
    #[display("Duplicate column '{}' in table '{}'", column, table)]
    DuplicateColumn {
        /// Table carrying the duplicate
        table: String,
        /// Repeated column name
        column: String,
    },
    /// Two tables in one application share a name
    #[display("Duplicate table '{}' in application '{}'", table, application)]
    DuplicateTable {
        /// Application carrying the duplicate
        application: String,
        /// Repeated table name
        table: String,
    },
    /// Non-nullable column whose default value does not match its data type
    #[display("Default value for column '{}' does not match its data type", _0)]
    DefaultTypeMismatch(String),
    /// Enum column without enum values
    #[display("Enum column '{}' declares no enum values", _0)]
    EnumValuesMissing(String),
    /// Non-enum column carrying enum values
    #[display("Column '{}' carries enum values but is not an enum", _0)]
    EnumValuesForbidden(String),
}

/// Schema invariant error with source location.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Schema Error: {} at line {} in {}", kind, line, file)]
pub struct SchemaError {
    /// The error kind
    pub kind: SchemaErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl SchemaError {
    /// Create a new SchemaError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SchemaErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
