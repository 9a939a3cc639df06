//! Application schema model: applications, tables, columns.

use serde::{Deserialize, Serialize};
use tessera_error::{SchemaError, SchemaErrorKind};

/// Column data types understood by the pipeline.
///
/// The wire names are lowercase, matching the schema documents the
/// application builder stores.
///
/// # Examples
///
/// ```
/// use tessera_core::DataType;
///
/// let dt: DataType = serde_json::from_str("\"integer\"").unwrap();
/// assert_eq!(dt, DataType::Integer);
/// assert_eq!(format!("{}", DataType::Datetime), "datetime");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DataType {
    /// Free-form text
    String,
    /// Whole numbers
    Integer,
    /// Floating-point numbers
    Float,
    /// true/false
    Boolean,
    /// Calendar date, ISO `YYYY-MM-DD`
    Date,
    /// Date and time, ISO 8601
    Datetime,
    /// UUID rendered as text
    Uuid,
    /// One of a fixed set of string values
    Enum,
}

/// How a table's primary key is produced.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PrimaryKey {
    /// No primary key
    #[default]
    None,
    /// Database-assigned incrementing integer
    AutoIncrement,
    /// Database-assigned UUID
    Uuid,
}

impl PrimaryKey {
    /// Whether the database generates this key itself.
    ///
    /// Generated key columns are hidden from the reasoning engine during
    /// schema reduction so it never tries to write them.
    pub fn is_generated(&self) -> bool {
        matches!(self, PrimaryKey::AutoIncrement | PrimaryKey::Uuid)
    }
}

/// A single column definition.
///
/// # Examples
///
/// ```
/// use tessera_core::{Column, DataType};
///
/// let column: Column = serde_json::from_value(serde_json::json!({
///     "name": "age",
///     "data_type": "integer",
/// }))
/// .unwrap();
/// assert_eq!(column.data_type, DataType::Integer);
/// assert!(!column.nullable);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column name, unique within its table
    pub name: String,
    /// Declared data type
    pub data_type: DataType,
    /// Whether NULL is an admissible value
    #[serde(default)]
    pub nullable: bool,
    /// Primary-key kind of this column
    #[serde(default)]
    pub primary_key: PrimaryKey,
    /// Default value applied when a row omits the column
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<serde_json::Value>,
    /// Admissible values, present exactly when `data_type` is enum
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
}

impl Column {
    /// Check the column invariants.
    ///
    /// A non-nullable default value must match the declared data type, and
    /// `enum_values` must be present exactly when the type is [`DataType::Enum`].
    ///
    /// # Errors
    ///
    /// Returns a [`SchemaError`] naming the offending column.
    pub fn validate(&self) -> Result<(), SchemaError> {
        match (self.data_type, &self.enum_values) {
            (DataType::Enum, None) => {
                return Err(SchemaError::new(SchemaErrorKind::EnumValuesMissing(
                    self.name.clone(),
                )));
            }
            (DataType::Enum, Some(_)) => {}
            (_, Some(_)) => {
                return Err(SchemaError::new(SchemaErrorKind::EnumValuesForbidden(
                    self.name.clone(),
                )));
            }
            (_, None) => {}
        }

        if !self.nullable {
            if let Some(default) = &self.default_value {
                if !value_matches(default, self.data_type) {
                    return Err(SchemaError::new(SchemaErrorKind::DefaultTypeMismatch(
                        self.name.clone(),
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Whether a JSON value is type-compatible with a declared data type.
fn value_matches(value: &serde_json::Value, data_type: DataType) -> bool {
    match data_type {
        DataType::String | DataType::Date | DataType::Datetime | DataType::Uuid | DataType::Enum => {
            value.is_string()
        }
        DataType::Integer => value.is_i64() || value.is_u64(),
        DataType::Float => value.is_number(),
        DataType::Boolean => value.is_boolean(),
    }
}

/// A table definition with its ordered columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Table name, unique within its application
    pub name: String,
    /// Human description shown to the reasoning engine
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ordered column definitions with unique names
    pub columns: Vec<Column>,
    /// Primary-key kind of this table
    #[serde(default)]
    pub primary_key: PrimaryKey,
}

impl Table {
    /// Look up a column by exact name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Check table invariants: unique column names, valid columns.
    ///
    /// # Errors
    ///
    /// Returns the first [`SchemaError`] encountered in declaration order.
    pub fn validate(&self) -> Result<(), SchemaError> {
        let mut seen: Vec<&str> = Vec::with_capacity(self.columns.len());
        for column in &self.columns {
            if seen.contains(&column.name.as_str()) {
                return Err(SchemaError::new(SchemaErrorKind::DuplicateColumn {
                    table: self.name.clone(),
                    column: column.name.clone(),
                }));
            }
            seen.push(&column.name);
            column.validate()?;
        }
        Ok(())
    }
}

/// The full schema of one application: a named set of tables.
///
/// Read-only input to the pipeline; the validation stage re-attaches the
/// caller's original content after generation ran against a reduced copy.
///
/// # Examples
///
/// ```
/// use tessera_core::ApplicationContent;
///
/// let app: ApplicationContent = serde_json::from_value(serde_json::json!({
///     "name": "crm",
///     "tables": [{
///         "name": "users",
///         "columns": [{"name": "age", "data_type": "integer"}],
///     }],
/// }))
/// .unwrap();
/// assert!(app.table("users").is_some());
/// assert!(app.table("orders").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationContent {
    /// Application name, unique across the request
    pub name: String,
    /// Tables with unique names
    pub tables: Vec<Table>,
}

impl ApplicationContent {
    /// Look up a table by exact name.
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Check application invariants: unique table names, valid tables.
    ///
    /// # Errors
    ///
    /// Returns the first [`SchemaError`] encountered in declaration order.
    pub fn validate(&self) -> Result<(), SchemaError> {
        let mut seen: Vec<&str> = Vec::with_capacity(self.tables.len());
        for table in &self.tables {
            if seen.contains(&table.name.as_str()) {
                return Err(SchemaError::new(SchemaErrorKind::DuplicateTable {
                    application: self.name.clone(),
                    table: table.name.clone(),
                }));
            }
            seen.push(&table.name);
            table.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn column(name: &str, data_type: DataType) -> Column {
        Column {
            name: name.into(),
            data_type,
            nullable: false,
            primary_key: PrimaryKey::None,
            default_value: None,
            enum_values: None,
        }
    }

    #[test]
    fn enum_column_requires_values() {
        let mut status = column("status", DataType::Enum);
        assert!(status.validate().is_err());

        status.enum_values = Some(vec!["open".into(), "closed".into()]);
        assert!(status.validate().is_ok());
    }

    #[test]
    fn non_enum_column_rejects_values() {
        let mut age = column("age", DataType::Integer);
        age.enum_values = Some(vec!["1".into()]);
        assert!(age.validate().is_err());
    }

    #[test]
    fn default_value_must_match_type() {
        let mut age = column("age", DataType::Integer);
        age.default_value = Some(json!("eighteen"));
        assert!(age.validate().is_err());

        age.default_value = Some(json!(18));
        assert!(age.validate().is_ok());
    }

    #[test]
    fn nullable_default_is_not_type_checked() {
        let mut nickname = column("nickname", DataType::String);
        nickname.nullable = true;
        nickname.default_value = Some(json!(42));
        assert!(nickname.validate().is_ok());
    }

    #[test]
    fn duplicate_column_names_rejected() {
        let table = Table {
            name: "users".into(),
            description: None,
            columns: vec![column("age", DataType::Integer), column("age", DataType::Float)],
            primary_key: PrimaryKey::None,
        };
        assert!(table.validate().is_err());
    }

    #[test]
    fn generated_key_kinds() {
        assert!(PrimaryKey::AutoIncrement.is_generated());
        assert!(PrimaryKey::Uuid.is_generated());
        assert!(!PrimaryKey::None.is_generated());
    }
}
