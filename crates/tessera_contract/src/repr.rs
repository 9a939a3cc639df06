//! The shared column-type representation table.
//!
//! Contract building and value coercion must agree exactly on how a column
//! type appears in engine answers. Both are keyed on [`ValueRepr`]; this is
//! the single source of truth for the `data_type -> representation` mapping.

use tessera_core::{Column, DataType};

/// How a column's values are represented in structured engine output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueRepr {
    /// JSON string; covers string, uuid, and enum columns
    Text,
    /// JSON integer
    Integer,
    /// JSON number; floats are "number" in function-calling schemas
    Number,
    /// JSON boolean
    Boolean,
    /// JSON string constrained to `YYYY-MM-DD`
    IsoDate,
    /// JSON string constrained to ISO 8601 date-time
    IsoDatetime,
}

impl ValueRepr {
    /// The representation of a column data type.
    pub fn of(data_type: DataType) -> Self {
        match data_type {
            DataType::String | DataType::Uuid | DataType::Enum => ValueRepr::Text,
            DataType::Integer => ValueRepr::Integer,
            DataType::Float => ValueRepr::Number,
            DataType::Boolean => ValueRepr::Boolean,
            DataType::Date => ValueRepr::IsoDate,
            DataType::Datetime => ValueRepr::IsoDatetime,
        }
    }

    /// The JSON Schema `type` keyword for this representation.
    pub fn json_type(&self) -> &'static str {
        match self {
            ValueRepr::Text | ValueRepr::IsoDate | ValueRepr::IsoDatetime => "string",
            ValueRepr::Integer => "integer",
            ValueRepr::Number => "number",
            ValueRepr::Boolean => "boolean",
        }
    }
}

/// JSON Schema for one column's value, derived from its data type.
///
/// Enum columns become constrained strings; date columns carry a format
/// reminder in the description since date objects do not survive JSON
/// transport.
pub fn column_value_schema(column: &Column) -> serde_json::Value {
    let name = &column.name;
    match column.data_type {
        DataType::Enum => serde_json::json!({
            "type": "string",
            "enum": column.enum_values.clone().unwrap_or_default(),
            "description": format!(
                "The value for the {name} column. Make sure that the value is one of the enum values for the column and is a STRING."
            ),
        }),
        DataType::Date => serde_json::json!({
            "type": "string",
            "description": format!(
                "The value for the {name} column. Make sure that the value is in the format of YYYY-MM-DD."
            ),
        }),
        DataType::Datetime => serde_json::json!({
            "type": "string",
            "description": format!(
                "The value for the {name} column. Make sure that the value is an ISO 8601 date-time string."
            ),
        }),
        _ => serde_json::json!({
            "type": ValueRepr::of(column.data_type).json_type(),
            "description": format!("The value for the {name} column."),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;
    use tessera_core::PrimaryKey;

    #[test]
    fn every_data_type_has_a_representation() {
        for data_type in DataType::iter() {
            // of() is total; json_type never panics
            let _ = ValueRepr::of(data_type).json_type();
        }
    }

    #[test]
    fn float_maps_to_number() {
        assert_eq!(ValueRepr::of(DataType::Float), ValueRepr::Number);
        assert_eq!(ValueRepr::of(DataType::Float).json_type(), "number");
    }

    #[test]
    fn enum_schema_carries_values() {
        let column = Column {
            name: "status".into(),
            data_type: DataType::Enum,
            nullable: false,
            primary_key: PrimaryKey::None,
            default_value: None,
            enum_values: Some(vec!["open".into(), "closed".into()]),
        };
        let schema = column_value_schema(&column);
        assert_eq!(schema["type"], "string");
        assert_eq!(schema["enum"], serde_json::json!(["open", "closed"]));
    }
}
