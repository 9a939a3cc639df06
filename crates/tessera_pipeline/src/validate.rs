//! Validation stage: type coercion against the reduced schema, then
//! restoration of the caller's full schema.

use tessera_contract::ValueRepr;
use tessera_core::{
    ApplicationContent, Condition, HttpMethodResult, PrimaryKey, Row, Table,
};
use tessera_error::{
    CoercionError, CoercionErrorKind, NotFoundError, NotFoundErrorKind, TesseraResult,
};
use tracing::instrument;

/// Run both validation passes over every generated result, in order.
///
/// Pass one coerces every leaf value to its column's declared type, walking
/// inserted rows, the condition tree, and updated data recursively. It runs
/// against the reduced schema the generation stage attached. Pass two swaps
/// that snapshot for the caller's original full schema; it is a metadata
/// swap only and never re-validates.
///
/// Coercion is idempotent: re-running it over an already-typed result
/// changes nothing.
///
/// # Errors
///
/// [`CoercionError`](tessera_error::CoercionError) on an uncastable value or
/// a reference to a column the reduced table does not carry.
#[instrument(skip_all, fields(results = results.len()))]
pub fn validate_results(
    mut results: Vec<HttpMethodResult>,
    original_applications: &[ApplicationContent],
) -> TesseraResult<Vec<HttpMethodResult>> {
    for result in &mut results {
        coerce_result(result)?;
        restore_schema(result, original_applications);
    }
    tracing::info!(results = results.len(), "Validation complete");
    Ok(results)
}

/// Coerce every leaf value in one result to its column's declared type.
fn coerce_result(result: &mut HttpMethodResult) -> TesseraResult<()> {
    let table = result
        .application
        .table(&result.table_name)
        .ok_or_else(|| {
            NotFoundError::new(NotFoundErrorKind::Table {
                application: result.application.name.clone(),
                table: result.table_name.clone(),
            })
        })?
        .clone();

    if let Some(rows) = &mut result.inserted_rows {
        for row in rows {
            coerce_row(row, &table)?;
        }
    }
    if let Some(condition) = &mut result.filter_conditions {
        coerce_condition(condition, &table)?;
    }
    if let Some(row) = &mut result.updated_data {
        coerce_row(row, &table)?;
    }
    Ok(())
}

/// Swap the attached reduced snapshot for the caller's original schema.
///
/// Upstream reduction hides generated key columns from the engine; the
/// caller gets the full table definitions back.
fn restore_schema(result: &mut HttpMethodResult, original_applications: &[ApplicationContent]) {
    for application in original_applications {
        if application.name == result.application.name {
            result.application = application.clone();
            break;
        }
    }
}

fn coerce_row(row: &mut Row, table: &Table) -> TesseraResult<()> {
    for (name, value) in row.iter_mut() {
        let (repr, label) = column_repr(table, name)?;
        coerce_value(value, repr, name, label)?;
    }
    Ok(())
}

fn coerce_condition(condition: &mut Condition, table: &Table) -> TesseraResult<()> {
    match condition {
        Condition::Group(group) => {
            for member in &mut group.conditions {
                coerce_condition(member, table)?;
            }
            Ok(())
        }
        Condition::Leaf(leaf) => {
            let (repr, label) = column_repr(table, &leaf.column)?;
            coerce_value(&mut leaf.value, repr, &leaf.column, label)
        }
    }
}

/// Representation of a referenced column, including the `"id"` pseudo-column
/// the filter contract always offers.
///
/// `"id"` is usually absent from the reduced table; its representation
/// follows the table's primary-key kind.
fn column_repr(table: &Table, column: &str) -> Result<(ValueRepr, &'static str), CoercionError> {
    if let Some(declared) = table.column(column) {
        let repr = ValueRepr::of(declared.data_type);
        return Ok((repr, repr_label(repr)));
    }
    if column == "id" {
        let repr = match table.primary_key {
            PrimaryKey::Uuid => ValueRepr::Text,
            PrimaryKey::AutoIncrement | PrimaryKey::None => ValueRepr::Integer,
        };
        return Ok((repr, repr_label(repr)));
    }
    Err(CoercionError::new(CoercionErrorKind::UnknownColumn {
        column: column.to_string(),
        table: table.name.clone(),
    }))
}

fn repr_label(repr: ValueRepr) -> &'static str {
    match repr {
        ValueRepr::Text => "string",
        ValueRepr::Integer => "integer",
        ValueRepr::Number => "float",
        ValueRepr::Boolean => "boolean",
        ValueRepr::IsoDate => "date",
        ValueRepr::IsoDatetime => "datetime",
    }
}

/// Coerce one leaf value, elementwise over arrays (`IN` lists).
fn coerce_value(
    value: &mut serde_json::Value,
    repr: ValueRepr,
    column: &str,
    label: &'static str,
) -> TesseraResult<()> {
    match value {
        serde_json::Value::Null => Ok(()),
        serde_json::Value::Array(items) => {
            for item in items {
                coerce_scalar(item, repr, column, label)?;
            }
            Ok(())
        }
        _ => coerce_scalar(value, repr, column, label),
    }
}

fn coerce_scalar(
    value: &mut serde_json::Value,
    repr: ValueRepr,
    column: &str,
    label: &'static str,
) -> TesseraResult<()> {
    use serde_json::Value;

    let coerced = match (repr, &*value) {
        (ValueRepr::Text, Value::String(_)) => return Ok(()),
        (ValueRepr::Text, Value::Number(n)) => Some(Value::String(n.to_string())),
        (ValueRepr::Text, Value::Bool(b)) => Some(Value::String(b.to_string())),

        (ValueRepr::Integer, Value::Number(n)) => {
            if n.is_i64() || n.is_u64() {
                return Ok(());
            }
            n.as_f64()
                .filter(|f| f.fract() == 0.0)
                .map(|f| Value::from(f as i64))
        }
        (ValueRepr::Integer, Value::String(s)) => parse_integer(s),

        (ValueRepr::Number, Value::Number(_)) => return Ok(()),
        (ValueRepr::Number, Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number),

        (ValueRepr::Boolean, Value::Bool(_)) => return Ok(()),

        (ValueRepr::IsoDate, Value::String(s)) => {
            if chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok() {
                return Ok(());
            }
            None
        }
        (ValueRepr::IsoDatetime, Value::String(s)) => {
            if is_iso_datetime(s) {
                return Ok(());
            }
            None
        }

        _ => None,
    };

    match coerced {
        Some(new_value) => {
            *value = new_value;
            Ok(())
        }
        None => Err(CoercionError::new(CoercionErrorKind::Uncastable {
            column: column.to_string(),
            data_type: label.to_string(),
            value: value.to_string(),
        })
        .into()),
    }
}

fn parse_integer(s: &str) -> Option<serde_json::Value> {
    let trimmed = s.trim();
    if let Ok(whole) = trimmed.parse::<i64>() {
        return Some(serde_json::Value::from(whole));
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|f| f.fract() == 0.0)
        .map(|f| serde_json::Value::from(f as i64))
}

fn is_iso_datetime(s: &str) -> bool {
    chrono::DateTime::parse_from_rfc3339(s).is_ok()
        || chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").is_ok()
        || chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tessera_core::HttpMethod;

    fn crm_reduced() -> ApplicationContent {
        serde_json::from_value(json!({
            "name": "crm",
            "tables": [{
                "name": "users",
                "primary_key": "auto_increment",
                "columns": [
                    {"name": "name", "data_type": "string"},
                    {"name": "age", "data_type": "integer"},
                    {"name": "score", "data_type": "float"},
                    {"name": "joined", "data_type": "date"},
                ],
            }],
        }))
        .unwrap()
    }

    fn crm_full() -> ApplicationContent {
        serde_json::from_value(json!({
            "name": "crm",
            "tables": [{
                "name": "users",
                "primary_key": "auto_increment",
                "columns": [
                    {"name": "id", "data_type": "integer", "primary_key": "auto_increment"},
                    {"name": "name", "data_type": "string"},
                    {"name": "age", "data_type": "integer"},
                    {"name": "score", "data_type": "float"},
                    {"name": "joined", "data_type": "date"},
                ],
            }],
        }))
        .unwrap()
    }

    fn get_result(filter: serde_json::Value) -> HttpMethodResult {
        HttpMethodResult {
            http_method: HttpMethod::Get,
            application: crm_reduced(),
            table_name: "users".into(),
            inserted_rows: None,
            filter_conditions: Some(serde_json::from_value(filter).unwrap()),
            updated_data: None,
        }
    }

    fn leaf_value(condition: &Condition, path: &[usize]) -> serde_json::Value {
        let mut current = condition;
        for index in path {
            match current {
                Condition::Group(group) => current = &group.conditions[*index],
                Condition::Leaf(_) => panic!("path descends past a leaf"),
            }
        }
        match current {
            Condition::Leaf(leaf) => leaf.value.clone(),
            Condition::Group(_) => panic!("path ends on a group"),
        }
    }

    #[test]
    fn string_float_coerces_to_number() {
        let result = get_result(json!({
            "boolean_clause": "AND",
            "conditions": [{"column": "score", "operator": ">", "value": "3.5"}],
        }));
        let validated = validate_results(vec![result], &[crm_full()]).unwrap();
        let filter = validated[0].filter_conditions.as_ref().unwrap();
        assert_eq!(leaf_value(filter, &[0]), json!(3.5));
    }

    #[test]
    fn nested_tree_coerces_at_every_depth() {
        let result = get_result(json!({
            "boolean_clause": "OR",
            "conditions": [
                {"column": "age", "operator": ">", "value": "30"},
                {
                    "boolean_clause": "AND",
                    "conditions": [
                        {"column": "score", "operator": "<", "value": "1.25"},
                        {"column": "age", "operator": "IN", "value": ["18", "21"]},
                    ],
                },
            ],
        }));
        let validated = validate_results(vec![result], &[crm_full()]).unwrap();
        let filter = validated[0].filter_conditions.as_ref().unwrap();
        assert_eq!(leaf_value(filter, &[0]), json!(30));
        assert_eq!(leaf_value(filter, &[1, 0]), json!(1.25));
        assert_eq!(leaf_value(filter, &[1, 1]), json!([18, 21]));
    }

    #[test]
    fn coercion_is_idempotent() {
        let result = get_result(json!({
            "boolean_clause": "AND",
            "conditions": [
                {"column": "age", "operator": ">", "value": "30"},
                {"column": "name", "operator": "LIKE", "value": "%smith%"},
            ],
        }));
        let once = validate_results(vec![result], &[crm_full()]).unwrap();
        let twice = validate_results(once.clone(), &[crm_full()]).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn unknown_column_is_fatal() {
        let result = get_result(json!({
            "boolean_clause": "AND",
            "conditions": [{"column": "agee", "operator": ">", "value": 30}],
        }));
        let err = validate_results(vec![result], &[crm_full()]).unwrap_err();
        assert!(format!("{err}").contains("agee"));
    }

    #[test]
    fn id_pseudo_column_follows_primary_key_kind() {
        let result = get_result(json!({
            "boolean_clause": "AND",
            "conditions": [{"column": "id", "operator": "IN", "value": ["1", "2"]}],
        }));
        let validated = validate_results(vec![result], &[crm_full()]).unwrap();
        let filter = validated[0].filter_conditions.as_ref().unwrap();
        assert_eq!(leaf_value(filter, &[0]), json!([1, 2]));
    }

    #[test]
    fn restoration_reattaches_hidden_columns() {
        let result = get_result(json!({
            "boolean_clause": "AND",
            "conditions": [{"column": "age", "operator": ">", "value": 30}],
        }));
        assert!(result.application.tables[0].column("id").is_none());

        let validated = validate_results(vec![result], &[crm_full()]).unwrap();
        let table = validated[0].application.table("users").unwrap();
        assert!(table.column("id").is_some());
        assert_eq!(table.columns.len(), 5);
    }

    #[test]
    fn inserted_rows_and_updates_coerce_elementwise() {
        let mut result = get_result(json!({
            "boolean_clause": "AND",
            "conditions": [{"column": "id", "operator": "=", "value": "7"}],
        }));
        result.http_method = HttpMethod::Put;
        result.updated_data = Some(
            serde_json::from_value(json!({"age": "44", "joined": "2024-06-01"})).unwrap(),
        );
        let validated = validate_results(vec![result], &[crm_full()]).unwrap();
        let updated = validated[0].updated_data.as_ref().unwrap();
        assert_eq!(updated["age"], json!(44));
        assert_eq!(updated["joined"], json!("2024-06-01"));
    }

    #[test]
    fn malformed_date_is_uncastable() {
        let mut result = get_result(json!({
            "boolean_clause": "AND",
            "conditions": [{"column": "id", "operator": "=", "value": 1}],
        }));
        result.http_method = HttpMethod::Put;
        result.updated_data =
            Some(serde_json::from_value(json!({"joined": "June 1st 2024"})).unwrap());
        assert!(validate_results(vec![result], &[crm_full()]).is_err());
    }
}
