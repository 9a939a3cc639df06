//! Method-specific contracts for the parameter generation stage.

use crate::repr::column_value_schema;
use serde_json::json;
use strum::IntoEnumIterator;
use tessera_core::{Column, ComparisonOperator, HttpMethod, Table};
use tessera_interface::ToolContract;

/// Function name every parameter answer must call.
pub const PARAMETERS_FUNCTION: &str = "get_http_method_parameters";

/// Field carrying the filter predicate (GET/PUT/DELETE).
pub const FILTER_CONDITIONS: &str = "filter_conditions";

/// Field carrying the rows to insert (POST).
pub const INSERTED_ROWS: &str = "inserted_rows";

/// Field carrying the column updates (PUT).
pub const UPDATED_DATA: &str = "updated_data";

/// Build the structured-output contract for one (method, table) pair.
///
/// - GET/DELETE constrain the answer to a `filter_conditions` tree over the
///   table's columns plus `"id"`.
/// - POST constrains it to `inserted_rows`, requiring every non-nullable
///   column per row.
/// - PUT requires both `filter_conditions` and `updated_data`.
///
/// The condition tree is a named recursive node under `$defs` so nesting
/// refers to one canonical definition.
///
/// # Examples
///
/// ```
/// use tessera_contract::{parameter_contract, FILTER_CONDITIONS};
/// use tessera_core::{HttpMethod, Table};
///
/// let table: Table = serde_json::from_value(serde_json::json!({
///     "name": "users",
///     "columns": [{"name": "age", "data_type": "integer"}],
/// }))
/// .unwrap();
/// let contract = parameter_contract(HttpMethod::Get, &table);
/// assert!(contract.parameters["properties"][FILTER_CONDITIONS].is_object());
/// ```
pub fn parameter_contract(http_method: HttpMethod, table: &Table) -> ToolContract {
    let contract = match http_method {
        HttpMethod::Get | HttpMethod::Delete => filter_contract(http_method, table),
        HttpMethod::Post => insert_contract(table),
        HttpMethod::Put => update_contract(table),
    };
    tracing::debug!(
        method = %http_method,
        table = %table.name,
        "Built parameter contract"
    );
    contract
}

fn filter_contract(http_method: HttpMethod, table: &Table) -> ToolContract {
    let parameters = json!({
        "type": "object",
        "properties": {
            FILTER_CONDITIONS: { "$ref": "#/$defs/filter_conditions" },
        },
        "required": [FILTER_CONDITIONS],
        "$defs": {
            FILTER_CONDITIONS: condition_tree_node(http_method, table),
        },
    });

    ToolContract::new(
        PARAMETERS_FUNCTION,
        format!(
            "Generate the parameters of the {http_method} request(s) based on the user's instruction and the table's schema"
        ),
        parameters,
    )
}

fn insert_contract(table: &Table) -> ToolContract {
    let required: Vec<&str> = table
        .columns
        .iter()
        .filter(|c| !c.nullable)
        .map(|c| c.name.as_str())
        .collect();

    let parameters = json!({
        "type": "object",
        "properties": {
            INSERTED_ROWS: {
                "type": "array",
                "description": "A list of rows to be inserted",
                "items": {
                    "type": "object",
                    "properties": row_properties(&table.columns),
                    "required": required,
                },
            },
        },
        "required": [INSERTED_ROWS],
    });

    ToolContract::new(
        PARAMETERS_FUNCTION,
        format!(
            "Generate the parameters of the {} request based on the user's instruction and the table's schema",
            HttpMethod::Post
        ),
        parameters,
    )
}

fn update_contract(table: &Table) -> ToolContract {
    let parameters = json!({
        "type": "object",
        "properties": {
            FILTER_CONDITIONS: { "$ref": "#/$defs/filter_conditions" },
            UPDATED_DATA: {
                "type": "object",
                "description": "An object containing the columns to be updated and their new values",
                "properties": row_properties(&table.columns),
            },
        },
        "required": [FILTER_CONDITIONS, UPDATED_DATA],
        "$defs": {
            FILTER_CONDITIONS: condition_tree_node(HttpMethod::Put, table),
        },
    });

    ToolContract::new(
        PARAMETERS_FUNCTION,
        format!(
            "Generate the parameters of the {} request(s) based on the user's instruction and the table's schema",
            HttpMethod::Put
        ),
        parameters,
    )
}

/// The named recursive condition-tree node placed under `$defs`.
fn condition_tree_node(http_method: HttpMethod, table: &Table) -> serde_json::Value {
    let verb = match http_method {
        HttpMethod::Get => "fetch",
        HttpMethod::Put => "update",
        HttpMethod::Delete => "delete",
        HttpMethod::Post => "insert",
    };

    json!({
        "type": "object",
        "description": format!(
            "A specification that filters for the rows to {verb} in the {http_method} request"
        ),
        "properties": {
            "boolean_clause": {
                "type": "string",
                "enum": ["AND", "OR"],
                "description": "The boolean clause to apply to the conditions",
            },
            "conditions": {
                "type": "array",
                "items": {
                    "oneOf": [
                        condition_leaf_schema(http_method, table),
                        { "$ref": "#/$defs/filter_conditions" },
                    ],
                },
            },
        },
        "required": ["boolean_clause", "conditions"],
    })
}

fn condition_leaf_schema(http_method: HttpMethod, table: &Table) -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "column": {
                "type": "string",
                "enum": filterable_columns(table),
                "description": "The name of the column to filter on",
            },
            "operator": {
                "type": "string",
                "enum": operator_names(http_method),
                "description": "The comparison operator",
            },
            "value": scalar_or_array_schema(),
        },
        "required": ["column", "operator", "value"],
    })
}

/// Column names the filter may reference: the table's own plus `"id"`,
/// which is filterable even when not declared.
fn filterable_columns(table: &Table) -> Vec<String> {
    let mut names: Vec<String> = table.columns.iter().map(|c| c.name.clone()).collect();
    if !names.iter().any(|n| n == "id") {
        names.push("id".to_string());
    }
    names
}

/// Operators offered for a method. GET additionally offers `IS NOT` for
/// null-excluding reads.
fn operator_names(http_method: HttpMethod) -> Vec<&'static str> {
    ComparisonOperator::iter()
        .filter(|op| *op != ComparisonOperator::IsNot || http_method == HttpMethod::Get)
        .map(|op| op.as_str())
        .collect()
}

fn scalar_or_array_schema() -> serde_json::Value {
    let scalars = json!([
        { "type": "string" },
        { "type": "number" },
        { "type": "boolean" },
        { "type": "null" },
    ]);
    let mut one_of = scalars.as_array().cloned().unwrap_or_default();
    one_of.push(json!({
        "type": "array",
        "items": { "oneOf": scalars },
    }));
    json!({
        "oneOf": one_of,
        "description": "The value to compare against. Use array for IN operator. Make sure the type of the value matches the specified column's data type.",
    })
}

fn row_properties(columns: &[Column]) -> serde_json::Value {
    let mut properties = serde_json::Map::new();
    for column in columns {
        properties.insert(column.name.clone(), column_value_schema(column));
    }
    serde_json::Value::Object(properties)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn users_table() -> Table {
        serde_json::from_value(json!({
            "name": "users",
            "primary_key": "auto_increment",
            "columns": [
                {"name": "name", "data_type": "string"},
                {"name": "age", "data_type": "integer"},
                {"name": "email", "data_type": "string", "nullable": true},
            ],
        }))
        .unwrap()
    }

    fn leaf_columns(contract: &ToolContract) -> &serde_json::Value {
        &contract.parameters["$defs"][FILTER_CONDITIONS]["properties"]["conditions"]["items"]
            ["oneOf"][0]["properties"]["column"]["enum"]
    }

    #[test]
    fn get_and_delete_always_offer_id() {
        for method in [HttpMethod::Get, HttpMethod::Delete] {
            let contract = parameter_contract(method, &users_table());
            let columns = leaf_columns(&contract);
            assert_eq!(*columns, json!(["name", "age", "email", "id"]));
        }
    }

    #[test]
    fn declared_id_is_not_duplicated() {
        let table: Table = serde_json::from_value(json!({
            "name": "events",
            "columns": [{"name": "id", "data_type": "integer"}],
        }))
        .unwrap();
        let contract = parameter_contract(HttpMethod::Get, &table);
        assert_eq!(*leaf_columns(&contract), json!(["id"]));
    }

    #[test]
    fn post_requires_exactly_non_nullable_columns() {
        let contract = parameter_contract(HttpMethod::Post, &users_table());
        let required =
            &contract.parameters["properties"][INSERTED_ROWS]["items"]["required"];
        assert_eq!(*required, json!(["name", "age"]));
    }

    #[test]
    fn put_carries_filter_and_updates() {
        let contract = parameter_contract(HttpMethod::Put, &users_table());
        let properties = &contract.parameters["properties"];
        assert!(properties[FILTER_CONDITIONS].is_object());
        assert!(properties[UPDATED_DATA].is_object());
        assert_eq!(
            contract.parameters["required"],
            json!([FILTER_CONDITIONS, UPDATED_DATA])
        );
    }

    #[test]
    fn condition_tree_recurses_through_named_node() {
        let contract = parameter_contract(HttpMethod::Delete, &users_table());
        let nested_ref = &contract.parameters["$defs"][FILTER_CONDITIONS]["properties"]
            ["conditions"]["items"]["oneOf"][1]["$ref"];
        assert_eq!(*nested_ref, json!("#/$defs/filter_conditions"));
    }

    #[test]
    fn is_not_is_get_only() {
        let get = parameter_contract(HttpMethod::Get, &users_table());
        let get_ops = &get.parameters["$defs"][FILTER_CONDITIONS]["properties"]["conditions"]
            ["items"]["oneOf"][0]["properties"]["operator"]["enum"];
        assert!(get_ops.as_array().unwrap().contains(&json!("IS NOT")));

        let delete = parameter_contract(HttpMethod::Delete, &users_table());
        let delete_ops = &delete.parameters["$defs"][FILTER_CONDITIONS]["properties"]
            ["conditions"]["items"]["oneOf"][0]["properties"]["operator"]["enum"];
        assert!(!delete_ops.as_array().unwrap().contains(&json!("IS NOT")));
    }
}
