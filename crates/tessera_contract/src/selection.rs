//! Contract for the selection stage.

use serde_json::json;
use strum::IntoEnumIterator;
use tessera_core::{ApplicationContent, HttpMethod};
use tessera_interface::ToolContract;

/// Function name the selection answer must call.
pub const SELECT_FUNCTION: &str = "select";

/// Field carrying the grouping list in the selection answer.
pub const RELEVANT_GROUPINGS: &str = "relevant_groupings";

/// Build the structured-output contract of the selection call.
///
/// `application_name` is constrained to the supplied application names and
/// `http_method` to the four CRUD methods. `table_name` is left as free
/// text: table sets differ per application, and a flat enum across all of
/// them would let the engine pair a table with the wrong application.
///
/// # Examples
///
/// ```
/// use tessera_contract::selection_contract;
/// use tessera_core::ApplicationContent;
///
/// let apps: Vec<ApplicationContent> = vec![serde_json::from_value(serde_json::json!({
///     "name": "crm",
///     "tables": [],
/// }))
/// .unwrap()];
/// let contract = selection_contract(&apps);
/// assert_eq!(contract.name, "select");
/// ```
pub fn selection_contract(applications: &[ApplicationContent]) -> ToolContract {
    let application_names: Vec<&str> = applications.iter().map(|a| a.name.as_str()).collect();
    let methods: Vec<String> = HttpMethod::iter().map(|m| m.to_string()).collect();

    let parameters = json!({
        "type": "object",
        "properties": {
            RELEVANT_GROUPINGS: {
                "type": "array",
                "description": "All the relevant (task, application, table name, HTTP method) groupings.",
                "items": {
                    "type": "object",
                    "properties": {
                        "task": {
                            "type": "string",
                            "description": "This task represents a single step in the entire user instruction.",
                        },
                        "application_name": {
                            "type": "string",
                            "enum": application_names,
                            "description": "The name of the application to use the HTTP method on.",
                        },
                        "table_name": {
                            "type": "string",
                            "description": "The table name of the application to use the HTTP method on.",
                        },
                        "http_method": {
                            "type": "string",
                            "enum": methods,
                            "description": "The HTTP method to use on the chosen application's table.",
                        },
                    },
                    "required": ["task", "application_name", "table_name", "http_method"],
                },
            },
        },
        "required": [RELEVANT_GROUPINGS],
    });

    tracing::debug!(applications = applications.len(), "Built selection contract");

    ToolContract::new(
        SELECT_FUNCTION,
        "Select the relevant (task, application, table name, HTTP method) groupings that are necessary to perform the user's instruction.",
        parameters,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(name: &str) -> ApplicationContent {
        ApplicationContent {
            name: name.into(),
            tables: Vec::new(),
        }
    }

    #[test]
    fn application_names_are_constrained() {
        let contract = selection_contract(&[app("crm"), app("inventory")]);
        let names = &contract.parameters["properties"][RELEVANT_GROUPINGS]["items"]["properties"]
            ["application_name"]["enum"];
        assert_eq!(*names, serde_json::json!(["crm", "inventory"]));
    }

    #[test]
    fn table_name_stays_free_text() {
        let contract = selection_contract(&[app("crm")]);
        let table_name = &contract.parameters["properties"][RELEVANT_GROUPINGS]["items"]
            ["properties"]["table_name"];
        assert!(table_name.get("enum").is_none());
    }

    #[test]
    fn all_four_methods_offered() {
        let contract = selection_contract(&[app("crm")]);
        let methods = &contract.parameters["properties"][RELEVANT_GROUPINGS]["items"]["properties"]
            ["http_method"]["enum"];
        assert_eq!(*methods, serde_json::json!(["GET", "POST", "PUT", "DELETE"]));
    }
}
