//! Prompt text for each pipeline stage.
//!
//! The literal wording is an opaque contract with the reasoning engine; the
//! structured-output contracts carry the real constraints. Schemas and
//! history are serialized into the user message as JSON.

use crate::request::Message;
use tessera_core::{ApplicationContent, ChatMessage, HttpMethod, Table};

/// System and user messages for the selection call.
pub fn selection_messages(
    applications: &[ApplicationContent],
    instruction: &str,
    history: &[ChatMessage],
) -> Vec<Message> {
    let system = "Your task is to interpret the user's natural language instruction and select the relevant (task, application, table name, HTTP method) groupings so that an ORM can use your output to perform specific actions on the databases of applications.\n\nFollow these guidelines:\n1. Filter conditions belong to the same task; never split an instruction like \"show me all the users named John or older than 12\" into several tasks.\n2. The user's instruction may not be self-contained; use the chat history to infer what it refers to, but make every task description self-contained. Rephrase if necessary.\n3. A task may involve several applications; decide which subset it touches.\n4. For each application, determine the subset of tables the task is related to.\n5. For each table, determine the appropriate HTTP method for the task.\n6. The chat history is context only; generate groupings for the current instruction alone.";

    vec![
        Message::system(system),
        Message::user(format!(
            "### Here are the applications that might be relevant to the user's instruction:\n\n{}\n\n### Here is the chat history:\n\n{}\n\n### Here is the user's current instruction:\n\n{instruction}",
            render(applications),
            render(history),
        )),
    ]
}

/// System and user messages for one parameter-generation call.
pub fn parameter_messages(
    http_method: HttpMethod,
    application_name: &str,
    table: &Table,
    instruction: &str,
    history: &[ChatMessage],
) -> Vec<Message> {
    let guidance = match http_method {
        HttpMethod::Get | HttpMethod::Delete => {
            "1. You might have to provide some filter conditions based on the table's schema and the user's instruction.\n2. Ensure that every filter value follows the data type declared for its column."
        }
        HttpMethod::Post => {
            "1. You must provide the rows to insert based on the table's schema.\n2. Ensure that every column value follows the data type declared for its column.\n3. When the instruction does not state a value, use the column's declared default."
        }
        HttpMethod::Put => {
            "1. You might have to provide some filter conditions based on the table's schema and the user's instruction.\n2. You must provide the column values to update.\n3. Ensure that every value follows the data type declared for its column."
        }
    };
    let system = format!(
        "Your task is to interpret a user's natural language instruction and supply the necessary parameters for an ORM to initiate a {http_method} request to the specified table in the application.\n\nFollow these guidelines:\n{guidance}"
    );

    vec![
        Message::system(system),
        Message::user(format!(
            "### Name of application: {application_name}\n\n### Target table to generate the {http_method} request for:\n\n{}\n\n### Here is the chat history:\n\n{}\n\n### Here is the current user's instruction:\n\n{instruction}",
            render(&table),
            render(history),
        )),
    ]
}

/// System and user messages for the clarification call.
pub fn clarification_messages(
    applications: &[ApplicationContent],
    instruction: &str,
    history: &[ChatMessage],
) -> Vec<Message> {
    let system = "Your task is to clarify the user's natural language instruction so that an AI agent can use your output to perform specific actions on the databases of applications. Currently the instruction is not clear enough to decide which applications, tables, and HTTP methods to use. Ask for the information that is missing.";

    vec![
        Message::system(system),
        Message::user(format!(
            "### Here are the applications that might be relevant to the user's instruction:\n\n{}\n\n### Here is the chat history:\n\n{}\n\n### Here is the user's current instruction:\n\n{instruction}",
            render(applications),
            render(history),
        )),
    ]
}

fn render<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn selection_messages_carry_schema_and_instruction() {
        let apps: Vec<ApplicationContent> = vec![
            serde_json::from_value(json!({
                "name": "crm",
                "tables": [{"name": "users", "columns": [{"name": "age", "data_type": "integer"}]}],
            }))
            .unwrap(),
        ];
        let messages = selection_messages(&apps, "show all users", &[]);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert!(messages[1].content.contains("\"crm\""));
        assert!(messages[1].content.contains("show all users"));
    }

    #[test]
    fn parameter_guidance_varies_by_method() {
        let table: Table = serde_json::from_value(json!({
            "name": "users",
            "columns": [{"name": "age", "data_type": "integer"}],
        }))
        .unwrap();
        let post = parameter_messages(HttpMethod::Post, "crm", &table, "add a user", &[]);
        assert!(post[0].content.contains("rows to insert"));
        let get = parameter_messages(HttpMethod::Get, "crm", &table, "list users", &[]);
        assert!(get[0].content.contains("filter conditions"));
    }
}
