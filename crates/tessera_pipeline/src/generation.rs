//! Parameter generation stage: one concurrent engine call per grouping.

use tessera_contract::{FILTER_CONDITIONS, INSERTED_ROWS, UPDATED_DATA};
use tessera_core::{
    ApplicationContent, ChatMessage, Condition, Grouping, HttpMethod, HttpMethodResult, Row,
};
use tessera_error::{
    InferenceError, InferenceErrorKind, NotFoundError, NotFoundErrorKind, TesseraResult,
};
use tessera_interface::ReasoningEngine;
use tracing::instrument;

/// Fill the method-specific contract for every grouping.
///
/// All groupings are dispatched concurrently; results come back in the
/// original grouping order regardless of completion order. The join is
/// all-or-nothing: the first failure (in grouping order) aborts the whole
/// batch and no partial results are returned.
///
/// # Errors
///
/// - [`NotFoundError`](tessera_error::NotFoundError) when a grouping names
///   an application or table absent from the supplied schemas.
/// - [`InferenceError`](tessera_error::InferenceError) on engine failure or
///   an answer that misses its contract.
#[instrument(skip_all, fields(groupings = groupings.len()))]
pub async fn generate_parameters<E: ReasoningEngine>(
    engine: &E,
    applications: &[ApplicationContent],
    instruction: &str,
    history: &[ChatMessage],
    groupings: &[Grouping],
) -> TesseraResult<Vec<HttpMethodResult>> {
    let pending = groupings
        .iter()
        .map(|grouping| process_grouping(engine, applications, instruction, history, grouping));

    // join_all settles every call and preserves input order; scanning the
    // settled list front to back surfaces the first failure deterministically.
    let settled = futures::future::join_all(pending).await;

    let mut results = Vec::with_capacity(settled.len());
    for outcome in settled {
        results.push(outcome?);
    }
    tracing::info!(results = results.len(), "Parameter generation complete");
    Ok(results)
}

async fn process_grouping<E: ReasoningEngine>(
    engine: &E,
    applications: &[ApplicationContent],
    instruction: &str,
    history: &[ChatMessage],
    grouping: &Grouping,
) -> TesseraResult<HttpMethodResult> {
    let application = applications
        .iter()
        .find(|a| a.name == grouping.application_name)
        .ok_or_else(|| {
            NotFoundError::new(NotFoundErrorKind::Application(
                grouping.application_name.clone(),
            ))
        })?;
    let table = application.table(&grouping.table_name).ok_or_else(|| {
        NotFoundError::new(NotFoundErrorKind::Table {
            application: application.name.clone(),
            table: grouping.table_name.clone(),
        })
    })?;

    tracing::debug!(
        application = %application.name,
        table = %table.name,
        method = %grouping.http_method,
        task = %grouping.task,
        "Generating parameters for grouping"
    );

    let raw = engine
        .generate_parameters(grouping.http_method, application, table, instruction, history)
        .await?;

    shape_answer(grouping.http_method, application, &table.name, raw)
}

/// Package one raw engine answer into a self-contained result.
///
/// The attached application is the reduced snapshot generation ran against;
/// the validation stage swaps it for the caller's full schema afterwards.
fn shape_answer(
    http_method: HttpMethod,
    application: &ApplicationContent,
    table_name: &str,
    raw: serde_json::Value,
) -> TesseraResult<HttpMethodResult> {
    let mut result = HttpMethodResult {
        http_method,
        application: application.clone(),
        table_name: table_name.to_string(),
        inserted_rows: None,
        filter_conditions: None,
        updated_data: None,
    };

    match http_method {
        HttpMethod::Get | HttpMethod::Delete => {
            result.filter_conditions = Some(extract_field::<Condition>(&raw, FILTER_CONDITIONS)?);
        }
        HttpMethod::Post => {
            result.inserted_rows = Some(extract_field::<Vec<Row>>(&raw, INSERTED_ROWS)?);
        }
        HttpMethod::Put => {
            result.filter_conditions = Some(extract_field::<Condition>(&raw, FILTER_CONDITIONS)?);
            result.updated_data = Some(extract_field::<Row>(&raw, UPDATED_DATA)?);
        }
    }
    Ok(result)
}

fn extract_field<T: serde::de::DeserializeOwned>(
    raw: &serde_json::Value,
    field: &str,
) -> TesseraResult<T> {
    let value = raw.get(field).cloned().ok_or_else(|| {
        InferenceError::new(InferenceErrorKind::Contract(format!(
            "answer is missing required field '{field}'"
        )))
    })?;
    serde_json::from_value(value).map_err(|e| {
        InferenceError::new(InferenceErrorKind::Contract(format!(
            "field '{field}' has the wrong shape: {e}"
        )))
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn crm() -> ApplicationContent {
        serde_json::from_value(json!({
            "name": "crm",
            "tables": [{
                "name": "users",
                "columns": [{"name": "age", "data_type": "integer"}],
            }],
        }))
        .unwrap()
    }

    #[test]
    fn get_answer_shapes_into_filter_only() {
        let raw = json!({
            "filter_conditions": {
                "boolean_clause": "AND",
                "conditions": [{"column": "age", "operator": ">", "value": "30"}],
            },
        });
        let result = shape_answer(HttpMethod::Get, &crm(), "users", raw).unwrap();
        assert!(result.filter_conditions.is_some());
        assert!(result.inserted_rows.is_none());
        assert!(result.updated_data.is_none());
    }

    #[test]
    fn post_answer_supports_multiple_rows() {
        let raw = json!({
            "inserted_rows": [{"age": 30}, {"age": 41}],
        });
        let result = shape_answer(HttpMethod::Post, &crm(), "users", raw).unwrap();
        assert_eq!(result.inserted_rows.unwrap().len(), 2);
    }

    #[test]
    fn put_answer_requires_both_fields() {
        let raw = json!({
            "filter_conditions": {
                "boolean_clause": "AND",
                "conditions": [{"column": "age", "operator": "=", "value": 30}],
            },
        });
        let err = shape_answer(HttpMethod::Put, &crm(), "users", raw).unwrap_err();
        assert!(format!("{err}").contains("updated_data"));
    }

    #[test]
    fn malformed_tree_is_a_contract_violation() {
        let raw = json!({"filter_conditions": {"boolean_clause": "XOR", "conditions": []}});
        let err = shape_answer(HttpMethod::Get, &crm(), "users", raw).unwrap_err();
        assert!(format!("{err}").contains("filter_conditions"));
    }
}
