use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use tessera_core::{
    ApplicationContent, ChatMessage, Grouping, HttpMethod, InferenceResponse, Table,
};
use tessera_error::{InferenceError, InferenceErrorKind, TesseraResult};
use tessera_interface::ReasoningEngine;
use tessera_pipeline::Pipeline;
use tessera_server::create_router;
use tower::ServiceExt;

/// Canned engine for driving the route without a network.
#[derive(Clone)]
struct MockEngine {
    groupings: Vec<Grouping>,
    answer: Option<serde_json::Value>,
}

#[async_trait]
impl ReasoningEngine for MockEngine {
    async fn select(
        &self,
        _applications: &[ApplicationContent],
        _instruction: &str,
        _history: &[ChatMessage],
    ) -> TesseraResult<Vec<Grouping>> {
        Ok(self.groupings.clone())
    }

    async fn generate_parameters(
        &self,
        _http_method: HttpMethod,
        _application: &ApplicationContent,
        _table: &Table,
        _instruction: &str,
        _history: &[ChatMessage],
    ) -> TesseraResult<serde_json::Value> {
        self.answer.clone().ok_or_else(|| {
            InferenceError::new(InferenceErrorKind::Api("scripted failure".into())).into()
        })
    }

    async fn clarify(
        &self,
        _applications: &[ApplicationContent],
        _instruction: &str,
        _history: &[ChatMessage],
    ) -> TesseraResult<String> {
        Ok("Which application do you mean?".to_string())
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}

fn payload() -> serde_json::Value {
    json!({
        "applications": [{
            "name": "crm",
            "tables": [{
                "name": "users",
                "primary_key": "auto_increment",
                "columns": [
                    {"name": "id", "data_type": "integer", "primary_key": "auto_increment"},
                    {"name": "age", "data_type": "integer"},
                ],
            }],
        }],
        "message": "show all users older than 30",
        "chat_history": [],
    })
}

fn post_inference(body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/inference/use")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn successful_request_returns_200_with_results() {
    let engine = MockEngine {
        groupings: vec![Grouping {
            task: "fetch users older than 30".into(),
            application_name: "crm".into(),
            table_name: "users".into(),
            http_method: HttpMethod::Get,
        }],
        answer: Some(json!({
            "filter_conditions": {
                "boolean_clause": "AND",
                "conditions": [{"column": "age", "operator": ">", "value": "30"}],
            },
        })),
    };
    let app = create_router(Pipeline::new(engine));

    let response = app.oneshot(post_inference(&payload())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: InferenceResponse = serde_json::from_value(body_json(response).await).unwrap();
    assert!(body.clarification.is_none());
    assert_eq!(body.response.len(), 1);
    assert_eq!(body.response[0].table_name, "users");
}

#[tokio::test]
async fn empty_selection_returns_200_with_clarification() {
    let engine = MockEngine {
        groupings: Vec::new(),
        answer: None,
    };
    let app = create_router(Pipeline::new(engine));

    let response = app.oneshot(post_inference(&payload())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["clarification"], json!("Which application do you mean?"));
    assert_eq!(body["response"], json!([]));
}

#[tokio::test]
async fn engine_failure_returns_500_with_detail() {
    let engine = MockEngine {
        groupings: vec![Grouping {
            task: "fetch users".into(),
            application_name: "crm".into(),
            table_name: "users".into(),
            http_method: HttpMethod::Get,
        }],
        answer: None,
    };
    let app = create_router(Pipeline::new(engine));

    let response = app.oneshot(post_inference(&payload())).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert!(body["detail"].as_str().unwrap().contains("scripted failure"));
}

#[tokio::test]
async fn health_endpoint_answers_ok() {
    let engine = MockEngine {
        groupings: Vec::new(),
        answer: None,
    };
    let app = create_router(Pipeline::new(engine));

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
