//! Chat endpoint

use super::AppState;
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use orchestrator_application::{HandleQuestionError, SERVER_ERROR_MESSAGE};
use orchestrator_domain::ChatResponse;
use serde_json::Value;
use std::any::Any;
use tracing::error;

/// HTTP status for a failed request
pub fn status_for(error: &HandleQuestionError) -> StatusCode {
    if error.is_validation() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// `POST /api/chat` with `{"question": "..."}`
///
/// The body is read and parsed here rather than through the `Json`
/// extractor so that unreadable, oversized or malformed bodies still get
/// the standard `success=false` shape.
pub(super) async fn chat(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> (StatusCode, Json<ChatResponse>) {
    let request = match parse_body(body) {
        Ok(value) => value,
        Err(err) => {
            error!("API error: {}", err);
            return (status_for(&err), Json(err.to_response()));
        }
    };

    match state.use_case.try_handle(request.get("question")).await {
        Ok(response) => (StatusCode::OK, Json(response)),
        Err(e) => (status_for(&e), Json(e.to_response())),
    }
}

/// Read the request body as a JSON value.
///
/// A `null` body has no fields to look up and is treated as a server
/// fault, like an unparseable one.
fn parse_body(body: Result<Bytes, BytesRejection>) -> Result<Value, HandleQuestionError> {
    let body = body.map_err(|rejection| {
        HandleQuestionError::Unexpected(format!("unreadable request body: {}", rejection))
    })?;

    match serde_json::from_slice(&body) {
        Ok(Value::Null) => Err(HandleQuestionError::Unexpected(
            "request body is null".to_string(),
        )),
        Ok(value) => Ok(value),
        Err(e) => Err(HandleQuestionError::Unexpected(format!(
            "invalid request body: {}",
            e
        ))),
    }
}

/// Response for a handler that panicked
pub(super) fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!("Request handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ChatResponse::failure(SERVER_ERROR_MESSAGE)),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use crate::api::{AppState, router};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use orchestrator_application::{
        DELEGATE_FAILURE_MESSAGE, DelegateError, DelegateInvoker, DelegatedStrategy,
        ExecutionStrategy, HandleQuestionUseCase, SERVER_ERROR_MESSAGE, SimulatedStrategy,
        StrategyError, VALIDATION_MESSAGE,
    };
    use orchestrator_domain::{ChatResponse, ExecutionMode, Question};
    use serde_json::{Value, json};
    use std::sync::Arc;
    use std::time::Duration;
    use tower::ServiceExt;

    struct FixedInvoker(fn() -> Result<Value, DelegateError>);

    #[async_trait]
    impl DelegateInvoker for FixedInvoker {
        async fn invoke(&self, _question: &Question) -> Result<Value, DelegateError> {
            (self.0)()
        }
    }

    struct PanickingStrategy;

    #[async_trait]
    impl ExecutionStrategy for PanickingStrategy {
        fn mode(&self) -> ExecutionMode {
            ExecutionMode::Delegated
        }

        async fn execute(&self, _question: &Question) -> Result<ChatResponse, StrategyError> {
            panic!("strategy blew up");
        }
    }

    fn app(strategy: Arc<dyn ExecutionStrategy>) -> axum::Router {
        router(AppState::new(Arc::new(HandleQuestionUseCase::new(strategy))))
    }

    fn simulated_app() -> axum::Router {
        let strategy = SimulatedStrategy::new().with_delays(&[Duration::from_millis(1); 3]);
        app(Arc::new(strategy))
    }

    fn delegated_app(result: fn() -> Result<Value, DelegateError>) -> axum::Router {
        app(Arc::new(DelegatedStrategy::new(Arc::new(FixedInvoker(result)))))
    }

    async fn post_chat(app: axum::Router, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/api/chat")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_simulated_answer() {
        let (status, body) = post_chat(simulated_app(), r#"{"question":"Open a store?"}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["question"], json!("Open a store?"));
        let responses = body["responses"].as_object().unwrap();
        assert_eq!(responses.len(), 3);
        for id in ["first-pass-research", "strategy-analysis", "execution-planning"] {
            assert_eq!(responses[id]["success"], json!(true));
            assert!(!responses[id]["content"].as_str().unwrap().is_empty());
        }
        assert!(!body["synthesis"].as_str().unwrap().is_empty());
        assert_eq!(body["metadata"]["mode"], json!("simulated"));
        assert!(body["metadata"]["total_duration"].is_number());
    }

    #[tokio::test]
    async fn test_validation_is_bad_request() {
        for body in [r#"{}"#, r#"{"question":""}"#, r#"{"question":5}"#, r#"[1,2]"#] {
            let (status, json) = post_chat(simulated_app(), body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body {body}");
            assert_eq!(json, json!({"success": false, "error": VALIDATION_MESSAGE}));
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_server_error() {
        let (status, json) = post_chat(simulated_app(), "{not json").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, json!({"success": false, "error": SERVER_ERROR_MESSAGE}));
    }

    #[tokio::test]
    async fn test_null_body_is_server_error() {
        let (status, json) = post_chat(simulated_app(), "null").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, json!({"success": false, "error": SERVER_ERROR_MESSAGE}));
    }

    #[tokio::test]
    async fn test_oversized_body_keeps_error_shape() {
        let body = format!(r#"{{"question":"{}"}}"#, "a".repeat(3_000_000));
        let (status, json) = post_chat(simulated_app(), &body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, json!({"success": false, "error": SERVER_ERROR_MESSAGE}));
    }

    #[tokio::test]
    async fn test_panic_becomes_server_error() {
        let (status, json) =
            post_chat(app(Arc::new(PanickingStrategy)), r#"{"question":"q"}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, json!({"success": false, "error": SERVER_ERROR_MESSAGE}));
    }

    #[tokio::test]
    async fn test_delegated_document_passed_through() {
        let (status, json) =
            post_chat(delegated_app(|| Ok(json!({"x": 1}))), r#"{"question":"q"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({"x": 1}));
    }

    #[tokio::test]
    async fn test_delegate_failure_hides_detail() {
        let (status, json) = post_chat(
            delegated_app(|| Err(DelegateError::Failure("secret stack trace".to_string()))),
            r#"{"question":"q"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json,
            json!({"success": false, "error": DELEGATE_FAILURE_MESSAGE})
        );
    }

    #[tokio::test]
    async fn test_health_reports_mode() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = simulated_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["status"], json!("healthy"));
        assert_eq!(json["mode"], json!("simulated"));
    }
}
