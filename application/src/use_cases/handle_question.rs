//! Handle Question use case
//!
//! The single entry point for a caller's question. Validates input, runs
//! the strategy chosen at startup, and collapses every failure into a
//! fixed user-facing message.

use crate::ports::delegate_invoker::DelegateError;
use crate::ports::execution_strategy::{ExecutionStrategy, StrategyError};
use orchestrator_domain::{ChatResponse, DomainError, ExecutionMode, Question, truncate};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tokio::time::Instant;
use tracing::{error, info, warn};

/// Shown when the question is missing, empty or not a string
pub const VALIDATION_MESSAGE: &str = "Please enter a question.";

/// Shown for any delegate failure; internal detail stays in the logs
pub const DELEGATE_FAILURE_MESSAGE: &str =
    "An error occurred while processing with the AI agents. Please check the API keys.";

/// Shown for anything else
pub const SERVER_ERROR_MESSAGE: &str = "A server error occurred.";

/// Errors that can occur while handling a question.
///
/// All variants collapse to `success=false` plus a fixed message for the
/// caller; they stay distinct for logging and HTTP status mapping.
#[derive(Error, Debug)]
pub enum HandleQuestionError {
    #[error("Validation failed: {0}")]
    Validation(#[from] DomainError),

    #[error("Delegate error: {0}")]
    Delegate(#[from] DelegateError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl HandleQuestionError {
    /// The fixed message returned to the caller for this kind of failure
    pub fn user_message(&self) -> &'static str {
        match self {
            HandleQuestionError::Validation(_) => VALIDATION_MESSAGE,
            HandleQuestionError::Delegate(_) => DELEGATE_FAILURE_MESSAGE,
            HandleQuestionError::Unexpected(_) => SERVER_ERROR_MESSAGE,
        }
    }

    /// Whether the caller sent a bad question (as opposed to a server fault)
    pub fn is_validation(&self) -> bool {
        matches!(self, HandleQuestionError::Validation(e) if e.is_validation())
    }

    /// The caller-facing response for this failure
    pub fn to_response(&self) -> ChatResponse {
        ChatResponse::failure(self.user_message())
    }
}

impl From<StrategyError> for HandleQuestionError {
    fn from(e: StrategyError) -> Self {
        match e {
            StrategyError::Delegate(d) => HandleQuestionError::Delegate(d),
            StrategyError::TaskFailed(msg) => HandleQuestionError::Unexpected(msg),
        }
    }
}

/// Use case for answering one question
pub struct HandleQuestionUseCase {
    strategy: Arc<dyn ExecutionStrategy>,
}

impl HandleQuestionUseCase {
    pub fn new(strategy: Arc<dyn ExecutionStrategy>) -> Self {
        Self { strategy }
    }

    /// The mode fixed at construction
    pub fn mode(&self) -> ExecutionMode {
        self.strategy.mode()
    }

    /// Answer the question, always producing a response.
    pub async fn handle(&self, question: Option<&Value>) -> ChatResponse {
        match self.try_handle(question).await {
            Ok(response) => response,
            Err(e) => e.to_response(),
        }
    }

    /// Answer the question, keeping the failure kind.
    ///
    /// Validation happens before the strategy is touched. Failures are
    /// logged here with full detail.
    pub async fn try_handle(
        &self,
        question: Option<&Value>,
    ) -> Result<ChatResponse, HandleQuestionError> {
        let question = match Question::from_json(question) {
            Ok(q) => q,
            Err(e) => {
                warn!("Rejected question: {}", e);
                return Err(e.into());
            }
        };

        let mode = self.strategy.mode();
        info!(mode = %mode, "Question received: {}", truncate(question.content(), 100));
        let start = Instant::now();

        match self.strategy.execute(&question).await {
            Ok(response) => {
                info!(
                    mode = %mode,
                    "Question answered in {:.1}s",
                    start.elapsed().as_secs_f64()
                );
                Ok(response)
            }
            Err(e) => {
                let e = HandleQuestionError::from(e);
                match &e {
                    HandleQuestionError::Delegate(d) => {
                        error!(kind = d.kind(), "Delegate orchestrator error: {}", d)
                    }
                    other => error!("Orchestration error: {}", other),
                }
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use orchestrator_domain::{AgentResult, AgentRole, OrchestrationResult};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    enum Behavior {
        Succeed,
        Delegate(fn() -> DelegateError),
        Panic,
    }

    struct CountingStrategy {
        calls: AtomicUsize,
        behavior: Behavior,
    }

    impl CountingStrategy {
        fn new(behavior: Behavior) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                behavior,
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ExecutionStrategy for CountingStrategy {
        fn mode(&self) -> ExecutionMode {
            ExecutionMode::Delegated
        }

        async fn execute(&self, question: &Question) -> Result<ChatResponse, StrategyError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.behavior {
                Behavior::Succeed => Ok(ChatResponse::Orchestrated(OrchestrationResult::new(
                    question.content(),
                    vec![AgentResult::success(AgentRole::FirstPassResearch, "ok")],
                    "done",
                    ExecutionMode::Delegated,
                    Duration::ZERO,
                ))),
                Behavior::Delegate(make) => Err(make().into()),
                Behavior::Panic => Err(StrategyError::TaskFailed("task panicked".to_string())),
            }
        }
    }

    fn failure_message(response: &ChatResponse) -> &str {
        assert!(!response.is_success());
        response.error_message().unwrap()
    }

    #[tokio::test]
    async fn test_invalid_questions_never_reach_strategy() {
        let strategy = CountingStrategy::new(Behavior::Succeed);
        let use_case = HandleQuestionUseCase::new(strategy.clone());

        let inputs = [
            None,
            Some(json!(null)),
            Some(json!("")),
            Some(json!("   ")),
            Some(json!(7)),
            Some(json!(false)),
            Some(json!(["q"])),
            Some(json!({"text": "q"})),
        ];
        for input in &inputs {
            let response = use_case.handle(input.as_ref()).await;
            assert_eq!(failure_message(&response), VALIDATION_MESSAGE);
        }
        assert_eq!(strategy.calls(), 0);
    }

    #[tokio::test]
    async fn test_validation_error_kind_preserved() {
        let use_case = HandleQuestionUseCase::new(CountingStrategy::new(Behavior::Succeed));
        let err = use_case.try_handle(Some(&json!(1))).await.unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_only_question_errors_are_validation() {
        let bad_mode = HandleQuestionError::Validation(DomainError::InvalidMode("x".to_string()));
        assert!(!bad_mode.is_validation());
        assert_eq!(
            HandleQuestionError::Unexpected("x".to_string()).to_response().error_message(),
            Some(SERVER_ERROR_MESSAGE)
        );
    }

    #[tokio::test]
    async fn test_valid_question_runs_strategy_once() {
        let strategy = CountingStrategy::new(Behavior::Succeed);
        let use_case = HandleQuestionUseCase::new(strategy.clone());

        let response = use_case.handle(Some(&json!("Where to start?"))).await;
        assert!(response.is_success());
        assert_eq!(strategy.calls(), 1);
    }

    #[tokio::test]
    async fn test_delegate_errors_collapse_to_generic_message() {
        let makers: [fn() -> DelegateError; 4] = [
            || DelegateError::Failure("Traceback: KeyError 'OPENAI_API_KEY'".to_string()),
            || DelegateError::Parse {
                error: "expected value".to_string(),
                raw: "not json".to_string(),
            },
            || DelegateError::Timeout(Duration::from_secs(60)),
            || DelegateError::Spawn("No such file or directory".to_string()),
        ];

        for make in makers {
            let use_case =
                HandleQuestionUseCase::new(CountingStrategy::new(Behavior::Delegate(make)));
            let response = use_case.handle(Some(&json!("q"))).await;
            let message = failure_message(&response);
            assert_eq!(message, DELEGATE_FAILURE_MESSAGE);
            assert!(!message.contains("Traceback"));
        }
    }

    #[tokio::test]
    async fn test_task_failure_is_server_error() {
        let use_case = HandleQuestionUseCase::new(CountingStrategy::new(Behavior::Panic));
        let err = use_case.try_handle(Some(&json!("q"))).await.unwrap_err();
        assert!(matches!(err, HandleQuestionError::Unexpected(_)));
        assert_eq!(err.user_message(), SERVER_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn test_failure_body_has_no_result_fields() {
        let use_case = HandleQuestionUseCase::new(CountingStrategy::new(Behavior::Delegate(
            || DelegateError::Failure("boom".to_string()),
        )));
        let response = use_case.handle(Some(&json!("q"))).await;
        let body = serde_json::to_value(&response).unwrap();
        assert_eq!(
            body,
            json!({"success": false, "error": DELEGATE_FAILURE_MESSAGE})
        );
    }
}
