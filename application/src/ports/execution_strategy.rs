//! Execution strategy port
//!
//! A strategy turns a validated question into a response. One strategy is
//! chosen at startup and shared by every request.

use super::delegate_invoker::DelegateError;
use async_trait::async_trait;
use orchestrator_domain::{ChatResponse, ExecutionMode, Question};
use thiserror::Error;

/// Errors raised while executing a strategy
#[derive(Error, Debug)]
pub enum StrategyError {
    #[error(transparent)]
    Delegate(#[from] DelegateError),

    /// A concurrently scheduled agent task panicked or was cancelled
    #[error("Agent task failed: {0}")]
    TaskFailed(String),
}

#[async_trait]
pub trait ExecutionStrategy: Send + Sync {
    /// The mode this strategy implements
    fn mode(&self) -> ExecutionMode;

    /// Answer one question
    async fn execute(&self, question: &Question) -> Result<ChatResponse, StrategyError>;
}
