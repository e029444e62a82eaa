//! Delegated execution
//!
//! Hands the question to the external computation and passes its
//! document through unchanged.

use crate::ports::delegate_invoker::DelegateInvoker;
use crate::ports::execution_strategy::{ExecutionStrategy, StrategyError};
use async_trait::async_trait;
use orchestrator_domain::{ChatResponse, ExecutionMode, Question};
use std::sync::Arc;

pub struct DelegatedStrategy {
    invoker: Arc<dyn DelegateInvoker>,
}

impl DelegatedStrategy {
    pub fn new(invoker: Arc<dyn DelegateInvoker>) -> Self {
        Self { invoker }
    }
}

#[async_trait]
impl ExecutionStrategy for DelegatedStrategy {
    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Delegated
    }

    async fn execute(&self, question: &Question) -> Result<ChatResponse, StrategyError> {
        let document = self.invoker.invoke(question).await?;
        Ok(ChatResponse::Delegated(document))
    }
}
