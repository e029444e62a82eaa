//! Delegate invoker port
//!
//! Defines the interface for handing a question to the external
//! computation that performs the real multi-agent work.

use async_trait::async_trait;
use orchestrator_domain::Question;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Ways a delegate invocation can fail.
///
/// Exactly one of these (or a parsed document) is produced per invocation.
#[derive(Error, Debug)]
pub enum DelegateError {
    #[error("Failed to launch delegate: {0}")]
    Spawn(String),

    /// The delegate exited with a nonzero status
    #[error("Delegate failed: {0}")]
    Failure(String),

    /// The delegate exited successfully but its output is not JSON
    #[error("Failed to parse delegate output: {error}")]
    Parse { error: String, raw: String },

    /// The deadline elapsed and the delegate was terminated
    #[error("Delegate timed out after {}s", .0.as_secs())]
    Timeout(Duration),
}

impl DelegateError {
    /// Short, stable name for log fields
    pub fn kind(&self) -> &'static str {
        match self {
            DelegateError::Spawn(_) => "spawn",
            DelegateError::Failure(_) => "failure",
            DelegateError::Parse { .. } => "parse",
            DelegateError::Timeout(_) => "timeout",
        }
    }
}

/// Runs the external computation for one question.
///
/// Implementations live in the infrastructure layer. The deadline they
/// enforce is an outer bound; any per-agent budgets inside the external
/// computation are its own business.
#[async_trait]
pub trait DelegateInvoker: Send + Sync {
    /// Invoke the delegate and return the document it produced.
    async fn invoke(&self, question: &Question) -> Result<Value, DelegateError>;
}
