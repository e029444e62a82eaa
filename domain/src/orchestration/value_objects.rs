//! Orchestration value objects - immutable result types for one request.
//!
//! - [`OrchestrationMetadata`] - mode, timing and agent counts
//! - [`OrchestrationResult`] - complete structured answer
//! - [`ChatResponse`] - what the caller actually receives

use super::mode::ExecutionMode;
use crate::agent::{result::AgentResult, role::AgentRole};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;

/// Metadata attached to every successful orchestration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrchestrationMetadata {
    /// Which execution path produced the result
    pub mode: ExecutionMode,
    /// Wall-clock time spent, in seconds
    pub total_duration: f64,
    /// When the result was assembled
    pub timestamp: DateTime<Utc>,
    /// Number of agents that answered successfully
    pub successful_agents: usize,
    /// Number of agents consulted
    pub total_agents: usize,
}

/// Complete structured answer to one question
#[derive(Debug, Clone, Serialize)]
pub struct OrchestrationResult {
    /// Always `true`; failures are represented by [`ChatResponse::Failed`]
    pub success: bool,
    /// Echo of the original question
    pub question: String,
    /// Per-agent results, keyed by role
    pub responses: BTreeMap<AgentRole, AgentResult>,
    /// Final combined narrative
    pub synthesis: String,
    pub metadata: OrchestrationMetadata,
}

impl OrchestrationResult {
    /// Assemble a result from the agent outputs.
    ///
    /// Results are keyed by their own role, so the order of `responses`
    /// does not matter.
    pub fn new(
        question: impl Into<String>,
        responses: impl IntoIterator<Item = AgentResult>,
        synthesis: impl Into<String>,
        mode: ExecutionMode,
        elapsed: Duration,
    ) -> Self {
        let responses: BTreeMap<_, _> = responses.into_iter().map(|r| (r.agent, r)).collect();
        let successful_agents = responses.values().filter(|r| r.success).count();
        let total_agents = responses.len();

        Self {
            success: true,
            question: question.into(),
            responses,
            synthesis: synthesis.into(),
            metadata: OrchestrationMetadata {
                mode,
                total_duration: elapsed.as_secs_f64(),
                timestamp: Utc::now(),
                successful_agents,
                total_agents,
            },
        }
    }
}

/// Caller-facing failure body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureBody {
    /// Always `false`
    pub success: bool,
    /// Short user-facing message; never carries internal detail
    pub error: String,
}

/// The response returned to the caller for one question.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ChatResponse {
    /// Assembled locally (simulated mode)
    Orchestrated(OrchestrationResult),
    /// Document produced by the delegate, passed through unchanged
    Delegated(Value),
    /// Any failure, collapsed to `success=false` plus a message
    Failed(FailureBody),
}

impl ChatResponse {
    pub fn failure(error: impl Into<String>) -> Self {
        ChatResponse::Failed(FailureBody {
            success: false,
            error: error.into(),
        })
    }

    /// Whether the response reports success.
    ///
    /// Delegated documents are opaque; they count as successful unless
    /// they carry an explicit `"success": false`.
    pub fn is_success(&self) -> bool {
        match self {
            ChatResponse::Orchestrated(result) => result.success,
            ChatResponse::Delegated(value) => {
                value.get("success").and_then(Value::as_bool) != Some(false)
            }
            ChatResponse::Failed(_) => false,
        }
    }

    /// The user-facing error message, if this is a failure
    pub fn error_message(&self) -> Option<&str> {
        match self {
            ChatResponse::Failed(body) => Some(&body.error),
            ChatResponse::Delegated(value) if !self.is_success() => {
                value.get("error").and_then(Value::as_str)
            }
            _ => None,
        }
    }
}
