//! Per-agent result value object

use super::role::AgentRole;
use serde::Serialize;

/// Output of a single agent for one request
///
/// Results are keyed by role in the response map, so the role itself is
/// not part of the serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentResult {
    /// The agent that produced this result
    #[serde(skip)]
    pub agent: AgentRole,
    /// Whether the agent produced content
    pub success: bool,
    /// The response content (empty when the agent failed)
    pub content: String,
    /// Error message if failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AgentResult {
    /// Creates a successful result.
    pub fn success(agent: AgentRole, content: impl Into<String>) -> Self {
        Self {
            agent,
            success: true,
            content: content.into(),
            error: None,
        }
    }

    /// Creates a failed result carrying the reason.
    pub fn failure(agent: AgentRole, error: impl Into<String>) -> Self {
        Self {
            agent,
            success: false,
            content: String::new(),
            error: Some(error.into()),
        }
    }

    /// Returns `true` if this agent answered.
    pub fn is_success(&self) -> bool {
        self.success
    }
}
