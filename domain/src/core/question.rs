//! Question value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A question to be answered by the agents (Value Object)
///
/// The content is kept exactly as the caller sent it so it can be echoed
/// back; only the emptiness check looks at the trimmed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Question {
    content: String,
}

impl Question {
    /// Try to create a new question, rejecting empty or whitespace-only text
    pub fn try_new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            Err(DomainError::InvalidQuestion("question is empty".to_string()))
        } else {
            Ok(Self { content })
        }
    }

    /// Validate the `question` field of a request body.
    ///
    /// Absent fields, `null`, and any non-string JSON value are rejected
    /// the same way as empty text.
    pub fn from_json(value: Option<&Value>) -> Result<Self, DomainError> {
        match value {
            Some(Value::String(s)) => Self::try_new(s.as_str()),
            Some(Value::Null) | None => Err(DomainError::InvalidQuestion(
                "question is missing".to_string(),
            )),
            Some(other) => Err(DomainError::InvalidQuestion(format!(
                "question must be a string, got {}",
                json_type_name(other)
            ))),
        }
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<String> for Question {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Question::try_new(s)
    }
}

impl TryFrom<&str> for Question {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Question::try_new(s)
    }
}

impl From<Question> for String {
    fn from(q: Question) -> Self {
        q.content
    }
}
