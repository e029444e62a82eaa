//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Invalid execution mode: {0}")]
    InvalidMode(String),

    #[error("Invalid environment: {0}")]
    InvalidEnvironment(String),
}

impl DomainError {
    /// Check if this error was caused by bad caller input
    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::InvalidQuestion(_))
    }
}
