//! Error types for the process delegate adapter

use orchestrator_application::DelegateError;
use thiserror::Error;

/// Low-level failures while driving the child process.
///
/// These are converted into the port's [`DelegateError`] before leaving
/// the adapter.
#[derive(Error, Debug)]
pub enum InvokeError {
    #[error("Failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error while collecting delegate output: {0}")]
    Io(#[from] std::io::Error),
}

impl From<InvokeError> for DelegateError {
    fn from(e: InvokeError) -> Self {
        match e {
            InvokeError::Spawn { .. } => DelegateError::Spawn(e.to_string()),
            InvokeError::Io(_) => DelegateError::Failure(e.to_string()),
        }
    }
}
