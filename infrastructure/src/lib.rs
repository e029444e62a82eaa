//! Infrastructure layer for ai-orchestrator
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod config;
pub mod delegate;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileDelegateConfig, FileExecutionConfig, FileLoggingConfig,
    FileOutputConfig, FileServerConfig, FileSimulationConfig,
};
pub use delegate::{
    error::InvokeError,
    process::{DEFAULT_DELEGATE_TIMEOUT, ProcessDelegateInvoker},
};
