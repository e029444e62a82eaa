//! Application layer for ai-orchestrator
//!
//! This crate contains use cases, port definitions, and mode selection.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ModeSelector;
pub use ports::{
    delegate_invoker::{DelegateError, DelegateInvoker},
    execution_strategy::{ExecutionStrategy, StrategyError},
};
pub use use_cases::delegate::DelegatedStrategy;
pub use use_cases::handle_question::{
    DELEGATE_FAILURE_MESSAGE, HandleQuestionError, HandleQuestionUseCase, SERVER_ERROR_MESSAGE,
    VALIDATION_MESSAGE,
};
pub use use_cases::simulate::SimulatedStrategy;
