//! Domain layer for ai-orchestrator
//!
//! This crate contains the value objects shared by every layer.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Question**: validated, non-empty caller input
//! - **Agent**: one of three fixed contributors (research, strategy,
//!   execution planning) to a composite answer
//! - **Synthesis**: the combined narrative produced once every agent
//!   contribution is available
//! - **Execution mode**: simulated (canned output) or delegated (an
//!   external process does the real work), chosen once per process

pub mod agent;
pub mod config;
pub mod core;
pub mod orchestration;

// Re-export commonly used types
pub use agent::{canned::canned_response, result::AgentResult, role::AgentRole};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{error::DomainError, question::Question, string::truncate};
pub use orchestration::{
    mode::{Environment, ExecutionMode, ModeSetting},
    synthesis::compose_synthesis,
    value_objects::{ChatResponse, FailureBody, OrchestrationMetadata, OrchestrationResult},
};
