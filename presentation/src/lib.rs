//! Presentation layer for ai-orchestrator
//!
//! This crate contains the HTTP API, CLI definitions, output formatters
//! and the progress spinner used by one-shot questions.

pub mod api;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use api::{AppState, router};
pub use cli::commands::{Cli, Command, ModeArg, OutputFormatArg};
pub use output::console::ConsoleFormatter;
pub use progress::spinner::AskSpinner;
