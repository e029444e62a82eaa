//! Spinner shown while a one-shot question is being answered

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use orchestrator_domain::ExecutionMode;
use std::time::Duration;

/// Wraps an indicatif spinner; hidden entirely in quiet mode
pub struct AskSpinner {
    bar: ProgressBar,
}

impl AskSpinner {
    pub fn new(mode: ExecutionMode, quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            ProgressBar::new_spinner()
        };
        bar.set_style(Self::spinner_style());
        bar.set_prefix(format!("[{}]", mode));
        bar.set_message(match mode {
            ExecutionMode::Simulated => "Consulting simulated agents...",
            ExecutionMode::Delegated => "Waiting for the agent orchestrator...",
        });
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg} ({elapsed})")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    pub fn finish(&self, success: bool) {
        let status = if success {
            "done".green().to_string()
        } else {
            "failed".red().to_string()
        };
        self.bar.finish_with_message(status);
    }
}
