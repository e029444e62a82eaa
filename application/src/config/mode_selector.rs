//! Execution mode selection.

use orchestrator_domain::{Environment, ExecutionMode, ModeSetting};
use tracing::info;

/// Decides the execution mode once, at startup.
///
/// The result is meant to be turned into a single [`ExecutionStrategy`]
/// that serves every request; nothing here is consulted per request.
///
/// [`ExecutionStrategy`]: crate::ports::execution_strategy::ExecutionStrategy
#[derive(Debug, Clone)]
pub struct ModeSelector {
    setting: ModeSetting,
    environment: Environment,
    credential_present: bool,
}

impl ModeSelector {
    /// `credential` is the value of the real-execution credential, if any.
    /// Empty or whitespace-only values count as absent.
    pub fn new(setting: ModeSetting, environment: Environment, credential: Option<&str>) -> Self {
        Self {
            setting,
            environment,
            credential_present: credential.is_some_and(|c| !c.trim().is_empty()),
        }
    }

    /// Resolve the mode and log why it was chosen.
    pub fn select(&self) -> ExecutionMode {
        let mode = self
            .setting
            .resolve(self.environment, self.credential_present);
        info!(
            setting = %self.setting,
            environment = %self.environment,
            credential_present = self.credential_present,
            "Execution mode: {}",
            mode
        );
        mode
    }
}
