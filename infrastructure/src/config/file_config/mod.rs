//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod delegate;
mod execution;
mod logging;
mod output;
mod server;
mod simulation;

pub use delegate::FileDelegateConfig;
pub use execution::FileExecutionConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use server::FileServerConfig;
pub use simulation::FileSimulationConfig;

use orchestrator_domain::{AgentRole, ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP listener settings
    pub server: FileServerConfig,
    /// Simulated vs delegated mode selection
    pub execution: FileExecutionConfig,
    /// External delegate process
    pub delegate: FileDelegateConfig,
    /// Simulated agent latencies
    pub simulation: FileSimulationConfig,
    /// Log file output
    pub logging: FileLoggingConfig,
    /// Console output for `ask`
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. Enum parse failures for execution fields (mode, environment)
    /// 2. Delegate settings that can never succeed
    /// 3. Simulation delays that don't line up with the agent set
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Enum parse validation
        issues.extend(self.execution.parse_mode().1);
        issues.extend(self.execution.parse_environment().1);

        // 2. Delegate settings
        if self.delegate.timeout_secs == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::ZeroTimeout,
                message: "delegate.timeout_secs must be greater than zero".to_string(),
            });
        }
        if self.delegate.program.trim().is_empty() {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::EmptyDelegateProgram,
                message: "delegate.program must not be empty".to_string(),
            });
        }

        // 3. Simulation delays
        let expected = AgentRole::ALL.len();
        let actual = self.simulation.delays_ms.len();
        if actual != expected {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::DelayCountMismatch { expected, actual },
                message: format!(
                    "simulation.delays_ms: expected {} entries, got {}; missing agents use defaults, extras are ignored",
                    expected, actual
                ),
            });
        }

        issues
    }
}
