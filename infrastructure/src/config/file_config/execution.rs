//! Execution mode configuration from TOML (`[execution]` section)

use orchestrator_domain::{ConfigIssue, ConfigIssueCode, Environment, ModeSetting, Severity};
use serde::{Deserialize, Serialize};

/// Raw execution configuration from TOML
///
/// String-typed so that bad values produce a warning and a fallback
/// instead of a hard parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileExecutionConfig {
    /// "auto", "simulated" or "delegated"
    pub mode: String,
    /// "development" or "production"
    pub environment: String,
    /// Name of the environment variable holding the real-execution credential
    pub credential_env: String,
}

impl Default for FileExecutionConfig {
    fn default() -> Self {
        Self {
            mode: "auto".to_string(),
            environment: "development".to_string(),
            credential_env: "OPENAI_API_KEY".to_string(),
        }
    }
}

impl FileExecutionConfig {
    /// Parse mode string into ModeSetting
    ///
    /// Accepts: "auto", "simulated", "simulate", "sim", "delegated", "delegate"
    pub fn parse_mode(&self) -> (ModeSetting, Vec<ConfigIssue>) {
        match self.mode.parse::<ModeSetting>() {
            Ok(mode) => (mode, vec![]),
            Err(_) => {
                let issue = ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::InvalidEnumValue {
                        field: "execution.mode".to_string(),
                        value: self.mode.clone(),
                        valid_values: vec![
                            "auto".to_string(),
                            "simulated".to_string(),
                            "delegated".to_string(),
                        ],
                    },
                    message: format!(
                        "execution.mode: unknown value '{}', falling back to 'auto'",
                        self.mode
                    ),
                };
                (ModeSetting::default(), vec![issue])
            }
        }
    }

    /// Parse environment string into Environment
    ///
    /// Accepts: "development", "dev", "production", "prod"
    pub fn parse_environment(&self) -> (Environment, Vec<ConfigIssue>) {
        match self.environment.parse::<Environment>() {
            Ok(env) => (env, vec![]),
            Err(_) => {
                let issue = ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::InvalidEnumValue {
                        field: "execution.environment".to_string(),
                        value: self.environment.clone(),
                        valid_values: vec!["development".to_string(), "production".to_string()],
                    },
                    message: format!(
                        "execution.environment: unknown value '{}', falling back to 'development'",
                        self.environment
                    ),
                };
                (Environment::default(), vec![issue])
            }
        }
    }

    /// Read the credential from the process environment, if set
    pub fn credential(&self) -> Option<String> {
        if self.credential_env.is_empty() {
            return None;
        }
        std::env::var(&self.credential_env).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_parse_cleanly() {
        let config = FileExecutionConfig::default();
        let (mode, issues) = config.parse_mode();
        assert_eq!(mode, ModeSetting::Auto);
        assert!(issues.is_empty());
        let (env, issues) = config.parse_environment();
        assert_eq!(env, Environment::Development);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_unknown_mode_falls_back_with_warning() {
        let config = FileExecutionConfig {
            mode: "turbo".to_string(),
            ..Default::default()
        };
        let (mode, issues) = config.parse_mode();
        assert_eq!(mode, ModeSetting::Auto);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert!(issues[0].message.contains("turbo"));
    }

    #[test]
    fn test_unknown_environment_falls_back_with_warning() {
        let config = FileExecutionConfig {
            environment: "staging".to_string(),
            ..Default::default()
        };
        let (env, issues) = config.parse_environment();
        assert_eq!(env, Environment::Development);
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn test_empty_credential_env_reads_nothing() {
        let config = FileExecutionConfig {
            credential_env: String::new(),
            ..Default::default()
        };
        assert!(config.credential().is_none());
    }
}
