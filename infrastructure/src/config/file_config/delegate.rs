//! Delegate process configuration from TOML (`[delegate]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Raw delegate configuration from TOML
///
/// The delegate is run as `<program> <args...> <question_flag> <question>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDelegateConfig {
    /// Executable to launch
    pub program: String,
    /// Arguments before the question (e.g. the script path)
    pub args: Vec<String>,
    /// Flag preceding the question; empty to pass it positionally
    pub question_flag: String,
    /// Hard deadline for one run, in seconds
    pub timeout_secs: u64,
    /// Working directory for the delegate
    pub working_dir: Option<String>,
}

impl Default for FileDelegateConfig {
    fn default() -> Self {
        Self {
            program: "python3".to_string(),
            args: vec!["main.py".to_string()],
            question_flag: "--question".to_string(),
            timeout_secs: 60,
            working_dir: None,
        }
    }
}

impl FileDelegateConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn question_flag(&self) -> Option<String> {
        if self.question_flag.is_empty() {
            None
        } else {
            Some(self.question_flag.clone())
        }
    }

    pub fn working_dir(&self) -> Option<PathBuf> {
        self.working_dir.as_ref().map(PathBuf::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileDelegateConfig::default();
        assert_eq!(config.timeout(), Duration::from_secs(60));
        assert_eq!(config.question_flag().as_deref(), Some("--question"));
        assert!(config.working_dir().is_none());
    }

    #[test]
    fn test_empty_flag_is_positional() {
        let config = FileDelegateConfig {
            question_flag: String::new(),
            ..Default::default()
        };
        assert!(config.question_flag().is_none());
    }
}
