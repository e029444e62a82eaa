//! Execution mode definitions.
//!
//! - [`ExecutionMode`]: how a question is actually answered
//! - [`ModeSetting`]: what the operator asked for (may be `Auto`)
//! - [`Environment`]: the deployment flag consulted by `Auto`

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How questions are answered for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Canned responses with artificial latency, no external calls
    Simulated,
    /// Questions are handed to the external delegate process
    Delegated,
}

impl ExecutionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionMode::Simulated => "simulated",
            ExecutionMode::Delegated => "delegated",
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operator-facing mode switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeSetting {
    /// Decide from environment and credential availability
    #[default]
    Auto,
    /// Always simulate
    Simulated,
    /// Always delegate
    Delegated,
}

impl ModeSetting {
    /// Resolve to a concrete mode.
    ///
    /// `Auto` simulates only in development when no credential is configured.
    pub fn resolve(self, environment: Environment, credential_present: bool) -> ExecutionMode {
        match self {
            ModeSetting::Simulated => ExecutionMode::Simulated,
            ModeSetting::Delegated => ExecutionMode::Delegated,
            ModeSetting::Auto => {
                if environment.is_development() && !credential_present {
                    ExecutionMode::Simulated
                } else {
                    ExecutionMode::Delegated
                }
            }
        }
    }
}

impl fmt::Display for ModeSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModeSetting::Auto => write!(f, "auto"),
            ModeSetting::Simulated => write!(f, "simulated"),
            ModeSetting::Delegated => write!(f, "delegated"),
        }
    }
}

impl std::str::FromStr for ModeSetting {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ModeSetting::Auto),
            "simulated" | "simulate" | "sim" => Ok(ModeSetting::Simulated),
            "delegated" | "delegate" => Ok(ModeSetting::Delegated),
            _ => Err(DomainError::InvalidMode(s.to_string())),
        }
    }
}

/// Deployment environment flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(DomainError::InvalidEnvironment(s.to_string())),
        }
    }
}
