//! Agent role definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// One of the three advisory steps that contribute to an answer.
///
/// Ordering follows the nominal pipeline (research → strategy → planning),
/// which is also the order used for result maps and synthesis text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgentRole {
    /// Gathers background information and trends
    FirstPassResearch,
    /// Turns the research into strategic insights
    StrategyAnalysis,
    /// Produces a staged, actionable plan
    ExecutionPlanning,
}

impl AgentRole {
    /// All roles, in pipeline order
    pub const ALL: [AgentRole; 3] = [
        AgentRole::FirstPassResearch,
        AgentRole::StrategyAnalysis,
        AgentRole::ExecutionPlanning,
    ];

    /// Wire identifier used as the key in `responses`
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentRole::FirstPassResearch => "first-pass-research",
            AgentRole::StrategyAnalysis => "strategy-analysis",
            AgentRole::ExecutionPlanning => "execution-planning",
        }
    }

    /// Human-readable label for console output and synthesis text
    pub fn label(&self) -> &'static str {
        match self {
            AgentRole::FirstPassResearch => "Information gathering",
            AgentRole::StrategyAnalysis => "Strategy analysis",
            AgentRole::ExecutionPlanning => "Execution plan",
        }
    }

    /// Default artificial latency for simulated execution
    pub fn default_simulated_delay(&self) -> Duration {
        match self {
            AgentRole::FirstPassResearch => Duration::from_millis(1000),
            AgentRole::StrategyAnalysis => Duration::from_millis(1500),
            AgentRole::ExecutionPlanning => Duration::from_millis(2000),
        }
    }
}

impl fmt::Display for AgentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AgentRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first-pass-research" | "research" => Ok(AgentRole::FirstPassResearch),
            "strategy-analysis" | "strategy" => Ok(AgentRole::StrategyAnalysis),
            "execution-planning" | "planning" => Ok(AgentRole::ExecutionPlanning),
            _ => Err(format!("Invalid AgentRole: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_identifiers_match_as_str() {
        for role in AgentRole::ALL {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "first-pass-research".parse::<AgentRole>().ok(),
            Some(AgentRole::FirstPassResearch)
        );
        assert_eq!(
            "Strategy".parse::<AgentRole>().ok(),
            Some(AgentRole::StrategyAnalysis)
        );
        assert!("moderator".parse::<AgentRole>().is_err());
    }

    #[test]
    fn test_default_delays_are_spread() {
        let delays: Vec<_> = AgentRole::ALL
            .iter()
            .map(|r| r.default_simulated_delay())
            .collect();
        assert_eq!(
            delays,
            vec![
                Duration::from_millis(1000),
                Duration::from_millis(1500),
                Duration::from_millis(2000)
            ]
        );
    }

    #[test]
    fn test_ordering_follows_pipeline() {
        assert!(AgentRole::FirstPassResearch < AgentRole::StrategyAnalysis);
        assert!(AgentRole::StrategyAnalysis < AgentRole::ExecutionPlanning);
    }
}
