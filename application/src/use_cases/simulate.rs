//! Simulated execution
//!
//! Fans the question out to three canned agents, each with its own
//! artificial delay, then builds a fixed-template synthesis.

use crate::ports::execution_strategy::{ExecutionStrategy, StrategyError};
use async_trait::async_trait;
use orchestrator_domain::{
    AgentResult, AgentRole, ChatResponse, ExecutionMode, OrchestrationResult, Question,
    canned_response, compose_synthesis,
};
use std::collections::BTreeMap;
use std::time::Duration;
use tokio::task::JoinSet;
use tokio::time::Instant;
use tracing::debug;

/// Canned multi-agent responses for development without credentials.
#[derive(Debug, Clone)]
pub struct SimulatedStrategy {
    delays: BTreeMap<AgentRole, Duration>,
}

impl Default for SimulatedStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedStrategy {
    /// Use each role's default delay (1.0s / 1.5s / 2.0s)
    pub fn new() -> Self {
        Self {
            delays: AgentRole::ALL
                .into_iter()
                .map(|r| (r, r.default_simulated_delay()))
                .collect(),
        }
    }

    /// Override the delay of one agent
    pub fn with_delay(mut self, role: AgentRole, delay: Duration) -> Self {
        self.delays.insert(role, delay);
        self
    }

    /// Apply delays in pipeline order; missing entries keep their default
    pub fn with_delays(mut self, delays: &[Duration]) -> Self {
        for (role, delay) in AgentRole::ALL.into_iter().zip(delays) {
            self.delays.insert(role, *delay);
        }
        self
    }

    pub fn delay_for(&self, role: AgentRole) -> Duration {
        self.delays
            .get(&role)
            .copied()
            .unwrap_or_else(|| role.default_simulated_delay())
    }

    async fn run_agent(role: AgentRole, question: String, delay: Duration) -> AgentResult {
        tokio::time::sleep(delay).await;
        AgentResult::success(role, canned_response(role, &question))
    }
}

#[async_trait]
impl ExecutionStrategy for SimulatedStrategy {
    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Simulated
    }

    async fn execute(&self, question: &Question) -> Result<ChatResponse, StrategyError> {
        let start = Instant::now();
        let mut join_set = JoinSet::new();

        for role in AgentRole::ALL {
            let delay = self.delay_for(role);
            let question = question.content().to_string();
            join_set.spawn(Self::run_agent(role, question, delay));
        }

        // All-complete barrier; an early return drops the set and aborts the rest
        let mut responses = BTreeMap::new();
        while let Some(joined) = join_set.join_next().await {
            let result = joined.map_err(|e| StrategyError::TaskFailed(e.to_string()))?;
            debug!("Simulated agent {} finished", result.agent);
            responses.insert(result.agent, result);
        }

        let synthesis = compose_synthesis(question.content(), &responses);

        Ok(ChatResponse::Orchestrated(OrchestrationResult::new(
            question.content(),
            responses.into_values(),
            synthesis,
            ExecutionMode::Simulated,
            start.elapsed(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(text: &str) -> Question {
        Question::try_new(text).unwrap()
    }

    fn unwrap_orchestrated(response: ChatResponse) -> OrchestrationResult {
        match response {
            ChatResponse::Orchestrated(result) => result,
            other => panic!("expected orchestrated result, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_three_successful_agents_and_synthesis() {
        let strategy = SimulatedStrategy::new();
        let result = unwrap_orchestrated(strategy.execute(&question("Launch?")).await.unwrap());

        assert!(result.success);
        assert_eq!(result.question, "Launch?");
        assert_eq!(
            result.responses.keys().copied().collect::<Vec<_>>(),
            AgentRole::ALL.to_vec()
        );
        for agent in result.responses.values() {
            assert!(agent.success);
            assert!(!agent.content.is_empty());
        }
        assert!(!result.synthesis.is_empty());
        assert_eq!(result.metadata.mode, ExecutionMode::Simulated);
        assert_eq!(result.metadata.successful_agents, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_agents_run_concurrently() {
        let strategy = SimulatedStrategy::new();
        let start = Instant::now();
        let result = unwrap_orchestrated(strategy.execute(&question("q")).await.unwrap());
        let elapsed = start.elapsed();

        // max(1.0, 1.5, 2.0), not the 4.5s sum
        assert!(elapsed >= Duration::from_millis(2000));
        assert!(elapsed < Duration::from_millis(2500), "took {:?}", elapsed);
        assert!(result.metadata.total_duration >= 2.0);
        assert!(result.metadata.total_duration < 2.5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_completion_order_does_not_affect_result() {
        let reversed = SimulatedStrategy::new().with_delays(&[
            Duration::from_millis(300),
            Duration::from_millis(200),
            Duration::from_millis(100),
        ]);
        let forward = SimulatedStrategy::new().with_delays(&[
            Duration::from_millis(100),
            Duration::from_millis(200),
            Duration::from_millis(300),
        ]);

        let a = unwrap_orchestrated(reversed.execute(&question("q")).await.unwrap());
        let b = unwrap_orchestrated(forward.execute(&question("q")).await.unwrap());
        assert_eq!(a.responses, b.responses);
        assert_eq!(a.synthesis, b.synthesis);
    }

    #[tokio::test(start_paused = true)]
    async fn test_identical_requests_are_independent() {
        let strategy = SimulatedStrategy::new()
            .with_delay(AgentRole::ExecutionPlanning, Duration::from_millis(10));
        let q = question("same");
        let (a, b) = tokio::join!(strategy.execute(&q), strategy.execute(&q));
        let a = unwrap_orchestrated(a.unwrap());
        let b = unwrap_orchestrated(b.unwrap());
        assert_eq!(a.responses, b.responses);
        assert_eq!(a.synthesis, b.synthesis);
    }

    #[test]
    fn test_with_delays_partial() {
        let strategy = SimulatedStrategy::new().with_delays(&[Duration::from_millis(5)]);
        assert_eq!(
            strategy.delay_for(AgentRole::FirstPassResearch),
            Duration::from_millis(5)
        );
        assert_eq!(
            strategy.delay_for(AgentRole::ExecutionPlanning),
            Duration::from_millis(2000)
        );
    }
}
