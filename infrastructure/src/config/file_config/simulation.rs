//! Simulated execution configuration from TOML (`[simulation]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSimulationConfig {
    /// Artificial latency per agent in milliseconds, in pipeline order
    /// (research, strategy, execution planning)
    pub delays_ms: Vec<u64>,
}

impl Default for FileSimulationConfig {
    fn default() -> Self {
        Self {
            delays_ms: vec![1000, 1500, 2000],
        }
    }
}

impl FileSimulationConfig {
    pub fn delays(&self) -> Vec<Duration> {
        self.delays_ms.iter().copied().map(Duration::from_millis).collect()
    }
}
