//! Configuration file loading for ai-orchestrator
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `ORCHESTRATOR_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./orchestrator.toml` or `./.orchestrator.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/ai-orchestrator/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileDelegateConfig, FileExecutionConfig, FileLoggingConfig, FileOutputConfig,
    FileServerConfig, FileSimulationConfig,
};
pub use loader::ConfigLoader;
