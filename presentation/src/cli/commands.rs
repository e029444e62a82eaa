//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use orchestrator_domain::{ModeSetting, OutputFormat};
use std::path::PathBuf;

/// Output format for one-shot answers
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    /// Every agent's contribution plus the synthesis
    Full,
    /// Only the synthesis
    Synthesis,
    /// JSON output, identical to the HTTP response body
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Full => OutputFormat::Full,
            OutputFormatArg::Synthesis => OutputFormat::Synthesis,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Execution mode override
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Auto,
    Simulated,
    Delegated,
}

impl From<ModeArg> for ModeSetting {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Auto => ModeSetting::Auto,
            ModeArg::Simulated => ModeSetting::Simulated,
            ModeArg::Delegated => ModeSetting::Delegated,
        }
    }
}

/// CLI arguments for ai-orchestrator
#[derive(Parser, Debug)]
#[command(name = "ai-orchestrator")]
#[command(author, version, about = "Multi-agent chat gateway - one question, three agents, one synthesis")]
#[command(long_about = r#"
ai-orchestrator answers a question with three agents (research, strategy,
execution planning) and a combined synthesis.

Questions are answered in one of two modes, fixed at startup:
  simulated  Canned responses with artificial latency (no credentials needed)
  delegated  An external orchestrator process does the real work

In "auto" mode the simulated path is used in development when the
credential variable (default OPENAI_API_KEY) is not set.

Configuration files are loaded from (in priority order):
1. ORCHESTRATOR_* environment variables
2. --config <path>      Explicit config file
3. ./orchestrator.toml  Project-level config
4. ~/.config/ai-orchestrator/config.toml   Global config

Example:
  ai-orchestrator serve --port 8080
  ai-orchestrator ask "Should we open a second location?"
  ai-orchestrator --mode simulated ask -o full "What should we build next?"
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Force the execution mode instead of the configured one
    #[arg(long, value_enum, global = true)]
    pub mode: Option<ModeArg>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Ignore global/project config files and env overrides
    /// (an explicit --config file is still read)
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve {
        /// Interface to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Answer one question and print the result
    Ask {
        /// The question to ask
        question: String,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        output: Option<OutputFormatArg>,

        /// Suppress the progress spinner
        #[arg(short, long)]
        quiet: bool,
    },
}
