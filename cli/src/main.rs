//! CLI entrypoint for ai-orchestrator
//!
//! This is the main binary that wires together all layers using
//! dependency injection. The execution mode is decided exactly once here
//! and baked into the strategy shared by every request.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use orchestrator_application::{
    DelegatedStrategy, ExecutionStrategy, HandleQuestionUseCase, ModeSelector, SimulatedStrategy,
};
use orchestrator_domain::{ExecutionMode, OutputFormat, Severity};
use orchestrator_infrastructure::{ConfigLoader, FileConfig, FileLoggingConfig, ProcessDelegateInvoker};
use orchestrator_presentation::{AppState, AskSpinner, Cli, Command, ConsoleFormatter, router};
use serde_json::Value;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    // Credentials usually live in .env during development
    let dotenv_path = dotenvy::dotenv().ok();

    let config = match (cli.no_config, &cli.config) {
        (true, None) => ConfigLoader::load_defaults(),
        // Explicit file only, without global/project files or env overrides
        (true, Some(path)) => ConfigLoader::load_file(path)
            .map_err(|e| anyhow!("{}", e))
            .with_context(|| format!("Failed to load {}", path.display()))?,
        (false, path) => ConfigLoader::load(path.as_ref())
            .map_err(|e| anyhow!("{}", e))
            .context("Failed to load configuration")?,
    };

    let command = cli.command.unwrap_or(Command::Serve {
        host: None,
        port: None,
    });

    // Servers log at info by default; one-shot questions stay quiet
    let base_level = match command {
        Command::Serve { .. } => 1,
        Command::Ask { .. } => 0,
    };
    let _log_guard = init_logging(cli.verbose.saturating_add(base_level), &config.logging)?;

    if let Some(path) = dotenv_path {
        info!("Loaded environment from {}", path.display());
    }

    check_config(&config)?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    // === Mode selection (once per process) ===
    let (mut setting, _) = config.execution.parse_mode();
    if let Some(mode) = cli.mode {
        setting = mode.into();
    }
    let (environment, _) = config.execution.parse_environment();
    let credential = config.execution.credential();
    let mode = ModeSelector::new(setting, environment, credential.as_deref()).select();

    // === Dependency Injection ===
    let strategy = build_strategy(mode, &config);
    let use_case = Arc::new(HandleQuestionUseCase::new(strategy));

    match command {
        Command::Serve { host, port } => {
            let mut server = config.server.clone();
            if let Some(host) = host {
                server.host = host;
            }
            if let Some(port) = port {
                server.port = port;
            }
            serve(use_case, &server.bind_address()).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Ask {
            question,
            output,
            quiet,
        } => {
            let format = output
                .map(OutputFormat::from)
                .or(config.output.format)
                .unwrap_or_default();
            Ok(ask(&use_case, question, format, quiet).await)
        }
    }
}

/// Initialize console logging, plus a daily-rolling file when configured.
///
/// `RUST_LOG` takes precedence over the verbosity-derived level.
fn init_logging(verbosity: u8, logging: &FileLoggingConfig) -> Result<Option<WorkerGuard>> {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match &logging.dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir))?;
            let appender = tracing_appender::rolling::daily(dir, &logging.file_prefix);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file_layer)
        .init();

    Ok(guard)
}

/// Log every config issue; refuse to start on errors.
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Warning => warn!("{}", issue.message),
            Severity::Error => error!("{}", issue.message),
        }
    }

    let errors = issues.iter().filter(|i| i.is_error()).count();
    if errors > 0 {
        bail!("Configuration has {} error(s)", errors);
    }
    Ok(())
}

fn build_strategy(mode: ExecutionMode, config: &FileConfig) -> Arc<dyn ExecutionStrategy> {
    match mode {
        ExecutionMode::Simulated => {
            Arc::new(SimulatedStrategy::new().with_delays(&config.simulation.delays()))
        }
        ExecutionMode::Delegated => {
            let delegate = &config.delegate;
            let invoker = ProcessDelegateInvoker::new(delegate.program.as_str())
                .with_args(delegate.args.iter().cloned())
                .with_question_flag(delegate.question_flag())
                .with_working_dir(delegate.working_dir())
                .with_timeout(delegate.timeout());
            info!(
                "Delegate: {} {} (timeout {}s)",
                delegate.program,
                delegate.args.join(" "),
                delegate.timeout_secs
            );
            Arc::new(DelegatedStrategy::new(Arc::new(invoker)))
        }
    }
}

async fn serve(use_case: Arc<HandleQuestionUseCase>, addr: &str) -> Result<()> {
    let mode = use_case.mode();
    let app = router(AppState::new(use_case));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on http://{} ({} mode)", addr, mode);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}

async fn ask(
    use_case: &HandleQuestionUseCase,
    question: String,
    format: OutputFormat,
    quiet: bool,
) -> ExitCode {
    let spinner = AskSpinner::new(use_case.mode(), quiet || matches!(format, OutputFormat::Json));
    let response = use_case.handle(Some(&Value::String(question))).await;
    spinner.finish(response.is_success());

    println!("{}", ConsoleFormatter::render(&response, format));

    if response.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
