//! One-shot child process delegate.
//!
//! Each invocation spawns `<program> <args...> [<question_flag>] <question>`,
//! drains stdout and stderr concurrently, and races the exit against a
//! hard deadline.
//!
//! # Outcomes
//!
//! | Exit | stdout | Result |
//! |------|--------|--------|
//! | 0 | one JSON document | `Ok(document)` |
//! | 0 | anything else | [`DelegateError::Parse`] |
//! | nonzero / signal | ignored | [`DelegateError::Failure`] with stderr |
//! | none before deadline | ignored | [`DelegateError::Timeout`], child killed |
//!
//! The deadline is applied with [`tokio::time::timeout`], which polls the
//! completion future before checking the timer, so a process that has
//! already finished is never reported as timed out.

use super::error::InvokeError;
use async_trait::async_trait;
use orchestrator_application::{DelegateError, DelegateInvoker};
use orchestrator_domain::{Question, truncate};
use serde_json::Value;
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::{Child, Command};
use tracing::{debug, info, warn};

/// Outer bound on a single delegate run
pub const DEFAULT_DELEGATE_TIMEOUT: Duration = Duration::from_secs(60);

/// Used when the delegate fails without writing anything to stderr
const GENERIC_FAILURE: &str = "delegate process failed";

/// Maximum raw output kept in parse errors
const MAX_RAW_OUTPUT: usize = 2048;

/// DelegateInvoker that runs an external program per question
#[derive(Debug, Clone)]
pub struct ProcessDelegateInvoker {
    program: String,
    args: Vec<String>,
    question_flag: Option<String>,
    working_dir: Option<PathBuf>,
    timeout: Duration,
}

impl ProcessDelegateInvoker {
    /// Create an invoker for `program` with no extra arguments and the
    /// default 60 second deadline
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            question_flag: None,
            working_dir: None,
            timeout: DEFAULT_DELEGATE_TIMEOUT,
        }
    }

    /// Arguments placed before the question (e.g. the script path)
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Flag placed immediately before the question (e.g. `--question`)
    pub fn with_question_flag(mut self, flag: Option<String>) -> Self {
        self.question_flag = flag.filter(|f| !f.is_empty());
        self
    }

    pub fn with_working_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.working_dir = dir;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn command(&self, question: &Question) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        if let Some(flag) = &self.question_flag {
            cmd.arg(flag);
        }
        cmd.arg(question.content())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        // Linux: request kernel to send SIGTERM to child when parent dies.
        // This catches cases where Drop doesn't run (SIGKILL, OOM kill).
        #[cfg(target_os = "linux")]
        unsafe {
            cmd.pre_exec(|| {
                libc::prctl(libc::PR_SET_PDEATHSIG, libc::SIGTERM);
                Ok(())
            });
        }

        cmd
    }

    fn spawn(&self, question: &Question) -> Result<Child, InvokeError> {
        self.command(question)
            .spawn()
            .map_err(|source| InvokeError::Spawn {
                program: self.program.clone(),
                source,
            })
    }

    /// Wait for exit while draining both pipes, so a chatty child can't
    /// block on a full pipe buffer.
    async fn collect(child: &mut Child) -> Result<(ExitStatus, Vec<u8>, Vec<u8>), InvokeError> {
        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        let (status, stdout, stderr) =
            tokio::try_join!(child.wait(), read_stream(stdout), read_stream(stderr))?;
        Ok((status, stdout, stderr))
    }

    /// Kill after the deadline. `Child::kill` also reaps the process.
    async fn terminate(child: &mut Child) {
        match child.kill().await {
            Ok(()) => debug!("Delegate process killed"),
            Err(e) => warn!("Failed to kill delegate process: {}", e),
        }
    }
}

async fn read_stream<R: AsyncRead + Unpin>(stream: Option<R>) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    if let Some(mut stream) = stream {
        stream.read_to_end(&mut buf).await?;
    }
    Ok(buf)
}

/// Map a finished process to the invocation outcome.
fn interpret(status: ExitStatus, stdout: &[u8], stderr: &[u8]) -> Result<Value, DelegateError> {
    if status.success() {
        return serde_json::from_slice(stdout).map_err(|e| DelegateError::Parse {
            error: e.to_string(),
            raw: truncate(&String::from_utf8_lossy(stdout), MAX_RAW_OUTPUT),
        });
    }

    let diagnostic = String::from_utf8_lossy(stderr);
    let diagnostic = diagnostic.trim();
    if diagnostic.is_empty() {
        Err(DelegateError::Failure(GENERIC_FAILURE.to_string()))
    } else {
        Err(DelegateError::Failure(diagnostic.to_string()))
    }
}

#[async_trait]
impl DelegateInvoker for ProcessDelegateInvoker {
    async fn invoke(&self, question: &Question) -> Result<Value, DelegateError> {
        let mut child = self.spawn(question)?;
        debug!(
            pid = child.id(),
            "Spawned delegate {} (deadline {}s)",
            self.program,
            self.timeout.as_secs_f64()
        );

        let outcome = tokio::time::timeout(self.timeout, Self::collect(&mut child)).await;

        match outcome {
            Ok(Ok((status, stdout, stderr))) => {
                let result = interpret(status, &stdout, &stderr);
                match &result {
                    Ok(_) => info!("Delegate finished successfully"),
                    Err(e) => warn!(kind = e.kind(), status = %status, "Delegate finished with error"),
                }
                result
            }
            Ok(Err(e)) => {
                Self::terminate(&mut child).await;
                Err(e.into())
            }
            Err(_) => {
                warn!(
                    "Delegate exceeded {}s deadline, terminating",
                    self.timeout.as_secs_f64()
                );
                Self::terminate(&mut child).await;
                Err(DelegateError::Timeout(self.timeout))
            }
        }
    }
}
