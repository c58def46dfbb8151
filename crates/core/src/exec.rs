//! Shell command execution with captured output.
//!
//! Provides [`run_shell`], the subprocess layer behind execution
//! recording. Commands run through `sh -c` with stdout and stderr
//! captured per stream and joined afterwards (stdout first), and an
//! optional deadline enforced via `kill_on_drop`. [`fold_output`]
//! collapses the outcome into the single string that gets persisted,
//! applying the [`ERROR_TAG`] convention for anything that was not a
//! clean exit.

use std::process::Stdio;
use std::time::{Duration, Instant};

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;

/// Maximum bytes captured per output stream (1 MiB).
///
/// Output beyond this limit is truncated so a runaway command cannot
/// exhaust memory.
const MAX_OUTPUT_BYTES: usize = 1024 * 1024;

/// Prefix marking a persisted output as a failed execution.
///
/// External consumers key off this exact prefix; it must not change.
pub const ERROR_TAG: &str = "ERROR: ";

/// Errors from spawning or supervising the child process.
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    /// The shell could not be spawned or waiting on it failed.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The command exceeded its deadline and was killed.
    #[error("command timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },
}

/// Captured result of a command that ran to termination.
#[derive(Debug)]
pub struct ShellOutput {
    /// Combined captured text, trimmed: stdout first, stderr appended.
    pub output: String,
    /// Process exit code (`-1` if terminated by a signal).
    pub exit_code: i32,
    /// Wall-clock duration of the run.
    pub duration_ms: u64,
}

impl ShellOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Run `command` through `sh -c`, capturing stdout and stderr.
///
/// With `timeout == None` this blocks until the command terminates, no
/// matter how long that takes. With a timeout, the child is killed once
/// the deadline passes (`kill_on_drop`) and [`ExecError::Timeout`] is
/// returned.
pub async fn run_shell(command: &str, timeout: Option<Duration>) -> Result<ShellOutput, ExecError> {
    let mut cmd = Command::new("sh");
    cmd.arg("-c")
        .arg(command)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let start = Instant::now();
    let mut child = cmd.spawn()?;

    // Read both streams in spawned tasks so we can still call
    // `child.wait()` (which borrows `&mut child`).
    let stdout_handle = child.stdout.take();
    let stderr_handle = child.stderr.take();
    let stdout_task = tokio::spawn(async move { read_stream(stdout_handle).await });
    let stderr_task = tokio::spawn(async move { read_stream(stderr_handle).await });

    let status = match timeout {
        Some(limit) => match tokio::time::timeout(limit, child.wait()).await {
            Ok(waited) => waited?,
            Err(_elapsed) => {
                // Dropping `child` kills the process because of
                // `kill_on_drop(true)`.
                return Err(ExecError::Timeout {
                    timeout_secs: limit.as_secs(),
                });
            }
        },
        None => child.wait().await?,
    };

    let stdout_bytes = stdout_task.await.unwrap_or_default();
    let stderr_bytes = stderr_task.await.unwrap_or_default();
    let stdout = String::from_utf8_lossy(&stdout_bytes);
    let stderr = String::from_utf8_lossy(&stderr_bytes);

    Ok(ShellOutput {
        output: join_streams(&stdout, &stderr),
        exit_code: status.code().unwrap_or(-1),
        duration_ms: start.elapsed().as_millis() as u64,
    })
}

/// Collapse an execution outcome into the persisted output string.
///
/// A clean exit yields the captured text verbatim. Non-zero exits,
/// spawn failures, and timeouts are all prefixed with [`ERROR_TAG`] so
/// failed runs stay distinguishable in the audit trail.
pub fn fold_output(result: Result<ShellOutput, ExecError>) -> String {
    match result {
        Ok(out) if out.success() => out.output,
        Ok(out) => format!("{ERROR_TAG}{}", out.output),
        Err(err) => format!("{ERROR_TAG}{err}"),
    }
}

/// Join the two captured streams into one output string, stdout first.
fn join_streams(stdout: &str, stderr: &str) -> String {
    let stdout = stdout.trim();
    let stderr = stderr.trim();
    if stderr.is_empty() {
        stdout.to_string()
    } else if stdout.is_empty() {
        stderr.to_string()
    } else {
        format!("{stdout}\n{stderr}")
    }
}

/// Read an entire output stream into a byte buffer, capped at [`MAX_OUTPUT_BYTES`].
async fn read_stream<R: AsyncRead + Unpin>(handle: Option<R>) -> Vec<u8> {
    let mut buf = Vec::new();
    if let Some(mut h) = handle {
        let _ = (&mut h)
            .take(MAX_OUTPUT_BYTES as u64)
            .read_to_end(&mut buf)
            .await;
    }
    buf
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
