//! Revision resolution via the version-control tool.
//!
//! [`RevisionResolver`] shells out to `git rev-parse HEAD` and reports
//! the current revision identifier. Absence is an expected state (no
//! repository, no tool installed), so the resolver returns `None`
//! instead of an error and leaves the decision to the caller. One
//! attempt per call, no retries.

use tokio::process::Command;

/// Default version-control binary.
const DEFAULT_PROGRAM: &str = "git";

/// Resolves the current source revision identifier.
#[derive(Debug, Clone)]
pub struct RevisionResolver {
    program: String,
}

impl RevisionResolver {
    /// Resolver backed by the `git` binary on `PATH`.
    pub fn new() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
        }
    }

    /// Resolver backed by a different binary. Intended for tests, which
    /// substitute a stub that prints a fixed revision.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Current revision identifier, or `None` if the tool is absent,
    /// exits non-zero, or prints nothing.
    pub async fn resolve(&self) -> Option<String> {
        let output = match Command::new(&self.program)
            .args(["rev-parse", "HEAD"])
            .output()
            .await
        {
            Ok(output) => output,
            Err(err) => {
                tracing::debug!(program = %self.program, error = %err, "Revision lookup failed to start");
                return None;
            }
        };

        if !output.status.success() {
            tracing::debug!(
                program = %self.program,
                code = output.status.code(),
                "Revision lookup exited non-zero"
            );
            return None;
        }

        let revision = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if revision.is_empty() {
            return None;
        }
        Some(revision)
    }
}

impl Default for RevisionResolver {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
