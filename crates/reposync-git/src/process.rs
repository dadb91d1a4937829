//! Git process execution

use crate::error::{Error, Result};
use camino::Utf8Path;
use tokio::process::Command;
use tracing::debug;

/// Outcome of a single git invocation.
///
/// Expected failures (missing remote, behind upstream, rejected push) are
/// data to branch on, not errors, so every invocation yields one of these
/// and callers decide what a nonzero exit means at their call site.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Whether the command exited with status zero
    pub success: bool,
    /// Raw exit code, if the process exited normally
    pub code: Option<i32>,
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
}

impl CommandResult {
    /// Trimmed stdout, for single-value queries like `remote get-url`
    pub fn stdout_trimmed(&self) -> &str {
        self.stdout.trim()
    }

    /// Trimmed stderr, for diagnostics
    pub fn stderr_trimmed(&self) -> &str {
        self.stderr.trim()
    }
}

/// Run a git command, capturing output.
///
/// `dir` is threaded explicitly into every invocation; the process-wide
/// working directory is never changed. Only a failure to spawn the
/// process is an `Err` here; a nonzero exit is reported through
/// [`CommandResult::success`].
pub async fn run_git(dir: Option<&Utf8Path>, args: &[&str]) -> Result<CommandResult> {
    // Log the subcommand only; arguments can carry embedded credentials
    debug!("Running: git {}", args.first().unwrap_or(&""));

    let mut cmd = Command::new("git");
    if let Some(d) = dir {
        cmd.current_dir(d);
    }
    cmd.args(args);

    let output = cmd.output().await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::GitNotFound
        } else {
            Error::Io(e)
        }
    })?;

    Ok(CommandResult {
        success: output.status.success(),
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

/// Run a git command and treat a nonzero exit as a fatal operation error.
pub async fn run_git_checked(dir: Option<&Utf8Path>, args: &[&str]) -> Result<CommandResult> {
    let result = run_git(dir, args).await?;

    if !result.success {
        return Err(Error::git_operation(format!(
            "git {} failed: {}",
            args.first().unwrap_or(&""),
            result.stderr_trimmed()
        )));
    }

    Ok(result)
}

/// Check if git is available in PATH
pub async fn check_git_available() -> Result<()> {
    let result = run_git(None, &["--version"]).await?;

    if !result.success {
        return Err(Error::GitNotFound);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_git_available() {
        check_git_available().await.expect("git should be on PATH");
    }

    #[tokio::test]
    async fn test_run_git_captures_stdout() {
        let result = run_git(None, &["--version"]).await.unwrap();
        assert!(result.success);
        assert!(result.stdout_trimmed().starts_with("git version"));
    }

    #[tokio::test]
    async fn test_run_git_reports_failure_without_error() {
        let result = run_git(None, &["definitely-not-a-subcommand"])
            .await
            .unwrap();
        assert!(!result.success);
        assert!(!result.stderr.is_empty());
    }

    #[tokio::test]
    async fn test_run_git_checked_maps_failure() {
        let err = run_git_checked(None, &["definitely-not-a-subcommand"])
            .await
            .unwrap_err();
        assert!(matches!(err, Error::GitOperation { .. }));
    }
}
