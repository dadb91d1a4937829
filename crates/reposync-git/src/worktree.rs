//! Working-tree operations: staging, commits, branch and tracking status

use crate::error::Result;
use crate::process::{run_git, run_git_checked, CommandResult};
use camino::Utf8Path;
use tracing::{debug, info};

/// Phrase git prints in `status` output when the local branch trails
/// its upstream.
//
// TODO: replace the phrase match with `git rev-list --count
// HEAD..@{upstream}`; the wording is locale- and version-dependent.
const BEHIND_MARKER: &str = "Your branch is behind";

/// Stage all files in the working tree
pub async fn stage_all(path: &Utf8Path) -> Result<()> {
    run_git_checked(Some(path), &["add", "."]).await?;
    debug!("Staged all changes");
    Ok(())
}

/// Whether the working tree has staged or uncommitted changes
pub async fn has_pending_changes(path: &Utf8Path) -> Result<bool> {
    let result = run_git_checked(Some(path), &["status", "--porcelain"]).await?;
    Ok(!result.stdout_trimmed().is_empty())
}

/// Create a commit with the given message
pub async fn commit(path: &Utf8Path, message: &str) -> Result<()> {
    run_git_checked(Some(path), &["commit", "-m", message]).await?;
    info!("Commit created: {}", message);
    Ok(())
}

/// Force-rename the current branch.
///
/// Capturing the outcome instead of failing lets the caller tolerate a
/// rename that cannot happen yet (e.g. an unborn branch).
pub async fn rename_current_branch(path: &Utf8Path, name: &str) -> Result<CommandResult> {
    run_git(Some(path), &["branch", "-M", name]).await
}

/// Human-readable tracking status, ignoring untracked files
pub async fn tracking_status(path: &Utf8Path) -> Result<String> {
    let result = run_git_checked(Some(path), &["status", "-uno"]).await?;
    Ok(result.stdout)
}

/// Whether a tracking-status report says the branch trails its upstream
pub fn reports_behind(status_text: &str) -> bool {
    status_text.contains(BEHIND_MARKER)
}
