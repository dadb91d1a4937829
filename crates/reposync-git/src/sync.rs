//! Synchronization mode resolution and execution

use crate::error::{Error, Result};
use crate::process::{run_git, run_git_checked};
use crate::remote::fetch_remote;
use crate::worktree::{reports_behind, tracking_status};
use camino::Utf8Path;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info, warn};

/// How to synchronize with the remote.
///
/// `Auto` is a request, not an executable mode: it resolves to `Pull`
/// or `Push` before anything touches the remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMode {
    /// Inspect tracking status and pick pull or push
    Auto,
    /// Integrate remote commits into the local branch
    Pull,
    /// Publish local commits, setting the upstream
    Push,
    /// Overwrite remote history with local history
    Force,
}

impl FromStr for SyncMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "pull" => Ok(Self::Pull),
            "push" => Ok(Self::Push),
            "force" => Ok(Self::Force),
            other => Err(format!(
                "unknown sync mode '{}', expected auto, pull, push or force",
                other
            )),
        }
    }
}

impl fmt::Display for SyncMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Auto => "auto",
            Self::Pull => "pull",
            Self::Push => "push",
            Self::Force => "force",
        };
        write!(f, "{}", s)
    }
}

/// Resolve `Auto` into `Pull` or `Push`; other modes pass through.
///
/// Fetches from the remote first so the tracking status is current; a
/// failing fetch is best-effort and only logged.
pub async fn resolve_mode(path: &Utf8Path, mode: SyncMode, remote: &str) -> Result<SyncMode> {
    if mode != SyncMode::Auto {
        return Ok(mode);
    }

    match fetch_remote(path, remote).await {
        Ok(result) if !result.success => {
            debug!("Fetch from '{}' failed: {}", remote, result.stderr_trimmed());
        }
        Ok(_) => {}
        Err(e) => debug!("Fetch from '{}' failed: {}", remote, e),
    }

    let status = tracking_status(path).await?;
    let resolved = if reports_behind(&status) {
        SyncMode::Pull
    } else {
        SyncMode::Push
    };

    info!("Auto mode resolved to: {}", resolved);
    Ok(resolved)
}

/// Pull from the remote, falling back to a rebase pull.
///
/// First strategy allows unrelated-history merges; if it fails the
/// captured stderr is logged and a rebase pull is attempted. A second
/// failure means the divergence cannot be resolved here.
pub async fn pull_with_fallback(path: &Utf8Path, remote: &str, branch: &str) -> Result<()> {
    let result = run_git(
        Some(path),
        &["pull", remote, branch, "--allow-unrelated-histories"],
    )
    .await?;

    if result.success {
        info!("Pull from '{}/{}' completed", remote, branch);
        return Ok(());
    }

    warn!(
        "Pull failed, retrying with rebase: {}",
        result.stderr_trimmed()
    );

    let result = run_git(Some(path), &["pull", "--rebase", remote, branch]).await?;

    if !result.success {
        return Err(Error::unresolved_divergence(
            result.stderr_trimmed().to_string(),
        ));
    }

    info!("Rebase pull from '{}/{}' completed", remote, branch);
    Ok(())
}

/// Push the branch, setting its upstream.
///
/// A rejected push means the remote has history the local branch
/// lacks; no fallback strategy is attempted.
pub async fn push_upstream(path: &Utf8Path, remote: &str, branch: &str) -> Result<()> {
    let result = run_git(Some(path), &["push", "-u", remote, branch]).await?;

    if !result.success {
        return Err(Error::remote_ahead(result.stderr_trimmed().to_string()));
    }

    info!("Push to '{}/{}' completed", remote, branch);
    Ok(())
}

/// Overwrite remote history with local history
pub async fn force_push(path: &Utf8Path, remote: &str, branch: &str) -> Result<()> {
    run_git_checked(Some(path), &["push", remote, branch, "--force"]).await?;
    info!("Force push to '{}/{}' completed", remote, branch);
    Ok(())
}
