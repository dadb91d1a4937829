//! The setup-and-sync pipeline
//!
//! Runs the fixed sequence: identity, repository init, ignore file,
//! staging, conditional commit, remote configuration, branch
//! normalization, synchronization. Every step is idempotent; a fatal
//! failure short-circuits the rest of the run and already-completed
//! steps are not rolled back.

use crate::config::configure_identity;
use crate::error::{Error, Result};
use crate::process::check_git_available;
use crate::remote::{configure_remote, RemoteAction, RemoteDescriptor};
use crate::repo::{ensure_gitignore, ensure_repository};
use crate::sync::{force_push, pull_with_fallback, push_upstream, resolve_mode, SyncMode};
use crate::worktree::{commit, has_pending_changes, rename_current_branch, stage_all};
use camino::{Utf8Path, Utf8PathBuf};
use reposync_core::types::SyncWorkflowConfig;
use tracing::{info, warn};

/// How a step's failure is treated by the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Failure aborts the run
    Fatal,
    /// Failure is logged and the run continues
    Tolerated,
}

/// Apply a step's failure policy to its result.
///
/// Fatal failures propagate; tolerated ones are logged and collapsed
/// to `None` so the caller can keep going.
fn apply_policy<T>(step: &str, policy: FailurePolicy, result: Result<T>) -> Result<Option<T>> {
    match (policy, result) {
        (_, Ok(value)) => Ok(Some(value)),
        (FailurePolicy::Fatal, Err(e)) => Err(e),
        (FailurePolicy::Tolerated, Err(e)) => {
            warn!("Step '{}' failed (tolerated): {}", step, e);
            Ok(None)
        }
    }
}

/// What a pipeline run did
#[derive(Debug, Clone)]
pub struct SyncReport {
    /// Whether a repository was initialized (false: already present)
    pub initialized: bool,
    /// Whether a default ignore file was written
    pub gitignore_written: bool,
    /// Whether a commit was created (false: nothing to commit)
    pub committed: bool,
    /// Whether the branch rename succeeded (failure is tolerated)
    pub branch_normalized: bool,
    /// What happened to the origin remote
    pub remote_action: RemoteAction,
    /// The executed mode; never [`SyncMode::Auto`]
    pub mode: SyncMode,
}

/// The sync pipeline for one project directory.
pub struct SyncPipeline {
    project_dir: Utf8PathBuf,
    remote: RemoteDescriptor,
    mode: SyncMode,
    workflow: SyncWorkflowConfig,
}

impl SyncPipeline {
    /// Build a pipeline. `mode` defaults to auto when `None`.
    pub fn new(
        project_dir: impl Into<Utf8PathBuf>,
        remote: RemoteDescriptor,
        mode: Option<SyncMode>,
        workflow: SyncWorkflowConfig,
    ) -> Self {
        Self {
            project_dir: project_dir.into(),
            remote,
            mode: mode.unwrap_or(SyncMode::Auto),
            workflow,
        }
    }

    /// The project directory this pipeline operates on
    pub fn project_dir(&self) -> &Utf8Path {
        &self.project_dir
    }

    /// Run the full sequence.
    ///
    /// Validates the project directory before any external invocation;
    /// a missing directory fails without side effects.
    pub async fn run(&self) -> Result<SyncReport> {
        if !self.project_dir.is_dir() {
            return Err(Error::directory_not_found(self.project_dir.as_str()));
        }

        check_git_available().await?;

        let path = self.project_dir.as_path();
        let branch = self.workflow.default_branch.as_str();
        let origin = self.workflow.origin_remote.as_str();

        // 1. Identity (global user.name only)
        configure_identity(&self.remote.username).await?;

        // 2. Repository init
        let initialized = ensure_repository(path).await?;

        // 3. Ignore file
        let gitignore_written = ensure_gitignore(path).await?;

        // 4. Staging
        stage_all(path).await?;

        // 5. Conditional commit
        let committed = if has_pending_changes(path).await? {
            commit(path, &self.workflow.initial_commit_message).await?;
            true
        } else {
            info!("Nothing to commit");
            false
        };

        // 6. Remote configuration (add or overwrite)
        let remote_action = configure_remote(path, origin, &self.remote).await?;

        // 7. Branch normalization, tolerated
        let branch_normalized = apply_policy(
            "branch rename",
            FailurePolicy::Tolerated,
            rename_branch_step(path, branch).await,
        )?
        .is_some();

        // 8. Synchronization
        let mode = resolve_mode(path, self.mode, origin).await?;
        match mode {
            SyncMode::Pull => pull_with_fallback(path, origin, branch).await?,
            SyncMode::Push => push_upstream(path, origin, branch).await?,
            SyncMode::Force => force_push(path, origin, branch).await?,
            SyncMode::Auto => unreachable!("auto is resolved before execution"),
        }

        Ok(SyncReport {
            initialized,
            gitignore_written,
            committed,
            branch_normalized,
            remote_action,
            mode,
        })
    }
}

/// Branch rename as a policy-checked step: a nonzero exit becomes an
/// error value so [`apply_policy`] can decide its fate.
async fn rename_branch_step(path: &Utf8Path, branch: &str) -> Result<()> {
    let result = rename_current_branch(path, branch).await?;
    if !result.success {
        return Err(Error::git_operation(format!(
            "branch rename to '{}' failed: {}",
            branch,
            result.stderr_trimmed()
        )));
    }
    Ok(())
}
