//! Repository initialization and ignore-file provisioning

use crate::error::{Error, Result};
use crate::process::run_git_checked;
use camino::Utf8Path;
use tracing::{debug, info};

/// Default ignore-file content, written only when no ignore file exists
const DEFAULT_GITIGNORE: &str = include_str!("templates/default.gitignore");

/// Initialize a git repository at `path` unless one already exists.
///
/// Returns `true` if a repository was initialized, `false` if `.git`
/// was already present.
///
/// # Errors
/// Returns error if:
/// - Directory doesn't exist
/// - Git is not installed
/// - Git init fails
pub async fn ensure_repository(path: &Utf8Path) -> Result<bool> {
    if !path.exists() {
        return Err(Error::directory_not_found(path.as_str()));
    }

    if path.join(".git").exists() {
        debug!("Git repository already exists at: {}", path);
        return Ok(false);
    }

    run_git_checked(Some(path), &["init"]).await?;

    info!("Repository initialized at: {}", path);
    Ok(true)
}

/// Create a `.gitignore` with the default content unless one exists.
///
/// An already-present ignore file is never touched, whatever its
/// contents. Returns `true` if the file was written.
pub async fn ensure_gitignore(path: &Utf8Path) -> Result<bool> {
    let gitignore_path = path.join(".gitignore");

    if gitignore_path.exists() {
        debug!("Ignore file already present at: {}", gitignore_path);
        return Ok(false);
    }

    tokio::fs::write(&gitignore_path, DEFAULT_GITIGNORE).await?;

    info!("Ignore file created at: {}", gitignore_path);
    Ok(true)
}
