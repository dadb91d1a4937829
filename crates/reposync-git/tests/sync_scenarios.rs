//! Synchronization scenarios against real git repositories.
//!
//! Remotes are bare repositories on the local filesystem so pull, push
//! and force-push run end to end without touching the network.

use camino::{Utf8Path, Utf8PathBuf};
use reposync_git::config::{set_config_value, ConfigScope};
use reposync_git::process::{run_git, run_git_checked};
use reposync_git::worktree::{rename_current_branch, stage_all};
use reposync_git::{
    force_push, pull_with_fallback, push_upstream, resolve_mode, Error, SyncMode,
};
use tempfile::TempDir;

fn utf8(path: &std::path::Path) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(path.to_path_buf()).expect("temp path should be utf-8")
}

async fn init_repo(path: &Utf8Path) {
    run_git_checked(Some(path), &["init"]).await.unwrap();
    set_identity(path).await;
}

async fn set_identity(path: &Utf8Path) {
    set_config_value(Some(path), "user.name", "Test User", ConfigScope::Local)
        .await
        .unwrap();
    set_config_value(
        Some(path),
        "user.email",
        "test@example.com",
        ConfigScope::Local,
    )
    .await
    .unwrap();
}

async fn commit_file(path: &Utf8Path, name: &str, content: &str, message: &str) {
    std::fs::write(path.join(name), content).unwrap();
    stage_all(path).await.unwrap();
    run_git_checked(Some(path), &["commit", "-m", message])
        .await
        .unwrap();
}

async fn commit_count(path: &Utf8Path) -> usize {
    let result = run_git_checked(Some(path), &["rev-list", "--count", "HEAD"])
        .await
        .unwrap();
    result.stdout_trimmed().parse().unwrap()
}

/// A bare "origin" plus a primary working repo with one pushed commit.
/// Returns (tempdir, bare path, work path).
async fn seeded_remote() -> (TempDir, Utf8PathBuf, Utf8PathBuf) {
    let temp = TempDir::new().unwrap();
    let root = utf8(temp.path());

    let bare = root.join("origin.git");
    run_git_checked(
        Some(&root),
        &["init", "--bare", "--initial-branch=main", "origin.git"],
    )
    .await
    .unwrap();

    let work = root.join("work");
    std::fs::create_dir(&work).unwrap();
    init_repo(&work).await;
    commit_file(&work, "README.md", "# seed\n", "first").await;
    let renamed = rename_current_branch(&work, "main").await.unwrap();
    assert!(renamed.success);
    run_git_checked(Some(&work), &["remote", "add", "origin", bare.as_str()])
        .await
        .unwrap();
    push_upstream(&work, "origin", "main").await.unwrap();

    (temp, bare, work)
}

/// Clone the bare remote into a second working repo and push one commit
/// from it, leaving the primary repo behind.
async fn advance_remote(root: &Utf8Path, bare: &Utf8Path, name: &str) -> Utf8PathBuf {
    let other = root.join(name);
    run_git_checked(Some(root), &["clone", bare.as_str(), name])
        .await
        .unwrap();
    set_identity(&other).await;
    commit_file(&other, &format!("{}.txt", name), "remote change\n", "remote work").await;
    run_git_checked(Some(&other), &["push", "origin", "main"])
        .await
        .unwrap();
    other
}

#[tokio::test]
async fn auto_resolves_pull_when_behind() {
    let (temp, bare, work) = seeded_remote().await;
    advance_remote(&utf8(temp.path()), &bare, "other").await;

    let mode = resolve_mode(&work, SyncMode::Auto, "origin").await.unwrap();
    assert_eq!(mode, SyncMode::Pull);

    pull_with_fallback(&work, "origin", "main").await.unwrap();
    assert_eq!(commit_count(&work).await, 2);
}

#[tokio::test]
async fn auto_resolves_push_when_up_to_date() {
    let (_temp, _bare, work) = seeded_remote().await;

    let mode = resolve_mode(&work, SyncMode::Auto, "origin").await.unwrap();
    assert_eq!(mode, SyncMode::Push);
}

#[tokio::test]
async fn explicit_modes_pass_through_resolution() {
    let (_temp, _bare, work) = seeded_remote().await;

    for mode in [SyncMode::Pull, SyncMode::Push, SyncMode::Force] {
        let resolved = resolve_mode(&work, mode, "origin").await.unwrap();
        assert_eq!(resolved, mode);
    }
}

#[tokio::test]
async fn pull_falls_back_to_rebase_on_divergence() {
    let (temp, bare, work) = seeded_remote().await;
    advance_remote(&utf8(temp.path()), &bare, "other").await;

    // Diverge locally; ff-only makes the first pull strategy fail so
    // the rebase fallback is the one that reconciles.
    commit_file(&work, "local.txt", "local change\n", "local work").await;
    set_config_value(Some(&work), "pull.ff", "only", ConfigScope::Local)
        .await
        .unwrap();

    pull_with_fallback(&work, "origin", "main").await.unwrap();

    // Rebase keeps history linear: seed + remote + local, no merges
    assert_eq!(commit_count(&work).await, 3);
    let merges = run_git_checked(Some(&work), &["rev-list", "--merges", "--count", "HEAD"])
        .await
        .unwrap();
    assert_eq!(merges.stdout_trimmed(), "0");
}

#[tokio::test]
async fn pull_fails_after_both_strategies() {
    let (temp, bare, work) = seeded_remote().await;

    // Conflicting edits to the same file on both sides
    let root = utf8(temp.path());
    let other = root.join("other");
    run_git_checked(Some(&root), &["clone", bare.as_str(), "other"])
        .await
        .unwrap();
    set_identity(&other).await;
    commit_file(&other, "README.md", "# remote version\n", "remote edit").await;
    run_git_checked(Some(&other), &["push", "origin", "main"])
        .await
        .unwrap();

    commit_file(&work, "README.md", "# local version\n", "local edit").await;
    set_config_value(Some(&work), "pull.ff", "only", ConfigScope::Local)
        .await
        .unwrap();

    let err = pull_with_fallback(&work, "origin", "main").await.unwrap_err();
    assert!(matches!(err, Error::UnresolvedDivergence { .. }));
}

#[tokio::test]
async fn push_rejected_when_remote_ahead() {
    let (temp, bare, work) = seeded_remote().await;
    advance_remote(&utf8(temp.path()), &bare, "other").await;

    // Divergent local commit; a plain push cannot fast-forward the remote
    commit_file(&work, "local.txt", "local change\n", "local work").await;

    let err = push_upstream(&work, "origin", "main").await.unwrap_err();
    assert!(matches!(err, Error::RemoteAhead { .. }));
    // The error text carries the remediation guidance
    let text = err.to_string();
    assert!(text.contains("Pull first") || text.contains("force-push"));
}

#[tokio::test]
async fn force_push_overwrites_remote_history() {
    let (temp, bare, work) = seeded_remote().await;
    advance_remote(&utf8(temp.path()), &bare, "other").await;

    commit_file(&work, "local.txt", "local change\n", "local work").await;

    force_push(&work, "origin", "main").await.unwrap();

    let local_head = run_git_checked(Some(&work), &["rev-parse", "HEAD"])
        .await
        .unwrap();
    let remote_head = run_git_checked(Some(&bare), &["rev-parse", "main"])
        .await
        .unwrap();
    assert_eq!(local_head.stdout_trimmed(), remote_head.stdout_trimmed());
}

#[tokio::test]
async fn fetch_failure_is_swallowed_in_auto_resolution() {
    let temp = TempDir::new().unwrap();
    let work = utf8(temp.path());
    init_repo(&work).await;
    commit_file(&work, "a.txt", "a\n", "first").await;
    rename_current_branch(&work, "main").await.unwrap();

    // Unreachable remote; fetch fails, status is not behind, so auto
    // still resolves to push
    run_git(
        Some(&work),
        &["remote", "add", "origin", "https://127.0.0.1:1/repo.git"],
    )
    .await
    .unwrap();

    let mode = resolve_mode(&work, SyncMode::Auto, "origin").await.unwrap();
    assert_eq!(mode, SyncMode::Push);
}
