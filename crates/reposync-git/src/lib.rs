//! # reposync-git
//!
//! Git operations library for the reposync CLI providing:
//! - Repository initialization and ignore-file provisioning
//! - Git configuration management
//! - Remote configuration with embedded credentials
//! - Synchronization mode resolution and execution (pull/push/force)
//! - The setup-and-sync pipeline tying the steps together
//!
//! # Examples
//!
//! ## Run the full pipeline
//!
//! ```no_run
//! use reposync_git::{RemoteDescriptor, SyncPipeline};
//! use reposync_core::types::SyncWorkflowConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let remote = RemoteDescriptor::new(
//!     "https://github.com/user/repo",
//!     "alice",
//!     Some("token".to_string()),
//! );
//! let pipeline = SyncPipeline::new(
//!     "/tmp/my-project",
//!     remote,
//!     None, // auto
//!     SyncWorkflowConfig::default(),
//! );
//! let report = pipeline.run().await?;
//! println!("synchronized via {}", report.mode);
//! # Ok(())
//! # }
//! ```
//!
//! ## Resolve a sync mode by hand
//!
//! ```no_run
//! use camino::Utf8Path;
//! use reposync_git::{resolve_mode, SyncMode};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let path = Utf8Path::new("/tmp/my-project");
//! let mode = resolve_mode(path, SyncMode::Auto, "origin").await?;
//! assert_ne!(mode, SyncMode::Auto);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod pipeline;
pub mod process;
pub mod remote;
pub mod repo;
pub mod sync;
pub mod worktree;

pub use error::{Error, Result};

// Re-export public API
pub use pipeline::{FailurePolicy, SyncPipeline, SyncReport};
pub use process::{check_git_available, CommandResult};
pub use remote::{
    add_remote, configure_remote, fetch_remote, get_remote_url, normalize_repo_url,
    set_remote_url, RemoteAction, RemoteDescriptor,
};
pub use repo::{ensure_gitignore, ensure_repository};
pub use sync::{force_push, pull_with_fallback, push_upstream, resolve_mode, SyncMode};
