//! Error types for reposync-git

use thiserror::Error;

/// Result type alias using reposync-git's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Git operation error types
#[derive(Error, Debug)]
pub enum Error {
    /// Project directory not found
    #[error("Project directory not found: {path}")]
    DirectoryNotFound { path: String },

    /// Git command not found
    #[error("Git command not found. Please ensure git is installed and in PATH")]
    GitNotFound,

    /// Git operation failed
    #[error("Git operation failed: {message}")]
    GitOperation { message: String },

    /// Both pull strategies failed
    #[error("Could not reconcile local and remote history: {message}")]
    UnresolvedDivergence { message: String },

    /// Push rejected because the remote has commits the local branch lacks
    #[error("Push rejected, the remote has commits the local branch lacks: {message}. Pull first, force-push, or recreate the remote repository")]
    RemoteAhead { message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a directory not found error
    pub fn directory_not_found(path: impl Into<String>) -> Self {
        Self::DirectoryNotFound { path: path.into() }
    }

    /// Create a git operation error
    pub fn git_operation(message: impl Into<String>) -> Self {
        Self::GitOperation {
            message: message.into(),
        }
    }

    /// Create an unresolved divergence error
    pub fn unresolved_divergence(message: impl Into<String>) -> Self {
        Self::UnresolvedDivergence {
            message: message.into(),
        }
    }

    /// Create a remote ahead error
    pub fn remote_ahead(message: impl Into<String>) -> Self {
        Self::RemoteAhead {
            message: message.into(),
        }
    }
}
