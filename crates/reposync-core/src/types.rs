//! Shared configuration types

use serde::{Deserialize, Serialize};

/// Sync workflow configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SyncWorkflowConfig {
    /// Branch the pipeline normalizes to and synchronizes
    #[serde(default = "default_branch")]
    pub default_branch: String,

    /// Message used for the conditional setup commit
    #[serde(default = "default_initial_commit_message")]
    pub initial_commit_message: String,

    /// Remote name configured and synchronized against
    #[serde(default = "default_origin_remote")]
    pub origin_remote: String,
}

impl Default for SyncWorkflowConfig {
    fn default() -> Self {
        Self {
            default_branch: default_branch(),
            initial_commit_message: default_initial_commit_message(),
            origin_remote: default_origin_remote(),
        }
    }
}

fn default_branch() -> String {
    "main".to_string()
}
fn default_initial_commit_message() -> String {
    "Initial commit - Configuration du projet".to_string()
}
fn default_origin_remote() -> String {
    "origin".to_string()
}
