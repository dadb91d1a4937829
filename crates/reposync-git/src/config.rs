//! Git configuration management

use crate::error::{Error, Result};
use crate::process::run_git;
use camino::Utf8Path;
use tracing::{debug, info};

/// Git configuration scope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigScope {
    /// Local repository config (.git/config)
    Local,
    /// Global user config (~/.gitconfig)
    Global,
    /// System-wide config (/etc/gitconfig)
    System,
}

impl ConfigScope {
    fn as_arg(&self) -> &'static str {
        match self {
            Self::Local => "--local",
            Self::Global => "--global",
            Self::System => "--system",
        }
    }
}

/// Set a git configuration value
///
/// # Arguments
/// * `path` - Repository path (only used for local scope)
/// * `key` - Configuration key (e.g., "user.name")
/// * `value` - Configuration value
/// * `scope` - Configuration scope
pub async fn set_config_value(
    path: Option<&Utf8Path>,
    key: &str,
    value: &str,
    scope: ConfigScope,
) -> Result<()> {
    debug!("Setting git config: {} = {}", key, value);

    let dir = if scope == ConfigScope::Local {
        path
    } else {
        None
    };

    let result = run_git(dir, &["config", scope.as_arg(), key, value]).await?;

    if !result.success {
        return Err(Error::git_operation(format!(
            "Failed to set {}: {}",
            key,
            result.stderr_trimmed()
        )));
    }

    Ok(())
}

/// Get a git configuration value
///
/// Returns the value if set, None otherwise.
pub async fn get_config_value(
    path: Option<&Utf8Path>,
    key: &str,
    scope: Option<ConfigScope>,
) -> Result<Option<String>> {
    debug!("Getting git config: {}", key);

    let mut args = vec!["config"];
    if let Some(scope) = scope {
        args.push(scope.as_arg());
    }
    args.push(key);

    let result = run_git(path, &args).await?;

    if !result.success {
        // Config value not set
        return Ok(None);
    }

    Ok(Some(result.stdout_trimmed().to_string()))
}

/// Configure the global commit identity.
///
/// Sets `user.name` only; `user.email` is left to the ambient git
/// config. This narrowing is intentional.
pub async fn configure_identity(username: &str) -> Result<()> {
    set_config_value(None, "user.name", username, ConfigScope::Global).await?;
    info!("Git user name set to: {}", username);
    Ok(())
}
