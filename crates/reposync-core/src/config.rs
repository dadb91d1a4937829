//! Configuration file loading

use crate::error::{Error, Result};
use crate::types::SyncWorkflowConfig;
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::fs;
use tracing::debug;

/// Configuration file names to search for
const CONFIG_FILE_NAMES: &[&str] = &["reposync.yaml", "reposync.yml"];

/// On-disk configuration file shape
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ReposyncConfigFile {
    /// Sync workflow settings
    #[serde(default)]
    pub sync: SyncWorkflowConfig,
}

/// Loaded reposync configuration
#[derive(Debug, Clone)]
pub struct ReposyncConfig {
    /// The parsed configuration
    pub config: ReposyncConfigFile,

    /// Path to the configuration file, when one was found
    pub config_path: Option<Utf8PathBuf>,
}

impl ReposyncConfig {
    /// Load configuration from the specified path or search for it.
    ///
    /// With no explicit path and no `reposync.yaml`/`reposync.yml` in
    /// the working directory, defaults are used.
    pub fn load(path: Option<&Utf8Path>) -> Result<Self> {
        if let Some(p) = path {
            let content = fs::read_to_string(p).map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::config_not_found(p.as_str())
                } else {
                    Error::Io(e)
                }
            })?;
            let config: ReposyncConfigFile = serde_yaml_ng::from_str(&content)?;
            return Ok(Self {
                config,
                config_path: Some(p.to_owned()),
            });
        }

        for name in CONFIG_FILE_NAMES {
            let candidate = Utf8PathBuf::from(name);
            if candidate.exists() {
                debug!("Found configuration file: {}", candidate);
                let content = fs::read_to_string(&candidate)?;
                let config: ReposyncConfigFile = serde_yaml_ng::from_str(&content)?;
                return Ok(Self {
                    config,
                    config_path: Some(candidate),
                });
            }
        }

        debug!("No configuration file found, using defaults");
        Ok(Self {
            config: ReposyncConfigFile::default(),
            config_path: None,
        })
    }

    /// The sync workflow settings
    pub fn sync(&self) -> &SyncWorkflowConfig {
        &self.config.sync
    }
}
