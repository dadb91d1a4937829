//! Sync command: prompt for missing inputs, run the pipeline

use anyhow::{anyhow, Context, Result};
use camino::Utf8Path;
use dialoguer::{Input, Password};
use std::str::FromStr;

use crate::cli::SyncArgs;
use crate::output;
use reposync_core::ReposyncConfig;
use reposync_git::{RemoteDescriptor, SyncMode, SyncPipeline};

/// Run the sync pipeline
pub async fn run(args: SyncArgs, config_path: Option<&Utf8Path>) -> Result<()> {
    output::header("Reposync");

    let config = ReposyncConfig::load(config_path).context("Failed to load configuration")?;
    if let Some(path) = &config.config_path {
        tracing::debug!("Loaded configuration from {}", path);
    }

    let inputs = collect_inputs(args)?;

    output::kv("Project", &inputs.project);
    output::kv("Repository", &inputs.remote.url);
    output::kv("Username", &inputs.remote.username);
    output::kv("Mode", &inputs.mode.to_string());
    println!();

    let pipeline = SyncPipeline::new(
        inputs.project.clone(),
        inputs.remote,
        Some(inputs.mode),
        config.sync().clone(),
    );

    let pb = output::spinner("Running pipeline...");
    let result = pipeline.run().await;
    pb.finish_and_clear();

    let report = match result {
        Ok(report) => report,
        Err(e) => {
            output::error(&format!("Pipeline failed: {}", e));
            return Err(e.into());
        }
    };

    if report.initialized {
        output::info("Repository initialized");
    }
    if report.gitignore_written {
        output::info("Default .gitignore created");
    }
    if report.committed {
        output::info("Setup commit created");
    }
    if !report.branch_normalized {
        output::warning("Branch rename failed; continuing on the current branch");
    }
    output::success(&format!("Synchronized ({})", report.mode));

    Ok(())
}

/// Resolved sync inputs, after flags and prompts
struct SyncInputs {
    project: String,
    remote: RemoteDescriptor,
    mode: SyncMode,
}

/// Fill in any inputs not provided as flags.
///
/// Interactive runs prompt for project, URL, username, an optional
/// token (blank means none) and the mode (defaulting to auto).
/// Non-interactive runs require the mandatory flags.
fn collect_inputs(args: SyncArgs) -> Result<SyncInputs> {
    let project = required_input(args.project, "Project directory", args.non_interactive)?;
    let repo_url = required_input(args.repo_url, "Repository URL", args.non_interactive)?;
    let username = required_input(args.username, "Git username", args.non_interactive)?;

    let token = match args.token {
        Some(token) => Some(token),
        None if args.non_interactive => None,
        None => {
            let token: String = Password::new()
                .with_prompt("Access token (optional)")
                .allow_empty_password(true)
                .interact()?;
            Some(token)
        }
    };
    // Blank token means none
    let token = token.filter(|t| !t.trim().is_empty());

    let mode = match args.mode {
        Some(mode) => mode,
        None if args.non_interactive => "auto".to_string(),
        None => Input::new()
            .with_prompt("Mode (auto/pull/push/force)")
            .default("auto".to_string())
            .interact_text()?,
    };
    let mode = SyncMode::from_str(&mode).map_err(|e| anyhow!(e))?;

    Ok(SyncInputs {
        remote: RemoteDescriptor::new(&repo_url, username, token),
        project,
        mode,
    })
}

/// Take a flag value or prompt for it; non-interactive runs must pass
/// the flag.
fn required_input(value: Option<String>, prompt: &str, non_interactive: bool) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None if non_interactive => Err(anyhow!(
            "{} is required in non-interactive mode",
            prompt
        )),
        None => Ok(Input::new().with_prompt(prompt).interact_text()?),
    }
}
