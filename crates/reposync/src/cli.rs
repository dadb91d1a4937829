//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

/// Reposync - automated git setup and synchronization
#[derive(Parser, Debug)]
#[command(name = "reposync")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to reposync.yaml config file
    #[arg(short, long, global = true)]
    pub config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Set up a project directory and synchronize it with its remote
    Sync(SyncArgs),

    /// Show version information
    Version(VersionArgs),
}

#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Project directory (prompted when omitted)
    #[arg(short, long)]
    pub project: Option<String>,

    /// Repository URL, with or without scheme (prompted when omitted)
    #[arg(short = 'r', long)]
    pub repo_url: Option<String>,

    /// Git username, also used for the global user.name identity
    #[arg(short = 'u', long)]
    pub username: Option<String>,

    /// Access token embedded into the remote URL (prompted when omitted;
    /// blank means none)
    #[arg(short, long)]
    pub token: Option<String>,

    /// Sync mode: auto, pull, push or force (default: auto)
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Answer prompts with defaults instead of asking
    #[arg(long)]
    pub non_interactive: bool,
}

// Version command
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
