use clap::{Parser, Subcommand};
use std::path::PathBuf;
use valheim_backup_json::paths::CONFIG_FILE_NAME;

#[derive(Debug, Parser, Clone)]
#[command(name = "valheim-backup", version, about = "Back up Valheim world saves to a repository directory")]
pub struct Cli {
    /// Config file path (relative paths resolve against the working directory)
    #[arg(long, default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// Also append plain-text logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Debug, Subcommand, Clone, PartialEq, Eq)]
pub enum Command {
    /// Copy world files from the local save directory to the repository
    Upload,
    /// Copy world files from the repository to the local save directory
    Download,
    /// Print the current configuration
    Show,
    /// Create or replace the configuration interactively
    Init,
    /// Show which world files exist on each side, with sizes and timestamps
    Status,
    /// Interactive menu (default)
    Menu,
}
