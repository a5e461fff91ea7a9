//! Command-line arguments.
//!
//! The console has no subcommands; these global options configure the
//! session before the menu starts.

use clap::Parser;
use std::path::PathBuf;

/// Menu-driven console for managing DIY projects.
#[derive(Debug, Parser)]
#[command(name = "projects")]
#[command(version, about = "Manage DIY projects, their materials, steps and categories", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress diagnostic output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "PROJECTS_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "PROJECTS_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u64>,
}
