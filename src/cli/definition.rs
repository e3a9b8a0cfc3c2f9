//! Command-line argument definitions

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "Interactive to-do list backed by a plain text file")]
#[command(version)]
#[command(
    long_about = "Interactive to-do list backed by a plain text file.\n\n\
    Run without a subcommand to start the session. Tasks are loaded from the \
    task file at startup and written back when the session ends."
)]
pub struct Cli {
    /// Task file (defaults to the configured file, or tasks.txt)
    #[arg(short, long, env = "TASKLIST_FILE", global = true)]
    pub file: Option<PathBuf>,

    /// Alternative configuration file
    #[arg(long, env = "TASKLIST_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
