//! todo - interactive to-do list backed by a plain text file

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use std::io;
use tasklist::cli::{self, Cli, Commands};

fn main() -> Result<()> {
    if std::env::var("TASKLIST_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("tasklist=debug")
            .with_writer(io::stderr)
            .init();
    }

    let cli = Cli::parse();

    if let Some(Commands::Completion { shell }) = cli.command {
        generate(shell, &mut Cli::command(), "todo", &mut io::stdout());
        return Ok(());
    }

    let config = cli::resolve_config(cli.config.as_deref());
    let data_file = config.data_file_or(cli.file.as_deref());

    let stdin = io::stdin();
    cli::run_session(&config, data_file, stdin.lock(), io::stdout().lock())
}
