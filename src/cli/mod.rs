//! Process-level commands: argument parsing and the session lifecycle

pub mod definition;

pub use definition::{Cli, Commands};

use anyhow::Result;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::session::{Config, ExitReason, Session, GOODBYE_MESSAGE, WELCOME_MESSAGE};
use crate::task::{Storage, TaskStore};

/// Resolve configuration, honoring an explicit config path.
///
/// A broken config file is reported on stderr and defaults are used.
pub fn resolve_config(explicit: Option<&Path>) -> Config {
    let loaded = match explicit {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    loaded.unwrap_or_else(|e| {
        warn!("Falling back to default config: {:#}", e);
        eprintln!("Warning: {:#}; using defaults", e);
        Config::default()
    })
}

/// Run one interactive session: load, loop, save.
///
/// Load and save failures are reported on `output` and never abort the
/// session. Only a failure of the input or output stream is returned.
pub fn run_session<R: BufRead, W: Write>(
    config: &Config,
    data_file: PathBuf,
    input: R,
    mut output: W,
) -> Result<()> {
    let storage = Storage::new(data_file);
    let mut store = TaskStore::new();

    if let Err(e) = storage.load_into(&mut store) {
        warn!("Load from {} failed: {}", e.path().display(), e);
        writeln!(output, "Failed to load tasks: {}", e)?;
    }

    if config.banner {
        writeln!(output, "{}", WELCOME_MESSAGE)?;
    }

    let outcome = Session::new(&mut store, input, &mut output)
        .with_prompt(config.prompt.clone())
        .run();
    match &outcome {
        Ok(ExitReason::Command) => info!("Session ended by exit command"),
        Ok(ExitReason::EndOfInput) => info!("Session ended at end of input"),
        Err(e) => warn!("Session stream failed: {}", e),
    }

    if let Err(e) = storage.save(&store) {
        warn!("Save to {} failed: {}", e.path().display(), e);
        writeln!(output, "Failed to save tasks: {}", e)?;
    }

    outcome?;
    if config.banner {
        writeln!(output, "{}", GOODBYE_MESSAGE)?;
    }
    Ok(())
}
