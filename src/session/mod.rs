//! Interactive read-eval-print session over a task store

pub mod command;
pub mod config;

pub use command::{help_text, parse_index, Command, CommandError};
pub use config::{get_app_dir, load_config, Config};

use std::io::{self, BufRead, Write};
use tracing::debug;

use crate::task::TaskStore;

pub const WELCOME_MESSAGE: &str = "Welcome to ToDo CLI. Type 'help' for commands.";
pub const GOODBYE_MESSAGE: &str = "Goodbye!";
pub const DEFAULT_PROMPT: &str = "> ";

const EMPTY_LIST_HINT: &str = "No tasks. Add one with: add Buy groceries";
const ADD_USAGE: &str = "Usage: add <task description>";
const UNKNOWN_COMMAND: &str = "Unknown command. Type 'help' to see commands.";

/// Why the session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The user typed `exit`
    Command,
    /// The input stream closed
    EndOfInput,
}

/// Command loop bound to one store, one input and one output.
///
/// The session only mutates the store; loading and saving happen in the
/// caller around [`Session::run`].
pub struct Session<'a, R, W> {
    store: &'a mut TaskStore,
    input: R,
    output: W,
    prompt: String,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(store: &'a mut TaskStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Read and dispatch commands until `exit` or end of input.
    ///
    /// Only I/O failures on the input or output streams are returned;
    /// every command-level mistake, including undecodable input, is
    /// reported to the user and the loop continues.
    pub fn run(&mut self) -> io::Result<ExitReason> {
        let mut buf = Vec::new();
        loop {
            write!(self.output, "{}", self.prompt)?;
            self.output.flush()?;

            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                debug!("Input closed, ending session");
                return Ok(ExitReason::EndOfInput);
            }

            // Invalid UTF-8 is replaced, not rejected
            let line = String::from_utf8_lossy(&buf);
            let Some(command) = Command::parse(&line) else {
                continue;
            };

            if command == Command::Exit {
                debug!("Exit requested");
                return Ok(ExitReason::Command);
            }
            self.dispatch(command)?;
        }
    }

    /// Execute a single command against the store
    pub fn dispatch(&mut self, command: Command) -> io::Result<()> {
        debug!("Dispatching {:?}", command);
        match command {
            Command::List => self.list(),
            Command::Add(text) => self.add(&text),
            Command::Done(arg) => self.done(&arg),
            Command::Remove(arg) => self.remove(&arg),
            Command::Help => write!(self.output, "{}", help_text()),
            Command::Exit => Ok(()),
            Command::Unknown(_) => writeln!(self.output, "{}", UNKNOWN_COMMAND),
        }
    }

    fn list(&mut self) -> io::Result<()> {
        if self.store.is_empty() {
            return writeln!(self.output, "{}", EMPTY_LIST_HINT);
        }
        for (index, task) in self.store.list() {
            writeln!(self.output, "{}. {}", index, task)?;
        }
        Ok(())
    }

    fn add(&mut self, text: &str) -> io::Result<()> {
        if text.is_empty() {
            return writeln!(self.output, "{}", ADD_USAGE);
        }
        self.store.add(text);
        writeln!(self.output, "Added: {}", text)
    }

    fn done(&mut self, arg: &str) -> io::Result<()> {
        let store = &mut *self.store;
        let outcome = parse_index("done", arg, store.len())
            .and_then(|index| Ok(store.mark_done(index + 1)?.text.clone()));
        match outcome {
            Ok(text) => writeln!(self.output, "Marked done: {}", text),
            Err(e) => self.report(e),
        }
    }

    fn remove(&mut self, arg: &str) -> io::Result<()> {
        let store = &mut *self.store;
        let outcome = parse_index("remove", arg, store.len())
            .and_then(|index| store.remove(index + 1).map_err(CommandError::from));
        match outcome {
            Ok(task) => writeln!(self.output, "Removed: {}", task.text),
            Err(e) => self.report(e),
        }
    }

    fn report(&mut self, err: CommandError) -> io::Result<()> {
        debug!("Command rejected: {:?}", err);
        writeln!(self.output, "{}", err)
    }
}
