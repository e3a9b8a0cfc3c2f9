//! Command line parsing for the interactive session

use thiserror::Error;

use crate::task::TaskError;

/// One-line summaries printed by `help`
pub const HELP_ENTRIES: &[(&str, &str)] = &[
    ("list", "show all tasks"),
    ("add <desc>", "add new task"),
    ("done <num>", "mark task as done"),
    ("remove <num>", "remove task"),
    ("help", "show this help"),
    ("exit", "save and exit"),
];

const HELP_COL_USAGE: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Add(String),
    Done(String),
    Remove(String),
    Help,
    Exit,
    Unknown(String),
}

impl Command {
    /// Parse one input line. Blank lines yield `None`.
    ///
    /// The first whitespace-delimited word is the command (case-insensitive);
    /// the trimmed remainder is its argument.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (word, arg) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "list" => Command::List,
            "add" => Command::Add(arg.to_string()),
            "done" => Command::Done(arg.to_string()),
            "remove" => Command::Remove(arg.to_string()),
            "help" => Command::Help,
            "exit" => Command::Exit,
            other => Command::Unknown(other.to_string()),
        };
        Some(command)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Usage: {command} <task number>")]
    MissingArgument { command: &'static str },

    #[error("Invalid number format.")]
    InvalidNumber { input: String },

    #[error("Invalid task number.")]
    OutOfRange { number: i64, count: usize },
}

impl From<TaskError> for CommandError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::OutOfRange { index, count } => CommandError::OutOfRange {
                number: i64::try_from(index).unwrap_or(i64::MAX),
                count,
            },
        }
    }
}

/// Resolve a user-supplied task number against a list of `count` tasks.
///
/// Returns the 0-based position on success.
pub fn parse_index(command: &'static str, arg: &str, count: usize) -> Result<usize, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingArgument { command });
    }

    let number: i64 = arg.parse().map_err(|_| CommandError::InvalidNumber {
        input: arg.to_string(),
    })?;

    match usize::try_from(number) {
        Ok(n) if (1..=count).contains(&n) => Ok(n - 1),
        _ => Err(CommandError::OutOfRange { number, count }),
    }
}

/// Render the help block
pub fn help_text() -> String {
    let mut output = String::from("Commands:\n");
    for (usage, summary) in HELP_ENTRIES {
        output.push_str(&format!(
            "  {:<width$} - {}\n",
            usage,
            summary,
            width = HELP_COL_USAGE
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_blank_lines() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("   \t "), None);
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("list"), Some(Command::List));
        assert_eq!(Command::parse("help"), Some(Command::Help));
        assert_eq!(Command::parse("exit"), Some(Command::Exit));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Command::parse("LIST"), Some(Command::List));
        assert_eq!(
            Command::parse("  Add Buy milk  "),
            Some(Command::Add("Buy milk".to_string()))
        );
        assert_eq!(Command::parse("eXiT"), Some(Command::Exit));
    }

    #[test]
    fn test_parse_argument_is_trimmed_remainder() {
        assert_eq!(
            Command::parse("add   Buy   milk "),
            Some(Command::Add("Buy   milk".to_string()))
        );
        assert_eq!(
            Command::parse("done\t3"),
            Some(Command::Done("3".to_string()))
        );
        assert_eq!(Command::parse("remove"), Some(Command::Remove(String::new())));
    }

    #[test]
    fn test_parse_argument_keeps_case() {
        assert_eq!(
            Command::parse("ADD Call Mom"),
            Some(Command::Add("Call Mom".to_string()))
        );
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            Command::parse("Frobnicate now"),
            Some(Command::Unknown("frobnicate".to_string()))
        );
    }

    #[test]
    fn test_parse_index_in_range() {
        assert_eq!(parse_index("done", "1", 3), Ok(0));
        assert_eq!(parse_index("done", "3", 3), Ok(2));
        assert_eq!(parse_index("done", "+2", 3), Ok(1));
    }

    #[test]
    fn test_parse_index_missing() {
        let err = parse_index("remove", "", 3).unwrap_err();
        assert_eq!(err, CommandError::MissingArgument { command: "remove" });
        assert_eq!(err.to_string(), "Usage: remove <task number>");
    }

    #[test]
    fn test_parse_index_invalid_number() {
        for input in ["abc", "1.5", "1 2", "99999999999999999999999"] {
            let err = parse_index("done", input, 3).unwrap_err();
            assert!(
                matches!(err, CommandError::InvalidNumber { .. }),
                "expected InvalidNumber for {input:?}"
            );
            assert_eq!(err.to_string(), "Invalid number format.");
        }
    }

    #[test]
    fn test_parse_index_out_of_range() {
        for input in ["0", "4", "-1"] {
            let err = parse_index("done", input, 3).unwrap_err();
            assert!(matches!(err, CommandError::OutOfRange { .. }));
            assert_eq!(err.to_string(), "Invalid task number.");
        }
        assert!(parse_index("done", "1", 0).is_err());
    }

    #[test]
    fn test_parse_index_accepts_values_beyond_i32() {
        let err = parse_index("done", "2147483648", 3).unwrap_err();
        assert_eq!(
            err,
            CommandError::OutOfRange {
                number: 2_147_483_648,
                count: 3
            }
        );
    }

    #[test]
    fn test_store_range_error_reads_like_parse_error() {
        let err: CommandError = TaskError::OutOfRange { index: 7, count: 2 }.into();
        assert_eq!(err, CommandError::OutOfRange { number: 7, count: 2 });
        assert_eq!(err.to_string(), "Invalid task number.");
    }

    #[test]
    fn test_help_text_lists_every_command() {
        let help = help_text();
        assert!(help.starts_with("Commands:\n"));
        for word in ["list", "add", "done", "remove", "help", "exit"] {
            assert!(help.contains(&format!("  {word}")), "missing {word}");
        }
        assert_eq!(help.lines().count(), HELP_ENTRIES.len() + 1);
    }
}
