//! Task data model and the single-record line format
//!
//! A record is `<flag>|<text>` where the flag is `1` for done and `0`
//! otherwise. Lines without a `|` are kept as undone tasks.

use std::fmt;

/// Separator between the done flag and the task text
pub const FIELD_SEPARATOR: char = '|';

const FLAG_DONE: &str = "1";
const FLAG_OPEN: &str = "0";

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Whether the task has been completed
    pub done: bool,

    /// Free-text description
    pub text: String,
}

impl Task {
    /// Create a new, not yet completed task
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            done: false,
            text: text.into(),
        }
    }

    /// Mark the task as done. Repeating this is a no-op.
    pub fn complete(&mut self) {
        self.done = true;
    }

    /// Status marker shown in listings
    pub fn marker(&self) -> &'static str {
        if self.done {
            "[x]"
        } else {
            "[ ]"
        }
    }

    /// Format as a persistence record
    pub fn to_record(&self) -> String {
        let flag = if self.done { FLAG_DONE } else { FLAG_OPEN };
        format!(
            "{}{}{}",
            flag,
            FIELD_SEPARATOR,
            self.text.replace('\n', " ")
        )
    }

    /// Parse a persistence record, falling back to an undone task for
    /// lines without a flag
    pub fn from_record(line: &str) -> Self {
        Record::parse(line).into_task()
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.marker(), self.text)
    }
}

/// Outcome of parsing one persisted line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// The line carried a flag field
    Flagged(Task),

    /// No separator was found; the whole line is the task text
    Unflagged(String),
}

impl Record {
    /// Parse a line. Never fails: anything without a separator becomes
    /// [`Record::Unflagged`].
    pub fn parse(line: &str) -> Self {
        match line.split_once(FIELD_SEPARATOR) {
            Some((flag, text)) => Record::Flagged(Task {
                done: flag == FLAG_DONE,
                text: text.to_string(),
            }),
            None => Record::Unflagged(line.to_string()),
        }
    }

    pub fn is_flagged(&self) -> bool {
        matches!(self, Record::Flagged(_))
    }

    pub fn into_task(self) -> Task {
        match self {
            Record::Flagged(task) => task,
            Record::Unflagged(text) => Task::new(text),
        }
    }
}
