//! In-memory ordered task collection
//!
//! Positions are 1-based at this API. Removing a task shifts every later
//! task down by one; there are no stable IDs.

use tracing::warn;

use super::error::{Result, TaskError};
use super::model::{Record, Task};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Task at a 1-based position
    pub fn get(&self, index: usize) -> Option<&Task> {
        index.checked_sub(1).and_then(|i| self.tasks.get(i))
    }

    /// Append a new undone task. The caller rejects empty text.
    pub fn add(&mut self, text: impl Into<String>) {
        self.tasks.push(Task::new(text));
    }

    /// Mark the task at `index` (1-based) done and return it
    pub fn mark_done(&mut self, index: usize) -> Result<&Task> {
        let slot = self.slot(index)?;
        self.tasks[slot].complete();
        Ok(&self.tasks[slot])
    }

    /// Remove the task at `index` (1-based) and return it
    pub fn remove(&mut self, index: usize) -> Result<Task> {
        let slot = self.slot(index)?;
        Ok(self.tasks.remove(slot))
    }

    /// Snapshot of `(1-based index, task)` pairs in display order
    pub fn list(&self) -> impl Iterator<Item = (usize, &Task)> + '_ {
        self.tasks.iter().enumerate().map(|(i, task)| (i + 1, task))
    }

    /// One persistence record per task, in order
    pub fn serialize_all(&self) -> Vec<String> {
        self.tasks.iter().map(Task::to_record).collect()
    }

    /// Append every non-blank line as a task. Existing tasks are kept.
    pub fn load_from<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.push_record(line.as_ref());
        }
    }

    /// Append a single persisted line. Returns `false` for blank lines,
    /// which are skipped.
    pub(crate) fn push_record(&mut self, line: &str) -> bool {
        if line.trim().is_empty() {
            return false;
        }

        let record = Record::parse(line);
        if !record.is_flagged() {
            warn!(
                "Record without flag at position {}, loading as open task",
                self.tasks.len() + 1
            );
        }
        self.tasks.push(record.into_task());
        true
    }

    fn slot(&self, index: usize) -> Result<usize> {
        let count = self.tasks.len();
        if index < 1 || index > count {
            return Err(TaskError::OutOfRange { index, count });
        }
        Ok(index - 1)
    }
}
