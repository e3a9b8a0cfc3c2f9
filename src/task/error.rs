//! Task store and storage error types

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    /// The 1-based position does not name an existing task
    #[error("Invalid task number.")]
    OutOfRange { index: usize, count: usize },
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            StorageError::Read { path, .. } | StorageError::Write { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, TaskError>;
