//! Task management module
//!
//! This module owns the to-do list itself:
//! - Task model and the `<flag>|<text>` record format
//! - Ordered in-memory store addressed by 1-based position
//! - Flat-file load and save

pub mod error;
pub mod model;
pub mod storage;
pub mod store;

pub use error::{StorageError, TaskError};
pub use model::{Record, Task};
pub use storage::{Storage, DEFAULT_DATA_FILE};
pub use store::TaskStore;
