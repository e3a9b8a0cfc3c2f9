//! tasklist - a single-user to-do list kept in a flat text file
//!
//! The [`task`] module owns the data and its file format, [`session`] runs
//! the interactive command loop, and [`cli`] ties both to the process.

pub mod cli;
pub mod session;
pub mod task;
