// src/errors.rs

//! Crate-wide error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskordError {
    /// The input did not contain an even number of lines, so it cannot be
    /// split into task/prerequisite pairs. User-facing condition, not a
    /// defect: reported on stderr, then the program returns early without
    /// printing any ordering.
    #[error("malformed input: expected an even number of lines, got {lines}")]
    MalformedInput { lines: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TaskordError>;
