// src/input.rs

//! Input reading: collect raw lines and check the pairing precondition.
//!
//! No per-line validation happens here. Empty strings, duplicate pairs and
//! self-referential pairs are all legal task data; the only structural
//! requirement is that lines pair up as `(task, prerequisite)`.

use std::io::BufRead;

use tracing::debug;

use crate::errors::{Result, TaskordError};

/// Read every line from `reader`, preserving order, until end of input.
pub fn read_lines(reader: impl BufRead) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(line?);
    }
    debug!(count = lines.len(), "collected input lines");
    Ok(lines)
}

/// Enforce the structural precondition: an even number of lines.
pub fn ensure_even(lines: &[String]) -> Result<()> {
    if lines.len() % 2 != 0 {
        return Err(TaskordError::MalformedInput { lines: lines.len() });
    }
    Ok(())
}
