// src/dag/interner.rs

//! Identifier interning: task names to dense integer IDs.

use std::collections::HashMap;

/// Dense 0-based identifier for a task name, stable for one run.
pub type TaskId = usize;

/// Bidirectional mapping between task names and dense IDs.
///
/// IDs are assigned in strict first-seen order over the entire flattened
/// line sequence, so a name that only ever appears in prerequisite position
/// still gets the earlier ID when it shows up earlier in the input. The
/// ID → name table doubles as the key source for lexicographic scheduling
/// and never changes once interning is complete.
#[derive(Debug, Default)]
pub struct Interner {
    ids: HashMap<String, TaskId>,
    names: Vec<String>,
}

impl Interner {
    /// Return the ID for `name`, assigning the next dense ID on first sight.
    ///
    /// Any string is a valid task name, including the empty string.
    pub fn intern(&mut self, name: &str) -> TaskId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = self.names.len();
        self.ids.insert(name.to_string(), id);
        self.names.push(name.to_string());
        id
    }

    /// Name for an interned ID.
    pub fn name_of(&self, id: TaskId) -> &str {
        &self.names[id]
    }

    /// Number of distinct task names seen so far.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
