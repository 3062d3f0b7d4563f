// src/dag/mod.rs

//! Dependency graph representation and scheduling.
//!
//! - [`interner`] maps task names to dense IDs in first-seen order.
//! - [`graph`] holds the directed dependency graph plus in-degree counts.
//! - [`scheduler`] runs priority-driven Kahn's algorithm over the graph,
//!   always emitting the lexicographically smallest ready task.

pub mod graph;
pub mod interner;
pub mod scheduler;

pub use graph::DepGraph;
pub use interner::{Interner, TaskId};
pub use scheduler::{ScheduleOutcome, Scheduler};
