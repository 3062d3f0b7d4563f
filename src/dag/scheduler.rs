// src/dag/scheduler.rs

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::{debug, info};

use crate::dag::graph::DepGraph;
use crate::dag::interner::{Interner, TaskId};

/// Outcome of one scheduling run.
///
/// The two cases are mutually exclusive and exhaustive: either every task
/// was emitted, or the leftover tasks contain at least one cycle and no
/// partial ordering is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleOutcome {
    /// Every task ID, in a valid topological order.
    Ordered(Vec<TaskId>),
    /// At least one dependency cycle among the unemitted tasks.
    Cycle,
}

/// Priority-driven Kahn's algorithm over an immutable [`DepGraph`].
///
/// The scheduler owns the only mutable per-run state: its working copy of
/// the in-degree table and the ready heap. The ready heap holds every task
/// whose in-degree has reached zero, keyed by name through the interner's
/// immutable ID → name table, so each step emits the lexicographically
/// smallest (byte-wise, case-sensitive) ready name and then releases that
/// task's dependents.
pub struct Scheduler<'a> {
    graph: &'a DepGraph,
    interner: &'a Interner,
    in_degree: Vec<u32>,
    // Reverse turns the max-heap into a min-heap on (name, id). Names are
    // unique per the interner, so the ID never decides the order.
    ready: BinaryHeap<Reverse<(&'a str, TaskId)>>,
}

impl<'a> Scheduler<'a> {
    /// Seed the ready heap with every task that has no prerequisites.
    pub fn new(graph: &'a DepGraph, interner: &'a Interner) -> Self {
        let in_degree = graph.in_degrees().to_vec();

        let mut ready = BinaryHeap::new();
        for (id, &degree) in in_degree.iter().enumerate() {
            if degree == 0 {
                ready.push(Reverse((interner.name_of(id), id)));
            }
        }

        Self {
            graph,
            interner,
            in_degree,
            ready,
        }
    }

    /// Run to exhaustion or deadlock.
    ///
    /// Consumes the scheduler: one run per input batch.
    pub fn run(mut self) -> ScheduleOutcome {
        let total = self.graph.task_count();
        let mut order = Vec::with_capacity(total);

        while let Some(Reverse((name, id))) = self.ready.pop() {
            debug!(task = name, "emitting ready task");
            order.push(id);

            for dependent in self.graph.dependents_of(id) {
                self.in_degree[dependent] -= 1;
                if self.in_degree[dependent] == 0 {
                    self.ready
                        .push(Reverse((self.interner.name_of(dependent), dependent)));
                }
            }
        }

        if order.len() == total {
            info!(tasks = total, "topological order complete");
            ScheduleOutcome::Ordered(order)
        } else {
            info!(
                emitted = order.len(),
                tasks = total,
                "tasks left unresolved; dependency cycle"
            );
            ScheduleOutcome::Cycle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule(task_count: usize, pair_ids: &[TaskId], names: &[&str]) -> ScheduleOutcome {
        let mut interner = Interner::default();
        for name in names {
            interner.intern(name);
        }
        assert_eq!(interner.len(), task_count);
        let graph = DepGraph::from_pairs(task_count, pair_ids);
        Scheduler::new(&graph, &interner).run()
    }

    #[test]
    fn empty_graph_orders_nothing() {
        let outcome = schedule(0, &[], &[]);
        assert_eq!(outcome, ScheduleOutcome::Ordered(vec![]));
    }

    #[test]
    fn ready_ties_break_by_name_not_id() {
        // IDs in first-seen order: Z=0, A=1. Both start ready.
        let outcome = schedule(2, &[], &["Z", "A"]);
        assert_eq!(outcome, ScheduleOutcome::Ordered(vec![1, 0]));
    }

    #[test]
    fn duplicate_edges_need_both_decrements() {
        // B (id 0) depends on A (id 1) twice; both edges must be consumed
        // before B becomes ready.
        let outcome = schedule(2, &[0, 1, 0, 1], &["B", "A"]);
        assert_eq!(outcome, ScheduleOutcome::Ordered(vec![1, 0]));
    }

    #[test]
    fn two_node_cycle_is_detected() {
        let outcome = schedule(2, &[0, 1, 1, 0], &["A", "B"]);
        assert_eq!(outcome, ScheduleOutcome::Cycle);
    }

    #[test]
    fn cycle_in_one_component_suppresses_all_output() {
        // C is free-standing and would be emitted, but A <-> B deadlock, so
        // the outcome is Cycle with no partial ordering.
        let outcome = schedule(3, &[0, 1, 1, 0], &["A", "B", "C"]);
        assert_eq!(outcome, ScheduleOutcome::Cycle);
    }
}
