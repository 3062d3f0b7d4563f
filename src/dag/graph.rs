// src/dag/graph.rs

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use tracing::debug;

use crate::dag::interner::TaskId;

/// Dependency graph over interned task IDs.
///
/// Edge direction: prerequisite → dependent, mirroring execution order.
/// Built once from the interned pair sequence, then read-only during
/// scheduling. Parallel edges are kept: a duplicate input pair contributes
/// one extra in-degree unit, and the scheduler consumes each unit
/// independently.
#[derive(Debug, Clone)]
pub struct DepGraph {
    graph: DiGraph<(), ()>,
    in_degree: Vec<u32>,
}

impl DepGraph {
    /// Build the graph from the interned line sequence.
    ///
    /// `pair_ids` is the full input, already resolved to IDs: element `2k`
    /// is a task and element `2k + 1` its prerequisite. `task_count` is the
    /// number of distinct names the interner produced; node indices map 1:1
    /// onto task IDs because nodes are added in ID order.
    pub fn from_pairs(task_count: usize, pair_ids: &[TaskId]) -> Self {
        debug_assert!(pair_ids.len() % 2 == 0, "input lines must pair up");

        let mut graph = DiGraph::with_capacity(task_count, pair_ids.len() / 2);
        for _ in 0..task_count {
            graph.add_node(());
        }

        let mut in_degree = vec![0u32; task_count];
        for pair in pair_ids.chunks_exact(2) {
            let (task, prereq) = (pair[0], pair[1]);
            graph.add_edge(NodeIndex::new(prereq), NodeIndex::new(task), ());
            in_degree[task] += 1;
        }

        debug!(
            tasks = task_count,
            edges = graph.edge_count(),
            "dependency graph built"
        );

        Self { graph, in_degree }
    }

    /// Number of distinct tasks (graph nodes).
    pub fn task_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Unresolved-prerequisite counts, indexed by task ID.
    pub fn in_degrees(&self) -> &[u32] {
        &self.in_degree
    }

    /// Tasks that list `id` as a prerequisite, once per edge.
    ///
    /// Parallel edges yield the same dependent multiple times; that is what
    /// makes the per-edge in-degree decrement in the scheduler line up.
    pub fn dependents_of(&self, id: TaskId) -> impl Iterator<Item = TaskId> + '_ {
        self.graph
            .neighbors_directed(NodeIndex::new(id), Direction::Outgoing)
            .map(|n| n.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_pairs_accumulate_in_degree() {
        // Task 0 depends on task 1, listed twice.
        let graph = DepGraph::from_pairs(2, &[0, 1, 0, 1]);
        assert_eq!(graph.in_degrees(), &[2, 0]);
        assert_eq!(graph.dependents_of(1).count(), 2);
    }

    #[test]
    fn self_loop_counts_against_its_own_task() {
        let graph = DepGraph::from_pairs(1, &[0, 0]);
        assert_eq!(graph.in_degrees(), &[1]);
        assert_eq!(graph.dependents_of(0).collect::<Vec<_>>(), vec![0]);
    }
}
