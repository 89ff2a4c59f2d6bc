//! Level assignment for layered layouts.
//!
//! A task's level is the length of the longest prerequisite chain ending at
//! it: 0 without prerequisites, otherwise one more than its deepest
//! prerequisite.

use crate::TaskGraph;
use crate::graph::TaskIndex;
use crate::order::topological_order;

/// Compute levels by propagating forward along a topological order.
///
/// `order` must list every task after all of its prerequisites, which any
/// complete [`TopologicalOrder`](crate::TopologicalOrder) guarantees. The
/// returned vector is indexed by [`TaskIndex`].
#[must_use]
pub fn assign_levels(graph: &TaskGraph, order: &[TaskIndex]) -> Vec<usize> {
    let mut levels = vec![0; graph.task_count()];

    for &node in order {
        let candidate = levels[node] + 1;
        for &dependent in graph.dependents(node) {
            if candidate > levels[dependent] {
                levels[dependent] = candidate;
            }
        }
    }

    levels
}

/// Compute levels with a freshly computed order.
///
/// Returns `None` for cyclic graphs, where levels are undefined.
#[must_use]
pub fn levels_for(graph: &TaskGraph) -> Option<Vec<usize>> {
    let order = topological_order(graph).complete()?;
    Some(assign_levels(graph, &order))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Dependency, Task};

    fn build(ids: &[&str], pairs: &[(&str, &str)]) -> TaskGraph {
        let tasks: Vec<Task> = ids.iter().map(|id| Task::new(*id)).collect();
        let edges: Vec<Dependency> = pairs.iter().map(|&(d, p)| Dependency::new(d, p)).collect();
        TaskGraph::build(&tasks, &edges).unwrap()
    }

    #[test]
    fn test_linear_chain_levels() {
        let graph = build(&["task1", "task2", "task3"], &[("task2", "task1"), ("task3", "task2")]);
        assert_eq!(levels_for(&graph), Some(vec![0, 1, 2]));
    }

    #[test]
    fn test_diamond_levels() {
        let graph = build(
            &["A", "B", "C", "D"],
            &[("B", "A"), ("C", "A"), ("D", "B"), ("D", "C")],
        );
        assert_eq!(levels_for(&graph), Some(vec![0, 1, 1, 2]));
    }

    #[test]
    fn test_longest_chain_wins() {
        // d waits on a directly and on c through a -> b -> c
        let graph = build(
            &["a", "b", "c", "d"],
            &[("d", "a"), ("b", "a"), ("c", "b"), ("d", "c")],
        );
        assert_eq!(levels_for(&graph), Some(vec![0, 1, 2, 3]));
    }

    #[test]
    fn test_isolated_tasks_are_level_zero() {
        let graph = build(&["solo1", "solo2"], &[]);
        assert_eq!(levels_for(&graph), Some(vec![0, 0]));
    }

    #[test]
    fn test_root_with_dependents_is_level_zero() {
        let graph = build(&["root", "leaf"], &[("leaf", "root")]);
        let levels = levels_for(&graph).unwrap();
        assert_eq!(levels[0], 0);
        assert_eq!(levels[1], 1);
    }

    #[test]
    fn test_cyclic_graph_has_no_levels() {
        let graph = build(&["x", "y"], &[("x", "y"), ("y", "x")]);
        assert_eq!(levels_for(&graph), None);
    }

    #[test]
    fn test_assign_with_explicit_order() {
        let graph = build(&["a", "b"], &[("b", "a")]);
        assert_eq!(assign_levels(&graph, &[0, 1]), vec![0, 1]);
    }
}
