//! Topological ordering with Kahn's algorithm.

use std::collections::VecDeque;

use tracing::debug;

use crate::TaskGraph;
use crate::graph::TaskIndex;

/// Result of running Kahn's algorithm.
///
/// On a cyclic graph the algorithm stops early. That output is kept distinct
/// so it can never be mistaken for a valid execution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopologicalOrder {
    /// Every task was emitted; all prerequisites precede their dependents.
    Complete(Vec<TaskIndex>),
    /// The graph has a cycle and only the tasks outside it were emitted.
    Partial(Vec<TaskIndex>),
}

impl TopologicalOrder {
    /// The full order, or `None` if the graph was cyclic.
    #[must_use]
    pub fn complete(self) -> Option<Vec<TaskIndex>> {
        match self {
            Self::Complete(order) => Some(order),
            Self::Partial(_) => None,
        }
    }

    /// Whether every task was emitted.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    /// The emitted indices, regardless of completeness.
    #[must_use]
    pub fn indices(&self) -> &[TaskIndex] {
        match self {
            Self::Complete(order) | Self::Partial(order) => order,
        }
    }
}

/// Order tasks so every task comes after all of its prerequisites.
///
/// Zero in-degree tasks are seeded in declared order and the queue is FIFO,
/// with dependents released in declared edge order. When several valid
/// orderings exist this tie-breaking picks exactly one, reproducibly.
#[must_use]
pub fn topological_order(graph: &TaskGraph) -> TopologicalOrder {
    let n = graph.task_count();
    let mut in_degree: Vec<usize> = (0..n).map(|i| graph.prerequisites(i).len()).collect();

    let mut queue: VecDeque<TaskIndex> = (0..n).filter(|&i| in_degree[i] == 0).collect();
    let mut order = Vec::with_capacity(n);

    while let Some(node) = queue.pop_front() {
        order.push(node);
        for &dependent in graph.dependents(node) {
            in_degree[dependent] -= 1;
            if in_degree[dependent] == 0 {
                queue.push_back(dependent);
            }
        }
    }

    if order.len() == n {
        TopologicalOrder::Complete(order)
    } else {
        debug!(
            emitted = order.len(),
            total = n,
            "Topological sort stopped early; graph is cyclic"
        );
        TopologicalOrder::Partial(order)
    }
}
