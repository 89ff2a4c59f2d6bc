//! Validated adjacency for task dependency analysis.
//!
//! [`TaskGraph`] is the shared representation every analysis pass walks.
//! Nodes are dense indices assigned in declared task order, and both
//! adjacency directions keep edges in declared order, so every pass over the
//! graph is deterministic for a fixed input.

use std::collections::{HashMap, VecDeque};

use tracing::debug;

use crate::{Dependency, Error, Result, TaskNodeData};

/// Dense index of a task within one [`TaskGraph`].
pub type TaskIndex = usize;

/// Validated task graph built from declared tasks and dependency edges.
///
/// Edges are stored in both directions:
/// - forward (`prerequisite -> dependents`), walked by cycle detection,
///   topological ordering and level propagation
/// - backward (`dependent -> prerequisites`), used for in-degree counting
#[derive(Debug, Clone, Default)]
pub struct TaskGraph {
    /// Task identifiers in declared order.
    ids: Vec<String>,
    /// Map from task identifier to its index.
    index: HashMap<String, TaskIndex>,
    /// For each task, the tasks that directly depend on it.
    dependents: Vec<Vec<TaskIndex>>,
    /// For each task, its direct prerequisites.
    prerequisites: Vec<Vec<TaskIndex>>,
    edge_count: usize,
}

impl TaskGraph {
    /// Validate tasks and edges and build the adjacency representation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateTaskId`] if an identifier is declared twice,
    /// or [`Error::UnknownTaskReference`] if an edge names an undeclared task.
    /// The first offending item in declared order is reported.
    pub fn build<T: TaskNodeData>(tasks: &[T], edges: &[Dependency]) -> Result<Self> {
        let mut ids = Vec::with_capacity(tasks.len());
        let mut index = HashMap::with_capacity(tasks.len());

        for task in tasks {
            let id = task.task_id();
            if index.contains_key(id) {
                return Err(Error::duplicate_task_id(id));
            }
            index.insert(id.to_string(), ids.len());
            ids.push(id.to_string());
        }

        let mut dependents = vec![Vec::new(); ids.len()];
        let mut prerequisites = vec![Vec::new(); ids.len()];

        for edge in edges {
            let lookup = |name: &str| {
                index.get(name).copied().ok_or_else(|| {
                    Error::unknown_task_reference(&edge.dependent, &edge.prerequisite, name)
                })
            };
            let dependent = lookup(&edge.dependent)?;
            let prerequisite = lookup(&edge.prerequisite)?;

            dependents[prerequisite].push(dependent);
            prerequisites[dependent].push(prerequisite);
        }

        debug!(tasks = ids.len(), edges = edges.len(), "Built task graph");

        Ok(Self {
            ids,
            index,
            dependents,
            prerequisites,
            edge_count: edges.len(),
        })
    }

    /// Number of declared tasks.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.ids.len()
    }

    /// Number of dependency edges, duplicates included.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether the graph has no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Task identifiers in declared order.
    #[must_use]
    pub fn task_ids(&self) -> &[String] {
        &self.ids
    }

    /// Identifier of the task at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub fn task_id(&self, index: TaskIndex) -> &str {
        &self.ids[index]
    }

    /// Look up the index of a task by identifier.
    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<TaskIndex> {
        self.index.get(id).copied()
    }

    /// Check if a task is declared.
    #[must_use]
    pub fn contains_task(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Tasks that directly depend on `index`, in declared edge order.
    #[must_use]
    pub fn dependents(&self, index: TaskIndex) -> &[TaskIndex] {
        &self.dependents[index]
    }

    /// Direct prerequisites of `index`, in declared edge order.
    #[must_use]
    pub fn prerequisites(&self, index: TaskIndex) -> &[TaskIndex] {
        &self.prerequisites[index]
    }

    /// Translate a sequence of indices into task identifiers.
    #[must_use]
    pub fn names(&self, indices: &[TaskIndex]) -> Vec<String> {
        indices.iter().map(|&i| self.ids[i].clone()).collect()
    }

    /// Check whether adding the edge `dependent -> prerequisite` would close a cycle.
    ///
    /// Returns the cycle the new edge would create, written in forward
    /// direction and closed on the prerequisite:
    /// `prerequisite -> dependent -> ... -> prerequisite`.
    /// A self-dependency yields `[id, id]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownTaskReference`] if either endpoint is undeclared.
    pub fn would_create_cycle(
        &self,
        dependent: &str,
        prerequisite: &str,
    ) -> Result<Option<Vec<String>>> {
        let lookup = |name: &str| {
            self.index_of(name)
                .ok_or_else(|| Error::unknown_task_reference(dependent, prerequisite, name))
        };
        let from = lookup(dependent)?;
        let to = lookup(prerequisite)?;

        if from == to {
            return Ok(Some(vec![prerequisite.to_string(), prerequisite.to_string()]));
        }

        // The new edge runs `to -> from`, so it closes a cycle when `to` is
        // already reachable from `from`.
        let mut parent: Vec<Option<TaskIndex>> = vec![None; self.ids.len()];
        let mut visited = vec![false; self.ids.len()];
        let mut queue = VecDeque::from([from]);
        visited[from] = true;

        while let Some(current) = queue.pop_front() {
            if current == to {
                let mut path = vec![to];
                let mut cursor = to;
                while let Some(prev) = parent[cursor] {
                    path.push(prev);
                    cursor = prev;
                }
                path.push(to);
                path.reverse();
                debug!(dependent, prerequisite, "Edge would create a cycle");
                return Ok(Some(self.names(&path)));
            }

            for &next in &self.dependents[current] {
                if !visited[next] {
                    visited[next] = true;
                    parent[next] = Some(current);
                    queue.push_back(next);
                }
            }
        }

        Ok(None)
    }
}
