//! Typed analysis input.
//!
//! These are the records the surrounding system hands to the engine. The
//! serde shapes are strict: unknown fields are rejected rather than coerced.

use serde::{Deserialize, Serialize};

use crate::TaskNodeData;

/// A declared task.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Task {
    /// Identifier, unique within one graph.
    pub id: String,
}

impl Task {
    /// Create a task with the given identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl TaskNodeData for Task {
    fn task_id(&self) -> &str {
        &self.id
    }
}

/// A dependency edge: `dependent` cannot start before `prerequisite` completes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Dependency {
    /// The task that waits.
    pub dependent: String,
    /// The task that must complete first.
    pub prerequisite: String,
}

impl Dependency {
    /// Create an edge stating that `dependent` waits on `prerequisite`.
    #[must_use]
    pub fn new(dependent: impl Into<String>, prerequisite: impl Into<String>) -> Self {
        Self {
            dependent: dependent.into(),
            prerequisite: prerequisite.into(),
        }
    }
}

impl<D: Into<String>, P: Into<String>> From<(D, P)> for Dependency {
    fn from((dependent, prerequisite): (D, P)) -> Self {
        Self::new(dependent, prerequisite)
    }
}

/// A complete graph description, in declared order.
///
/// Declared order matters: it governs root selection during cycle detection
/// and tie-breaking in the topological order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphInput {
    /// Tasks in declared order.
    pub tasks: Vec<Task>,
    /// Dependency edges in declared order.
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
}

impl GraphInput {
    /// Build an input from task identifiers and `(dependent, prerequisite)` pairs.
    #[must_use]
    pub fn from_pairs<I, E>(tasks: I, dependencies: E) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<Dependency>,
    {
        Self {
            tasks: tasks.into_iter().map(Task::new).collect(),
            dependencies: dependencies.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_graph_input() {
        let json = r#"{
            "tasks": [{"id": "a"}, {"id": "b"}],
            "dependencies": [{"dependent": "b", "prerequisite": "a"}]
        }"#;
        let input: GraphInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.tasks, vec![Task::new("a"), Task::new("b")]);
        assert_eq!(input.dependencies, vec![Dependency::new("b", "a")]);
    }

    #[test]
    fn test_dependencies_default_to_empty() {
        let input: GraphInput = serde_json::from_str(r#"{"tasks": [{"id": "solo"}]}"#).unwrap();
        assert!(input.dependencies.is_empty());
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let json = r#"{"tasks": [{"id": "a", "title": "extra"}]}"#;
        assert!(serde_json::from_str::<GraphInput>(json).is_err());
    }

    #[test]
    fn test_rejects_non_string_id() {
        let json = r#"{"tasks": [{"id": 7}]}"#;
        assert!(serde_json::from_str::<GraphInput>(json).is_err());
    }

    #[test]
    fn test_from_pairs() {
        let input = GraphInput::from_pairs(["a", "b"], [("b", "a")]);
        assert_eq!(input.tasks.len(), 2);
        assert_eq!(input.dependencies[0], Dependency::new("b", "a"));
    }
}
