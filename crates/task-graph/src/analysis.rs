//! The analysis entry point.
//!
//! [`analyze`] validates the input, detects cycles and, for acyclic graphs
//! only, computes a topological order and per-task levels over the same
//! adjacency.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cycles::{Cycle, detect_cycles};
use crate::levels::assign_levels;
use crate::order::topological_order;
use crate::{Dependency, GraphInput, Result, TaskGraph, TaskNodeData};

/// Everything the engine derives from one graph.
///
/// `topological_order` is `Some` and `levels` is populated exactly when
/// `has_cycles` is false. For a cyclic graph the order is undefined
/// (`None`, serialized as `null`) and `levels` is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Whether the graph contains at least one cycle.
    pub has_cycles: bool,
    /// Cycles found, each closed by repeating its first task.
    pub cycles: Vec<Cycle>,
    /// A valid execution order, undefined for cyclic graphs.
    pub topological_order: Option<Vec<String>>,
    /// Longest prerequisite chain length per task.
    pub levels: BTreeMap<String, usize>,
}

impl AnalysisResult {
    /// Group tasks into layout tiers by level.
    ///
    /// Tier `n` holds every task at level `n`, listed in topological order.
    /// Empty for cyclic graphs.
    #[must_use]
    pub fn tiers(&self) -> Vec<Vec<String>> {
        let Some(order) = &self.topological_order else {
            return Vec::new();
        };

        let depth = self.levels.values().copied().max().map_or(0, |max| max + 1);
        let mut tiers: Vec<Vec<String>> = vec![Vec::new(); depth];
        for id in order {
            if let Some(&level) = self.levels.get(id) {
                tiers[level].push(id.clone());
            }
        }
        tiers
    }

    /// Level of a single task, if defined.
    #[must_use]
    pub fn level_of(&self, id: &str) -> Option<usize> {
        self.levels.get(id).copied()
    }
}

/// Analyze a task dependency graph.
///
/// `tasks` and `edges` are taken in declared order, which governs root
/// selection for cycle detection and tie-breaking in the topological order.
///
/// # Errors
///
/// Returns [`Error::DuplicateTaskId`](crate::Error::DuplicateTaskId) or
/// [`Error::UnknownTaskReference`](crate::Error::UnknownTaskReference) when
/// the input fails validation. No partial result is produced.
#[tracing::instrument(
    name = "analyze",
    skip_all,
    fields(tasks = tasks.len(), edges = edges.len())
)]
pub fn analyze<T: TaskNodeData>(tasks: &[T], edges: &[Dependency]) -> Result<AnalysisResult> {
    let graph = TaskGraph::build(tasks, edges)?;
    Ok(analyze_graph(&graph))
}

/// Analyze an already validated graph.
#[must_use]
pub fn analyze_graph(graph: &TaskGraph) -> AnalysisResult {
    let report = detect_cycles(graph);
    if report.has_cycles {
        info!(cycles = report.cycles.len(), "Task graph contains cycles");
        return AnalysisResult {
            has_cycles: true,
            cycles: report.cycles,
            topological_order: None,
            levels: BTreeMap::new(),
        };
    }

    // Cycle-free, so Kahn's algorithm emits every task.
    let order = topological_order(graph).indices().to_vec();
    let levels = assign_levels(graph, &order);

    let levels: BTreeMap<String, usize> = graph
        .task_ids()
        .iter()
        .cloned()
        .zip(levels)
        .collect();

    info!(
        tasks = graph.task_count(),
        depth = levels.values().copied().max().map_or(0, |max| max + 1),
        "Task graph analyzed"
    );

    AnalysisResult {
        has_cycles: false,
        cycles: Vec::new(),
        topological_order: Some(graph.names(&order)),
        levels,
    }
}

impl GraphInput {
    /// Analyze this graph description.
    ///
    /// # Errors
    ///
    /// Returns a validation error, see [`analyze`].
    pub fn analyze(&self) -> Result<AnalysisResult> {
        analyze(&self.tasks, &self.dependencies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, Task};

    fn input(ids: &[&str], pairs: &[(&str, &str)]) -> GraphInput {
        GraphInput::from_pairs(ids.iter().copied(), pairs.iter().copied())
    }

    fn strings(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_empty_graph() {
        let result = analyze::<Task>(&[], &[]).unwrap();
        assert!(!result.has_cycles);
        assert!(result.cycles.is_empty());
        assert_eq!(result.topological_order, Some(vec![]));
        assert!(result.levels.is_empty());
        assert!(result.tiers().is_empty());
    }

    #[test]
    fn test_acyclic_result() {
        let result = input(&["a", "b", "c"], &[("b", "a"), ("c", "b")])
            .analyze()
            .unwrap();
        assert!(!result.has_cycles);
        assert_eq!(result.topological_order, Some(strings(&["a", "b", "c"])));
        assert_eq!(result.level_of("c"), Some(2));
        assert_eq!(result.level_of("missing"), None);
    }

    #[test]
    fn test_cyclic_result_has_no_order_or_levels() {
        let result = input(&["x", "y", "free"], &[("x", "y"), ("y", "x")])
            .analyze()
            .unwrap();
        assert!(result.has_cycles);
        assert_eq!(result.cycles, vec![strings(&["x", "y", "x"])]);
        assert_eq!(result.topological_order, None);
        assert!(result.levels.is_empty());
        assert!(result.tiers().is_empty());
    }

    #[test]
    fn test_validation_errors_propagate() {
        let err = input(&["dup", "dup"], &[]).analyze().unwrap_err();
        assert!(matches!(err, Error::DuplicateTaskId { .. }));

        let err = input(&["valid"], &[("valid", "nonexistent")])
            .analyze()
            .unwrap_err();
        assert!(matches!(err, Error::UnknownTaskReference { .. }));
    }

    #[test]
    fn test_tiers_follow_levels_and_order() {
        let result = input(
            &["A", "B", "C", "D", "E"],
            &[("B", "A"), ("C", "A"), ("D", "B"), ("D", "C")],
        )
        .analyze()
        .unwrap();

        assert_eq!(
            result.tiers(),
            vec![strings(&["A", "E"]), strings(&["B", "C"]), strings(&["D"])]
        );
    }

    #[test]
    fn test_serialized_shape() {
        let result = input(&["a", "b"], &[("b", "a")]).analyze().unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "hasCycles": false,
                "cycles": [],
                "topologicalOrder": ["a", "b"],
                "levels": {"a": 0, "b": 1}
            })
        );

        let cyclic = input(&["a"], &[("a", "a")]).analyze().unwrap();
        let json = serde_json::to_value(&cyclic).unwrap();
        assert_eq!(json["topologicalOrder"], serde_json::Value::Null);
        assert_eq!(json["levels"], serde_json::json!({}));
    }

    #[test]
    fn test_serialization_is_byte_identical_across_calls() {
        let graph = input(
            &["d", "c", "b", "a"],
            &[("c", "d"), ("b", "d"), ("a", "b"), ("a", "c")],
        );
        let first = serde_json::to_string(&graph.analyze().unwrap()).unwrap();
        let second = serde_json::to_string(&graph.analyze().unwrap()).unwrap();
        assert_eq!(first, second);
    }
}
