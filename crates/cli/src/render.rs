//! Rendering analysis results.
//!
//! JSON output carries the analysis plus layout tiers for downstream
//! visualization. DOT output draws the input graph for Graphviz.

use dagview_task_graph::{AnalysisResult, GraphInput};
use petgraph::dot::{Config, Dot};
use petgraph::graph::DiGraph;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::Write as _;

use crate::cli::CliError;

/// An analysis result as exported to JSON.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisExport<'a> {
    #[serde(flatten)]
    pub result: &'a AnalysisResult,
    /// Tasks grouped by level, each tier in topological order.
    pub tiers: Vec<Vec<String>>,
}

impl<'a> AnalysisExport<'a> {
    pub fn new(result: &'a AnalysisResult) -> Self {
        Self {
            result,
            tiers: result.tiers(),
        }
    }
}

/// Render an analysis as pretty-printed JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, CliError> {
    serde_json::to_string_pretty(value).map_err(|e| CliError::output(e.to_string()))
}

/// Render an analysis as a human-readable summary.
pub fn to_text(input: &GraphInput, result: &AnalysisResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "tasks: {}, dependencies: {}",
        input.tasks.len(),
        input.dependencies.len()
    );

    if result.has_cycles {
        let _ = writeln!(out, "cycles: {}", result.cycles.len());
        for cycle in &result.cycles {
            let _ = writeln!(out, "  {}", cycle.join(" -> "));
        }
        let _ = writeln!(out, "order: undefined");
        return out;
    }

    let _ = writeln!(out, "cycles: none");
    if let Some(order) = &result.topological_order {
        let _ = writeln!(out, "order: {}", order.join(", "));
    }
    for (level, tier) in result.tiers().iter().enumerate() {
        let _ = writeln!(out, "level {level}: {}", tier.join(", "));
    }
    out
}

/// Render the input graph as Graphviz DOT.
///
/// Edges run from prerequisite to dependent, the direction work flows.
pub fn to_dot(input: &GraphInput) -> String {
    let mut graph = DiGraph::<&str, &str>::new();
    let nodes: HashMap<&str, _> = input
        .tasks
        .iter()
        .map(|task| (task.id.as_str(), graph.add_node(task.id.as_str())))
        .collect();

    for edge in &input.dependencies {
        if let (Some(&from), Some(&to)) = (
            nodes.get(edge.prerequisite.as_str()),
            nodes.get(edge.dependent.as_str()),
        ) {
            graph.add_edge(from, to, "");
        }
    }

    format!("{}", Dot::with_config(&graph, &[Config::EdgeNoLabel]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> GraphInput {
        GraphInput::from_pairs(
            ["A", "B", "C", "D"],
            [("B", "A"), ("C", "A"), ("D", "B"), ("D", "C")],
        )
    }

    #[test]
    fn test_json_export_includes_tiers() {
        let result = diamond().analyze().unwrap();
        let json = to_json(&AnalysisExport::new(&result)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["hasCycles"], false);
        assert_eq!(value["topologicalOrder"], serde_json::json!(["A", "B", "C", "D"]));
        assert_eq!(value["levels"]["D"], 2);
        assert_eq!(
            value["tiers"],
            serde_json::json!([["A"], ["B", "C"], ["D"]])
        );
    }

    #[test]
    fn test_text_summary_acyclic() {
        let input = diamond();
        let result = input.analyze().unwrap();
        let text = to_text(&input, &result);

        assert!(text.contains("tasks: 4, dependencies: 4"));
        assert!(text.contains("cycles: none"));
        assert!(text.contains("order: A, B, C, D"));
        assert!(text.contains("level 1: B, C"));
    }

    #[test]
    fn test_text_summary_cyclic() {
        let input = GraphInput::from_pairs(["X", "Y", "Z"], [("X", "Z"), ("Y", "X"), ("Z", "Y")]);
        let result = input.analyze().unwrap();
        let text = to_text(&input, &result);

        assert!(text.contains("cycles: 1"));
        assert!(text.contains("X -> Y -> Z -> X"));
        assert!(text.contains("order: undefined"));
    }

    #[test]
    fn test_dot_output_draws_forward_edges() {
        let dot = to_dot(&GraphInput::from_pairs(["a", "b"], [("b", "a")]));
        assert!(dot.starts_with("digraph"));
        assert!(dot.contains("label = \"a\""));
        assert!(dot.contains("0 -> 1"));
    }
}
