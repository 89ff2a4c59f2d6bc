//! Parallel analysis of independent graphs.
//!
//! Each analysis owns its adjacency exclusively, so graphs are dispatched to
//! the rayon pool with no coordination between them.

use rayon::prelude::*;
use tracing::debug;

use crate::{AnalysisResult, GraphInput, Result};

/// Analyze many graphs in parallel.
///
/// Results are returned in input order. A graph that fails validation
/// yields its own error without affecting the others.
#[must_use]
pub fn analyze_batch(graphs: &[GraphInput]) -> Vec<Result<AnalysisResult>> {
    debug!(graphs = graphs.len(), "Analyzing graph batch");
    graphs.par_iter().map(GraphInput::analyze).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_batch_preserves_input_order() {
        let graphs = vec![
            GraphInput::from_pairs(["a", "b"], [("b", "a")]),
            GraphInput::from_pairs(["x", "y"], [("x", "y"), ("y", "x")]),
            GraphInput::from_pairs(["dup", "dup"], Vec::<(&str, &str)>::new()),
            GraphInput::default(),
        ];

        let results = analyze_batch(&graphs);
        assert_eq!(results.len(), 4);

        let first = results[0].as_ref().unwrap();
        assert!(!first.has_cycles);
        assert_eq!(first.level_of("b"), Some(1));

        assert!(results[1].as_ref().unwrap().has_cycles);
        assert_eq!(
            results[2].as_ref().unwrap_err(),
            &Error::duplicate_task_id("dup")
        );
        assert_eq!(results[3].as_ref().unwrap(), &AnalysisResult {
            topological_order: Some(vec![]),
            ..AnalysisResult::default()
        });
    }

    #[test]
    fn test_batch_matches_sequential() {
        let graphs: Vec<GraphInput> = (0..32)
            .map(|n| {
                let ids: Vec<String> = (0..n).map(|i| format!("t{i}")).collect();
                let edges: Vec<(String, String)> = ids
                    .windows(2)
                    .map(|w| (w[1].clone(), w[0].clone()))
                    .collect();
                GraphInput::from_pairs(ids, edges)
            })
            .collect();

        let parallel = analyze_batch(&graphs);
        let sequential: Vec<_> = graphs.iter().map(GraphInput::analyze).collect();
        assert_eq!(parallel, sequential);
    }
}
