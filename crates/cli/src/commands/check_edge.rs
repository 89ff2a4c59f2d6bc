use dagview_task_graph::TaskGraph;
use std::io::Write;
use std::path::Path;

use super::emit;
use crate::cli::{EXIT_CYCLES, EXIT_OK};
use crate::input::load_graph;

/// Report whether adding `dependent -> prerequisite` would create a cycle.
///
/// Exits with [`EXIT_CYCLES`] when it would.
#[tracing::instrument(name = "check_edge_command", skip(out))]
pub fn check_edge(
    input: &Path,
    dependent: &str,
    prerequisite: &str,
    out: &mut impl Write,
) -> miette::Result<u8> {
    let graph = load_graph(input)?;
    let graph = TaskGraph::build(&graph.tasks, &graph.dependencies)?;

    match graph.would_create_cycle(dependent, prerequisite)? {
        Some(cycle) => {
            emit(out, &format!("would create cycle: {}", cycle.join(" -> ")))?;
            Ok(EXIT_CYCLES)
        }
        None => {
            emit(out, "ok")?;
            Ok(EXIT_OK)
        }
    }
}
