//! Cycle detection over the forward dependency edges.
//!
//! Classic three-color depth-first search, driven by an explicit frame stack
//! so arbitrarily deep dependency chains cannot exhaust the call stack.

use tracing::debug;

use crate::TaskGraph;
use crate::graph::TaskIndex;

/// A closed loop of task identifiers.
///
/// The first entry is the task through which the loop was detected and the
/// last entry repeats it.
pub type Cycle = Vec<String>;

/// Outcome of cycle detection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Whether any cycle was found.
    pub has_cycles: bool,
    /// Every cycle found, in detection order. Not deduplicated.
    pub cycles: Vec<Cycle>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Unvisited,
    InProgress,
    Done,
}

/// One level of the simulated recursion: a node and the next dependent to visit.
struct Frame {
    node: TaskIndex,
    next: usize,
}

/// Find every cycle reachable during a depth-first walk of the graph.
///
/// Roots are taken in declared task order and dependents in declared edge
/// order. Reaching a dependent that is still in progress reports the current
/// path from that dependent onwards, closed by repeating it.
#[must_use]
pub fn detect_cycles(graph: &TaskGraph) -> CycleReport {
    let n = graph.task_count();
    let mut color = vec![Color::Unvisited; n];
    // Position of each in-progress node on `path`.
    let mut path_pos: Vec<usize> = vec![0; n];
    let mut path: Vec<TaskIndex> = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();
    let mut cycles = Vec::new();

    for root in 0..n {
        if color[root] != Color::Unvisited {
            continue;
        }

        color[root] = Color::InProgress;
        path_pos[root] = path.len();
        path.push(root);
        stack.push(Frame { node: root, next: 0 });

        while let Some(frame) = stack.last_mut() {
            let dependents = graph.dependents(frame.node);

            if let Some(&neighbor) = dependents.get(frame.next) {
                frame.next += 1;
                match color[neighbor] {
                    Color::Unvisited => {
                        color[neighbor] = Color::InProgress;
                        path_pos[neighbor] = path.len();
                        path.push(neighbor);
                        stack.push(Frame {
                            node: neighbor,
                            next: 0,
                        });
                    }
                    Color::InProgress => {
                        let mut cycle = graph.names(&path[path_pos[neighbor]..]);
                        cycle.push(graph.task_id(neighbor).to_string());
                        debug!(cycle = ?cycle, "Found dependency cycle");
                        cycles.push(cycle);
                    }
                    Color::Done => {}
                }
            } else {
                color[frame.node] = Color::Done;
                path.pop();
                stack.pop();
            }
        }
    }

    CycleReport {
        has_cycles: !cycles.is_empty(),
        cycles,
    }
}
