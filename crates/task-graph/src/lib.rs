//! Task dependency graph analysis for dagview.
//!
//! This crate takes a set of named tasks and dependency edges and derives:
//! the cycles in the graph, a valid execution order, and per-task levels
//! used to tier a layered visualization.
//!
//! # Key Types
//!
//! - [`TaskGraph`]: Validated adjacency built from declared tasks and edges
//! - [`AnalysisResult`]: Cycles, topological order and levels for one graph
//! - [`TaskNodeData`]: Trait that caller task types implement to be analyzed
//!
//! # Example
//!
//! ```
//! use dagview_task_graph::{Dependency, Task, analyze};
//!
//! let tasks = vec![Task::new("build"), Task::new("test")];
//! let edges = vec![Dependency::new("test", "build")];
//!
//! let result = analyze(&tasks, &edges)?;
//! assert!(!result.has_cycles);
//! assert_eq!(result.level_of("test"), Some(1));
//! # Ok::<(), dagview_task_graph::Error>(())
//! ```

mod analysis;
mod batch;
mod cycles;
mod error;
mod graph;
mod input;
mod levels;
mod order;

pub use analysis::{AnalysisResult, analyze, analyze_graph};
pub use batch::analyze_batch;
pub use cycles::{Cycle, CycleReport, detect_cycles};
pub use error::{Error, Result};
pub use graph::{TaskGraph, TaskIndex};
pub use input::{Dependency, GraphInput, Task};
pub use levels::{assign_levels, levels_for};
pub use order::{TopologicalOrder, topological_order};

/// Trait for task data that can be analyzed.
///
/// Implement this trait for your task type so it can be passed to
/// [`analyze`] or [`TaskGraph::build`] directly, without first copying
/// identifiers into [`Task`] records.
pub trait TaskNodeData {
    /// Returns the identifier of this task, unique within one graph.
    fn task_id(&self) -> &str;
}

impl TaskNodeData for String {
    fn task_id(&self) -> &str {
        self
    }
}

impl TaskNodeData for &str {
    fn task_id(&self) -> &str {
        self
    }
}
