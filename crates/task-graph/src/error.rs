//! Error types for task graph analysis.

// Rust 1.92 compiler bug: false positives for thiserror/miette derive macro fields
// https://github.com/rust-lang/rust/issues/147648
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

/// Result type for task graph operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while validating analysis input.
///
/// Both variants are produced before any algorithmic pass runs. No partial
/// analysis is ever returned alongside them.
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum Error {
    /// Two or more input tasks share the same identifier.
    #[error("Duplicate task id '{id}'")]
    #[diagnostic(
        code(dagview::graph::duplicate_task_id),
        help("Task identifiers must be unique within one graph")
    )]
    DuplicateTaskId {
        /// The identifier that appeared more than once.
        id: String,
    },

    /// A dependency edge names a task that was never declared.
    #[error(
        "Dependency '{dependent}' -> '{prerequisite}' references unknown task '{missing}'"
    )]
    #[diagnostic(
        code(dagview::graph::unknown_task_reference),
        help("Declare every task before referencing it from a dependency")
    )]
    UnknownTaskReference {
        /// The dependent side of the offending edge.
        dependent: String,
        /// The prerequisite side of the offending edge.
        prerequisite: String,
        /// Whichever endpoint is not a declared task.
        missing: String,
    },
}

impl Error {
    /// Create a duplicate task id error.
    #[must_use]
    pub fn duplicate_task_id(id: impl Into<String>) -> Self {
        Self::DuplicateTaskId { id: id.into() }
    }

    /// Create an unknown task reference error.
    #[must_use]
    pub fn unknown_task_reference(
        dependent: impl Into<String>,
        prerequisite: impl Into<String>,
        missing: impl Into<String>,
    ) -> Self {
        Self::UnknownTaskReference {
            dependent: dependent.into(),
            prerequisite: prerequisite.into(),
            missing: missing.into(),
        }
    }
}
