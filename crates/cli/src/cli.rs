// Rust 1.92 compiler bug: false positives for thiserror/miette derive macro fields
// https://github.com/rust-lang/rust/issues/147648
#![allow(unused_assignments)]

use clap::{Parser, Subcommand, ValueEnum};
use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

use crate::tracing::{LogLevel, TracingFormat};

/// Analysis succeeded
pub const EXIT_OK: u8 = 0;
/// Input could not be read, parsed or validated
pub const EXIT_ERROR: u8 = 1;
/// The graph is cyclic and the caller asked for that to fail
pub const EXIT_CYCLES: u8 = 2;

/// CLI-specific error types
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// The input file could not be read
    #[error("Failed to read graph from {path}")]
    #[diagnostic(code(dagview::cli::io), help("Check that the file exists and is readable"))]
    Io {
        /// Where the graph was read from
        path: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The input was not a valid graph document
    #[error("Invalid graph document in {path}")]
    #[diagnostic(
        code(dagview::cli::parse),
        help("Expected a JSON object with 'tasks' and 'dependencies' arrays")
    )]
    Parse {
        /// Where the graph was read from
        path: String,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Output could not be written or encoded
    #[error("Failed to write output: {message}")]
    #[diagnostic(code(dagview::cli::output))]
    Output {
        /// What went wrong
        message: String,
    },
}

impl CliError {
    /// Create an output error
    #[must_use]
    pub fn output(message: impl Into<String>) -> Self {
        Self::Output {
            message: message.into(),
        }
    }
}

/// How analysis results are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON, including layout tiers
    Json,
    /// Human-readable summary
    Text,
    /// Graphviz DOT, edges drawn from prerequisite to dependent
    Dot,
}

/// How batch reports are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BatchFormat {
    /// JSON array with one entry per input file
    Json,
    /// Human-readable summary per input file
    Text,
}

#[derive(Parser, Debug)]
#[command(name = "dagview")]
#[command(about = "Analyze task dependency graphs for cycles, execution order and levels")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(
        short = 'l',
        long,
        global = true,
        help = "Set logging level",
        default_value = "warn",
        env = "DAGVIEW_LOG_LEVEL",
        value_enum
    )]
    pub level: LogLevel,

    #[arg(
        long,
        global = true,
        help = "Log output format",
        default_value = "compact",
        env = "DAGVIEW_LOG_FORMAT",
        value_enum
    )]
    pub log_format: TracingFormat,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "Analyze a graph document ('-' reads stdin)")]
    Analyze {
        #[arg(help = "Path to a JSON graph document", default_value = "-")]
        input: PathBuf,
        #[arg(
            long,
            short = 'f',
            help = "Output format",
            default_value = "text",
            env = "DAGVIEW_FORMAT",
            value_enum
        )]
        format: OutputFormat,
        #[arg(long, help = "Exit with status 2 when the graph contains cycles")]
        deny_cycles: bool,
    },
    #[command(about = "Analyze several graph documents in parallel")]
    Batch {
        #[arg(required = true, help = "Paths to JSON graph documents")]
        inputs: Vec<PathBuf>,
        #[arg(
            long,
            short = 'f',
            help = "Output format (json, text)",
            default_value = "text",
            value_enum
        )]
        format: BatchFormat,
    },
    #[command(about = "Check whether adding a dependency would create a cycle")]
    CheckEdge {
        #[arg(help = "Path to a JSON graph document", default_value = "-")]
        input: PathBuf,
        #[arg(long, help = "Task that would wait")]
        dependent: String,
        #[arg(long, help = "Task that would have to complete first")]
        prerequisite: String,
    },
}

/// Parse command line arguments
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
