//! Command implementations.
//!
//! Each command writes its report to the given writer and returns the
//! process exit code.

mod analyze;
mod batch;
mod check_edge;

use std::io::Write;

use crate::cli::{CliError, Commands};

pub use analyze::analyze;
pub use batch::batch;
pub use check_edge::check_edge;

/// Dispatch a parsed command.
pub fn execute(command: Commands, out: &mut impl Write) -> miette::Result<u8> {
    match command {
        Commands::Analyze {
            input,
            format,
            deny_cycles,
        } => analyze(&input, format, deny_cycles, out),
        Commands::Batch { inputs, format } => batch(&inputs, format, out),
        Commands::CheckEdge {
            input,
            dependent,
            prerequisite,
        } => check_edge(&input, &dependent, &prerequisite, out),
    }
}

/// Write a complete report, making sure it ends with a newline.
fn emit(out: &mut impl Write, report: &str) -> Result<(), CliError> {
    let result = if report.ends_with('\n') {
        out.write_all(report.as_bytes())
    } else {
        writeln!(out, "{report}")
    };
    result
        .and_then(|()| out.flush())
        .map_err(|e| CliError::output(e.to_string()))
}
