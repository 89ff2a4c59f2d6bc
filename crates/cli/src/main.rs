//! dagview CLI
//!
//! Reads task graph documents, runs the dagview analysis engine over them
//! and renders the result as text, JSON or Graphviz DOT.

// CLI binary reports fatal errors on stderr - this is intentional
#![allow(clippy::print_stderr)]

mod cli;
mod commands;
mod input;
mod render;
mod tracing;

use std::process::ExitCode;

use crate::cli::{EXIT_ERROR, parse};
use crate::tracing::{TracingConfig, init_tracing};

fn main() -> ExitCode {
    // NOTE: Using eprintln! in panic hook is intentional - tracing infrastructure
    // may be corrupted during a panic, so we use the most reliable output method.
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {panic_info}");
        eprintln!("Internal error occurred. Run with RUST_LOG=debug for more information.");
    }));

    match run() {
        Ok(code) => ExitCode::from(code),
        Err(report) => {
            eprintln!("{report:?}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run() -> miette::Result<u8> {
    let cli = parse();

    init_tracing(TracingConfig {
        format: cli.log_format,
        level: cli.level.into(),
        filter: None,
    })?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::execute(cli.command, &mut out)
}
