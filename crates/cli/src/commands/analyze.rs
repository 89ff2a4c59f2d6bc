use dagview_task_graph::AnalysisResult;
use std::io::Write;
use std::path::Path;
use tracing::info;

use super::emit;
use crate::cli::{EXIT_CYCLES, EXIT_OK, OutputFormat};
use crate::input::{display_name, load_graph};
use crate::render::{AnalysisExport, to_dot, to_json, to_text};

/// Analyze one graph document and print the result.
#[tracing::instrument(name = "analyze_command", skip(out), fields(path = %display_name(input)))]
pub fn analyze(
    input: &Path,
    format: OutputFormat,
    deny_cycles: bool,
    out: &mut impl Write,
) -> miette::Result<u8> {
    let graph = load_graph(input)?;
    let result: AnalysisResult = graph.analyze()?;

    let report = match format {
        OutputFormat::Json => to_json(&AnalysisExport::new(&result))?,
        OutputFormat::Text => to_text(&graph, &result),
        OutputFormat::Dot => to_dot(&graph),
    };
    emit(out, &report)?;

    info!(has_cycles = result.has_cycles, "Analysis finished");

    if deny_cycles && result.has_cycles {
        Ok(EXIT_CYCLES)
    } else {
        Ok(EXIT_OK)
    }
}
