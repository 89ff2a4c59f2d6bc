use dagview_task_graph::{GraphInput, analyze_batch};
use serde::Serialize;
use std::fmt::Write as _;
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

use super::emit;
use crate::cli::{BatchFormat, EXIT_ERROR, EXIT_OK};
use crate::input::{display_name, load_graph};
use crate::render::{AnalysisExport, to_json, to_text};

/// One file's outcome in a batch report.
#[derive(Debug, Serialize)]
struct BatchEntry<'a> {
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    analysis: Option<AnalysisExport<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Analyze several graph documents in parallel.
///
/// Unreadable or malformed files abort the batch. Graphs that fail
/// validation are reported alongside the others and make the batch exit
/// with [`EXIT_ERROR`].
#[tracing::instrument(name = "batch_command", skip_all, fields(files = inputs.len()))]
pub fn batch(inputs: &[PathBuf], format: BatchFormat, out: &mut impl Write) -> miette::Result<u8> {
    let graphs = inputs
        .iter()
        .map(|path| load_graph(path))
        .collect::<Result<Vec<GraphInput>, _>>()?;

    let results = analyze_batch(&graphs);
    let failures = results.iter().filter(|r| r.is_err()).count();

    let report = match format {
        BatchFormat::Json => {
            let entries: Vec<BatchEntry<'_>> = inputs
                .iter()
                .zip(&results)
                .map(|(path, result)| match result {
                    Ok(analysis) => BatchEntry {
                        path: display_name(path),
                        analysis: Some(AnalysisExport::new(analysis)),
                        error: None,
                    },
                    Err(e) => BatchEntry {
                        path: display_name(path),
                        analysis: None,
                        error: Some(e.to_string()),
                    },
                })
                .collect();
            to_json(&entries)?
        }
        BatchFormat::Text => {
            let mut text = String::new();
            for ((path, graph), result) in inputs.iter().zip(&graphs).zip(&results) {
                let _ = writeln!(text, "== {}", display_name(path));
                match result {
                    Ok(analysis) => text.push_str(&to_text(graph, analysis)),
                    Err(e) => {
                        let _ = writeln!(text, "error: {e}");
                    }
                }
            }
            text
        }
    };
    emit(out, &report)?;

    if failures > 0 {
        warn!(failures, "Some graphs failed validation");
        Ok(EXIT_ERROR)
    } else {
        info!(graphs = graphs.len(), "Batch analysis finished");
        Ok(EXIT_OK)
    }
}
