//! Loading graph documents from files or stdin.

use dagview_task_graph::GraphInput;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::cli::CliError;

/// Read and parse a graph document. A path of `-` reads stdin.
pub fn load_graph(path: &Path) -> Result<GraphInput, CliError> {
    let label = display_name(path);

    let contents = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| CliError::Io {
                path: label.clone(),
                source,
            })?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: label.clone(),
            source,
        })?
    };

    let graph = parse_graph(&contents, &label)?;
    debug!(
        path = %label,
        tasks = graph.tasks.len(),
        dependencies = graph.dependencies.len(),
        "Loaded graph document"
    );
    Ok(graph)
}

/// Parse a graph document from a string.
pub fn parse_graph(contents: &str, label: &str) -> Result<GraphInput, CliError> {
    serde_json::from_str(contents).map_err(|source| CliError::Parse {
        path: label.to_string(),
        source,
    })
}

/// Human-readable name for an input path.
pub fn display_name(path: &Path) -> String {
    if path.as_os_str() == "-" {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_graph_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"tasks": [{{"id": "a"}}, {{"id": "b"}}], "dependencies": [{{"dependent": "b", "prerequisite": "a"}}]}}"#
        )
        .unwrap();

        let graph = load_graph(file.path()).unwrap();
        assert_eq!(graph.tasks.len(), 2);
        assert_eq!(graph.dependencies.len(), 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_graph(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }

    #[test]
    fn test_malformed_document_is_parse_error() {
        let err = parse_graph(r#"{"tasks": "not a list"}"#, "inline").unwrap_err();
        match err {
            CliError::Parse { path, .. } => assert_eq!(path, "inline"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_display_name_for_stdin() {
        assert_eq!(display_name(Path::new("-")), "<stdin>");
        assert_eq!(display_name(Path::new("g.json")), "g.json");
    }
}
