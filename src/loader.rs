//! Graph description loading
//!
//! Parses the DOT-subset route description format into graph mutation calls:
//!
//! ```text
//! digraph campus {
//!     "Union South" -> "Computer Sciences" [seconds=176.0];
//! }
//! ```
//!
//! Every non-structural line must describe an edge; malformed lines are
//! reported with their line number rather than skipped.

use crate::graph::{Graph, GraphError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while loading a graph description
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read graph description: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed edge on line {line}: {text:?}")]
    Malformed { line: usize, text: String },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type LoadResult<T> = Result<T, LoadError>;

/// One edge per line: `"src" -> "dst" [seconds=W];`. The weight sign is
/// accepted here so negative weights reach the graph layer and fail with its
/// own out-of-range error instead of a generic parse failure.
static EDGE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^"([^"]+)"\s*->\s*"([^"]+)"\s*\[seconds=(-?[0-9]*\.?[0-9]+)\];?$"#)
        .expect("edge pattern compiles")
});

/// Read and parse the description at `path` into `graph`. Returns the number
/// of edges inserted.
pub fn load_dot_file(path: impl AsRef<Path>, graph: &mut Graph<String>) -> LoadResult<usize> {
    let text = fs::read_to_string(path)?;
    load_dot_str(&text, graph)
}

/// Parse an in-memory graph description into `graph`. Split out from
/// [`load_dot_file`] so callers can load without touching the filesystem.
///
/// Endpoint nodes are created as encountered. An edge whose (src, dst) pair
/// is already in the graph is skipped, so a description can be layered onto
/// an existing graph without tripping the duplicate-edge rejection.
pub fn load_dot_str(text: &str, graph: &mut Graph<String>) -> LoadResult<usize> {
    let mut inserted = 0usize;

    for (number, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if number == 0 && line.starts_with("digraph") && line.ends_with('{') {
            continue;
        }
        if line == "}" {
            break;
        }

        let captures = EDGE_LINE
            .captures(line)
            .ok_or_else(|| LoadError::Malformed {
                line: number + 1,
                text: line.to_string(),
            })?;

        let src = captures[1].to_owned();
        let dst = captures[2].to_owned();
        let weight: f64 = captures[3].parse().map_err(|_| LoadError::Malformed {
            line: number + 1,
            text: line.to_string(),
        })?;

        graph.insert_node(src.clone());
        graph.insert_node(dst.clone());
        if !graph.contains_edge(&src, &dst) {
            graph.insert_edge(&src, &dst, weight)?;
            inserted += 1;
        }
    }

    info!(
        edges = inserted,
        nodes = graph.node_count(),
        "graph description loaded"
    );
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"digraph campus {
    "Union South" -> "Computer Sciences" [seconds=176.0];
    "Computer Sciences" -> "Atmospheric Sciences" [seconds=127.2];
    "Union South" -> "Atmospheric Sciences" [seconds=400.0];
}"#;

    #[test]
    fn test_load_well_formed_description() {
        let mut graph = Graph::new();
        let inserted = load_dot_str(SAMPLE, &mut graph).unwrap();

        assert_eq!(inserted, 3);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(
            graph.edge_weight(&"Union South".to_owned(), &"Computer Sciences".to_owned()),
            Ok(176.0)
        );
    }

    #[test]
    fn test_malformed_line_reports_position() {
        let text = "digraph campus {\n\"A\" -> \"B\" [seconds=1.0];\nnot an edge\n}";
        let mut graph = Graph::new();

        match load_dot_str(text, &mut graph) {
            Err(LoadError::Malformed { line, text }) => {
                assert_eq!(line, 3);
                assert_eq!(text, "not an edge");
            }
            other => panic!("expected malformed-line failure, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_weight_is_rejected_by_the_graph() {
        let text = "digraph g {\n\"A\" -> \"B\" [seconds=-5.0];\n}";
        let mut graph = Graph::new();

        match load_dot_str(text, &mut graph) {
            Err(LoadError::Graph(GraphError::WeightOutOfRange(weight))) => {
                assert_eq!(weight, -5.0);
            }
            other => panic!("expected weight rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_repeated_edge_lines_keep_first_weight() {
        let text = "digraph g {\n\"A\" -> \"B\" [seconds=1.0];\n\"A\" -> \"B\" [seconds=9.0];\n}";
        let mut graph = Graph::new();
        let inserted = load_dot_str(text, &mut graph).unwrap();

        assert_eq!(inserted, 1);
        assert_eq!(graph.edge_weight(&"A".to_owned(), &"B".to_owned()), Ok(1.0));
    }

    #[test]
    fn test_shared_endpoints_are_created_once() {
        let mut graph = Graph::new();
        load_dot_str(SAMPLE, &mut graph).unwrap();

        let mut nodes: Vec<String> = graph.all_nodes().into_iter().cloned().collect();
        nodes.sort();
        assert_eq!(
            nodes,
            vec!["Atmospheric Sciences", "Computer Sciences", "Union South"]
        );
    }
}
