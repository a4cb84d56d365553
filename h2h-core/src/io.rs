//! Edge-list ingestion for MatrixMarket-style road network dumps.
//!
//! Lines starting with `%` and blank lines are comments. The first line with more than two
//! fields is the `rows cols nnz` header and is skipped, as is any other line with more than two
//! fields. Every remaining line must hold two integer vertex ids; lines that do not are logged
//! and skipped rather than failing the whole load.

use std::fs::File;
use std::io::{
    BufRead,
    BufReader,
};
use std::path::Path;

use tracing::{
    info,
    instrument,
    warn,
};

use crate::errors::IndexError;
use crate::graph::{
    Graph,
    VertexId,
};

/// Result of loading an edge list.
#[derive(Debug)]
pub struct ParsedGraph {
    /// The graph built from every edge line.
    pub graph: Graph,
    /// First vertex id encountered in the file, the default traversal start.
    pub start: Option<VertexId>,
    /// Number of data lines skipped because they could not be parsed.
    pub skipped: usize,
}

/// Parse a single line. `Ok(None)` means the line carries no edge (comment, blank, header).
pub fn parse_edge_line(line_no: usize, text: &str) -> Result<Option<(VertexId, VertexId)>, IndexError> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.starts_with('%') {
        return Ok(None);
    }

    let fields: Vec<&str> = trimmed.split_whitespace().collect();
    if fields.len() > 2 {
        return Ok(None);
    }

    let malformed = || IndexError::MalformedInput { line: line_no, content: trimmed.to_owned() };
    let &[u, v] = fields.as_slice() else { return Err(malformed()) };
    let u = u.parse().map_err(|_| malformed())?;
    let v = v.parse().map_err(|_| malformed())?;
    Ok(Some((u, v)))
}

/// Parse an edge list from any buffered reader.
pub fn parse_edge_list<R: BufRead>(reader: R) -> Result<ParsedGraph, IndexError> {
    let mut graph = Graph::new();
    let mut start = None;
    let mut skipped = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        match parse_edge_line(idx + 1, &line) {
            Ok(Some((u, v))) => {
                start.get_or_insert(u);
                graph.add_edge(u, v);
            },
            Ok(None) => {},
            Err(err) => {
                warn!(%err, "skipping malformed line");
                skipped += 1;
            },
        }
    }

    Ok(ParsedGraph { graph, start, skipped })
}

/// Read and parse an edge-list file.
#[instrument]
pub fn read_edge_list(path: &Path) -> Result<ParsedGraph, IndexError> {
    let file = File::open(path)?;
    let parsed = parse_edge_list(BufReader::new(file))?;
    info!(
        vertices = parsed.graph.vertex_count(),
        edges = parsed.graph.edge_count(),
        skipped = parsed.skipped,
        "loaded edge list"
    );
    Ok(parsed)
}
