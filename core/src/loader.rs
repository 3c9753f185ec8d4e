//! # Distance File Loader
//!
//! Reads delimiter-separated `from,to,weight` records into a labelled undirected graph.
//!
//! * Blank lines are skipped.
//! * Fields are trimmed, so `rome , milan , 477.3` is accepted.
//! * A link listed twice (in either direction) keeps its first weight.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use prim_common::error::LoadError;
use tracing::{debug, info};

use crate::graph::{AdjacencyGraph, Graph};

pub type DistanceGraph = AdjacencyGraph<String, f64>;

/// Opens `path` and reads it with [`read_graph`].
pub fn load_graph(path: &Path, delimiter: char) -> Result<DistanceGraph, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let graph = read_graph(BufReader::new(file), delimiter)?;
    info!(
        "Loaded {} nodes and {} links from {}",
        graph.num_nodes(),
        graph.num_links(),
        path.display()
    );
    Ok(graph)
}

pub fn read_graph(reader: impl BufRead, delimiter: char) -> Result<DistanceGraph, LoadError> {
    let mut graph = DistanceGraph::labelled_undirected();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| LoadError::Read { line: line_no, source })?;

        if line.trim().is_empty() {
            continue;
        }

        let (from, to, weight) = parse_record(&line, delimiter, line_no)?;

        graph.add_node(from.to_string());
        graph.add_node(to.to_string());
        if !graph.add_edge(from.to_string(), to.to_string(), Some(weight))? {
            debug!("Line {line_no}: link {from} - {to} already present, keeping the first weight");
        }
    }

    Ok(graph)
}

fn parse_record(line: &str, delimiter: char, line_no: usize) -> Result<(&str, &str, f64), LoadError> {
    let mut fields = line.split(delimiter).map(str::trim);

    let (Some(from), Some(to), Some(raw_weight)) = (fields.next(), fields.next(), fields.next()) else {
        return Err(LoadError::MalformedLine {
            line: line_no,
            content: line.to_string(),
        });
    };

    if from.is_empty() || to.is_empty() {
        return Err(LoadError::MalformedLine {
            line: line_no,
            content: line.to_string(),
        });
    }

    let weight = raw_weight
        .parse::<f64>()
        .ok()
        .filter(|w| !w.is_nan())
        .ok_or_else(|| LoadError::InvalidWeight {
            line: line_no,
            value: raw_weight.to_string(),
        })?;

    Ok((from, to, weight))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
