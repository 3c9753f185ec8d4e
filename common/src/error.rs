//! Error types shared by the data structures, the algorithm and the loader.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by priority queue operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueueError {
    #[error("Cannot pop from an empty priority queue")]
    Empty,
}

/// Errors raised by graph operations and graph algorithms.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    /// A labelled graph received an edge without a label.
    #[error("Edges of a labelled graph must carry a label")]
    MissingLabel,

    /// A label was requested from a graph that does not store labels.
    #[error("Cannot retrieve label from a non labelled graph")]
    Unlabelled,

    /// The requested node is not part of the graph.
    #[error("The graph does not contain the provided node")]
    NodeNotFound,

    /// The algorithm only works on undirected graphs.
    #[error("A spanning forest can only be computed on an undirected graph")]
    DirectedGraph,
}

/// Errors raised while reading a distance file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line} is malformed, expected 'from,to,weight': {content}")]
    MalformedLine { line: usize, content: String },

    #[error("Line {line} has an invalid weight: {value}")]
    InvalidWeight { line: usize, value: String },

    #[error(transparent)]
    Graph(#[from] GraphError),
}
