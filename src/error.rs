use std::path::PathBuf;

use thiserror::Error;

use crate::graphs::{EdgeId, VertexId};

/// Errors raised by the road map when its structure would be violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("a city named {0:?} already exists")]
    DuplicateVertex(String),

    #[error("unknown vertex {0}")]
    UnknownVertex(VertexId),

    #[error("unknown edge {0}")]
    UnknownEdge(EdgeId),

    #[error("vertices {0} and {1} are already connected by a highway")]
    DuplicateEdge(VertexId, VertexId),

    #[error("a highway may not connect vertex {0} to itself")]
    SelfLoop(VertexId),
}

/// Errors raised by the adaptable priority queue.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    #[error("the queue is empty")]
    Empty,

    #[error("the locator does not refer to a live entry")]
    InvalidToken,

    #[error("the new key is greater than the current key")]
    KeyIncrease,
}

/// Errors of a single shortest path query.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("priority queue invariant violated: {0}")]
    Queue(#[from] QueueError),
}

/// Errors while reading city and highway records.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("unable to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path:?} line {line}: {reason}")]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("{path:?} line {line}: no city named {name:?}")]
    UnknownCity {
        path: PathBuf,
        line: usize,
        name: String,
    },

    #[error("{path:?} line {line}: {source}")]
    Graph {
        path: PathBuf,
        line: usize,
        #[source]
        source: GraphError,
    },
}
