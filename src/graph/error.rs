use std::fmt::Debug;

use thiserror::Error;

/// Everything that can go wrong when editing or querying a labelled graph.
///
/// Boolean queries such as [`Graph::edge_exists`](super::Graph::edge_exists) never fail;
/// the absence of a structure (e.g. no transitive orientation) is reported as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError<V: Debug> {
    #[error("vertex {0:?} does not exist")]
    UnknownVertex(V),

    #[error("edge ({0:?}, {1:?}) does not exist")]
    UnknownEdge(V, V),

    #[error("vertex {0:?} already exists")]
    DuplicateVertex(V),

    #[error("edge ({0:?}, {1:?}) already exists")]
    DuplicateEdge(V, V),

    #[error("self-loop at vertex {0:?} is not allowed")]
    SelfLoop(V),
}

pub type GraphResult<T, V> = std::result::Result<T, GraphError<V>>;
