//! Error type shared by the graph stores, algorithms and the priority queue.

use thiserror::Error;

/// The error type for every fallible graph and queue operation in this crate.
///
/// All variants describe a problem with a single call. None of them are transient, so
/// retrying the same call with the same inputs yields the same error.
///
/// # Error Categories
///
/// - [`Error::VertexNotFound`] - an operation named a vertex that is not in the store
/// - [`Error::NegativeWeight`] - Dijkstra was handed an edge it cannot process
/// - [`Error::CycleDetected`] - a topological order was requested for a cyclic graph
/// - [`Error::EmptyQueue`] - a value was dequeued from an empty priority queue
///
/// Vertex labels are rendered with their `Debug` representation so the error stays
/// independent of the label type.
///
/// # Examples
///
/// ```rust
/// use graphwalk::{algorithms::bfs, Error, Graph};
///
/// let mut graph = Graph::new();
/// graph.add_edge("a", "b");
///
/// match bfs(&graph, &"z") {
///     Err(Error::VertexNotFound(label)) => assert_eq!(label, "\"z\""),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The referenced vertex does not exist in the graph.
    #[error("vertex {0} does not exist in the graph")]
    VertexNotFound(String),

    /// An edge carries a weight that is negative or cannot be ordered against zero.
    #[error("edge {from} -> {to} has weight {weight}, shortest paths require non-negative weights")]
    NegativeWeight {
        /// Source vertex of the offending edge.
        from: String,
        /// Target vertex of the offending edge.
        to: String,
        /// The offending weight.
        weight: String,
    },

    /// The graph contains a cycle, so no topological order exists.
    #[error("graph is not acyclic: a cycle closes at vertex {vertex}")]
    CycleDetected {
        /// The vertex reached through a back edge.
        vertex: String,
    },

    /// `dequeue` was called on an empty priority queue.
    #[error("cannot dequeue from an empty priority queue")]
    EmptyQueue,
}

impl Error {
    pub(crate) fn vertex_not_found<V: core::fmt::Debug>(vertex: &V) -> Self {
        Error::VertexNotFound(format!("{vertex:?}"))
    }
}

/// `Result` specialised to this crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
