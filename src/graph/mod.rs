//! Adjacency-list graphs and the algorithms that run over them.
//!
//! Graph functionality is organized into:
//! - `basic`: the unweighted and weighted adjacency-list stores
//! - `view`: the read-only [`GraphView`] trait the algorithms are written against
//! - `algorithms`: traversal, shortest paths and structural analysis

pub mod algorithms;
pub mod basic;
pub mod view;
pub(crate) mod access;

// Re-export commonly used types from submodules
pub use basic::{
    AdjacencyGraph, DiGraph, Directed, EdgeType, Graph, Labels, Undirected, WeightedAdjacencyGraph,
    WeightedDiGraph, WeightedGraph,
};
pub use view::{GraphView, VertexId};
