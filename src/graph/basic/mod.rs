//! Basic graph implementations.
//!
//! This module contains the adjacency-list stores that every algorithm in the crate
//! reads from: an unweighted store and a weighted store, each directed or undirected
//! according to an [`EdgeType`] marker.

pub mod adjacency_graph;
pub mod weighted_graph;
mod vertex_table;

pub use adjacency_graph::{AdjacencyGraph, DiGraph, Graph};
pub use weighted_graph::{Labels, WeightedAdjacencyGraph, WeightedDiGraph, WeightedGraph};

/// Marker trait for graph edge directionality.
pub trait EdgeType {
    /// Returns true if the graph is directed.
    fn is_directed() -> bool;
}

/// Marker for directed graphs: `add_edge(u, v)` stores `u -> v` only.
#[derive(Clone, Copy, Debug, Default)]
pub struct Directed;

/// Marker for undirected graphs: `add_edge(u, v)` stores both directions.
#[derive(Clone, Copy, Debug, Default)]
pub struct Undirected;

impl EdgeType for Directed {
    fn is_directed() -> bool {
        true
    }
}

impl EdgeType for Undirected {
    fn is_directed() -> bool {
        false
    }
}
