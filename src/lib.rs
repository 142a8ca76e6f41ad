//! # `graphwalk` - Adjacency-List Graph Algorithms
//!
//! Label-keyed adjacency-list graphs together with the classic algorithms that run over
//! them: depth-first and breadth-first traversal, unweighted and weighted (Dijkstra)
//! shortest paths, cycle detection, topological ordering and connected components.
//!
//! ## Architecture
//!
//! Components, leaves first:
//!
//! 1. **Stores** ([`Graph`], [`DiGraph`], [`WeightedGraph`], [`WeightedDiGraph`]):
//!    - Map each vertex label to an ordered adjacency sequence
//!    - Undirected stores keep every edge symmetric; parallel edges are kept
//!    - Vertices are created explicitly or implicitly by edge insertion
//!
//! 2. **Priority queue** ([`PriorityQueue`]):
//!    - Binary min-heap of `(value, priority)` pairs
//!    - Backs Dijkstra; stale duplicates stand in for decrease-key
//!
//! 3. **Algorithms** ([`algorithms`]):
//!    - Written once against the read-only [`GraphView`] trait
//!    - Never mutate the store; all visitation state is local to a call
//!
//! ## Error policy
//!
//! Operations that name a vertex fail with [`Error::VertexNotFound`] when it is absent.
//! "No path" is an ordinary result (`Ok(None)`), not an error. Violated preconditions
//! (negative weights for Dijkstra, cycles for topological sort) are reported as errors
//! instead of producing a wrong answer.
//!
//! ## Logging
//!
//! Algorithms emit [`tracing`] events (`debug` on completion, `trace` per step, `warn`
//! on rejected input). The crate never installs a subscriber.
//!
//! ## Example
//!
//! ```rust
//! use graphwalk::algorithms::{bfs, dijkstra, shortest_path};
//! use graphwalk::{Graph, WeightedGraph};
//!
//! let mut graph = Graph::new();
//! for (u, v) in [("A", "B"), ("A", "C"), ("B", "D"), ("C", "E"), ("D", "E"), ("D", "F"), ("E", "F")] {
//!     graph.add_edge(u, v);
//! }
//! assert_eq!(bfs(&graph, &"A")?, vec!["A", "B", "C", "D", "E", "F"]);
//! assert_eq!(shortest_path(&graph, &"A", &"F")?.map(|p| p.len()), Some(4));
//!
//! let mut roads = WeightedGraph::new();
//! roads.add_edge("A", "B", 1);
//! roads.add_edge("B", "C", 1);
//! roads.add_edge("A", "C", 5);
//! let best = dijkstra(&roads, &"A", &"C")?.expect("C is reachable");
//! assert_eq!(best.vertices, vec!["A", "B", "C"]);
//! assert_eq!(best.cost, 2);
//! # Ok::<(), graphwalk::Error>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod error;
pub mod graph;

pub use collections::PriorityQueue;
pub use error::{Error, Result};
pub use graph::algorithms;
pub use graph::{
    AdjacencyGraph, DiGraph, Directed, EdgeType, Graph, GraphView, Undirected, VertexId,
    WeightedAdjacencyGraph, WeightedDiGraph, WeightedGraph,
};
