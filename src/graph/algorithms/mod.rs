//! Graph algorithms over the adjacency-list stores.
//!
//! - [`traversal`]: DFS (recursive and iterative), BFS, BFS levels
//! - [`shortest_path`]: unweighted BFS paths and Dijkstra on weighted graphs
//! - [`analysis`]: cycle detection, topological order, connected components
//!
//! Every algorithm is read-only with respect to the graph and allocates its own
//! visitation state per call.

pub mod analysis;
pub mod shortest_path;
pub mod traversal;

pub use analysis::{
    connected_components, count_connected_components, has_cycle_directed, has_cycle_undirected,
    topological_sort,
};
pub use shortest_path::{
    dijkstra, dijkstra_distances, path_cost, shortest_path, EdgeWeight, WeightedPath,
};
pub use traversal::{bfs, bfs_levels, dfs_iterative, dfs_recursive, Bfs, Dfs};

use crate::error::{Error, Result};
use crate::graph::view::GraphView;

pub(crate) fn require_vertex<G: GraphView>(graph: &G, vertex: &G::Vertex) -> Result<()> {
    if graph.contains_vertex(vertex) {
        Ok(())
    } else {
        tracing::debug!(?vertex, "vertex not found");
        Err(Error::vertex_not_found(vertex))
    }
}
