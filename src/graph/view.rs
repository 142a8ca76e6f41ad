//! Read-only access to adjacency-list graphs.
//!
//! Every traversal and analyzer in [`crate::graph::algorithms`] is written against
//! [`GraphView`], so the unweighted and weighted stores (directed or not) share one
//! implementation of each algorithm.

use core::fmt::Debug;
use core::hash::Hash;

/// A vertex label: any hashable, comparable, cloneable value.
///
/// `Debug` is required so errors can name the vertex that caused them.
pub trait VertexId: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> VertexId for T {}

/// Read-only view of an adjacency-list graph.
pub trait GraphView {
    /// The vertex label type.
    type Vertex: VertexId;

    /// Iterator over all vertices, in insertion order.
    type Vertices<'a>: Iterator<Item = &'a Self::Vertex>
    where
        Self: 'a;

    /// Iterator over the adjacency sequence of one vertex, in insertion order.
    type Adjacent<'a>: Iterator<Item = &'a Self::Vertex>
    where
        Self: 'a;

    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Returns `true` if `vertex` is in the graph.
    fn contains_vertex(&self, vertex: &Self::Vertex) -> bool;

    /// All vertices, in the order they were created.
    fn vertices(&self) -> Self::Vertices<'_>;

    /// The vertices adjacent to `vertex`. Parallel edges repeat the neighbor.
    ///
    /// Yields nothing if `vertex` is not in the graph; callers that must distinguish
    /// that case check [`GraphView::contains_vertex`] first.
    fn adjacent<'a>(&'a self, vertex: &Self::Vertex) -> Self::Adjacent<'a>;

    /// Returns `true` if edges are one-way.
    fn is_directed(&self) -> bool;
}
