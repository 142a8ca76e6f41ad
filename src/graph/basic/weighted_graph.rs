//! A label-keyed adjacency-list graph whose edges carry weights.
//!
//! Each adjacency entry is a `(neighbor, weight)` pair. For undirected graphs the same
//! weight is attached to both directions of an inserted edge.

use core::fmt;
use core::marker::PhantomData;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::error::{Error, Result};
use crate::graph::basic::vertex_table::VertexTable;
use crate::graph::basic::{Directed, EdgeType, Undirected};
use crate::graph::view::{GraphView, VertexId};

/// A weighted adjacency-list graph keyed by vertex labels.
///
/// Weights are stored as given. Algorithms with requirements on them (Dijkstra needs
/// non-negative weights) validate at call time, not at insertion.
///
/// There are no removal operations; weighted graphs are built once and then queried.
#[derive(Clone)]
pub struct WeightedAdjacencyGraph<V, W, Ty = Undirected> {
    table: VertexTable<V, (V, W)>,
    _ty: PhantomData<Ty>,
}

/// An undirected weighted graph.
pub type WeightedGraph<V, W> = WeightedAdjacencyGraph<V, W, Undirected>;

/// A directed weighted graph.
pub type WeightedDiGraph<V, W> = WeightedAdjacencyGraph<V, W, Directed>;

impl<V: VertexId, W: Copy, Ty: EdgeType> WeightedAdjacencyGraph<V, W, Ty> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            table: VertexTable::new(),
            _ty: PhantomData,
        }
    }

    /// Creates an empty graph with room for `vertex_count` vertices.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            table: VertexTable::with_capacity(vertex_count),
            _ty: PhantomData,
        }
    }

    /// Builds a graph by inserting each `(u, v, weight)` triple with [`WeightedAdjacencyGraph::add_edge`].
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V, W)>,
    {
        let mut graph = Self::new();
        for (u, v, weight) in edges {
            graph.add_edge(u, v, weight);
        }
        graph
    }

    /// Builds a graph from raw weighted adjacency lists, stored exactly as given.
    ///
    /// # Errors
    /// Returns [`Error::VertexNotFound`] if a neighbor is not itself listed as a vertex.
    pub fn from_adjacency_lists<I>(lists: I) -> Result<Self>
    where
        I: IntoIterator<Item = (V, Vec<(V, W)>)>,
    {
        let lists: Vec<(V, Vec<(V, W)>)> = lists.into_iter().collect();
        let mut graph = Self::with_capacity(lists.len());
        for (vertex, _) in &lists {
            graph.add_vertex(vertex.clone());
        }
        for (vertex, entries) in lists {
            if let Some((missing, _)) = entries.iter().find(|(n, _)| !graph.table.contains(n)) {
                return Err(Error::vertex_not_found(missing));
            }
            for entry in entries {
                graph.table.push(&vertex, entry);
            }
        }
        Ok(graph)
    }

    /// Adds `vertex` with an empty adjacency sequence. Returns `false` if it already existed.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        self.table.insert(vertex)
    }

    /// Adds an edge of the given `weight`, creating missing endpoints.
    ///
    /// Undirected graphs store the edge in both directions with the same weight. Parallel
    /// edges are kept.
    pub fn add_edge(&mut self, from: V, to: V, weight: W) {
        self.add_vertex(from.clone());
        self.add_vertex(to.clone());
        if !Ty::is_directed() {
            self.table.push(&to, (from.clone(), weight));
        }
        self.table.push(&from, (to, weight));
    }

    /// Returns `true` if `vertex` is in the graph.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.table.contains(vertex)
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.table.len()
    }

    /// Returns the number of edges, counting parallel copies; undirected edges count once.
    pub fn edge_count(&self) -> usize {
        let entries = self.table.entry_count();
        if Ty::is_directed() {
            entries
        } else {
            entries / 2
        }
    }

    /// Returns the `(neighbor, weight)` entries of `vertex`, in insertion order.
    ///
    /// # Errors
    /// Returns [`Error::VertexNotFound`] if `vertex` is absent.
    pub fn weighted_neighbors(&self, vertex: &V) -> Result<&[(V, W)]> {
        self.table
            .list(vertex)
            .ok_or_else(|| Error::vertex_not_found(vertex))
    }

    /// Returns the smallest weight among the stored `from -> to` entries, if any.
    pub fn edge_weight(&self, from: &V, to: &V) -> Option<W>
    where
        W: PartialOrd,
    {
        self.table
            .list(from)?
            .iter()
            .filter(|(n, _)| n == to)
            .map(|&(_, w)| w)
            .reduce(|best, w| if w < best { w } else { best })
    }

    /// Returns all vertices in insertion order.
    pub fn vertices(&self) -> &[V] {
        self.table.order()
    }

    /// Iterates over every stored adjacency entry as `(from, to, weight)`.
    ///
    /// Undirected edges appear once per direction.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V, W)> + '_ {
        self.table
            .iter()
            .flat_map(|(from, list)| list.iter().map(move |(to, w)| (from, to, *w)))
    }

    /// Returns `true` for [`WeightedDiGraph`].
    pub fn is_directed(&self) -> bool {
        Ty::is_directed()
    }
}

impl<V: VertexId, W: Copy, Ty: EdgeType> Default for WeightedAdjacencyGraph<V, W, Ty> {
    fn default() -> Self {
        Self::new()
    }
}

/// Neighbor labels of a weighted adjacency sequence, without the weights.
pub struct Labels<'a, V, W> {
    inner: core::slice::Iter<'a, (V, W)>,
}

impl<'a, V, W> Iterator for Labels<'a, V, W> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(v, _)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V: VertexId, W: Copy, Ty: EdgeType> GraphView for WeightedAdjacencyGraph<V, W, Ty> {
    type Vertex = V;
    type Vertices<'a> = core::slice::Iter<'a, V> where Self: 'a;
    type Adjacent<'a> = Labels<'a, V, W> where Self: 'a;

    fn vertex_count(&self) -> usize {
        self.table.len()
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.table.contains(vertex)
    }

    fn vertices(&self) -> Self::Vertices<'_> {
        self.table.order().iter()
    }

    fn adjacent<'a>(&'a self, vertex: &V) -> Self::Adjacent<'a> {
        Labels {
            inner: self.table.list(vertex).unwrap_or(&[]).iter(),
        }
    }

    fn is_directed(&self) -> bool {
        Ty::is_directed()
    }
}

impl<V: VertexId, W: Copy + fmt::Debug, Ty: EdgeType> fmt::Debug for WeightedAdjacencyGraph<V, W, Ty> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.table.iter()).finish()
    }
}

impl<V, W, Ty> Serialize for WeightedAdjacencyGraph<V, W, Ty>
where
    V: VertexId + Serialize,
    W: Copy + Serialize,
    Ty: EdgeType,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.table.iter())
    }
}

impl<'de, V, W, Ty> Deserialize<'de> for WeightedAdjacencyGraph<V, W, Ty>
where
    V: VertexId + Deserialize<'de>,
    W: Copy + Deserialize<'de>,
    Ty: EdgeType,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let lists = Vec::<(V, Vec<(V, W)>)>::deserialize(deserializer)?;
        Self::from_adjacency_lists(lists).map_err(serde::de::Error::custom)
    }
}
