//! A dynamic, label-keyed adjacency-list graph.
//!
//! This representation prioritizes **dynamic updates** (edge/vertex insertion and deletion).
//! Vertices are arbitrary labels rather than dense indices, and each vertex owns an
//! ordered adjacency sequence. Edge insertion never deduplicates: calling `add_edge(u, v)`
//! twice stores the edge twice.
//!
//! Direction is chosen by the `Ty` marker:
//! - [`Graph`] (undirected): `add_edge(u, v)` appends `v` to `u`'s list **and** `u` to `v`'s list
//! - [`DiGraph`] (directed): `add_edge(u, v)` appends `v` to `u`'s list only

use core::fmt;
use core::marker::PhantomData;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::error::{Error, Result};
use crate::graph::basic::vertex_table::VertexTable;
use crate::graph::basic::{Directed, EdgeType, Undirected};
use crate::graph::view::{GraphView, VertexId};

/// An unweighted adjacency-list graph keyed by vertex labels.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(1)\) amortized | Idempotent |
/// | `add_edge` | \(O(1)\) amortized | Creates missing endpoints, never deduplicates |
/// | `remove_edge` | \(O(\deg u + \deg v)\) | Removes every parallel copy |
/// | `remove_vertex` | \(O(n + m)\) | Undirected graphs only touch the neighbors' lists |
/// | `degree` | \(O(1)\) | Length of the adjacency sequence |
/// | `has_edge` | \(O(\deg u)\) | Linear scan |
#[derive(Clone)]
pub struct AdjacencyGraph<V, Ty = Undirected> {
    table: VertexTable<V, V>,
    _ty: PhantomData<Ty>,
}

/// An undirected, unweighted graph.
pub type Graph<V> = AdjacencyGraph<V, Undirected>;

/// A directed, unweighted graph.
pub type DiGraph<V> = AdjacencyGraph<V, Directed>;

impl<V: VertexId, Ty: EdgeType> AdjacencyGraph<V, Ty> {
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

    /// Builds a graph by inserting each `(u, v)` pair with [`AdjacencyGraph::add_edge`].
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Builds a graph from raw adjacency lists, stored exactly as given.
    ///
    /// Lists are taken verbatim (no mirroring for undirected graphs), which makes this the
    /// inverse of serialization. A vertex listed twice has its lists concatenated.
    ///
    /// # Errors
    /// Returns [`Error::VertexNotFound`] if a neighbor is not itself listed as a vertex.
    pub fn from_adjacency_lists<I>(lists: I) -> Result<Self>
    where
        I: IntoIterator<Item = (V, Vec<V>)>,
    {
        let lists: Vec<(V, Vec<V>)> = lists.into_iter().collect();
        let mut graph = Self::with_capacity(lists.len());
        for (vertex, _) in &lists {
            graph.add_vertex(vertex.clone());
        }
        for (vertex, neighbors) in lists {
            if let Some(missing) = neighbors.iter().find(|n| !graph.table.contains(n)) {
                return Err(Error::vertex_not_found(missing));
            }
            for neighbor in neighbors {
                graph.table.push(&vertex, neighbor);
            }
        }
        Ok(graph)
    }

    /// Adds `vertex` with an empty adjacency sequence.
    ///
    /// Idempotent: returns `false` and leaves the graph untouched if it already exists.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        self.table.insert(vertex)
    }

    /// Adds the edge `from - to` (or `from -> to` for directed graphs).
    ///
    /// Missing endpoints are created first. Repeated calls store parallel copies of the
    /// edge. A self-loop in an undirected graph appears twice in its vertex's list.
    pub fn add_edge(&mut self, from: V, to: V) {
        self.add_vertex(from.clone());
        self.add_vertex(to.clone());
        if !Ty::is_directed() {
            self.table.push(&to, from.clone());
        }
        self.table.push(&from, to);
    }

    /// Removes every copy of the edge between `from` and `to`.
    ///
    /// For undirected graphs both directions are removed. Returns the number of entries
    /// removed from `from`'s adjacency sequence (zero if there was no such edge).
    ///
    /// # Errors
    /// Returns [`Error::VertexNotFound`] if either endpoint is absent.
    pub fn remove_edge(&mut self, from: &V, to: &V) -> Result<usize> {
        if !self.table.contains(to) {
            return Err(Error::vertex_not_found(to));
        }
        let list = self
            .table
            .list_mut(from)
            .ok_or_else(|| Error::vertex_not_found(from))?;
        let before = list.len();
        list.retain(|v| v != to);
        let removed = before - list.len();

        if !Ty::is_directed() {
            if let Some(back) = self.table.list_mut(to) {
                back.retain(|v| v != from);
            }
        }
        Ok(removed)
    }

    /// Removes `vertex` together with every edge incident to it.
    ///
    /// For directed graphs this includes edges pointing *into* `vertex`, which requires a
    /// scan of every adjacency sequence.
    ///
    /// # Errors
    /// Returns [`Error::VertexNotFound`] if `vertex` is absent.
    pub fn remove_vertex(&mut self, vertex: &V) -> Result<()> {
        let outgoing = self
            .table
            .remove(vertex)
            .ok_or_else(|| Error::vertex_not_found(vertex))?;

        if Ty::is_directed() {
            for list in self.table.lists_mut() {
                list.retain(|v| v != vertex);
            }
        } else {
            for neighbor in &outgoing {
                if let Some(list) = self.table.list_mut(neighbor) {
                    list.retain(|v| v != vertex);
                }
            }
        }
        tracing::trace!(?vertex, dropped_edges = outgoing.len(), "removed vertex");
        Ok(())
    }

    /// Returns `true` if `vertex` is in the graph.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.table.contains(vertex)
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.table.len()
    }

    /// Returns the number of edges, counting parallel copies.
    ///
    /// An undirected edge (including a self-loop) counts once.
    pub fn edge_count(&self) -> usize {
        let entries = self.table.entry_count();
        if Ty::is_directed() {
            entries
        } else {
            entries / 2
        }
    }

    /// Returns the length of `vertex`'s adjacency sequence.
    ///
    /// # Errors
    /// Returns [`Error::VertexNotFound`] if `vertex` is absent.
    pub fn degree(&self, vertex: &V) -> Result<usize> {
        self.neighbors(vertex).map(<[V]>::len)
    }

    /// Checks if an edge exists from `from` to `to`.
    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.table
            .list(from)
            .is_some_and(|list| list.iter().any(|v| v == to))
    }

    /// Returns the adjacency sequence of `vertex`, in insertion order.
    ///
    /// # Errors
    /// Returns [`Error::VertexNotFound`] if `vertex` is absent.
    pub fn neighbors(&self, vertex: &V) -> Result<&[V]> {
        self.table
            .list(vertex)
            .ok_or_else(|| Error::vertex_not_found(vertex))
    }

    /// Returns all vertices in insertion order.
    pub fn vertices(&self) -> &[V] {
        self.table.order()
    }

    /// Iterates over every stored adjacency entry as `(from, to)`.
    ///
    /// Undirected edges therefore appear once per direction.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> + '_ {
        self.table
            .iter()
            .flat_map(|(from, list)| list.iter().map(move |to| (from, to)))
    }

    /// Returns `true` for [`DiGraph`].
    pub fn is_directed(&self) -> bool {
        Ty::is_directed()
    }
}

impl<V: VertexId, Ty: EdgeType> Default for AdjacencyGraph<V, Ty> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VertexId, Ty: EdgeType> GraphView for AdjacencyGraph<V, Ty> {
    type Vertex = V;
    type Vertices<'a> = core::slice::Iter<'a, V> where Self: 'a;
    type Adjacent<'a> = core::slice::Iter<'a, V> where Self: 'a;

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
        self.table.list(vertex).unwrap_or(&[]).iter()
    }

    fn is_directed(&self) -> bool {
        Ty::is_directed()
    }
}

impl<V: VertexId, Ty: EdgeType> fmt::Debug for AdjacencyGraph<V, Ty> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.table.iter()).finish()
    }
}

// Serialized as an ordered list of `(vertex, [neighbors...])` pairs.
impl<V, Ty> Serialize for AdjacencyGraph<V, Ty>
where
    V: VertexId + Serialize,
    Ty: EdgeType,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.table.iter())
    }
}

impl<'de, V, Ty> Deserialize<'de> for AdjacencyGraph<V, Ty>
where
    V: VertexId + Deserialize<'de>,
    Ty: EdgeType,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let lists = Vec::<(V, Vec<V>)>::deserialize(deserializer)?;
        Self::from_adjacency_lists(lists).map_err(serde::de::Error::custom)
    }
}
