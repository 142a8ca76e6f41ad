//! Insertion-ordered vertex table shared by the adjacency-list stores.
//!
//! Maps each vertex label to its adjacency sequence and remembers the order in which
//! vertices were created, so whole-graph algorithms seed their walks deterministically.

use std::collections::HashMap;

use crate::graph::view::VertexId;

#[derive(Clone, Debug)]
pub(crate) struct VertexTable<V, E> {
    lists: HashMap<V, Vec<E>>,
    order: Vec<V>,
}

impl<V: VertexId, E> VertexTable<V, E> {
    pub(crate) fn new() -> Self {
        Self {
            lists: HashMap::new(),
            order: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(vertex_count: usize) -> Self {
        Self {
            lists: HashMap::with_capacity(vertex_count),
            order: Vec::with_capacity(vertex_count),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub(crate) fn contains(&self, vertex: &V) -> bool {
        self.lists.contains_key(vertex)
    }

    /// Creates an empty list for `vertex`. Returns `false` if it already existed.
    pub(crate) fn insert(&mut self, vertex: V) -> bool {
        if self.lists.contains_key(&vertex) {
            return false;
        }
        self.order.push(vertex.clone());
        self.lists.insert(vertex, Vec::new());
        true
    }

    #[inline]
    pub(crate) fn list(&self, vertex: &V) -> Option<&[E]> {
        self.lists.get(vertex).map(Vec::as_slice)
    }

    #[inline]
    pub(crate) fn list_mut(&mut self, vertex: &V) -> Option<&mut Vec<E>> {
        self.lists.get_mut(vertex)
    }

    /// Appends `entry` to the list of `vertex`, creating the vertex if needed.
    pub(crate) fn push(&mut self, vertex: &V, entry: E) {
        if let Some(list) = self.lists.get_mut(vertex) {
            list.push(entry);
        } else {
            self.order.push(vertex.clone());
            self.lists.insert(vertex.clone(), vec![entry]);
        }
    }

    /// Drops `vertex` and returns its list.
    pub(crate) fn remove(&mut self, vertex: &V) -> Option<Vec<E>> {
        let list = self.lists.remove(vertex)?;
        self.order.retain(|v| v != vertex);
        Some(list)
    }

    #[inline]
    pub(crate) fn order(&self) -> &[V] {
        &self.order
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&V, &[E])> + '_ {
        self.order
            .iter()
            .filter_map(move |v| self.lists.get(v).map(|list| (v, list.as_slice())))
    }

    pub(crate) fn lists_mut(&mut self) -> impl Iterator<Item = &mut Vec<E>> + '_ {
        self.lists.values_mut()
    }

    pub(crate) fn entry_count(&self) -> usize {
        self.lists.values().map(Vec::len).sum()
    }
}
