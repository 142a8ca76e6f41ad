//! Per-call visitation state for graph walks.
//!
//! This provides two internal implementations:
//! - `VisitedSet`: a plain visited/not-visited set, for traversals and undirected analyzers
//! - `VertexMarks`: three-state marking (unvisited / in progress / finished), for directed
//!   cycle detection and topological sorting, where a back edge must be told apart from a
//!   cross edge
//!
//! Both are created fresh for each algorithm call and never stored on the graph.

use std::collections::{HashMap, HashSet};

use crate::graph::view::VertexId;

/// A visited set keyed by vertex label.
pub(crate) struct VisitedSet<V> {
    seen: HashSet<V>,
}

impl<V: VertexId> VisitedSet<V> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            seen: HashSet::with_capacity(capacity),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.seen.len()
    }

    /// Returns `true` iff this call observed the vertex as not-yet-visited and marks it visited.
    #[inline]
    pub(crate) fn try_visit(&mut self, vertex: &V) -> bool {
        if self.seen.contains(vertex) {
            false
        } else {
            self.seen.insert(vertex.clone());
            true
        }
    }

    #[inline]
    pub(crate) fn is_visited(&self, vertex: &V) -> bool {
        self.seen.contains(vertex)
    }
}

/// The three DFS states of a vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Mark {
    Unvisited,
    InProgress,
    Finished,
}

/// Three-state vertex marks; vertices never touched read as [`Mark::Unvisited`].
pub(crate) struct VertexMarks<V> {
    marks: HashMap<V, Mark>,
}

impl<V: VertexId> VertexMarks<V> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            marks: HashMap::with_capacity(capacity),
        }
    }

    #[inline]
    pub(crate) fn get(&self, vertex: &V) -> Mark {
        self.marks.get(vertex).copied().unwrap_or(Mark::Unvisited)
    }

    #[inline]
    pub(crate) fn set(&mut self, vertex: &V, mark: Mark) {
        if let Some(slot) = self.marks.get_mut(vertex) {
            *slot = mark;
        } else {
            self.marks.insert(vertex.clone(), mark);
        }
    }
}
