//! Depth-first and breadth-first walks over any [`GraphView`].
//!
//! Three eager forms return the visitation order as a `Vec`:
//! - [`dfs_recursive`]: classic pre-order DFS, recursion depth bounded by the longest
//!   simple path reachable from `start`
//! - [`dfs_iterative`]: explicit stack, marks vertices when they are *pushed*
//! - [`bfs`]: FIFO queue, marks vertices when they are enqueued
//!
//! The lazy iterators [`Dfs`] and [`Bfs`] produce the same sequences as the iterative
//! functions, one vertex at a time.
//!
//! All walks fail with [`Error::VertexNotFound`](crate::Error::VertexNotFound) when
//! `start` is not in the graph.

use std::collections::VecDeque;

use crate::error::Result;
use crate::graph::access::visited::VisitedSet;
use crate::graph::algorithms::require_vertex;
use crate::graph::view::GraphView;

/// An iterator for Breadth-First Search (BFS).
///
/// This iterator yields vertex labels in BFS order.
/// It uses an internal `VecDeque` and a visited set for state management.
pub struct Bfs<'a, G: GraphView> {
    graph: &'a G,
    visited: VisitedSet<G::Vertex>,
    queue: VecDeque<G::Vertex>,
}

impl<'a, G: GraphView> Bfs<'a, G> {
    /// Creates a new BFS iterator starting from `start`.
    ///
    /// # Errors
    /// Returns [`Error::VertexNotFound`](crate::Error::VertexNotFound) if `start` is absent.
    pub fn new(graph: &'a G, start: &G::Vertex) -> Result<Self> {
        require_vertex(graph, start)?;
        let mut visited = VisitedSet::with_capacity(graph.vertex_count());
        visited.try_visit(start);
        let mut queue = VecDeque::new();
        queue.push_back(start.clone());

        Ok(Self {
            graph,
            visited,
            queue,
        })
    }
}

impl<'a, G: GraphView> Iterator for Bfs<'a, G> {
    type Item = G::Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for v in self.graph.adjacent(&u) {
            if self.visited.try_visit(v) {
                self.queue.push_back(v.clone());
            }
        }

        Some(u)
    }
}

/// An iterator for Depth-First Search (DFS) with an explicit stack.
///
/// A vertex is marked when it is pushed, and neighbors are pushed in adjacency order, so
/// the *last* neighbor is explored first. The resulting order generally differs from
/// [`dfs_recursive`]; both visit every reachable vertex exactly once.
pub struct Dfs<'a, G: GraphView> {
    graph: &'a G,
    visited: VisitedSet<G::Vertex>,
    stack: Vec<G::Vertex>,
}

impl<'a, G: GraphView> Dfs<'a, G> {
    /// Creates a new DFS iterator starting from `start`.
    ///
    /// # Errors
    /// Returns [`Error::VertexNotFound`](crate::Error::VertexNotFound) if `start` is absent.
    pub fn new(graph: &'a G, start: &G::Vertex) -> Result<Self> {
        require_vertex(graph, start)?;
        let mut visited = VisitedSet::with_capacity(graph.vertex_count());
        visited.try_visit(start);

        Ok(Self {
            graph,
            visited,
            stack: vec![start.clone()],
        })
    }
}

impl<'a, G: GraphView> Iterator for Dfs<'a, G> {
    type Item = G::Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.stack.pop()?;

        for v in self.graph.adjacent(&u) {
            if self.visited.try_visit(v) {
                self.stack.push(v.clone());
            }
        }

        Some(u)
    }
}

/// Recursive depth-first pre-order from `start`.
///
/// Neighbors are explored in adjacency order. Each nested call consumes stack, so very
/// deep graphs should use [`dfs_iterative`] instead.
///
/// # Errors
/// Returns [`Error::VertexNotFound`](crate::Error::VertexNotFound) if `start` is absent.
pub fn dfs_recursive<G: GraphView>(graph: &G, start: &G::Vertex) -> Result<Vec<G::Vertex>> {
    fn visit<G: GraphView>(
        graph: &G,
        vertex: &G::Vertex,
        visited: &mut VisitedSet<G::Vertex>,
        order: &mut Vec<G::Vertex>,
    ) {
        visited.try_visit(vertex);
        order.push(vertex.clone());

        for neighbor in graph.adjacent(vertex) {
            if !visited.is_visited(neighbor) {
                visit(graph, neighbor, visited, order);
            }
        }
    }

    require_vertex(graph, start)?;
    let mut visited = VisitedSet::with_capacity(graph.vertex_count());
    let mut order = Vec::new();
    visit(graph, start, &mut visited, &mut order);

    tracing::debug!(?start, visited = order.len(), "recursive dfs complete");
    Ok(order)
}

/// Iterative depth-first walk from `start`; see [`Dfs`] for the visitation order.
///
/// # Errors
/// Returns [`Error::VertexNotFound`](crate::Error::VertexNotFound) if `start` is absent.
pub fn dfs_iterative<G: GraphView>(graph: &G, start: &G::Vertex) -> Result<Vec<G::Vertex>> {
    let order: Vec<_> = Dfs::new(graph, start)?.collect();
    tracing::debug!(?start, visited = order.len(), "iterative dfs complete");
    Ok(order)
}

/// Breadth-first walk from `start`, neighbors taken in adjacency order.
///
/// # Errors
/// Returns [`Error::VertexNotFound`](crate::Error::VertexNotFound) if `start` is absent.
pub fn bfs<G: GraphView>(graph: &G, start: &G::Vertex) -> Result<Vec<G::Vertex>> {
    let order: Vec<_> = Bfs::new(graph, start)?.collect();
    tracing::debug!(?start, visited = order.len(), "bfs complete");
    Ok(order)
}

/// Breadth-first walk grouped by hop distance from `start`.
///
/// `levels[0]` is `[start]`, `levels[k]` holds every vertex whose shortest path from
/// `start` has exactly `k` edges. Within a level, vertices keep BFS order.
///
/// # Errors
/// Returns [`Error::VertexNotFound`](crate::Error::VertexNotFound) if `start` is absent.
pub fn bfs_levels<G: GraphView>(graph: &G, start: &G::Vertex) -> Result<Vec<Vec<G::Vertex>>> {
    require_vertex(graph, start)?;

    let mut visited = VisitedSet::with_capacity(graph.vertex_count());
    visited.try_visit(start);
    let mut levels = Vec::new();
    let mut frontier = vec![start.clone()];

    while !frontier.is_empty() {
        let mut next = Vec::new();
        for vertex in &frontier {
            for neighbor in graph.adjacent(vertex) {
                if visited.try_visit(neighbor) {
                    next.push(neighbor.clone());
                }
            }
        }
        levels.push(frontier);
        frontier = next;
    }

    tracing::debug!(?start, depth = levels.len(), visited = visited.len(), "bfs levels complete");
    Ok(levels)
}
