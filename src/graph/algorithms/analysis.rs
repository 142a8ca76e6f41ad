//! Whole-graph structural analysis: cycles, topological order, connected components.
//!
//! Each analyzer seeds a depth-first walk from every not-yet-visited vertex, in vertex
//! insertion order. The walks keep their own explicit stack of `(vertex, neighbor
//! iterator)` frames instead of recursing, so graph depth is limited by heap memory only.
//! The order in which vertices are reached is the same as a recursive DFS.

use crate::error::{Error, Result};
use crate::graph::access::visited::{Mark, VertexMarks, VisitedSet};
use crate::graph::view::GraphView;

/// Returns `true` if the graph, read as undirected, contains a cycle.
///
/// A cycle is closed by a neighbor that is still on the current DFS path and is not the
/// vertex we arrived from. Because the parent is tracked by label, parallel copies of the
/// same edge do not count as a cycle: the child skips every copy leading back to its
/// parent, and the parent sees the child again only once it is finished. A self-loop
/// is a cycle.
pub fn has_cycle_undirected<G: GraphView>(graph: &G) -> bool {
    let mut marks = VertexMarks::with_capacity(graph.vertex_count());

    for root in graph.vertices() {
        if marks.get(root) != Mark::Unvisited {
            continue;
        }
        marks.set(root, Mark::InProgress);
        let mut stack = vec![(root, None, graph.adjacent(root))];

        while let Some(frame) = stack.last_mut() {
            let (vertex, parent) = (frame.0, frame.1);
            match frame.2.next() {
                Some(neighbor) => match marks.get(neighbor) {
                    Mark::Unvisited => {
                        marks.set(neighbor, Mark::InProgress);
                        stack.push((neighbor, Some(vertex), graph.adjacent(neighbor)));
                    }
                    Mark::InProgress if parent != Some(neighbor) => {
                        tracing::debug!(?vertex, ?neighbor, "undirected cycle found");
                        return true;
                    }
                    Mark::InProgress | Mark::Finished => {}
                },
                None => {
                    marks.set(vertex, Mark::Finished);
                    stack.pop();
                }
            }
        }
    }

    tracing::debug!(vertices = graph.vertex_count(), "graph is acyclic (undirected)");
    false
}

/// Returns `true` if following edge directions leads back to a vertex that is still on
/// the current DFS path (a back edge).
///
/// Edges into fully explored vertices (cross and forward edges) are not cycles. Calling
/// this on an undirected graph reports a cycle for every edge, since `u -> v -> u`.
pub fn has_cycle_directed<G: GraphView>(graph: &G) -> bool {
    match reverse_postorder(graph) {
        Ok(_) => false,
        Err(vertex) => {
            tracing::debug!(?vertex, "back edge found");
            true
        }
    }
}

/// Orders the vertices so that every edge `u -> v` has `u` before `v`.
///
/// Computed as reverse DFS post-order. Vertices unrelated by any path keep an order
/// derived from insertion order.
///
/// # Errors
/// Returns [`Error::CycleDetected`] naming the vertex a back edge returns to, since a
/// cyclic graph has no topological order.
pub fn topological_sort<G: GraphView>(graph: &G) -> Result<Vec<G::Vertex>> {
    match reverse_postorder(graph) {
        Ok(order) => {
            tracing::debug!(vertices = order.len(), "topological sort complete");
            Ok(order.into_iter().cloned().collect())
        }
        Err(vertex) => {
            tracing::warn!(?vertex, "topological sort requested on a cyclic graph");
            Err(Error::CycleDetected {
                vertex: format!("{vertex:?}"),
            })
        }
    }
}

/// Number of DFS seeds needed to reach every vertex.
///
/// For an undirected graph this is the number of connected components. For a directed
/// graph edges are followed forwards only, so the count depends on insertion order.
pub fn count_connected_components<G: GraphView>(graph: &G) -> usize {
    let mut visited = VisitedSet::with_capacity(graph.vertex_count());
    let mut count = 0;

    for root in graph.vertices() {
        if visited.try_visit(root) {
            explore(graph, root, &mut visited, |_| {});
            count += 1;
        }
    }

    tracing::debug!(components = count, "connected components counted");
    count
}

/// The vertices of each component, components in seed order, each in DFS pre-order.
///
/// Uses the same seeding as [`count_connected_components`], so
/// `connected_components(g).len() == count_connected_components(g)`.
pub fn connected_components<G: GraphView>(graph: &G) -> Vec<Vec<G::Vertex>> {
    let mut visited = VisitedSet::with_capacity(graph.vertex_count());
    let mut components = Vec::new();

    for root in graph.vertices() {
        if visited.try_visit(root) {
            let mut component = vec![root.clone()];
            explore(graph, root, &mut visited, |v| component.push(v.clone()));
            components.push(component);
        }
    }

    tracing::debug!(components = components.len(), "connected components collected");
    components
}

/// Walks everything reachable from `root` (already marked), calling `on_visit` in pre-order.
fn explore<'a, G: GraphView>(
    graph: &'a G,
    root: &'a G::Vertex,
    visited: &mut VisitedSet<G::Vertex>,
    mut on_visit: impl FnMut(&'a G::Vertex),
) {
    let mut stack = vec![graph.adjacent(root)];

    while let Some(neighbors) = stack.last_mut() {
        match neighbors.next() {
            Some(neighbor) => {
                if visited.try_visit(neighbor) {
                    on_visit(neighbor);
                    stack.push(graph.adjacent(neighbor));
                }
            }
            None => {
                stack.pop();
            }
        }
    }
}

/// Three-colour DFS over the whole graph.
///
/// Returns the vertices in reverse post-order, or the first vertex found in progress
/// through a back edge.
fn reverse_postorder<G: GraphView>(
    graph: &G,
) -> core::result::Result<Vec<&G::Vertex>, &G::Vertex> {
    let mut marks = VertexMarks::with_capacity(graph.vertex_count());
    let mut postorder = Vec::with_capacity(graph.vertex_count());

    for root in graph.vertices() {
        if marks.get(root) != Mark::Unvisited {
            continue;
        }
        marks.set(root, Mark::InProgress);
        let mut stack = vec![(root, graph.adjacent(root))];

        while let Some(frame) = stack.last_mut() {
            let vertex = frame.0;
            match frame.1.next() {
                Some(neighbor) => match marks.get(neighbor) {
                    Mark::InProgress => return Err(neighbor),
                    Mark::Unvisited => {
                        marks.set(neighbor, Mark::InProgress);
                        stack.push((neighbor, graph.adjacent(neighbor)));
                    }
                    Mark::Finished => {}
                },
                None => {
                    marks.set(vertex, Mark::Finished);
                    postorder.push(vertex);
                    stack.pop();
                }
            }
        }
    }

    postorder.reverse();
    Ok(postorder)
}
