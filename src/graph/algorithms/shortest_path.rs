//! Shortest paths: hop-count paths by BFS and weighted paths by Dijkstra.
//!
//! ### Dijkstra and stale queue entries
//! [`PriorityQueue`] has no decrease-key. When relaxation finds a better distance for a
//! vertex, the vertex is enqueued again and the old entry stays behind. A dequeued entry
//! is discarded when its vertex is already settled or a strictly smaller distance is
//! known for it, so every vertex is expanded at most once.
//!
//! ### Overflow
//! A candidate distance that does not fit in the weight type is dropped instead of being
//! relaxed, so it behaves like an infinitely long detour. A vertex whose every path
//! overflows is reported unreachable.
//!
//! ### Preconditions
//! Dijkstra requires every edge weight to be `>= 0`. This is checked before the search
//! starts and reported as [`Error::NegativeWeight`]; a weight that cannot be compared
//! with zero (NaN) is rejected the same way.

use core::cmp::Ordering;
use core::fmt::Debug;
use std::collections::{HashMap, VecDeque};

use num_traits::{CheckedAdd, Zero};

use crate::collections::PriorityQueue;
use crate::error::{Error, Result};
use crate::graph::access::visited::VisitedSet;
use crate::graph::algorithms::require_vertex;
use crate::graph::basic::{EdgeType, WeightedAdjacencyGraph};
use crate::graph::view::{GraphView, VertexId};

/// Numeric edge weight usable by Dijkstra.
///
/// Implemented for the primitive integers and floats. Sums of integer weights are
/// checked: a distance that does not fit in `Self` is never produced, so narrow weight
/// types such as `u8` cannot wrap or panic. Float sums saturate to infinity on their own.
pub trait EdgeWeight: Copy + PartialOrd + Zero + Debug {
    /// `self + rhs`, or `None` if the sum is not representable.
    fn checked_add(self, rhs: Self) -> Option<Self>;
}

macro_rules! integer_weight {
    ($($t:ty),*) => {$(
        impl EdgeWeight for $t {
            #[inline]
            fn checked_add(self, rhs: Self) -> Option<Self> {
                CheckedAdd::checked_add(&self, &rhs)
            }
        }
    )*};
}

macro_rules! float_weight {
    ($($t:ty),*) => {$(
        impl EdgeWeight for $t {
            #[inline]
            fn checked_add(self, rhs: Self) -> Option<Self> {
                Some(self + rhs)
            }
        }
    )*};
}

integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
float_weight!(f32, f64);

/// A path together with its total weight.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightedPath<V, W> {
    /// Vertices from start to end, inclusive.
    pub vertices: Vec<V>,
    /// Sum of the edge weights along `vertices`.
    pub cost: W,
}

impl<V, W> WeightedPath<V, W> {
    /// Number of edges on the path.
    pub fn edge_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }
}

/// Shortest path from `start` to `end` by number of edges.
///
/// Runs a BFS whose frontier holds whole partial paths; the first path that reaches
/// `end` is returned. Returns `Ok(None)` if `end` is unreachable, and `Ok(Some([start]))`
/// when `start == end`.
///
/// # Errors
/// Returns [`Error::VertexNotFound`] if either endpoint is absent.
pub fn shortest_path<G: GraphView>(
    graph: &G,
    start: &G::Vertex,
    end: &G::Vertex,
) -> Result<Option<Vec<G::Vertex>>> {
    require_vertex(graph, start)?;
    require_vertex(graph, end)?;

    let mut visited = VisitedSet::with_capacity(graph.vertex_count());
    visited.try_visit(start);
    let mut queue = VecDeque::new();
    queue.push_back(vec![start.clone()]);

    while let Some(path) = queue.pop_front() {
        let Some(vertex) = path.last() else {
            continue;
        };
        if vertex == end {
            tracing::debug!(?start, ?end, edges = path.len() - 1, "shortest path found");
            return Ok(Some(path));
        }

        for neighbor in graph.adjacent(vertex) {
            if visited.try_visit(neighbor) {
                let mut extended = path.clone();
                extended.push(neighbor.clone());
                queue.push_back(extended);
            }
        }
    }

    tracing::debug!(?start, ?end, explored = visited.len(), "no path");
    Ok(None)
}

/// Minimum-weight path from `start` to `end` using Dijkstra's algorithm.
///
/// Returns `Ok(None)` if `end` is unreachable. The returned path is ordered start to end.
///
/// # Errors
/// - [`Error::VertexNotFound`] if either endpoint is absent
/// - [`Error::NegativeWeight`] if any edge weight is negative or NaN
pub fn dijkstra<V, W, Ty>(
    graph: &WeightedAdjacencyGraph<V, W, Ty>,
    start: &V,
    end: &V,
) -> Result<Option<WeightedPath<V, W>>>
where
    V: VertexId,
    W: EdgeWeight,
    Ty: EdgeType,
{
    require_vertex(graph, start)?;
    require_vertex(graph, end)?;
    validate_weights(graph)?;

    let search = Search::run(graph, start, Some(end));
    let Some(&cost) = search.settled_distance(end) else {
        tracing::debug!(?start, ?end, settled = search.settled.len(), "end unreachable");
        return Ok(None);
    };

    let mut vertices = vec![end.clone()];
    let mut current = end;
    while let Some(previous) = search.previous.get(current) {
        vertices.push(previous.clone());
        current = previous;
    }
    vertices.reverse();

    tracing::debug!(?start, ?end, ?cost, hops = vertices.len() - 1, "dijkstra path found");
    Ok(Some(WeightedPath { vertices, cost }))
}

/// Minimum distance from `start` to every vertex reachable from it.
///
/// Unreachable vertices are absent from the map; `start` maps to zero.
///
/// # Errors
/// - [`Error::VertexNotFound`] if `start` is absent
/// - [`Error::NegativeWeight`] if any edge weight is negative or NaN
pub fn dijkstra_distances<V, W, Ty>(
    graph: &WeightedAdjacencyGraph<V, W, Ty>,
    start: &V,
) -> Result<HashMap<V, W>>
where
    V: VertexId,
    W: EdgeWeight,
    Ty: EdgeType,
{
    require_vertex(graph, start)?;
    validate_weights(graph)?;

    let search = Search::run(graph, start, None);
    tracing::debug!(?start, reached = search.distance.len(), "dijkstra distances complete");
    Ok(search.distance)
}

/// Total weight of `path`, taking the cheapest entry where parallel edges exist.
///
/// Returns `None` for an empty path, when two consecutive vertices are not joined by
/// an edge, or when the total does not fit in `W`. A single-vertex path costs zero.
pub fn path_cost<V, W, Ty>(graph: &WeightedAdjacencyGraph<V, W, Ty>, path: &[V]) -> Option<W>
where
    V: VertexId,
    W: EdgeWeight,
    Ty: EdgeType,
{
    let first = path.first()?;
    if !graph.contains_vertex(first) {
        return None;
    }
    path.windows(2).try_fold(W::zero(), |total, pair| {
        graph
            .edge_weight(&pair[0], &pair[1])
            .and_then(|w| total.checked_add(w))
    })
}

fn validate_weights<V, W, Ty>(graph: &WeightedAdjacencyGraph<V, W, Ty>) -> Result<()>
where
    V: VertexId,
    W: EdgeWeight,
    Ty: EdgeType,
{
    for (from, to, weight) in graph.edges() {
        match weight.partial_cmp(&W::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => {}
            _ => {
                tracing::warn!(?from, ?to, ?weight, "rejecting edge weight for dijkstra");
                return Err(Error::NegativeWeight {
                    from: format!("{from:?}"),
                    to: format!("{to:?}"),
                    weight: format!("{weight:?}"),
                });
            }
        }
    }
    Ok(())
}

struct Search<V, W> {
    distance: HashMap<V, W>,
    previous: HashMap<V, V>,
    settled: VisitedSet<V>,
}

impl<V: VertexId, W: EdgeWeight> Search<V, W> {
    /// Runs Dijkstra from `start`, stopping early once `target` is settled.
    fn run<Ty: EdgeType>(graph: &WeightedAdjacencyGraph<V, W, Ty>, start: &V, target: Option<&V>) -> Self {
        let n = graph.vertex_count();
        let mut distance = HashMap::with_capacity(n);
        let mut previous = HashMap::with_capacity(n);
        let mut settled = VisitedSet::with_capacity(n);
        let mut queue = PriorityQueue::with_capacity(n);

        distance.insert(start.clone(), W::zero());
        queue.enqueue(start.clone(), W::zero());

        while let Some((vertex, dist)) = queue.pop() {
            let stale = settled.is_visited(&vertex)
                || distance.get(&vertex).map_or(true, |best: &W| *best < dist);
            if stale {
                tracing::trace!(?vertex, ?dist, "skipping stale queue entry");
                continue;
            }
            settled.try_visit(&vertex);
            if target == Some(&vertex) {
                break;
            }

            let entries = graph.weighted_neighbors(&vertex).unwrap_or(&[]);
            for (neighbor, weight) in entries {
                if settled.is_visited(neighbor) {
                    continue;
                }
                let Some(candidate) = dist.checked_add(*weight) else {
                    tracing::trace!(from = ?vertex, to = ?neighbor, "distance overflows");
                    continue;
                };
                let improves = distance
                    .get(neighbor)
                    .map_or(true, |current: &W| candidate < *current);
                if improves {
                    tracing::trace!(from = ?vertex, to = ?neighbor, ?candidate, "relaxed edge");
                    distance.insert(neighbor.clone(), candidate);
                    previous.insert(neighbor.clone(), vertex.clone());
                    queue.enqueue(neighbor.clone(), candidate);
                }
            }
        }

        // Early exit leaves tentative distances behind; keep only settled ones.
        if target.is_some() {
            distance.retain(|v, _| settled.is_visited(v));
        }

        Self {
            distance,
            previous,
            settled,
        }
    }

    fn settled_distance(&self, vertex: &V) -> Option<&W> {
        if self.settled.is_visited(vertex) {
            self.distance.get(vertex)
        } else {
            None
        }
    }
}
