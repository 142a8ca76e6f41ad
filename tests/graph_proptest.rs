//! Property tests for the graph algorithms, using `petgraph` as the reference.

use std::collections::HashSet;

use graphwalk::algorithms::{
    bfs, bfs_levels, connected_components, count_connected_components, dfs_iterative,
    dfs_recursive, dijkstra, dijkstra_distances, has_cycle_directed, has_cycle_undirected,
    path_cost, shortest_path, topological_sort,
};
use graphwalk::{DiGraph, Graph, WeightedDiGraph, WeightedGraph};
use petgraph::graph::NodeIndex;
use proptest::prelude::*;

type Edges = (usize, Vec<(usize, usize)>);
type WeightedEdges = (usize, Vec<(usize, usize, u64)>);

fn edges() -> impl Strategy<Value = Edges> {
    (1usize..16).prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n), 0..40)))
}

fn weighted_edges() -> impl Strategy<Value = WeightedEdges> {
    (1usize..16).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec((0..n, 0..n, 0u64..20), 0..40),
        )
    })
}

/// Drops self-loops and repeated pairs, which petgraph counts as undirected cycles.
fn simple(list: &[(usize, usize)]) -> Vec<(usize, usize)> {
    let mut seen = HashSet::new();
    list.iter()
        .copied()
        .filter(|&(u, v)| u != v && seen.insert((u.min(v), u.max(v))))
        .collect()
}

fn graph(n: usize, list: &[(usize, usize)]) -> Graph<usize> {
    let mut g = Graph::with_capacity(n);
    for v in 0..n {
        g.add_vertex(v);
    }
    for &(u, v) in list {
        g.add_edge(u, v);
    }
    g
}

fn digraph(n: usize, list: &[(usize, usize)]) -> DiGraph<usize> {
    let mut g = DiGraph::with_capacity(n);
    for v in 0..n {
        g.add_vertex(v);
    }
    for &(u, v) in list {
        g.add_edge(u, v);
    }
    g
}

fn reference<Ty: petgraph::EdgeType>(
    n: usize,
    list: &[(usize, usize, u64)],
) -> petgraph::Graph<(), u64, Ty> {
    let mut g = petgraph::Graph::with_capacity(n, list.len());
    for _ in 0..n {
        g.add_node(());
    }
    for &(u, v, w) in list {
        g.add_edge(NodeIndex::new(u), NodeIndex::new(v), w);
    }
    g
}

fn unit(list: &[(usize, usize)]) -> Vec<(usize, usize, u64)> {
    list.iter().map(|&(u, v)| (u, v, 1)).collect()
}

fn reachable<Ty: petgraph::EdgeType>(
    g: &petgraph::Graph<(), u64, Ty>,
    start: usize,
) -> HashSet<usize> {
    let mut walk = petgraph::visit::Bfs::new(g, NodeIndex::new(start));
    let mut seen = HashSet::new();
    while let Some(node) = walk.next(g) {
        seen.insert(node.index());
    }
    seen
}

fn assert_visits_reachable_once(order: &[usize], expected: &HashSet<usize>) {
    let unique: HashSet<usize> = order.iter().copied().collect();
    assert_eq!(unique.len(), order.len(), "vertex repeated in {order:?}");
    assert_eq!(&unique, expected);
}

proptest! {
    #[test]
    fn test_walks_visit_each_reachable_vertex_once((n, list) in edges(), start in 0usize..16) {
        let start = start % n;
        let ours = graph(n, &list);
        let theirs = reference::<petgraph::Undirected>(n, &unit(&list));
        let expected = reachable(&theirs, start);

        for order in [
            dfs_recursive(&ours, &start).unwrap(),
            dfs_iterative(&ours, &start).unwrap(),
            bfs(&ours, &start).unwrap(),
        ] {
            prop_assert_eq!(order[0], start);
            assert_visits_reachable_once(&order, &expected);
        }

        let directed = digraph(n, &list);
        let expected = reachable(&reference::<petgraph::Directed>(n, &unit(&list)), start);
        assert_visits_reachable_once(&bfs(&directed, &start).unwrap(), &expected);
        assert_visits_reachable_once(&dfs_recursive(&directed, &start).unwrap(), &expected);
    }

    #[test]
    fn test_shortest_path_is_minimal((n, list) in edges(), start in 0usize..16, end in 0usize..16) {
        let (start, end) = (start % n, end % n);
        let ours = digraph(n, &list);
        let theirs = reference::<petgraph::Directed>(n, &unit(&list));
        let hops = petgraph::algo::dijkstra(&theirs, NodeIndex::new(start), None, |_| 1u64);

        match shortest_path(&ours, &start, &end).unwrap() {
            Some(path) => {
                prop_assert_eq!(path.first(), Some(&start));
                prop_assert_eq!(path.last(), Some(&end));
                prop_assert_eq!(Some((path.len() - 1) as u64), hops.get(&NodeIndex::new(end)).copied());
                for pair in path.windows(2) {
                    prop_assert!(ours.has_edge(&pair[0], &pair[1]));
                }
            }
            None => prop_assert!(!hops.contains_key(&NodeIndex::new(end))),
        }

        let levels = bfs_levels(&ours, &start).unwrap();
        for (depth, level) in levels.iter().enumerate() {
            for v in level {
                prop_assert_eq!(hops[&NodeIndex::new(*v)], depth as u64);
            }
        }
    }

    #[test]
    fn test_dijkstra_matches_reference((n, list) in weighted_edges(), start in 0usize..16) {
        let start = start % n;
        let mut ours = WeightedDiGraph::with_capacity(n);
        for v in 0..n {
            ours.add_vertex(v);
        }
        for &(u, v, w) in &list {
            ours.add_edge(u, v, w);
        }
        let theirs = reference::<petgraph::Directed>(n, &list);
        let expected = petgraph::algo::dijkstra(&theirs, NodeIndex::new(start), None, |e| *e.weight());

        let distances = dijkstra_distances(&ours, &start).unwrap();
        prop_assert_eq!(distances.len(), expected.len());
        for (node, cost) in &expected {
            prop_assert_eq!(distances.get(&node.index()), Some(cost));
        }

        for end in 0..n {
            match dijkstra(&ours, &start, &end).unwrap() {
                Some(path) => {
                    prop_assert_eq!(Some(&path.cost), expected.get(&NodeIndex::new(end)));
                    prop_assert_eq!(path_cost(&ours, &path.vertices), Some(path.cost));
                }
                None => prop_assert!(!expected.contains_key(&NodeIndex::new(end))),
            }
        }
    }

    #[test]
    fn test_undirected_analysis_matches_reference((n, list) in edges()) {
        let list = simple(&list);
        let ours = graph(n, &list);
        let theirs = reference::<petgraph::Undirected>(n, &unit(&list));

        prop_assert_eq!(has_cycle_undirected(&ours), petgraph::algo::is_cyclic_undirected(&theirs));
        prop_assert_eq!(count_connected_components(&ours), petgraph::algo::connected_components(&theirs));

        let components = connected_components(&ours);
        prop_assert_eq!(components.len(), count_connected_components(&ours));
        prop_assert_eq!(components.iter().map(Vec::len).sum::<usize>(), n);
    }

    #[test]
    fn test_parallel_edges_never_close_an_undirected_cycle((n, list) in edges()) {
        // Unfiltered lists: repeated pairs and self-loops included.
        let ours = graph(n, &list);
        let theirs = reference::<petgraph::Undirected>(n, &unit(&simple(&list)));
        let has_self_loop = list.iter().any(|(u, v)| u == v);

        prop_assert_eq!(
            has_cycle_undirected(&ours),
            petgraph::algo::is_cyclic_undirected(&theirs) || has_self_loop
        );
    }

    #[test]
    fn test_narrow_weights_keep_representable_distances(
        (n, list) in (1usize..12).prop_flat_map(|n| {
            (Just(n), prop::collection::vec((0..n, 0..n, 0u8..=255), 0..30))
        }),
        start in 0usize..12,
    ) {
        let start = start % n;
        let mut ours = WeightedGraph::with_capacity(n);
        for v in 0..n {
            ours.add_vertex(v);
        }
        for &(u, v, w) in &list {
            ours.add_edge(u, v, w);
        }
        let wide: Vec<_> = list.iter().map(|&(u, v, w)| (u, v, u64::from(w))).collect();
        let theirs = reference::<petgraph::Undirected>(n, &wide);
        let expected = petgraph::algo::dijkstra(&theirs, NodeIndex::new(start), None, |e| *e.weight());

        let distances = dijkstra_distances(&ours, &start).unwrap();
        for v in 0..n {
            let fits = expected
                .get(&NodeIndex::new(v))
                .and_then(|&d| u8::try_from(d).ok());
            prop_assert_eq!(distances.get(&v).copied(), fits);
        }
    }

    #[test]
    fn test_directed_cycles_match_reference((n, list) in edges()) {
        let ours = digraph(n, &list);
        let theirs = reference::<petgraph::Directed>(n, &unit(&list));

        let cyclic = petgraph::algo::is_cyclic_directed(&theirs);
        prop_assert_eq!(has_cycle_directed(&ours), cyclic);
        prop_assert_eq!(topological_sort(&ours).is_err(), cyclic);
    }

    #[test]
    fn test_topological_sort_orders_every_edge((n, list) in edges()) {
        // Pointing every edge from the smaller label to the larger keeps the graph acyclic.
        let forward: Vec<_> = list
            .iter()
            .filter(|(u, v)| u != v)
            .map(|&(u, v)| (u.min(v), u.max(v)))
            .collect();
        let ours = digraph(n, &forward);

        let order = topological_sort(&ours).unwrap();
        prop_assert_eq!(order.len(), n);
        let mut position = vec![0; n];
        for (i, v) in order.iter().enumerate() {
            position[*v] = i;
        }
        for (u, v) in &forward {
            prop_assert!(position[*u] < position[*v]);
        }
    }

    #[test]
    fn test_serde_round_trip_preserves_walks((n, list) in weighted_edges()) {
        let mut ours = WeightedGraph::with_capacity(n);
        for v in 0..n {
            ours.add_vertex(v);
        }
        for &(u, v, w) in &list {
            ours.add_edge(u, v, w);
        }

        let json = serde_json::to_string(&ours).unwrap();
        let restored: WeightedGraph<usize, u64> = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(restored.edge_count(), ours.edge_count());
        prop_assert_eq!(dfs_recursive(&restored, &0).unwrap(), dfs_recursive(&ours, &0).unwrap());
        prop_assert_eq!(dijkstra_distances(&restored, &0).unwrap(), dijkstra_distances(&ours, &0).unwrap());
    }
}
