use graphwalk::algorithms::{
    bfs, connected_components, count_connected_components, dfs_iterative, dfs_recursive,
    dijkstra, dijkstra_distances, has_cycle_directed, has_cycle_undirected, path_cost,
    shortest_path, topological_sort,
};
use graphwalk::{DiGraph, Error, Graph, PriorityQueue, WeightedDiGraph, WeightedGraph};

fn letters() -> Graph<&'static str> {
    let mut graph = Graph::new();
    for v in ["A", "B", "C", "D", "E", "F"] {
        graph.add_vertex(v);
    }
    for (u, v) in [
        ("A", "B"),
        ("A", "C"),
        ("B", "D"),
        ("C", "E"),
        ("D", "E"),
        ("D", "F"),
        ("E", "F"),
    ] {
        graph.add_edge(u, v);
    }
    graph
}

#[test]
fn test_traversals_on_letter_graph() {
    let graph = letters();

    assert_eq!(
        dfs_recursive(&graph, &"A").unwrap(),
        vec!["A", "B", "D", "E", "C", "F"]
    );
    assert_eq!(
        dfs_iterative(&graph, &"A").unwrap(),
        vec!["A", "C", "E", "F", "D", "B"]
    );
    assert_eq!(bfs(&graph, &"A").unwrap(), vec!["A", "B", "C", "D", "E", "F"]);
}

#[test]
fn test_shortest_path_on_letter_graph() {
    let graph = letters();
    let path = shortest_path(&graph, &"A", &"F").unwrap().unwrap();

    assert_eq!(path, vec!["A", "B", "D", "F"]);
    for pair in path.windows(2) {
        assert!(graph.has_edge(&pair[0], &pair[1]));
    }
}

#[test]
fn test_dijkstra_prefers_two_cheap_hops() {
    let mut graph = WeightedGraph::new();
    graph.add_edge("A", "B", 1);
    graph.add_edge("B", "C", 1);
    graph.add_edge("A", "C", 5);

    let path = dijkstra(&graph, &"A", &"C").unwrap().unwrap();
    assert_eq!(path.vertices, vec!["A", "B", "C"]);
    assert_eq!(path.cost, 2);
}

#[test]
fn test_weighted_adjacency_is_exposed_as_labels() {
    use graphwalk::graph::Labels;
    use graphwalk::GraphView;

    let graph = WeightedGraph::from_edges([("A", "B", 2), ("A", "C", 7)]);
    let labels: Labels<'_, &str, i32> = graph.adjacent(&"A");
    assert_eq!(labels.copied().collect::<Vec<_>>(), vec!["B", "C"]);
}

#[test]
fn test_undirected_cycle_detection() {
    let path = Graph::from_edges([("A", "B"), ("B", "C")]);
    assert!(!has_cycle_undirected(&path));

    let mut closed = path.clone();
    closed.add_edge("C", "A");
    assert!(has_cycle_undirected(&closed));
}

#[test]
fn test_parallel_edges_are_not_an_undirected_cycle() {
    let mut graph = Graph::from_edges([("x", "y"), ("x", "y")]);
    assert!(!has_cycle_undirected(&graph));
    assert_eq!(graph.edge_count(), 2);

    graph.add_edge("y", "y");
    assert!(has_cycle_undirected(&graph));
}

#[test]
fn test_narrow_weights_do_not_overflow() {
    let mut graph: WeightedGraph<i32, u8> =
        WeightedGraph::from_edges([(0, 1, 200), (1, 2, 100)]);

    assert_eq!(dijkstra(&graph, &0, &2).unwrap(), None);
    assert_eq!(path_cost(&graph, &[0, 1, 2]), None);
    assert_eq!(path_cost(&graph, &[0, 1]), Some(200));

    graph.add_edge(0, 2, 255);
    let path = dijkstra(&graph, &0, &2).unwrap().unwrap();
    assert_eq!(path.vertices, vec![0, 2]);
    assert_eq!(path.cost, 255);
}

#[test]
fn test_topological_order_respects_edges() {
    let graph = DiGraph::from_edges([("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")]);
    assert!(!has_cycle_directed(&graph));

    let order = topological_sort(&graph).unwrap();
    let position = |v: &&str| order.iter().position(|x| x == v).unwrap();
    assert_eq!(position(&"A"), 0);
    assert_eq!(position(&"D"), 3);
    for (u, v) in graph.edges() {
        assert!(position(u) < position(v), "{u} -> {v} out of order");
    }
}

#[test]
fn test_two_components() {
    let graph = Graph::from_edges([("1", "2"), ("3", "4")]);
    assert_eq!(count_connected_components(&graph), 2);
    assert_eq!(connected_components(&graph).len(), 2);
}

#[test]
fn test_empty_graph() {
    let graph: Graph<u32> = Graph::new();
    assert_eq!(count_connected_components(&graph), 0);
    assert!(!has_cycle_undirected(&graph));
    assert_eq!(topological_sort(&graph).unwrap(), Vec::<u32>::new());
    assert!(matches!(bfs(&graph, &0), Err(Error::VertexNotFound(_))));
}

#[test]
fn test_errors_name_the_offending_input() {
    let cyclic = DiGraph::from_edges([(1, 2), (2, 3), (3, 1)]);
    let err = topological_sort(&cyclic).unwrap_err();
    assert_eq!(err.to_string(), "graph is not acyclic: a cycle closes at vertex 1");

    let negative = WeightedDiGraph::from_edges([("x", "y", -2.5)]);
    let err = dijkstra(&negative, &"x", &"y").unwrap_err();
    assert!(matches!(err, Error::NegativeWeight { .. }));
    assert!(err.to_string().contains("-2.5"));

    let graph = letters();
    let err = shortest_path(&graph, &"A", &"Z").unwrap_err();
    assert_eq!(err, Error::VertexNotFound("\"Z\"".to_string()));
}

#[test]
fn test_algorithms_leave_graph_untouched() {
    let graph = letters();
    let before = format!("{graph:?}");

    dfs_recursive(&graph, &"C").unwrap();
    bfs(&graph, &"F").unwrap();
    shortest_path(&graph, &"B", &"C").unwrap();
    has_cycle_undirected(&graph);
    connected_components(&graph);

    assert_eq!(format!("{graph:?}"), before);
    assert_eq!(graph.edge_count(), 7);
}

#[test]
fn test_graph_json_round_trip_preserves_orders() {
    let graph = letters();
    let json = serde_json::to_string(&graph).unwrap();
    let restored: Graph<String> = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.vertex_count(), 6);
    assert_eq!(
        dfs_recursive(&restored, &"A".to_string()).unwrap(),
        ["A", "B", "D", "E", "C", "F"].map(String::from)
    );

    let weighted = WeightedGraph::from_edges([("A", "B", 1.5), ("B", "C", 2.0)]);
    let json = serde_json::to_string(&weighted).unwrap();
    let restored: WeightedGraph<String, f64> = serde_json::from_str(&json).unwrap();
    let distances = dijkstra_distances(&restored, &"A".to_string()).unwrap();
    assert_eq!(distances[&"C".to_string()], 3.5);
}

#[test]
fn test_priority_queue_drains_in_priority_order() {
    let mut queue: PriorityQueue<&str, u32> =
        [("low", 9), ("high", 1), ("mid", 5), ("mid-again", 5)]
            .into_iter()
            .collect();

    assert_eq!(queue.peek(), Some((&"high", &1)));
    let mut priorities = Vec::new();
    while let Ok((_, priority)) = queue.dequeue() {
        priorities.push(priority);
    }
    assert_eq!(priorities, vec![1, 5, 5, 9]);
    assert_eq!(queue.dequeue(), Err(Error::EmptyQueue));
}

#[test]
fn test_tracing_events_do_not_disturb_results() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("graphwalk=trace"))
        .with_test_writer()
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let graph = WeightedGraph::from_edges([(0, 1, 4u64), (0, 2, 1), (2, 1, 1), (1, 3, 1)]);
        let path = dijkstra(&graph, &0, &3).unwrap().unwrap();
        assert_eq!(path.vertices, vec![0, 2, 1, 3]);
        assert_eq!(path.cost, 3);
        assert!(topological_sort(&DiGraph::from_edges([(0, 0)])).is_err());
    });
}
