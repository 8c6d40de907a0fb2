mod common;

use std::collections::HashSet;

use common::{dag_edges, floyd_warshall, hop_distances, weighted_edges, Recorder};
use halo_traverse::{
    BreadthFirstTraversal, Component, DepthFirstTraversal, DijkstraTraversal, EdgeListGraph,
    EdgeWeightCost, GraphTraversal, ReverseDepthFirstTraversal, SiblingOrder, SourceTraversal,
    TopologicalTraversal,
};
use proptest::prelude::*;

fn reachable(hops: &[Option<usize>]) -> HashSet<usize> {
    hops.iter()
        .enumerate()
        .filter_map(|(i, d)| d.map(|_| i))
        .collect()
}

fn assert_visits_reachable_once(recorder: &Recorder, hops: &[Option<usize>]) {
    let visited = recorder.indices();
    let unique: HashSet<usize> = visited.iter().copied().collect();
    assert_eq!(unique.len(), visited.len(), "component visited twice: {visited:?}");
    assert_eq!(unique, reachable(hops));
}

proptest! {
    #[test]
    fn test_bfs_visits_in_hop_order((n, edges) in weighted_edges(12, 30)) {
        let graph = EdgeListGraph::directed(n, edges.iter().copied()).unwrap();
        let hops = hop_distances(n, &edges, 0);

        let mut recorder = Recorder::default();
        let mut bfs = BreadthFirstTraversal::new(&graph, &mut recorder, Component::Node(0));
        bfs.init_nodes();
        bfs.walk_nodes().unwrap();
        drop(bfs);

        assert_visits_reachable_once(&recorder, &hops);
        let levels: Vec<usize> = recorder
            .indices()
            .into_iter()
            .filter_map(|i| hops[i])
            .collect();
        prop_assert!(levels.windows(2).all(|w| w[0] <= w[1]), "levels out of order: {:?}", levels);
    }

    #[test]
    fn test_depth_first_variants_cover_reachable_set((n, edges) in weighted_edges(12, 30)) {
        let graph = EdgeListGraph::directed(n, edges.iter().copied()).unwrap();
        let hops = hop_distances(n, &edges, 0);

        for order in [SiblingOrder::Reversed, SiblingOrder::Adjacency] {
            let mut recorder = Recorder::default();
            let mut dfs = DepthFirstTraversal::new(&graph, &mut recorder, Component::Node(0))
                .with_sibling_order(order);
            dfs.init_nodes();
            dfs.walk_nodes().unwrap();
            prop_assert!(dfs.active_elements().is_empty());
            drop(dfs);
            assert_visits_reachable_once(&recorder, &hops);
        }

        let mut recorder = Recorder::default();
        let mut rdfs = ReverseDepthFirstTraversal::new(&graph, &mut recorder, Component::Node(0));
        rdfs.init_nodes();
        rdfs.walk_nodes().unwrap();
        drop(rdfs);
        assert_visits_reachable_once(&recorder, &hops);
    }

    #[test]
    fn test_dijkstra_matches_floyd_warshall(
        (n, edges) in weighted_edges(10, 25),
        directed in any::<bool>(),
    ) {
        let graph = if directed {
            EdgeListGraph::directed(n, edges.iter().copied()).unwrap()
        } else {
            EdgeListGraph::undirected(n, edges.iter().copied()).unwrap()
        };
        let expected = floyd_warshall(n, &edges, directed);

        let mut dijkstra =
            DijkstraTraversal::new(&graph, Recorder::default(), Component::Node(0), EdgeWeightCost);
        dijkstra.init_nodes();
        let summary = dijkstra.walk_nodes().unwrap();
        prop_assert_eq!(summary.visited, n);

        for target in 0..n {
            let node = dijkstra.cost_node(Component::Node(target)).unwrap();
            prop_assert_eq!(node.cost(), expected[0][target], "node {}", target);

            // The reconstructed path must be a real path with that cost.
            if let Some(path) = dijkstra.path_to(Component::Node(target)) {
                prop_assert_eq!(path.first().copied(), Some(Component::Node(0)));
                prop_assert_eq!(path.last().copied(), Some(Component::Node(target)));
                let mut total = 0.0;
                for step in path.windows(2) {
                    let (Component::Node(a), Component::Node(b)) = (step[0], step[1]) else {
                        unreachable!("node walk produced an edge");
                    };
                    total += graph
                        .edges_between(a, b)
                        .filter_map(|e| graph.weight(e))
                        .fold(f64::INFINITY, f64::min);
                }
                prop_assert_eq!(total, node.cost());
            } else {
                prop_assert!(!node.is_reachable());
            }
        }
    }

    #[test]
    fn test_dijkstra_extracts_in_cost_order((n, edges) in weighted_edges(12, 30)) {
        let graph = EdgeListGraph::undirected(n, edges.iter().copied()).unwrap();
        let mut recorder = Recorder::default();
        let mut dijkstra =
            DijkstraTraversal::new(&graph, &mut recorder, Component::Node(0), EdgeWeightCost);
        dijkstra.init_nodes();
        dijkstra.walk_nodes().unwrap();
        drop(dijkstra);

        prop_assert_eq!(recorder.costs.len(), n);
        prop_assert!(
            recorder.costs.windows(2).all(|w| w[0] <= w[1]),
            "costs out of order: {:?}",
            recorder.costs
        );
    }

    #[test]
    fn test_topological_order_respects_edges((n, edges) in dag_edges(12, 30)) {
        let graph = EdgeListGraph::directed(n, edges.iter().copied()).unwrap();
        let mut recorder = Recorder::default();
        let mut topo = TopologicalTraversal::new(&graph, &mut recorder);
        topo.init_nodes();
        topo.walk_nodes().unwrap();
        prop_assert!(topo.blocked_nodes().is_empty());
        drop(topo);

        prop_assert_eq!(recorder.visits.len(), n);
        let mut position = vec![usize::MAX; n];
        for (at, node) in recorder.indices().into_iter().enumerate() {
            position[node] = at;
        }
        for &(a, b, _) in &edges {
            prop_assert!(position[a] < position[b], "edge {} -> {} out of order", a, b);
        }
    }

    #[test]
    fn test_stop_ends_walk_at_requested_visit(
        (n, edges) in weighted_edges(12, 30),
        stop_at in 1usize..6,
    ) {
        let graph = EdgeListGraph::directed(n, edges.iter().copied()).unwrap();
        let reachable_count = reachable(&hop_distances(n, &edges, 0)).len();

        let mut recorder = Recorder::stopping_after(stop_at);
        let mut bfs = BreadthFirstTraversal::new(&graph, &mut recorder, Component::Node(0));
        bfs.init_nodes();
        let summary = bfs.walk_nodes().unwrap();
        drop(bfs);

        prop_assert_eq!(summary.is_stopped(), stop_at <= reachable_count);
        prop_assert_eq!(recorder.visits.len(), stop_at.min(reachable_count));
    }
}
