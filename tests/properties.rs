use pathkit::{
    AdjacencySetGraph, AdjacencyWeightedGraph, Direction, a_star_search, breadth_first_search,
    dijkstra_search, floyd_warshall, path_cost,
};

use proptest::prelude::*;


type Edges = Vec<(u8, u8, u32)>;

/// Node count plus a list of weighted directed edges between those nodes
fn graph_strategy() -> impl Strategy<Value = (u8, Edges)> {
    (1u8..8).prop_flat_map(|n| {
        (Just(n), prop::collection::vec((0..n, 0..n, 0u32..20), 0..25))
    })
}

fn weighted(n: u8, edges: &Edges, direction: Direction) -> AdjacencyWeightedGraph<u8, u32> {
    let mut graph = AdjacencyWeightedGraph::new(direction);
    for node in 0..n {
        graph.add_node(node);
    }
    for &(a, b, w) in edges {
        graph.add_edge(a, b, w);
    }
    graph
}

fn unit_weighted(n: u8, edges: &Edges) -> AdjacencyWeightedGraph<u8, u32> {
    let unit: Edges = edges.iter().map(|&(a, b, _)| (a, b, 1)).collect();
    weighted(n, &unit, Direction::Directed)
}

fn unweighted(n: u8, edges: &Edges) -> AdjacencySetGraph<u8> {
    let mut graph = AdjacencySetGraph::new(Direction::Directed);
    for node in 0..n {
        graph.add_node(node);
    }
    for &(a, b, _) in edges {
        graph.add_edge(a, b);
    }
    graph
}

proptest! {
    #[test]
    fn bfs_paths_have_fewest_edges((n, edges) in graph_strategy()) {
        let graph = unweighted(n, &edges);
        let hops = floyd_warshall(&unit_weighted(n, &edges));

        for start in 0..n {
            for goal in 0..n {
                let outcome = breadth_first_search(&graph, start, goal);
                match hops.distance(&start, &goal).unwrap() {
                    Some(fewest) => {
                        let path = outcome.path(&start).unwrap();
                        prop_assert_eq!(path.len() as u32 - 1, fewest);
                        prop_assert_eq!(path.first(), Some(&start));
                        prop_assert_eq!(path.last(), Some(&goal));
                    }
                    None => prop_assert_eq!(outcome.goal, None),
                }
            }
        }
    }

    #[test]
    fn dijkstra_and_a_star_agree((n, edges) in graph_strategy()) {
        let graph = weighted(n, &edges, Direction::Directed);
        let all_pairs = floyd_warshall(&graph);

        // exact remaining distance, zero where the goal is out of reach
        let exact = |node: &u8, goal: &u8| {
            all_pairs.distance(node, goal).ok().flatten().unwrap_or(0)
        };

        for start in 0..n {
            for goal in 0..n {
                let dijkstra = dijkstra_search(&graph, start, goal);
                let blind = a_star_search(&graph, start, goal, |_: &u8, _: &u8| 0);
                let guided = a_star_search(&graph, start, goal, exact);

                let expected = all_pairs.distance(&start, &goal).unwrap();
                prop_assert_eq!(dijkstra.goal_cost(), expected);
                prop_assert_eq!(blind.goal_cost(), expected);
                prop_assert_eq!(guided.goal_cost(), expected);

                if let Some(cost) = expected {
                    let path = dijkstra.path(&start).unwrap();
                    prop_assert_eq!(path_cost(&graph, &path), cost);
                }
            }
        }
    }

    #[test]
    fn floyd_warshall_distances_are_consistent((n, edges) in graph_strategy()) {
        let graph = weighted(n, &edges, Direction::Directed);
        let all_pairs = floyd_warshall(&graph);

        for i in 0..n {
            prop_assert_eq!(all_pairs.distance(&i, &i).unwrap(), Some(0));
            for j in 0..n {
                let direct = all_pairs.distance(&i, &j).unwrap();
                if let Some(cost) = direct {
                    let path = all_pairs.path(&i, &j).unwrap();
                    prop_assert_eq!(path_cost(&graph, &path), cost);
                }
                for k in 0..n {
                    let legs = (all_pairs.distance(&i, &k).unwrap(), all_pairs.distance(&k, &j).unwrap());
                    if let (Some(a), Some(b)) = legs {
                        prop_assert!(direct.is_some_and(|d| d <= a + b));
                    }
                }
            }
        }
    }

    #[test]
    fn undirected_distances_are_symmetric((n, edges) in graph_strategy()) {
        let graph = weighted(n, &edges, Direction::Undirected);
        let all_pairs = floyd_warshall(&graph);

        for i in 0..n {
            for j in 0..n {
                prop_assert_eq!(all_pairs.distance(&i, &j).unwrap(), all_pairs.distance(&j, &i).unwrap());
            }
        }
    }

    #[test]
    fn searches_are_repeatable((n, edges) in graph_strategy()) {
        let graph = weighted(n, &edges, Direction::Directed);
        let goal = n - 1;

        let first = dijkstra_search(&graph, 0, goal);
        let second = dijkstra_search(&graph, 0, goal);
        prop_assert_eq!(&first.came_from, &second.came_from);
        prop_assert_eq!(&first.cost_so_far, &second.cost_so_far);
        prop_assert_eq!(first.goal, second.goal);

        let tree = unweighted(n, &edges);
        let first = breadth_first_search(&tree, 0, goal);
        let second = breadth_first_search(&tree, 0, goal);
        prop_assert_eq!(&first.came_from, &second.came_from);
        prop_assert_eq!(first.goal, second.goal);
    }
}
