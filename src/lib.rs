//! Graph search toolkit
//!
//! Graphs implement [`Graph`] (and [`WeightedGraph`] for costs). The search
//! functions only read from a graph and return fresh came-from / cost maps
//! per call:
//!
//! - [`depth_first_traversal`], [`breadth_first_traversal`]
//! - [`breadth_first_search`] to a node or predicate
//! - [`dijkstra_search`], [`dijkstra_all`], [`a_star_search`]
//! - [`floyd_warshall`] for all-pairs distances
//! - [`reconstruct_path`] to turn a came-from map into a route
//!
//! ```
//! use pathkit::{AdjacencySetGraph, Direction, breadth_first_search, reconstruct_path};
//!
//! let mut graph = AdjacencySetGraph::new(Direction::Directed);
//! graph.add_edge('A', 'B');
//! graph.add_edge('A', 'C');
//! graph.add_edge('C', 'F');
//!
//! let outcome = breadth_first_search(&graph, 'A', 'F');
//! let path = reconstruct_path(&outcome.came_from, &'A', &'F').unwrap();
//! assert_eq!(path, vec!['A', 'C', 'F']);
//! ```

pub mod collections;
pub mod errors;
pub mod geometry;
pub mod graph;
pub mod graph_algos;
pub mod queue;

pub use errors::SearchError;
pub use geometry::{GridLocation, grid_heuristic, manhattan_distance};
pub use graph::{AdjacencySetGraph, AdjacencyWeightedGraph, Direction, Graph, GridGraph, WeightedGraph};
pub use graph_algos::{BfsOutcome, CameFrom, CostSoFar, Goal, SearchOutcome, path_cost, reconstruct_path};
pub use graph_algos::a_star::{AStar, a_star_search};
pub use graph_algos::bfs::breadth_first_search;
pub use graph_algos::dijkstra::{dijkstra, dijkstra_all, dijkstra_search};
pub use graph_algos::floyd_warshall::{AllPairs, floyd_warshall};
pub use graph_algos::traversal::{breadth_first_traversal, depth_first_traversal};
pub use queue::PriorityQueue;
