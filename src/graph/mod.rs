mod adjacency;
mod grid;

pub use adjacency::{AdjacencySetGraph, AdjacencyWeightedGraph};
pub use grid::GridGraph;

use std::{fmt::Debug, hash::Hash};
use num_traits::Zero;


/// Graph capability used by every traversal and search
/// Searches only read from the graph, they never mutate it
pub trait Graph {
    /// Opaque node identity - only equality and hashing are used
    type Node: Eq + Hash + Clone + Debug;

    /// Every node known to the graph
    fn nodes(&self) -> Vec<Self::Node>;

    /// Outgoing neighbors of a node
    /// A node without registered edges has no neighbors, it is not an error
    fn neighbors(&self, node: &Self::Node) -> Vec<Self::Node>;
}

/// Graph with a cost for every edge reported by `neighbors`
pub trait WeightedGraph: Graph {
    type Cost: Zero + Ord + Copy + Debug;

    /// Cost of the edge `from -> to`
    /// Only called for pairs returned by `neighbors(from)`, the result for
    /// any other pair is implementation defined
    fn cost(&self, from: &Self::Node, to: &Self::Node) -> Self::Cost;
}

/// Edge direction for adjacency graphs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// `add_edge(a, b)` only adds `a -> b`
    #[default]
    Directed,
    /// `add_edge(a, b)` adds `a -> b` and `b -> a`
    Undirected,
}
