use crate::collections::{FxIndexMap, FxIndexSet};
use super::{Direction, Graph, WeightedGraph};

use std::{fmt::Debug, hash::Hash};
use num_traits::Zero;


/// Unweighted graph stored as node -> set of neighbors
#[derive(Clone, Debug)]
pub struct AdjacencySetGraph<N> {
    edges: FxIndexMap<N, FxIndexSet<N>>,
    direction: Direction,
}

impl<N> AdjacencySetGraph<N>
where
    N: Eq + Hash + Clone + Debug,
{

    pub fn new(direction: Direction) -> Self {
        Self {
            edges: FxIndexMap::default(),
            direction,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Register a node without edges, no-op if already present
    pub fn add_node(&mut self, node: N) {
        self.edges.entry(node).or_default();
    }

    /// Add `a -> b`, plus `b -> a` when undirected
    /// Both endpoints become nodes of the graph
    pub fn add_edge(&mut self, a: N, b: N) {
        self.edges.entry(a.clone()).or_default().insert(b.clone());
        match self.direction {
            Direction::Directed => self.add_node(b),
            Direction::Undirected => {
                self.edges.entry(b).or_default().insert(a);
            }
        }
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.edges.contains_key(node)
    }

    /// Number of stored directed edges - an undirected edge counts twice
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(|set| set.len()).sum()
    }
}

impl<N> Default for AdjacencySetGraph<N>
where
    N: Eq + Hash + Clone + Debug,
{
    fn default() -> Self {
        Self::new(Direction::default())
    }
}

impl<N> Graph for AdjacencySetGraph<N>
where
    N: Eq + Hash + Clone + Debug,
{
    type Node = N;

    fn nodes(&self) -> Vec<N> {
        self.edges.keys().cloned().collect()
    }

    fn neighbors(&self, node: &N) -> Vec<N> {
        self.edges
            .get(node)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }
}


/// Weighted graph stored as node -> (neighbor -> weight)
#[derive(Clone, Debug)]
pub struct AdjacencyWeightedGraph<N, C> {
    edges: FxIndexMap<N, FxIndexMap<N, C>>,
    direction: Direction,
}

impl<N, C> AdjacencyWeightedGraph<N, C>
where
    N: Eq + Hash + Clone + Debug,
    C: Zero + Ord + Copy + Debug,
{

    pub fn new(direction: Direction) -> Self {
        Self {
            edges: FxIndexMap::default(),
            direction,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Register a node without edges, no-op if already present
    pub fn add_node(&mut self, node: N) {
        self.edges.entry(node).or_default();
    }

    /// Set the weight of `a -> b` (and `b -> a` when undirected)
    /// Overwrites any weight previously stored for the pair
    pub fn add_edge(&mut self, a: N, b: N, weight: C) {
        self.edges.entry(a.clone()).or_default().insert(b.clone(), weight);
        match self.direction {
            Direction::Directed => self.add_node(b),
            Direction::Undirected => {
                self.edges.entry(b).or_default().insert(a, weight);
            }
        }
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.edges.contains_key(node)
    }

    /// Number of stored directed edges - an undirected edge counts twice
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(|targets| targets.len()).sum()
    }
}

impl<N, C> Default for AdjacencyWeightedGraph<N, C>
where
    N: Eq + Hash + Clone + Debug,
    C: Zero + Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new(Direction::default())
    }
}

impl<N, C> Graph for AdjacencyWeightedGraph<N, C>
where
    N: Eq + Hash + Clone + Debug,
    C: Zero + Ord + Copy + Debug,
{
    type Node = N;

    fn nodes(&self) -> Vec<N> {
        self.edges.keys().cloned().collect()
    }

    fn neighbors(&self, node: &N) -> Vec<N> {
        self.edges
            .get(node)
            .map(|targets| targets.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl<N, C> WeightedGraph for AdjacencyWeightedGraph<N, C>
where
    N: Eq + Hash + Clone + Debug,
    C: Zero + Ord + Copy + Debug,
{
    type Cost = C;

    /// Stored weight, zero for a pair that was never added
    fn cost(&self, from: &N, to: &N) -> C {
        self.edges
            .get(from)
            .and_then(|targets| targets.get(to))
            .copied()
            .unwrap_or_else(Zero::zero)
    }
}
