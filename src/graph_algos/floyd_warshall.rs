use crate::collections::{FxIndexMap, FxIndexSet};
use crate::errors::SearchError;
use crate::graph::WeightedGraph;
use super::{CameFrom, reconstruct_path};

use std::{fmt::Debug, hash::Hash};
use num_traits::Zero;


/// All-pairs shortest paths
/// - `distances[from][to]` is `None` when `to` is unreachable from `from`
/// - `predecessors[from]` maps each node to its predecessor on the shortest
///   path from `from`, so a row can be used as a came-from map
#[derive(Clone, Debug)]
pub struct AllPairs<N, C> {
    pub distances: FxIndexMap<N, FxIndexMap<N, Option<C>>>,
    pub predecessors: FxIndexMap<N, CameFrom<N>>,
}

impl<N, C> AllPairs<N, C>
where
    N: Eq + Hash + Clone + Debug,
    C: Copy,
{

    /// Shortest distance, `Ok(None)` when unreachable
    pub fn distance(&self, from: &N, to: &N) -> Result<Option<C>, SearchError> {
        self.distances
            .get(from)
            .and_then(|row| row.get(to))
            .copied()
            .ok_or_else(|| unknown(from, to))
    }

    /// Shortest path between any pair, `NoPathFound` when unreachable
    pub fn path(&self, from: &N, to: &N) -> Result<Vec<N>, SearchError> {
        let row = self.predecessors.get(from).ok_or_else(|| unknown(from, to))?;
        if !row.contains_key(to) {
            return Err(unknown(from, to));
        }
        reconstruct_path(row, from, to)
    }

    pub fn node_count(&self) -> usize {
        self.distances.len()
    }
}

fn unknown<N: Debug>(from: &N, to: &N) -> SearchError {
    SearchError::UnknownNode(format!("{from:?} -> {to:?}"))
}


/// Floyd-Warshall all-pairs shortest paths - O(V^3)
/// https://en.wikipedia.org/wiki/Floyd%E2%80%93Warshall_algorithm
/// Negative cycles are not detected and give meaningless distances.
#[tracing::instrument(skip(graph))]
pub fn floyd_warshall<G>(graph: &G) -> AllPairs<G::Node, G::Cost>
where
    G: WeightedGraph + ?Sized,
{
    // Index every node, including neighbors the graph does not list itself
    let mut index: FxIndexSet<G::Node> = graph.nodes().into_iter().collect();
    let mut edges = Vec::new();
    let mut i = 0;
    while let Some(node) = index.get_index(i).cloned() {
        for neighbor in graph.neighbors(&node) {
            let cost = graph.cost(&node, &neighbor);
            let j = index.insert_full(neighbor).0;
            edges.push((i, j, cost));
        }
        i += 1;
    }

    let size = index.len();
    let mut distances: Vec<Vec<Option<G::Cost>>> = vec![vec![None; size]; size];
    let mut predecessors: Vec<Vec<Option<usize>>> = vec![vec![None; size]; size];

    for (i, row) in distances.iter_mut().enumerate() {
        row[i] = Some(Zero::zero());
    }
    for (i, j, cost) in edges {
        // self loops never beat staying put
        if i != j {
            distances[i][j] = Some(cost);
            predecessors[i][j] = Some(i);
        }
    }

    // Try every node k as an intermediate stop
    for k in 0..size {
        for i in 0..size {
            let Some(via_k) = distances[i][k] else {
                continue;
            };
            for j in 0..size {
                let Some(k_to_j) = distances[k][j] else {
                    continue;
                };
                let candidate = via_k + k_to_j;
                if distances[i][j].is_none_or(|current| candidate < current) {
                    distances[i][j] = Some(candidate);
                    // keep the real last hop of the k -> j leg
                    predecessors[i][j] = predecessors[k][j];
                }
            }
        }
    }

    tracing::debug!(nodes = size, "all-pairs distances computed");

    let nodes: Vec<G::Node> = index.into_iter().collect();
    let mut all_pairs = AllPairs {
        distances: FxIndexMap::default(),
        predecessors: FxIndexMap::default(),
    };
    for (i, from) in nodes.iter().enumerate() {
        let distance_row = nodes.iter().cloned().zip(distances[i].iter().copied()).collect();
        let predecessor_row = nodes
            .iter()
            .cloned()
            .zip(predecessors[i].iter().map(|k| k.map(|k| nodes[k].clone())))
            .collect();
        all_pairs.distances.insert(from.clone(), distance_row);
        all_pairs.predecessors.insert(from.clone(), predecessor_row);
    }
    all_pairs
}
