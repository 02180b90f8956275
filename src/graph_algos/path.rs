use crate::errors::SearchError;
use crate::graph::WeightedGraph;
use super::CameFrom;

use std::hash::Hash;
use num_traits::Zero;


/// Walk the came-from map backwards from `goal` to `start`
/// Returns the ordered path from start to goal, both inclusive
/// `goal == start` yields `[start]`
pub fn reconstruct_path<N>(came_from: &CameFrom<N>, start: &N, goal: &N) -> Result<Vec<N>, SearchError>
where
    N: Eq + Hash + Clone,
{
    let mut path = vec![goal.clone()];
    let mut current = goal;

    // Trace back from goal to start
    while current != start {
        match came_from.get(current) {
            Some(Some(parent)) => {
                path.push(parent.clone());
                current = parent;
            }
            // goal never reached, or a chain ending at some other root
            _ => return Err(SearchError::NoPathFound),
        }

        // a well-formed chain visits each map entry at most once
        if path.len() > came_from.len() + 1 {
            return Err(SearchError::CorruptPredecessors);
        }
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    Ok(path)
}

/// Sum of edge costs along a path
pub fn path_cost<G>(graph: &G, path: &[G::Node]) -> G::Cost
where
    G: WeightedGraph + ?Sized,
{
    path.windows(2)
        .fold(Zero::zero(), |total: G::Cost, step| total + graph.cost(&step[0], &step[1]))
}
