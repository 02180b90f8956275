use crate::errors::SearchError;
use crate::graph::WeightedGraph;
use super::{Goal, SearchOutcome};
use super::dijkstra::best_first_search;


/// A* search from `start` to `goal`
/// https://en.wikipedia.org/wiki/A*_search_algorithm
/// Queue priority is cost so far + heuristic(node, goal).
/// The heuristic must be admissible (never overestimates the remaining cost)
/// and consistent, otherwise the returned path may be suboptimal. This is
/// not checked. Edge costs must be non-negative.
#[tracing::instrument(skip(graph, heuristic))]
pub fn a_star_search<G, H>(graph: &G, start: G::Node, goal: G::Node, heuristic: H) -> SearchOutcome<G::Node, G::Cost>
where
    G: WeightedGraph + ?Sized,
    H: Fn(&G::Node, &G::Node) -> G::Cost,
{
    let target = Goal::node(goal.clone());
    best_first_search(graph, start, &target, |node| heuristic(node, &goal))
}


/// A* planner holding its heuristic
pub struct AStar<H> {
    heuristic: H,
}

impl<H> AStar<H> {

    pub fn new(heuristic: H) -> Self {
        Self { heuristic }
    }

    /// Shortest path from `start` to `goal`, `NoPathFound` when unreachable
    pub fn plan<G>(&self, graph: &G, start: G::Node, goal: G::Node) -> Result<Vec<G::Node>, SearchError>
    where
        G: WeightedGraph + ?Sized,
        H: Fn(&G::Node, &G::Node) -> G::Cost,
    {
        let outcome = a_star_search(graph, start.clone(), goal, &self.heuristic);
        outcome.path(&start)
    }
}
