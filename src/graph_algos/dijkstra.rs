use crate::collections::FxIndexMap;
use crate::errors::SearchError;
use crate::graph::WeightedGraph;
use crate::queue::PriorityQueue;
use super::{CameFrom, CostSoFar, Goal, SearchOutcome};

use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};


/// Identify the shortest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// From start Node, traverse through graph until node meets goal criteria
pub fn dijkstra<'a, G>(graph: &G, start: G::Node, goal: impl Into<Goal<'a, G::Node>>) -> Result<Vec<G::Node>, SearchError>
where
    G: WeightedGraph + ?Sized,
    G::Node: 'a,
{
    let outcome = dijkstra_search(graph, start.clone(), goal);
    outcome.path(&start)
}

/// Dijkstra search that stops as soon as the goal is popped
/// Edge costs must be non-negative, this is not checked.
/// Only the goal's cost is final after an early exit, other nodes may still
/// hold tentative costs. Use `dijkstra_all` for full single-source costs.
#[tracing::instrument(skip(graph, goal))]
pub fn dijkstra_search<'a, G>(graph: &G, start: G::Node, goal: impl Into<Goal<'a, G::Node>>) -> SearchOutcome<G::Node, G::Cost>
where
    G: WeightedGraph + ?Sized,
    G::Node: 'a,
{
    let goal = goal.into();
    best_first_search(graph, start, &goal, |_| Zero::zero())
}

/// Returns final costs for every node reachable from `start`
#[tracing::instrument(skip(graph))]
pub fn dijkstra_all<G>(graph: &G, start: G::Node) -> SearchOutcome<G::Node, G::Cost>
where
    G: WeightedGraph + ?Sized,
{
    best_first_search(graph, start, &Goal::matching(|_| false), |_| Zero::zero())
}


/// Relaxation loop shared by Dijkstra and A*
/// Queue priority is cost so far plus `heuristic(node)`
pub(super) fn best_first_search<G, H>(
    graph: &G,
    start: G::Node,
    goal: &Goal<'_, G::Node>,
    heuristic: H,
) -> SearchOutcome<G::Node, G::Cost>
where
    G: WeightedGraph + ?Sized,
    H: Fn(&G::Node) -> G::Cost,
{
    // Nodes to visit, queued by index into cost_so_far
    // The cost at push time is kept so stale entries can be skipped
    let mut frontier: PriorityQueue<(usize, G::Cost), G::Cost> = PriorityQueue::new();

    let mut cost_so_far: CostSoFar<G::Node, G::Cost> = FxIndexMap::default();
    let mut came_from: CameFrom<G::Node> = FxIndexMap::default();

    let start_index = cost_so_far.insert_full(start.clone(), Zero::zero()).0;
    came_from.insert(start, None);
    frontier.put((start_index, Zero::zero()), Zero::zero());

    let mut expanded = 0usize;

    while let Some((index, queued_cost)) = frontier.get() {

        // fetch current best cost for node
        let Some((current, &best_cost)) = cost_so_far.get_index(index) else {
            continue;
        };
        let current = current.clone();

        // A cheaper path to this node was queued after this entry
        if queued_cost > best_cost {
            continue;
        }

        if goal.is_met(&current) {
            tracing::debug!(expanded, goal = ?current, cost = ?best_cost, "goal reached");
            return SearchOutcome { came_from, cost_so_far, goal: Some(current) };
        }

        expanded += 1;
        tracing::trace!(node = ?current, cost = ?best_cost, "expanding");

        for next in graph.neighbors(&current) {
            let new_cost = best_cost + graph.cost(&current, &next);

            let next_index = match cost_so_far.entry(next.clone()) {
                Vacant(e) => {
                    let i = e.index();
                    e.insert(new_cost);
                    i
                }
                Occupied(mut e) => {
                    if new_cost < *e.get() {
                        e.insert(new_cost);
                        e.index()
                    } else {
                        // The existing path is at least as good
                        continue;
                    }
                }
            };

            let priority = new_cost + heuristic(&next);
            came_from.insert(next, Some(current.clone()));
            frontier.put((next_index, new_cost), priority);
        }
    }

    tracing::debug!(expanded, reached = cost_so_far.len(), "frontier exhausted");
    SearchOutcome { came_from, cost_so_far, goal: None }
}
