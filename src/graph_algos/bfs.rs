use crate::collections::FxIndexMap;
use crate::graph::Graph;
use super::{BfsOutcome, CameFrom, Goal};

use std::collections::VecDeque;
use indexmap::map::Entry::Vacant;


/// Breadth first search from `start` until a node meets `goal`
/// https://en.wikipedia.org/wiki/Breadth-first_search
/// The came-from map doubles as the visited set, so each node is queued at
/// most once and the path to the goal has the fewest possible edges
#[tracing::instrument(skip(graph, goal))]
pub fn breadth_first_search<'a, G>(graph: &G, start: G::Node, goal: impl Into<Goal<'a, G::Node>>) -> BfsOutcome<G::Node>
where
    G: Graph + ?Sized,
    G::Node: 'a,
{
    let goal = goal.into();

    let mut queue = VecDeque::from([start.clone()]);
    let mut came_from: CameFrom<G::Node> = FxIndexMap::default();
    came_from.insert(start, None);

    let mut expanded = 0usize;

    while let Some(current) = queue.pop_front() {
        if goal.is_met(&current) {
            tracing::debug!(expanded, goal = ?current, "goal reached");
            return BfsOutcome { came_from, goal: Some(current) };
        }
        expanded += 1;

        for next in graph.neighbors(&current) {
            if let Vacant(e) = came_from.entry(next.clone()) {
                e.insert(Some(current.clone()));
                queue.push_back(next);
            }
        }
    }

    tracing::debug!(expanded, "goal not reachable");
    BfsOutcome { came_from, goal: None }
}
