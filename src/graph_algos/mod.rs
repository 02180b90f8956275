pub mod traversal;
pub mod bfs;
pub mod dijkstra;
pub mod a_star;
pub mod floyd_warshall;
mod path;

pub use path::{path_cost, reconstruct_path};

use crate::collections::FxIndexMap;
use crate::errors::SearchError;

use std::{fmt, hash::Hash};


/// Node -> node it was reached from
/// The start node maps to `None`
pub type CameFrom<N> = FxIndexMap<N, Option<N>>;

/// Node -> best known cumulative cost from the start
pub type CostSoFar<N, C> = FxIndexMap<N, C>;


/// Search target - a concrete node or any node matching a predicate
pub enum Goal<'a, N> {
    Node(N),
    Matching(Box<dyn Fn(&N) -> bool + 'a>),
}

impl<'a, N: PartialEq> Goal<'a, N> {

    pub fn node(node: N) -> Self {
        Goal::Node(node)
    }

    pub fn matching<F>(predicate: F) -> Self
    where
        F: Fn(&N) -> bool + 'a,
    {
        Goal::Matching(Box::new(predicate))
    }

    pub fn is_met(&self, node: &N) -> bool {
        match self {
            Goal::Node(goal) => goal == node,
            Goal::Matching(predicate) => predicate(node),
        }
    }
}

impl<'a, N> From<N> for Goal<'a, N> {
    fn from(node: N) -> Self {
        Goal::Node(node)
    }
}

impl<N: fmt::Debug> fmt::Debug for Goal<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Goal::Node(node) => f.debug_tuple("Node").field(node).finish(),
            Goal::Matching(_) => f.write_str("Matching(..)"),
        }
    }
}


/// Output of an unweighted search
#[derive(Clone, Debug)]
pub struct BfsOutcome<N> {
    pub came_from: CameFrom<N>,
    /// First node that met the goal, `None` when the search ran dry
    pub goal: Option<N>,
}

impl<N: Eq + Hash + Clone> BfsOutcome<N> {

    /// Path from `start` to the node that met the goal
    pub fn path(&self, start: &N) -> Result<Vec<N>, SearchError> {
        let goal = self.goal.as_ref().ok_or(SearchError::NoPathFound)?;
        reconstruct_path(&self.came_from, start, goal)
    }
}


/// Output of a weighted search (Dijkstra, A*)
/// After an early exit on the goal, costs of nodes other than the goal may
/// not be final.
#[derive(Clone, Debug)]
pub struct SearchOutcome<N, C> {
    pub came_from: CameFrom<N>,
    pub cost_so_far: CostSoFar<N, C>,
    /// Node that met the goal, `None` when the search ran dry
    pub goal: Option<N>,
}

impl<N: Eq + Hash + Clone, C: Copy> SearchOutcome<N, C> {

    /// Path from `start` to the node that met the goal
    pub fn path(&self, start: &N) -> Result<Vec<N>, SearchError> {
        let goal = self.goal.as_ref().ok_or(SearchError::NoPathFound)?;
        reconstruct_path(&self.came_from, start, goal)
    }

    /// Total cost of reaching the goal
    pub fn goal_cost(&self) -> Option<C> {
        self.goal
            .as_ref()
            .and_then(|goal| self.cost_so_far.get(goal))
            .copied()
    }
}
