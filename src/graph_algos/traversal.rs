use crate::collections::FxIndexSet;
use crate::graph::Graph;

use std::collections::VecDeque;


/// Visit every node reachable from `start` once, depth first
/// Order follows the graph's neighbor enumeration, last pushed is visited first
#[tracing::instrument(skip(graph, visitor))]
pub fn depth_first_traversal<G, V>(graph: &G, start: G::Node, mut visitor: V)
where
    G: Graph + ?Sized,
    V: FnMut(&G::Node),
{
    let mut stack = vec![start];
    let mut visited: FxIndexSet<G::Node> = FxIndexSet::default();

    while let Some(current) = stack.pop() {
        if visited.contains(&current) {
            continue;
        }
        visitor(&current);

        for neighbor in graph.neighbors(&current) {
            if !visited.contains(&neighbor) {
                stack.push(neighbor);
            }
        }
        visited.insert(current);
    }

    tracing::debug!(visited = visited.len(), "depth first traversal done");
}

/// Visit every node reachable from `start` once, breadth first
#[tracing::instrument(skip(graph, visitor))]
pub fn breadth_first_traversal<G, V>(graph: &G, start: G::Node, mut visitor: V)
where
    G: Graph + ?Sized,
    V: FnMut(&G::Node),
{
    let mut queue = VecDeque::new();
    let mut visited: FxIndexSet<G::Node> = FxIndexSet::default();

    visitor(&start);
    visited.insert(start.clone());
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for neighbor in graph.neighbors(&current) {
            if visited.insert(neighbor.clone()) {
                visitor(&neighbor);
                queue.push_back(neighbor);
            }
        }
    }

    tracing::debug!(visited = visited.len(), "breadth first traversal done");
}
