use std::collections::{HashSet, VecDeque};

use crate::config::ExhaustionPolicy;
use crate::error::Result;
use crate::graph::store::WeightedGraph;
use crate::graph::types::{SearchKind, Vertex};

/// Discovered-but-unprocessed vertices
///
/// The discipline is the only difference between BFS and DFS.
pub(crate) trait Frontier<V> {
    fn push(&mut self, vertex: V);
    fn pop(&mut self) -> Option<V>;
}

/// FIFO frontier (breadth-first)
impl<V> Frontier<V> for VecDeque<V> {
    fn push(&mut self, vertex: V) {
        self.push_back(vertex);
    }

    fn pop(&mut self) -> Option<V> {
        self.pop_front()
    }
}

/// LIFO frontier (depth-first)
impl<V> Frontier<V> for Vec<V> {
    fn push(&mut self, vertex: V) {
        Vec::push(self, vertex);
    }

    fn pop(&mut self) -> Option<V> {
        Vec::pop(self)
    }
}

/// How a traversal ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TraversalOutcome {
    Reached,
    Exhausted,
}

/// Shared BFS/DFS skeleton
///
/// A vertex may sit in the frontier more than once; duplicates are dropped
/// when popped, not when pushed. Unvisited neighbors are pushed in the
/// vertex's edge insertion order.
pub(crate) fn explore<V, F>(
    graph: &WeightedGraph<V>,
    kind: SearchKind,
    start: &V,
    end: &V,
    mut frontier: F,
) -> Result<TraversalOutcome>
where
    V: Vertex,
    F: Frontier<V>,
{
    graph.require(start)?;
    graph.require(end)?;

    let observers = graph.observers();
    observers.notify(|o| o.search_begun(kind))?;

    let mut visited: HashSet<V> = HashSet::new();
    frontier.push(start.clone());

    while let Some(vertex) = frontier.pop() {
        if !visited.insert(vertex.clone()) {
            continue;
        }

        tracing::trace!(?vertex, "visit");
        observers.notify(|o| o.vertex_visited(&vertex))?;

        if vertex == *end {
            observers.notify(|o| o.search_over())?;
            tracing::debug!(visited = visited.len(), "end vertex reached");
            return Ok(TraversalOutcome::Reached);
        }

        for (neighbor, _) in graph.edges_of(&vertex)? {
            if !visited.contains(neighbor) {
                frontier.push(neighbor.clone());
            }
        }
    }

    tracing::debug!(
        visited = visited.len(),
        policy = ?graph.config.search.exhaustion,
        "frontier exhausted before end vertex"
    );
    if graph.config.search.exhaustion == ExhaustionPolicy::Notify {
        observers.notify(|o| o.search_exhausted())?;
    }

    Ok(TraversalOutcome::Exhausted)
}
