use std::collections::VecDeque;

use crate::error::Result;
use crate::graph::algos::traversal::explore;
use crate::graph::store::WeightedGraph;
use crate::graph::types::{SearchKind, Vertex};

impl<V: Vertex> WeightedGraph<V> {
    /// Breadth-first search from `start`, stopping just after `end` is visited
    ///
    /// Observers receive `search_begun(Bfs)`, one `vertex_visited` per newly
    /// visited vertex, then `search_over` once `end` is visited. If `end` is
    /// never reached the configured exhaustion policy applies.
    ///
    /// # Errors
    ///
    /// `UnknownVertex` if either endpoint is absent (nothing is notified),
    /// `Observer` if an observer fails.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn run_bfs(&self, start: &V, end: &V) -> Result<()> {
        explore(self, SearchKind::Bfs, start, end, VecDeque::new()).map(|_| ())
    }
}
