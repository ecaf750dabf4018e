use crate::error::Result;
use crate::graph::algos::traversal::explore;
use crate::graph::store::WeightedGraph;
use crate::graph::types::{SearchKind, Vertex};

impl<V: Vertex> WeightedGraph<V> {
    /// Depth-first search from `start`, stopping just after `end` is visited
    ///
    /// Same notifications as [`WeightedGraph::run_bfs`] with
    /// `search_begun(Dfs)`. Neighbors are pushed in edge insertion order, so
    /// the most recently inserted edge of a vertex is followed first.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn run_dfs(&self, start: &V, end: &V) -> Result<()> {
        explore(self, SearchKind::Dfs, start, end, Vec::new()).map(|_| ())
    }
}
