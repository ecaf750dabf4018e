use crate::config::UnreachablePolicy;
use crate::error::{GraphError, Result};
use crate::graph::observer::ObserverRegistry;
use crate::graph::store::WeightedGraph;
use crate::graph::types::{Cost, SearchKind, Vertex};
use indexmap::IndexMap;

/// Per-run state, indexed by vertex insertion position
struct DijkstraState<'g, V> {
    vertices: Vec<&'g V>,
    edges: Vec<&'g IndexMap<V, u64>>,
    cost: Vec<Cost>,
    predecessor: Vec<Option<usize>>,
    finished: Vec<bool>,
}

impl<'g, V: Vertex> DijkstraState<'g, V> {
    fn new(graph: &'g WeightedGraph<V>, start: usize) -> Self {
        let (vertices, edges): (Vec<_>, Vec<_>) = graph.entries().unzip();
        let n = vertices.len();

        let mut cost = vec![Cost::Infinite; n];
        let mut predecessor = vec![None; n];
        cost[start] = Cost::ZERO;
        predecessor[start] = Some(start);

        Self {
            vertices,
            edges,
            cost,
            predecessor,
            finished: vec![false; n],
        }
    }

    /// Unfinished vertex with the lowest cost; ties go to the earliest inserted
    fn next_unfinished(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, done) in self.finished.iter().enumerate() {
            if *done {
                continue;
            }
            match best {
                Some(b) if self.cost[i] >= self.cost[b] => {}
                _ => best = Some(i),
            }
        }
        best
    }

    /// Relax every edge leaving `u` towards an unfinished vertex
    fn relax_from(&mut self, graph: &WeightedGraph<V>, u: usize) {
        let edges = self.edges[u];
        for (neighbor, weight) in edges {
            let Some(w) = graph.index_of(neighbor) else {
                continue;
            };
            if self.finished[w] {
                continue;
            }
            let candidate = self.cost[u].plus(*weight);
            if candidate < self.cost[w] {
                self.cost[w] = candidate;
                self.predecessor[w] = Some(u);
            }
        }
    }

    /// Finish every vertex, notifying observers as each one is committed
    fn run(&mut self, graph: &WeightedGraph<V>, observers: &ObserverRegistry<V>) -> Result<()> {
        while let Some(u) = self.next_unfinished() {
            self.finished[u] = true;
            let (vertex, cost) = (self.vertices[u], self.cost[u]);
            tracing::trace!(?vertex, %cost, "finished");
            observers.notify(|o| o.dijkstra_vertex_finished(vertex, cost))?;
            self.relax_from(graph, u);
        }
        Ok(())
    }

    /// Follow predecessor links back from `end`; `None` when they never reach `start`
    fn path_to(&self, start: usize, end: usize) -> Option<Vec<V>> {
        let mut chain = vec![end];
        let mut current = end;
        while current != start {
            current = self.predecessor[current]?;
            chain.push(current);
            if chain.len() > self.vertices.len() {
                return None;
            }
        }
        Some(chain.iter().rev().map(|&i| self.vertices[i].clone()).collect())
    }
}

impl<V: Vertex> WeightedGraph<V> {
    /// Dijkstra's algorithm from `start` over the whole graph
    ///
    /// Every vertex is finished (vertices unreachable from `start` last, at
    /// `Cost::Infinite`) before the lowest-cost `start -> end` path is
    /// reported through `dijkstra_over`. When no path exists the configured
    /// unreachable policy applies.
    ///
    /// # Errors
    ///
    /// `UnknownVertex` if either endpoint is absent (nothing is notified),
    /// `Unreachable` under the default policy, `Observer` if an observer fails.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn run_dijkstra(&self, start: &V, end: &V) -> Result<()> {
        let start_index = self
            .index_of(start)
            .ok_or_else(|| GraphError::unknown_vertex(start))?;
        let end_index = self
            .index_of(end)
            .ok_or_else(|| GraphError::unknown_vertex(end))?;

        let observers = self.observers();
        observers.notify(|o| o.search_begun(SearchKind::Dijkstra))?;

        let mut state = DijkstraState::new(self, start_index);
        state.run(self, observers)?;

        match state.path_to(start_index, end_index) {
            Some(path) => {
                tracing::debug!(
                    hops = path.len() - 1,
                    cost = %state.cost[end_index],
                    "shortest path found"
                );
                observers.notify(|o| o.dijkstra_over(&path))?;
                Ok(())
            }
            None => {
                tracing::debug!(policy = ?self.config.dijkstra.unreachable, "end vertex unreachable");
                match self.config.dijkstra.unreachable {
                    UnreachablePolicy::Error => Err(GraphError::unreachable(start, end)),
                    UnreachablePolicy::EmptyPath => observers.notify(|o| o.dijkstra_over(&[])),
                }
            }
        }
    }
}
