use indexmap::IndexMap;
use std::sync::Arc;

use crate::config::EngineConfig;
use crate::error::{GraphError, Result};
use crate::graph::observer::{GraphObserver, ObserverRegistry};
use crate::graph::types::Vertex;

/// Capability to populate a graph through its public vertex/edge API
pub trait GraphBuilder<V> {
    fn add_vertex(&mut self, vertex: V) -> Result<()>;
    fn add_edge(&mut self, from: &V, to: &V, weight: i64) -> Result<()>;
}

/// Directed graph with non-negative integer edge weights
///
/// Vertices and each vertex's outgoing edges are kept in insertion order.
/// That order drives neighbor enumeration in BFS/DFS and tie-breaking in
/// Dijkstra, so runs over the same graph are reproducible. The graph only
/// grows: there is no removal.
pub struct WeightedGraph<V> {
    adjacency: IndexMap<V, IndexMap<V, u64>>,
    observers: ObserverRegistry<V>,
    pub(crate) config: EngineConfig,
}

impl<V: Vertex> Default for WeightedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> WeightedGraph<V> {
    /// Empty graph using the default engine configuration
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            adjacency: IndexMap::new(),
            observers: ObserverRegistry::default(),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Register an observer; notifications follow registration order
    pub fn add_observer(&mut self, observer: Arc<dyn GraphObserver<V>>) {
        self.observers.push(observer);
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub(crate) fn observers(&self) -> &ObserverRegistry<V> {
        &self.observers
    }

    /// Add a vertex with no outgoing edges
    ///
    /// Fails with `DuplicateVertex` if it is already present.
    pub fn add_vertex(&mut self, vertex: V) -> Result<()> {
        if self.adjacency.contains_key(&vertex) {
            return Err(GraphError::duplicate_vertex(&vertex));
        }
        self.adjacency.insert(vertex, IndexMap::new());
        Ok(())
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Insert or overwrite the edge `from -> to`
    ///
    /// Both endpoints must already exist and the weight must be non-negative.
    /// Re-adding an edge replaces its weight and keeps its enumeration position.
    pub fn add_edge(&mut self, from: &V, to: &V, weight: i64) -> Result<()> {
        self.require(from)?;
        self.require(to)?;
        let weight_u64 =
            u64::try_from(weight).map_err(|_| GraphError::invalid_weight(from, to, weight))?;
        let edges = self
            .adjacency
            .get_mut(from)
            .ok_or_else(|| GraphError::unknown_vertex(from))?;

        edges.insert(to.clone(), weight_u64);
        Ok(())
    }

    /// Weight of `from -> to`, or `None` when there is no such edge
    pub fn get_weight(&self, from: &V, to: &V) -> Result<Option<u64>> {
        self.require(to)?;
        Ok(self.edges_of(from)?.get(to).copied())
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(IndexMap::len).sum()
    }

    /// Vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    /// Outgoing edges of `vertex` in insertion order
    pub fn neighbors(&self, vertex: &V) -> Result<impl Iterator<Item = (&V, u64)>> {
        Ok(self.edges_of(vertex)?.iter().map(|(to, w)| (to, *w)))
    }

    pub(crate) fn require(&self, vertex: &V) -> Result<()> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(GraphError::unknown_vertex(vertex))
        }
    }

    pub(crate) fn edges_of(&self, vertex: &V) -> Result<&IndexMap<V, u64>> {
        self.adjacency
            .get(vertex)
            .ok_or_else(|| GraphError::unknown_vertex(vertex))
    }

    /// Position of `vertex` in insertion order
    pub(crate) fn index_of(&self, vertex: &V) -> Option<usize> {
        self.adjacency.get_index_of(vertex)
    }

    /// Vertices with their outgoing edges, in insertion order
    pub(crate) fn entries(&self) -> impl Iterator<Item = (&V, &IndexMap<V, u64>)> {
        self.adjacency.iter()
    }
}

impl<V: Vertex> GraphBuilder<V> for WeightedGraph<V> {
    fn add_vertex(&mut self, vertex: V) -> Result<()> {
        WeightedGraph::add_vertex(self, vertex)
    }

    fn add_edge(&mut self, from: &V, to: &V, weight: i64) -> Result<()> {
        WeightedGraph::add_edge(self, from, to, weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> WeightedGraph<&'static str> {
        let mut graph = WeightedGraph::new();
        for v in ["A", "B", "C"] {
            graph.add_vertex(v).unwrap();
        }
        graph
    }

    #[test]
    fn test_duplicate_vertex_rejected() {
        let mut graph = abc();
        let err = graph.add_vertex("B").unwrap_err();
        assert!(matches!(err, GraphError::DuplicateVertex { .. }));
        assert_eq!(graph.vertex_count(), 3);
    }

    #[test]
    fn test_add_edge_unknown_endpoint() {
        let mut graph = abc();
        assert!(matches!(
            graph.add_edge(&"A", &"Z", 1),
            Err(GraphError::UnknownVertex { .. })
        ));
        assert!(matches!(
            graph.add_edge(&"Z", &"A", 1),
            Err(GraphError::UnknownVertex { .. })
        ));
        assert_eq!(graph.edge_count(), 0);
        assert!(!graph.contains_vertex(&"Z"));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let mut graph = abc();
        let err = graph.add_edge(&"A", &"B", -1).unwrap_err();
        assert!(matches!(err, GraphError::InvalidWeight { weight: -1, .. }));
        assert_eq!(graph.get_weight(&"A", &"B").unwrap(), None);
    }

    #[test]
    fn test_zero_weight_distinct_from_no_edge() {
        let mut graph = abc();
        graph.add_edge(&"A", &"B", 0).unwrap();
        assert_eq!(graph.get_weight(&"A", &"B").unwrap(), Some(0));
        assert_eq!(graph.get_weight(&"B", &"A").unwrap(), None);
    }

    #[test]
    fn test_re_adding_edge_overwrites() {
        let mut graph = abc();
        graph.add_edge(&"A", &"B", 3).unwrap();
        graph.add_edge(&"A", &"C", 1).unwrap();
        graph.add_edge(&"A", &"B", 7).unwrap();

        assert_eq!(graph.get_weight(&"A", &"B").unwrap(), Some(7));
        assert_eq!(graph.edge_count(), 2);

        let order: Vec<_> = graph.neighbors(&"A").unwrap().map(|(v, _)| *v).collect();
        assert_eq!(order, vec!["B", "C"]);
    }

    #[test]
    fn test_get_weight_unknown_vertex() {
        let graph = abc();
        assert!(matches!(
            graph.get_weight(&"A", &"Q"),
            Err(GraphError::UnknownVertex { .. })
        ));
        assert!(matches!(
            graph.get_weight(&"Q", &"A"),
            Err(GraphError::UnknownVertex { .. })
        ));
    }

    #[test]
    fn test_vertices_in_insertion_order() {
        let mut graph = WeightedGraph::new();
        for v in [5, 1, 9, 3] {
            graph.add_vertex(v).unwrap();
        }
        let order: Vec<_> = graph.vertices().copied().collect();
        assert_eq!(order, vec![5, 1, 9, 3]);
        assert_eq!(graph.index_of(&9), Some(2));
    }

    #[test]
    fn test_builder_trait_delegates() {
        fn fill<B: GraphBuilder<u8>>(builder: &mut B) -> Result<()> {
            builder.add_vertex(1)?;
            builder.add_vertex(2)?;
            builder.add_edge(&1, &2, 4)
        }

        let mut graph = WeightedGraph::new();
        fill(&mut graph).unwrap();
        assert_eq!(graph.get_weight(&1, &2).unwrap(), Some(4));
    }
}
