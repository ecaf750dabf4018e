//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Engine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Breadth/depth-first search behavior
    #[serde(default)]
    pub search: SearchConfig,

    /// Shortest path behavior
    #[serde(default)]
    pub dijkstra: DijkstraConfig,
}

/// Configuration for BFS and DFS
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// What to do when the frontier empties before the end vertex is visited
    #[serde(default)]
    pub exhaustion: ExhaustionPolicy,
}

/// Configuration for Dijkstra's algorithm
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DijkstraConfig {
    /// What to do when the end vertex cannot be reached from the start
    #[serde(default)]
    pub unreachable: UnreachablePolicy,
}

/// Reporting policy for a BFS/DFS run whose frontier empties first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExhaustionPolicy {
    /// Send `search_exhausted` to every observer
    #[default]
    Notify,
    /// Return without any further notification
    Silent,
}

/// Reporting policy for a Dijkstra run with no path to the end vertex
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnreachablePolicy {
    /// Fail with `GraphError::Unreachable`, no `dijkstra_over`
    #[default]
    Error,
    /// Send `dijkstra_over` with an empty path
    EmptyPath,
}
