//! Graph input documents
//!
//! A document describes either a plain graph with named vertices and
//! weighted edges, or a maze (`[maze]` table). TOML and JSON are accepted,
//! chosen by file extension.
//!
//! ```toml
//! vertices = ["A", "B"]
//!
//! [[edges]]
//! from = "A"
//! to = "B"
//! weight = 3
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::config::EngineConfig;
use crate::error::{GraphError, Result};
use crate::graph::WeightedGraph;
use crate::maze::{populate_from_grid, Cell, MazeGrid, MazeSpec};

/// A directed edge as written in a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub weight: i64,
}

/// Parsed input document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vertices: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub edges: Vec<EdgeSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maze: Option<MazeSpec>,
}

/// A document built into a graph
pub enum LoadedGraph {
    Named(WeightedGraph<String>),
    Maze(WeightedGraph<Cell>),
}

impl LoadedGraph {
    pub fn vertex_count(&self) -> usize {
        match self {
            LoadedGraph::Named(g) => g.vertex_count(),
            LoadedGraph::Maze(g) => g.vertex_count(),
        }
    }

    pub fn edge_count(&self) -> usize {
        match self {
            LoadedGraph::Named(g) => g.edge_count(),
            LoadedGraph::Maze(g) => g.edge_count(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            LoadedGraph::Named(_) => "graph",
            LoadedGraph::Maze(_) => "maze",
        }
    }
}

impl GraphDocument {
    /// Read a `.toml` or `.json` document
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("toml") => Self::from_toml(&content),
            Some("json") => Self::from_json(&content),
            _ => Err(GraphError::invalid_value(
                "document extension (expected .toml or .json)",
                path.display(),
            )),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Build the described graph through the public vertex/edge API
    pub fn build(&self, config: EngineConfig) -> Result<LoadedGraph> {
        match &self.maze {
            Some(_) if !self.vertices.is_empty() || !self.edges.is_empty() => Err(
                GraphError::invalid_value("document", "maze and vertices/edges are exclusive"),
            ),
            Some(spec) => {
                let grid = MazeGrid::from_spec(spec)?;
                let mut graph = WeightedGraph::with_config(config);
                populate_from_grid(&mut graph, &grid)?;
                Ok(LoadedGraph::Maze(graph))
            }
            None => {
                let mut graph = WeightedGraph::with_config(config);
                for vertex in &self.vertices {
                    graph.add_vertex(vertex.clone())?;
                }
                for edge in &self.edges {
                    graph.add_edge(&edge.from, &edge.to, edge.weight)?;
                }
                tracing::debug!(
                    vertices = graph.vertex_count(),
                    edges = graph.edge_count(),
                    "document graph built"
                );
                Ok(LoadedGraph::Named(graph))
            }
        }
    }
}
