//! Wgraph Core Library
//!
//! Weighted directed graph store with observable breadth-first search,
//! depth-first search and Dijkstra shortest paths.

pub mod config;
pub mod document;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod maze;

pub use error::{GraphError, Result};
pub use graph::{
    Cost, EventLog, GraphBuilder, GraphObserver, ObserverError, SearchEvent, SearchKind, Vertex,
    WeightedGraph,
};
