//! Weighted directed graph and its algorithms
//!
//! - `store`: vertex/edge storage and observer registration
//! - `observer`: notification protocol and the `EventLog` recorder
//! - `algos`: BFS, DFS and Dijkstra

pub mod algos;
pub mod observer;
pub mod store;
pub mod types;

pub use observer::{
    EventLog, GraphObserver, ObserverError, ObserverRegistry, ObserverResult, SearchEvent,
};
pub use store::{GraphBuilder, WeightedGraph};
pub use types::{Cost, SearchKind, Vertex};
