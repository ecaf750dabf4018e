//! Graph algorithm implementations
//!
//! Each algorithm is an inherent method on `WeightedGraph`:
//! - `bfs`: breadth-first search (`run_bfs`)
//! - `dfs`: depth-first search (`run_dfs`)
//! - `dijkstra`: single-source shortest paths (`run_dijkstra`)
//! - `traversal`: frontier skeleton shared by BFS and DFS

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub(crate) mod traversal;
