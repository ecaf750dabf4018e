//! CLI commands for wgraph

pub mod dispatch;
pub mod info;
pub mod render;
pub mod search;
pub mod weight;
