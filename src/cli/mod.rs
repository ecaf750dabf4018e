//! CLI argument parsing for wgraph
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use wgraph_core::format::OutputFormat;

pub use args::{RunArgs, WeightArgs};
use parse::parse_output_format;

/// wgraph - observable BFS, DFS and Dijkstra over weighted graphs
#[derive(Parser, Debug)]
#[command(name = "wgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, records)
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "trace", "wgraph_core=debug")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Engine configuration file (defaults to ./wgraph.toml when present)
    #[arg(long, global = true, env = "WGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Breadth-first search from one vertex to another
    Bfs(RunArgs),

    /// Depth-first search from one vertex to another
    Dfs(RunArgs),

    /// Cheapest path by Dijkstra's algorithm
    Dijkstra(RunArgs),

    /// Print the weight of an edge, or "none"
    Weight(WeightArgs),

    /// Show vertex and edge counts of a document
    Info {
        /// Graph or maze document (.toml or .json)
        input: PathBuf,
    },
}
