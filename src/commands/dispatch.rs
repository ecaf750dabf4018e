//! Command dispatch logic for wgraph

use std::env;
use std::path::Path;
use std::time::Instant;

use tracing::debug;
use wgraph_core::config::EngineConfig;
use wgraph_core::document::{GraphDocument, LoadedGraph};
use wgraph_core::error::Result;
use wgraph_core::graph::SearchKind;
use wgraph_core::trace_time;

use crate::cli::{Cli, Commands};
use crate::commands::{info, search, weight};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Resolve the engine config, then load and build the document at `input`
    pub fn load_graph(&self, input: &Path) -> Result<LoadedGraph> {
        let cwd = env::current_dir()?;
        let config = EngineConfig::discover(self.cli.config.as_deref(), &cwd)?;
        trace_time!(self.start, "load_config");

        let document = GraphDocument::load(input)?;
        let graph = document.build(config)?;
        debug!(
            input = %input.display(),
            kind = graph.kind(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "loaded graph"
        );
        trace_time!(self.start, "build_graph");
        Ok(graph)
    }
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start);

    match &cli.command {
        Commands::Bfs(args) => search::execute(&ctx, SearchKind::Bfs, args),
        Commands::Dfs(args) => search::execute(&ctx, SearchKind::Dfs, args),
        Commands::Dijkstra(args) => search::execute(&ctx, SearchKind::Dijkstra, args),
        Commands::Weight(args) => weight::execute(&ctx, args),
        Commands::Info { input } => info::execute(&ctx, input),
    }
}
