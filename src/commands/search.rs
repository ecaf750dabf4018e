//! `wgraph bfs|dfs|dijkstra` - run a search and print its notifications

use std::fmt::Display;
use std::sync::Arc;

use wgraph_core::document::LoadedGraph;
use wgraph_core::error::{GraphError, Result};
use wgraph_core::graph::{EventLog, SearchKind, Vertex, WeightedGraph};
use wgraph_core::maze::Cell;
use wgraph_core::trace_time;

use super::dispatch::CommandContext;
use super::render::{self, SearchRun};
use crate::cli::RunArgs;

/// Execute a search command
pub fn execute(ctx: &CommandContext, kind: SearchKind, args: &RunArgs) -> Result<()> {
    match ctx.load_graph(&args.input)? {
        LoadedGraph::Named(graph) => {
            run_search(ctx, graph, kind, args.from.clone(), args.to.clone())
        }
        LoadedGraph::Maze(graph) => {
            let from: Cell = args.from.parse()?;
            let to: Cell = args.to.parse()?;
            run_search(ctx, graph, kind, from, to)
        }
    }
}

fn run_search<V>(
    ctx: &CommandContext,
    mut graph: WeightedGraph<V>,
    kind: SearchKind,
    from: V,
    to: V,
) -> Result<()>
where
    V: Vertex + Display + Send + 'static,
{
    let log = Arc::new(EventLog::new());
    graph.add_observer(log.clone());

    let result = match kind {
        SearchKind::Bfs => graph.run_bfs(&from, &to),
        SearchKind::Dfs => graph.run_dfs(&from, &to),
        SearchKind::Dijkstra => graph.run_dijkstra(&from, &to),
    };
    trace_time!(ctx.start, "run_search");

    // An unreachable target still produced a full set of finished vertices
    if matches!(result, Ok(()) | Err(GraphError::Unreachable { .. })) {
        let run = SearchRun {
            kind,
            from: &from,
            to: &to,
            events: log.take(),
        };
        render::print_run(ctx.cli.format, &run)?;
    }

    result
}
