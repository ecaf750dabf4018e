//! `wgraph weight` - look up a single edge

use wgraph_core::document::LoadedGraph;
use wgraph_core::error::Result;
use wgraph_core::format::OutputFormat;
use wgraph_core::maze::Cell;

use super::dispatch::CommandContext;
use super::render::quoted;
use crate::cli::WeightArgs;

pub fn execute(ctx: &CommandContext, args: &WeightArgs) -> Result<()> {
    let weight = match ctx.load_graph(&args.input)? {
        LoadedGraph::Named(graph) => graph.get_weight(&args.from, &args.to)?,
        LoadedGraph::Maze(graph) => {
            let from: Cell = args.from.parse()?;
            let to: Cell = args.to.parse()?;
            graph.get_weight(&from, &to)?
        }
    };

    let shown = weight.map_or_else(|| "none".to_string(), |w| w.to_string());
    match ctx.cli.format {
        OutputFormat::Human => println!("{}", shown),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "from": args.from,
                "to": args.to,
                "weight": weight,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!("H wgraph=1 records=1 mode=weight");
            println!("W {} {} {}", quoted(&args.from), quoted(&args.to), shown);
        }
    }
    Ok(())
}
