//! `wgraph info` - summarize a document

use std::path::Path;

use wgraph_core::error::Result;
use wgraph_core::format::OutputFormat;

use super::dispatch::CommandContext;

pub fn execute(ctx: &CommandContext, input: &Path) -> Result<()> {
    let graph = ctx.load_graph(input)?;

    match ctx.cli.format {
        OutputFormat::Human => {
            println!(
                "{}: {} vertices, {} edges",
                graph.kind(),
                graph.vertex_count(),
                graph.edge_count()
            );
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "kind": graph.kind(),
                "vertices": graph.vertex_count(),
                "edges": graph.edge_count(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!(
                "H wgraph=1 records=1 mode=info kind={} vertices={} edges={}",
                graph.kind(),
                graph.vertex_count(),
                graph.edge_count()
            );
        }
    }
    Ok(())
}
