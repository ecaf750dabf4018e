//! Rendering of recorded search notifications
//!
//! Vertices are always printed through `Display`, so maze cells appear as
//! `x,y` in every format.

use std::fmt::Display;

use serde_json::{json, Value};
use wgraph_core::error::Result;
use wgraph_core::format::OutputFormat;
use wgraph_core::graph::{Cost, SearchEvent, SearchKind, Vertex};

/// One finished search, ready to print
pub struct SearchRun<'a, V> {
    pub kind: SearchKind,
    pub from: &'a V,
    pub to: &'a V,
    pub events: Vec<SearchEvent<V>>,
}

impl<V: Vertex> SearchRun<'_, V> {
    /// Cost Dijkstra assigned to the target, if it was finished
    fn target_cost(&self) -> Option<Cost> {
        self.events.iter().find_map(|e| match e {
            SearchEvent::DijkstraVertexFinished { vertex, cost } if vertex == self.to => {
                Some(*cost)
            }
            _ => None,
        })
    }
}

pub fn print_run<V: Vertex + Display>(format: OutputFormat, run: &SearchRun<V>) -> Result<()> {
    match format {
        OutputFormat::Human => print_human(run),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&run_json(run))?);
        }
        OutputFormat::Records => print_records(run),
    }
    Ok(())
}

fn print_human<V: Vertex + Display>(run: &SearchRun<V>) {
    for event in &run.events {
        match event {
            SearchEvent::SearchBegun { kind } => {
                println!("{} from {} to {}", kind, run.from, run.to)
            }
            SearchEvent::VertexVisited { vertex } => println!("  visit {}", vertex),
            SearchEvent::SearchOver => println!("reached {}", run.to),
            SearchEvent::SearchExhausted => {
                println!("exhausted: {} is not reachable from {}", run.to, run.from)
            }
            SearchEvent::DijkstraVertexFinished { vertex, cost } => {
                println!("  finish {} (cost {})", vertex, cost)
            }
            SearchEvent::DijkstraOver { path } if path.is_empty() => {
                println!("no path from {} to {}", run.from, run.to)
            }
            SearchEvent::DijkstraOver { path } => {
                let cost = run
                    .target_cost()
                    .map_or_else(|| "?".to_string(), |c| c.to_string());
                println!("path: {} (cost {})", join(path, " -> "), cost);
            }
        }
    }
}

fn run_json<V: Vertex + Display>(run: &SearchRun<V>) -> Value {
    let events: Vec<Value> = run.events.iter().map(event_json).collect();
    let mut output = json!({
        "search": run.kind,
        "from": run.from.to_string(),
        "to": run.to.to_string(),
        "events": events,
    });

    if run.kind == SearchKind::Dijkstra {
        if let Some(obj) = output.as_object_mut() {
            obj.insert("cost".to_string(), run.target_cost().map_or(Value::Null, cost_json));
        }
    }
    output
}

fn event_json<V: Display>(event: &SearchEvent<V>) -> Value {
    match event {
        SearchEvent::SearchBegun { kind } => json!({"event": "search_begun", "kind": kind}),
        SearchEvent::VertexVisited { vertex } => {
            json!({"event": "vertex_visited", "vertex": vertex.to_string()})
        }
        SearchEvent::SearchOver => json!({"event": "search_over"}),
        SearchEvent::SearchExhausted => json!({"event": "search_exhausted"}),
        SearchEvent::DijkstraVertexFinished { vertex, cost } => json!({
            "event": "dijkstra_vertex_finished",
            "vertex": vertex.to_string(),
            "cost": cost_json(*cost),
        }),
        SearchEvent::DijkstraOver { path } => json!({
            "event": "dijkstra_over",
            "path": path.iter().map(ToString::to_string).collect::<Vec<_>>(),
        }),
    }
}

/// `Infinite` is `null`; finite costs past `u64` fall back to a string
fn cost_json(cost: Cost) -> Value {
    match cost.finite() {
        Some(c) => u64::try_from(c).map_or_else(|_| Value::String(c.to_string()), Value::from),
        None => Value::Null,
    }
}

fn print_records<V: Display>(run: &SearchRun<V>) {
    println!(
        "H wgraph=1 records=1 mode={} from={} to={}",
        run.kind,
        quoted(run.from),
        quoted(run.to)
    );

    for event in &run.events {
        match event {
            SearchEvent::SearchBegun { kind } => println!("E search_begun kind={}", kind),
            SearchEvent::VertexVisited { vertex } => {
                println!("E vertex_visited vertex={}", quoted(vertex))
            }
            SearchEvent::SearchOver => println!("E search_over"),
            SearchEvent::SearchExhausted => println!("E search_exhausted"),
            SearchEvent::DijkstraVertexFinished { vertex, cost } => println!(
                "E dijkstra_vertex_finished vertex={} cost={}",
                quoted(vertex),
                cost
            ),
            SearchEvent::DijkstraOver { path } => {
                println!("E dijkstra_over len={}", path.len());
                for (index, vertex) in path.iter().enumerate() {
                    println!("P {} {}", index, quoted(vertex));
                }
            }
        }
    }
}

/// Double-quote a value for records output
pub fn quoted(value: &impl Display) -> String {
    format!("\"{}\"", value.to_string().replace('"', "\\\""))
}

fn join<V: Display>(items: &[V], separator: &str) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}
