//! Algorithm progress notifications
//!
//! Observers are called synchronously on the thread running the algorithm,
//! in registration order. An observer that returns an error aborts the run:
//! the error reaches the caller as `GraphError::Observer` and observers
//! registered after it miss that notification. Observers must not mutate
//! the graph they observe.

use serde::Serialize;
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;

use crate::error::Result;
use crate::graph::types::{Cost, SearchKind, Vertex};

/// Failure raised by an observer to abort the running algorithm
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ObserverError {
    pub message: String,
}

impl ObserverError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Outcome of a single notification
pub type ObserverResult = std::result::Result<(), ObserverError>;

/// Listener for algorithm state transitions
///
/// Every method defaults to a no-op so implementers only override the
/// notifications they care about.
pub trait GraphObserver<V>: Send + Sync {
    /// Sent once before any vertex is processed
    fn search_begun(&self, _kind: SearchKind) -> ObserverResult {
        Ok(())
    }

    /// Sent by BFS/DFS just after a vertex is marked visited
    fn vertex_visited(&self, _vertex: &V) -> ObserverResult {
        Ok(())
    }

    /// Sent by BFS/DFS right after the end vertex is visited
    fn search_over(&self) -> ObserverResult {
        Ok(())
    }

    /// Sent by BFS/DFS when the frontier empties without reaching the end vertex
    fn search_exhausted(&self) -> ObserverResult {
        Ok(())
    }

    /// Sent by Dijkstra as each vertex joins the finished set
    fn dijkstra_vertex_finished(&self, _vertex: &V, _cost: Cost) -> ObserverResult {
        Ok(())
    }

    /// Sent by Dijkstra with the lowest-cost path, start first
    fn dijkstra_over(&self, _path: &[V]) -> ObserverResult {
        Ok(())
    }
}

/// Append-only, ordered list of observers
pub struct ObserverRegistry<V> {
    observers: Vec<Arc<dyn GraphObserver<V>>>,
}

impl<V> Default for ObserverRegistry<V> {
    fn default() -> Self {
        Self {
            observers: Vec::new(),
        }
    }
}

impl<V> ObserverRegistry<V> {
    pub fn push(&mut self, observer: Arc<dyn GraphObserver<V>>) {
        self.observers.push(observer);
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Deliver one notification to every observer, stopping at the first failure
    pub fn notify<F>(&self, mut deliver: F) -> Result<()>
    where
        F: FnMut(&dyn GraphObserver<V>) -> ObserverResult,
    {
        for observer in &self.observers {
            deliver(observer.as_ref())?;
        }
        Ok(())
    }
}

/// A recorded notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SearchEvent<V> {
    SearchBegun { kind: SearchKind },
    VertexVisited { vertex: V },
    SearchOver,
    SearchExhausted,
    DijkstraVertexFinished { vertex: V, cost: Cost },
    DijkstraOver { path: Vec<V> },
}

/// Observer that records every notification in arrival order
pub struct EventLog<V> {
    events: Mutex<Vec<SearchEvent<V>>>,
}

impl<V> Default for EventLog<V> {
    fn default() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }
}

impl<V: Clone> EventLog<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far
    pub fn events(&self) -> Vec<SearchEvent<V>> {
        self.lock().clone()
    }

    /// Remove and return every recorded event
    pub fn take(&self) -> Vec<SearchEvent<V>> {
        std::mem::take(&mut *self.lock())
    }

    /// Vertices in the order BFS/DFS visited them
    pub fn visited(&self) -> Vec<V> {
        self.lock()
            .iter()
            .filter_map(|e| match e {
                SearchEvent::VertexVisited { vertex } => Some(vertex.clone()),
                _ => None,
            })
            .collect()
    }

    /// Vertices and costs in the order Dijkstra finished them
    pub fn finished(&self) -> Vec<(V, Cost)> {
        self.lock()
            .iter()
            .filter_map(|e| match e {
                SearchEvent::DijkstraVertexFinished { vertex, cost } => {
                    Some((vertex.clone(), *cost))
                }
                _ => None,
            })
            .collect()
    }

    /// Path carried by the last `dijkstra_over`, if any
    pub fn path(&self) -> Option<Vec<V>> {
        self.lock().iter().rev().find_map(|e| match e {
            SearchEvent::DijkstraOver { path } => Some(path.clone()),
            _ => None,
        })
    }

    fn record(&self, event: SearchEvent<V>) -> ObserverResult {
        self.lock().push(event);
        Ok(())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<SearchEvent<V>>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<V: Vertex + Send> GraphObserver<V> for EventLog<V> {
    fn search_begun(&self, kind: SearchKind) -> ObserverResult {
        self.record(SearchEvent::SearchBegun { kind })
    }

    fn vertex_visited(&self, vertex: &V) -> ObserverResult {
        self.record(SearchEvent::VertexVisited {
            vertex: vertex.clone(),
        })
    }

    fn search_over(&self) -> ObserverResult {
        self.record(SearchEvent::SearchOver)
    }

    fn search_exhausted(&self) -> ObserverResult {
        self.record(SearchEvent::SearchExhausted)
    }

    fn dijkstra_vertex_finished(&self, vertex: &V, cost: Cost) -> ObserverResult {
        self.record(SearchEvent::DijkstraVertexFinished {
            vertex: vertex.clone(),
            cost,
        })
    }

    fn dijkstra_over(&self, path: &[V]) -> ObserverResult {
        self.record(SearchEvent::DijkstraOver {
            path: path.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;

    struct Tagged {
        tag: &'static str,
        seen: Arc<Mutex<Vec<&'static str>>>,
    }

    impl GraphObserver<u32> for Tagged {
        fn search_over(&self) -> ObserverResult {
            self.seen.lock().unwrap().push(self.tag);
            Ok(())
        }
    }

    struct Failing;

    impl GraphObserver<u32> for Failing {
        fn search_over(&self) -> ObserverResult {
            Err(ObserverError::new("listener rejected"))
        }
    }

    #[test]
    fn test_notify_in_registration_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut registry: ObserverRegistry<u32> = ObserverRegistry::default();
        for tag in ["first", "second", "third"] {
            registry.push(Arc::new(Tagged {
                tag,
                seen: Arc::clone(&seen),
            }));
        }

        registry.notify(|o| o.search_over()).unwrap();
        assert_eq!(*seen.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_failure_stops_dispatch() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut registry: ObserverRegistry<u32> = ObserverRegistry::default();
        registry.push(Arc::new(Tagged {
            tag: "before",
            seen: Arc::clone(&seen),
        }));
        registry.push(Arc::new(Failing));
        registry.push(Arc::new(Tagged {
            tag: "after",
            seen: Arc::clone(&seen),
        }));

        let err = registry.notify(|o| o.search_over()).unwrap_err();
        assert!(matches!(err, GraphError::Observer(ref e) if e.message == "listener rejected"));
        assert_eq!(*seen.lock().unwrap(), vec!["before"]);
    }

    #[test]
    fn test_event_log_accessors() {
        let log: EventLog<u32> = EventLog::new();
        log.search_begun(SearchKind::Dijkstra).unwrap();
        log.dijkstra_vertex_finished(&1, Cost::ZERO).unwrap();
        log.dijkstra_vertex_finished(&2, Cost::from(5)).unwrap();
        log.dijkstra_over(&[1, 2]).unwrap();

        assert_eq!(log.finished(), vec![(1, Cost::ZERO), (2, Cost::from(5))]);
        assert_eq!(log.path(), Some(vec![1, 2]));
        assert!(log.visited().is_empty());

        let taken = log.take();
        assert_eq!(taken.len(), 4);
        assert!(log.events().is_empty());
    }

    #[test]
    fn test_event_json_shape() {
        let event: SearchEvent<&str> = SearchEvent::DijkstraVertexFinished {
            vertex: "A",
            cost: Cost::from(3),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "dijkstra_vertex_finished");
        assert_eq!(json["vertex"], "A");
        assert_eq!(json["cost"], 3);

        let json = serde_json::to_value(SearchEvent::<&str>::SearchOver).unwrap();
        assert_eq!(json, serde_json::json!({ "event": "search_over" }));
    }
}
