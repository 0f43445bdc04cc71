//! Wayfinder — shortest-path and reachability queries over weighted,
//! directed, labeled graphs.
//!
//! # Architecture
//!
//! The crate is layered bottom-up:
//!
//! - [`store`]: a resizable chained hash table ([`KeyedStore`]) providing
//!   O(1) amortized keyed access, used to index nodes by label and to track
//!   settled nodes during a search
//! - [`graph`]: adjacency-list node/edge storage ([`Graph`]) built on the
//!   store, exposing mutation and lookup
//! - [`search`]: Dijkstra's algorithm over the graph's lookup surface, with
//!   deterministic equal-cost tie-breaking
//! - [`planner`]: the presentation-facing facade ([`RoutePlanner`]) that
//!   normalizes "no route" outcomes
//! - [`loader`]: DOT-subset graph description parsing
//!
//! Everything runs synchronously on the caller's thread. Queries take
//! `&self` and mutations `&mut self`, so in-process callers get their
//! serialization from the borrow checker; shared use wants an `RwLock`
//! around the graph with mutations behind the write lock.
//!
//! # Example
//!
//! ```rust
//! use wayfinder::graph::Graph;
//! use wayfinder::search;
//!
//! let mut graph = Graph::new();
//! graph.insert_node("A");
//! graph.insert_node("B");
//! graph.insert_node("C");
//! graph.insert_edge(&"A", &"B", 2.0).unwrap();
//! graph.insert_edge(&"B", &"C", 3.0).unwrap();
//! graph.insert_edge(&"A", &"C", 9.0).unwrap();
//!
//! let path = search::shortest_path_data(&graph, &"A", &"C").unwrap();
//! assert_eq!(path, vec!["A", "B", "C"]);
//! assert_eq!(search::shortest_path_cost(&graph, &"A", &"C"), Ok(5.0));
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod graph;
pub mod loader;
pub mod planner;
pub mod search;
pub mod store;

// Re-export main types for convenience
pub use graph::{Edge, Graph, GraphError, GraphResult, Node};
pub use loader::{LoadError, LoadResult};
pub use planner::RoutePlanner;
pub use search::{SearchError, SearchResult};
pub use store::{KeyedStore, StoreError, StoreResult};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
