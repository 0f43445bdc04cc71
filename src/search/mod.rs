//! Shortest-path search
//!
//! Dijkstra's algorithm over the graph's lookup surface. Each query builds
//! its transient state (priority frontier, settled set, predecessor arena)
//! locally and discards it on return; nothing is cached between calls.

pub mod dijkstra;

pub use dijkstra::{shortest_path_cost, shortest_path_data, SearchError, SearchResult};
