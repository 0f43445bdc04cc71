//! Route planning facade
//!
//! The presentation-facing query surface over a string-labeled graph. Path
//! queries normalize the search engine's failures to empty results, since
//! "no route" is a legitimate answer for an end user. `reachable_within`
//! keeps the hard failure for an unknown start: an empty reachable set there
//! would hide a caller bug.

use crate::graph::{Graph, GraphError, GraphResult};
use crate::loader::{self, LoadResult};
use crate::search;
use std::path::Path;
use tracing::debug;

/// Query facade over a route graph keyed by location name.
#[derive(Debug, Default)]
pub struct RoutePlanner {
    graph: Graph<String>,
}

impl RoutePlanner {
    /// Create a planner over an empty graph.
    pub fn new() -> Self {
        RoutePlanner {
            graph: Graph::new(),
        }
    }

    /// Wrap an already-populated graph.
    pub fn with_graph(graph: Graph<String>) -> Self {
        RoutePlanner { graph }
    }

    /// Replace the current contents with the graph described by `path`.
    /// Returns the number of edges loaded.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> LoadResult<usize> {
        self.graph.clear();
        loader::load_dot_file(path, &mut self.graph)
    }

    /// Every known location, in the graph's stable iteration order.
    pub fn locations(&self) -> Vec<String> {
        self.graph.all_nodes().into_iter().cloned().collect()
    }

    /// Locations along the shortest route from `start` to `end`, inclusive.
    ///
    /// Empty when the endpoints are valid but disconnected, and also when
    /// either endpoint is unknown; both failure causes collapse to the same
    /// observable result at this layer.
    pub fn route(&self, start: &str, end: &str) -> Vec<String> {
        match search::shortest_path_data(&self.graph, &start.to_owned(), &end.to_owned()) {
            Ok(stops) => stops,
            Err(error) => {
                debug!(%start, %end, %error, "route query normalized to empty result");
                Vec::new()
            }
        }
    }

    /// Per-segment travel times aligned with consecutive pairs of
    /// [`route`](Self::route). Empty whenever the route is empty.
    pub fn segment_times(&self, start: &str, end: &str) -> Vec<f64> {
        let stops = self.route(start, end);
        stops
            .windows(2)
            .filter_map(|pair| self.graph.edge_weight(&pair[0], &pair[1]).ok())
            .collect()
    }

    /// Locations other than `start` whose minimal travel time from `start`
    /// is at most `budget`.
    ///
    /// Unlike the path queries, an unknown `start` is a hard
    /// [`GraphError::NodeNotFound`] failure.
    pub fn reachable_within(&self, start: &str, budget: f64) -> GraphResult<Vec<String>> {
        let start = start.to_owned();
        if !self.graph.contains_node(&start) {
            return Err(GraphError::NodeNotFound(start));
        }

        let mut reachable = Vec::new();
        for location in self.graph.all_nodes() {
            if *location == start {
                continue;
            }
            // Disconnected locations surface as PathNotFound; skip them.
            if let Ok(cost) = search::shortest_path_cost(&self.graph, &start, location) {
                if cost <= budget {
                    reachable.push(location.clone());
                }
            }
        }
        Ok(reachable)
    }

    /// The underlying graph's lookup surface.
    pub fn graph(&self) -> &Graph<String> {
        &self.graph
    }

    /// The underlying graph's mutation surface.
    pub fn graph_mut(&mut self) -> &mut Graph<String> {
        &mut self.graph
    }
}
