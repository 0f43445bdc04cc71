//! Dijkstra's single-source shortest path

use crate::graph::Graph;
use crate::store::KeyedStore;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::Display;
use std::hash::Hash;
use thiserror::Error;

/// Errors that can occur during a shortest-path query
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SearchError {
    #[error("{0} is not a node in the graph")]
    InvalidEndpoint(String),

    #[error("no path from {0} to {1}")]
    PathNotFound(String, String),
}

pub type SearchResult<T> = Result<T, SearchError>;

/// One record in the search arena: a concrete path from the start node to
/// `label`, recoverable by following `predecessor` indices back to the seed
/// record, which has none. The chain is backward-only and acyclic.
#[derive(Debug)]
struct SearchNode<L> {
    label: L,
    cost: f64,
    predecessor: Option<usize>,
}

/// Frontier candidate, ordered by cumulative cost ascending. Ties are broken
/// by the insertion sequence number so equal-cost candidates pop
/// first-in-first-out, which keeps results reproducible.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Candidate {
    cost: f64,
    seq: u64,
    record: usize,
}

impl Eq for Candidate {}

// BinaryHeap is a max-heap, so both comparisons are reversed to pop the
// minimum-cost, earliest-inserted candidate first.
impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Expand the search frontier until `end` is popped, returning the arena of
/// search records together with the index of the terminal record.
///
/// The frontier always pops the globally smallest remaining tentative cost,
/// so the first time `end` surfaces its cost is already minimal and the
/// search stops without expanding further. A popped node that is already
/// settled is a stale, superseded candidate and is discarded; this lazy
/// deletion stands in for an explicit decrease-key operation.
fn run_search<L>(graph: &Graph<L>, start: &L, end: &L) -> SearchResult<(Vec<SearchNode<L>>, usize)>
where
    L: Clone + Eq + Hash + Display,
{
    if !graph.contains_node(start) {
        return Err(SearchError::InvalidEndpoint(start.to_string()));
    }
    if !graph.contains_node(end) {
        return Err(SearchError::InvalidEndpoint(end.to_string()));
    }

    let mut arena: Vec<SearchNode<L>> = Vec::new();
    let mut frontier: BinaryHeap<Candidate> = BinaryHeap::new();
    // Nodes whose minimal cost is final, mapped to their settled record.
    let mut settled: KeyedStore<L, usize> = KeyedStore::new();
    let mut seq = 0u64;

    arena.push(SearchNode {
        label: start.clone(),
        cost: 0.0,
        predecessor: None,
    });
    frontier.push(Candidate {
        cost: 0.0,
        seq,
        record: 0,
    });

    while let Some(Candidate { cost, record, .. }) = frontier.pop() {
        if arena[record].label == *end {
            return Ok((arena, record));
        }

        // A duplicate here means the node was settled by a cheaper candidate.
        if settled.put(arena[record].label.clone(), record).is_err() {
            continue;
        }

        let current = arena[record].label.clone();
        for edge in graph.out_edges(&current).unwrap_or_default() {
            if settled.contains_key(&edge.successor) {
                continue;
            }

            arena.push(SearchNode {
                label: edge.successor.clone(),
                cost: cost + edge.weight,
                predecessor: Some(record),
            });
            seq += 1;
            frontier.push(Candidate {
                cost: cost + edge.weight,
                seq,
                record: arena.len() - 1,
            });
        }
    }

    Err(SearchError::PathNotFound(
        start.to_string(),
        end.to_string(),
    ))
}

/// Labels along the shortest path, from `start` through `end` inclusive.
///
/// Fails with [`SearchError::InvalidEndpoint`] when either endpoint is not a
/// node of the graph, and [`SearchError::PathNotFound`] when the endpoints
/// are not connected.
pub fn shortest_path_data<L>(graph: &Graph<L>, start: &L, end: &L) -> SearchResult<Vec<L>>
where
    L: Clone + Eq + Hash + Display,
{
    let (arena, terminal) = run_search(graph, start, end)?;

    let mut path = Vec::new();
    let mut current = Some(terminal);
    while let Some(index) = current {
        path.push(arena[index].label.clone());
        current = arena[index].predecessor;
    }
    path.reverse();
    Ok(path)
}

/// Total cost (sum of edge weights) of the shortest path from `start` to
/// `end`. Propagates the same failures as [`shortest_path_data`].
pub fn shortest_path_cost<L>(graph: &Graph<L>, start: &L, end: &L) -> SearchResult<f64>
where
    L: Clone + Eq + Hash + Display,
{
    let (arena, terminal) = run_search(graph, start, end)?;
    Ok(arena[terminal].cost)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph<&'static str> {
        let mut graph = Graph::new();
        for label in ["n1", "n2", "n3"] {
            graph.insert_node(label);
        }
        graph.insert_edge(&"n1", &"n2", 10.0).unwrap();
        graph.insert_edge(&"n2", &"n3", 5.0).unwrap();
        // Direct but expensive.
        graph.insert_edge(&"n1", &"n3", 50.0).unwrap();
        graph
    }

    #[test]
    fn test_prefers_cheaper_route() {
        let graph = triangle();
        let path = shortest_path_data(&graph, &"n1", &"n3").unwrap();
        assert_eq!(path, vec!["n1", "n2", "n3"]);
        assert_eq!(shortest_path_cost(&graph, &"n1", &"n3"), Ok(15.0));
    }

    #[test]
    fn test_start_equals_end() {
        let graph = triangle();
        assert_eq!(shortest_path_data(&graph, &"n1", &"n1"), Ok(vec!["n1"]));
        assert_eq!(shortest_path_cost(&graph, &"n1", &"n1"), Ok(0.0));
    }

    #[test]
    fn test_invalid_endpoints() {
        let graph = triangle();
        assert_eq!(
            shortest_path_data(&graph, &"missing", &"n3"),
            Err(SearchError::InvalidEndpoint("missing".to_string()))
        );
        assert_eq!(
            shortest_path_cost(&graph, &"n1", &"missing"),
            Err(SearchError::InvalidEndpoint("missing".to_string()))
        );
    }

    #[test]
    fn test_no_path() {
        let mut graph = triangle();
        graph.insert_node("island");
        assert_eq!(
            shortest_path_data(&graph, &"n1", &"island"),
            Err(SearchError::PathNotFound(
                "n1".to_string(),
                "island".to_string()
            ))
        );
        // Edges are directed: nothing leads back from n3.
        assert_eq!(
            shortest_path_cost(&graph, &"n3", &"n1"),
            Err(SearchError::PathNotFound(
                "n3".to_string(),
                "n1".to_string()
            ))
        );
    }

    #[test]
    fn test_equal_cost_ties_resolve_first_in_first_out() {
        // Two cost-2 routes from s to t; the one through the earlier-pushed
        // candidate (a, inserted before b) must win every time.
        let mut graph = Graph::new();
        for label in ["s", "a", "b", "t"] {
            graph.insert_node(label);
        }
        graph.insert_edge(&"s", &"a", 1.0).unwrap();
        graph.insert_edge(&"s", &"b", 1.0).unwrap();
        graph.insert_edge(&"a", &"t", 1.0).unwrap();
        graph.insert_edge(&"b", &"t", 1.0).unwrap();

        for _ in 0..10 {
            let path = shortest_path_data(&graph, &"s", &"t").unwrap();
            assert_eq!(path, vec!["s", "a", "t"]);
        }
        assert_eq!(shortest_path_cost(&graph, &"s", &"t"), Ok(2.0));
    }

    #[test]
    fn test_stale_candidates_are_discarded() {
        // d is first queued at cost 9 through the direct edge, then settled
        // at cost 3 through the chain; the stale cost-9 candidate must not
        // resurface.
        let mut graph = Graph::new();
        for label in ["a", "b", "c", "d", "e"] {
            graph.insert_node(label);
        }
        graph.insert_edge(&"a", &"d", 9.0).unwrap();
        graph.insert_edge(&"a", &"b", 1.0).unwrap();
        graph.insert_edge(&"b", &"c", 1.0).unwrap();
        graph.insert_edge(&"c", &"d", 1.0).unwrap();
        graph.insert_edge(&"d", &"e", 1.0).unwrap();

        assert_eq!(shortest_path_cost(&graph, &"a", &"d"), Ok(3.0));
        assert_eq!(
            shortest_path_data(&graph, &"a", &"e"),
            Ok(vec!["a", "b", "c", "d", "e"])
        );
        assert_eq!(shortest_path_cost(&graph, &"a", &"e"), Ok(4.0));
    }

    #[test]
    fn test_zero_weight_edges() {
        let mut graph = Graph::new();
        for label in ["a", "b", "c"] {
            graph.insert_node(label);
        }
        graph.insert_edge(&"a", &"b", 0.0).unwrap();
        graph.insert_edge(&"b", &"c", 0.0).unwrap();

        assert_eq!(shortest_path_cost(&graph, &"a", &"c"), Ok(0.0));
        assert_eq!(
            shortest_path_data(&graph, &"a", &"c"),
            Ok(vec!["a", "b", "c"])
        );
    }
}
