//! Edge representation

use serde::{Deserialize, Serialize};

/// A directed, weighted connection owned by its source node.
///
/// The edge stores the label of the node it leads to rather than a reference;
/// the owning graph resolves successors through its node index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<L> {
    /// Label of the node this edge leads to
    pub successor: L,

    /// Traversal cost, non-negative and finite
    pub weight: f64,
}

impl<L> Edge<L> {
    /// Create a new directed edge.
    pub fn new(successor: L, weight: f64) -> Self {
        Edge { successor, weight }
    }
}
