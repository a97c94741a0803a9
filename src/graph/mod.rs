//! Visibility graph construction and analysis module.
//!
//! This module provides:
//! - The vector visibility criterion
//! - The graph builder (sequential and parallel over anchors)
//! - The adjacency list produced by the builder
//! - Degree/clustering metrics and GML export

mod builder;
pub mod gml;
mod metrics;
mod visibility;

pub use builder::VisibilityGraphBuilder;
pub use metrics::GraphMetrics;
pub use visibility::VisibilityCriterion;

use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Edge directionality policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Only forward-in-time edges `ta -> tb` with `ta < tb`
    Directed,
    /// Every accepted pair is also inserted reversed
    Undirected,
}

impl Direction {
    /// Map a "directed" flag to a direction
    pub fn from_flag(directed: bool) -> Self {
        if directed {
            Direction::Directed
        } else {
            Direction::Undirected
        }
    }

    /// Whether only forward edges are kept
    pub fn is_directed(&self) -> bool {
        matches!(self, Direction::Directed)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Directed => write!(f, "directed"),
            Direction::Undirected => write!(f, "undirected"),
        }
    }
}

/// A directed edge between two time indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    /// Source time index
    pub from: usize,
    /// Target time index
    pub to: usize,
}

impl Edge {
    /// Create a new edge
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// Whether the edge points forward in time
    pub fn is_forward(&self) -> bool {
        self.from < self.to
    }
}

/// Adjacency list of a visibility graph.
///
/// Keys are time indices that have at least one outgoing edge; each value
/// keeps neighbors in discovery order. A missing key means "no neighbors".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyList {
    /// Number of time indices the graph was built from
    node_count: usize,
    /// Outgoing neighbors per node, in insertion order
    neighbors: BTreeMap<usize, Vec<usize>>,
}

impl AdjacencyList {
    /// Create an adjacency list with no edges over `node_count` time indices
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            neighbors: BTreeMap::new(),
        }
    }

    /// Append `to` to the neighbors of `from`, creating the key if needed.
    ///
    /// The node count grows to cover both endpoints.
    pub fn insert(&mut self, from: usize, to: usize) {
        self.node_count = self.node_count.max(from.max(to) + 1);
        self.neighbors.entry(from).or_default().push(to);
    }

    /// Number of time indices (nodes), including isolated ones
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of stored directed edges
    pub fn edge_count(&self) -> usize {
        self.neighbors.values().map(|n| n.len()).sum()
    }

    /// Number of keys (nodes with at least one outgoing edge)
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Whether no edge was inserted
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Whether `node` has at least one outgoing edge
    pub fn contains_key(&self, node: usize) -> bool {
        self.neighbors.contains_key(&node)
    }

    /// Outgoing neighbors of `node` in discovery order
    pub fn neighbors(&self, node: usize) -> &[usize] {
        self.neighbors
            .get(&node)
            .map(|n| n.as_slice())
            .unwrap_or(&[])
    }

    /// Whether the edge `from -> to` exists
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.neighbors(from).contains(&to)
    }

    /// Nodes with outgoing edges, ascending
    pub fn keys(&self) -> impl Iterator<Item = usize> + '_ {
        self.neighbors.keys().copied()
    }

    /// Iterate over `(node, neighbors)` in ascending node order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> + '_ {
        self.neighbors.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    /// All edges, by source node then neighbor order
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.iter()
            .flat_map(|(from, tos)| tos.iter().map(move |&to| Edge::new(from, to)))
    }

    /// Out-degree of `node`
    pub fn out_degree(&self, node: usize) -> usize {
        self.neighbors(node).len()
    }

    /// Convert into a petgraph directed graph, one node per time index
    pub fn to_digraph(&self) -> DiGraph<usize, ()> {
        let mut graph = DiGraph::with_capacity(self.node_count, self.edge_count());
        for t in 0..self.node_count {
            graph.add_node(t);
        }
        for edge in self.edges() {
            graph.add_edge(NodeIndex::new(edge.from), NodeIndex::new(edge.to), ());
        }
        graph
    }

    /// Consume into the underlying mapping
    pub fn into_map(self) -> BTreeMap<usize, Vec<usize>> {
        self.neighbors
    }
}
