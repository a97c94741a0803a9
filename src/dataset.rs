//! Labeled graph datasets.
//!
//! Many small visibility graphs (one per heartbeat, window, ...) are flattened
//! into two tables: one row per edge and one row per graph.

use crate::graph::AdjacencyList;
use serde::{Deserialize, Serialize};

/// One edge of one graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRow {
    /// Graph identifier
    pub graph_id: usize,
    /// Source node
    pub src: usize,
    /// Destination node
    pub dst: usize,
}

/// Per-graph properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRow {
    /// Graph identifier
    pub graph_id: usize,
    /// Class label
    pub label: usize,
    /// Number of nodes in the graph
    pub num_nodes: usize,
}

/// Edge and property tables for a collection of labeled graphs
#[derive(Debug, Clone, Default)]
pub struct GraphDataset {
    edges: Vec<EdgeRow>,
    properties: Vec<PropertyRow>,
}

impl GraphDataset {
    /// Create an empty dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a graph with its label, returning the assigned graph id
    pub fn push(&mut self, label: usize, graph: &AdjacencyList) -> usize {
        let graph_id = self.properties.len();

        self.edges.extend(graph.edges().map(|edge| EdgeRow {
            graph_id,
            src: edge.from,
            dst: edge.to,
        }));
        self.properties.push(PropertyRow {
            graph_id,
            label,
            num_nodes: graph.node_count(),
        });

        graph_id
    }

    /// Edge table, grouped by graph id
    pub fn edges(&self) -> &[EdgeRow] {
        &self.edges
    }

    /// Property table, one row per graph
    pub fn properties(&self) -> &[PropertyRow] {
        &self.properties
    }

    /// Edges of one graph
    pub fn graph_edges(&self, graph_id: usize) -> impl Iterator<Item = &EdgeRow> + '_ {
        self.edges.iter().filter(move |row| row.graph_id == graph_id)
    }

    /// Number of graphs
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether the dataset holds no graph
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Number of graphs per label, indexed by label
    pub fn label_counts(&self) -> Vec<usize> {
        let max_label = self.properties.iter().map(|p| p.label).max();
        let mut counts = vec![0usize; max_label.map(|l| l + 1).unwrap_or(0)];
        for row in &self.properties {
            counts[row.label] += 1;
        }
        counts
    }
}
