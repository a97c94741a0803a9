//! Graph metrics for visibility graphs.
//!
//! Metrics are computed on the undirected skeleton of the adjacency list, so
//! a directed graph and its undirected counterpart report the same degrees.

use super::AdjacencyList;
use crate::utils::math::mean;
use std::collections::BTreeSet;

/// Graph metrics calculator
#[derive(Debug)]
pub struct GraphMetrics<'a> {
    graph: &'a AdjacencyList,
    /// Incident nodes per time index, ignoring direction
    incident: Vec<BTreeSet<usize>>,
}

impl<'a> GraphMetrics<'a> {
    /// Create a new metrics calculator for a graph
    pub fn new(graph: &'a AdjacencyList) -> Self {
        let mut incident = vec![BTreeSet::new(); graph.node_count()];
        for edge in graph.edges() {
            if edge.from != edge.to {
                incident[edge.from].insert(edge.to);
                incident[edge.to].insert(edge.from);
            }
        }

        Self { graph, incident }
    }

    /// Number of distinct nodes connected to `node`
    pub fn degree(&self, node: usize) -> usize {
        self.incident.get(node).map(|s| s.len()).unwrap_or(0)
    }

    /// Degree of every node, indexed by time
    pub fn degrees(&self) -> Vec<usize> {
        self.incident.iter().map(|s| s.len()).collect()
    }

    /// Histogram of degrees: entry `k` counts the nodes with degree `k`
    pub fn degree_distribution(&self) -> Vec<usize> {
        let degrees = self.degrees();
        let max_degree = degrees.iter().copied().max().unwrap_or(0);

        let mut distribution = vec![0usize; max_degree + 1];
        for d in degrees {
            distribution[d] += 1;
        }
        distribution
    }

    /// Mean degree
    pub fn average_degree(&self) -> f64 {
        let degrees: Vec<f64> = self.degrees().into_iter().map(|d| d as f64).collect();
        mean(&degrees)
    }

    /// Degree centrality = degree / (n - 1)
    pub fn degree_centrality(&self) -> Vec<f64> {
        let n = self.graph.node_count();
        if n <= 1 {
            return vec![0.0; n];
        }

        let max_degree = (n - 1) as f64;
        self.degrees()
            .into_iter()
            .map(|d| d as f64 / max_degree)
            .collect()
    }

    /// Fraction of possible undirected pairs that are connected
    pub fn density(&self) -> f64 {
        let n = self.graph.node_count() as f64;
        if n <= 1.0 {
            return 0.0;
        }

        let pairs: usize = self.degrees().iter().sum::<usize>() / 2;
        pairs as f64 / (n * (n - 1.0) / 2.0)
    }

    /// Nodes with the highest degree, ties broken by earlier time index
    pub fn detect_hubs(&self, top_k: usize) -> Vec<(usize, usize)> {
        let mut ranked: Vec<(usize, usize)> = self.degrees().into_iter().enumerate().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked.truncate(top_k);
        ranked
    }

    /// Local clustering coefficient of a node
    pub fn local_clustering(&self, node: usize) -> f64 {
        let neighbors: Vec<usize> = match self.incident.get(node) {
            Some(set) => set.iter().copied().collect(),
            None => return 0.0,
        };
        let k = neighbors.len();

        if k < 2 {
            return 0.0;
        }

        let mut edges_between_neighbors = 0;

        for i in 0..k {
            for j in (i + 1)..k {
                if self.incident[neighbors[i]].contains(&neighbors[j]) {
                    edges_between_neighbors += 1;
                }
            }
        }

        let max_edges = k * (k - 1) / 2;
        edges_between_neighbors as f64 / max_edges as f64
    }

    /// Calculate average clustering coefficient
    pub fn average_clustering(&self) -> f64 {
        let n = self.graph.node_count();
        if n == 0 {
            return 0.0;
        }

        let total: f64 = (0..n).map(|t| self.local_clustering(t)).sum();
        total / n as f64
    }

    /// Number of weakly connected components
    pub fn connected_components(&self) -> usize {
        petgraph::algo::connected_components(&self.graph.to_digraph())
    }
}
