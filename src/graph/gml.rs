//! GML export of visibility graphs.
//!
//! Directed graphs list every stored edge. Undirected graphs store each pair
//! twice, so only the forward copy is written and the header says
//! `directed 0`.

use super::{AdjacencyList, Direction};
use crate::error::Result;
use std::fs;
use std::path::Path;

/// Render an adjacency list as GML text
pub fn to_gml(graph: &AdjacencyList, direction: Direction) -> String {
    let mut out = String::from("graph [\n");
    out.push_str(&format!("  directed {}\n", u8::from(direction.is_directed())));

    for t in 0..graph.node_count() {
        out.push_str(&format!("  node [\n    id {t}\n    label \"{t}\"\n  ]\n"));
    }

    for edge in graph.edges() {
        if !direction.is_directed() && !edge.is_forward() {
            continue;
        }
        out.push_str(&format!(
            "  edge [\n    source {}\n    target {}\n  ]\n",
            edge.from, edge.to
        ));
    }

    out.push_str("]\n");
    out
}

/// Write an adjacency list to a GML file
pub fn write_gml<P: AsRef<Path>>(
    path: P,
    graph: &AdjacencyList,
    direction: Direction,
) -> Result<()> {
    fs::write(path, to_gml(graph, direction))?;
    Ok(())
}
