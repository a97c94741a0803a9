//! Basic vector visibility graph example.
//!
//! This example builds the graph of two co-indexed series, prints its
//! adjacency list and metrics, and renders it as GML.

use vector_visibility_graph::graph::{gml, Direction, GraphMetrics, VisibilityGraphBuilder};
use vector_visibility_graph::SeriesSet;

fn main() -> vector_visibility_graph::Result<()> {
    println!("=== Basic Vector Visibility Graph Example ===\n");

    let mut series = SeriesSet::new();
    series.push("price", vec![5.5, 4.3, 1.0, 7.8, 2.7, 1.2, 3.6, 2.2, 7.1]);
    series.push("volume", vec![1.0, 2.0, 0.5, 3.0, 2.5, 0.7, 1.1, 4.0, 2.0]);

    let samples = series.to_samples()?;
    println!(
        "Stacked {} series into {} samples of dimension {}",
        series.num_series(),
        samples.len(),
        samples.dim()
    );

    for direction in [Direction::Directed, Direction::Undirected] {
        let graph = VisibilityGraphBuilder::new(direction).build(&samples)?;

        println!("\n--- {} graph ---", direction);
        for (node, neighbors) in graph.iter() {
            println!("  {}: {:?}", node, neighbors);
        }

        let metrics = GraphMetrics::new(&graph);
        println!("Stored edges: {}", graph.edge_count());
        println!("Density: {:.4}", metrics.density());
        println!("Average degree: {:.4}", metrics.average_degree());
        println!("Average clustering: {:.4}", metrics.average_clustering());
        println!("Degree distribution: {:?}", metrics.degree_distribution());
    }

    let graph = VisibilityGraphBuilder::directed().build(&samples)?;
    println!("\n--- GML ---");
    print!("{}", gml::to_gml(&graph, Direction::Directed));

    println!("\n=== Example Complete ===");
    Ok(())
}
