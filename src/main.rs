//! Vector Visibility Graph CLI
//!
//! Command-line interface for building visibility graphs from series files.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use vector_visibility_graph::{
    graph::gml,
    setup_logging, Config, Direction, GraphMetrics, SeriesLoader, VisibilityGraphBuilder,
};

#[derive(Parser)]
#[command(name = "vvg")]
#[command(about = "Vector visibility graphs from multivariate time series")]
#[command(version)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the visibility graph of a CSV or JSON series file
    Build {
        /// Input file (.csv with a header row, or .json)
        #[arg(short, long)]
        input: PathBuf,

        /// CSV columns to stack (comma-separated)
        #[arg(long, value_delimiter = ',')]
        columns: Option<Vec<String>>,

        /// Keep only forward-in-time edges
        #[arg(long)]
        directed: bool,

        /// Process anchors in parallel
        #[arg(long)]
        parallel: bool,

        /// Write the graph as GML
        #[arg(long)]
        gml: Option<PathBuf>,

        /// Write the adjacency list as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Run the built-in examples
    Demo,

    /// Write the default configuration file
    InitConfig {
        /// Output path
        #[arg(short, long, default_value = "vvg.toml")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config: {:?}", path))?,
        None => Config::default(),
    };

    setup_logging(&config.logging.level);

    match cli.command {
        Commands::Build {
            input,
            columns,
            directed,
            parallel,
            gml: gml_path,
            json,
        } => {
            let columns = columns.or_else(|| config.input.columns.clone());
            let direction = if directed {
                Direction::Directed
            } else {
                config.graph.direction
            };

            info!("Loading series from {:?}", input);
            let series = SeriesLoader::load(&input, columns.as_deref())
                .with_context(|| format!("Failed to load series: {:?}", input))?;
            info!(
                "Loaded {} series of length {}: {}",
                series.num_series(),
                series.len(),
                series.names.join(", ")
            );

            let samples = series.to_samples()?;
            let builder = VisibilityGraphBuilder::new(direction)
                .with_parallel(parallel || config.graph.parallel);
            let graph = builder.build(&samples)?;

            let metrics = GraphMetrics::new(&graph);
            info!("Direction: {}", direction);
            info!("Nodes: {}, stored edges: {}", graph.node_count(), graph.edge_count());
            info!("Average degree: {:.3}", metrics.average_degree());
            info!("Average clustering: {:.3}", metrics.average_clustering());
            for (node, degree) in metrics.detect_hubs(3) {
                info!("Hub t={} degree={}", node, degree);
            }

            if let Some(path) = gml_path {
                gml::write_gml(&path, &graph, direction)
                    .with_context(|| format!("Failed to write GML: {:?}", path))?;
                info!("GML saved to {:?}", path);
            }

            if let Some(path) = json {
                let file = std::fs::File::create(&path)
                    .with_context(|| format!("Failed to create file: {:?}", path))?;
                serde_json::to_writer_pretty(file, &graph)?;
                info!("Adjacency list saved to {:?}", path);
            }
        }

        Commands::Demo => run_demo()?,

        Commands::InitConfig { output } => {
            Config::create_default(&output)
                .with_context(|| format!("Failed to write config: {:?}", output))?;
            info!("Default configuration written to {:?}", output);
        }
    }

    Ok(())
}

fn run_demo() -> Result<()> {
    info!("=== Vector Visibility Graph Demo ===");

    info!("1. Spike duplicated in two series, undirected");
    let spike = vec![1.0, 1.0, 1.0, 1.0, 10.0, 1.0, 1.0, 1.0, 1.0, 1.0];
    let graph = VisibilityGraphBuilder::undirected().build_from_series(&[&spike, &spike])?;
    for (node, neighbors) in graph.iter() {
        info!("   {}: {:?}", node, neighbors);
    }
    let metrics = GraphMetrics::new(&graph);
    info!("   Degrees: {:?}", metrics.degrees());

    info!("2. Two series of length 5, directed");
    let graph = VisibilityGraphBuilder::directed().build_from_series(&[
        vec![8.0, 2.0, 13.0, 11.0, 7.0],
        vec![5.0, 1.5, 13.0, 9.5, 6.0],
    ])?;
    for (node, neighbors) in graph.iter() {
        info!("   {}: {:?}", node, neighbors);
    }

    info!("3. Minimum size graph");
    let graph = VisibilityGraphBuilder::undirected().build_from_series(&[vec![1.0, 2.0]])?;
    info!("   {:?}", graph.clone().into_map());

    info!("4. Zero-vector anchor");
    match VisibilityGraphBuilder::undirected()
        .build_from_series(&[vec![0.0, 1.0, 2.0], vec![0.0, 3.0, 1.0]])
    {
        Ok(_) => info!("   unexpectedly built a graph"),
        Err(e) => info!("   rejected: {}", e),
    }

    info!("=== Demo Complete ===");
    Ok(())
}
