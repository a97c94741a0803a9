//! # Vector Visibility Graphs
//!
//! Turn one or more co-indexed time series into a graph. Every time index is
//! a node; two indices are connected when their samples "see" each other,
//! i.e. no sample in between rises above the line of sight drawn in the
//! projection onto the earlier sample's direction.
//!
//! ## Features
//!
//! - **Data Module**: series stacking, CSV/JSON loading, ECG beat segmentation
//! - **Graph Module**: visibility criterion, graph builder, metrics, GML export
//! - **Dataset Module**: labeled edge/property tables for many small graphs
//! - **Utils Module**: configuration, logging, vector math
//!
//! ## Quick Start
//!
//! ```rust
//! use vector_visibility_graph::graph::{Direction, VisibilityGraphBuilder};
//!
//! fn main() -> vector_visibility_graph::Result<()> {
//!     let lead_ii = vec![8.0, 2.0, 13.0, 11.0, 7.0];
//!     let lead_v1 = vec![5.0, 1.5, 13.0, 9.5, 6.0];
//!
//!     let graph = VisibilityGraphBuilder::new(Direction::Directed)
//!         .build_from_series(&[lead_ii, lead_v1])?;
//!
//!     assert_eq!(graph.neighbors(0), &[1, 2]);
//!     Ok(())
//! }
//! ```

pub mod data;
pub mod dataset;
pub mod error;
pub mod graph;
pub mod utils;

// Re-export commonly used types
pub use data::{SampleMatrix, SeriesLoader, SeriesSet};
pub use dataset::GraphDataset;
pub use error::{Error, Result};
pub use graph::{
    AdjacencyList, Direction, Edge, GraphMetrics, VisibilityCriterion, VisibilityGraphBuilder,
};
pub use utils::{setup_logging, Config};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
