//! Graph builder for constructing vector visibility graphs from samples.

use super::{AdjacencyList, Direction, VisibilityCriterion};
use crate::data::SampleMatrix;
use crate::error::Result;
use rayon::prelude::*;
use tracing::debug;

/// Builder for vector visibility graphs
#[derive(Debug, Clone)]
pub struct VisibilityGraphBuilder {
    /// Edge directionality policy
    direction: Direction,
    /// Whether anchors are processed on the rayon thread pool
    parallel: bool,
}

impl VisibilityGraphBuilder {
    /// Create a new builder with the given direction policy
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            parallel: false,
        }
    }

    /// Builder keeping only forward-in-time edges
    pub fn directed() -> Self {
        Self::new(Direction::Directed)
    }

    /// Builder inserting every accepted edge in both directions
    pub fn undirected() -> Self {
        Self::new(Direction::Undirected)
    }

    /// Process anchors in parallel
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Direction policy of this builder
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether anchors are processed in parallel
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Stack equal-length series and build their visibility graph
    pub fn build_from_series<S: AsRef<[f64]>>(&self, series: &[S]) -> Result<AdjacencyList> {
        let samples = SampleMatrix::from_series(series)?;
        self.build(&samples)
    }

    /// Build the visibility graph of the given samples.
    ///
    /// For every pair `ta < tb`, neighbours in time are always connected and
    /// any other pair is connected only when no intervening sample blocks the
    /// view. Either the whole graph is returned or the first failure.
    pub fn build(&self, samples: &SampleMatrix) -> Result<AdjacencyList> {
        let n = samples.len();
        debug!(
            samples = n,
            dim = samples.dim(),
            direction = %self.direction,
            parallel = self.parallel,
            "building visibility graph"
        );

        // Only anchors with a non-adjacent candidate need their norm
        let criteria: Vec<VisibilityCriterion> = (0..n.saturating_sub(2))
            .map(|ta| VisibilityCriterion::new(samples.sample(ta), ta))
            .collect::<Result<_>>()?;

        let anchors = 0..n.saturating_sub(1);
        let rows: Vec<Vec<usize>> = if self.parallel {
            anchors
                .into_par_iter()
                .map(|ta| Self::visible_row(samples, ta, criteria.get(ta)))
                .collect::<Result<_>>()?
        } else {
            anchors
                .map(|ta| Self::visible_row(samples, ta, criteria.get(ta)))
                .collect::<Result<_>>()?
        };

        let adjacency = self.assemble(n, &rows);
        debug!(edges = adjacency.edge_count(), "visibility graph built");

        Ok(adjacency)
    }

    /// Forward neighbours of anchor `ta`, ascending
    fn visible_row(
        samples: &SampleMatrix,
        ta: usize,
        criterion: Option<&VisibilityCriterion>,
    ) -> Result<Vec<usize>> {
        let n = samples.len();
        let mut row = vec![ta + 1];

        if let Some(criterion) = criterion {
            for tb in (ta + 2)..n {
                if Self::is_visible(samples, criterion, tb)? {
                    row.push(tb);
                }
            }
        }

        Ok(row)
    }

    /// Whether no sample between the anchor and `tb` blocks the view
    fn is_visible(
        samples: &SampleMatrix,
        criterion: &VisibilityCriterion,
        tb: usize,
    ) -> Result<bool> {
        let ta = criterion.anchor_index();
        let candidate_projection = criterion.projection(samples.sample(tb));

        for tc in (ta + 1)..tb {
            // One blocking sample decides the pair
            if !criterion.clears(candidate_projection, tb, samples.sample(tc), tc)? {
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// Merge anchor rows in anchor order, mirroring every edge when undirected
    fn assemble(&self, n: usize, rows: &[Vec<usize>]) -> AdjacencyList {
        let mut adjacency = AdjacencyList::new(n);

        for (ta, row) in rows.iter().enumerate() {
            for &tb in row {
                adjacency.insert(ta, tb);
                if !self.direction.is_directed() {
                    adjacency.insert(tb, ta);
                }
            }
        }

        adjacency
    }
}
