//! Vector visibility criterion.
//!
//! Samples are projected onto the direction of the anchor sample `Xa`. Looking
//! from `ta` towards a later sample `tb`, the line of sight at an intervening
//! index `tc` interpolates linearly between `|Xa|` (at `ta`) and the projection
//! of `Xb` (at `tb`). The intervening sample blocks the view unless its own
//! projection lies strictly below that line.

use crate::error::{Error, Result};
use crate::utils::math::{dot, norm};
use ndarray::ArrayView1;

/// Visibility test anchored at one sample.
///
/// The anchor norm is computed once and reused for every candidate and
/// intervening sample that shares the anchor.
#[derive(Debug, Clone)]
pub struct VisibilityCriterion<'a> {
    anchor: ArrayView1<'a, f64>,
    index: usize,
    norm: f64,
}

impl<'a> VisibilityCriterion<'a> {
    /// Create a criterion for the anchor sample at time index `index`
    pub fn new(anchor: ArrayView1<'a, f64>, index: usize) -> Result<Self> {
        let anchor_norm = norm(anchor);
        Self::with_norm(anchor, index, anchor_norm)
    }

    /// Create a criterion with a precomputed anchor norm
    pub fn with_norm(anchor: ArrayView1<'a, f64>, index: usize, norm: f64) -> Result<Self> {
        if !(norm.is_finite() && norm > 0.0) {
            return Err(Error::DegenerateAnchor { index, norm });
        }

        Ok(Self {
            anchor,
            index,
            norm,
        })
    }

    /// Time index of the anchor
    pub fn anchor_index(&self) -> usize {
        self.index
    }

    /// Euclidean norm of the anchor sample
    pub fn norm(&self) -> f64 {
        self.norm
    }

    /// Projection of `sample` onto the anchor direction
    pub fn projection(&self, sample: ArrayView1<f64>) -> f64 {
        dot(self.anchor, sample) / self.norm
    }

    /// Height of the line of sight at `intervening`, looking at `candidate`
    /// whose projection is `candidate_projection`
    pub fn sight_line(
        &self,
        candidate_projection: f64,
        candidate: usize,
        intervening: usize,
    ) -> Result<f64> {
        if candidate == self.index {
            return Err(Error::NumericIndeterminate {
                anchor: self.index,
                candidate,
            });
        }
        debug_assert!(self.index < intervening && intervening < candidate);

        let time_frac =
            (candidate as f64 - intervening as f64) / (candidate as f64 - self.index as f64);
        Ok(candidate_projection + (self.norm - candidate_projection) * time_frac)
    }

    /// Whether the intervening sample leaves the view towards `candidate` open,
    /// given the candidate projection already computed
    pub fn clears(
        &self,
        candidate_projection: f64,
        candidate: usize,
        intervening_sample: ArrayView1<f64>,
        intervening: usize,
    ) -> Result<bool> {
        let line = self.sight_line(candidate_projection, candidate, intervening)?;
        Ok(self.projection(intervening_sample) < line)
    }

    /// Whether the sample at `intervening` does not block the view from the
    /// anchor to the sample at `candidate`. Ties block.
    pub fn is_unblocked(
        &self,
        candidate_sample: ArrayView1<f64>,
        candidate: usize,
        intervening_sample: ArrayView1<f64>,
        intervening: usize,
    ) -> Result<bool> {
        let candidate_projection = self.projection(candidate_sample);
        self.clears(
            candidate_projection,
            candidate,
            intervening_sample,
            intervening,
        )
    }
}
