//! Data module for loading and stacking co-indexed time series.
//!
//! This module provides:
//! - Series containers and validation
//! - Stacking of several series into one vector sample per time index
//! - CSV/JSON loaders
//! - ECG beat segmentation utilities

pub mod beats;
mod loader;

pub use beats::{segment_beats, Beat, BeatClass, BeatSet};
pub use loader::SeriesLoader;

use crate::error::{Error, Result};
use ndarray::{Array2, ArrayView1};

/// Named, co-indexed time series
#[derive(Debug, Clone, Default)]
pub struct SeriesSet {
    /// Series names (column headers or generated names)
    pub names: Vec<String>,
    /// Values for each series, indexed by series order
    pub series: Vec<Vec<f64>>,
}

impl SeriesSet {
    /// Create a new, empty series set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a series set from unnamed series, naming them `s0`, `s1`, ...
    pub fn from_series(series: Vec<Vec<f64>>) -> Self {
        let names = (0..series.len()).map(|i| format!("s{}", i)).collect();
        Self { names, series }
    }

    /// Add a named series
    pub fn push(&mut self, name: &str, values: Vec<f64>) {
        self.names.push(name.to_string());
        self.series.push(values);
    }

    /// Number of series (the sample dimension)
    pub fn num_series(&self) -> usize {
        self.series.len()
    }

    /// Length of the first series
    pub fn len(&self) -> usize {
        self.series.first().map(|s| s.len()).unwrap_or(0)
    }

    /// Whether the set holds no samples
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get a series by name
    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|idx| self.series[idx].as_slice())
    }

    /// Stack the series column-wise into vector samples
    pub fn to_samples(&self) -> Result<SampleMatrix> {
        SampleMatrix::from_series(&self.series)
    }
}

/// Vector samples stacked row-wise: row `t` is the sample at time index `t`
#[derive(Debug, Clone, PartialEq)]
pub struct SampleMatrix {
    values: Array2<f64>,
}

impl SampleMatrix {
    /// Stack equal-length series so that each time index contributes one sample
    pub fn from_series<S: AsRef<[f64]>>(series: &[S]) -> Result<Self> {
        if series.is_empty() {
            return Err(Error::InvalidInput("no series supplied".to_string()));
        }

        let n = series[0].as_ref().len();
        for (i, s) in series.iter().enumerate() {
            if s.as_ref().len() != n {
                return Err(Error::InvalidInput(format!(
                    "series {} has length {}, expected {}",
                    i,
                    s.as_ref().len(),
                    n
                )));
            }
        }

        let d = series.len();
        let values = Array2::from_shape_fn((n, d), |(t, k)| series[k].as_ref()[t]);
        Self::new(values)
    }

    /// Build from samples given one per time index
    pub fn from_rows<S: AsRef<[f64]>>(rows: &[S]) -> Result<Self> {
        let n = rows.len();
        let d = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);

        for (t, row) in rows.iter().enumerate() {
            if row.as_ref().len() != d {
                return Err(Error::InvalidInput(format!(
                    "sample {} has dimension {}, expected {}",
                    t,
                    row.as_ref().len(),
                    d
                )));
            }
        }

        let values = Array2::from_shape_fn((n, d), |(t, k)| rows[t].as_ref()[k]);
        Self::new(values)
    }

    /// Wrap an `n x d` array, validating shape and values
    pub fn new(values: Array2<f64>) -> Result<Self> {
        let (n, d) = values.dim();

        if d == 0 {
            return Err(Error::InvalidInput(
                "samples must have at least one dimension".to_string(),
            ));
        }
        if n < 2 {
            return Err(Error::InvalidInput(format!(
                "at least 2 samples are required, got {}",
                n
            )));
        }
        if let Some(((t, k), v)) = values.indexed_iter().find(|(_, v)| !v.is_finite()) {
            return Err(Error::InvalidInput(format!(
                "non-finite value {} at time {} in series {}",
                v, t, k
            )));
        }

        Ok(Self { values })
    }

    /// Number of samples (time indices)
    pub fn len(&self) -> usize {
        self.values.nrows()
    }

    /// Always false: a validated matrix holds at least two samples
    pub fn is_empty(&self) -> bool {
        self.values.nrows() == 0
    }

    /// Dimension of each sample
    pub fn dim(&self) -> usize {
        self.values.ncols()
    }

    /// Sample at time index `t`
    pub fn sample(&self, t: usize) -> ArrayView1<'_, f64> {
        self.values.row(t)
    }

    /// Underlying `n x d` array
    pub fn as_array(&self) -> &Array2<f64> {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_series() {
        let samples =
            SampleMatrix::from_series(&[vec![8.0, 2.0, 13.0], vec![5.0, 1.5, 13.0]]).unwrap();

        assert_eq!(samples.len(), 3);
        assert_eq!(samples.dim(), 2);
        assert_eq!(samples.sample(1).to_vec(), vec![2.0, 1.5]);
    }

    #[test]
    fn test_from_rows_matches_from_series() {
        let by_rows = SampleMatrix::from_rows(&[[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]]).unwrap();
        let by_series =
            SampleMatrix::from_series(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();

        assert_eq!(by_rows, by_series);
    }

    #[test]
    fn test_rejects_empty_and_ragged() {
        let none: Vec<Vec<f64>> = Vec::new();
        assert!(matches!(
            SampleMatrix::from_series(&none),
            Err(Error::InvalidInput(_))
        ));

        let ragged = vec![vec![1.0, 2.0, 3.0], vec![1.0, 2.0]];
        assert!(matches!(
            SampleMatrix::from_series(&ragged),
            Err(Error::InvalidInput(_))
        ));

        let ragged_rows = vec![vec![1.0, 2.0], vec![1.0]];
        assert!(matches!(
            SampleMatrix::from_rows(&ragged_rows),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_rejects_short_and_non_finite() {
        assert!(SampleMatrix::from_series(&[vec![1.0]]).is_err());
        assert!(SampleMatrix::from_series(&[Vec::<f64>::new()]).is_err());
        assert!(SampleMatrix::from_series(&[vec![1.0, f64::NAN, 2.0]]).is_err());
        assert!(SampleMatrix::from_rows(&[Vec::<f64>::new(), Vec::new()]).is_err());
    }

    #[test]
    fn test_series_set() {
        let mut set = SeriesSet::new();
        set.push("lead_ii", vec![0.1, 0.4, 0.2]);
        set.push("lead_v1", vec![0.3, 0.1, 0.0]);

        assert_eq!(set.num_series(), 2);
        assert_eq!(set.len(), 3);
        assert_eq!(set.get("lead_v1"), Some(&[0.3, 0.1, 0.0][..]));
        assert!(set.get("lead_i").is_none());

        let samples = set.to_samples().unwrap();
        assert_eq!(samples.dim(), 2);

        let unnamed = SeriesSet::from_series(vec![vec![1.0, 2.0]]);
        assert_eq!(unnamed.names, vec!["s0".to_string()]);
    }
}
