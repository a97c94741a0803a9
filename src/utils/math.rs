//! Mathematical utility functions.

use ndarray::ArrayView1;

/// Dot product of two samples, accumulated strictly left to right.
///
/// `ArrayView1::dot` may reorder the sum for long vectors. Visibility ties
/// compare projections exactly, so the summation order must not depend on
/// the sample dimension.
pub fn dot(a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
    a.iter().zip(b.iter()).fold(0.0, |acc, (x, y)| acc + x * y)
}

/// Euclidean norm of a sample
pub fn norm(a: ArrayView1<f64>) -> f64 {
    dot(a, a).sqrt()
}

/// Calculate mean of a slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
