//! Euclidean distance.

use crate::distance::DistanceMetric;

/// Euclidean distance: `sqrt(sum((a_i - b_i)^2))`.
///
/// Symmetric, and zero exactly when the vectors are equal coordinate-wise.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclidean;

impl DistanceMetric for Euclidean {
    #[inline]
    fn distance_unchecked(&self, a: &[f32], b: &[f32]) -> f32 {
        euclidean(a, b)
    }

    /// Squared distance; same ordering, no sqrt.
    #[inline]
    fn ranking_key(&self, a: &[f32], b: &[f32]) -> f32 {
        euclidean_squared(a, b)
    }
}

/// Euclidean distance between two slices.
#[inline]
pub fn euclidean(a: &[f32], b: &[f32]) -> f32 {
    euclidean_squared(a, b).sqrt()
}

/// Squared Euclidean distance between two f32 slices.
/// Optimized for autovectorization.
#[inline]
pub fn euclidean_squared(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());

    let len = a.len().min(b.len());
    let chunks = len / 8;
    let mut sum = 0.0f32;

    for i in 0..chunks {
        let base = i * 8;
        let d0 = a[base] - b[base];
        let d1 = a[base + 1] - b[base + 1];
        let d2 = a[base + 2] - b[base + 2];
        let d3 = a[base + 3] - b[base + 3];
        let d4 = a[base + 4] - b[base + 4];
        let d5 = a[base + 5] - b[base + 5];
        let d6 = a[base + 6] - b[base + 6];
        let d7 = a[base + 7] - b[base + 7];

        sum += d0 * d0
            + d1 * d1
            + d2 * d2
            + d3 * d3
            + d4 * d4
            + d5 * d5
            + d6 * d6
            + d7 * d7;
    }

    for i in chunks * 8..len {
        let d = a[i] - b[i];
        sum += d * d;
    }

    sum
}
