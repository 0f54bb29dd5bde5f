//! Raw-difference "distance" for reproducing legacy results.

use crate::distance::DistanceMetric;

/// Signed sum of coordinate differences: `sum(a_i - b_i)`.
///
/// This is not a metric. It can be negative, is antisymmetric rather than
/// symmetric, and does not satisfy the triangle inequality. Never the
/// default; select it explicitly through [`MetricKind::RawDifference`].
///
/// [`MetricKind::RawDifference`]: crate::distance::MetricKind::RawDifference
#[derive(Debug, Clone, Copy, Default)]
pub struct RawDifference;

impl DistanceMetric for RawDifference {
    #[inline]
    fn distance_unchecked(&self, a: &[f32], b: &[f32]) -> f32 {
        raw_difference(a, b)
    }
}

/// Sum of `a_i - b_i`.
#[inline]
pub fn raw_difference(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b.iter()).map(|(x, y)| x - y).sum()
}
