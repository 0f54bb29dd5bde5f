//! Distance metrics for comparing vectors against codebook vectors.

mod euclidean;
mod raw;

pub use euclidean::{euclidean, euclidean_squared, Euclidean};
pub use raw::{raw_difference, RawDifference};

use crate::error::{LvqError, Result};
use serde::{Deserialize, Serialize};

/// Trait for dissimilarity measures between two equal-length vectors.
///
/// Lower is closer.
pub trait DistanceMetric: Send + Sync {
    /// Computes the distance without checking dimensions.
    ///
    /// Callers must guarantee `a.len() == b.len()`. Mismatched lengths are a
    /// contract violation: debug builds panic, release results are unspecified.
    fn distance_unchecked(&self, a: &[f32], b: &[f32]) -> f32;

    /// Computes the distance between `a` and `b`.
    ///
    /// Fails with [`LvqError::DimensionMismatch`] if the lengths differ.
    fn distance(&self, a: &[f32], b: &[f32]) -> Result<f32> {
        check_dimensions(a, b)?;
        Ok(self.distance_unchecked(a, b))
    }

    /// A key that orders candidates the same way `distance_unchecked` does.
    ///
    /// Nearest-neighbour search only needs the ordering, so metrics may
    /// override this with something cheaper.
    #[inline]
    fn ranking_key(&self, a: &[f32], b: &[f32]) -> f32 {
        self.distance_unchecked(a, b)
    }
}

/// Enum for the available metrics, used in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetricKind {
    /// True Euclidean distance.
    #[default]
    Euclidean,
    /// Signed sum of raw coordinate differences. Not a metric; kept only for
    /// reproducing legacy results.
    RawDifference,
}

impl MetricKind {
    /// Computes the distance using this metric.
    pub fn compute(&self, a: &[f32], b: &[f32]) -> Result<f32> {
        match self {
            MetricKind::Euclidean => Euclidean.distance(a, b),
            MetricKind::RawDifference => RawDifference.distance(a, b),
        }
    }

    /// Short name of the metric.
    pub fn name(&self) -> &'static str {
        match self {
            MetricKind::Euclidean => "euclidean",
            MetricKind::RawDifference => "raw-difference",
        }
    }
}

impl DistanceMetric for MetricKind {
    #[inline]
    fn distance_unchecked(&self, a: &[f32], b: &[f32]) -> f32 {
        match self {
            MetricKind::Euclidean => Euclidean.distance_unchecked(a, b),
            MetricKind::RawDifference => RawDifference.distance_unchecked(a, b),
        }
    }

    #[inline]
    fn ranking_key(&self, a: &[f32], b: &[f32]) -> f32 {
        match self {
            MetricKind::Euclidean => Euclidean.ranking_key(a, b),
            MetricKind::RawDifference => RawDifference.ranking_key(a, b),
        }
    }
}

impl std::fmt::Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for MetricKind {
    type Err = LvqError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "euclidean" | "l2" => Ok(MetricKind::Euclidean),
            "raw-difference" | "raw" => Ok(MetricKind::RawDifference),
            other => Err(LvqError::Config(format!("unknown metric '{}'", other))),
        }
    }
}

/// Fails with [`LvqError::DimensionMismatch`] unless both slices have the same length.
#[inline]
pub fn check_dimensions(a: &[f32], b: &[f32]) -> Result<()> {
    if a.len() != b.len() {
        return Err(LvqError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_kinds() {
        let a = [1.0, 2.0, 3.0];
        let b = [0.0, 2.0, 5.0];

        let euclid = MetricKind::Euclidean.compute(&a, &b).unwrap();
        let raw = MetricKind::RawDifference.compute(&a, &b).unwrap();

        assert!((euclid - 5.0f32.sqrt()).abs() < 1e-6);
        // (1 - 0) + (2 - 2) + (3 - 5) = -1
        assert!((raw + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = MetricKind::Euclidean.compute(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert_eq!(err, LvqError::DimensionMismatch { expected: 2, actual: 1 });
    }

    #[test]
    fn test_default_is_euclidean() {
        assert_eq!(MetricKind::default(), MetricKind::Euclidean);
    }

    #[test]
    fn test_parse() {
        assert_eq!("euclidean".parse::<MetricKind>().unwrap(), MetricKind::Euclidean);
        assert_eq!("Raw-Difference".parse::<MetricKind>().unwrap(), MetricKind::RawDifference);
        assert!("mahalanobis".parse::<MetricKind>().is_err());
    }
}
