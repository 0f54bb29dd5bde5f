//! Configuration for the LVQ engine.

use crate::distance::MetricKind;
use crate::error::{LvqError, Result};
use crate::{DEFAULT_CLASSES, DEFAULT_CODEBOOK_SIZE, DEFAULT_DIMENSION, DEFAULT_MAX_ITER};
use serde::{Deserialize, Serialize};

/// Training configuration.
///
/// The learning rate must always be supplied, so there is no `Default` impl.
/// Use [`LvqConfig::new`] and override fields with struct update syntax.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LvqConfig {
    /// Number of samples in the dataset (n).
    pub samples: usize,

    /// Dimensionality of every vector (m).
    /// Default: 4.
    pub dimension: usize,

    /// Number of classes (c). Labels lie in `0..classes`.
    /// Default: 4.
    pub classes: usize,

    /// Number of codebook vectors (v). Must be at least `classes`;
    /// slot `i` represents class `i`.
    /// Default: 4.
    pub codebook_size: usize,

    /// Learning rate (alpha). Must be finite and > 0.
    pub learning_rate: f32,

    /// Convergence tolerance on the summed update magnitude of an epoch.
    /// Default: None (convergence checking disabled).
    pub epsilon: Option<f32>,

    /// Maximum number of epochs.
    /// Default: 100.
    pub max_iter: usize,

    /// Random seed for reproducibility.
    /// Default: None (random).
    pub seed: Option<u64>,

    /// Distance metric used for classification.
    /// Default: Euclidean.
    pub metric: MetricKind,

    /// Fan distance computations and initialization out over rayon.
    /// Results are identical either way.
    /// Default: false.
    pub parallel: bool,
}

impl LvqConfig {
    /// Creates a configuration with the given sample count and learning rate,
    /// and defaults for everything else.
    pub fn new(samples: usize, learning_rate: f32) -> Self {
        Self {
            samples,
            dimension: DEFAULT_DIMENSION,
            classes: DEFAULT_CLASSES,
            codebook_size: DEFAULT_CODEBOOK_SIZE,
            learning_rate,
            epsilon: None,
            max_iter: DEFAULT_MAX_ITER,
            seed: None,
            metric: MetricKind::Euclidean,
            parallel: false,
        }
    }

    /// Checks every constraint that does not need the dataset.
    pub fn validate(&self) -> Result<()> {
        if self.codebook_size == 0 {
            return Err(LvqError::InvalidDimension(
                "codebook size must be > 0".to_string(),
            ));
        }
        if self.dimension == 0 {
            return Err(LvqError::InvalidDimension(
                "vector dimension must be > 0".to_string(),
            ));
        }
        if self.classes == 0 {
            return Err(LvqError::InvalidDimension(
                "class count must be > 0".to_string(),
            ));
        }
        if self.codebook_size < self.classes {
            return Err(LvqError::Config(format!(
                "codebook size {} is smaller than class count {}",
                self.codebook_size, self.classes
            )));
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(LvqError::InvalidLearningRate(self.learning_rate));
        }
        if let Some(eps) = self.epsilon {
            if eps.is_nan() || eps < 0.0 {
                return Err(LvqError::Config(format!(
                    "epsilon must be >= 0, got {}",
                    eps
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let config = LvqConfig::new(1000, 0.01);
        assert_eq!(config.samples, 1000);
        assert_eq!(config.dimension, 4);
        assert_eq!(config.classes, 4);
        assert_eq!(config.codebook_size, 4);
        assert_eq!(config.max_iter, 100);
        assert_eq!(config.epsilon, None);
        assert_eq!(config.metric, MetricKind::Euclidean);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_learning_rate() {
        for alpha in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let config = LvqConfig::new(10, alpha);
            assert!(matches!(
                config.validate(),
                Err(LvqError::InvalidLearningRate(_))
            ));
        }
    }

    #[test]
    fn test_zero_dimensions() {
        let config = LvqConfig { codebook_size: 0, ..LvqConfig::new(10, 0.1) };
        assert!(matches!(config.validate(), Err(LvqError::InvalidDimension(_))));

        let config = LvqConfig { dimension: 0, ..LvqConfig::new(10, 0.1) };
        assert!(matches!(config.validate(), Err(LvqError::InvalidDimension(_))));
    }

    #[test]
    fn test_codebook_smaller_than_classes() {
        let config = LvqConfig { codebook_size: 2, classes: 3, ..LvqConfig::new(10, 0.1) };
        assert!(matches!(config.validate(), Err(LvqError::Config(_))));

        // More codebook vectors than classes is allowed.
        let config = LvqConfig { codebook_size: 5, classes: 3, ..LvqConfig::new(10, 0.1) };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_negative_epsilon() {
        let config = LvqConfig { epsilon: Some(-0.5), ..LvqConfig::new(10, 0.1) };
        assert!(matches!(config.validate(), Err(LvqError::Config(_))));
    }
}
