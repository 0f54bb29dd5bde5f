//! Nearest-prototype classification against a codebook.
//!
//! The winner is the code vector with the smallest distance to the input.
//! Ties go to the lowest index, and NaN distances never win. The parallel
//! fan-out reduces with the same rule, so it always agrees with the
//! sequential scan.

use crate::codebook::Codebook;
use crate::dataset::Dataset;
use crate::distance::{euclidean, DistanceMetric, Euclidean};
use crate::error::{LvqError, Result};
use rayon::prelude::*;

/// Classifies vectors by their nearest code vector under a metric.
#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier<M = Euclidean> {
    metric: M,
    parallel: bool,
}

impl<M: DistanceMetric> Classifier<M> {
    /// Creates a sequential classifier using `metric`.
    pub fn new(metric: M) -> Self {
        Self {
            metric,
            parallel: false,
        }
    }

    /// Enables or disables the rayon fan-out.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Returns the index of the nearest code vector.
    pub fn classify(&self, input: &[f32], codebook: &Codebook) -> Result<usize> {
        self.check(input, codebook)?;
        Ok(if self.parallel {
            self.argmin_parallel(input, codebook)
        } else {
            self.argmin(input, codebook)
        })
    }

    /// Returns the index of the nearest code vector and its distance.
    pub fn nearest(&self, input: &[f32], codebook: &Codebook) -> Result<(usize, f32)> {
        let index = self.classify(input, codebook)?;
        let distance = self
            .metric
            .distance_unchecked(input, codebook.vectors()[index].as_slice());
        Ok((index, distance))
    }

    /// Maps every sample of a dataset to its nearest code vector.
    ///
    /// This is the compressed form of the dataset; [`Codebook::decode`]
    /// reverses it lossily.
    pub fn classify_all(&self, dataset: &Dataset, codebook: &Codebook) -> Result<Vec<usize>> {
        self.check_dataset(dataset, codebook)?;

        let indices = if self.parallel {
            dataset
                .vectors()
                .par_iter()
                .map(|v| self.argmin(v, codebook))
                .collect()
        } else {
            dataset
                .vectors()
                .iter()
                .map(|v| self.argmin(v, codebook))
                .collect()
        };
        Ok(indices)
    }

    /// Fraction of samples whose nearest code vector index equals their label.
    ///
    /// An empty dataset scores 0.
    pub fn accuracy(&self, dataset: &Dataset, codebook: &Codebook) -> Result<f32> {
        if dataset.is_empty() {
            return Ok(0.0);
        }
        let predicted = self.classify_all(dataset, codebook)?;
        let correct = predicted
            .iter()
            .zip(dataset.labels())
            .filter(|(p, l)| p == l)
            .count();
        Ok(correct as f32 / dataset.len() as f32)
    }

    /// Mean Euclidean distance from each sample to its nearest code vector.
    ///
    /// The winner is chosen under this classifier's metric; the error is
    /// always measured in Euclidean terms. An empty dataset scores 0.
    pub fn quantization_error(&self, dataset: &Dataset, codebook: &Codebook) -> Result<f32> {
        if dataset.is_empty() {
            return Ok(0.0);
        }
        let predicted = self.classify_all(dataset, codebook)?;
        let total: f64 = predicted
            .iter()
            .zip(dataset.vectors())
            .map(|(&i, v)| euclidean(v, codebook.vectors()[i].as_slice()) as f64)
            .sum();
        Ok((total / dataset.len() as f64) as f32)
    }

    fn check(&self, input: &[f32], codebook: &Codebook) -> Result<()> {
        if codebook.is_empty() {
            return Err(LvqError::EmptyCodebook);
        }
        if input.len() != codebook.dimension() {
            return Err(LvqError::DimensionMismatch {
                expected: codebook.dimension(),
                actual: input.len(),
            });
        }
        Ok(())
    }

    fn check_dataset(&self, dataset: &Dataset, codebook: &Codebook) -> Result<()> {
        if codebook.is_empty() {
            return Err(LvqError::EmptyCodebook);
        }
        if !dataset.is_empty() && dataset.dimension() != codebook.dimension() {
            return Err(LvqError::DimensionMismatch {
                expected: codebook.dimension(),
                actual: dataset.dimension(),
            });
        }
        Ok(())
    }

    /// Sequential scan. Caller has checked the codebook is non-empty.
    #[inline]
    fn argmin(&self, input: &[f32], codebook: &Codebook) -> usize {
        codebook
            .iter()
            .enumerate()
            .map(|(i, w)| (i, self.metric.ranking_key(input, w)))
            .reduce(closer)
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn argmin_parallel(&self, input: &[f32], codebook: &Codebook) -> usize {
        codebook
            .vectors()
            .par_iter()
            .enumerate()
            .map(|(i, cv)| (i, self.metric.ranking_key(input, cv.as_slice())))
            .reduce_with(closer)
            .map(|(i, _)| i)
            .unwrap_or(0)
    }
}

/// Picks the smaller of two `(index, key)` candidates; lower index on ties.
#[inline]
fn closer(a: (usize, f32), b: (usize, f32)) -> (usize, f32) {
    let ka = if a.1.is_nan() { f32::INFINITY } else { a.1 };
    let kb = if b.1.is_nan() { f32::INFINITY } else { b.1 };
    if kb < ka || (kb == ka && b.0 < a.0) {
        b
    } else {
        a
    }
}

/// Returns the index of the code vector nearest to `vector` under Euclidean
/// distance.
pub fn classify(vector: &[f32], codebook: &Codebook) -> Result<usize> {
    Classifier::new(Euclidean).classify(vector, codebook)
}
