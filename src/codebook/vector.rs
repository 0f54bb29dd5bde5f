//! A single codebook vector.

use crate::distance::{euclidean, euclidean_squared};
use rand::Rng;
use rand_distr::{Distribution, Uniform};
use serde::{Deserialize, Serialize};

/// One prototype in the codebook.
///
/// Its weight vector is the representative point for the class it stands for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeVector {
    weights: Vec<f32>,
}

impl CodeVector {
    /// Creates a code vector with every coordinate drawn uniformly from `[0, 1)`.
    pub fn new_random<R: Rng + ?Sized>(dimension: usize, rng: &mut R) -> Self {
        let uniform = Uniform::new(0.0f32, 1.0f32);
        let weights: Vec<f32> = (0..dimension).map(|_| uniform.sample(rng)).collect();

        Self { weights }
    }

    /// Creates a code vector with the given weights.
    pub fn new_with_weights(weights: Vec<f32>) -> Self {
        Self { weights }
    }

    /// Number of coordinates.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.weights.len()
    }

    /// The weights as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.weights
    }

    /// Euclidean distance between these weights and an input vector.
    pub fn distance(&self, input: &[f32]) -> f32 {
        debug_assert_eq!(
            self.weights.len(),
            input.len(),
            "Weight and input dimensions must match"
        );
        euclidean(&self.weights, input)
    }

    /// Squared Euclidean distance (avoids sqrt).
    #[inline]
    pub fn distance_squared(&self, input: &[f32]) -> f32 {
        euclidean_squared(&self.weights, input)
    }

    /// Moves the weights toward `input`: `w += alpha * (x - w)`.
    ///
    /// Returns the Euclidean norm of the applied change.
    pub fn attract(&mut self, input: &[f32], alpha: f32) -> f32 {
        self.apply(input, alpha)
    }

    /// Moves the weights away from `input`: `w -= alpha * (x - w)`.
    ///
    /// Returns the Euclidean norm of the applied change.
    pub fn repel(&mut self, input: &[f32], alpha: f32) -> f32 {
        self.apply(input, -alpha)
    }

    #[inline]
    fn apply(&mut self, input: &[f32], step: f32) -> f32 {
        debug_assert_eq!(self.weights.len(), input.len());

        let mut magnitude = 0.0f32;
        for (w, x) in self.weights.iter_mut().zip(input.iter()) {
            let delta = step * (x - *w);
            *w += delta;
            magnitude += delta * delta;
        }
        magnitude.sqrt()
    }
}
