//! The codebook: an indexed collection of code vectors of one dimension.

use crate::codebook::CodeVector;
use crate::error::{LvqError, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// A set of `v` code vectors, all of dimension `m`.
///
/// When the codebook size equals the class count, slot `i` is the
/// representative for class `i`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CodebookParts")]
pub struct Codebook {
    /// Dimensionality shared by every code vector.
    dimension: usize,
    /// The code vectors, indexed by slot.
    vectors: Vec<CodeVector>,
}

/// Unvalidated serialized form of a [`Codebook`].
#[derive(Deserialize)]
struct CodebookParts {
    dimension: usize,
    vectors: Vec<CodeVector>,
}

impl TryFrom<CodebookParts> for Codebook {
    type Error = LvqError;

    fn try_from(parts: CodebookParts) -> Result<Self> {
        if let Some(bad) = parts.vectors.iter().find(|cv| cv.dimension() != parts.dimension) {
            return Err(LvqError::DimensionMismatch {
                expected: parts.dimension,
                actual: bad.dimension(),
            });
        }

        Ok(Self {
            dimension: parts.dimension,
            vectors: parts.vectors,
        })
    }
}

impl Codebook {
    /// Creates a codebook of `size` vectors of `dimension` coordinates, each
    /// coordinate uniform in `[0, 1)`.
    ///
    /// One sub-seed per vector is drawn from `rng`, and each vector is filled
    /// from its own ChaCha8 stream, so [`Codebook::initialize_parallel`]
    /// produces the same codebook from the same generator state.
    pub fn initialize<R: Rng + ?Sized>(size: usize, dimension: usize, rng: &mut R) -> Result<Self> {
        let seeds = Self::vector_seeds(size, dimension, rng)?;
        let vectors = seeds
            .into_iter()
            .map(|seed| CodeVector::new_random(dimension, &mut ChaCha8Rng::seed_from_u64(seed)))
            .collect();

        Ok(Self { dimension, vectors })
    }

    /// Same as [`Codebook::initialize`], filling vectors on the rayon pool.
    pub fn initialize_parallel<R: Rng + ?Sized>(
        size: usize,
        dimension: usize,
        rng: &mut R,
    ) -> Result<Self> {
        let seeds = Self::vector_seeds(size, dimension, rng)?;
        let vectors = seeds
            .into_par_iter()
            .map(|seed| CodeVector::new_random(dimension, &mut ChaCha8Rng::seed_from_u64(seed)))
            .collect();

        Ok(Self { dimension, vectors })
    }

    fn vector_seeds<R: Rng + ?Sized>(size: usize, dimension: usize, rng: &mut R) -> Result<Vec<u64>> {
        if size == 0 {
            return Err(LvqError::InvalidDimension(
                "codebook size must be > 0".to_string(),
            ));
        }
        if dimension == 0 {
            return Err(LvqError::InvalidDimension(
                "vector dimension must be > 0".to_string(),
            ));
        }
        Ok((0..size).map(|_| rng.gen::<u64>()).collect())
    }

    /// Creates a codebook from explicit vectors.
    ///
    /// An empty list gives an empty codebook of dimension 0.
    pub fn from_vectors(vectors: Vec<Vec<f32>>) -> Result<Self> {
        let dimension = vectors.first().map(Vec::len).unwrap_or(0);
        if let Some(bad) = vectors.iter().find(|v| v.len() != dimension) {
            return Err(LvqError::DimensionMismatch {
                expected: dimension,
                actual: bad.len(),
            });
        }

        Ok(Self {
            dimension,
            vectors: vectors.into_iter().map(CodeVector::new_with_weights).collect(),
        })
    }

    /// Returns the number of code vectors.
    #[inline]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Dimensionality of the code vectors.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Gets a code vector by slot.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&CodeVector> {
        self.vectors.get(index)
    }

    /// Gets a mutable reference to a code vector by slot.
    ///
    /// Crate-private: the updates reachable through it never change a
    /// vector's length.
    #[inline]
    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut CodeVector> {
        self.vectors.get_mut(index)
    }

    /// The code vectors, in slot order.
    #[inline]
    pub fn vectors(&self) -> &[CodeVector] {
        &self.vectors
    }

    /// Iterates over the weight slices in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &[f32]> + '_ {
        self.vectors.iter().map(CodeVector::as_slice)
    }

    /// Reconstructs vectors from codebook indices (the lossy decode of a
    /// compressed dataset).
    pub fn decode(&self, indices: &[usize]) -> Result<Vec<Vec<f32>>> {
        indices
            .iter()
            .map(|&i| {
                self.vectors
                    .get(i)
                    .map(|cv| cv.as_slice().to_vec())
                    .ok_or(LvqError::IndexOutOfBounds {
                        index: i,
                        max: self.vectors.len(),
                    })
            })
            .collect()
    }
}
