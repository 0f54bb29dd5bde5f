//! Labeled training data.

use crate::error::{LvqError, Result};

/// A labeled set of equal-length vectors.
///
/// The engine only ever reads a dataset; vectors are immutable once added.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    vectors: Vec<Vec<f32>>,
    labels: Vec<usize>,
    dimension: usize,
}

impl Dataset {
    /// Creates a dataset from parallel vectors of samples and labels.
    ///
    /// All vectors must share one dimension. An empty dataset has dimension 0.
    pub fn new(vectors: Vec<Vec<f32>>, labels: Vec<usize>) -> Result<Self> {
        if vectors.len() != labels.len() {
            return Err(LvqError::SampleCountMismatch {
                expected: vectors.len(),
                actual: labels.len(),
            });
        }

        let dimension = vectors.first().map(Vec::len).unwrap_or(0);
        if let Some(bad) = vectors.iter().find(|v| v.len() != dimension) {
            return Err(LvqError::DimensionMismatch {
                expected: dimension,
                actual: bad.len(),
            });
        }

        Ok(Self {
            vectors,
            labels,
            dimension,
        })
    }

    /// Creates a dataset from `(vector, label)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Vec<f32>, usize)>,
    {
        let (vectors, labels): (Vec<Vec<f32>>, Vec<usize>) = pairs.into_iter().unzip();
        Self::new(vectors, labels)
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Dimensionality of the vectors.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// The sample vectors, in order.
    #[inline]
    pub fn vectors(&self) -> &[Vec<f32>] {
        &self.vectors
    }

    /// The labels, in order.
    #[inline]
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Gets a sample and its label by index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<(&[f32], usize)> {
        self.vectors
            .get(index)
            .map(|v| (v.as_slice(), self.labels[index]))
    }

    /// Iterates over `(vector, label)` pairs in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = (&[f32], usize)> + '_ {
        self.vectors
            .iter()
            .zip(self.labels.iter())
            .map(|(v, &l)| (v.as_slice(), l))
    }

    /// Largest label present, if any.
    pub fn max_label(&self) -> Option<usize> {
        self.labels.iter().copied().max()
    }

    /// Fails with [`LvqError::LabelOutOfRange`] on the first label `>= limit`.
    pub fn check_labels(&self, limit: usize) -> Result<()> {
        match self.labels.iter().find(|&&l| l >= limit) {
            Some(&label) => Err(LvqError::LabelOutOfRange { label, limit }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs() {
        let ds = Dataset::from_pairs(vec![(vec![1.0, 0.0], 0), (vec![0.0, 1.0], 1)]).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.dimension(), 2);
        assert_eq!(ds.get(1), Some((&[0.0f32, 1.0][..], 1)));
        assert_eq!(ds.max_label(), Some(1));
    }

    #[test]
    fn test_ragged_vectors_rejected() {
        let err = Dataset::new(vec![vec![1.0, 2.0], vec![1.0]], vec![0, 0]).unwrap_err();
        assert_eq!(err, LvqError::DimensionMismatch { expected: 2, actual: 1 });
    }

    #[test]
    fn test_label_count_mismatch() {
        let err = Dataset::new(vec![vec![1.0]], vec![0, 1]).unwrap_err();
        assert_eq!(err, LvqError::SampleCountMismatch { expected: 1, actual: 2 });
    }

    #[test]
    fn test_check_labels() {
        let ds = Dataset::new(vec![vec![0.0], vec![1.0]], vec![0, 3]).unwrap();
        assert!(ds.check_labels(4).is_ok());
        assert_eq!(
            ds.check_labels(3).unwrap_err(),
            LvqError::LabelOutOfRange { label: 3, limit: 3 }
        );
    }

    #[test]
    fn test_empty() {
        let ds = Dataset::new(Vec::new(), Vec::new()).unwrap();
        assert!(ds.is_empty());
        assert_eq!(ds.dimension(), 0);
        assert_eq!(ds.iter().count(), 0);
    }
}
