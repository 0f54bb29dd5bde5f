//! Synthetic labeled data for demos and benchmarks.
//!
//! Vectors are uniform in the unit hypercube and labels are uniform over the
//! classes, independent of the vectors. Such data has no class structure to
//! learn, which makes it useful for exercising the training loop rather than
//! for judging accuracy.

use crate::dataset::Dataset;
use crate::error::{LvqError, Result};
use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// `count` vectors of `dimension` coordinates, each uniform in `[0, 1)`.
pub fn random_vectors<R: Rng + ?Sized>(count: usize, dimension: usize, rng: &mut R) -> Result<Vec<Vec<f32>>> {
    if dimension == 0 {
        return Err(LvqError::InvalidDimension(
            "vector dimension must be > 0".to_string(),
        ));
    }

    let uniform = Uniform::new(0.0f32, 1.0f32);
    Ok((0..count)
        .map(|_| (0..dimension).map(|_| uniform.sample(rng)).collect())
        .collect())
}

/// `count` labels, each uniform in `0..classes`.
pub fn random_labels<R: Rng + ?Sized>(count: usize, classes: usize, rng: &mut R) -> Result<Vec<usize>> {
    if classes == 0 {
        return Err(LvqError::InvalidDimension(
            "class count must be > 0".to_string(),
        ));
    }

    Ok((0..count).map(|_| rng.gen_range(0..classes)).collect())
}

/// A dataset of `count` random vectors with random labels.
pub fn random_dataset<R: Rng + ?Sized>(
    count: usize,
    dimension: usize,
    classes: usize,
    rng: &mut R,
) -> Result<Dataset> {
    let vectors = random_vectors(count, dimension, rng)?;
    let labels = random_labels(count, classes, rng)?;
    Dataset::new(vectors, labels)
}

/// A dataset with one tight cluster per class.
///
/// Class `k` is centred on a point drawn uniformly from the unit hypercube
/// and its samples are spread uniformly within `spread` of that centre along
/// every axis. Samples are interleaved by class.
pub fn clustered_dataset<R: Rng + ?Sized>(
    count: usize,
    dimension: usize,
    classes: usize,
    spread: f32,
    rng: &mut R,
) -> Result<Dataset> {
    if !(spread.is_finite() && spread > 0.0) {
        return Err(LvqError::Config(format!("spread must be > 0, got {}", spread)));
    }
    let centres = random_vectors(classes, dimension, rng)?;
    if centres.is_empty() {
        return Err(LvqError::InvalidDimension(
            "class count must be > 0".to_string(),
        ));
    }

    let jitter = Uniform::new(-spread, spread);
    let (vectors, labels): (Vec<Vec<f32>>, Vec<usize>) = (0..count)
        .map(|i| {
            let label = i % classes;
            let v: Vec<f32> = centres[label]
                .iter()
                .map(|c| c + jitter.sample(rng))
                .collect();
            (v, label)
        })
        .unzip();

    Dataset::new(vectors, labels)
}
