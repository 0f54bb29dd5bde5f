//! # LVQ - Learning Vector Quantization
//!
//! Learns a small codebook of representative vectors, one per class, from a
//! labeled dataset. The codebook doubles as a nearest-prototype classifier and
//! as a lossy, class-aware compression of the data: each sample is replaced by
//! the index of its nearest codebook vector.
//!
//! ## Overview
//!
//! Training follows the LVQ1 rule. For each sample, in dataset order, the
//! nearest codebook vector is found. The codebook vector of the sample's
//! *true* class is then pulled toward the sample if the nearest vector was
//! that class, and pushed away from it otherwise:
//!
//! ```text
//! correct:   w <- w + alpha * (x - w)
//! incorrect: w <- w - alpha * (x - w)
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use lvq::{train, classify, Dataset, LvqConfig};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let dataset = Dataset::from_pairs(vec![
//!     (vec![1.0, 0.0], 0),
//!     (vec![0.0, 1.0], 1),
//! ])?;
//!
//! let config = LvqConfig {
//!     dimension: 2,
//!     classes: 2,
//!     codebook_size: 2,
//!     epsilon: Some(1e-4),
//!     ..LvqConfig::new(dataset.len(), 0.05)
//! };
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let (codebook, reason) = train(&dataset, &config, &mut rng)?;
//!
//! let class = classify(&[0.9, 0.2], &codebook)?;
//! ```
//!
//! ## Architecture
//!
//! - [`distance`] - Euclidean metric, plus a raw-difference variant for legacy parity
//! - [`codebook`] - Codebook storage and seeded random initialization
//! - [`classifier`] - Nearest-prototype classification, accuracy, quantization error
//! - [`training`] - The LVQ1 training loop and its termination states
//! - [`synthetic`] - Random datasets for demos

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod classifier;
pub mod codebook;
pub mod config;
pub mod dataset;
pub mod distance;
pub mod error;
pub mod synthetic;
pub mod training;

// Re-export commonly used types
pub use classifier::{classify, Classifier};
pub use codebook::{CodeVector, Codebook};
pub use config::LvqConfig;
pub use dataset::Dataset;
pub use distance::{DistanceMetric, Euclidean, MetricKind, RawDifference};
pub use error::{LvqError, Result};
pub use training::{train, EpochStats, LvqTrainer, TerminationReason, TrainingReport, TrainingState};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default vector dimension.
pub const DEFAULT_DIMENSION: usize = 4;

/// Default number of classes.
pub const DEFAULT_CLASSES: usize = 4;

/// Default codebook size (one vector per class).
pub const DEFAULT_CODEBOOK_SIZE: usize = DEFAULT_CLASSES;

/// Default epoch bound.
pub const DEFAULT_MAX_ITER: usize = 100;
