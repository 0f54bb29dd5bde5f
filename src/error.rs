//! Error types for the LVQ engine.

use thiserror::Error;

/// The main error type for LVQ operations.
///
/// Every variant is raised before the codebook is mutated: training
/// validates its whole input up front and never fails half-way through
/// an epoch.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LvqError {
    /// A codebook size, vector dimension or class count was zero.
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    /// Two vectors of unequal length were compared.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// The dimension that was required.
        expected: usize,
        /// The dimension that was supplied.
        actual: usize,
    },

    /// Classification against a codebook with no vectors.
    #[error("Codebook is empty")]
    EmptyCodebook,

    /// The learning rate was zero, negative or not finite.
    #[error("Invalid learning rate: {0} (must be finite and > 0)")]
    InvalidLearningRate(f32),

    /// A sample label has no codebook slot.
    #[error("Label out of range: {label} >= {limit}")]
    LabelOutOfRange {
        /// The offending label.
        label: usize,
        /// The exclusive upper bound for labels.
        limit: usize,
    },

    /// The number of samples differs from what was declared.
    #[error("Sample count mismatch: expected {expected}, got {actual}")]
    SampleCountMismatch {
        /// The declared number of samples.
        expected: usize,
        /// The number of samples actually present.
        actual: usize,
    },

    /// Index out of bounds.
    #[error("Index out of bounds: {index} >= {max}")]
    IndexOutOfBounds {
        /// The index that was out of bounds.
        index: usize,
        /// The maximum allowed index.
        max: usize,
    },

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for LVQ operations.
pub type Result<T> = std::result::Result<T, LvqError>;
