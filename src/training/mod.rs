//! LVQ1 training.
//!
//! Training is online and strictly sequential: every sample's update is
//! visible to the classification of the next sample in the same epoch.

mod state;
mod trainer;

pub use state::{EpochStats, TerminationReason, TrainingReport, TrainingState};
pub use trainer::{train, LvqTrainer};
