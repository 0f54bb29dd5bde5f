//! The LVQ1 training loop.

use crate::classifier::Classifier;
use crate::codebook::Codebook;
use crate::config::LvqConfig;
use crate::dataset::Dataset;
use crate::distance::MetricKind;
use crate::error::{LvqError, Result};
use crate::training::{EpochStats, TerminationReason, TrainingReport, TrainingState};
use log::{debug, info, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::ops::ControlFlow;

/// Trains a freshly initialized codebook on `dataset`.
///
/// The codebook is drawn from `rng`; everything is validated before that
/// happens. Returns the learned codebook and why training stopped.
pub fn train<R: Rng + ?Sized>(
    dataset: &Dataset,
    config: &LvqConfig,
    rng: &mut R,
) -> Result<(Codebook, TerminationReason)> {
    validate(config, dataset)?;
    let codebook = initialize(config, rng)?;
    let (codebook, report) = run(config, codebook, dataset, |_| ControlFlow::Continue(()))?;
    Ok((codebook, report.reason))
}

/// LVQ trainer holding a configuration and its seeded generator.
pub struct LvqTrainer {
    config: LvqConfig,
    rng: ChaCha8Rng,
}

impl LvqTrainer {
    /// Creates a new trainer with the given configuration.
    pub fn new(config: LvqConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        Self { config, rng }
    }

    /// The configuration.
    pub fn config(&self) -> &LvqConfig {
        &self.config
    }

    /// Draws a random codebook sized by the configuration.
    pub fn initialize(&mut self) -> Result<Codebook> {
        self.config.validate()?;
        initialize(&self.config, &mut self.rng)
    }

    /// Initializes a codebook and trains it on `dataset`.
    pub fn train(&mut self, dataset: &Dataset) -> Result<(Codebook, TrainingReport)> {
        validate(&self.config, dataset)?;
        let codebook = initialize(&self.config, &mut self.rng)?;
        run(&self.config, codebook, dataset, |_| ControlFlow::Continue(()))
    }

    /// Trains starting from an existing codebook.
    pub fn train_from(
        &self,
        codebook: Codebook,
        dataset: &Dataset,
    ) -> Result<(Codebook, TrainingReport)> {
        self.train_with_progress(codebook, dataset, |_| ControlFlow::Continue(()))
    }

    /// Trains starting from an existing codebook, calling `on_epoch` after
    /// every completed epoch.
    ///
    /// Returning `ControlFlow::Break` stops the loop with
    /// [`TerminationReason::Interrupted`] unless that epoch already converged.
    pub fn train_with_progress<F>(
        &self,
        codebook: Codebook,
        dataset: &Dataset,
        on_epoch: F,
    ) -> Result<(Codebook, TrainingReport)>
    where
        F: FnMut(&EpochStats) -> ControlFlow<()>,
    {
        validate(&self.config, dataset)?;
        check_codebook(&self.config, &codebook)?;
        run(&self.config, codebook, dataset, on_epoch)
    }
}

fn initialize<R: Rng + ?Sized>(config: &LvqConfig, rng: &mut R) -> Result<Codebook> {
    if config.parallel {
        Codebook::initialize_parallel(config.codebook_size, config.dimension, rng)
    } else {
        Codebook::initialize(config.codebook_size, config.dimension, rng)
    }
}

/// Everything that can be checked before the codebook exists.
fn validate(config: &LvqConfig, dataset: &Dataset) -> Result<()> {
    config.validate()?;

    if dataset.len() != config.samples {
        return Err(LvqError::SampleCountMismatch {
            expected: config.samples,
            actual: dataset.len(),
        });
    }
    if !dataset.is_empty() && dataset.dimension() != config.dimension {
        return Err(LvqError::DimensionMismatch {
            expected: config.dimension,
            actual: dataset.dimension(),
        });
    }
    dataset.check_labels(config.classes)
}

fn check_codebook(config: &LvqConfig, codebook: &Codebook) -> Result<()> {
    if codebook.is_empty() {
        return Err(LvqError::EmptyCodebook);
    }
    if codebook.dimension() != config.dimension {
        return Err(LvqError::DimensionMismatch {
            expected: config.dimension,
            actual: codebook.dimension(),
        });
    }
    if codebook.len() != config.codebook_size {
        return Err(LvqError::Config(format!(
            "codebook has {} vectors, configuration expects {}",
            codebook.len(),
            config.codebook_size
        )));
    }
    Ok(())
}

/// Runs epochs until convergence, exhaustion or interruption.
///
/// Inputs are already validated.
fn run<F>(
    config: &LvqConfig,
    mut codebook: Codebook,
    dataset: &Dataset,
    mut on_epoch: F,
) -> Result<(Codebook, TrainingReport)>
where
    F: FnMut(&EpochStats) -> ControlFlow<()>,
{
    let classifier = Classifier::new(config.metric).with_parallel(config.parallel);
    let mut history: Vec<EpochStats> = Vec::with_capacity(config.max_iter.min(1024));
    let mut state = TrainingState::Running;
    let mut epochs = 0;
    let mut warned = false;

    info!(
        "Starting LVQ training: {} samples, {} codebook vectors, {} dim, alpha={}, max_iter={}",
        dataset.len(),
        codebook.len(),
        codebook.dimension(),
        config.learning_rate,
        config.max_iter
    );

    while state.is_running() {
        if epochs >= config.max_iter {
            state = TrainingState::Exhausted;
            break;
        }

        let stats = run_epoch(&classifier, &mut codebook, dataset, config.learning_rate, epochs + 1)?;
        epochs += 1;
        history.push(stats);

        debug!(
            "Epoch {}: update magnitude {:.6}, {} misclassified",
            stats.epoch, stats.update_magnitude, stats.misclassified
        );
        if !stats.update_magnitude.is_finite() && !warned {
            warn!(
                "Epoch {}: update magnitude is not finite; learning rate {} is likely too large",
                stats.epoch, config.learning_rate
            );
            warned = true;
        }

        if let Some(epsilon) = config.epsilon {
            if stats.update_magnitude < epsilon {
                state = TrainingState::Converged;
            }
        }

        if on_epoch(&stats).is_break() && state.is_running() {
            state = TrainingState::Interrupted;
        }

        if epochs % 10 == 0 && state.is_running() {
            info!(
                "Epoch {}/{}: update magnitude {:.6}",
                epochs, config.max_iter, stats.update_magnitude
            );
        }
    }

    let reason = state
        .termination()
        .ok_or_else(|| LvqError::Config("training loop ended while running".to_string()))?;

    info!("LVQ training {} after {} epochs", reason, epochs);

    Ok((
        codebook,
        TrainingReport {
            reason,
            epochs,
            history,
        },
    ))
}

/// One pass over the dataset in order, applying the LVQ1 rule to the
/// true-label slot of each sample.
fn run_epoch(
    classifier: &Classifier<MetricKind>,
    codebook: &mut Codebook,
    dataset: &Dataset,
    alpha: f32,
    epoch: usize,
) -> Result<EpochStats> {
    let mut update_magnitude = 0.0f64;
    let mut misclassified = 0;

    for (sample, actual) in dataset.iter() {
        let predicted = classifier.classify(sample, codebook)?;
        let max = codebook.len();
        let target = codebook
            .get_mut(actual)
            .ok_or(LvqError::IndexOutOfBounds { index: actual, max })?;

        let magnitude = if predicted == actual {
            target.attract(sample, alpha)
        } else {
            misclassified += 1;
            target.repel(sample, alpha)
        };
        update_magnitude += magnitude as f64;
    }

    Ok(EpochStats {
        epoch,
        update_magnitude: update_magnitude as f32,
        misclassified,
    })
}
