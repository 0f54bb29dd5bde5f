//! Training loop states and the report handed back to callers.

use serde::{Deserialize, Serialize};

/// State of the training loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainingState {
    /// Epochs are still being run.
    Running,
    /// The summed update magnitude of an epoch fell below epsilon.
    Converged,
    /// The epoch bound was reached without convergence.
    Exhausted,
    /// The caller asked to stop at an epoch boundary.
    Interrupted,
}

impl TrainingState {
    /// True while the loop should keep going.
    #[inline]
    pub fn is_running(self) -> bool {
        self == TrainingState::Running
    }

    /// The termination reason for a terminal state, `None` while running.
    pub fn termination(self) -> Option<TerminationReason> {
        match self {
            TrainingState::Running => None,
            TrainingState::Converged => Some(TerminationReason::Converged),
            TrainingState::Exhausted => Some(TerminationReason::Exhausted),
            TrainingState::Interrupted => Some(TerminationReason::Interrupted),
        }
    }
}

/// Why training stopped.
///
/// Every reason yields a usable codebook. Anything other than `Converged`
/// means convergence was not confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminationReason {
    /// Converged within tolerance.
    Converged,
    /// Ran out of epochs.
    Exhausted,
    /// Stopped by the caller.
    Interrupted,
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TerminationReason::Converged => "converged",
            TerminationReason::Exhausted => "exhausted",
            TerminationReason::Interrupted => "interrupted",
        };
        f.write_str(s)
    }
}

/// Statistics for one completed epoch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Sum over samples of the Euclidean norm of each applied update.
    pub update_magnitude: f32,
    /// Samples whose nearest code vector was not their own class slot.
    pub misclassified: usize,
}

/// Outcome of a training run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingReport {
    /// Why the loop stopped.
    pub reason: TerminationReason,
    /// Number of completed epochs.
    pub epochs: usize,
    /// Per-epoch statistics, in order.
    pub history: Vec<EpochStats>,
}

impl TrainingReport {
    /// True if the run converged.
    #[inline]
    pub fn converged(&self) -> bool {
        self.reason == TerminationReason::Converged
    }

    /// Statistics of the last completed epoch.
    pub fn last_epoch(&self) -> Option<&EpochStats> {
        self.history.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(TrainingState::Running.is_running());
        assert_eq!(TrainingState::Running.termination(), None);
        assert_eq!(
            TrainingState::Converged.termination(),
            Some(TerminationReason::Converged)
        );
        assert_eq!(
            TrainingState::Exhausted.termination(),
            Some(TerminationReason::Exhausted)
        );
        assert!(!TrainingState::Interrupted.is_running());
    }

    #[test]
    fn test_report() {
        let report = TrainingReport {
            reason: TerminationReason::Exhausted,
            epochs: 2,
            history: vec![
                EpochStats { epoch: 1, update_magnitude: 0.5, misclassified: 3 },
                EpochStats { epoch: 2, update_magnitude: 0.25, misclassified: 1 },
            ],
        };
        assert!(!report.converged());
        assert_eq!(report.last_epoch().unwrap().epoch, 2);
        assert_eq!(report.reason.to_string(), "exhausted");
    }
}
