use std::time::Duration;

use crate::arch::Weights;

/// Counters describing how far a run got before it stopped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    epochs: usize,
    steps: usize,
    elapsed: Duration,
}

impl RunStats {
    pub fn new(epochs: usize, steps: usize, elapsed: Duration) -> Self {
        Self {
            epochs,
            steps,
            elapsed,
        }
    }

    /// Number of epochs that were started, including a partial last one.
    pub fn epochs(&self) -> usize {
        self.epochs
    }

    /// Number of single-point weight updates applied.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Clock time between the start of the run and its last deadline check.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

/// How a training run ended. Each variant carries the final weights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// The weights separate every point of the set.
    Separated { weights: Weights, stats: RunStats },
    /// Every epoch ran without finding separating weights.
    Exhausted { weights: Weights, stats: RunStats },
    /// The deadline passed before reaching a verdict. The weights are the
    /// ones in place when the run was cut off.
    TimedOut { weights: Weights, stats: RunStats },
}

impl Outcome {
    pub fn weights(&self) -> Weights {
        match self {
            Outcome::Separated { weights, .. }
            | Outcome::Exhausted { weights, .. }
            | Outcome::TimedOut { weights, .. } => *weights,
        }
    }

    pub fn stats(&self) -> RunStats {
        match self {
            Outcome::Separated { stats, .. }
            | Outcome::Exhausted { stats, .. }
            | Outcome::TimedOut { stats, .. } => *stats,
        }
    }

    pub fn is_separated(&self) -> bool {
        matches!(self, Outcome::Separated { .. })
    }

    /// The outcome as a yes / no / no-verdict value: `Some(true)` when
    /// separated, `Some(false)` when exhausted and `None` on timeout.
    pub fn verdict(&self) -> Option<bool> {
        match self {
            Outcome::Separated { .. } => Some(true),
            Outcome::Exhausted { .. } => Some(false),
            Outcome::TimedOut { .. } => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Outcome::Separated { .. } => "separated",
            Outcome::Exhausted { .. } => "exhausted",
            Outcome::TimedOut { .. } => "timed_out",
        }
    }
}
