use std::time::Duration;

use log::{debug, info, trace};

use super::{Outcome, RunStats};
use crate::{
    arch::{validate, Weights},
    clock::{Clock, Deadline, SystemClock},
    configs::TrainingConfig,
};

/// Trains a fresh perceptron against the wall clock.
///
/// See `train_with_clock`.
pub fn train(config: &TrainingConfig) -> Outcome {
    train_with_clock(config, &SystemClock::new())
}

/// Trains a fresh perceptron on `config`, measuring the deadline with `clock`.
///
/// Weights start at `(0, 0)`. For every epoch, each point is visited in order:
/// the deadline is checked, the weights are corrected towards the threshold
/// using that single point, and the whole set is validated. The run stops on
/// the first separating update, when the deadline is exceeded, or after the
/// last epoch.
///
/// The deadline is checked once per point, so a run overshoots it by at most
/// one step.
///
/// # Arguments
/// * `config` - The training set and hyperparameters.
/// * `clock` - The time source the deadline is measured against.
///
/// # Returns
/// The `Outcome` of the run, carrying the final weights.
pub fn train_with_clock<C: Clock + ?Sized>(config: &TrainingConfig, clock: &C) -> Outcome {
    let points = config.points();
    let threshold = config.threshold();
    let speed = config.speed();

    info!(
        points = points.len(), speed = speed, iterations = config.iterations();
        "training started"
    );

    let deadline = Deadline::start(clock, config.deadline());
    let mut weights = Weights::default();
    let mut steps = 0;
    let mut elapsed = Duration::ZERO;

    for epoch in 0..config.iterations() {
        for point in points {
            elapsed = match deadline.check(clock) {
                Ok(elapsed) => elapsed,
                Err(late) => {
                    info!(
                        "deadline of {:?} exceeded after {late:?} ({steps} steps)",
                        deadline.budget()
                    );
                    let stats = RunStats::new(epoch + 1, steps, late);
                    return Outcome::TimedOut { weights, stats };
                }
            };

            let delta = threshold - weights.signal(point);
            weights.update(point, speed, delta);
            steps += 1;
            trace!("epoch={epoch} step={steps} elapsed={elapsed:?} delta={delta}");

            if validate(points, &weights, threshold) {
                info!(
                    "separated at epoch {epoch} after {steps} steps: w1={} w2={}",
                    weights.w1(), weights.w2()
                );
                let stats = RunStats::new(epoch + 1, steps, elapsed);
                return Outcome::Separated { weights, stats };
            }
        }

        debug!(epoch = epoch; "epoch finished without separating");
    }

    info!(
        "no separation within {} epochs: w1={} w2={}",
        config.iterations(),
        weights.w1(),
        weights.w2()
    );
    let stats = RunStats::new(config.iterations(), steps, elapsed);
    Outcome::Exhausted { weights, stats }
}
