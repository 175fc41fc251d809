use std::time::Duration;

use super::menu::{self, OffMenu};
use crate::{
    arch::{Point, DEFAULT_POINTS},
    error::{Result, TrainErr},
};

/// Everything one training run needs, fixed for the run's duration.
///
/// A `TrainingConfig` can only be obtained through `new`, the builder or a
/// JSON file, all of which reject empty point sets and non-finite values.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingConfig {
    points: Vec<Point>,
    threshold: f64,
    speed: f64,
    iterations: usize,
    deadline: Duration,
}

impl TrainingConfig {
    /// Returns a new, checked `TrainingConfig`.
    ///
    /// # Arguments
    /// * `points` - The ordered training set, first half below the threshold.
    /// * `threshold` - The decision boundary.
    /// * `speed` - The learning rate.
    /// * `iterations` - The maximum amount of epochs.
    /// * `deadline` - The wall-clock budget for the whole run.
    ///
    /// # Errors
    /// `TrainErr::EmptyPoints` if `points` is empty, `TrainErr::NonFinite` if
    /// any coordinate, the threshold or the speed is NaN or infinite.
    pub fn new(
        points: Vec<Point>,
        threshold: f64,
        speed: f64,
        iterations: usize,
        deadline: Duration,
    ) -> Result<Self> {
        if points.is_empty() {
            return Err(TrainErr::EmptyPoints);
        }

        if let Some(p) = points.iter().find(|p| !p.is_finite()) {
            let value = if p.x.is_finite() { p.y } else { p.x };
            return Err(TrainErr::NonFinite {
                what: "point coordinate",
                value,
            });
        }

        for (what, value) in [("threshold", threshold), ("speed", speed)] {
            if !value.is_finite() {
                return Err(TrainErr::NonFinite { what, value });
            }
        }

        Ok(Self {
            points,
            threshold,
            speed,
            iterations,
            deadline,
        })
    }

    pub fn builder() -> TrainingConfigBuilder {
        TrainingConfigBuilder::new()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    /// Lists the hyperparameters that are not part of the reference menus.
    pub fn off_menu(&self) -> Vec<OffMenu> {
        let mut off = Vec::new();

        if !menu::is_listed_speed(self.speed) {
            off.push(OffMenu::Speed(self.speed));
        }
        if !menu::is_listed_iterations(self.iterations) {
            off.push(OffMenu::Iterations(self.iterations));
        }
        if !menu::is_listed_deadline(self.deadline) {
            off.push(OffMenu::Deadline(self.deadline));
        }

        off
    }
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            points: DEFAULT_POINTS.to_vec(),
            threshold: menu::DEFAULT_THRESHOLD,
            speed: menu::DEFAULT_SPEED,
            iterations: menu::DEFAULT_ITERATIONS,
            deadline: menu::DEFAULT_DEADLINE,
        }
    }
}

/// Builds `TrainingConfig`s, starting from the defaults.
#[derive(Debug, Clone)]
pub struct TrainingConfigBuilder {
    points: Vec<Point>,
    threshold: f64,
    speed: f64,
    iterations: usize,
    deadline: Duration,
}

impl TrainingConfigBuilder {
    pub fn new() -> Self {
        TrainingConfig::default().into()
    }

    pub fn points<I, P>(mut self, points: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        self.points = points.into_iter().map(Into::into).collect();
        self
    }

    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    pub fn deadline_ms(self, ms: u64) -> Self {
        self.deadline(Duration::from_millis(ms))
    }

    /// Checks and builds the config.
    ///
    /// # Errors
    /// See `TrainingConfig::new`.
    pub fn build(self) -> Result<TrainingConfig> {
        TrainingConfig::new(
            self.points,
            self.threshold,
            self.speed,
            self.iterations,
            self.deadline,
        )
    }
}

impl From<TrainingConfig> for TrainingConfigBuilder {
    fn from(config: TrainingConfig) -> Self {
        let TrainingConfig {
            points,
            threshold,
            speed,
            iterations,
            deadline,
        } = config;

        Self {
            points,
            threshold,
            speed,
            iterations,
            deadline,
        }
    }
}

impl Default for TrainingConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_the_reference_setup() {
        let config = TrainingConfig::default();
        assert_eq!(config.points(), &DEFAULT_POINTS);
        assert_eq!(config.threshold(), 4.);
        assert_eq!(config.speed(), 0.001);
        assert_eq!(config.iterations(), 100);
        assert_eq!(config.deadline(), Duration::from_millis(500));
        assert!(config.off_menu().is_empty());
    }

    #[test]
    fn builder_overrides_only_what_it_is_told() {
        let config = TrainingConfig::builder()
            .speed(0.01)
            .iterations(200)
            .build()
            .unwrap();

        assert_eq!(config.speed(), 0.01);
        assert_eq!(config.iterations(), 200);
        assert_eq!(config.threshold(), 4.);
        assert_eq!(config.points().len(), 4);
    }

    #[test]
    fn existing_config_can_be_tweaked() {
        let base = TrainingConfig::builder().threshold(-2.).build().unwrap();
        let tweaked = TrainingConfigBuilder::from(base.clone())
            .deadline_ms(5000)
            .build()
            .unwrap();

        assert_eq!(tweaked.threshold(), -2.);
        assert_eq!(tweaked.deadline(), Duration::from_secs(5));
        assert_eq!(tweaked.points(), base.points());
    }

    #[test]
    fn empty_point_set_is_rejected() {
        let err = TrainingConfig::builder()
            .points(Vec::<Point>::new())
            .build()
            .unwrap_err();
        assert!(matches!(err, TrainErr::EmptyPoints));
    }

    #[test]
    fn non_finite_inputs_are_rejected() {
        let err = TrainingConfig::builder()
            .points([(0., 1.), (2., f64::INFINITY)])
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            TrainErr::NonFinite {
                what: "point coordinate",
                ..
            }
        ));

        let err = TrainingConfig::builder().speed(f64::NAN).build().unwrap_err();
        assert!(matches!(err, TrainErr::NonFinite { what: "speed", .. }));

        let err = TrainingConfig::builder()
            .threshold(f64::NEG_INFINITY)
            .build()
            .unwrap_err();
        assert!(matches!(err, TrainErr::NonFinite { what: "threshold", .. }));
    }

    #[test]
    fn unusual_but_finite_hyperparameters_are_accepted() {
        let config = TrainingConfig::builder()
            .speed(-3.5)
            .iterations(0)
            .deadline(Duration::ZERO)
            .build()
            .unwrap();

        assert_eq!(
            config.off_menu(),
            vec![
                OffMenu::Speed(-3.5),
                OffMenu::Iterations(0),
                OffMenu::Deadline(Duration::ZERO),
            ]
        );
    }
}
