//! The option menus a front end offers for each hyperparameter.
//!
//! The trainer itself accepts any value; these lists only describe the
//! choices the reference interface presents, with the first entry of each
//! being the default.

use std::time::Duration;

pub const SPEEDS: [f64; 6] = [0.001, 0.01, 0.05, 0.1, 0.2, 0.3];
pub const ITERATIONS: [usize; 4] = [100, 200, 500, 1000];
pub const DEADLINES_MS: [u64; 4] = [500, 1000, 2000, 5000];

pub const DEFAULT_THRESHOLD: f64 = 4.;
pub const DEFAULT_SPEED: f64 = SPEEDS[0];
pub const DEFAULT_ITERATIONS: usize = ITERATIONS[0];
pub const DEFAULT_DEADLINE: Duration = Duration::from_millis(DEADLINES_MS[0]);

/// A hyperparameter whose value is not one of its menu entries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OffMenu {
    Speed(f64),
    Iterations(usize),
    Deadline(Duration),
}

pub fn is_listed_speed(speed: f64) -> bool {
    SPEEDS.contains(&speed)
}

pub fn is_listed_iterations(iterations: usize) -> bool {
    ITERATIONS.contains(&iterations)
}

pub fn is_listed_deadline(deadline: Duration) -> bool {
    DEADLINES_MS
        .iter()
        .any(|&ms| Duration::from_millis(ms) == deadline)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_the_first_entries() {
        assert_eq!(DEFAULT_SPEED, 0.001);
        assert_eq!(DEFAULT_ITERATIONS, 100);
        assert_eq!(DEFAULT_DEADLINE, Duration::from_millis(500));
    }

    #[test]
    fn listed_values() {
        assert!(is_listed_speed(0.2));
        assert!(!is_listed_speed(0.25));
        assert!(is_listed_iterations(1000));
        assert!(!is_listed_iterations(0));
        assert!(is_listed_deadline(Duration::from_secs(2)));
        assert!(!is_listed_deadline(Duration::from_millis(1500)));
    }
}
