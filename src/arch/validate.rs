use super::{Point, Weights};

/// Which side of the threshold a point must land on.
///
/// Class membership is positional: the first `len / 2` points of the
/// training set are `Below`, the rest are `Above`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    Below,
    Above,
}

impl Class {
    /// Returns the class of the point at `index` in a set of `len` points.
    pub fn of(index: usize, len: usize) -> Self {
        if index < len / 2 {
            Class::Below
        } else {
            Class::Above
        }
    }

    /// Whether `signal` lies strictly on this class' side of `threshold`.
    pub fn accepts(&self, signal: f64, threshold: f64) -> bool {
        match self {
            Class::Below => signal < threshold,
            Class::Above => signal > threshold,
        }
    }
}

/// Checks whether `weights` separate every point of the set at once.
///
/// Both inequalities are strict, so a signal equal to `threshold` is a
/// violation on either side.
pub fn validate(points: &[Point], weights: &Weights, threshold: f64) -> bool {
    let len = points.len();

    points
        .iter()
        .enumerate()
        .all(|(i, p)| Class::of(i, len).accepts(weights.signal(p), threshold))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arch::DEFAULT_POINTS;

    #[test]
    fn positional_split_rounds_down() {
        assert_eq!(Class::of(0, 1), Class::Above);
        assert_eq!(Class::of(0, 3), Class::Below);
        assert_eq!(Class::of(1, 3), Class::Above);
        assert_eq!(Class::of(1, 4), Class::Below);
        assert_eq!(Class::of(2, 4), Class::Above);
    }

    #[test]
    fn separating_weights_validate() {
        let w = Weights::new(1.2, 0.5);
        assert!(validate(&DEFAULT_POINTS, &w, 4.));
    }

    #[test]
    fn zero_weights_do_not_separate_the_reference_set() {
        assert!(!validate(&DEFAULT_POINTS, &Weights::default(), 4.));
    }

    #[test]
    fn signal_on_the_threshold_fails_the_lower_half() {
        // (1, 0) sits exactly on the threshold, (0, 1) well above it.
        let points = [Point::new(1., 0.), Point::new(0., 1.)];
        let w = Weights::new(2., 5.);
        assert!(!validate(&points, &w, 2.));
        assert!(validate(&points, &w, 2.5));
    }

    #[test]
    fn signal_on_the_threshold_fails_the_upper_half() {
        let points = [Point::new(1., 0.), Point::new(0., 1.)];
        let w = Weights::new(0., 2.);
        assert!(!validate(&points, &w, 2.));
        assert!(validate(&points, &w, 1.5));
    }

    #[test]
    fn a_single_point_must_be_above() {
        let points = [Point::new(1., 1.)];
        assert!(validate(&points, &Weights::new(1., 1.), 1.));
        assert!(!validate(&points, &Weights::new(0.5, 0.5), 1.));
    }
}
