use super::Point;

/// The perceptron's weight vector `(w1, w2)`.
///
/// Every run starts from `Weights::default()`, that is `(0, 0)`. The only
/// mutation is `update`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Weights {
    w1: f64,
    w2: f64,
}

impl Weights {
    pub fn new(w1: f64, w2: f64) -> Self {
        Self { w1, w2 }
    }

    pub fn w1(&self) -> f64 {
        self.w1
    }

    pub fn w2(&self) -> f64 {
        self.w2
    }

    /// Linear activation of `point`, `x * w1 + y * w2`.
    pub fn signal(&self, point: &Point) -> f64 {
        point.x * self.w1 + point.y * self.w2
    }

    /// Single-sample online correction towards the threshold.
    ///
    /// # Arguments
    /// * `point` - The sample the error was measured on.
    /// * `speed` - The learning rate.
    /// * `delta` - The error term, `threshold - signal`.
    pub fn update(&mut self, point: &Point, speed: f64, delta: f64) {
        self.w1 += delta * point.x * speed;
        self.w2 += delta * point.y * speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_is_the_dot_product() {
        let w = Weights::new(0.5, -2.);
        assert_eq!(w.signal(&Point::new(4., 1.)), 0.);
        assert_eq!(w.signal(&Point::new(2., 3.)), -5.);
        assert_eq!(Weights::default().signal(&Point::new(9., 9.)), 0.);
    }

    #[test]
    fn update_is_affine_in_the_current_weights() {
        let point = Point::new(3., -2.);
        let (speed, delta) = (0.25, 2.);

        for start in [Weights::default(), Weights::new(10., -7.5), Weights::new(-1e3, 0.1)] {
            let mut w = start;
            w.update(&point, speed, delta);
            assert_eq!(w.w1() - start.w1(), delta * point.x * speed);
            assert_eq!(w.w2() - start.w2(), delta * point.y * speed);
        }
    }

    #[test]
    fn zero_speed_or_delta_leaves_weights_alone() {
        let mut w = Weights::new(1., 2.);
        w.update(&Point::new(5., 5.), 0., 3.);
        w.update(&Point::new(5., 5.), 0.3, 0.);
        assert_eq!(w, Weights::new(1., 2.));
    }
}
