use serde::{Deserialize, Serialize};

/// A 2-D input feature vector.
///
/// Serialized as a `[x, y]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// The reference training set. The first half is expected below the
/// threshold, the second half above it.
pub const DEFAULT_POINTS: [Point; 4] = [
    Point::new(0., 6.),
    Point::new(1., 5.),
    Point::new(3., 3.),
    Point::new(2., 4.),
];
