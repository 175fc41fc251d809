mod point;
mod validate;
mod weights;

pub use point::{Point, DEFAULT_POINTS};
pub use validate::{validate, Class};
pub use weights::Weights;
