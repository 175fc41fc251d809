mod outcome;
mod trainer;

pub use outcome::{Outcome, RunStats};
pub use trainer::{train, train_with_clock};
