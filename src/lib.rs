//! A single-layer perceptron trainer with a bounded run time.
//!
//! Tries to find weights `(w1, w2)` that put the first half of an ordered set
//! of 2-D points below a fixed threshold and the second half above it, using
//! online updates, within both an epoch cap and a wall-clock deadline.
//!
//! ```no_run
//! use bounded_perceptron::{train, TrainingConfig};
//!
//! let config = TrainingConfig::builder()
//!     .speed(0.01)
//!     .iterations(200)
//!     .deadline_ms(2000)
//!     .build()?;
//!
//! let outcome = train(&config);
//! println!("{}: {:?}", outcome.kind(), outcome.weights());
//! # Ok::<(), bounded_perceptron::TrainErr>(())
//! ```

pub mod arch;
pub mod clock;
pub mod configs;
pub mod error;
mod session;
pub mod training;

pub use arch::{Point, Weights};
pub use configs::{TrainingConfig, TrainingConfigBuilder};
pub use error::{Result, TrainErr};
pub use session::{train_async, Session};
pub use training::{train, train_with_clock, Outcome, RunStats};
