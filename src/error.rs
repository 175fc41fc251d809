use std::{
    error::Error,
    fmt::{self, Display},
    io,
};

/// The result type used across the trainer.
pub type Result<T> = std::result::Result<T, TrainErr>;

/// Everything that can stop a training run from starting or being collected.
///
/// Note that not separating the points is *not* an error, see `Outcome`.
#[derive(Debug)]
pub enum TrainErr {
    /// The training set has no points.
    EmptyPoints,
    /// A real-valued input is NaN or infinite.
    NonFinite { what: &'static str, value: f64 },
    /// A count or duration was given as a negative number.
    Negative { what: &'static str, value: i64 },
    /// Failed to read a configuration file.
    Io(io::Error),
    /// A configuration file is not valid JSON for a training config.
    Json(serde_json::Error),
    /// The background training task panicked or was cancelled.
    Join(String),
}

impl Display for TrainErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrainErr::EmptyPoints => write!(f, "the training set must contain at least one point"),
            TrainErr::NonFinite { what, value } => {
                write!(f, "{what} must be a finite number, got {value}")
            }
            TrainErr::Negative { what, value } => {
                write!(f, "{what} must not be negative, got {value}")
            }
            TrainErr::Io(e) => write!(f, "io error: {e}"),
            TrainErr::Json(e) => write!(f, "invalid config: {e}"),
            TrainErr::Join(msg) => write!(f, "training task failed: {msg}"),
        }
    }
}

impl Error for TrainErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TrainErr::Io(e) => Some(e),
            TrainErr::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for TrainErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for TrainErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
