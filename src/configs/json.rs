use std::{fs, path::Path, time::Duration};

use serde::Deserialize;

use super::TrainingConfig;
use crate::{
    arch::Point,
    error::{Result, TrainErr},
};

/// On-disk shape of a training config. Every field is optional and falls back
/// to the defaults.
///
/// ```json
/// {
///     "points": [[0, 6], [1, 5], [3, 3], [2, 4]],
///     "threshold": 4,
///     "speed": 0.01,
///     "iterations": 200,
///     "deadline_ms": 2000
/// }
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct TrainingFile {
    points: Option<Vec<Point>>,
    threshold: Option<f64>,
    speed: Option<f64>,
    // Signed so negative values get a proper error instead of a serde one.
    iterations: Option<i64>,
    deadline_ms: Option<i64>,
}

/// Loads a `TrainingConfig` from a JSON file.
///
/// # Errors
/// `TrainErr::Io` if the file cannot be read, otherwise see `from_json_str`.
pub fn load<P: AsRef<Path>>(path: P) -> Result<TrainingConfig> {
    let path = path.as_ref();
    log::debug!("loading training config from {}", path.display());

    let content = fs::read_to_string(path)?;
    from_json_str(&content)
}

/// Parses a `TrainingConfig` from a JSON document.
///
/// # Errors
/// `TrainErr::Json` on malformed documents or unknown fields,
/// `TrainErr::Negative` on negative counts, and whatever
/// `TrainingConfig::new` rejects.
pub fn from_json_str(content: &str) -> Result<TrainingConfig> {
    let file: TrainingFile = serde_json::from_str(content)?;
    let mut builder = TrainingConfig::builder();

    if let Some(points) = file.points {
        builder = builder.points(points);
    }
    if let Some(threshold) = file.threshold {
        builder = builder.threshold(threshold);
    }
    if let Some(speed) = file.speed {
        builder = builder.speed(speed);
    }
    if let Some(iterations) = file.iterations {
        builder = builder.iterations(non_negative("iterations", iterations)? as usize);
    }
    if let Some(ms) = file.deadline_ms {
        builder = builder.deadline(Duration::from_millis(non_negative("deadline_ms", ms)?));
    }

    builder.build()
}

fn non_negative(what: &'static str, value: i64) -> Result<u64> {
    u64::try_from(value).map_err(|_| TrainErr::Negative { what, value })
}
