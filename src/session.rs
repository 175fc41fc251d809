use log::debug;
use tokio::{
    io,
    runtime::Runtime,
    task::{self, JoinError, JoinHandle},
};

use crate::{
    configs::TrainingConfig,
    error::{Result, TrainErr},
    training::{self, Outcome},
};

/// A training run executing in the background.
///
/// The run happens on a blocking thread of the session's own runtime, so the
/// thread that created the session (for instance, a UI event loop) stays free
/// while the trainer works towards its deadline.
pub struct Session {
    runtime: Runtime,
    handle: JoinHandle<Outcome>,
}

impl Session {
    /// Starts training `config` in the background.
    ///
    /// # Arguments
    /// * `config` - The training set and hyperparameters for the run.
    ///
    /// # Returns
    /// A new `Session`, or an io error if the runtime could not be built.
    pub fn new(config: TrainingConfig) -> io::Result<Self> {
        let runtime = Runtime::new()?;
        let handle = runtime.spawn_blocking(move || training::train(&config));
        debug!("training session started");

        Ok(Self { runtime, handle })
    }

    /// Whether the run has finished, without waiting for it.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits until the run is over.
    ///
    /// # Returns
    /// The outcome of the run.
    ///
    /// # Errors
    /// `TrainErr::Join` if the training task panicked.
    pub fn wait(self) -> Result<Outcome> {
        let Self { runtime, handle } = self;
        runtime.block_on(handle).map_err(join_err)
    }
}

/// Trains `config` on tokio's blocking pool, for callers already running
/// inside a runtime.
///
/// # Errors
/// `TrainErr::Join` if the training task panicked.
pub async fn train_async(config: TrainingConfig) -> Result<Outcome> {
    task::spawn_blocking(move || training::train(&config))
        .await
        .map_err(join_err)
}

fn join_err(e: JoinError) -> TrainErr {
    TrainErr::Join(e.to_string())
}
