use std::{
    cell::Cell,
    time::{Duration, Instant},
};

/// A monotonic time source.
///
/// `now` returns the time elapsed since an arbitrary, fixed origin. Only
/// differences between two readings are meaningful.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall-clock time, backed by `Instant`.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// A clock that only moves when read or told to.
///
/// Every call to `now` returns the current reading and then advances it by
/// `tick`, so a trainer reading the clock once per step sees time grow by
/// exactly `tick` per step.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
    tick: Duration,
}

impl ManualClock {
    /// Returns a new `ManualClock` starting at zero.
    ///
    /// # Arguments
    /// * `tick` - How much the clock advances after each reading.
    pub fn new(tick: Duration) -> Self {
        Self {
            now: Cell::new(Duration::ZERO),
            tick,
        }
    }

    /// A clock that never moves on its own.
    pub fn frozen() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        let now = self.now.get();
        self.now.set(now + self.tick);
        now
    }
}

/// A time budget measured from the moment it was started.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    started_at: Duration,
    budget: Duration,
}

impl Deadline {
    /// Starts counting `budget` from the clock's current reading.
    pub fn start<C: Clock + ?Sized>(clock: &C, budget: Duration) -> Self {
        Self {
            started_at: clock.now(),
            budget,
        }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    pub fn elapsed<C: Clock + ?Sized>(&self, clock: &C) -> Duration {
        clock.now().saturating_sub(self.started_at)
    }

    /// Reads the clock once and compares the elapsed time to the budget.
    ///
    /// # Returns
    /// `Ok(elapsed)` while within budget, `Err(elapsed)` once strictly more
    /// than the budget has passed.
    pub fn check<C: Clock + ?Sized>(&self, clock: &C) -> Result<Duration, Duration> {
        let elapsed = self.elapsed(clock);
        if elapsed > self.budget {
            Err(elapsed)
        } else {
            Ok(elapsed)
        }
    }
}
