use std::time::{Duration, Instant};

pub fn time_fn<F: FnOnce() -> T, T>(f: F) -> (Duration, T) {
  let start = Instant::now();
  let result = f();
  (start.elapsed(), result)
}

/// A wall-clock cutoff measured from the moment it was created.
#[derive(Clone, Copy, Debug)]
pub struct Deadline {
  start: Instant,
  budget: Duration,
}

impl Deadline {
  pub fn after(budget: Duration) -> Self {
    Self { start: Instant::now(), budget }
  }

  pub fn elapsed(&self) -> Duration {
    self.start.elapsed()
  }

  /// True once at least `budget` has elapsed. A zero budget has always passed.
  pub fn passed(&self) -> bool {
    self.elapsed() >= self.budget
  }
}
