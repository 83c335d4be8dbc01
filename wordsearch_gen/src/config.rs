use std::time::Duration;

/// Fixed parameters of one search. Built once and never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
  pub rows: u32,
  pub cols: u32,
  pub time_budget: Duration,
}

impl SearchConfig {
  pub fn new(rows: u32, cols: u32, time_budget: Duration) -> Self {
    Self { rows, cols, time_budget }
  }

  /// A non-positive budget means no search at all.
  pub fn from_millis(rows: u32, cols: u32, time_ms: i64) -> Self {
    Self::new(rows, cols, Duration::from_millis(time_ms.max(0) as u64))
  }
}
