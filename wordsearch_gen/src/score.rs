use util::grid::{Grid, MutGridlike};

use crate::placement::WordPlacement;

/// Sum over all cells of `max(0, occupancy - 1)`, where occupancy is how many
/// placements cover the cell. Recomputed from scratch; letters falling outside
/// a `rows` x `cols` grid are ignored.
pub fn overlap_score(placements: &[WordPlacement], rows: u32, cols: u32) -> u32 {
  let mut occupancy = OccupancyTracker::new(rows, cols);
  for placement in placements {
    occupancy.add(placement);
  }
  occupancy.score()
}

/// Per-cell occupancy counts kept in step with the placements on the board, so
/// the overlap score is available without replaying every placement.
#[derive(Clone, Debug)]
pub struct OccupancyTracker {
  counts: Grid<u32>,
  score: u32,
}

impl OccupancyTracker {
  pub fn new(rows: u32, cols: u32) -> Self {
    Self { counts: Grid::new(cols, rows), score: 0 }
  }

  pub fn score(&self) -> u32 {
    self.score
  }

  pub fn add(&mut self, placement: &WordPlacement) {
    for (_, pos) in placement.cells() {
      if let Some(count) = self.counts.get_mut(pos) {
        if *count > 0 {
          self.score += 1;
        }
        *count += 1;
      }
    }
  }

  /// Reverses a previous `add` of the same placement.
  pub fn remove(&mut self, placement: &WordPlacement) {
    for (_, pos) in placement.cells() {
      if let Some(count) = self.counts.get_mut(pos) {
        debug_assert!(*count > 0);
        *count = count.saturating_sub(1);
        if *count > 0 {
          self.score -= 1;
        }
      }
    }
  }
}
