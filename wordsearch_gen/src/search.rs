//! Depth-first branch-and-bound search over place/skip decisions.
//!
//! Words are visited in a fixed order. At each word the controller first tries
//! every ranked candidate placement, then tries leaving the word out. The best
//! result seen so far (most words placed, then most overlap) is kept as the
//! incumbent, and a subtree is abandoned when even placing every remaining word
//! could not beat the incumbent's placed count. The search stops expanding as
//! soon as the time budget runs out and reports the incumbent at that point.

use std::time::Duration;

use tracing::{debug, info};
use util::{grid::Grid, time::Deadline};

use crate::{
  candidates::ranked_candidates,
  config::SearchConfig,
  placement::{place, unplace, LetterGrid, WordPlacement},
  score::OccupancyTracker,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
  /// Search nodes evaluated.
  pub nodes: u64,
  /// Nodes whose children were cut off by the placed-count bound.
  pub pruned: u64,
  /// Times the incumbent was replaced.
  pub improvements: u64,
  /// Whether the deadline stopped the search before it was exhausted.
  pub timed_out: bool,
  pub elapsed: Duration,
}

/// The best board found so far.
#[derive(Clone, Debug)]
pub struct Incumbent {
  pub grid: LetterGrid,
  pub placements: Vec<WordPlacement>,
  pub overlap_score: u32,
}

impl Incumbent {
  fn empty(config: &SearchConfig) -> Self {
    Self {
      grid: Grid::new(config.cols, config.rows),
      placements: vec![],
      overlap_score: 0,
    }
  }

  pub fn num_placed(&self) -> usize {
    self.placements.len()
  }
}

pub struct SearchController<'a> {
  config: SearchConfig,
  words: &'a [String],
  order: Vec<usize>,

  grid: LetterGrid,
  placements: Vec<WordPlacement>,
  occupancy: OccupancyTracker,

  best: Incumbent,
  stats: SearchStats,
}

impl<'a> SearchController<'a> {
  /// `order` holds indices into `words`, in the order they are attempted.
  /// Indices past the end of `words` are dropped.
  pub(crate) fn new(config: SearchConfig, words: &'a [String], mut order: Vec<usize>) -> Self {
    order.retain(|&id| id < words.len());
    Self {
      config,
      words,
      order,
      grid: Grid::new(config.cols, config.rows),
      placements: Vec::with_capacity(words.len()),
      occupancy: OccupancyTracker::new(config.rows, config.cols),
      best: Incumbent::empty(&config),
      stats: SearchStats::default(),
    }
  }

  /// Runs the search until it is exhausted or the time budget elapses.
  pub fn run(mut self) -> (Incumbent, SearchStats) {
    debug!(
      "Searching {}x{} grid for {} words with a {}ms budget",
      self.config.rows,
      self.config.cols,
      self.order.len(),
      self.config.time_budget.as_millis()
    );

    let deadline = Deadline::after(self.config.time_budget);
    self.search(0, &deadline);
    self.stats.elapsed = deadline.elapsed();

    info!(
      "Search finished: placed {}/{} words, overlap {}, {} nodes, {} pruned, timed out: {}",
      self.best.num_placed(),
      self.order.len(),
      self.best.overlap_score,
      self.stats.nodes,
      self.stats.pruned,
      self.stats.timed_out
    );
    (self.best, self.stats)
  }

  fn timed_out(&mut self, deadline: &Deadline) -> bool {
    if !self.stats.timed_out && deadline.passed() {
      self.stats.timed_out = true;
    }
    self.stats.timed_out
  }

  fn evaluate_node(&mut self) {
    let placed = self.placements.len();
    let overlap = self.occupancy.score();
    if (placed, overlap) > (self.best.num_placed(), self.best.overlap_score) {
      self.stats.improvements += 1;
      debug!("New best: {placed} words placed, overlap {overlap}");
      self.best = Incumbent {
        grid: self.grid.clone(),
        placements: self.placements.clone(),
        overlap_score: overlap,
      };
    }
  }

  fn search(&mut self, index: usize, deadline: &Deadline) {
    if self.timed_out(deadline) {
      return;
    }
    self.stats.nodes += 1;
    self.evaluate_node();

    if index >= self.order.len() {
      return;
    }

    let remaining = self.order.len() - index;
    if self.placements.len() + remaining <= self.best.num_placed() {
      self.stats.pruned += 1;
      return;
    }

    let words = self.words;
    let Some(word) = self.order.get(index).and_then(|&id| words.get(id)) else {
      return;
    };

    for candidate in ranked_candidates(&self.grid, word) {
      if self.timed_out(deadline) {
        return;
      }

      let written = place(&mut self.grid, word, candidate.origin, candidate.direction);
      let placement = WordPlacement::new(word.clone(), candidate.origin, candidate.direction);
      self.occupancy.add(&placement);
      self.placements.push(placement);

      self.search(index + 1, deadline);

      if let Some(placement) = self.placements.pop() {
        self.occupancy.remove(&placement);
      }
      unplace(&mut self.grid, &written);
    }

    if !self.timed_out(deadline) {
      self.search(index + 1, deadline);
    }
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use std::time::Duration;

  use googletest::prelude::*;
  use rand::{rngs::StdRng, Rng, SeedableRng};
  use util::{
    grid::{Grid, Gridlike},
    pos::Pos,
  };

  use crate::{
    config::SearchConfig,
    direction::Direction,
    order::word_order,
    placement::{can_place, place, unplace, LetterGrid, WordPlacement},
    score::overlap_score,
  };

  use super::SearchController;

  fn words(words: &[&str]) -> Vec<String> {
    words.iter().map(|word| (*word).to_owned()).collect()
  }

  fn run(words: &[String], required: &[bool], rows: u32, cols: u32) -> super::Incumbent {
    let config = SearchConfig::new(rows, cols, Duration::from_secs(30));
    let (best, stats) = SearchController::new(config, words, word_order(words, required)).run();
    expect_false!(stats.timed_out);
    best
  }

  #[gtest]
  fn test_no_words() {
    let best = run(&[], &[], 3, 3);
    expect_that!(best.num_placed(), eq(0));
    expect_true!(best.grid.cells().all(Option::is_none));
  }

  #[gtest]
  fn test_conflicting_words_place_one() {
    // On a 1x3 strip the two words always collide; XYZ comes first in the order.
    let words = words(&["ABC", "XYZ"]);
    let best = run(&words, &[false, false], 1, 3);
    expect_that!(best.num_placed(), eq(1));
    expect_that!(best.placements[0].word, eq("XYZ"));
  }

  #[gtest]
  fn test_required_word_goes_first() {
    let words = words(&["ABC", "XYZ"]);
    let best = run(&words, &[true, false], 1, 3);
    expect_that!(best.num_placed(), eq(1));
    expect_that!(best.placements[0].word, eq("ABC"));
  }

  #[gtest]
  fn test_skips_unfit_word() {
    let words = words(&["ABCD", "XYZ", "ABC"]);
    let best = run(&words, &[false, false, false], 3, 3);
    expect_that!(best.num_placed(), eq(2));
    expect_false!(best.placements.iter().any(|placement| placement.word == "ABCD"));
  }

  #[gtest]
  fn test_best_overlap_tracked() {
    let words = words(&["CAT", "COT"]);
    let best = run(&words, &[false, false], 5, 5);
    expect_that!(best.num_placed(), eq(2));
    expect_that!(best.overlap_score, eq(1));
    expect_that!(best.overlap_score, eq(overlap_score(&best.placements, 5, 5)));
  }

  #[gtest]
  fn test_grid_matches_placements() {
    let words = words(&["CAT", "COT", "TOE", "ACE"]);
    let best = run(&words, &[false, false, false, false], 5, 5);
    for placement in &best.placements {
      for (c, pos) in placement.cells() {
        expect_that!(best.grid.get(pos).cloned().flatten(), some(eq(c)));
      }
    }
    let covered = best
      .grid
      .positions()
      .filter(|&pos| best.grid.get(pos).cloned().flatten().is_some())
      .count();
    let touched: std::collections::HashSet<_> = best
      .placements
      .iter()
      .flat_map(|placement| placement.cells().map(|(_, pos)| pos))
      .collect();
    expect_that!(covered, eq(touched.len()));
  }

  #[gtest]
  fn test_zero_budget() {
    let words = words(&["CAT"]);
    let config = SearchConfig::new(5, 5, Duration::ZERO);
    let (best, stats) = SearchController::new(config, &words, vec![0]).run();
    expect_that!(best.num_placed(), eq(0));
    expect_true!(stats.timed_out);
    expect_that!(stats.nodes, eq(0));
  }

  #[gtest]
  fn test_stats() {
    let words = words(&["CAT", "DOG"]);
    let config = SearchConfig::new(5, 5, Duration::from_secs(30));
    let (_, stats) = SearchController::new(config, &words, vec![1, 0]).run();
    expect_that!(stats.nodes, gt(2));
    expect_that!(stats.improvements, eq(2));
    expect_that!(stats.pruned, gt(0));
  }

  #[gtest]
  fn test_out_of_range_order_ignored() {
    let words = words(&["CAT"]);
    let config = SearchConfig::new(5, 5, Duration::from_secs(30));
    let (best, _) = SearchController::new(config, &words, vec![5]).run();
    expect_that!(best.num_placed(), eq(0));

    let (best, _) = SearchController::new(config, &words, vec![7, 0, 3]).run();
    expect_that!(best.num_placed(), eq(1));
    expect_that!(best.placements[0].word, eq("CAT"));
  }

  /// Most words that fit together, trying every cell and direction for each word.
  fn max_placeable(grid: &mut LetterGrid, words: &[String], index: usize, placed: usize, best: &mut usize) {
    *best = (*best).max(placed);
    if index == words.len() || placed + words.len() - index <= *best {
      return;
    }
    let word = &words[index];
    let origins: Vec<_> = grid.positions().collect();
    for origin in origins {
      for direction in Direction::ALL {
        if can_place(grid, word, origin, direction).is_some() {
          let written = place(grid, word, origin, direction);
          max_placeable(grid, words, index + 1, placed + 1, best);
          unplace(grid, &written);
        }
      }
    }
    max_placeable(grid, words, index + 1, placed, best);
  }

  #[gtest]
  fn test_places_as_many_words_as_fit() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..200 {
      let rows = rng.random_range(1..=4);
      let cols = rng.random_range(1..=4);
      let num_words = rng.random_range(0..=4);
      let words: Vec<String> = (0..num_words)
        .map(|_| {
          (0..rng.random_range(1..=3))
            .map(|_| ['A', 'B', 'C'][rng.random_range(0..3)])
            .collect()
        })
        .collect();
      let required: Vec<bool> = (0..num_words).map(|_| rng.random_bool(0.5)).collect();

      let mut expected = 0;
      max_placeable(&mut Grid::new(cols, rows), &words, 0, 0, &mut expected);

      let best = run(&words, &required, rows, cols);
      expect_that!(
        best.num_placed(),
        eq(expected),
        "words {words:?}, required {required:?}, {rows}x{cols}"
      );
    }
  }

  #[gtest]
  fn test_stops_improving_overlap_once_count_is_reached() {
    // The first full arrangement found has no overlap. After that, every branch
    // is cut off by the placed count, so a sharing arrangement is never reached.
    let words = words(&["ABC", "CD"]);
    let best = run(&words, &[false, false], 1, 5);
    expect_that!(best.num_placed(), eq(2));
    expect_that!(best.overlap_score, eq(0));
    expect_that!(
      best.placements,
      container_eq([
        WordPlacement::new("ABC".to_owned(), Pos::from_row_col(0, 2), Direction::EAST),
        WordPlacement::new("CD".to_owned(), Pos::from_row_col(0, 1), Direction::WEST),
      ])
    );

    let mut grid: LetterGrid = Grid::new(5, 1);
    place(&mut grid, "ABC", Pos::from_row_col(0, 0), Direction::EAST);
    expect_that!(
      can_place(&grid, "CD", Pos::from_row_col(0, 2), Direction::EAST),
      some(eq(1))
    );
    let sharing = [
      WordPlacement::new("ABC".to_owned(), Pos::from_row_col(0, 0), Direction::EAST),
      WordPlacement::new("CD".to_owned(), Pos::from_row_col(0, 2), Direction::EAST),
    ];
    expect_that!(overlap_score(&sharing, 1, 5), eq(1));
  }
}
