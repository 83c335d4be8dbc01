use std::collections::HashSet;

use rand::Rng;
use tracing::info;
use util::grid::{Grid, MutGridlike};

use crate::{
  config::SearchConfig,
  order::word_order,
  placement::{LetterGrid, WordPlacement},
  search::{SearchController, SearchStats},
};

/// A finished puzzle: every cell holds a letter.
#[derive(Clone, Debug)]
pub struct PuzzleResult {
  pub grid: Grid<char>,
  pub placements: Vec<WordPlacement>,
  pub placed_words: Vec<String>,
  pub unplaced_words: Vec<String>,
  pub num_placed: usize,
  pub overlap_score: u32,
  pub stats: SearchStats,
}

impl PuzzleResult {
  /// The answer key: only cells covered by a placed word hold a letter.
  pub fn solution_grid(&self) -> LetterGrid {
    let mut key = self.grid.map(|_| None);
    for placement in &self.placements {
      for (c, pos) in placement.cells() {
        if let Some(cell) = key.get_mut(pos) {
          *cell = Some(c);
        }
      }
    }
    key
  }
}

/// Builds a word search for `words`, filling leftover cells with letters drawn
/// from a freshly seeded generator.
///
/// `required` runs parallel to `words` and only moves flagged words to the front
/// of the search order; it never forces a word onto the board.
pub fn generate(words: &[String], required: &[bool], config: SearchConfig) -> PuzzleResult {
  generate_with_rng(words, required, config, &mut rand::rng())
}

pub fn generate_with_rng<R: Rng>(
  words: &[String],
  required: &[bool],
  config: SearchConfig,
  rng: &mut R,
) -> PuzzleResult {
  let order = word_order(words, required);
  let (best, stats) = SearchController::new(config, words, order).run();

  let placed_set: HashSet<_> = best
    .placements
    .iter()
    .map(|placement| placement.word.as_str())
    .collect();
  let (placed_words, unplaced_words): (Vec<_>, Vec<_>) = words
    .iter()
    .cloned()
    .partition(|word| placed_set.contains(word.as_str()));

  if !unplaced_words.is_empty() {
    info!("Could not place: {}", unplaced_words.join(", "));
  }

  PuzzleResult {
    grid: fill_empty(&best.grid, rng),
    num_placed: best.num_placed(),
    overlap_score: best.overlap_score,
    placements: best.placements,
    placed_words,
    unplaced_words,
    stats,
  }
}

pub fn random_letter<R: Rng>(rng: &mut R) -> char {
  char::from(rng.random_range(b'A'..=b'Z'))
}

/// Replaces every empty cell with an independently drawn letter.
pub fn fill_empty<R: Rng>(grid: &LetterGrid, rng: &mut R) -> Grid<char> {
  grid.map(|cell| cell.unwrap_or_else(|| random_letter(rng)))
}
