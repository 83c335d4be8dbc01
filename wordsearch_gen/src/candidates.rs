use std::cmp::Reverse;

use itertools::iproduct;
use util::pos::Pos;

use crate::{
  direction::Direction,
  placement::{can_place, LetterGrid},
};

/// A valid spot for a word, with the number of letters it shares with what is
/// already on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
  pub origin: Pos,
  pub direction: Direction,
  pub overlap: u32,
}

/// Every placement of `word` that fits the current grid, best first: most
/// overlap, then closest (Manhattan) to the center. Equal candidates keep
/// row-major, then direction, order.
pub fn ranked_candidates(grid: &LetterGrid, word: &str) -> Vec<Candidate> {
  let center = grid.center();
  let mut candidates: Vec<_> = iproduct!(grid.positions(), Direction::ALL)
    .filter_map(|(origin, direction)| {
      can_place(grid, word, origin, direction).map(|overlap| Candidate { origin, direction, overlap })
    })
    .collect();

  candidates.sort_by_key(|candidate| {
    (
      Reverse(candidate.overlap),
      candidate.origin.manhattan_distance(center),
    )
  });
  candidates
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use googletest::prelude::*;
  use util::{grid::Grid, pos::Pos};

  use crate::{
    direction::Direction,
    placement::{tests::letter_grid, LetterGrid},
  };

  use super::ranked_candidates;

  #[gtest]
  fn test_empty_grid_prefers_center() {
    let grid: LetterGrid = Grid::new(3, 3);
    let candidates = ranked_candidates(&grid, "AB");

    // One candidate per ordered pair of adjacent cells.
    expect_that!(candidates.len(), eq(40));
    expect_that!(candidates[0].origin, eq(Pos::from_row_col(1, 1)));
    expect_that!(candidates[0].direction, eq(Direction::EAST));
    expect_true!(candidates.iter().all(|candidate| candidate.overlap == 0));

    let center = Pos::from_row_col(1, 1);
    let distances: Vec<_> = candidates
      .iter()
      .map(|candidate| candidate.origin.manhattan_distance(center))
      .collect();
    expect_true!(distances.windows(2).all(|pair| pair[0] <= pair[1]));
  }

  #[gtest]
  fn test_overlap_ranks_first() {
    let grid = letter_grid(&["A..", "...", "..."]);
    let candidates = ranked_candidates(&grid, "AB");

    // Any placement putting B on the A is rejected.
    expect_that!(candidates.len(), eq(37));
    expect_that!(
      candidates
        .iter()
        .take(4)
        .map(|candidate| (candidate.overlap, candidate.origin, candidate.direction))
        .collect::<Vec<_>>(),
      container_eq([
        (1, Pos::from_row_col(0, 0), Direction::EAST),
        (1, Pos::from_row_col(0, 0), Direction::SOUTH),
        (1, Pos::from_row_col(0, 0), Direction::SOUTH_EAST),
        (0, Pos::from_row_col(1, 1), Direction::EAST),
      ])
    );
  }

  #[gtest]
  fn test_word_too_long() {
    let grid: LetterGrid = Grid::new(5, 5);
    expect_that!(ranked_candidates(&grid, "SUPERCALIFRAGILISTIC"), empty());
  }

  #[gtest]
  fn test_fully_blocked() {
    let grid = letter_grid(&["XYZ"]);
    expect_that!(ranked_candidates(&grid, "ABC"), empty());
    expect_that!(ranked_candidates(&grid, "ZYX").len(), eq(1));
  }
}
