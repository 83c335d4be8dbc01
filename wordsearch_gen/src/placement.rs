use util::{
  grid::{Grid, Gridlike, MutGridlike},
  pos::Pos,
};

use crate::direction::Direction;

/// A grid under construction: `None` cells are still empty.
pub type LetterGrid = Grid<Option<char>>;

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct WordPlacement {
  pub word: String,
  pub origin: Pos,
  pub direction: Direction,
}

impl WordPlacement {
  pub fn new(word: String, origin: Pos, direction: Direction) -> Self {
    Self { word, origin, direction }
  }

  pub fn row(&self) -> i32 {
    self.origin.row()
  }

  pub fn col(&self) -> i32 {
    self.origin.col()
  }

  /// Each letter of the word paired with the cell it occupies.
  pub fn cells(&self) -> impl Iterator<Item = (char, Pos)> + '_ {
    letter_positions(&self.word, self.origin, self.direction)
  }
}

pub fn letter_positions(
  word: &str,
  origin: Pos,
  direction: Direction,
) -> impl Iterator<Item = (char, Pos)> + '_ {
  word
    .chars()
    .enumerate()
    .map(move |(idx, c)| (c, origin + idx as i32 * direction.delta()))
}

/// Checks whether `word` fits at `origin` along `direction`. Every cell must be
/// in bounds and either empty or already holding the same letter. On success,
/// returns how many letters were already present.
pub fn can_place(grid: &LetterGrid, word: &str, origin: Pos, direction: Direction) -> Option<u32> {
  letter_positions(word, origin, direction).try_fold(0, |overlap, (c, pos)| match grid.get(pos)? {
    None => Some(overlap),
    Some(existing) if *existing == c => Some(overlap + 1),
    Some(_) => None,
  })
}

/// Writes `word` into the grid. The caller must have checked it with
/// `can_place`. Returns the cells that were empty before, which `unplace`
/// clears again.
pub fn place(grid: &mut LetterGrid, word: &str, origin: Pos, direction: Direction) -> Vec<Pos> {
  letter_positions(word, origin, direction)
    .filter_map(|(c, pos)| {
      let cell = grid.get_mut(pos)?;
      debug_assert!(cell.is_none_or(|existing| existing == c));
      cell.is_none().then(|| {
        *cell = Some(c);
        pos
      })
    })
    .collect()
}

pub fn unplace(grid: &mut LetterGrid, written: &[Pos]) {
  for &pos in written {
    if let Some(cell) = grid.get_mut(pos) {
      *cell = None;
    }
  }
}
