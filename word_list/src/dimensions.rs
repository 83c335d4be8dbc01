use util::error::{WordSearchError, WordSearchResult};

use crate::WordList;

/// Smallest side length an estimated grid is given.
pub const MIN_ESTIMATED_SIDE: u32 = 10;

/// Largest number of cells a grid may have.
pub const MAX_GRID_CELLS: u64 = 1 << 22;

/// Side length of a square grid large enough to comfortably hold `words`: at
/// least the longest word, and a little more than the square root of the total
/// letter count.
pub fn estimate_side(words: &WordList) -> u32 {
  let total_letters = words.total_letters() as f64;
  let estimated = (words.max_word_len() as u32).max(total_letters.sqrt().ceil() as u32 + 2);
  estimated.max(MIN_ESTIMATED_SIDE)
}

/// Resolves the (rows, cols) to search over. Explicit dimensions are used only
/// when both are positive; otherwise a square grid is estimated from the words.
/// Fails if the grid would exceed `MAX_GRID_CELLS`.
pub fn grid_dimensions(
  rows: Option<i64>,
  cols: Option<i64>,
  words: &WordList,
) -> WordSearchResult<(u32, u32)> {
  let (rows, cols) = match (rows, cols) {
    (Some(rows), Some(cols)) if rows > 0 && cols > 0 => (rows as u64, cols as u64),
    _ => {
      let side = estimate_side(words) as u64;
      (side, side)
    }
  };

  match rows.checked_mul(cols) {
    Some(cells) if cells <= MAX_GRID_CELLS => Ok((rows as u32, cols as u32)),
    _ => Err(
      WordSearchError::Input(format!(
        "A {rows}x{cols} grid is too large (at most {MAX_GRID_CELLS} cells)"
      ))
      .into(),
    ),
  }
}
