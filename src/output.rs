use std::io::Write;

use bitcode::{Decode, Encode};
use itertools::Itertools;
use serde::Serialize;
use util::{error::WordSearchResult, grid::Gridlike};
use wordsearch_gen::{PuzzleResult, WordPlacement};

use crate::args::OutputFormat;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Encode, Decode)]
pub struct PlacementRecord {
  pub word: String,
  pub row: i32,
  pub col: i32,
  pub dr: i32,
  pub dc: i32,
}

impl From<&WordPlacement> for PlacementRecord {
  fn from(placement: &WordPlacement) -> Self {
    Self {
      word: placement.word.clone(),
      row: placement.row(),
      col: placement.col(),
      dr: placement.direction.d_row(),
      dc: placement.direction.d_col(),
    }
  }
}

/// The serialized form of a finished puzzle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Encode, Decode)]
pub struct PuzzleRecord {
  pub rows: u32,
  pub cols: u32,
  pub grid: Vec<String>,
  pub placements: Vec<PlacementRecord>,
  pub placed_words: Vec<String>,
  pub unplaced_words: Vec<String>,
  pub num_placed: u32,
  pub overlap_score: u32,
}

impl From<&PuzzleResult> for PuzzleRecord {
  fn from(result: &PuzzleResult) -> Self {
    Self {
      rows: result.grid.height(),
      cols: result.grid.width(),
      grid: (0..result.grid.height())
        .map(|y| result.grid.iter_row(y).collect())
        .collect(),
      placements: result.placements.iter().map(PlacementRecord::from).collect(),
      placed_words: result.placed_words.clone(),
      unplaced_words: result.unplaced_words.clone(),
      num_placed: result.num_placed as u32,
      overlap_score: result.overlap_score,
    }
  }
}

/// Puzzle grid, answer key, and word lists as plain text.
pub fn render_text(result: &PuzzleResult) -> String {
  let key = result.solution_grid().map(|cell| cell.unwrap_or('.'));
  let placements = result
    .placements
    .iter()
    .map(|placement| {
      format!(
        "  {} at {} going {}",
        placement.word, placement.origin, placement.direction
      )
    })
    .join("\n");

  format!(
    "{}\nSolution:\n{}\nPlaced ({}):\n{}\nUnplaced ({}): {}\n",
    result.grid,
    key,
    result.num_placed,
    placements,
    result.unplaced_words.len(),
    result.unplaced_words.join(", ")
  )
}

pub fn write_result(
  result: &PuzzleResult,
  format: OutputFormat,
  writer: &mut impl Write,
) -> WordSearchResult {
  match format {
    OutputFormat::Json => {
      serde_json::to_writer_pretty(&mut *writer, &PuzzleRecord::from(result))?;
      writeln!(writer)?;
    }
    OutputFormat::Text => write!(writer, "{}", render_text(result))?,
    OutputFormat::Bin => writer.write_all(&bitcode::encode(&PuzzleRecord::from(result)))?,
  }
  writer.flush()?;
  Ok(())
}
