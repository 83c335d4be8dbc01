use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
  Json,
  Text,
  Bin,
}

/// Generates a word search grid that packs in as many of the input words as
/// possible, overlapping them where it can. Words are read one per line; prefix
/// a word with `*` to try it first.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
  /// Grid rows. Estimated from the words unless both --rows and --cols are positive.
  #[arg(long, allow_negative_numbers = true)]
  pub rows: Option<i64>,

  /// Grid columns.
  #[arg(long, allow_negative_numbers = true)]
  pub cols: Option<i64>,

  /// Search time budget in milliseconds. Zero or less skips the search.
  #[arg(long, default_value_t = 2000, allow_negative_numbers = true)]
  pub time_ms: i64,

  /// Word list to read instead of stdin.
  #[arg(long)]
  pub input: Option<PathBuf>,

  /// File to write instead of stdout.
  #[arg(long)]
  pub output: Option<PathBuf>,

  #[arg(long, value_enum, default_value = "json")]
  pub format: OutputFormat,

  /// Seed for the letters filling unused cells.
  #[arg(long)]
  pub seed: Option<u64>,

  #[arg(long, short)]
  pub verbose: bool,
}
