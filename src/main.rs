#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod args;
mod output;

use std::{
  fs::File,
  io::{self, BufRead, BufReader},
  path::Path,
  process::ExitCode,
};

use args::Args;
use clap::Parser;
use output::write_result;
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;
use util::{error::WordSearchResult, time::time_fn};
use word_list::{grid_dimensions, WordList};
use wordsearch_gen::{generate, generate_with_rng, SearchConfig};

fn init_logging(verbose: bool) {
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_target(false)
    .with_writer(io::stderr)
    .init();
}

fn read_lines(input: Option<&Path>) -> WordSearchResult<Vec<String>> {
  Ok(match input {
    Some(path) => BufReader::new(File::open(path)?)
      .lines()
      .collect::<Result<Vec<_>, _>>()?,
    None => io::stdin().lock().lines().collect::<Result<Vec<_>, _>>()?,
  })
}

fn run(args: Args) -> WordSearchResult {
  let words = WordList::parse_lines(read_lines(args.input.as_deref())?)?;
  let (rows, cols) = grid_dimensions(args.rows, args.cols, &words)?;
  let config = SearchConfig::from_millis(rows, cols, args.time_ms);
  let word_texts = words.words();
  let required = words.required_flags();
  info!(
    "Placing {} words on a {rows}x{cols} grid within {}ms",
    word_texts.len(),
    config.time_budget.as_millis()
  );

  let (time, result) = time_fn(|| match args.seed {
    Some(seed) => generate_with_rng(
      &word_texts,
      &required,
      config,
      &mut StdRng::seed_from_u64(seed),
    ),
    None => generate(&word_texts, &required, config),
  });
  info!(
    "Took {}s: placed {} words, {} unplaced, overlap score {}",
    time.as_secs_f32(),
    result.num_placed,
    result.unplaced_words.len(),
    result.overlap_score
  );

  match &args.output {
    Some(path) => write_result(&result, args.format, &mut File::create(path)?),
    None => write_result(&result, args.format, &mut io::stdout().lock()),
  }
}

fn main() -> ExitCode {
  let args = Args::parse();
  init_logging(args.verbose);

  if let Err(err) = run(args) {
    eprintln!("Error: {err}");
    ExitCode::FAILURE
  } else {
    ExitCode::SUCCESS
  }
}
