use itertools::Itertools;
use tracing::debug;
use util::error::{WordSearchError, WordSearchResult};

/// Prefix marking a word that should be attempted before all optional words.
const REQUIRED_PREFIX: char = '*';

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordEntry {
  pub word: String,
  pub required: bool,
}

impl WordEntry {
  /// Keeps only ASCII letters, uppercased.
  pub fn canonicalize_word(raw: &str) -> String {
    raw
      .chars()
      .filter(|c| c.is_ascii_alphabetic())
      .map(|c| c.to_ascii_uppercase())
      .collect()
  }

  /// Parses one trimmed, non-blank input line. Returns `None` if nothing is left
  /// after normalization.
  fn parse_line(line: &str) -> Option<Self> {
    let (required, raw) = match line.strip_prefix(REQUIRED_PREFIX) {
      Some(rest) => (true, rest),
      None => (false, line),
    };

    let word = Self::canonicalize_word(raw);
    if word.is_empty() {
      debug!("Dropping line \"{line}\": no letters after normalization");
      return None;
    }
    Some(Self { word, required })
  }
}

#[derive(Clone, Debug, Default)]
pub struct WordList {
  entries: Vec<WordEntry>,
}

impl WordList {
  /// Parses raw input lines, one word per line. Lines starting with `*` are
  /// required words.
  pub fn parse_lines<S: AsRef<str>>(lines: impl IntoIterator<Item = S>) -> WordSearchResult<Self> {
    let lines: Vec<_> = lines
      .into_iter()
      .map(|line| line.as_ref().trim_matches([' ', '\t']).to_owned())
      .filter(|line| !line.is_empty())
      .collect();

    if lines.is_empty() {
      return Err(
        WordSearchError::Input(
          "Provide words (one per line). Prefix * for must-include words.".to_owned(),
        )
        .into(),
      );
    }

    let entries: Vec<_> = lines
      .iter()
      .filter_map(|line| WordEntry::parse_line(line))
      .collect();
    if entries.is_empty() {
      return Err(
        WordSearchError::Input("No valid words found after normalization".to_owned()).into(),
      );
    }

    debug!(
      "Parsed {} words ({} required): {}",
      entries.len(),
      entries.iter().filter(|entry| entry.required).count(),
      entries.iter().map(|entry| entry.word.as_str()).join(", ")
    );
    Ok(Self { entries })
  }

  pub fn words(&self) -> Vec<String> {
    self.entries.iter().map(|entry| entry.word.clone()).collect()
  }

  pub fn required_flags(&self) -> Vec<bool> {
    self.entries.iter().map(|entry| entry.required).collect()
  }

  pub fn max_word_len(&self) -> usize {
    self
      .entries
      .iter()
      .map(|entry| entry.word.len())
      .max()
      .unwrap_or(0)
  }

  pub fn total_letters(&self) -> usize {
    self.entries.iter().map(|entry| entry.word.len()).sum()
  }
}
