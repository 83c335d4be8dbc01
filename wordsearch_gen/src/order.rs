use std::cmp::Reverse;

use itertools::Itertools;

/// The sequence in which words are attempted: required words from longest to
/// shortest, then optional words from longest to shortest. Words of equal
/// length are tried in reverse input order. Returns indices into `words`.
///
/// A missing flag counts as optional.
pub fn word_order(words: &[String], required: &[bool]) -> Vec<usize> {
  let is_required = |idx: usize| required.get(idx).copied().unwrap_or(false);
  let by_length_desc = |pass_required: bool| {
    (0..words.len())
      .filter(move |&idx| is_required(idx) == pass_required)
      .sorted_by_key(|&idx| Reverse((words[idx].chars().count(), idx)))
  };

  by_length_desc(true).chain(by_length_desc(false)).collect()
}
