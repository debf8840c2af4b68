//! Word frequency counting.

use crate::types::{Token, WordEntry};
use serde::Serialize;
use std::collections::HashMap;

/// Mapping from token to occurrence count.
///
/// Built in one pass and read-only afterwards. Every count is at least 1 and
/// the table never holds an empty key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FrequencyTable {
  counts: HashMap<Token, usize>,
}

impl FrequencyTable {
  /// Counts a sequence of tokens.
  ///
  /// Empty strings are skipped; a token sequence with nothing in it yields an
  /// empty table.
  pub fn from_tokens<I, S>(tokens: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<Token>,
  {
    let mut counts: HashMap<Token, usize> = HashMap::new();

    for token in tokens {
      let token = token.into();
      if token.is_empty() {
        continue;
      }
      *counts.entry(token).or_insert(0) += 1;
    }

    Self { counts }
  }

  /// Count for `word`, if it occurred.
  pub fn get(&self, word: &str) -> Option<usize> {
    self.counts.get(word).copied()
  }

  /// Number of distinct words.
  pub fn len(&self) -> usize {
    self.counts.len()
  }

  pub fn is_empty(&self) -> bool {
    self.counts.is_empty()
  }

  /// Sum of all counts.
  pub fn total(&self) -> usize {
    self.counts.values().sum()
  }

  /// Reads the table out as owned entries, in no particular order.
  pub fn entries(&self) -> Vec<WordEntry> {
    self
      .counts
      .iter()
      .map(|(word, &count)| WordEntry::new(word.clone(), count))
      .collect()
  }
}

impl<S: Into<Token>> FromIterator<S> for FrequencyTable {
  fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
    Self::from_tokens(iter)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_term_frequencies() {
    let table = FrequencyTable::from_tokens(vec!["the", "cat", "sat", "the", "cat", "ran"]);
    assert_eq!(table.len(), 4);
    assert_eq!(table.get("the"), Some(2));
    assert_eq!(table.get("cat"), Some(2));
    assert_eq!(table.get("sat"), Some(1));
    assert_eq!(table.get("ran"), Some(1));
    assert_eq!(table.get("dog"), None);
    assert_eq!(table.total(), 6);
  }

  #[test]
  fn test_empty_tokens() {
    let table = FrequencyTable::from_tokens(Vec::<String>::new());
    assert!(table.is_empty());
    assert!(table.entries().is_empty());
  }

  #[test]
  fn test_order_independent() {
    let forward: FrequencyTable = ["a", "b", "a", "c"].into_iter().collect();
    let backward: FrequencyTable = ["c", "a", "b", "a"].into_iter().collect();
    assert_eq!(forward, backward);
  }

  #[test]
  fn test_skips_empty_keys() {
    let table = FrequencyTable::from_tokens(vec!["", "word", ""]);
    assert_eq!(table.len(), 1);
    assert_eq!(table.get(""), None);
  }
}
