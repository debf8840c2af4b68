//! Top-N word selection.
//!
//! Selection uses two separate orderings. The first ranks by count and
//! decides which words make the cut; the second puts the survivors in
//! alphabetical order for display. Words tied at the cutoff count are admitted
//! in ascending alphabetical order, so the result is reproducible.

use crate::counter::FrequencyTable;
use crate::types::{DisplaySet, WordEntry};
use std::cmp::Ordering;

/// Picks the `limit` most frequent words of `table`.
///
/// The returned set has `min(limit, table.len())` entries in alphabetical
/// order. A zero limit or an empty table gives an empty set.
///
/// ```rust
/// use tagcloud::prelude::*;
///
/// let table = FrequencyTable::from_tokens(["fox", "cat", "dog", "elk", "cat", "dog", "elk"]);
/// let display = select(&table, 2);
/// let words: Vec<&str> = display.iter().map(|e| e.word.as_str()).collect();
/// assert_eq!(words, vec!["cat", "dog"]);
/// ```
pub fn select(table: &FrequencyTable, limit: usize) -> DisplaySet {
  if limit == 0 || table.is_empty() {
    return DisplaySet::default();
  }

  // Pass 1: rank by count, ties broken alphabetically, then cut.
  let mut ranked = table.entries();
  ranked.sort_by(by_rank);
  ranked.truncate(limit);

  // Pass 2: display order.
  ranked.sort_by(by_word);

  log::debug!("selected {} of {} words", ranked.len(), table.len());
  DisplaySet::from_sorted(ranked)
}

/// Count descending, then word ascending.
fn by_rank(a: &WordEntry, b: &WordEntry) -> Ordering {
  b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word))
}

fn by_word(a: &WordEntry, b: &WordEntry) -> Ordering {
  a.word.cmp(&b.word)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn table(counts: &[(&str, usize)]) -> FrequencyTable {
    counts
      .iter()
      .flat_map(|(word, count)| std::iter::repeat(*word).take(*count))
      .collect()
  }

  fn words(display: &DisplaySet) -> Vec<&str> {
    display.iter().map(|e| e.word.as_str()).collect()
  }

  #[test]
  fn test_boundary_tie_break() {
    let t = table(&[("cat", 5), ("dog", 5), ("elk", 5), ("fox", 3)]);
    let display = select(&t, 2);
    assert_eq!(words(&display), vec!["cat", "dog"]);
  }

  #[test]
  fn test_higher_counts_always_included() {
    let t = table(&[("zebra", 9), ("apple", 2), ("mango", 2), ("kiwi", 2)]);
    let display = select(&t, 2);
    assert_eq!(words(&display), vec!["apple", "zebra"]);
  }

  #[test]
  fn test_display_order_is_alphabetical() {
    let t = table(&[("the", 2), ("cat", 2), ("sat", 1), ("ran", 1)]);
    let display = select(&t, 4);
    assert_eq!(words(&display), vec!["cat", "ran", "sat", "the"]);
  }

  #[test]
  fn test_limit_larger_than_table() {
    let t = table(&[("one", 1), ("two", 2)]);
    assert_eq!(select(&t, 50).len(), 2);
  }

  #[test]
  fn test_zero_limit_or_empty_table() {
    let t = table(&[("one", 1)]);
    assert!(select(&t, 0).is_empty());
    assert!(select(&FrequencyTable::default(), 10).is_empty());
  }

  #[test]
  fn test_selection_is_deterministic() {
    let t = table(&[("b", 1), ("a", 1), ("d", 1), ("c", 1), ("e", 1)]);
    let first = select(&t, 3);
    for _ in 0..10 {
      assert_eq!(select(&t, 3), first);
    }
    assert_eq!(words(&first), vec!["a", "b", "c"]);
  }
}
