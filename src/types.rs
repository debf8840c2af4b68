//! Core data types for the tag cloud pipeline.

use crate::error::SourceReadFault;
use serde::{Deserialize, Serialize};

/// A normalized word: lowercase, free of separator characters, never empty.
///
/// Using a dedicated type alias keeps signatures readable and makes it easy to
/// swap the representation later.
pub type Token = String;

/// A word together with the number of times it occurs.
///
/// Entries are read out of a [`FrequencyTable`](crate::counter::FrequencyTable)
/// and are never modified afterwards; selection works on owned copies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordEntry {
  /// The normalized token.
  pub word: Token,
  /// Number of occurrences, always at least 1.
  pub count: usize,
}

impl WordEntry {
  /// Creates a new entry.
  pub fn new(word: impl Into<Token>, count: usize) -> Self {
    Self {
      word: word.into(),
      count,
    }
  }
}

/// The words chosen for display, in alphabetical order.
///
/// A `DisplaySet` can only be produced by [`select`](crate::selector::select),
/// which guarantees its size is `min(limit, distinct words)` and that it holds
/// the highest counts of the table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DisplaySet {
  entries: Vec<WordEntry>,
}

impl DisplaySet {
  /// Wraps entries that are already selected and alphabetized.
  pub(crate) fn from_sorted(entries: Vec<WordEntry>) -> Self {
    Self { entries }
  }

  /// The selected entries, alphabetical by word.
  pub fn entries(&self) -> &[WordEntry] {
    &self.entries
  }

  /// Iterates over the entries in display order.
  pub fn iter(&self) -> std::slice::Iter<'_, WordEntry> {
    self.entries.iter()
  }

  /// Number of selected words.
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Returns `true` when nothing was selected.
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// The `(min, max)` count over the selected entries, or `None` when empty.
  pub fn scale_range(&self) -> Option<ScaleRange> {
    ScaleRange::over(&self.entries)
  }
}

impl<'a> IntoIterator for &'a DisplaySet {
  type Item = &'a WordEntry;
  type IntoIter = std::slice::Iter<'a, WordEntry>;

  fn into_iter(self) -> Self::IntoIter {
    self.entries.iter()
  }
}

/// Smallest and largest count among the displayed words.
///
/// Computed over the display set only, never over the whole frequency table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleRange {
  pub min_count: usize,
  pub max_count: usize,
}

impl ScaleRange {
  /// Computes the range over a slice of entries. Returns `None` for an empty slice.
  pub fn over(entries: &[WordEntry]) -> Option<Self> {
    let min_count = entries.iter().map(|e| e.count).min()?;
    let max_count = entries.iter().map(|e| e.count).max()?;
    Some(Self {
      min_count,
      max_count,
    })
  }

  /// Returns `true` when every displayed word shares one count.
  pub fn is_flat(&self) -> bool {
    self.min_count == self.max_count
  }
}

/// One rendered word: the `(word, count, font size)` triple handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudEntry {
  pub word: Token,
  pub count: usize,
  pub font_size: u32,
}

/// The result of one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cloud {
  /// Sized entries in alphabetical order.
  pub entries: Vec<CloudEntry>,
  /// Count range the font sizes were scaled against. `None` when `entries` is empty.
  pub range: Option<ScaleRange>,
  /// Number of distinct words in the source.
  pub distinct_words: usize,
  /// Number of tokens read from the source.
  pub total_tokens: usize,
  /// Set when the source could only be read partially. The cloud is still
  /// built from everything read before the fault.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub fault: Option<SourceReadFault>,
}

impl Cloud {
  /// Number of entries in the cloud.
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Returns `true` when the cloud has no entries.
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}
