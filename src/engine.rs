//! The pipeline that turns text into a sized, ordered tag cloud.

use crate::counter::FrequencyTable;
use crate::error::SourceReadFault;
use crate::scaler::FontScale;
use crate::selector::select;
use crate::tokenizer::{tokenize, tokenize_reader, TokenStream};
use crate::types::{Cloud, CloudEntry, DisplaySet};
use std::io::BufRead;

/// Builds tag clouds with a fixed font scale.
///
/// `TagCloud` owns no state between runs. Each call tokenizes, counts,
/// selects and scales from scratch, so the same input and limit always give
/// the same cloud.
///
/// Create one with [`TagCloud::new`] for the standard 11 to 48 scale, or with
/// [`TagCloudBuilder`] to change it.
///
/// # Examples
///
/// ```rust
/// use tagcloud::prelude::*;
///
/// let engine = TagCloud::builder()
///     .font_scale(FontScale::new(10, 20, 12).unwrap())
///     .build();
///
/// let cloud = engine.generate("a b b b b b b b b b b", 2);
/// assert_eq!(cloud.entries[0].word, "a");
/// assert_eq!(cloud.entries[0].font_size, 10);
/// assert_eq!(cloud.entries[1].font_size, 20);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TagCloud {
  scale: FontScale,
}

impl TagCloud {
  /// Creates an engine with the default font scale.
  pub fn new() -> Self {
    Self::default()
  }

  /// Creates a new `TagCloudBuilder`.
  pub fn builder() -> TagCloudBuilder {
    TagCloudBuilder::new()
  }

  /// The font scale used for sizing.
  pub fn scale(&self) -> &FontScale {
    &self.scale
  }

  /// Generates a cloud of at most `limit` words from `text`.
  ///
  /// Never fails. Empty text or a zero limit produce an empty cloud.
  pub fn generate(&self, text: &str, limit: usize) -> Cloud {
    self.build_cloud(tokenize(text), None, limit)
  }

  /// Generates a cloud from a line-oriented source.
  ///
  /// If the source fails part-way through, the cloud is built from the lines
  /// read before the failure and [`Cloud::fault`] describes what went wrong.
  pub fn generate_from_reader<R: BufRead>(&self, reader: R, limit: usize) -> Cloud {
    let TokenStream { tokens, fault } = tokenize_reader(reader);
    self.build_cloud(tokens, fault, limit)
  }

  fn build_cloud(&self, tokens: Vec<String>, fault: Option<SourceReadFault>, limit: usize) -> Cloud {
    let total_tokens = tokens.len();
    let table = FrequencyTable::from_tokens(tokens);
    let display = select(&table, limit);

    Cloud {
      entries: self.size_entries(&display),
      range: display.scale_range(),
      distinct_words: table.len(),
      total_tokens,
      fault,
    }
  }

  /// Attaches a font size to every displayed word.
  ///
  /// The range is taken over the display set alone, so the largest and
  /// smallest displayed counts always reach the ends of the scale.
  pub fn size_entries(&self, display: &DisplaySet) -> Vec<CloudEntry> {
    let Some(range) = display.scale_range() else {
      return Vec::new();
    };
    log::debug!(
      "scaling {} words over counts {}..={}",
      display.len(),
      range.min_count,
      range.max_count
    );

    display
      .iter()
      .map(|entry| CloudEntry {
        word: entry.word.clone(),
        count: entry.count,
        font_size: self.scale.size_for(entry.count, range),
      })
      .collect()
  }
}

/// A builder for creating `TagCloud` instances.
#[derive(Debug, Default)]
pub struct TagCloudBuilder {
  scale: Option<FontScale>,
}

impl TagCloudBuilder {
  /// Creates a new, empty builder.
  pub fn new() -> Self {
    Self { scale: None }
  }

  /// Sets the font scale. Defaults to [`FontScale::default`].
  pub fn font_scale(mut self, scale: FontScale) -> Self {
    self.scale = Some(scale);
    self
  }

  /// Builds the `TagCloud`.
  pub fn build(self) -> TagCloud {
    TagCloud {
      scale: self.scale.unwrap_or_default(),
    }
  }
}

/// Generates a cloud of at most `limit` words with the default font scale.
///
/// Shorthand for `TagCloud::new().generate(text, limit)`.
pub fn generate(text: &str, limit: usize) -> Cloud {
  TagCloud::new().generate(text, limit)
}
