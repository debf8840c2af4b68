//! Font size scaling.

use crate::error::CloudError;
use crate::types::ScaleRange;
use serde::Serialize;

/// Linear mapping from word counts to font sizes.
///
/// The least frequent displayed word gets `min`, the most frequent gets `max`
/// and everything in between is interpolated with truncating integer
/// division. When every displayed word has the same count there is nothing to
/// interpolate and all of them get `default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FontScale {
  min: u32,
  max: u32,
  default: u32,
}

impl Default for FontScale {
  /// 11 to 48, with 16 for a flat range.
  fn default() -> Self {
    Self {
      min: Self::MIN_FONT_SIZE,
      max: Self::MAX_FONT_SIZE,
      default: Self::DEFAULT_FONT_SIZE,
    }
  }
}

impl FontScale {
  pub const MIN_FONT_SIZE: u32 = 11;
  pub const MAX_FONT_SIZE: u32 = 48;
  pub const DEFAULT_FONT_SIZE: u32 = 16;

  /// Creates a scale. `default` must lie within `[min, max]`.
  ///
  /// # Errors
  ///
  /// Returns [`CloudError::InvalidFontRange`] if `min > max` or `default` is
  /// outside the range.
  pub fn new(min: u32, max: u32, default: u32) -> Result<Self, CloudError> {
    if min > max || default < min || default > max {
      return Err(CloudError::InvalidFontRange { min, max, default });
    }
    Ok(Self { min, max, default })
  }

  pub fn min(&self) -> u32 {
    self.min
  }

  pub fn max(&self) -> u32 {
    self.max
  }

  pub fn default_size(&self) -> u32 {
    self.default
  }

  /// Font size for `count` within `range`.
  ///
  /// `count` is expected to lie in the range; values outside it are clamped
  /// so the result always stays within `[min, max]`.
  pub fn size_for(&self, count: usize, range: ScaleRange) -> u32 {
    if range.is_flat() {
      return self.default;
    }

    let count = count.clamp(range.min_count, range.max_count);
    let span = u128::from(self.max - self.min);
    let offset = (count - range.min_count) as u128;
    let width = (range.max_count - range.min_count) as u128;

    // Bounded by span, which fits in u32.
    self.min + (span * offset / width) as u32
  }
}
