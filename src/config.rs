//! Configuration for tag cloud generation and output.

use crate::error::CloudError;
use crate::scaler::FontScale;
use serde::{Deserialize, Serialize};

/// Stylesheets linked from generated pages when the configuration names none.
pub const DEFAULT_STYLESHEETS: [&str; 2] = [
  "http://web.cse.ohio-state.edu/software/2231/web-sw2/assignments/projects/tag-cloud-generator/data/tagcloud.css",
  "tagcloud.css",
];

/// Settings for a run, usually loaded from a JSON file.
///
/// Every field is optional in the file; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudConfig {
  /// Maximum number of words. `None` means "ask".
  #[serde(default)]
  pub limit: Option<usize>,
  /// Output format.
  #[serde(default)]
  pub format: OutputFormat,
  /// Font size range.
  #[serde(default)]
  pub fonts: FontConfig,
  /// Stylesheet links written into the HTML page head.
  #[serde(default = "default_stylesheets")]
  pub stylesheets: Vec<String>,
}

fn default_stylesheets() -> Vec<String> {
  DEFAULT_STYLESHEETS.iter().map(|s| s.to_string()).collect()
}

impl Default for CloudConfig {
  fn default() -> Self {
    Self {
      limit: None,
      format: OutputFormat::default(),
      fonts: FontConfig::default(),
      stylesheets: default_stylesheets(),
    }
  }
}

impl CloudConfig {
  /// Parse a configuration from JSON text.
  #[cfg(feature = "json")]
  pub fn from_json(text: &str) -> Result<Self, CloudError> {
    let config: Self = serde_json::from_str(text).map_err(CloudError::Config)?;
    config.validate()?;
    Ok(config)
  }

  /// Load a configuration file.
  #[cfg(feature = "json")]
  pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, CloudError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| CloudError::ConfigRead {
      path: path.to_path_buf(),
      source,
    })?;
    log::debug!("loaded config from {}", path.display());
    Self::from_json(&text)
  }

  /// Check the limit and font range.
  pub fn validate(&self) -> Result<(), CloudError> {
    if self.limit == Some(0) {
      return Err(CloudError::InvalidLimit("0".to_string()));
    }
    self.fonts.scale().map(|_| ())
  }

  /// Set the word limit.
  pub fn limit(mut self, limit: usize) -> Self {
    self.limit = Some(limit);
    self
  }

  /// Set the output format.
  pub fn format(mut self, format: OutputFormat) -> Self {
    self.format = format;
    self
  }
}

/// Font sizes as written in a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontConfig {
  #[serde(default = "default_min")]
  pub min: u32,
  #[serde(default = "default_max")]
  pub max: u32,
  #[serde(default = "default_size")]
  pub default: u32,
}

fn default_min() -> u32 {
  FontScale::MIN_FONT_SIZE
}

fn default_max() -> u32 {
  FontScale::MAX_FONT_SIZE
}

fn default_size() -> u32 {
  FontScale::DEFAULT_FONT_SIZE
}

impl Default for FontConfig {
  fn default() -> Self {
    Self {
      min: default_min(),
      max: default_max(),
      default: default_size(),
    }
  }
}

impl FontConfig {
  /// Build the validated scale.
  pub fn scale(&self) -> Result<FontScale, CloudError> {
    FontScale::new(self.min, self.max, self.default)
  }
}

/// How the cloud is written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
  /// A complete HTML page.
  #[default]
  Html,
  /// The cloud serialized as JSON.
  Json,
}
