//! Error types for tag cloud generation.
//!
//! The pipeline itself never fails: a source that breaks off mid-read is
//! recorded as a [`SourceReadFault`] on the resulting cloud. [`CloudError`]
//! covers the faults around the pipeline (opening files, writing output,
//! bad configuration).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised outside the core pipeline.
#[derive(Error, Debug)]
pub enum CloudError {
  /// The input file could not be opened.
  #[error("input file {path:?} could not be read: {source}")]
  SourceOpen {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// The output file could not be created.
  #[error("output file {path:?} could not be opened: {source}")]
  SinkOpen {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// Writing rendered output failed.
  #[error("failed to write output: {0}")]
  SinkWrite(#[from] io::Error),

  /// Console input could not be read while prompting.
  #[error("user input could not be read: {0}")]
  Prompt(#[source] io::Error),

  /// A requested word limit that is not a positive integer.
  #[error("max word count must be a positive integer, got {0:?}")]
  InvalidLimit(String),

  /// Font sizes that do not form a usable scale.
  #[error("invalid font range: min {min}, max {max}, default {default}")]
  InvalidFontRange { min: u32, max: u32, default: u32 },

  /// The configuration file could not be read.
  #[error("config file {path:?} could not be read: {source}")]
  ConfigRead {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// The configuration file is not valid JSON for a [`CloudConfig`](crate::config::CloudConfig).
  #[cfg(feature = "json")]
  #[error("invalid config: {0}")]
  Config(#[source] serde_json::Error),

  /// The cloud could not be serialized.
  #[cfg(feature = "json")]
  #[error("failed to serialize cloud: {0}")]
  Serialize(#[source] serde_json::Error),
}

/// Advisory raised when the input stops being readable part-way through.
///
/// Never fatal. Tokens read before `line` are kept and the cloud is built
/// from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceReadFault {
  /// 1-based line number that could not be read.
  pub line: usize,
  /// Description of the underlying I/O error.
  pub message: String,
}

impl SourceReadFault {
  pub(crate) fn new(line: usize, err: &io::Error) -> Self {
    Self {
      line,
      message: err.to_string(),
    }
  }
}

impl fmt::Display for SourceReadFault {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "input could not be read at line {} ({}); word list is unfinished",
      self.line, self.message
    )
  }
}
