//! Error taxonomy for treebank reading and metric computation

use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MorphometricsError>;

#[derive(Error, Debug)]
pub enum MorphometricsError {
  #[error("Failed to read treebank '{}'", .path.display())]
  Io { path: PathBuf, source: std::io::Error },

  #[error("Failed to read config '{}'", .path.display())]
  ConfigRead { path: PathBuf, source: std::io::Error },

  #[error("Invalid config '{}'", .path.display())]
  ConfigParse { path: PathBuf, source: serde_json::Error },

  #[error("Sentence {sentence}, token {token}: HEAD '{value}' is not an integer")]
  InvalidHead { sentence: usize, token: String, value: String },

  #[error("Sentence {sentence}, token {token}: HEAD {head} is outside a sentence of {len} tokens")]
  HeadOutOfRange { sentence: usize, token: String, head: usize, len: usize },

  #[error("Sentence {sentence}, token {token}: root token has no governor")]
  RootHead { sentence: usize, token: String },

  #[error("Degenerate corpus for {metric}: {reason}")]
  Degenerate { metric: &'static str, reason: String },
}

impl MorphometricsError {
  pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
    Self::Io { path: path.as_ref().to_path_buf(), source }
  }

  pub fn config_read(path: impl AsRef<Path>, source: std::io::Error) -> Self {
    Self::ConfigRead { path: path.as_ref().to_path_buf(), source }
  }

  pub fn config_parse(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
    Self::ConfigParse { path: path.as_ref().to_path_buf(), source }
  }

  pub fn invalid_head(sentence: usize, token: impl Into<String>, value: impl Into<String>) -> Self {
    Self::InvalidHead { sentence, token: token.into(), value: value.into() }
  }

  pub fn head_out_of_range(sentence: usize, token: impl Into<String>, head: usize, len: usize) -> Self {
    Self::HeadOutOfRange { sentence, token: token.into(), head, len }
  }

  pub fn root_head(sentence: usize, token: impl Into<String>) -> Self {
    Self::RootHead { sentence, token: token.into() }
  }

  pub fn degenerate(metric: &'static str, reason: impl Into<String>) -> Self {
    Self::Degenerate { metric, reason: reason.into() }
  }

  /// True for errors caused by a corpus too small or uniform to score
  pub fn is_degenerate(&self) -> bool {
    matches!(self, Self::Degenerate { .. })
  }
}
