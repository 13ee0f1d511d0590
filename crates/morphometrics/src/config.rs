//! Configuration management for morphometrics
//!
//! Scoring options read from an explicit `--config` file: how root tokens
//! are treated when counting head parts of speech, and the report format.
//! Nothing is discovered implicitly, so a bare invocation always uses the
//! defaults.

use clap::ValueEnum;
use serde::Deserialize;
use std::path::Path;

use crate::report::OutputFormat;
use crate::{MorphometricsError, Result};

/// How a token with HEAD = 0 is resolved to a governor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RootPolicy {
  /// Root tokens are left out of head-POS counting
  #[default]
  Exclude,
  /// Root tokens take the last token of their sentence as governor
  Wrap,
  /// Root tokens are an error
  Fail,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MorphometricsConfig {
  #[serde(default)]
  pub root_policy: RootPolicy,
  #[serde(default)]
  pub format: OutputFormat,
}

impl MorphometricsConfig {
  pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
    let path = path.as_ref();
    let content =
      std::fs::read_to_string(path).map_err(|e| MorphometricsError::config_read(path, e))?;
    let config: Self = serde_json::from_str(&content).map_err(|e| MorphometricsError::config_parse(path, e))?;
    tracing::debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
  }
}
