//! Morphological complexity aggregation
//!
//! Runs the five metrics independently on the same treebank and averages
//! them without weights.

use std::path::Path;

use crate::config::MorphometricsConfig;
use crate::entropy::{normalized_head_pos_entropy, normalized_word_entropy};
use crate::ratio::{lemma_form_ratio, type_token_ratio};
use crate::reader::read_treebank;
use crate::treebank::Treebank;
use crate::Result;

/// The individual scores, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
  HeadPosEntropy,
  TypeTokenRatio,
  WordEntropy,
  LemmaFormRatio,
  InflectedLemmaFormRatio,
}

impl Metric {
  pub fn label(self) -> &'static str {
    match self {
      Metric::HeadPosEntropy => "HPE*",
      Metric::TypeTokenRatio => "TTR",
      Metric::WordEntropy => "WH*",
      Metric::LemmaFormRatio => "F/L*",
      Metric::InflectedLemmaFormRatio => "F/iL*",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplexityReport {
  pub head_pos_entropy: f64,
  pub type_token_ratio: f64,
  pub word_entropy: f64,
  pub lemma_form_ratio: f64,
  pub inflected_lemma_form_ratio: f64,
}

impl ComplexityReport {
  pub fn metrics(&self) -> [(Metric, f64); 5] {
    [
      (Metric::HeadPosEntropy, self.head_pos_entropy),
      (Metric::TypeTokenRatio, self.type_token_ratio),
      (Metric::WordEntropy, self.word_entropy),
      (Metric::LemmaFormRatio, self.lemma_form_ratio),
      (Metric::InflectedLemmaFormRatio, self.inflected_lemma_form_ratio),
    ]
  }

  /// Unweighted mean of the five scores
  pub fn average(&self) -> f64 {
    (self.head_pos_entropy
      + self.type_token_ratio
      + self.word_entropy
      + self.lemma_form_ratio
      + self.inflected_lemma_form_ratio)
      / 5.0
  }
}

pub fn analyze_treebank(treebank: &Treebank, config: &MorphometricsConfig) -> Result<ComplexityReport> {
  let report = ComplexityReport {
    head_pos_entropy: normalized_head_pos_entropy(treebank, config.root_policy)?,
    type_token_ratio: type_token_ratio(treebank)?,
    word_entropy: normalized_word_entropy(treebank)?,
    lemma_form_ratio: lemma_form_ratio(treebank, false),
    inflected_lemma_form_ratio: lemma_form_ratio(treebank, true),
  };
  tracing::debug!(?report, average = report.average(), "computed complexity metrics");
  Ok(report)
}

pub fn analyze_file<P: AsRef<Path>>(path: P, config: &MorphometricsConfig) -> Result<ComplexityReport> {
  let treebank = read_treebank(path)?;
  analyze_treebank(&treebank, config)
}

/// Aggregate complexity score of a treebank file, with default options
pub fn morphological_complexity_score<P: AsRef<Path>>(path: P) -> Result<f64> {
  analyze_file(path, &MorphometricsConfig::default()).map(|report| report.average())
}
