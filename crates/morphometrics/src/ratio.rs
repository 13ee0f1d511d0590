//! Ratio-based metrics: type/token ratio and lemma-to-form ratios

use crate::treebank::{Field, Treebank};
use crate::vocabulary::{forms_by_lemma, vocabulary};
use crate::{MorphometricsError, Result};

/// Distinct forms over total tokens
pub fn type_token_ratio(treebank: &Treebank) -> Result<f64> {
  let tokens = treebank.token_count();
  if tokens == 0 {
    return Err(MorphometricsError::degenerate("type/token ratio", "the treebank has no tokens"));
  }
  Ok(vocabulary(treebank, Field::Form).len() as f64 / tokens as f64)
}

/// One minus lemmas per distinct form
///
/// With `inflected`, only lemmas realized by more than one form are counted.
/// When nothing is counted the ratio is taken as 1, so the score is 0.
pub fn lemma_form_ratio(treebank: &Treebank, inflected: bool) -> f64 {
  let form_counts: Vec<usize> = forms_by_lemma(treebank)
    .values()
    .map(|forms| forms.len())
    .filter(|count| !inflected || *count > 1)
    .collect();

  let total: usize = form_counts.iter().sum();
  let ratio = if total == 0 { 1.0 } else { form_counts.len() as f64 / total as f64 };

  1.0 - ratio
}
