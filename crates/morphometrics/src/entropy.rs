//! Entropy-based metrics
//!
//! Both scores are normalized by the log of the number of outcomes they range
//! over, which is undefined for fewer than two outcomes. Those corpora are
//! rejected as degenerate instead of producing NaN or infinity.

use crate::config::RootPolicy;
use crate::delexicalize::delexicalize;
use crate::probability::{hpos_given_word, word_probabilities};
use crate::treebank::{Field, Treebank};
use crate::vocabulary::vocabulary;
use crate::{MorphometricsError, Result};

/// Shannon entropy in bits; zero probabilities contribute nothing
pub fn shannon_entropy<I>(probabilities: I) -> f64
where
  I: IntoIterator<Item = f64>,
{
  probabilities.into_iter().filter(|p| *p > 0.0).map(|p| -p * p.log2()).sum()
}

/// log2 of an outcome count, or a degenerate-corpus error below two outcomes
fn normalizer(outcomes: usize, metric: &'static str, what: &str) -> Result<f64> {
  if outcomes < 2 {
    return Err(MorphometricsError::degenerate(
      metric,
      format!("{what} has {outcomes} distinct value(s), at least 2 are needed"),
    ));
  }
  Ok((outcomes as f64).log2())
}

/// Word-form entropy scaled by the maximum entropy of the form vocabulary
pub fn normalized_word_entropy(treebank: &Treebank) -> Result<f64> {
  let vocab = vocabulary(treebank, Field::Form);
  let max_entropy = normalizer(vocab.len(), "word entropy", "the form vocabulary")?;
  let distribution = word_probabilities(treebank, &vocab);
  Ok(shannon_entropy(distribution.probabilities()) / max_entropy)
}

/// One minus the mean normalized entropy of head UPOS per delexicalized word
pub fn normalized_head_pos_entropy(treebank: &Treebank, root_policy: RootPolicy) -> Result<f64> {
  let delex = delexicalize(treebank);
  let dw_vocab = vocabulary(&delex, Field::Form);
  let pos_vocab = vocabulary(&delex, Field::Upos);

  if dw_vocab.is_empty() {
    return Err(MorphometricsError::degenerate("head-POS entropy", "the treebank has no tokens"));
  }
  normalizer(pos_vocab.len(), "head-POS entropy", "the UPOS vocabulary")?;

  let conditional = hpos_given_word(&delex, &dw_vocab, &pos_vocab, root_policy)?;

  let mut total = 0.0;
  for (_, distribution) in conditional.iter() {
    let max_entropy = normalizer(distribution.len(), "head-POS entropy", "a head-POS distribution")?;
    total += shannon_entropy(distribution.probabilities()) / max_entropy;
  }

  Ok(1.0 - total / dw_vocab.len() as f64)
}
