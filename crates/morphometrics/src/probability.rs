//! Empirical probability estimation by counting
//!
//! Distributions are keyed by ordered maps so entropy sums always run in the
//! same order for the same corpus.

use std::collections::BTreeMap;

use crate::config::RootPolicy;
use crate::treebank::{Sentence, Token, Treebank};
use crate::vocabulary::Vocabulary;
use crate::{MorphometricsError, Result};

/// Probability per discrete value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Distribution {
  probabilities: BTreeMap<String, f64>,
}

impl Distribution {
  /// Probability of `value`, 0 when it is not part of the distribution
  pub fn get(&self, value: &str) -> f64 {
    self.probabilities.get(value).copied().unwrap_or(0.0)
  }

  /// Number of values the distribution ranges over, zero-probability ones included
  pub fn len(&self) -> usize {
    self.probabilities.len()
  }

  pub fn is_empty(&self) -> bool {
    self.probabilities.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
    self.probabilities.iter().map(|(value, p)| (value.as_str(), *p))
  }

  pub fn probabilities(&self) -> impl Iterator<Item = f64> + '_ {
    self.probabilities.values().copied()
  }
}

impl FromIterator<(String, f64)> for Distribution {
  fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
    Self { probabilities: iter.into_iter().collect() }
  }
}

/// One distribution per conditioning value; uncounted conditions are absent
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConditionalDistribution {
  given: BTreeMap<String, Distribution>,
}

impl ConditionalDistribution {
  pub fn given(&self, condition: &str) -> Option<&Distribution> {
    self.given.get(condition)
  }

  pub fn len(&self) -> usize {
    self.given.len()
  }

  pub fn is_empty(&self) -> bool {
    self.given.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &Distribution)> {
    self.given.iter().map(|(condition, dist)| (condition.as_str(), dist))
  }
}

/// P(form) over the whole treebank for each form in `vocab`
pub fn word_probabilities(treebank: &Treebank, vocab: &Vocabulary) -> Distribution {
  let total = treebank.token_count() as f64;
  let mut counts: BTreeMap<&str, f64> = vocab.iter().map(|w| (w.as_str(), 0.0)).collect();

  for token in treebank.tokens() {
    if let Some(count) = counts.get_mut(token.form.as_str()) {
      *count += 1.0;
    }
  }

  counts.into_iter().map(|(w, c)| (w.to_string(), c / total)).collect()
}

/// P(head UPOS | form) over a delexicalized treebank
///
/// Every distribution ranges over the full `pos_vocab`. Tokens whose form is
/// outside `dw_vocab`, or whose governor's tag is outside `pos_vocab`, are
/// not counted.
pub fn hpos_given_word(
  treebank: &Treebank,
  dw_vocab: &Vocabulary,
  pos_vocab: &Vocabulary,
  root_policy: RootPolicy,
) -> Result<ConditionalDistribution> {
  let mut counts: BTreeMap<&str, BTreeMap<&str, f64>> = dw_vocab
    .iter()
    .map(|w| (w.as_str(), pos_vocab.iter().map(|p| (p.as_str(), 0.0)).collect()))
    .collect();
  let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
  let mut excluded_roots = 0usize;

  for (index, sentence) in treebank.sentences().iter().enumerate() {
    for token in sentence.tokens() {
      let Some(head_token) = governor(sentence, token, index + 1, root_policy)? else {
        excluded_roots += 1;
        continue;
      };
      let Some(row) = counts.get_mut(token.form.as_str()) else {
        continue;
      };
      let Some(cell) = row.get_mut(head_token.upos.as_str()) else {
        continue;
      };
      *cell += 1.0;
      *totals.entry(token.form.as_str()).or_default() += 1.0;
    }
  }

  if excluded_roots > 0 {
    tracing::debug!(excluded_roots, "root tokens left out of head-POS counts");
  }

  let given: BTreeMap<String, Distribution> = counts
    .into_iter()
    .filter_map(|(w, row)| {
      let total = totals.get(w).copied().filter(|t| *t > 0.0)?;
      let dist: Distribution = row.into_iter().map(|(p, c)| (p.to_string(), c / total)).collect();
      Some((w.to_string(), dist))
    })
    .collect();

  Ok(ConditionalDistribution { given })
}

/// Resolve the syntactic governor of `token` within `sentence`
///
/// `Ok(None)` means the token is a root excluded from counting.
/// `sentence_number` is 1-based and only used in error messages.
fn governor<'a>(
  sentence: &'a Sentence,
  token: &Token,
  sentence_number: usize,
  root_policy: RootPolicy,
) -> Result<Option<&'a Token>> {
  let head: usize = token
    .head
    .parse()
    .map_err(|_| MorphometricsError::invalid_head(sentence_number, &token.id, &token.head))?;

  if head == 0 {
    return match root_policy {
      RootPolicy::Exclude => Ok(None),
      RootPolicy::Wrap => Ok(sentence.last()),
      RootPolicy::Fail => Err(MorphometricsError::root_head(sentence_number, &token.id)),
    };
  }

  sentence
    .get(head - 1)
    .map(Some)
    .ok_or_else(|| MorphometricsError::head_out_of_range(sentence_number, &token.id, head, sentence.len()))
}
