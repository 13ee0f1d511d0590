//! Distinct field values across a treebank

use std::collections::{BTreeMap, BTreeSet};

use crate::treebank::{Field, Treebank};

/// Set of distinct values; ordered so downstream sums iterate deterministically
pub type Vocabulary = BTreeSet<String>;

pub fn vocabulary(treebank: &Treebank, field: Field) -> Vocabulary {
  treebank.tokens().map(|token| token.field(field).to_string()).collect()
}

/// Distinct surface forms realizing each lemma
pub fn forms_by_lemma(treebank: &Treebank) -> BTreeMap<String, BTreeSet<String>> {
  let mut forms: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
  for token in treebank.tokens() {
    forms.entry(token.lemma.clone()).or_default().insert(token.form.clone());
  }
  forms
}
