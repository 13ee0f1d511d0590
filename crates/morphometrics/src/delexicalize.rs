//! Delexicalization: FORM replaced by its morphosyntactic class `UPOS|FEATS`

use crate::treebank::{Sentence, Token, Treebank};

pub fn delexicalized_form(upos: &str, feats: &str) -> String {
  format!("{upos}|{feats}")
}

impl Token {
  /// Owned copy of this token with FORM set to `UPOS|FEATS`
  pub fn delexicalized(&self) -> Token {
    Token { form: delexicalized_form(&self.upos, &self.feats), ..self.clone() }
  }
}

/// Derived treebank; the input is left untouched
pub fn delexicalize(treebank: &Treebank) -> Treebank {
  treebank
    .sentences()
    .iter()
    .map(|sentence| sentence.tokens().iter().map(Token::delexicalized).collect::<Sentence>())
    .collect()
}
