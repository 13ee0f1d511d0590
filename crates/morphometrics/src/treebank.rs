//! Treebank data model
//!
//! A treebank is an ordered list of sentences, each an ordered list of tokens
//! carrying the ten CoNLL-U columns. HEAD values are positional within their
//! sentence, so sentence and token order is always preserved.

/// Column selector for generic field access
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
  Id,
  Form,
  Lemma,
  Upos,
  Xpos,
  Feats,
  Head,
  Deprel,
  Deps,
  Misc,
}

/// One annotated word with its ten columns kept verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
  pub id: String,
  pub form: String,
  pub lemma: String,
  pub upos: String,
  pub xpos: String,
  pub feats: String,
  pub head: String,
  pub deprel: String,
  pub deps: String,
  pub misc: String,
}

impl Token {
  /// Build a token from exactly ten columns; anything else is rejected
  pub fn from_columns(columns: &[&str]) -> Option<Self> {
    match columns {
      [id, form, lemma, upos, xpos, feats, head, deprel, deps, misc] => Some(Self {
        id: id.to_string(),
        form: form.to_string(),
        lemma: lemma.to_string(),
        upos: upos.to_string(),
        xpos: xpos.to_string(),
        feats: feats.to_string(),
        head: head.to_string(),
        deprel: deprel.to_string(),
        deps: deps.to_string(),
        misc: misc.to_string(),
      }),
      _ => None,
    }
  }

  pub fn field(&self, field: Field) -> &str {
    match field {
      Field::Id => &self.id,
      Field::Form => &self.form,
      Field::Lemma => &self.lemma,
      Field::Upos => &self.upos,
      Field::Xpos => &self.xpos,
      Field::Feats => &self.feats,
      Field::Head => &self.head,
      Field::Deprel => &self.deprel,
      Field::Deps => &self.deps,
      Field::Misc => &self.misc,
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sentence {
  tokens: Vec<Token>,
}

impl Sentence {
  pub fn new(tokens: Vec<Token>) -> Self {
    Self { tokens }
  }

  pub fn tokens(&self) -> &[Token] {
    &self.tokens
  }

  pub fn len(&self) -> usize {
    self.tokens.len()
  }

  pub fn is_empty(&self) -> bool {
    self.tokens.is_empty()
  }

  /// Token at a 0-based position
  pub fn get(&self, position: usize) -> Option<&Token> {
    self.tokens.get(position)
  }

  pub fn last(&self) -> Option<&Token> {
    self.tokens.last()
  }
}

impl FromIterator<Token> for Sentence {
  fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
    Self::new(iter.into_iter().collect())
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Treebank {
  sentences: Vec<Sentence>,
}

impl Treebank {
  pub fn new(sentences: Vec<Sentence>) -> Self {
    Self { sentences }
  }

  pub fn sentences(&self) -> &[Sentence] {
    &self.sentences
  }

  /// Every retained token, sentence by sentence
  pub fn tokens(&self) -> impl Iterator<Item = &Token> {
    self.sentences.iter().flat_map(|sentence| sentence.tokens().iter())
  }

  pub fn token_count(&self) -> usize {
    self.sentences.iter().map(Sentence::len).sum()
  }

  pub fn is_empty(&self) -> bool {
    self.token_count() == 0
  }
}

impl FromIterator<Sentence> for Treebank {
  fn from_iter<I: IntoIterator<Item = Sentence>>(iter: I) -> Self {
    Self::new(iter.into_iter().collect())
  }
}
