//! CoNLL-U style treebank reading
//!
//! Ingestion is permissive: rows that are not ten tab-separated columns, and
//! rows for multiword ranges (`1-2`) or empty nodes (`3.1`), are dropped
//! without error. Sentences end only at blank lines, so tokens after the last
//! blank line never form a sentence.

use std::fs;
use std::path::Path;

use crate::treebank::{Sentence, Token, Treebank};
use crate::{MorphometricsError, Result};

/// Read and parse a treebank file
pub fn read_treebank<P: AsRef<Path>>(path: P) -> Result<Treebank> {
  let path = path.as_ref();
  let content = fs::read_to_string(path).map_err(|e| MorphometricsError::io(path, e))?;
  Ok(parse_treebank(&content))
}

/// Parse treebank text already in memory
pub fn parse_treebank(content: &str) -> Treebank {
  let mut sentences = Vec::new();
  let mut current = Vec::new();
  let mut skipped = 0usize;

  for line in content.lines() {
    if line.is_empty() {
      sentences.push(Sentence::new(std::mem::take(&mut current)));
      continue;
    }

    match parse_token_line(line) {
      Some(token) => current.push(token),
      None => skipped += 1,
    }
  }

  if !current.is_empty() {
    tracing::warn!(
      tokens = current.len(),
      "input does not end with a blank line; dropping the trailing sentence"
    );
  }

  let treebank = Treebank::new(sentences);
  tracing::debug!(
    sentences = treebank.sentences().len(),
    tokens = treebank.token_count(),
    skipped_lines = skipped,
    "parsed treebank"
  );

  treebank
}

/// Parse one row, or `None` if the row is filtered out
fn parse_token_line(line: &str) -> Option<Token> {
  let columns: Vec<&str> = line.split('\t').collect();
  if is_range_or_empty_node(columns[0]) {
    return None;
  }
  Token::from_columns(&columns)
}

fn is_range_or_empty_node(id: &str) -> bool {
  id.contains('.') || id.contains('-')
}
