//! Corpus-level morphological complexity metrics for dependency treebanks
//!
//! Reads a CoNLL-U style treebank and scores it with five metrics: head-POS
//! entropy, type/token ratio, word entropy, and two lemma-to-form ratios.

pub mod complexity;
pub mod config;
pub mod delexicalize;
pub mod entropy;
pub mod error;
pub mod probability;
pub mod ratio;
pub mod reader;
pub mod report;
pub mod treebank;
pub mod vocabulary;

pub use complexity::{analyze_file, analyze_treebank, morphological_complexity_score, ComplexityReport, Metric};
pub use config::{MorphometricsConfig, RootPolicy};
pub use error::{MorphometricsError, Result};
pub use reader::{parse_treebank, read_treebank};
pub use report::{format_report, OutputFormat};
pub use treebank::{Field, Sentence, Token, Treebank};
