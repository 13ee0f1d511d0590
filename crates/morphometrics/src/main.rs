use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use morphometrics::{analyze_file, format_report, MorphometricsConfig, OutputFormat, RootPolicy};

/// Morphometrics - morphological complexity of a dependency treebank
#[derive(Parser)]
#[command(name = "morphometrics")]
#[command(about = "Corpus-level morphological complexity metrics for CoNLL-U treebanks")]
#[command(version)]
struct Cli {
  /// Treebank file to analyze
  #[arg(value_name = "PATH")]
  path: PathBuf,

  /// Configuration file path
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// How root tokens are handled when counting head parts of speech
  #[arg(long, value_enum)]
  root_policy: Option<RootPolicy>,

  /// Output format
  #[arg(short, long, value_enum)]
  format: Option<OutputFormat>,

  /// Enable verbose logging
  #[arg(short, long)]
  verbose: bool,
}

fn main() {
  let cli = Cli::parse();
  init_logging(cli.verbose);

  if let Err(e) = run(cli) {
    eprintln!("{} {e:#}", "Error:".red().bold());
    process::exit(1);
  }
}

fn init_logging(verbose: bool) {
  let filter = if verbose { EnvFilter::new("morphometrics=debug") } else { EnvFilter::new("morphometrics=warn") };

  tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)).with(filter).init();
}

fn run(cli: Cli) -> Result<()> {
  let mut config = match &cli.config {
    Some(path) => MorphometricsConfig::load_from_file(path)?,
    None => MorphometricsConfig::default(),
  };
  if let Some(policy) = cli.root_policy {
    config.root_policy = policy;
  }
  if let Some(format) = cli.format {
    config.format = format;
  }

  let report = analyze_file(&cli.path, &config)
    .with_context(|| format!("Could not score {}", cli.path.display()))?;

  print!("{}", format_report(&report, config.format));
  Ok(())
}
