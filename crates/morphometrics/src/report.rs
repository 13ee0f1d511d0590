//! Report formatting

use clap::ValueEnum;
use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::complexity::ComplexityReport;

const RULE_WIDTH: usize = 40;
const DECIMALS: usize = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
  #[default]
  Pretty,
  Json,
}

pub fn format_report(report: &ComplexityReport, format: OutputFormat) -> String {
  match format {
    OutputFormat::Pretty => format_pretty(report),
    OutputFormat::Json => format_json(report),
  }
}

fn format_pretty(report: &ComplexityReport) -> String {
  let mut output = String::new();

  for (metric, value) in report.metrics() {
    output.push_str(&format!("{}:\t {:.prec$}\n", metric.label(), value, prec = DECIMALS));
  }
  output.push_str(&"-".repeat(RULE_WIDTH));
  output.push('\n');
  output.push_str(&format!("Morphological complexity:\t {:.prec$}\n", report.average(), prec = DECIMALS));

  output
}

fn format_json(report: &ComplexityReport) -> String {
  let metrics: Map<String, Value> =
    report.metrics().iter().map(|(metric, value)| (metric.label().to_string(), json!(value))).collect();
  let output = json!({
    "metrics": metrics,
    "morphological_complexity": report.average(),
  });

  serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
}
