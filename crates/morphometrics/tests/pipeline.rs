use morphometrics::vocabulary::vocabulary;
use morphometrics::*;
use std::fs;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
  PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
}

fn in_unit_interval(value: f64) -> bool {
  (0.0..=1.0).contains(&value)
}

#[test]
fn test_dogs_scenario() {
  let report = analyze_file(fixture("dogs.conllu"), &MorphometricsConfig::default()).unwrap();

  assert_eq!(report.type_token_ratio, 1.0);
  assert_eq!(report.lemma_form_ratio, 0.5);
  assert_eq!(report.inflected_lemma_form_ratio, 0.5);
  assert_eq!(report.word_entropy, 1.0);
  assert_eq!(report.head_pos_entropy, 1.0);
}

#[test]
fn test_dogs_scenario_same_under_wrap() {
  let config = MorphometricsConfig { root_policy: RootPolicy::Wrap, ..Default::default() };
  let wrapped = analyze_file(fixture("dogs.conllu"), &config).unwrap();
  let excluded = analyze_file(fixture("dogs.conllu"), &MorphometricsConfig::default()).unwrap();

  assert_eq!(wrapped, excluded);
}

fn rounded(value: f64) -> String {
  format!("{value:.5}")
}

#[test]
fn test_heads_scores_under_wrap() {
  // Roots in heads.conllu are not sentence-final, so wrap sends them to PUNCT
  let config = MorphometricsConfig { root_policy: RootPolicy::Wrap, ..Default::default() };
  let report = analyze_file(fixture("heads.conllu"), &config).unwrap();

  assert_eq!(rounded(report.head_pos_entropy), "0.84367");
  assert_eq!(rounded(report.type_token_ratio), "0.82353");
  assert_eq!(rounded(report.word_entropy), "0.96921");
  assert_eq!(rounded(report.lemma_form_ratio), "0.28571");
  assert_eq!(rounded(report.inflected_lemma_form_ratio), "0.57143");
  assert_eq!(rounded(report.average()), "0.69871");
}

#[test]
fn test_heads_scores_under_exclude() {
  let report = analyze_file(fixture("heads.conllu"), &MorphometricsConfig::default()).unwrap();

  assert_eq!(rounded(report.head_pos_entropy), "0.89359");
  assert_eq!(rounded(report.type_token_ratio), "0.82353");
  assert_eq!(rounded(report.average()), "0.70869");
}

#[test]
fn test_root_policy_only_moves_head_pos_entropy() {
  let wrap = MorphometricsConfig { root_policy: RootPolicy::Wrap, ..Default::default() };
  let wrapped = analyze_file(fixture("heads.conllu"), &wrap).unwrap();
  let excluded = analyze_file(fixture("heads.conllu"), &MorphometricsConfig::default()).unwrap();

  assert!(wrapped.head_pos_entropy < 1.0);
  assert!(excluded.head_pos_entropy < 1.0);
  assert!((wrapped.head_pos_entropy - excluded.head_pos_entropy).abs() > 1e-3);
  assert_eq!(wrapped.type_token_ratio, excluded.type_token_ratio);
  assert_eq!(wrapped.word_entropy, excluded.word_entropy);
  assert_eq!(wrapped.lemma_form_ratio, excluded.lemma_form_ratio);
  assert_eq!(wrapped.inflected_lemma_form_ratio, excluded.inflected_lemma_form_ratio);
}

#[test]
fn test_mixed_metrics_in_unit_interval() {
  for policy in [RootPolicy::Exclude, RootPolicy::Wrap] {
    let config = MorphometricsConfig { root_policy: policy, ..Default::default() };
    let report = analyze_file(fixture("mixed.conllu"), &config).unwrap();

    for (metric, value) in report.metrics() {
      assert!(in_unit_interval(value), "{} = {value} under {policy:?}", metric.label());
    }
    assert!(in_unit_interval(report.average()));
  }
}

#[test]
fn test_mixed_repeated_forms_lower_ttr() {
  let report = analyze_file(fixture("mixed.conllu"), &MorphometricsConfig::default()).unwrap();
  // Three "." tokens share one form
  assert!(report.type_token_ratio < 1.0);
}

#[test]
fn test_malformed_rows_are_invisible() {
  let content = fs::read_to_string(fixture("mixed.conllu")).unwrap();
  let treebank = parse_treebank(&content);

  let forms = vocabulary(&treebank, Field::Form);
  assert!(!forms.contains("broken"));
  assert!(!forms.contains("didn't"));
  assert!(!forms.contains("seen"));
  assert_eq!(treebank.sentences().len(), 3);
  assert_eq!(treebank.token_count(), 16);

  let cleaned: String = content
    .lines()
    .filter(|line| !line.starts_with("8\tbroken"))
    .map(|line| format!("{line}\n"))
    .collect();
  let config = MorphometricsConfig::default();
  assert_eq!(
    analyze_treebank(&treebank, &config).unwrap(),
    analyze_treebank(&parse_treebank(&cleaned), &config).unwrap()
  );
}

#[test]
fn test_pipeline_is_idempotent() {
  let config = MorphometricsConfig::default();
  let first = analyze_file(fixture("mixed.conllu"), &config).unwrap();
  let second = analyze_file(fixture("mixed.conllu"), &config).unwrap();

  for ((_, a), (_, b)) in first.metrics().iter().zip(second.metrics().iter()) {
    assert_eq!(a.to_bits(), b.to_bits());
  }
  assert_eq!(format_report(&first, OutputFormat::Pretty), format_report(&second, OutputFormat::Pretty));
}

#[test]
fn test_every_lemma_with_one_form_gives_zero_lf() {
  let content = "1\tcats\tcats\tNOUN\t_\t_\t2\tnsubj\t_\t_\n\
                 2\tsleep\tsleep\tVERB\t_\t_\t0\troot\t_\t_\n\
                 \n\
                 1\tcats\tcats\tNOUN\t_\t_\t2\tnsubj\t_\t_\n\
                 2\tpurr\tpurr\tVERB\t_\t_\t0\troot\t_\t_\n\
                 \n";
  let report = analyze_treebank(&parse_treebank(content), &MorphometricsConfig::default()).unwrap();
  assert_eq!(report.lemma_form_ratio, 0.0);
  assert_eq!(report.inflected_lemma_form_ratio, 0.0);
  assert_eq!(report.type_token_ratio, 0.75);
}

#[test]
fn test_single_form_corpus_is_degenerate() {
  let content = "1\tbuffalo\tbuffalo\tNOUN\t_\t_\t0\troot\t_\t_\n\
                 2\tbuffalo\tbuffalo\tVERB\t_\t_\t1\tdep\t_\t_\n\
                 \n";
  let err = analyze_treebank(&parse_treebank(content), &MorphometricsConfig::default()).unwrap_err();
  assert!(err.is_degenerate());
  assert!(err.to_string().contains("word entropy"));
}

#[test]
fn test_empty_file_is_degenerate() {
  let err = analyze_treebank(&parse_treebank(""), &MorphometricsConfig::default()).unwrap_err();
  assert!(err.is_degenerate());
}
