use saju::config::{Config, ScoringWeights};
use saju::error::SajuError;
use saju::scorer::Scorer;
use std::fs::File;
use std::io::Write;

fn write_json(dir: &tempfile::TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("weights.json");
    let mut f = File::create(&path).unwrap();
    write!(f, "{}", body).unwrap();
    path
}

#[test]
fn partial_file_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_json(
        &dir,
        r#"{ "weight_balance": 0.25, "weight_yongshin": 0.40, "penalty_gishin": 10.0 }"#,
    );
    let w = ScoringWeights::load_from_file(&path).unwrap();
    assert_eq!(w.weight_balance, 0.25);
    assert_eq!(w.weight_yongshin, 0.40);
    assert_eq!(w.penalty_gishin, 10.0);
    assert_eq!(w.penalty_gushin, 4.0);
    assert_eq!(w.threshold_dominant_group, 3);
}

#[test]
fn file_with_bad_sum_loads_but_scorer_rejects_it() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_json(&dir, r#"{ "weight_balance": 0.9 }"#);
    let weights = ScoringWeights::load_from_file(&path).unwrap();
    assert_eq!(weights.weight_balance, 0.9);
    let config = Config {
        weights,
        ..Default::default()
    };
    assert!(matches!(Scorer::new(config), Err(SajuError::Config(_))));
}

#[test]
fn credits_above_one_are_rejected() {
    let w = ScoringWeights {
        credit_heeshin: 1.5,
        ..Default::default()
    };
    assert!(matches!(w.validate(), Err(SajuError::Config(_))));
}

#[test]
fn malformed_json_is_a_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_json(&dir, "{ not json");
    assert!(matches!(
        ScoringWeights::load_from_file(&path),
        Err(SajuError::Json(_))
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        ScoringWeights::load_from_file(dir.path().join("nope.json")),
        Err(SajuError::Io(_))
    ));
}

#[test]
fn config_round_trips_through_json() {
    let config = Config::default();
    let text = serde_json::to_string(&config).unwrap();
    let back: Config = serde_json::from_str(&text).unwrap();
    assert_eq!(back.weights, config.weights);
    assert_eq!(back.batch.top, 20);
}
