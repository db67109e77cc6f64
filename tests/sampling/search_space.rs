//! Search space fixture -> trials.

use sample_core::{SampledValue, SearchSpace};
use sample_generator::{ConfigError, GeneratorError, TrialGenerator};
use std::collections::BTreeSet;
use std::io::Write;

const FIXTURE: &str = "tests/fixtures/search_space.yaml";
const TRIALS: u64 = 500;

fn load_fixture() -> SearchSpace {
    SearchSpace::from_file(FIXTURE).expect("Failed to load search space fixture")
}

#[test]
fn test_fixture_trials_stay_in_domain() {
    let space = load_fixture();
    let mut generator = TrialGenerator::new(&space, space.seed.unwrap()).unwrap();
    let expected_keys: BTreeSet<&str> = space.parameter_names().into_iter().collect();
    let optimizers = [
        SampledValue::from("adam"),
        SampledValue::from("sgd"),
        SampledValue::Int(3),
        SampledValue::Float(0.5),
        SampledValue::Bool(true),
    ];

    for trial in generator.trials(TRIALS) {
        let keys: BTreeSet<&str> = trial.params.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, expected_keys);

        let alphas = trial.get("alphas").and_then(|v| v.as_weights()).unwrap();
        assert_eq!(alphas.len(), 3);
        assert!((alphas.iter().sum::<f64>() - 1.0).abs() < 1e-9);

        let threshold = trial.get("threshold").and_then(|v| v.as_f64()).unwrap();
        assert!((0.0..1.0).contains(&threshold));

        let depth = trial.get("depth").and_then(|v| v.as_i64()).unwrap();
        assert!((0..10).contains(&depth));

        assert!(optimizers.contains(trial.get("optimizer").unwrap()));

        let model = trial.get("model").unwrap();
        let lr = model.get("lr").and_then(|v| v.as_f64()).unwrap();
        assert!((0.0001..0.1).contains(&lr));
        let layers = model.get("layers").and_then(|v| v.as_array()).unwrap();
        assert!(layers.len() == 2 || layers.len() == 3);
    }
}

#[test]
fn test_resumed_stream_matches_full_run() {
    let space = load_fixture();

    let mut full = TrialGenerator::new(&space, 42).unwrap();
    let full: Vec<_> = full.trials(20).collect();

    let mut resumed = TrialGenerator::new(&space, 42).unwrap().with_start_index(12);
    let resumed: Vec<_> = resumed.trials(8).collect();

    assert_eq!(&full[12..], resumed.as_slice());
}

#[test]
fn test_from_file_with_seed_override() {
    let from_file = TrialGenerator::from_file(FIXTURE, None).unwrap();
    assert_eq!(from_file.seed(), 42);

    let overridden = TrialGenerator::from_file(FIXTURE, Some(7)).unwrap();
    assert_eq!(overridden.seed(), 7);
    assert_ne!(from_file.trial_at(0), overridden.trial_at(0));
}

#[test]
fn test_invalid_space_fails_before_sampling() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        br#"
parameters:
  threshold: { type: float, low: 0 }
"#,
    )
    .unwrap();

    let err = TrialGenerator::from_file(file.path(), Some(1)).unwrap_err();
    let config = match err {
        GeneratorError::Config(config) => config,
        other => panic!("Expected configuration error, got {other:?}"),
    };
    assert_eq!(
        config.root_cause(),
        &ConfigError::EmptyFloatRange {
            low: 0.0,
            high: 0.0
        }
    );
}

#[test]
fn test_missing_file_is_a_schema_error() {
    let result = TrialGenerator::from_file("tests/fixtures/missing.yaml", Some(1));
    assert!(matches!(result, Err(GeneratorError::Schema(_))));
}
