//! Domain properties of the samplers, checked over many draws.

use rand::rngs::StdRng;
use rand::SeedableRng;
use sample_core::SampledValue;
use sample_generator::{
    RandomChoice, RandomComposite, RandomFloat, RandomInt, RandomWeights, Sampler,
};
use std::collections::BTreeSet;

const SEED: u64 = 42;
const DRAWS: usize = 10_000;

#[test]
fn test_random_int_ten_never_leaves_range() {
    let sampler = RandomInt::below(10).unwrap();
    let mut rng = StdRng::seed_from_u64(SEED);

    let out_of_range = sampler
        .samples(&mut rng)
        .take(DRAWS)
        .filter(|v| !(0..10).contains(v))
        .count();
    assert_eq!(out_of_range, 0);
}

#[test]
fn test_ranges_for_many_bounds() {
    let mut rng = StdRng::seed_from_u64(SEED);

    for (low, high) in [(-100, -99), (-5, 5), (0, 1), (1_000, 1_000_000)] {
        let ints = RandomInt::range(low, high).unwrap();
        assert!(ints
            .samples(&mut rng)
            .take(500)
            .all(|v| v >= low && v < high));

        let floats = RandomFloat::range(low as f64, high as f64).unwrap();
        assert!(floats
            .samples(&mut rng)
            .take(500)
            .all(|v| v >= low as f64 && v < high as f64));
    }
}

#[test]
fn test_tiny_float_range_stays_half_open() {
    let low = 1.0;
    let high = 1.0 + f64::EPSILON;
    let sampler = RandomFloat::range(low, high).unwrap();
    let mut rng = StdRng::seed_from_u64(SEED);

    assert!(sampler.samples(&mut rng).take(DRAWS).all(|v| v == low));
}

#[test]
fn test_random_weights_four() {
    let sampler = RandomWeights::new(4).unwrap();
    let mut rng = StdRng::seed_from_u64(SEED);

    let weights = sampler.sample(&mut rng);
    assert_eq!(weights.len(), 4);
    assert!((weights.iter().sum::<f64>() - 1.0).abs() < 1e-9);
}

#[test]
fn test_random_choice_membership() {
    let choices = vec![
        SampledValue::from("adam"),
        SampledValue::Int(3),
        SampledValue::Array(vec![SampledValue::Int(64), SampledValue::Int(64)]),
    ];
    let sampler = RandomChoice::new(choices.clone()).unwrap();
    let mut rng = StdRng::seed_from_u64(SEED);

    assert!(sampler
        .samples(&mut rng)
        .take(1_000)
        .all(|v| choices.contains(&v)));
}

#[test]
fn test_composite_a_and_b() {
    let composite = RandomComposite::from_pairs([
        ("a", RandomInt::below(5).unwrap().into()),
        (
            "b",
            RandomChoice::new(vec![
                SampledValue::Int(1),
                SampledValue::Int(2),
                SampledValue::Int(3),
            ])
            .unwrap()
            .into(),
        ),
    ])
    .unwrap();
    let mut rng = StdRng::seed_from_u64(SEED);

    let sample = composite.sample(&mut rng);
    let keys: BTreeSet<&str> = sample.keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, BTreeSet::from(["a", "b"]));

    let a = sample["a"].as_i64().unwrap();
    assert!((0..5).contains(&a));
    let b = sample["b"].as_i64().unwrap();
    assert!((1..=3).contains(&b));
}
