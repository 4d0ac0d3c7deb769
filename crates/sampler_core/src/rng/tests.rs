//! Unit tests for the uniform source.
//!
//! This module contains tests verifying:
//! - Seed reproducibility and seed sensitivity
//! - Output range of uniform values
//! - Wholesale reseeding of both owned and default generators
//! - Seed validation
//! - Statistical properties via property-based testing

use super::*;
use crate::types::SamplingError;

/// Verifies that the same seed produces identical sequences.
#[test]
fn test_seed_reproducibility() {
    let mut rng1 = SamplerRng::from_seed(12345);
    let mut rng2 = SamplerRng::from_seed(12345);

    for _ in 0..100 {
        assert_eq!(rng1.next_uniform(), rng2.next_uniform());
    }
}

/// Verifies that uniform values are in the correct range [0, 1).
#[test]
fn test_uniform_range() {
    let mut rng = SamplerRng::from_seed(42);

    for _ in 0..10_000 {
        let value = rng.next_uniform();
        assert!(value >= 0.0, "Uniform value {} is below 0", value);
        assert!(value < 1.0, "Uniform value {} is >= 1", value);
    }
}

#[test]
fn test_fill_uniform_matches_single_draws() {
    let mut rng1 = SamplerRng::from_seed(7);
    let mut rng2 = SamplerRng::from_seed(7);
    let mut buffer = vec![0.0; 64];

    rng1.fill_uniform(&mut buffer);

    for &value in &buffer {
        assert_eq!(value, rng2.next_uniform());
    }
}

#[test]
fn test_empty_buffer() {
    let mut rng = SamplerRng::from_seed(42);
    let mut empty: Vec<f64> = vec![];
    rng.fill_uniform(&mut empty);
}

#[test]
fn test_reseed_replaces_state() {
    let mut rng = SamplerRng::from_seed(1);
    let _ = rng.next_uniform();
    let _ = rng.next_uniform();

    rng.reseed(99);
    let mut fresh = SamplerRng::from_seed(99);

    assert_eq!(rng.seed(), Some(99));
    for _ in 0..10 {
        assert_eq!(rng.next_uniform(), fresh.next_uniform());
    }
}

#[test]
fn test_entropy_generator_has_no_seed() {
    let mut rng = SamplerRng::from_entropy();
    assert_eq!(rng.seed(), None);
    let u = rng.next_uniform();
    assert!((0.0..1.0).contains(&u));
}

#[test]
fn test_default_source_reproducible_after_reseed() {
    global::reseed(2024);
    let mut source = default_source();
    let first: Vec<f64> = (0..5).map(|_| source.next_uniform()).collect();

    global::reseed(2024);
    let second: Vec<f64> = (0..5).map(|_| source.next_uniform()).collect();

    assert_eq!(first, second);
    assert_eq!(global::current_seed(), Some(2024));
}

#[test]
fn test_default_source_matches_owned_generator() {
    global::reseed(31);
    let mut owned = SamplerRng::from_seed(31);
    let mut source = DefaultSource;

    for _ in 0..20 {
        assert_eq!(source.next_uniform(), owned.next_uniform());
    }
}

#[test]
fn test_with_default_source_shares_stream() {
    global::reseed(5);
    let a = global::with_default_source(|rng| rng.next_uniform());
    let b = default_source().next_uniform();

    let mut owned = SamplerRng::from_seed(5);
    assert_eq!(a, owned.next_uniform());
    assert_eq!(b, owned.next_uniform());
}

#[test]
fn test_reseed_f64_rejects_invalid_and_keeps_state() {
    global::reseed(11);
    let mut expected = SamplerRng::from_seed(11);

    for bad in [f64::NAN, f64::INFINITY, -1.0, 2.5, 1e30] {
        let err = global::reseed_f64(bad).unwrap_err();
        assert!(matches!(err, SamplingError::InvalidSeed(_)), "{:?}", err);
    }

    // Failed reseeds must not perturb the stream
    assert_eq!(default_source().next_uniform(), expected.next_uniform());
}

#[test]
fn test_reseed_f64_accepts_integral_values() {
    global::reseed_f64(123.0).unwrap();
    assert_eq!(global::current_seed(), Some(123));
}

#[test]
fn test_seed_parsing() {
    assert_eq!("42".parse::<Seed>().unwrap().value(), 42);
    assert_eq!(" 7.0 ".parse::<Seed>().unwrap().value(), 7);
    assert!("abc".parse::<Seed>().is_err());
    assert!("-3".parse::<Seed>().is_err());
    assert!("inf".parse::<Seed>().is_err());
}

#[test]
fn test_boxed_and_borrowed_sources() {
    fn draw(source: &mut dyn UniformSource) -> f64 {
        source.next_uniform()
    }

    let mut boxed: Box<dyn UniformSource> = Box::new(SamplerRng::from_seed(3));
    let mut reference = SamplerRng::from_seed(3);
    assert_eq!(draw(&mut boxed), reference.next_uniform());

    let mut owned = SamplerRng::from_seed(3);
    let mut borrowed = &mut owned;
    let mut reference = SamplerRng::from_seed(3);
    assert_eq!(draw(&mut borrowed), reference.next_uniform());
}

// ============================================================================
// Property-Based Tests
// ============================================================================

use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_uniform_in_range(seed in any::<u64>(), size in 1..5000usize) {
        let mut rng = SamplerRng::from_seed(seed);
        let mut buffer = vec![0.0; size];
        rng.fill_uniform(&mut buffer);

        for (i, &v) in buffer.iter().enumerate() {
            prop_assert!(
                (0.0..1.0).contains(&v),
                "Uniform value at index {} is out of range: {} (seed={})",
                i, v, seed
            );
        }
    }

    #[test]
    fn prop_seed_determinism(seed in any::<u64>(), count in 1..1000usize) {
        let mut rng1 = SamplerRng::from_seed(seed);
        let mut rng2 = SamplerRng::from_seed(seed);

        for i in 0..count {
            let v1 = rng1.next_uniform();
            let v2 = rng2.next_uniform();
            prop_assert_eq!(v1, v2, "Mismatch at index {} for seed {}", i, seed);
        }
    }

    #[test]
    fn prop_different_seeds_different_sequences(seed1 in any::<u64>(), seed2 in any::<u64>()) {
        prop_assume!(seed1 != seed2);

        let mut rng1 = SamplerRng::from_seed(seed1);
        let mut rng2 = SamplerRng::from_seed(seed2);

        let values1: Vec<f64> = (0..3).map(|_| rng1.next_uniform()).collect();
        let values2: Vec<f64> = (0..3).map(|_| rng2.next_uniform()).collect();

        prop_assert_ne!(values1, values2, "Seeds {} and {} collided", seed1, seed2);
    }

    #[test]
    fn prop_uniform_mean(seed in any::<u64>()) {
        let mut rng = SamplerRng::from_seed(seed);
        let n = 20_000;
        let mean = (0..n).map(|_| rng.next_uniform()).sum::<f64>() / n as f64;
        prop_assert!((mean - 0.5).abs() < 0.02, "mean {} (seed={})", mean, seed);
    }
}
