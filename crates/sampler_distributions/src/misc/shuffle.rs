//! In-place shuffling and random permutations.

use sampler_core::rng::UniformSource;
use sampler_core::types::{SamplingError, SamplingResult};

use crate::univariate::uniform_index;

/// Shuffles `items` in place.
///
/// Walks from the last index down to 1, swapping each position with a
/// uniformly chosen index at or below it. Consumes `len - 1` uniforms.
pub fn shuffle<T>(items: &mut [T], rng: &mut dyn UniformSource) {
    for i in (1..items.len()).rev() {
        let j = uniform_index(rng, i + 1);
        items.swap(i, j);
    }
}

/// Returns a random ordering of `0..n`.
///
/// # Errors
/// `InvalidParameter` when `n` is zero.
pub fn permutation(n: usize, rng: &mut dyn UniformSource) -> SamplingResult<Vec<usize>> {
    if n == 0 {
        return Err(SamplingError::invalid_parameter(
            "permutation length must be positive",
        ));
    }
    let mut indices: Vec<usize> = (0..n).collect();
    shuffle(&mut indices, rng);
    Ok(indices)
}

/// Returns `items` in shuffled order.
pub fn permute<T>(mut items: Vec<T>, rng: &mut dyn UniformSource) -> Vec<T> {
    shuffle(&mut items, rng);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use sampler_core::rng::SamplerRng;

    #[test]
    fn test_permutation_contains_every_index() {
        let mut rng = SamplerRng::from_seed(1);
        let mut p = permutation(10, &mut rng).unwrap();
        p.sort_unstable();
        assert_eq!(p, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_zero_length_rejected() {
        let mut rng = SamplerRng::from_seed(1);
        assert!(matches!(
            permutation(0, &mut rng),
            Err(SamplingError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_short_slices_untouched() {
        let mut rng = SamplerRng::from_seed(1);
        let mut empty: [u8; 0] = [];
        shuffle(&mut empty, &mut rng);
        let mut one = [7];
        shuffle(&mut one, &mut rng);
        assert_eq!(one, [7]);
        assert_eq!(permutation(1, &mut rng).unwrap(), vec![0]);
    }

    #[test]
    fn test_positions_roughly_uniform() {
        let mut rng = SamplerRng::from_seed(2);
        let mut first = [0usize; 4];
        for _ in 0..8_000 {
            let p = permute(vec![0, 1, 2, 3], &mut rng);
            first[p[0]] += 1;
        }
        assert!(first.iter().all(|&c| (1_700..2_300).contains(&c)), "{:?}", first);
    }

    proptest! {
        #[test]
        fn prop_shuffle_is_permutation(mut items in proptest::collection::vec(any::<i32>(), 0..64), seed in any::<u64>()) {
            let mut rng = SamplerRng::from_seed(seed);
            let mut expected = items.clone();
            shuffle(&mut items, &mut rng);
            items.sort_unstable();
            expected.sort_unstable();
            prop_assert_eq!(items, expected);
        }
    }
}
