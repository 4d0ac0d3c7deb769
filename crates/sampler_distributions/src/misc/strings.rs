//! Random strings over an alphabet.

use sampler_core::rng::UniformSource;
use sampler_core::shape::{generate, Sample, Shape};
use sampler_core::types::{SamplingError, SamplingResult};

use crate::univariate::uniform_index;

/// Builds strings of `length` characters drawn uniformly from `chars`.
///
/// Pass [`DEFAULT_CHARS`](crate::constants::DEFAULT_CHARS) for the default
/// alphabet. Each string consumes `length` uniforms.
///
/// # Errors
/// `InvalidParameter` when `chars` is empty.
pub fn rand_string(
    length: usize,
    chars: &str,
    shape: &Shape,
    rng: &mut dyn UniformSource,
) -> SamplingResult<Sample<String>> {
    let alphabet: Vec<char> = chars.chars().collect();
    if alphabet.is_empty() {
        return Err(SamplingError::invalid_parameter("alphabet is empty"));
    }
    generate(shape, || {
        (0..length)
            .map(|_| alphabet[uniform_index(&mut *rng, alphabet.len())])
            .collect()
    })
}
