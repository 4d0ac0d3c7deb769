//! Default generator instance.
//!
//! Each thread owns one [`SamplerRng`], seeded from OS entropy on first use.
//! [`reseed`] replaces it wholesale; [`DefaultSource`] draws from it one value
//! at a time, so samplers composed of other samplers all consume the same
//! stream.

use std::cell::RefCell;

use super::{SamplerRng, Seed, UniformSource};
use crate::types::SamplingResult;

thread_local! {
    static DEFAULT_RNG: RefCell<SamplerRng> = RefCell::new(SamplerRng::from_entropy());
}

/// Reseeds the calling thread's default generator.
///
/// After `reseed(s)` every draw through [`DefaultSource`] is a pure function
/// of `s` and call order.
///
/// # Examples
///
/// ```rust
/// use sampler_core::rng::{global, UniformSource};
///
/// global::reseed(7);
/// let a = global::default_source().next_uniform();
/// global::reseed(7);
/// let b = global::default_source().next_uniform();
/// assert_eq!(a, b);
/// ```
pub fn reseed(seed: u64) {
    DEFAULT_RNG.with(|rng| rng.borrow_mut().reseed(seed));
}

/// Reseeds from a floating-point value, failing with `InvalidSeed` when the
/// value is not a representable non-negative integer. The generator is left
/// untouched on failure.
pub fn reseed_f64(value: f64) -> SamplingResult<()> {
    let seed = Seed::try_from_f64(value)?;
    reseed(seed.value());
    Ok(())
}

/// Returns the seed of the default generator, or `None` if it has only ever
/// been seeded from entropy.
pub fn current_seed() -> Option<u64> {
    DEFAULT_RNG.with(|rng| rng.borrow().seed())
}

/// Runs `f` with exclusive access to the default generator.
///
/// # Panics
///
/// Panics if `f` re-enters the default generator (for example by drawing
/// through [`DefaultSource`]). Use [`DefaultSource`] for composed sampling.
pub fn with_default_source<R>(f: impl FnOnce(&mut SamplerRng) -> R) -> R {
    DEFAULT_RNG.with(|rng| f(&mut rng.borrow_mut()))
}

/// Handle onto the thread's default generator.
///
/// Borrows the generator for a single draw at a time, so it can be handed to
/// samplers whose components also draw from the default stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSource;

impl UniformSource for DefaultSource {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        with_default_source(|rng| rng.next_uniform())
    }
}

/// Returns a handle to the currently active default generator.
#[inline]
pub fn default_source() -> DefaultSource {
    DefaultSource
}
