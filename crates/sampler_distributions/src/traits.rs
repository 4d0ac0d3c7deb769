//! The `Sampler` capability trait.
//!
//! Every distribution in this crate exposes the same two operations: draw one
//! value from a uniform source, and fill a shaped array with such draws. The
//! trait is object safe so that heterogeneous components can be stored side
//! by side, as [`Mixture`](crate::univariate::Mixture) does.
//!
//! ## Example
//!
//! ```
//! use sampler_core::rng::{SamplerRng, UniformSource};
//! use sampler_distributions::traits::{from_fn, Sampler};
//!
//! let coin = from_fn(|rng: &mut dyn UniformSource| rng.next_uniform() < 0.5);
//! let mut rng = SamplerRng::from_seed(1);
//! let _heads: bool = coin.sample(&mut rng);
//! ```

use std::fmt;

use sampler_core::rng::UniformSource;
use sampler_core::shape::{generate, Sample, Shape};
use sampler_core::types::SamplingResult;

/// A value-producing random variable.
pub trait Sampler {
    /// Type of a single draw.
    type Output;

    /// Draws one value.
    fn sample(&self, rng: &mut dyn UniformSource) -> Self::Output;

    /// Draws `shape.leaf_count()` values laid out in row-major order.
    ///
    /// A scalar shape draws exactly once. Shape errors are raised before
    /// anything is drawn.
    fn sample_shape(
        &self,
        rng: &mut dyn UniformSource,
        shape: &Shape,
    ) -> SamplingResult<Sample<Self::Output>> {
        generate(shape, || self.sample(&mut *rng))
    }
}

impl<S: Sampler + ?Sized> Sampler for &S {
    type Output = S::Output;

    fn sample(&self, rng: &mut dyn UniformSource) -> Self::Output {
        (**self).sample(rng)
    }
}

impl<S: Sampler + ?Sized> Sampler for Box<S> {
    type Output = S::Output;

    fn sample(&self, rng: &mut dyn UniformSource) -> Self::Output {
        (**self).sample(rng)
    }
}

/// Sampler backed by a closure. Built by [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnSampler<F>(F);

impl<F> fmt::Debug for FnSampler<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSampler").finish_non_exhaustive()
    }
}

impl<T, F> Sampler for FnSampler<F>
where
    F: Fn(&mut dyn UniformSource) -> T,
{
    type Output = T;

    fn sample(&self, rng: &mut dyn UniformSource) -> T {
        (self.0)(rng)
    }
}

/// Wraps a closure as a [`Sampler`].
pub fn from_fn<T, F>(f: F) -> FnSampler<F>
where
    F: Fn(&mut dyn UniformSource) -> T,
{
    FnSampler(f)
}

/// Degenerate distribution that always yields the same value and consumes
/// no randomness.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constant<T>(pub T);

impl<T: Clone> Sampler for Constant<T> {
    type Output = T;

    fn sample(&self, _rng: &mut dyn UniformSource) -> T {
        self.0.clone()
    }
}
