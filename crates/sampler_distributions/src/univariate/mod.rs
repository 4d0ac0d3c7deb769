//! Univariate distributions.
//!
//! Each distribution validates its parameters in `new` and implements
//! [`Sampler`](crate::traits::Sampler):
//!
//! - Continuous: [`Uniform`], [`Normal`], [`LogNormal`], [`Exponential`],
//!   [`Cauchy`], [`Pareto`], [`Triangular`], [`ChiSquared`]
//! - Discrete: [`RandInt`], [`Geometric`], [`Binomial`], [`Poisson`]
//! - Composite: [`Mixture`] over boxed component samplers
//!
//! ## Example
//!
//! ```
//! use sampler_core::rng::SamplerRng;
//! use sampler_distributions::univariate::Poisson;
//! use sampler_distributions::Sampler;
//!
//! let mut rng = SamplerRng::from_seed(5);
//! let arrivals = Poisson::new(3.5).unwrap();
//! let _k: u64 = arrivals.sample(&mut rng);
//! ```

mod chi_squared;
mod continuous;
mod discrete;
mod mixture;
mod normal;
mod poisson;

pub use chi_squared::ChiSquared;
pub use continuous::{Cauchy, Exponential, Pareto, Triangular, Uniform};
pub use discrete::{Binomial, Geometric, RandInt};
pub(crate) use discrete::uniform_index;
pub use mixture::{Component, Mixture};
pub use normal::{standard_normal, LogNormal, Normal};
pub use poisson::{Poisson, PoissonMethod};

use sampler_core::types::{SamplingError, SamplingResult};

/// Fails with `InvalidParameter` unless `value` is finite.
pub(crate) fn require_finite(name: &str, value: f64) -> SamplingResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SamplingError::InvalidParameter(format!(
            "{} must be finite, got {}",
            name, value
        )))
    }
}

/// Fails with `InvalidParameter` unless `value` is finite and strictly positive.
pub(crate) fn require_positive(name: &str, value: f64) -> SamplingResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SamplingError::InvalidParameter(format!(
            "{} must be positive, got {}",
            name, value
        )))
    }
}
