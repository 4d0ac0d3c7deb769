//! Correlated multivariate sampling.
//!
//! - [`multivariate`]: `means + L z` for any [`NoiseGenerator`]
//! - [`StandardNormalNoise`], [`UniformNoise`], [`TriangularNoise`]: built-in
//!   noise families, plus [`noise_fn`] for closures
//! - [`MultivariateNormal`], [`MultivariateUniform`],
//!   [`MultivariateTriangular`]: fixed-noise wrappers

mod noise;
mod transform;
mod wrappers;

pub use noise::{
    noise_fn, FnNoise, NoiseGenerator, StandardNormalNoise, TriangularNoise, UniformNoise,
};
pub use transform::{multivariate, MultivariateSample};
pub use wrappers::{Correlated, MultivariateNormal, MultivariateTriangular, MultivariateUniform};
