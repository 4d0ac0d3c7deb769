//! # sampler_distributions (L2: Distributions)
//!
//! Probability distributions drawn through the sampling fabric of
//! `sampler_core`.
//!
//! This crate provides:
//! - The [`Sampler`] capability trait and closure adapter [`from_fn`]
//! - Univariate distributions (uniform, normal, Poisson, chi-squared, ...)
//! - Finite mixtures over heterogeneous component samplers
//! - Correlated multivariate sampling through a Cholesky transform
//! - Array utilities: shuffling, permutations, weighted choice, random strings
//! - A convenience [`api`] drawing from the per-thread default source
//!
//! ## Design Principles
//!
//! - **Validate at construction**: constructors return `SamplingResult`,
//!   sampling a constructed distribution never fails
//! - **Explicit sources**: every draw takes a `&mut dyn UniformSource`, so a
//!   seeded `SamplerRng` reproduces the same values
//! - **Shape generalisation**: [`Sampler::sample_shape`] fills scalars,
//!   vectors and tensors in row-major order
//!
//! ## Example
//!
//! ```
//! use sampler_core::rng::SamplerRng;
//! use sampler_core::shape::Shape;
//! use sampler_distributions::{Normal, Sampler};
//!
//! let mut rng = SamplerRng::from_seed(7);
//! let normal = Normal::new(10.0, 2.0).unwrap();
//! let grid = normal.sample_shape(&mut rng, &Shape::Tensor(vec![2, 3])).unwrap();
//! assert_eq!(grid.len(), 6);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod api;
pub mod constants;
pub mod misc;
pub mod multivariate;
pub mod traits;
pub mod univariate;

pub use traits::{from_fn, Constant, FnSampler, Sampler};
pub use univariate::{
    Binomial, Cauchy, ChiSquared, Exponential, Geometric, LogNormal, Mixture, Normal, Pareto,
    Poisson, RandInt, Triangular, Uniform,
};
