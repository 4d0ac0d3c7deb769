//! # sampler_core: Deterministic Sampling Fabric
//!
//! ## Layer 1 (Foundation) Role
//!
//! sampler_core is the bottom layer of the sampling workspace, providing:
//! - The seedable uniform source and its reseed contract (`rng`)
//! - Shape-generalised sample construction (`shape`)
//! - The table-driven inverse normal CDF (`math::InverseNormalCdf`)
//! - Cholesky factorisation of covariance matrices (`math::cholesky`)
//! - The shared error taxonomy (`types::SamplingError`)
//!
//! Distributions built on this fabric live in `sampler_distributions`.
//!
//! ## Usage Examples
//!
//! ```rust
//! use sampler_core::math::quantile;
//! use sampler_core::rng::{SamplerRng, UniformSource};
//! use sampler_core::shape::{generate, Shape};
//!
//! let mut rng = SamplerRng::from_seed(42);
//!
//! // A 2x3 array of standard normal draws
//! let sample = generate(&Shape::Tensor(vec![2, 3]), || quantile(rng.next_uniform())).unwrap();
//! assert_eq!(sample.len(), 6);
//! ```
//!
//! ## Concurrency
//!
//! Everything here is synchronous and CPU-bound. Generators are not shared
//! between threads; the default instance in [`rng::global`] is per thread.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod math;
pub mod rng;
pub mod shape;
pub mod types;
