//! # Uniform Source Infrastructure
//!
//! This module provides the single source of randomness for the sampling
//! fabric: a seedable uniform generator and the capability trait through which
//! every distribution consumes it.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: After seeding, output is bit-for-bit determined by
//!   the seed and call order
//! - **Injectable**: Distributions take `&mut dyn UniformSource`, so tests can
//!   build isolated generators or scripted stubs
//! - **Default instance**: A per-thread generator backs the convenience API
//!   in [`global`]
//!
//! ## Module Structure
//!
//! - [`UniformSource`]: capability trait, one `f64` in `[0, 1)` per call
//! - [`SamplerRng`]: PCG-backed implementation with seed management
//! - [`Seed`]: validated seed value
//! - [`global`]: per-thread default instance with `reseed`
//!
//! ## Usage Example
//!
//! ```rust
//! use sampler_core::rng::{SamplerRng, UniformSource};
//!
//! let mut rng = SamplerRng::from_seed(12345);
//! let u = rng.next_uniform();
//! assert!((0.0..1.0).contains(&u));
//!
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_uniform(&mut buffer);
//! ```
//!
//! ## Concurrency
//!
//! Generators are not synchronised. The default instance is thread-local,
//! giving one independent stream per thread.

pub mod global;
mod source;

pub use global::{default_source, reseed, DefaultSource};
pub use source::{SamplerRng, Seed, UniformSource};

#[cfg(test)]
mod tests;
