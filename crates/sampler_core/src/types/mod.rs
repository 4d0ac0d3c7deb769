//! Shared types for the sampling fabric.
//!
//! - `SamplingError`: the error taxonomy of every sampling operation (`types::error`)

pub mod error;

pub use error::{SamplingError, SamplingResult};
