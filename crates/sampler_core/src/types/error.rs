//! Error types for structured error handling.
//!
//! This module provides [`SamplingError`], the single error taxonomy shared by
//! every sampling operation. All variants are raised synchronously at the point
//! where a precondition is violated, before any value is drawn from a
//! uniform source.

use thiserror::Error;

/// Categorised sampling errors.
///
/// # Variants
/// - `InvalidParameter`: Distribution parameter outside its domain
/// - `InvalidShape`: Malformed shape descriptor
/// - `InvalidSeed`: Seed value that cannot be represented as generator state
/// - `InvalidMatrixShape`: Matrix is not square or does not match the means
/// - `NotPositiveDefinite`: Cholesky factorisation hit a non-positive pivot
/// - `InvalidSize`: Sample count present but not a positive integer
/// - `NoiseShapeMismatch`: Noise generator returned a vector of the wrong length
/// - `CountMismatch`: Parallel lists (generators/priors, items/weights) differ in length
/// - `PriorsNotNormalized`: Mixture priors do not sum to 1
///
/// # Examples
/// ```
/// use sampler_core::types::SamplingError;
///
/// let err = SamplingError::InvalidParameter("lambda must be positive".to_string());
/// assert_eq!(format!("{}", err), "Invalid parameter: lambda must be positive");
///
/// let err = SamplingError::CountMismatch { generators: 2, priors: 1 };
/// assert!(format!("{}", err).contains("2 generators"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SamplingError {
    /// Distribution parameter outside its valid domain.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Shape descriptor is neither absent, a length, nor a dimension list.
    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    /// Seed is non-finite, negative, fractional or too large.
    #[error("Invalid seed: {0}")]
    InvalidSeed(String),

    /// Matrix is not square, or its dimension does not match the means vector.
    #[error("Invalid matrix shape: {0}")]
    InvalidMatrixShape(String),

    /// Non-positive pivot encountered during Cholesky factorisation.
    #[error("Matrix is not positive definite: pivot {index} is not positive")]
    NotPositiveDefinite {
        /// Diagonal index at which factorisation failed
        index: usize,
    },

    /// Sample count present but not a positive integer.
    #[error("Invalid size: {0}")]
    InvalidSize(String),

    /// Noise generator returned a vector of unexpected length.
    #[error("Noise generator returned {got} values, expected {expected}")]
    NoiseShapeMismatch {
        /// Requested dimension
        expected: usize,
        /// Length actually returned
        got: usize,
    },

    /// Parallel lists have different lengths.
    #[error("Count mismatch: {generators} generators but {priors} priors")]
    CountMismatch {
        /// Number of generators (or items)
        generators: usize,
        /// Number of priors (or weights)
        priors: usize,
    },

    /// Mixture priors do not sum to one within tolerance.
    #[error("Priors must sum to 1, got {sum}")]
    PriorsNotNormalized {
        /// Actual sum of the priors
        sum: f64,
    },
}

impl SamplingError {
    /// Shorthand for [`SamplingError::InvalidParameter`].
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        SamplingError::InvalidParameter(msg.into())
    }

    /// Shorthand for [`SamplingError::InvalidShape`].
    pub fn invalid_shape(msg: impl Into<String>) -> Self {
        SamplingError::InvalidShape(msg.into())
    }
}

/// Result alias used throughout the sampling crates.
pub type SamplingResult<T> = Result<T, SamplingError>;
