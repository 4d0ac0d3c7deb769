//! Correlated sampling through the Cholesky factor of a covariance matrix.
//!
//! For mean vector `μ`, covariance `Σ = L Lᵀ` and independent unit-variance
//! noise `z`, each sample is `x = μ + L z`. The factor is recomputed on every
//! call; nothing is cached between calls.

use serde::Serialize;
use tracing::debug;

use sampler_core::math::{CholeskyFactor, SquareMatrix};
use sampler_core::rng::UniformSource;
use sampler_core::types::{SamplingError, SamplingResult};

use super::noise::NoiseGenerator;

/// Result of a multivariate draw.
///
/// Serialises as a flat array for [`Single`](Self::Single) and an array of
/// arrays for [`Batch`](Self::Batch).
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MultivariateSample {
    /// One vector; produced when no count, or a count of 1, was requested.
    Single(Vec<f64>),
    /// `count` vectors, in draw order.
    Batch(Vec<Vec<f64>>),
}

impl MultivariateSample {
    /// Number of vectors held.
    pub fn len(&self) -> usize {
        match self {
            MultivariateSample::Single(_) => 1,
            MultivariateSample::Batch(rows) => rows.len(),
        }
    }

    /// True only for an empty batch, which [`multivariate`] never returns.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The single vector, if this is a single draw.
    pub fn as_single(&self) -> Option<&[f64]> {
        match self {
            MultivariateSample::Single(x) => Some(x),
            MultivariateSample::Batch(_) => None,
        }
    }

    /// All vectors, wrapping a single draw in a one-element batch.
    pub fn into_rows(self) -> Vec<Vec<f64>> {
        match self {
            MultivariateSample::Single(x) => vec![x],
            MultivariateSample::Batch(rows) => rows,
        }
    }
}

/// Checks that the covariance is `n x n` for `n` means and factorises it.
pub(crate) fn factorise(means: &[f64], covariance: &[Vec<f64>]) -> SamplingResult<CholeskyFactor<f64>> {
    let dim = means.len();
    if covariance.len() != dim {
        return Err(SamplingError::InvalidMatrixShape(format!(
            "covariance has {} rows but there are {} means",
            covariance.len(),
            dim
        )));
    }
    debug!(dim, "factorising covariance");
    SquareMatrix::from_rows(covariance)?.cholesky()
}

/// Draws correlated vectors `means + L z`.
///
/// `count = None` or `Some(1)` returns [`MultivariateSample::Single`];
/// larger counts return a batch of that many independent vectors. All
/// parameter checks run before the first draw.
///
/// # Errors
/// - `InvalidMatrixShape` when the covariance is not square or does not
///   match `means`
/// - `NotPositiveDefinite` when factorisation fails
/// - `InvalidSize` for `Some(0)`
/// - `NoiseShapeMismatch` when the noise generator returns the wrong length
///
/// # Examples
/// ```
/// use sampler_core::rng::SamplerRng;
/// use sampler_distributions::multivariate::{multivariate, StandardNormalNoise};
///
/// let mut rng = SamplerRng::from_seed(3);
/// let cov = vec![vec![1.0, 0.5], vec![0.5, 2.0]];
/// let batch = multivariate(&[0.0, 1.0], &cov, &StandardNormalNoise, Some(4), &mut rng).unwrap();
/// assert_eq!(batch.len(), 4);
/// ```
pub fn multivariate<N>(
    means: &[f64],
    covariance: &[Vec<f64>],
    noise: &N,
    count: Option<usize>,
    rng: &mut dyn UniformSource,
) -> SamplingResult<MultivariateSample>
where
    N: NoiseGenerator + ?Sized,
{
    let factor = factorise(means, covariance)?;
    if count == Some(0) {
        return Err(SamplingError::InvalidSize(
            "count must be a positive integer, got 0".to_string(),
        ));
    }

    let dim = means.len();
    let draws = count.unwrap_or(1);
    let mut rows = Vec::with_capacity(draws);
    for _ in 0..draws {
        let z = noise.noise(rng, dim);
        if z.len() != dim {
            return Err(SamplingError::NoiseShapeMismatch {
                expected: dim,
                got: z.len(),
            });
        }
        rows.push(factor.affine(means, &z));
    }

    match count {
        Some(k) if k > 1 => Ok(MultivariateSample::Batch(rows)),
        _ => Ok(MultivariateSample::Single(rows.pop().unwrap_or_default())),
    }
}
