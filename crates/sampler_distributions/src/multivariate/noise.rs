//! Independent noise vectors fed into the Cholesky transform.
//!
//! A [`NoiseGenerator`] returns `n` independent draws per call. The
//! transform multiplies them by the covariance factor, so the marginal
//! family of the result is set by the noise.

use std::f64::consts::SQRT_2;
use std::fmt;

use sampler_core::rng::UniformSource;
use sampler_core::types::{SamplingError, SamplingResult};

use crate::traits::Sampler;
use crate::univariate::{standard_normal, Triangular};

/// Source of independent per-dimension noise.
pub trait NoiseGenerator {
    /// Returns `dim` independent draws.
    fn noise(&self, rng: &mut dyn UniformSource, dim: usize) -> Vec<f64>;
}

impl<N: NoiseGenerator + ?Sized> NoiseGenerator for &N {
    fn noise(&self, rng: &mut dyn UniformSource, dim: usize) -> Vec<f64> {
        (**self).noise(rng, dim)
    }
}

impl<N: NoiseGenerator + ?Sized> NoiseGenerator for Box<N> {
    fn noise(&self, rng: &mut dyn UniformSource, dim: usize) -> Vec<f64> {
        (**self).noise(rng, dim)
    }
}

/// Standard normal noise, one quantile evaluation per dimension.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StandardNormalNoise;

impl NoiseGenerator for StandardNormalNoise {
    fn noise(&self, rng: &mut dyn UniformSource, dim: usize) -> Vec<f64> {
        (0..dim).map(|_| standard_normal(rng)).collect()
    }
}

/// Uniform noise on `[-√3, √3)`: zero mean, unit variance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UniformNoise;

impl UniformNoise {
    /// Half-width of the support.
    pub const HALF_WIDTH: f64 = 1.732_050_807_568_877_2;
}

impl NoiseGenerator for UniformNoise {
    fn noise(&self, rng: &mut dyn UniformSource, dim: usize) -> Vec<f64> {
        let width = 2.0 * Self::HALF_WIDTH;
        (0..dim)
            .map(|_| rng.next_uniform() * width - Self::HALF_WIDTH)
            .collect()
    }
}

/// Triangular noise with skew parameter `alpha`.
///
/// The support is `a = -3√2 (1 + alpha/2)`, `b = 3√2 (1 - alpha/2)` with
/// mode `c = 3√2 alpha`, which keeps the mean at zero for every `alpha`.
/// The mode stays inside the support only for `|alpha| <= 2/3`.
///
/// Unlike the normal and uniform noise, the marginal variance is not one:
/// each draw has variance `3 + 9 alpha² / 4`, so correlated samples built on
/// it have covariance equal to that factor times the requested matrix.
///
/// # Examples
/// ```
/// use sampler_distributions::multivariate::TriangularNoise;
///
/// assert!(TriangularNoise::new(0.4).is_ok());
/// assert!(TriangularNoise::new(1.5).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriangularNoise {
    alpha: f64,
    triangle: Triangular,
}

impl TriangularNoise {
    /// Creates triangular noise.
    ///
    /// # Errors
    /// `InvalidParameter` when `alpha` lies outside `[-1, 1]` or places the
    /// mode outside the support.
    pub fn new(alpha: f64) -> SamplingResult<Self> {
        if !(-1.0..=1.0).contains(&alpha) {
            return Err(SamplingError::InvalidParameter(format!(
                "alpha must lie in [-1, 1], got {}",
                alpha
            )));
        }
        let base = 3.0 * SQRT_2;
        let a = -base * (1.0 + alpha / 2.0);
        let b = base * (1.0 - alpha / 2.0);
        let c = base * alpha;
        Ok(Self {
            alpha,
            triangle: Triangular::new(a, b, c)?,
        })
    }

    /// Skew parameter.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl NoiseGenerator for TriangularNoise {
    fn noise(&self, rng: &mut dyn UniformSource, dim: usize) -> Vec<f64> {
        (0..dim).map(|_| self.triangle.sample(rng)).collect()
    }
}

/// Noise generator backed by a closure. Built by [`noise_fn`].
#[derive(Clone, Copy)]
pub struct FnNoise<F>(F);

impl<F> fmt::Debug for FnNoise<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnNoise").finish_non_exhaustive()
    }
}

impl<F> NoiseGenerator for FnNoise<F>
where
    F: Fn(&mut dyn UniformSource, usize) -> Vec<f64>,
{
    fn noise(&self, rng: &mut dyn UniformSource, dim: usize) -> Vec<f64> {
        (self.0)(rng, dim)
    }
}

/// Wraps a closure as a [`NoiseGenerator`].
pub fn noise_fn<F>(f: F) -> FnNoise<F>
where
    F: Fn(&mut dyn UniformSource, usize) -> Vec<f64>,
{
    FnNoise(f)
}
