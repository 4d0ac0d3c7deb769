//! Normal and log-normal distributions.
//!
//! Both invert a single uniform draw through the table-driven quantile of
//! `sampler_core::math`, so one normal variate costs exactly one uniform.

use sampler_core::math::quantile;
use sampler_core::rng::UniformSource;
use sampler_core::types::SamplingResult;

use super::{require_finite, require_positive};
use crate::traits::Sampler;

/// Draws one standard normal variate.
#[inline]
pub fn standard_normal(rng: &mut dyn UniformSource) -> f64 {
    quantile(rng.next_uniform())
}

/// Normal distribution N(loc, scale²).
///
/// # Examples
/// ```
/// use sampler_distributions::Normal;
///
/// let normal = Normal::new(1.0, 2.0).unwrap();
/// assert_eq!(normal.inverse_cdf(0.5), 1.0);
/// assert!(Normal::new(0.0, 0.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Normal {
    loc: f64,
    scale: f64,
}

impl Normal {
    /// Creates a normal distribution.
    ///
    /// # Errors
    /// `InvalidParameter` if `loc` is not finite or `scale` is not positive.
    pub fn new(loc: f64, scale: f64) -> SamplingResult<Self> {
        require_finite("loc", loc)?;
        require_positive("scale", scale)?;
        Ok(Self { loc, scale })
    }

    /// N(0, 1).
    pub fn standard() -> Self {
        Self {
            loc: 0.0,
            scale: 1.0,
        }
    }

    /// Mean.
    #[inline]
    pub fn loc(&self) -> f64 {
        self.loc
    }

    /// Standard deviation.
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Maps a uniform value to a normal variate: `scale * Φ⁻¹(u) + loc`.
    #[inline]
    pub fn inverse_cdf(&self, u: f64) -> f64 {
        self.scale * quantile(u) + self.loc
    }
}

impl Default for Normal {
    fn default() -> Self {
        Self::standard()
    }
}

impl Sampler for Normal {
    type Output = f64;

    fn sample(&self, rng: &mut dyn UniformSource) -> f64 {
        self.inverse_cdf(rng.next_uniform())
    }
}

/// Log-normal distribution: `exp(X)` for `X ~ N(loc, scale²)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogNormal {
    normal: Normal,
}

impl LogNormal {
    /// Creates a log-normal distribution from the parameters of the
    /// underlying normal.
    pub fn new(loc: f64, scale: f64) -> SamplingResult<Self> {
        Ok(Self {
            normal: Normal::new(loc, scale)?,
        })
    }
}

impl Sampler for LogNormal {
    type Output = f64;

    fn sample(&self, rng: &mut dyn UniformSource) -> f64 {
        self.normal.sample(rng).exp()
    }
}
