//! Continuous distributions sampled by closed-form inversion.
//!
//! Each draw consumes exactly one uniform value.

use std::f64::consts::PI;

use sampler_core::rng::UniformSource;
use sampler_core::types::{SamplingError, SamplingResult};

use super::{require_finite, require_positive};
use crate::traits::Sampler;

/// Continuous uniform distribution on `[low, high)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Uniform {
    low: f64,
    high: f64,
}

impl Uniform {
    /// Creates a uniform distribution.
    ///
    /// # Errors
    /// `InvalidParameter` unless both bounds are finite and `low < high`.
    pub fn new(low: f64, high: f64) -> SamplingResult<Self> {
        require_finite("low", low)?;
        require_finite("high", high)?;
        if low >= high {
            return Err(SamplingError::InvalidParameter(format!(
                "low must be below high, got [{}, {})",
                low, high
            )));
        }
        Ok(Self { low, high })
    }

    /// Lower bound.
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper bound.
    pub fn high(&self) -> f64 {
        self.high
    }
}

impl Sampler for Uniform {
    type Output = f64;

    fn sample(&self, rng: &mut dyn UniformSource) -> f64 {
        rng.next_uniform() * (self.high - self.low) + self.low
    }
}

/// Exponential distribution with rate `lambda`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Exponential {
    lambda: f64,
}

impl Exponential {
    /// Creates an exponential distribution; `lambda` must be positive.
    pub fn new(lambda: f64) -> SamplingResult<Self> {
        require_positive("lambda", lambda)?;
        Ok(Self { lambda })
    }
}

impl Sampler for Exponential {
    type Output = f64;

    fn sample(&self, rng: &mut dyn UniformSource) -> f64 {
        -(1.0 - rng.next_uniform()).ln() / self.lambda
    }
}

/// Cauchy distribution with location `median` and scale `gamma`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cauchy {
    median: f64,
    gamma: f64,
}

impl Cauchy {
    /// Creates a Cauchy distribution; `gamma` must be positive.
    pub fn new(median: f64, gamma: f64) -> SamplingResult<Self> {
        require_finite("median", median)?;
        require_positive("gamma", gamma)?;
        Ok(Self { median, gamma })
    }
}

impl Sampler for Cauchy {
    type Output = f64;

    fn sample(&self, rng: &mut dyn UniformSource) -> f64 {
        self.median + self.gamma * (PI * (rng.next_uniform() - 0.5)).tan()
    }
}

/// Pareto distribution with shape `alpha` and scale `xm`.
///
/// Support is `[xm, ∞)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pareto {
    alpha: f64,
    xm: f64,
}

impl Pareto {
    /// Creates a Pareto distribution; both parameters must be positive.
    pub fn new(alpha: f64, xm: f64) -> SamplingResult<Self> {
        require_positive("alpha", alpha)?;
        require_positive("xm", xm)?;
        Ok(Self { alpha, xm })
    }
}

impl Sampler for Pareto {
    type Output = f64;

    fn sample(&self, rng: &mut dyn UniformSource) -> f64 {
        // 1 - u lies in (0, 1], keeping the draw finite
        let u = 1.0 - rng.next_uniform();
        self.xm / u.powf(1.0 / self.alpha)
    }
}

/// Triangular distribution on `[a, b]` with mode `c`.
///
/// # Examples
/// ```
/// use sampler_distributions::Triangular;
///
/// assert!(Triangular::new(0.0, 1.0, 0.5).is_ok());
/// assert!(Triangular::new(0.0, 1.0, 2.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangular {
    a: f64,
    b: f64,
    c: f64,
}

impl Triangular {
    /// Creates a triangular distribution.
    ///
    /// # Errors
    /// `InvalidParameter` unless all three values are finite, `a < b` and
    /// `a <= c <= b`.
    pub fn new(a: f64, b: f64, c: f64) -> SamplingResult<Self> {
        require_finite("a", a)?;
        require_finite("b", b)?;
        require_finite("c", c)?;
        if a >= b {
            return Err(SamplingError::InvalidParameter(format!(
                "a must be below b, got a={} b={}",
                a, b
            )));
        }
        if c < a || c > b {
            return Err(SamplingError::InvalidParameter(format!(
                "mode c={} outside [{}, {}]",
                c, a, b
            )));
        }
        Ok(Self { a, b, c })
    }

    /// Maps a uniform value through the piecewise inverse CDF.
    pub fn inverse_cdf(&self, u: f64) -> f64 {
        let (a, b, c) = (self.a, self.b, self.c);
        let split = (c - a) / (b - a);
        if u < split {
            a + (u * (b - a) * (c - a)).sqrt()
        } else {
            b - ((1.0 - u) * (b - a) * (b - c)).sqrt()
        }
    }
}

impl Sampler for Triangular {
    type Output = f64;

    fn sample(&self, rng: &mut dyn UniformSource) -> f64 {
        self.inverse_cdf(rng.next_uniform())
    }
}
