//! Discrete distributions on the integers.

use sampler_core::rng::UniformSource;
use sampler_core::types::{SamplingError, SamplingResult};

use crate::traits::Sampler;

/// Uniform integer on `[low, high)`.
///
/// # Examples
/// ```
/// use sampler_core::rng::SamplerRng;
/// use sampler_distributions::{RandInt, Sampler};
///
/// let die = RandInt::new(1, 7).unwrap();
/// let mut rng = SamplerRng::from_seed(6);
/// let roll = die.sample(&mut rng);
/// assert!((1..7).contains(&roll));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RandInt {
    low: i64,
    high: i64,
}

impl RandInt {
    /// Creates a uniform integer distribution.
    ///
    /// # Errors
    /// `InvalidParameter` unless `low < high`.
    pub fn new(low: i64, high: i64) -> SamplingResult<Self> {
        if low >= high {
            return Err(SamplingError::InvalidParameter(format!(
                "low must be below high, got [{}, {})",
                low, high
            )));
        }
        Ok(Self { low, high })
    }

    /// Uniform integer on `[0, high)`.
    pub fn below(high: i64) -> SamplingResult<Self> {
        Self::new(0, high)
    }

    /// Maps a uniform value to `floor(u * (high - low) + low)`.
    #[inline]
    pub fn from_unit(low: i64, high: i64, u: f64) -> i64 {
        let span = high as f64 - low as f64;
        let value = (u * span + low as f64).floor() as i64;
        value.clamp(low, high - 1)
    }
}

impl Sampler for RandInt {
    type Output = i64;

    fn sample(&self, rng: &mut dyn UniformSource) -> i64 {
        Self::from_unit(self.low, self.high, rng.next_uniform())
    }
}

/// Index uniformly drawn from `0..len`. `len` must be non-zero.
#[inline]
pub(crate) fn uniform_index(rng: &mut dyn UniformSource, len: usize) -> usize {
    let index = (rng.next_uniform() * len as f64) as usize;
    index.min(len - 1)
}

/// Number of Bernoulli(p) trials up to and including the first success.
///
/// Support is `{1, 2, ...}`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometric {
    p: f64,
}

impl Geometric {
    /// Creates a geometric distribution; `p` must lie in `(0, 1]`.
    pub fn new(p: f64) -> SamplingResult<Self> {
        if !(p > 0.0 && p <= 1.0) {
            return Err(SamplingError::InvalidParameter(format!(
                "p must lie in (0, 1], got {}",
                p
            )));
        }
        Ok(Self { p })
    }
}

impl Sampler for Geometric {
    type Output = u64;

    fn sample(&self, rng: &mut dyn UniformSource) -> u64 {
        let u = rng.next_uniform();
        if self.p == 1.0 {
            return 1;
        }
        let k = ((1.0 - u).ln() / (1.0 - self.p).ln()).ceil();
        k.max(1.0) as u64
    }
}

/// Number of successes in `n` independent Bernoulli(p) trials.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Binomial {
    n: u64,
    p: f64,
}

impl Binomial {
    /// Creates a binomial distribution; `p` must lie in `[0, 1]`.
    pub fn new(n: u64, p: f64) -> SamplingResult<Self> {
        if !(0.0..=1.0).contains(&p) {
            return Err(SamplingError::InvalidParameter(format!(
                "p must lie in [0, 1], got {}",
                p
            )));
        }
        Ok(Self { n, p })
    }
}

impl Sampler for Binomial {
    type Output = u64;

    fn sample(&self, rng: &mut dyn UniformSource) -> u64 {
        (0..self.n).filter(|_| rng.next_uniform() < self.p).count() as u64
    }
}
