//! Poisson distribution.
//!
//! Small rates use Knuth's multiplication method, which is exact but costs
//! on average `lambda + 1` uniforms per draw. Above
//! [`POISSON_NORMAL_APPROXIMATION_THRESHOLD`] the draw is a normal variate
//! with matching mean and variance, rounded to the nearest integer and
//! clamped at zero.

use tracing::debug;

use sampler_core::rng::UniformSource;
use sampler_core::types::{SamplingError, SamplingResult};

use super::normal::Normal;
use crate::constants::POISSON_NORMAL_APPROXIMATION_THRESHOLD;
use crate::traits::Sampler;

/// Algorithm chosen for a given rate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PoissonMethod {
    /// Multiply uniforms until the product falls to `exp(-lambda)`.
    Knuth {
        /// `exp(-lambda)`
        limit: f64,
    },
    /// `round(N(lambda, lambda))`, clamped at zero.
    NormalApproximation(Normal),
}

/// Poisson distribution with rate `lambda`.
///
/// # Examples
/// ```
/// use sampler_distributions::univariate::{Poisson, PoissonMethod};
///
/// let small = Poisson::new(4.0).unwrap();
/// assert!(matches!(small.method(), PoissonMethod::Knuth { .. }));
///
/// let large = Poisson::new(100.0).unwrap();
/// assert!(matches!(large.method(), PoissonMethod::NormalApproximation(_)));
///
/// assert!(Poisson::new(0.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Poisson {
    lambda: f64,
    method: PoissonMethod,
}

impl Poisson {
    /// Creates a Poisson distribution.
    ///
    /// # Errors
    /// `InvalidParameter` unless `lambda` is finite and positive.
    pub fn new(lambda: f64) -> SamplingResult<Self> {
        if !(lambda.is_finite() && lambda > 0.0) {
            return Err(SamplingError::InvalidParameter(format!(
                "lambda must be positive, got {}",
                lambda
            )));
        }

        let method = if lambda > POISSON_NORMAL_APPROXIMATION_THRESHOLD {
            PoissonMethod::NormalApproximation(Normal::new(lambda, lambda.sqrt())?)
        } else {
            PoissonMethod::Knuth {
                limit: (-lambda).exp(),
            }
        };
        debug!(lambda, ?method, "poisson sampler configured");

        Ok(Self { lambda, method })
    }

    /// Rate parameter.
    #[inline]
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Algorithm used for this rate.
    #[inline]
    pub fn method(&self) -> PoissonMethod {
        self.method
    }
}

impl Sampler for Poisson {
    type Output = u64;

    fn sample(&self, rng: &mut dyn UniformSource) -> u64 {
        match self.method {
            PoissonMethod::Knuth { limit } => {
                let mut k = 0u64;
                let mut p = 1.0;
                loop {
                    k += 1;
                    p *= rng.next_uniform();
                    if p <= limit {
                        return k - 1;
                    }
                }
            }
            PoissonMethod::NormalApproximation(normal) => {
                normal.sample(rng).round().max(0.0) as u64
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use sampler_core::rng::SamplerRng;

    fn moments(poisson: &Poisson, seed: u64, n: usize) -> (f64, f64) {
        let mut rng = SamplerRng::from_seed(seed);
        let draws: Vec<f64> = (0..n).map(|_| poisson.sample(&mut rng) as f64).collect();
        let mean = draws.iter().sum::<f64>() / n as f64;
        let var = draws.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;
        (mean, var)
    }

    #[test]
    fn test_rejects_non_positive_rate() {
        for lambda in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                Poisson::new(lambda),
                Err(SamplingError::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let at = Poisson::new(POISSON_NORMAL_APPROXIMATION_THRESHOLD).unwrap();
        assert!(matches!(at.method(), PoissonMethod::Knuth { .. }));
        let above = Poisson::new(POISSON_NORMAL_APPROXIMATION_THRESHOLD + 1e-9).unwrap();
        assert!(matches!(
            above.method(),
            PoissonMethod::NormalApproximation(_)
        ));
    }

    #[test]
    fn test_small_rate_moments() {
        let poisson = Poisson::new(5.0).unwrap();
        let (mean, var) = moments(&poisson, 42, 40_000);
        assert_abs_diff_eq!(mean, 5.0, epsilon = 0.1);
        assert_abs_diff_eq!(var, 5.0, epsilon = 0.2);
    }

    #[test]
    fn test_large_rate_moments() {
        let poisson = Poisson::new(400.0).unwrap();
        let (mean, var) = moments(&poisson, 43, 40_000);
        assert_abs_diff_eq!(mean, 400.0, epsilon = 1.0);
        assert_abs_diff_eq!(var, 400.0, epsilon = 20.0);
    }

    #[test]
    fn test_tiny_rate_mostly_zero() {
        let poisson = Poisson::new(1e-6).unwrap();
        let mut rng = SamplerRng::from_seed(44);
        let zeros = (0..1_000).filter(|_| poisson.sample(&mut rng) == 0).count();
        assert!(zeros >= 999);
    }
}
