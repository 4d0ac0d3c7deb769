//! Chi-squared distribution as a sum of squared standard normals.

use sampler_core::rng::UniformSource;
use sampler_core::types::{SamplingError, SamplingResult};

use super::normal::standard_normal;
use crate::traits::Sampler;

/// Chi-squared distribution with `k` degrees of freedom.
///
/// Each draw consumes exactly `k` uniforms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChiSquared {
    k: u32,
}

impl ChiSquared {
    /// Creates a chi-squared distribution.
    ///
    /// # Errors
    /// `InvalidParameter` when `k` is zero.
    pub fn new(k: u32) -> SamplingResult<Self> {
        if k == 0 {
            return Err(SamplingError::invalid_parameter(
                "degrees of freedom must be a positive integer",
            ));
        }
        Ok(Self { k })
    }

    /// Degrees of freedom.
    pub fn degrees_of_freedom(&self) -> u32 {
        self.k
    }
}

impl Sampler for ChiSquared {
    type Output = f64;

    fn sample(&self, rng: &mut dyn UniformSource) -> f64 {
        (0..self.k)
            .map(|_| {
                let z = standard_normal(rng);
                z * z
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use sampler_core::rng::SamplerRng;

    #[test]
    fn test_zero_degrees_rejected() {
        assert!(matches!(
            ChiSquared::new(0),
            Err(SamplingError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_mean_equals_degrees_of_freedom() {
        let chi = ChiSquared::new(4).unwrap();
        let mut rng = SamplerRng::from_seed(77);
        let n = 20_000;
        let draws: Vec<f64> = (0..n).map(|_| chi.sample(&mut rng)).collect();
        assert!(draws.iter().all(|&x| x >= 0.0));
        let mean = draws.iter().sum::<f64>() / n as f64;
        assert_abs_diff_eq!(mean, 4.0, epsilon = 0.1);
    }

    #[test]
    fn test_consumes_k_uniforms() {
        let chi = ChiSquared::new(3).unwrap();
        let mut a = SamplerRng::from_seed(9);
        let mut b = SamplerRng::from_seed(9);
        let _ = chi.sample(&mut a);
        for _ in 0..3 {
            b.next_uniform();
        }
        assert_eq!(a.next_uniform(), b.next_uniform());
    }
}
