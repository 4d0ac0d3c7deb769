//! Multivariate distributions with a fixed noise family.

use sampler_core::rng::UniformSource;
use sampler_core::types::SamplingResult;

use super::noise::{NoiseGenerator, StandardNormalNoise, TriangularNoise, UniformNoise};
use super::transform::{factorise, multivariate, MultivariateSample};

/// Correlated distribution: means, covariance and a noise family.
///
/// The covariance is factorised once in `new` to reject bad input early,
/// and again on each draw.
#[derive(Clone, Debug, PartialEq)]
pub struct Correlated<N> {
    means: Vec<f64>,
    covariance: Vec<Vec<f64>>,
    noise: N,
}

/// Multivariate normal distribution.
pub type MultivariateNormal = Correlated<StandardNormalNoise>;

/// Correlated uniform noise with unit-variance marginals before mixing.
pub type MultivariateUniform = Correlated<UniformNoise>;

/// Correlated triangular noise with skew `alpha`.
///
/// The noise marginals have variance `3 + 9 alpha² / 4` rather than one, so
/// the sample covariance is the requested covariance scaled by that factor.
pub type MultivariateTriangular = Correlated<TriangularNoise>;

impl<N: NoiseGenerator> Correlated<N> {
    /// Builds the distribution from an explicit noise generator.
    ///
    /// # Errors
    /// `InvalidMatrixShape` or `NotPositiveDefinite` from factorisation.
    pub fn with_noise(means: Vec<f64>, covariance: Vec<Vec<f64>>, noise: N) -> SamplingResult<Self> {
        factorise(&means, &covariance)?;
        Ok(Self {
            means,
            covariance,
            noise,
        })
    }

    /// Mean vector.
    pub fn means(&self) -> &[f64] {
        &self.means
    }

    /// Covariance rows.
    pub fn covariance(&self) -> &[Vec<f64>] {
        &self.covariance
    }

    /// Noise generator.
    pub fn noise(&self) -> &N {
        &self.noise
    }

    /// Draws one vector, or a batch of `count` vectors.
    pub fn sample(
        &self,
        rng: &mut dyn UniformSource,
        count: Option<usize>,
    ) -> SamplingResult<MultivariateSample> {
        multivariate(&self.means, &self.covariance, &self.noise, count, rng)
    }
}

impl Correlated<StandardNormalNoise> {
    /// Multivariate normal with the given means and covariance.
    pub fn new(means: Vec<f64>, covariance: Vec<Vec<f64>>) -> SamplingResult<Self> {
        Self::with_noise(means, covariance, StandardNormalNoise)
    }
}

impl Correlated<UniformNoise> {
    /// Correlated uniform with the given means and covariance.
    pub fn new(means: Vec<f64>, covariance: Vec<Vec<f64>>) -> SamplingResult<Self> {
        Self::with_noise(means, covariance, UniformNoise)
    }
}

impl Correlated<TriangularNoise> {
    /// Correlated triangular with the given means, covariance and skew.
    pub fn new(means: Vec<f64>, covariance: Vec<Vec<f64>>, alpha: f64) -> SamplingResult<Self> {
        Self::with_noise(means, covariance, TriangularNoise::new(alpha)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use sampler_core::rng::SamplerRng;
    use sampler_core::types::SamplingError;

    fn identity() -> Vec<Vec<f64>> {
        vec![vec![1.0, 0.0], vec![0.0, 1.0]]
    }

    #[test]
    fn test_constructors_validate() {
        assert!(MultivariateNormal::new(vec![0.0], identity()).is_err());
        assert!(matches!(
            MultivariateUniform::new(vec![0.0, 0.0], vec![vec![1.0, 2.0], vec![2.0, 1.0]]),
            Err(SamplingError::NotPositiveDefinite { index: 1 })
        ));
        assert!(MultivariateTriangular::new(vec![0.0, 0.0], identity(), 3.0).is_err());
    }

    #[test]
    fn test_uniform_support_with_identity() {
        let dist = MultivariateUniform::new(vec![10.0, -10.0], identity()).unwrap();
        let mut rng = SamplerRng::from_seed(2);
        let rows = dist.sample(&mut rng, Some(500)).unwrap().into_rows();
        let h = UniformNoise::HALF_WIDTH;
        for row in rows {
            assert!((row[0] - 10.0).abs() <= h);
            assert!((row[1] + 10.0).abs() <= h);
        }
    }

    #[test]
    fn test_same_seed_same_draws() {
        let dist = MultivariateTriangular::new(vec![0.0, 1.0], identity(), 0.4).unwrap();
        let mut a = SamplerRng::from_seed(8);
        let mut b = SamplerRng::from_seed(8);
        assert_eq!(
            dist.sample(&mut a, Some(3)).unwrap(),
            dist.sample(&mut b, Some(3)).unwrap()
        );
    }

    #[test]
    fn test_triangular_covariance_scales_by_noise_variance() {
        let dist = MultivariateTriangular::new(vec![0.0, 0.0], identity(), 0.0).unwrap();
        let mut rng = SamplerRng::from_seed(12);
        let rows = dist.sample(&mut rng, Some(20_000)).unwrap().into_rows();
        let n = rows.len() as f64;
        for i in 0..2 {
            let mean = rows.iter().map(|r| r[i]).sum::<f64>() / n;
            let var = rows.iter().map(|r| (r[i] - mean).powi(2)).sum::<f64>() / n;
            assert_abs_diff_eq!(var, 3.0, epsilon = 0.12);
        }
    }

    #[test]
    fn test_normal_single_draw() {
        let dist = MultivariateNormal::new(vec![0.0, 1.0], identity()).unwrap();
        let mut rng = SamplerRng::from_seed(4);
        let x = dist.sample(&mut rng, None).unwrap();
        assert_eq!(x.len(), 1);
        assert_eq!(x.as_single().map(<[f64]>::len), Some(2));
    }
}
