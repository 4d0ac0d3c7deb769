//! Convenience functions drawing from the per-thread default source.
//!
//! Each function builds the distribution, validates its parameters and then
//! samples through [`DefaultSource`], so reseeding with [`seed`] makes every
//! call below reproducible on the current thread.
//!
//! ## Example
//!
//! ```
//! use sampler_core::shape::Shape;
//! use sampler_distributions::api;
//!
//! api::seed(42);
//! let first = api::normal(0.0, 1.0, &Shape::Vector(3)).unwrap();
//! api::seed(42);
//! let second = api::normal(0.0, 1.0, &Shape::Vector(3)).unwrap();
//! assert_eq!(first, second);
//! ```

use sampler_core::rng::{self, DefaultSource};
use sampler_core::shape::{Sample, Shape};
use sampler_core::types::SamplingResult;

use crate::constants::DEFAULT_CHARS;
use crate::misc;
use crate::multivariate::{
    multivariate, MultivariateSample, StandardNormalNoise, TriangularNoise, UniformNoise,
};
use crate::traits::Sampler;
use crate::univariate::{
    Binomial, Cauchy, ChiSquared, Component, Exponential, Geometric, LogNormal, Mixture, Normal,
    Pareto, Poisson, RandInt, Triangular, Uniform,
};

fn draw<S: Sampler>(sampler: S, shape: &Shape) -> SamplingResult<Sample<S::Output>> {
    sampler.sample_shape(&mut DefaultSource, shape)
}

/// Reseeds the default source of the current thread.
pub fn seed(value: u64) {
    rng::reseed(value);
}

/// Handle on the default source, for use with explicit-source APIs.
pub fn uniform_source() -> DefaultSource {
    rng::default_source()
}

/// Uniform on `[low, high)`.
pub fn uniform(low: f64, high: f64, shape: &Shape) -> SamplingResult<Sample<f64>> {
    draw(Uniform::new(low, high)?, shape)
}

/// Normal with mean `loc` and standard deviation `scale`.
pub fn normal(loc: f64, scale: f64, shape: &Shape) -> SamplingResult<Sample<f64>> {
    draw(Normal::new(loc, scale)?, shape)
}

/// Log-normal whose logarithm is N(`loc`, `scale`²).
pub fn lognormal(loc: f64, scale: f64, shape: &Shape) -> SamplingResult<Sample<f64>> {
    draw(LogNormal::new(loc, scale)?, shape)
}

/// Exponential with rate `lambda`.
pub fn exponential(lambda: f64, shape: &Shape) -> SamplingResult<Sample<f64>> {
    draw(Exponential::new(lambda)?, shape)
}

/// Cauchy with location `median` and scale `gamma`.
pub fn cauchy(median: f64, gamma: f64, shape: &Shape) -> SamplingResult<Sample<f64>> {
    draw(Cauchy::new(median, gamma)?, shape)
}

/// Pareto with shape `alpha` and scale `xm`.
pub fn pareto(alpha: f64, xm: f64, shape: &Shape) -> SamplingResult<Sample<f64>> {
    draw(Pareto::new(alpha, xm)?, shape)
}

/// Geometric trial count with success probability `p`.
pub fn geometric(p: f64, shape: &Shape) -> SamplingResult<Sample<u64>> {
    draw(Geometric::new(p)?, shape)
}

/// Triangular on `[a, b]` with mode `c`.
pub fn triangular(a: f64, b: f64, c: f64, shape: &Shape) -> SamplingResult<Sample<f64>> {
    draw(Triangular::new(a, b, c)?, shape)
}

/// Uniform integer on `[low, high)`.
pub fn randint(low: i64, high: i64, shape: &Shape) -> SamplingResult<Sample<i64>> {
    draw(RandInt::new(low, high)?, shape)
}

/// Binomial count of successes in `n` trials.
pub fn binomial(n: u64, p: f64, shape: &Shape) -> SamplingResult<Sample<u64>> {
    draw(Binomial::new(n, p)?, shape)
}

/// Poisson with rate `lambda`.
pub fn poisson(lambda: f64, shape: &Shape) -> SamplingResult<Sample<u64>> {
    draw(Poisson::new(lambda)?, shape)
}

/// Chi-squared with `k` degrees of freedom.
pub fn chisquare(k: u32, shape: &Shape) -> SamplingResult<Sample<f64>> {
    draw(ChiSquared::new(k)?, shape)
}

/// Mixture of `components` weighted by `priors`.
pub fn mixture<T>(
    components: Vec<Component<T>>,
    priors: Vec<f64>,
    shape: &Shape,
) -> SamplingResult<Sample<T>> {
    draw(Mixture::new(components, priors)?, shape)
}

/// Multivariate normal draw(s).
pub fn multivariate_normal(
    means: &[f64],
    covariance: &[Vec<f64>],
    count: Option<usize>,
) -> SamplingResult<MultivariateSample> {
    multivariate(means, covariance, &StandardNormalNoise, count, &mut DefaultSource)
}

/// Correlated uniform draw(s).
pub fn multivariate_uniform(
    means: &[f64],
    covariance: &[Vec<f64>],
    count: Option<usize>,
) -> SamplingResult<MultivariateSample> {
    multivariate(means, covariance, &UniformNoise, count, &mut DefaultSource)
}

/// Correlated triangular draw(s) with skew `alpha`.
pub fn multivariate_triangular(
    means: &[f64],
    covariance: &[Vec<f64>],
    alpha: f64,
    count: Option<usize>,
) -> SamplingResult<MultivariateSample> {
    let noise = TriangularNoise::new(alpha)?;
    multivariate(means, covariance, &noise, count, &mut DefaultSource)
}

/// Shuffles `items` in place.
pub fn shuffle<T>(items: &mut [T]) {
    misc::shuffle(items, &mut DefaultSource);
}

/// Random ordering of `0..n`.
pub fn permutation(n: usize) -> SamplingResult<Vec<usize>> {
    misc::permutation(n, &mut DefaultSource)
}

/// `items` in shuffled order.
pub fn permute<T>(items: Vec<T>) -> Vec<T> {
    misc::permute(items, &mut DefaultSource)
}

/// Uniform or weighted selection from `items`.
pub fn choice<T: Clone>(
    items: &[T],
    weights: Option<&[f64]>,
    shape: &Shape,
) -> SamplingResult<Sample<T>> {
    misc::choice(items, weights, shape, &mut DefaultSource)
}

/// Random strings of `length` characters; `chars` defaults to
/// [`DEFAULT_CHARS`].
pub fn rand_string(
    length: usize,
    chars: Option<&str>,
    shape: &Shape,
) -> SamplingResult<Sample<String>> {
    misc::rand_string(
        length,
        chars.unwrap_or(DEFAULT_CHARS),
        shape,
        &mut DefaultSource,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{from_fn, Constant};
    use sampler_core::rng::UniformSource;
    use sampler_core::types::SamplingError;

    #[test]
    fn test_seed_reproduces_across_distributions() {
        seed(7);
        let a = (
            uniform(0.0, 1.0, &Shape::Vector(3)).unwrap(),
            poisson(4.0, &Shape::Scalar).unwrap(),
            permutation(5).unwrap(),
        );
        seed(7);
        let b = (
            uniform(0.0, 1.0, &Shape::Vector(3)).unwrap(),
            poisson(4.0, &Shape::Scalar).unwrap(),
            permutation(5).unwrap(),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn test_validation_consumes_nothing() {
        seed(8);
        assert!(normal(0.0, -1.0, &Shape::Vector(10)).is_err());
        let after_error = uniform_source().next_uniform();
        seed(8);
        let fresh = uniform_source().next_uniform();
        assert_eq!(after_error, fresh);
    }

    #[test]
    fn test_mixture_components_share_default_source() {
        seed(9);
        let components: Vec<Component<f64>> = vec![
            Box::new(Constant(-1.0)),
            Box::new(from_fn(|rng: &mut dyn UniformSource| rng.next_uniform())),
        ];
        let values = mixture(components, vec![0.5, 0.5], &Shape::Vector(100))
            .unwrap()
            .into_vec();
        assert!(values.iter().all(|&v| v == -1.0 || (0.0..1.0).contains(&v)));
    }

    #[test]
    fn test_multivariate_helpers() {
        seed(10);
        let cov = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
        assert_eq!(multivariate_normal(&[0.0, 0.0], &cov, Some(4)).unwrap().len(), 4);
        assert!(multivariate_uniform(&[0.0, 0.0], &cov, None)
            .unwrap()
            .as_single()
            .is_some());
        assert!(matches!(
            multivariate_triangular(&[0.0, 0.0], &cov, 0.2, Some(0)),
            Err(SamplingError::InvalidSize(_))
        ));
    }

    #[test]
    fn test_misc_helpers() {
        seed(11);
        let mut deck: Vec<u32> = (0..52).collect();
        shuffle(&mut deck);
        let mut sorted = deck.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..52).collect::<Vec<_>>());
        assert_eq!(permute(vec![1]), vec![1]);
        assert!(choice(&["a"], None, &Shape::Scalar).is_ok());
        let s = rand_string(6, None, &Shape::Scalar).unwrap().into_scalar();
        assert_eq!(s.map(|s| s.chars().count()), Some(6));
    }

    #[test]
    fn test_discrete_helpers() {
        seed(12);
        let rolls = randint(1, 7, &Shape::Vector(50)).unwrap().into_vec();
        assert!(rolls.iter().all(|r| (1..7).contains(r)));
        assert!(geometric(0.5, &Shape::Scalar).is_ok());
        assert!(binomial(10, 0.5, &Shape::Scalar).is_ok());
        assert!(chisquare(0, &Shape::Scalar).is_err());
        assert!(exponential(1.0, &Shape::Scalar).is_ok());
        assert!(cauchy(0.0, 1.0, &Shape::Scalar).is_ok());
        assert!(pareto(2.0, 1.0, &Shape::Scalar).is_ok());
        assert!(lognormal(0.0, 1.0, &Shape::Scalar).is_ok());
        assert!(triangular(0.0, 1.0, 0.5, &Shape::Scalar).is_ok());
    }
}
