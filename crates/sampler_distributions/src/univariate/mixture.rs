//! Finite mixtures of component samplers.
//!
//! A mixture draws one uniform to pick a component by its prior weight, then
//! delegates to that component for the actual value. Components may be any
//! [`Sampler`] with a common output type, including closures wrapped by
//! [`from_fn`](crate::traits::from_fn) and other mixtures.

use std::fmt;

use tracing::debug;

use sampler_core::rng::UniformSource;
use sampler_core::types::{SamplingError, SamplingResult};

use crate::constants::EPS;
use crate::traits::Sampler;

/// Component sampler stored in a [`Mixture`].
pub type Component<T> = Box<dyn Sampler<Output = T>>;

/// Weighted mixture of samplers.
///
/// # Examples
/// ```
/// use sampler_core::rng::SamplerRng;
/// use sampler_distributions::traits::{Constant, Sampler};
/// use sampler_distributions::univariate::Mixture;
///
/// let mixture = Mixture::<i32>::new(
///     vec![Box::new(Constant(10)), Box::new(Constant(20))],
///     vec![0.7, 0.3],
/// )
/// .unwrap();
///
/// let mut rng = SamplerRng::from_seed(1);
/// let v = mixture.sample(&mut rng);
/// assert!(v == 10 || v == 20);
/// ```
pub struct Mixture<T> {
    components: Vec<Component<T>>,
    priors: Vec<f64>,
    /// Running sums of `priors`, accumulated left to right
    cumulative: Vec<f64>,
}

impl<T> Mixture<T> {
    /// Creates a mixture.
    ///
    /// # Errors
    /// - `CountMismatch` when the two lists differ in length
    /// - `InvalidParameter` when a prior is negative or not finite
    /// - `PriorsNotNormalized` when the priors do not sum to 1 within
    ///   [`EPS`]
    pub fn new(components: Vec<Component<T>>, priors: Vec<f64>) -> SamplingResult<Self> {
        if components.len() != priors.len() {
            return Err(SamplingError::CountMismatch {
                generators: components.len(),
                priors: priors.len(),
            });
        }
        if let Some(bad) = priors.iter().find(|p| !(p.is_finite() && **p >= 0.0)) {
            return Err(SamplingError::InvalidParameter(format!(
                "priors must be non-negative, got {}",
                bad
            )));
        }

        let cumulative: Vec<f64> = priors
            .iter()
            .scan(0.0, |acc, p| {
                *acc += p;
                Some(*acc)
            })
            .collect();
        let sum = cumulative.last().copied().unwrap_or(0.0);
        if (sum - 1.0).abs() > EPS {
            return Err(SamplingError::PriorsNotNormalized { sum });
        }

        Ok(Self {
            components,
            priors,
            cumulative,
        })
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Always false: a normalised mixture has at least one component.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Prior weights in component order.
    pub fn priors(&self) -> &[f64] {
        &self.priors
    }

    /// Index of the component selected by `u`.
    ///
    /// The first component whose running prior sum exceeds `u` wins. If
    /// rounding leaves `u` at or above the final sum, the last component is
    /// used.
    pub fn select(&self, u: f64) -> usize {
        match self.cumulative.iter().position(|&c| u < c) {
            Some(index) => index,
            None => {
                let last = self.components.len() - 1;
                debug!(u, last, "mixture selection fell through to last component");
                last
            }
        }
    }
}

impl<T> Sampler for Mixture<T> {
    type Output = T;

    fn sample(&self, rng: &mut dyn UniformSource) -> T {
        let index = self.select(rng.next_uniform());
        self.components[index].sample(rng)
    }
}

impl<T> fmt::Debug for Mixture<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mixture")
            .field("components", &self.components.len())
            .field("priors", &self.priors)
            .finish()
    }
}
