//! Uniform and weighted selection from a list.

use sampler_core::rng::UniformSource;
use sampler_core::shape::{generate, Sample, Shape};
use sampler_core::types::{SamplingError, SamplingResult};

use crate::univariate::uniform_index;

/// Draws items from `items`, uniformly or by `weights`, filling `shape`.
///
/// Weighted selection draws a threshold in `[0, total)` and walks the
/// running weight sum; if rounding carries the threshold past the end, the
/// last item is chosen. Each element consumes one uniform.
///
/// # Errors
/// - `InvalidParameter` when `items` is empty, or a weight is negative or
///   not finite, or the weights sum to zero
/// - `CountMismatch` when `weights` and `items` differ in length
/// - `InvalidShape` for an unusable shape
///
/// # Examples
/// ```
/// use sampler_core::rng::SamplerRng;
/// use sampler_core::shape::Shape;
/// use sampler_distributions::misc::choice;
///
/// let mut rng = SamplerRng::from_seed(1);
/// let picks = choice(&["a", "b"], Some(&[0.0, 1.0]), &Shape::Vector(3), &mut rng).unwrap();
/// assert_eq!(picks.into_vec(), vec!["b", "b", "b"]);
/// ```
pub fn choice<T: Clone>(
    items: &[T],
    weights: Option<&[f64]>,
    shape: &Shape,
    rng: &mut dyn UniformSource,
) -> SamplingResult<Sample<T>> {
    if items.is_empty() {
        return Err(SamplingError::invalid_parameter(
            "cannot choose from an empty list",
        ));
    }

    let Some(weights) = weights else {
        return generate(shape, || items[uniform_index(&mut *rng, items.len())].clone());
    };

    if weights.len() != items.len() {
        return Err(SamplingError::CountMismatch {
            generators: items.len(),
            priors: weights.len(),
        });
    }
    if let Some(bad) = weights.iter().find(|w| !(w.is_finite() && **w >= 0.0)) {
        return Err(SamplingError::InvalidParameter(format!(
            "weights must be non-negative, got {}",
            bad
        )));
    }
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return Err(SamplingError::invalid_parameter("weights sum to zero"));
    }

    generate(shape, || {
        let threshold = rng.next_uniform() * total;
        let mut running = 0.0;
        for (item, weight) in items.iter().zip(weights) {
            running += weight;
            if threshold < running {
                return item.clone();
            }
        }
        items[items.len() - 1].clone()
    })
}
