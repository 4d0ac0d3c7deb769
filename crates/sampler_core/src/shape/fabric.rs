//! Lifting scalar samplers to shaped output.

use super::{NdArray, Sample, Shape};
use crate::types::{SamplingError, SamplingResult};

/// Calls `sampler` once per leaf of `shape` and assembles the result.
///
/// Leaves are drawn in row-major order: the outermost index varies slowest,
/// which is the same order as a depth-first walk of the nested arrays. No
/// value is cached, so re-running with the same shape after reseeding
/// reproduces identical leaves.
///
/// # Errors
///
/// `InvalidShape` for a tensor with an empty dimension list or a leaf count
/// that overflows. The sampler is not called in that case.
///
/// # Example
///
/// ```
/// use sampler_core::shape::{generate, Sample, Shape};
///
/// let scalar = generate(&Shape::Scalar, || 1.0).unwrap();
/// assert_eq!(scalar, Sample::Scalar(1.0));
///
/// let vector = generate(&Shape::Vector(5), || 1.0).unwrap();
/// assert_eq!(vector.len(), 5);
/// ```
pub fn generate<T, F>(shape: &Shape, mut sampler: F) -> SamplingResult<Sample<T>>
where
    F: FnMut() -> T,
{
    try_generate(shape, || Ok::<T, SamplingError>(sampler()))
}

/// Largest up-front reservation; bigger shapes grow as they are filled.
const MAX_RESERVE: usize = 1 << 16;

/// Fallible variant of [`generate`].
///
/// Stops at the first error and returns it; no partial result is produced.
pub fn try_generate<T, E, F>(shape: &Shape, mut sampler: F) -> Result<Sample<T>, E>
where
    F: FnMut() -> Result<T, E>,
    E: From<SamplingError>,
{
    if let Shape::Scalar = shape {
        return sampler().map(Sample::Scalar);
    }

    let total = shape.leaf_count()?;
    let mut data = Vec::with_capacity(total.min(MAX_RESERVE));
    for _ in 0..total {
        data.push(sampler()?);
    }
    Ok(Sample::Array(NdArray::from_parts_unchecked(shape.dims(), data)))
}
