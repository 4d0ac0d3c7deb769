//! Shape-generalising sample construction.
//!
//! Any zero-argument sampler can be lifted to scalar, vector or tensor output:
//!
//! - [`Shape`]: the caller's output descriptor (absent, a length, or a
//!   dimension list)
//! - [`generate`] / [`try_generate`]: draw one leaf per sampler call in
//!   row-major order
//! - [`Sample`] / [`NdArray`]: the result, stored as a flat buffer plus
//!   dimensions and serialised as nested arrays
//!
//! ## Example
//!
//! ```
//! use sampler_core::shape::{generate, Shape};
//!
//! let mut counter = 0;
//! let sample = generate(&Shape::tensor(vec![2, 3]).unwrap(), || {
//!     counter += 1;
//!     counter
//! })
//! .unwrap();
//!
//! let array = sample.as_array().unwrap();
//! assert_eq!(array.dims(), &[2, 3]);
//! assert_eq!(array.get(&[1, 0]), Some(&4));
//! ```

mod fabric;
mod tensor;

pub use fabric::{generate, try_generate};
pub use tensor::{NdArray, Nested, Sample};

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::types::{SamplingError, SamplingResult};

/// Output shape descriptor.
///
/// - `Scalar`: a single value
/// - `Vector(n)`: `n` values
/// - `Tensor(dims)`: nested arrays with `dims[0]` elements at the outermost
///   level; the dimension list must not be empty
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Shape {
    /// A single value.
    #[default]
    Scalar,
    /// A one-dimensional array of the given length.
    Vector(usize),
    /// A multi-dimensional array, outermost dimension first.
    Tensor(Vec<usize>),
}

impl Shape {
    /// Builds a tensor shape, rejecting an empty dimension list.
    pub fn tensor(dims: Vec<usize>) -> SamplingResult<Self> {
        if dims.is_empty() {
            return Err(SamplingError::invalid_shape(
                "dimension list must not be empty",
            ));
        }
        Ok(Shape::Tensor(dims))
    }

    /// Returns the dimension list (empty for a scalar).
    pub fn dims(&self) -> Vec<usize> {
        match self {
            Shape::Scalar => Vec::new(),
            Shape::Vector(n) => vec![*n],
            Shape::Tensor(dims) => dims.clone(),
        }
    }

    /// Returns true for the scalar shape.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Shape::Scalar)
    }

    /// Total number of leaves, or `InvalidShape` if the product overflows or
    /// the tensor has no dimensions.
    pub fn leaf_count(&self) -> SamplingResult<usize> {
        match self {
            Shape::Scalar => Ok(1),
            Shape::Vector(n) => Ok(*n),
            Shape::Tensor(dims) => {
                if dims.is_empty() {
                    return Err(SamplingError::invalid_shape(
                        "dimension list must not be empty",
                    ));
                }
                dims.iter().try_fold(1usize, |acc, &d| {
                    acc.checked_mul(d).ok_or_else(|| {
                        SamplingError::invalid_shape(format!("{:?} overflows usize", dims))
                    })
                })
            }
        }
    }

    /// Interprets a JSON value as a shape: `null`, a non-negative integer, or
    /// a non-empty array of non-negative integers. Anything else is
    /// `InvalidShape`.
    ///
    /// ```
    /// use sampler_core::shape::Shape;
    /// use serde_json::json;
    ///
    /// assert_eq!(Shape::from_json(&json!(null)).unwrap(), Shape::Scalar);
    /// assert_eq!(Shape::from_json(&json!(5)).unwrap(), Shape::Vector(5));
    /// assert_eq!(Shape::from_json(&json!([2, 3])).unwrap(), Shape::Tensor(vec![2, 3]));
    /// assert!(Shape::from_json(&json!("2x3")).is_err());
    /// ```
    pub fn from_json(value: &Value) -> SamplingResult<Self> {
        match value {
            Value::Null => Ok(Shape::Scalar),
            Value::Number(_) => Ok(Shape::Vector(json_dimension(value)?)),
            Value::Array(items) => {
                let dims = items
                    .iter()
                    .map(json_dimension)
                    .collect::<SamplingResult<Vec<_>>>()?;
                Shape::tensor(dims)
            }
            other => Err(SamplingError::invalid_shape(format!(
                "expected null, integer or integer array, got {}",
                other
            ))),
        }
    }
}

fn json_dimension(value: &Value) -> SamplingResult<usize> {
    value
        .as_u64()
        .and_then(|d| usize::try_from(d).ok())
        .ok_or_else(|| {
            SamplingError::invalid_shape(format!("{} is not a non-negative integer", value))
        })
}

fn parse_dimension(token: &str) -> SamplingResult<usize> {
    token.trim().parse::<usize>().map_err(|_| {
        SamplingError::invalid_shape(format!("'{}' is not a non-negative integer", token.trim()))
    })
}

impl From<usize> for Shape {
    fn from(n: usize) -> Self {
        Shape::Vector(n)
    }
}

impl From<Option<usize>> for Shape {
    fn from(n: Option<usize>) -> Self {
        n.map_or(Shape::Scalar, Shape::Vector)
    }
}

impl FromStr for Shape {
    type Err = SamplingError;

    /// Parses `""`/`"scalar"`, `"5"`, `"2x3"`, `"2,3"` or `"[2,3]"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("scalar") {
            return Ok(Shape::Scalar);
        }

        let bracketed = trimmed.starts_with('[') && trimmed.ends_with(']');
        let body = if bracketed {
            &trimmed[1..trimmed.len() - 1]
        } else {
            trimmed
        };

        if !bracketed && !body.contains(['x', ',']) {
            return Ok(Shape::Vector(parse_dimension(body)?));
        }

        if body.trim().is_empty() {
            return Err(SamplingError::invalid_shape("dimension list must not be empty"));
        }
        let dims = body
            .split(['x', ','])
            .map(parse_dimension)
            .collect::<SamplingResult<Vec<_>>>()?;
        Shape::tensor(dims)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Scalar => write!(f, "scalar"),
            Shape::Vector(n) => write!(f, "{}", n),
            Shape::Tensor(dims) => {
                let parts: Vec<String> = dims.iter().map(|d| d.to_string()).collect();
                write!(f, "{}", parts.join("x"))
            }
        }
    }
}
