//! Flat row-major sample storage with nested views.

use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::types::{SamplingError, SamplingResult};

/// Result of a shaped sampling call.
#[derive(Debug, Clone, PartialEq)]
pub enum Sample<T> {
    /// Produced by [`Shape::Scalar`](super::Shape::Scalar).
    Scalar(T),
    /// Produced by vector and tensor shapes.
    Array(NdArray<T>),
}

impl<T> Sample<T> {
    /// Returns the scalar value, or `None` for array samples.
    pub fn into_scalar(self) -> Option<T> {
        match self {
            Sample::Scalar(value) => Some(value),
            Sample::Array(_) => None,
        }
    }

    /// Borrows the array, or `None` for scalar samples.
    pub fn as_array(&self) -> Option<&NdArray<T>> {
        match self {
            Sample::Scalar(_) => None,
            Sample::Array(array) => Some(array),
        }
    }

    /// Returns every leaf in sampling order.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Sample::Scalar(value) => vec![value],
            Sample::Array(array) => array.into_data(),
        }
    }

    /// Number of leaves.
    pub fn len(&self) -> usize {
        match self {
            Sample::Scalar(_) => 1,
            Sample::Array(array) => array.len(),
        }
    }

    /// True only for an array with zero leaves.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Applies `f` to every leaf, preserving the shape.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Sample<U> {
        match self {
            Sample::Scalar(value) => Sample::Scalar(f(value)),
            Sample::Array(array) => Sample::Array(array.map(f)),
        }
    }
}

impl<T: Serialize> Serialize for Sample<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Sample::Scalar(value) => value.serialize(serializer),
            Sample::Array(array) => array.serialize(serializer),
        }
    }
}

/// Dense n-dimensional array stored row-major (outer index varies slowest).
#[derive(Debug, Clone, PartialEq)]
pub struct NdArray<T> {
    data: Vec<T>,
    dims: Vec<usize>,
}

impl<T> NdArray<T> {
    /// Wraps a flat buffer, checking that its length matches the dimensions.
    pub fn from_shape_vec(dims: Vec<usize>, data: Vec<T>) -> SamplingResult<Self> {
        if dims.is_empty() {
            return Err(SamplingError::invalid_shape(
                "dimension list must not be empty",
            ));
        }
        let expected = dims.iter().try_fold(1usize, |acc, &d| {
            acc.checked_mul(d)
                .ok_or_else(|| SamplingError::invalid_shape(format!("{:?} overflows usize", dims)))
        })?;
        if expected != data.len() {
            return Err(SamplingError::invalid_shape(format!(
                "dimensions {:?} need {} elements, got {}",
                dims,
                expected,
                data.len()
            )));
        }
        Ok(Self { data, dims })
    }

    pub(crate) fn from_parts_unchecked(dims: Vec<usize>, data: Vec<T>) -> Self {
        debug_assert_eq!(dims.iter().product::<usize>(), data.len());
        Self { data, dims }
    }

    /// Dimension list, outermost first.
    #[inline]
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Leaves in row-major order.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Consumes the array, returning the leaves in row-major order.
    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    /// Number of leaves.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when any dimension is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of dimensions.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    /// Element at a full multi-index, or `None` if out of bounds.
    pub fn get(&self, index: &[usize]) -> Option<&T> {
        if index.len() != self.dims.len() {
            return None;
        }
        let mut offset = 0;
        for (&i, &d) in index.iter().zip(&self.dims) {
            if i >= d {
                return None;
            }
            offset = offset * d + i;
        }
        self.data.get(offset)
    }

    /// Iterates over the outermost sub-arrays as flat slices.
    pub fn outer_chunks(&self) -> impl Iterator<Item = &[T]> {
        let stride = self.dims[1..].iter().product::<usize>();
        let outer = self.dims[0];
        (0..outer).map(move |i| &self.data[i * stride..(i + 1) * stride])
    }

    /// Applies `f` to every leaf, preserving the dimensions.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> NdArray<U> {
        NdArray {
            data: self.data.into_iter().map(f).collect(),
            dims: self.dims,
        }
    }

    /// Builds the equivalent nested representation.
    pub fn to_nested(&self) -> Nested<T>
    where
        T: Clone,
    {
        nest(&self.data, &self.dims)
    }
}

fn nest<T: Clone>(data: &[T], dims: &[usize]) -> Nested<T> {
    match dims.split_first() {
        None => Nested::Leaf(data[0].clone()),
        Some((&outer, rest)) => {
            let stride: usize = rest.iter().product();
            Nested::List(
                (0..outer)
                    .map(|i| nest(&data[i * stride..(i + 1) * stride], rest))
                    .collect(),
            )
        }
    }
}

/// Nested-array view of a sample.
#[derive(Debug, Clone, PartialEq)]
pub enum Nested<T> {
    /// A single value.
    Leaf(T),
    /// One level of nesting.
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Number of direct children (1 for a leaf).
    pub fn len(&self) -> usize {
        match self {
            Nested::Leaf(_) => 1,
            Nested::List(items) => items.len(),
        }
    }

    /// True for an empty list.
    pub fn is_empty(&self) -> bool {
        matches!(self, Nested::List(items) if items.is_empty())
    }
}

impl<T: Serialize> Serialize for Nested<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Nested::Leaf(value) => value.serialize(serializer),
            Nested::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

/// Borrowed nested view used to serialise without cloning.
struct NestedView<'a, T> {
    data: &'a [T],
    dims: &'a [usize],
}

impl<T: Serialize> Serialize for NestedView<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (&outer, rest) = match self.dims.split_first() {
            Some(split) => split,
            None => return self.data[0].serialize(serializer),
        };
        let stride: usize = rest.iter().product();
        let mut seq = serializer.serialize_seq(Some(outer))?;
        for i in 0..outer {
            if rest.is_empty() {
                seq.serialize_element(&self.data[i])?;
            } else {
                seq.serialize_element(&NestedView {
                    data: &self.data[i * stride..(i + 1) * stride],
                    dims: rest,
                })?;
            }
        }
        seq.end()
    }
}

impl<T: Serialize> Serialize for NdArray<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        NestedView {
            data: &self.data,
            dims: &self.dims,
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting(dims: Vec<usize>) -> NdArray<usize> {
        let n = dims.iter().product();
        NdArray::from_shape_vec(dims, (0..n).collect()).unwrap()
    }

    #[test]
    fn test_from_shape_vec_validates_length() {
        assert!(NdArray::from_shape_vec(vec![2, 2], vec![1, 2, 3]).is_err());
        assert!(NdArray::<i32>::from_shape_vec(vec![], vec![]).is_err());
        assert!(NdArray::from_shape_vec(vec![2, 2], vec![1, 2, 3, 4]).is_ok());
    }

    #[test]
    fn test_from_shape_vec_overflowing_dims() {
        let result = NdArray::<u8>::from_shape_vec(vec![usize::MAX, 2], vec![]);
        assert!(matches!(result, Err(SamplingError::InvalidShape(_))));
    }

    #[test]
    fn test_get_is_row_major() {
        let array = counting(vec![2, 3]);
        assert_eq!(array.get(&[0, 0]), Some(&0));
        assert_eq!(array.get(&[0, 2]), Some(&2));
        assert_eq!(array.get(&[1, 0]), Some(&3));
        assert_eq!(array.get(&[1, 2]), Some(&5));
        assert_eq!(array.get(&[2, 0]), None);
        assert_eq!(array.get(&[0]), None);
    }

    #[test]
    fn test_outer_chunks() {
        let array = counting(vec![3, 2]);
        let chunks: Vec<&[usize]> = array.outer_chunks().collect();
        assert_eq!(chunks, vec![&[0, 1][..], &[2, 3][..], &[4, 5][..]]);
    }

    #[test]
    fn test_to_nested() {
        let nested = counting(vec![2, 2]).to_nested();
        assert_eq!(
            nested,
            Nested::List(vec![
                Nested::List(vec![Nested::Leaf(0), Nested::Leaf(1)]),
                Nested::List(vec![Nested::Leaf(2), Nested::Leaf(3)]),
            ])
        );
        assert_eq!(nested.len(), 2);
    }

    #[test]
    fn test_serialize_nested_json() {
        let array = counting(vec![2, 3]);
        let json = serde_json::to_string(&array).unwrap();
        assert_eq!(json, "[[0,1,2],[3,4,5]]");

        let empty = NdArray::<f64>::from_shape_vec(vec![2, 0], vec![]).unwrap();
        assert_eq!(serde_json::to_string(&empty).unwrap(), "[[],[]]");
    }

    #[test]
    fn test_serialize_sample() {
        let scalar = Sample::Scalar(1.5);
        assert_eq!(serde_json::to_string(&scalar).unwrap(), "1.5");

        let vector = Sample::Array(counting(vec![3]));
        assert_eq!(serde_json::to_string(&vector).unwrap(), "[0,1,2]");
    }

    #[test]
    fn test_map_preserves_shape() {
        let sample = Sample::Array(counting(vec![2, 2])).map(|v| v * 10);
        let array = sample.as_array().unwrap();
        assert_eq!(array.dims(), &[2, 2]);
        assert_eq!(array.data(), &[0, 10, 20, 30]);
    }
}
