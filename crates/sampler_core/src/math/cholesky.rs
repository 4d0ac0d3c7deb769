//! Cholesky factorisation of covariance matrices.
//!
//! ## Mathematical Background
//!
//! A symmetric positive-definite matrix `Σ` factors as
//!
//! ```text
//! Σ = L * L^T
//! ```
//!
//! with `L` lower triangular and a positive diagonal. Given independent unit
//! variance noise `z`, `L * z` has covariance `Σ`.
//!
//! ## Usage
//!
//! ```
//! use sampler_core::math::cholesky;
//!
//! let factor = cholesky(&[vec![4.0_f64, 2.0], vec![2.0, 3.0]]).unwrap();
//! assert_eq!(factor.get(0, 0), 2.0);
//! assert_eq!(factor.get(1, 0), 1.0);
//! assert_eq!(factor.get(0, 1), 0.0);
//!
//! let w = factor.transform(&[1.0, 1.0]);
//! assert_eq!(w.len(), 2);
//! ```

use num_traits::Float;
use tracing::debug;

use crate::types::{SamplingError, SamplingResult};

/// Dense square matrix stored row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct SquareMatrix<T: Float> {
    data: Vec<T>,
    dim: usize,
}

impl<T: Float> SquareMatrix<T> {
    /// Builds a matrix from rows, checking that every row has `rows.len()`
    /// entries.
    ///
    /// # Errors
    ///
    /// `InvalidMatrixShape` naming the first row of the wrong length.
    pub fn from_rows(rows: &[Vec<T>]) -> SamplingResult<Self> {
        let dim = rows.len();
        let mut data = Vec::with_capacity(dim * dim);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != dim {
                return Err(SamplingError::InvalidMatrixShape(format!(
                    "row {} has {} columns, expected {}",
                    row,
                    values.len(),
                    dim
                )));
            }
            data.extend_from_slice(values);
        }
        Ok(Self { data, dim })
    }

    /// Builds a matrix from `dim * dim` row-major elements.
    pub fn from_flat(data: &[T], dim: usize) -> SamplingResult<Self> {
        if data.len() != dim * dim {
            return Err(SamplingError::InvalidMatrixShape(format!(
                "{}x{} matrix needs {} elements, got {}",
                dim,
                dim,
                dim * dim,
                data.len()
            )));
        }
        Ok(Self {
            data: data.to_vec(),
            dim,
        })
    }

    /// Identity matrix.
    pub fn identity(dim: usize) -> Self {
        let mut data = vec![T::zero(); dim * dim];
        for i in 0..dim {
            data[i * dim + i] = T::one();
        }
        Self { data, dim }
    }

    /// Matrix dimension.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Element at (i, j).
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        self.data[i * self.dim + j]
    }

    /// Copies the matrix out as rows.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.data.chunks(self.dim.max(1)).map(|r| r.to_vec()).collect()
    }

    /// Cholesky–Banachiewicz factorisation, row by row.
    ///
    /// Only the lower triangle is read; symmetry is assumed, not checked.
    ///
    /// # Errors
    ///
    /// `NotPositiveDefinite` as soon as a diagonal pivot argument is not
    /// strictly positive (this also covers singular and NaN inputs). No
    /// regularisation is attempted.
    pub fn cholesky(&self) -> SamplingResult<CholeskyFactor<T>> {
        let n = self.dim;
        let mut lower = vec![T::zero(); n * n];

        for i in 0..n {
            for j in 0..=i {
                let mut sum = T::zero();

                if j == i {
                    for k in 0..j {
                        let l_jk = lower[j * n + k];
                        sum = sum + l_jk * l_jk;
                    }
                    let diag = self.get(j, j) - sum;
                    if !(diag > T::zero()) {
                        debug!(index = j, "covariance is not positive definite");
                        return Err(SamplingError::NotPositiveDefinite { index: j });
                    }
                    lower[j * n + j] = diag.sqrt();
                } else {
                    for k in 0..j {
                        sum = sum + lower[i * n + k] * lower[j * n + k];
                    }
                    lower[i * n + j] = (self.get(i, j) - sum) / lower[j * n + j];
                }
            }
        }

        Ok(CholeskyFactor { data: lower, dim: n })
    }
}

/// Factorises a matrix given as rows.
///
/// Shorthand for [`SquareMatrix::from_rows`] followed by
/// [`SquareMatrix::cholesky`].
pub fn cholesky<T: Float>(rows: &[Vec<T>]) -> SamplingResult<CholeskyFactor<T>> {
    SquareMatrix::from_rows(rows)?.cholesky()
}

/// Lower triangular Cholesky factor.
#[derive(Clone, Debug)]
pub struct CholeskyFactor<T: Float> {
    /// Row-major elements; the strict upper triangle is zero
    data: Vec<T>,
    dim: usize,
}

impl<T: Float> CholeskyFactor<T> {
    /// Matrix dimension.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Element at (i, j); zero above the diagonal.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        if j > i {
            T::zero()
        } else {
            self.data[i * self.dim + j]
        }
    }

    /// Computes `L * z`.
    ///
    /// # Panics
    ///
    /// Panics if `z.len() < self.dim()`.
    pub fn transform(&self, z: &[T]) -> Vec<T> {
        assert!(
            z.len() >= self.dim,
            "Input vector length {} is less than matrix dimension {}",
            z.len(),
            self.dim
        );

        let n = self.dim;
        let mut w = Vec::with_capacity(n);
        for i in 0..n {
            let mut sum = T::zero();
            for j in 0..=i {
                sum = sum + self.data[i * n + j] * z[j];
            }
            w.push(sum);
        }
        w
    }

    /// Computes `mean + L * z` in one pass.
    pub fn affine(&self, mean: &[T], z: &[T]) -> Vec<T> {
        self.transform(z)
            .into_iter()
            .zip(mean)
            .map(|(w, &m)| m + w)
            .collect()
    }

    /// Rebuilds `L * L^T`.
    pub fn reconstruct(&self) -> SquareMatrix<T> {
        let n = self.dim;
        let mut data = vec![T::zero(); n * n];
        for i in 0..n {
            for j in 0..n {
                let mut sum = T::zero();
                for k in 0..=i.min(j) {
                    sum = sum + self.data[i * n + k] * self.data[j * n + k];
                }
                data[i * n + j] = sum;
            }
        }
        SquareMatrix { data, dim: n }
    }

    /// Copies the factor out as rows.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        (0..self.dim)
            .map(|i| (0..self.dim).map(|j| self.get(i, j)).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_two_by_two() {
        let factor = cholesky(&[vec![4.0_f64, 2.0], vec![2.0, 3.0]]).unwrap();
        assert_relative_eq!(factor.get(0, 0), 2.0, epsilon = 1e-12);
        assert_relative_eq!(factor.get(1, 0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(factor.get(1, 1), 2.0_f64.sqrt(), epsilon = 1e-12);
        assert_eq!(factor.get(0, 1), 0.0);
    }

    #[test]
    fn test_three_by_three_round_trip() {
        let sigma = vec![
            vec![25.0_f64, 15.0, -5.0],
            vec![15.0, 18.0, 0.0],
            vec![-5.0, 0.0, 11.0],
        ];
        let factor = cholesky(&sigma).unwrap();
        let expected = [[5.0, 0.0, 0.0], [3.0, 3.0, 0.0], [-1.0, 1.0, 3.0]];
        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(factor.get(i, j), expected[i][j], epsilon = 1e-12);
            }
        }
        let rebuilt = factor.reconstruct().to_rows();
        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(rebuilt[i][j], sigma[i][j], epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_not_positive_definite() {
        let result = cholesky(&[vec![1.0_f64, 2.0], vec![2.0, 1.0]]);
        assert!(matches!(
            result,
            Err(SamplingError::NotPositiveDefinite { index: 1 })
        ));
    }

    #[test]
    fn test_singular_matrix_rejected() {
        let result = cholesky(&[vec![1.0_f64, 1.0], vec![1.0, 1.0]]);
        assert!(matches!(
            result,
            Err(SamplingError::NotPositiveDefinite { .. })
        ));
    }

    #[test]
    fn test_zero_and_nan_pivots_rejected() {
        assert!(cholesky(&[vec![0.0_f64]]).is_err());
        assert!(cholesky(&[vec![f64::NAN]]).is_err());
        assert!(cholesky(&[vec![-1.0_f64]]).is_err());
    }

    #[test]
    fn test_non_square_rejected() {
        let result = cholesky(&[vec![1.0_f64, 0.0], vec![0.0]]);
        assert_eq!(
            result.unwrap_err(),
            SamplingError::InvalidMatrixShape("row 1 has 1 columns, expected 2".to_string())
        );
        assert!(SquareMatrix::from_flat(&[1.0_f64, 0.5, 0.5], 2).is_err());
    }

    #[test]
    fn test_identity_factor_is_identity() {
        let factor = SquareMatrix::<f64>::identity(4).cholesky().unwrap();
        let z = [0.3, -1.2, 2.0, 0.0];
        assert_eq!(factor.transform(&z), z.to_vec());
    }

    #[test]
    fn test_empty_matrix() {
        let factor = cholesky::<f64>(&[]).unwrap();
        assert_eq!(factor.dim(), 0);
        assert!(factor.transform(&[]).is_empty());
    }

    #[test]
    fn test_affine_adds_mean() {
        let factor = cholesky(&[vec![1.0_f64, 0.5], vec![0.5, 2.0]]).unwrap();
        let x = factor.affine(&[0.0, 1.0], &[0.0, 0.0]);
        assert_eq!(x, vec![0.0, 1.0]);
    }

    #[test]
    #[should_panic(expected = "less than matrix dimension")]
    fn test_transform_short_input_panics() {
        let factor = SquareMatrix::<f64>::identity(3).cholesky().unwrap();
        let _ = factor.transform(&[1.0]);
    }

    fn spd_matrix() -> impl Strategy<Value = Vec<Vec<f64>>> {
        (1usize..6).prop_flat_map(|n| {
            proptest::collection::vec(-2.0f64..2.0, n * n).prop_map(move |a| {
                // A * A^T + n * I is symmetric positive definite
                (0..n)
                    .map(|i| {
                        (0..n)
                            .map(|j| {
                                let dot: f64 = (0..n).map(|k| a[i * n + k] * a[j * n + k]).sum();
                                if i == j {
                                    dot + n as f64
                                } else {
                                    dot
                                }
                            })
                            .collect()
                    })
                    .collect()
            })
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_round_trip(sigma in spd_matrix()) {
            let factor = cholesky(&sigma).unwrap();
            let rebuilt = factor.reconstruct();
            for i in 0..sigma.len() {
                prop_assert!(factor.get(i, i) > 0.0);
                for j in 0..sigma.len() {
                    prop_assert!((rebuilt.get(i, j) - sigma[i][j]).abs() < 1e-9);
                    if j > i {
                        prop_assert_eq!(factor.get(i, j), 0.0);
                    }
                }
            }
        }
    }
}
