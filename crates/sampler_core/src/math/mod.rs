//! Numerical building blocks of the sampling fabric.
//!
//! - [`binary_search_below`]: rightmost-strictly-less search over sorted tables
//! - [`InverseNormalCdf`]: table-driven standard normal quantile
//! - [`cholesky`]: covariance factorisation for correlated sampling

mod cholesky;
mod inverse_normal;
mod normal_table;
mod search;

pub use cholesky::{cholesky, CholeskyFactor, SquareMatrix};
pub use inverse_normal::{quantile, InverseNormalCdf};
pub use search::binary_search_below;
