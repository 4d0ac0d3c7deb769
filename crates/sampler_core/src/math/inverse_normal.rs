//! Inverse standard normal CDF by table interpolation.
//!
//! The table holds the lower half of the distribution only. Probabilities
//! above its last abscissa are folded with `Φ⁻¹(p) = −Φ⁻¹(1 − p)`.

use super::normal_table::{X, Y};
use super::search::binary_search_below;
use crate::types::{SamplingError, SamplingResult};

/// Piecewise-linear inverse normal CDF.
///
/// Holds two parallel tables: strictly increasing cumulative probabilities
/// `xs` in (0, 1) and their quantiles `ys`. [`InverseNormalCdf::standard`]
/// borrows the built-in half table, shared read-only by every caller.
///
/// # Example
///
/// ```
/// use sampler_core::math::InverseNormalCdf;
///
/// let cdf = InverseNormalCdf::standard();
/// assert!(cdf.quantile(0.5).abs() < 1e-12);
/// assert!((cdf.quantile(0.975) - 1.959964).abs() < 1e-3);
/// assert!((cdf.quantile(0.1) + cdf.quantile(0.9)).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct InverseNormalCdf<'a> {
    xs: &'a [f64],
    ys: &'a [f64],
}

impl InverseNormalCdf<'static> {
    /// The built-in table: 426 knots from `z = -8.5` to `z = 0`.
    #[inline]
    pub fn standard() -> Self {
        Self { xs: &X, ys: &Y }
    }
}

impl<'a> InverseNormalCdf<'a> {
    /// Builds an evaluator over caller-supplied tables.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` when the tables differ in length, hold fewer than
    /// two knots, or the abscissas are not strictly increasing inside (0, 1).
    pub fn new(xs: &'a [f64], ys: &'a [f64]) -> SamplingResult<Self> {
        if xs.len() != ys.len() {
            return Err(SamplingError::InvalidParameter(format!(
                "xs and ys must have same length: got {} and {}",
                xs.len(),
                ys.len()
            )));
        }
        if xs.len() < 2 {
            return Err(SamplingError::invalid_parameter(
                "table needs at least 2 knots",
            ));
        }
        if xs.iter().any(|&x| !(x > 0.0 && x < 1.0)) {
            return Err(SamplingError::invalid_parameter(
                "abscissas must lie strictly inside (0, 1)",
            ));
        }
        if let Some(i) = xs.windows(2).position(|w| w[0] >= w[1]) {
            return Err(SamplingError::InvalidParameter(format!(
                "abscissas not strictly increasing at index {}",
                i + 1
            )));
        }
        Ok(Self { xs, ys })
    }

    /// Abscissas (cumulative probabilities).
    #[inline]
    pub fn xs(&self) -> &[f64] {
        self.xs
    }

    /// Quantiles matching [`xs`](Self::xs).
    #[inline]
    pub fn ys(&self) -> &[f64] {
        self.ys
    }

    /// Approximates `Φ⁻¹(p)` for `p` in `[0, 1]`.
    ///
    /// Values beyond the table are clamped to the outermost recorded
    /// quantile. `p` equal to the last abscissa is evaluated directly, not
    /// folded. NaN propagates.
    pub fn quantile(&self, p: f64) -> f64 {
        if p.is_nan() {
            return f64::NAN;
        }
        let last = self.xs.len() - 1;
        if p > self.xs[last] {
            -self.evaluate(1.0 - p)
        } else {
            self.evaluate(p)
        }
    }

    fn evaluate(&self, p: f64) -> f64 {
        let last = self.xs.len() - 1;
        if p <= self.xs[0] {
            return self.ys[0];
        }
        if p >= self.xs[last] {
            return self.ys[last];
        }

        // p > xs[0] guarantees a hit
        let left = binary_search_below(self.xs, p).unwrap_or(0);
        let right = left + 1;
        let (x0, x1) = (self.xs[left], self.xs[right]);
        let (y0, y1) = (self.ys[left], self.ys[right]);
        ((p - x0) * y1 + (x1 - p) * y0) / (x1 - x0)
    }
}

/// Standard normal quantile using the built-in table.
#[inline]
pub fn quantile(p: f64) -> f64 {
    InverseNormalCdf::standard().quantile(p)
}
