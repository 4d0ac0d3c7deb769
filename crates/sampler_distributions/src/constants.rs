//! Numerical constants shared by the distributions.

/// Tolerance on the sum of mixture priors.
pub const EPS: f64 = 1e-16;

/// Rate above which Poisson draws switch from Knuth's multiplication method
/// to a rounded normal approximation.
pub const POISSON_NORMAL_APPROXIMATION_THRESHOLD: f64 = 37.0;

/// Alphabet used by [`crate::misc::rand_string`] when none is given.
pub const DEFAULT_CHARS: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()_+-=[]{}|;:,.<>?";
