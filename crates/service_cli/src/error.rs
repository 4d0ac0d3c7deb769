//! CLI error types.

use sampler_core::types::SamplingError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `sampler` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or validated.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A sampling operation rejected its parameters.
    #[error("{0}")]
    Sampling(#[from] SamplingError),

    /// A command-line argument could not be interpreted.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Output could not be serialised.
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sampling_error_message_passes_through() {
        let err: CliError = SamplingError::NotPositiveDefinite { index: 1 }.into();
        assert_eq!(
            err.to_string(),
            "Matrix is not positive definite: pivot 1 is not positive"
        );
    }

    #[test]
    fn test_invalid_argument_display() {
        let err = CliError::InvalidArgument("unknown distribution: foo".to_string());
        assert_eq!(err.to_string(), "Invalid argument: unknown distribution: foo");
    }
}
