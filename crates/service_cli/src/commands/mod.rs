//! CLI command implementations
//!
//! Each submodule implements a specific CLI command and returns a
//! serialisable result; printing is left to `main`.

pub mod check;
pub mod draw;
pub mod mvn;

use crate::{CliError, Result};

/// Parses a comma-separated list of numbers.
pub(crate) fn parse_list(text: &str) -> Result<Vec<f64>> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f64>()
                .map_err(|_| CliError::InvalidArgument(format!("not a number: {}", s)))
        })
        .collect()
}
