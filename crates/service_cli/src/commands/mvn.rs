//! Multivariate command implementation

use serde_json::Value;
use tracing::info;

use sampler_distributions::api;

use super::parse_list;
use crate::{CliError, Result};

/// Parses a covariance matrix written as `;`-separated rows of
/// `,`-separated entries, e.g. `1,0.5;0.5,2`.
pub(crate) fn parse_matrix(text: &str) -> Result<Vec<Vec<f64>>> {
    text.split(';')
        .filter(|row| !row.trim().is_empty())
        .map(parse_list)
        .collect()
}

/// Run the mvn command
pub fn run(
    means: &str,
    covariance: &str,
    count: Option<usize>,
    noise: &str,
    alpha: f64,
) -> Result<Value> {
    let means = parse_list(means)?;
    let covariance = parse_matrix(covariance)?;
    info!(dim = means.len(), ?count, noise, "drawing correlated samples");

    let sample = match noise.to_lowercase().as_str() {
        "normal" => api::multivariate_normal(&means, &covariance, count)?,
        "uniform" => api::multivariate_uniform(&means, &covariance, count)?,
        "triangular" => api::multivariate_triangular(&means, &covariance, alpha, count)?,
        other => {
            return Err(CliError::InvalidArgument(format!(
                "unknown noise: {}. Supported: normal, uniform, triangular",
                other
            )))
        }
    };

    Ok(serde_json::to_value(sample)?)
}
