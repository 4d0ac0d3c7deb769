//! Draw command implementation
//!
//! Samples a named univariate distribution from the default source into
//! the requested shape.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde_json::Value;
use tracing::info;

use sampler_core::shape::Shape;
use sampler_distributions::api;

use crate::{CliError, Result};

/// Distributions the command understands.
pub const DISTRIBUTIONS: &[&str] = &[
    "uniform",
    "normal",
    "lognormal",
    "exponential",
    "cauchy",
    "pareto",
    "geometric",
    "triangular",
    "randint",
    "binomial",
    "poisson",
    "chisquare",
];

/// `key=value` parameters, consumed one by one.
#[derive(Debug)]
struct Params {
    values: BTreeMap<String, String>,
}

impl Params {
    fn parse(raw: &[String]) -> Result<Self> {
        let mut values = BTreeMap::new();
        for entry in raw {
            let (key, value) = entry.split_once('=').ok_or_else(|| {
                CliError::InvalidArgument(format!("expected key=value, got {}", entry))
            })?;
            values.insert(key.trim().to_lowercase(), value.trim().to_string());
        }
        Ok(Self { values })
    }

    fn take<T: FromStr>(&mut self, key: &str, default: Option<T>) -> Result<T> {
        match self.values.remove(key) {
            Some(text) => text.parse().map_err(|_| {
                CliError::InvalidArgument(format!("invalid value for {}: {}", key, text))
            }),
            None => default
                .ok_or_else(|| CliError::InvalidArgument(format!("missing parameter: {}", key))),
        }
    }

    fn finish(self) -> Result<()> {
        match self.values.keys().next() {
            Some(key) => Err(CliError::InvalidArgument(format!(
                "unknown parameter: {}",
                key
            ))),
            None => Ok(()),
        }
    }
}

/// Run the draw command
pub fn run(distribution: &str, raw_params: &[String], shape: Option<&str>) -> Result<Value> {
    let shape = Shape::from_str(shape.unwrap_or(""))?;
    let mut p = Params::parse(raw_params)?;
    info!(distribution, %shape, "drawing");

    let value = match distribution.to_lowercase().as_str() {
        "uniform" => {
            let (low, high) = (p.take("low", Some(0.0))?, p.take("high", Some(1.0))?);
            p.finish()?;
            serde_json::to_value(api::uniform(low, high, &shape)?)?
        }
        "normal" => {
            let (loc, scale) = (p.take("loc", Some(0.0))?, p.take("scale", Some(1.0))?);
            p.finish()?;
            serde_json::to_value(api::normal(loc, scale, &shape)?)?
        }
        "lognormal" => {
            let (loc, scale) = (p.take("loc", Some(0.0))?, p.take("scale", Some(1.0))?);
            p.finish()?;
            serde_json::to_value(api::lognormal(loc, scale, &shape)?)?
        }
        "exponential" => {
            let lambda = p.take("lambda", Some(1.0))?;
            p.finish()?;
            serde_json::to_value(api::exponential(lambda, &shape)?)?
        }
        "cauchy" => {
            let (median, gamma) = (p.take("median", Some(0.0))?, p.take("gamma", Some(1.0))?);
            p.finish()?;
            serde_json::to_value(api::cauchy(median, gamma, &shape)?)?
        }
        "pareto" => {
            let (alpha, xm) = (p.take("alpha", None)?, p.take("xm", Some(1.0))?);
            p.finish()?;
            serde_json::to_value(api::pareto(alpha, xm, &shape)?)?
        }
        "geometric" => {
            let prob = p.take("p", None)?;
            p.finish()?;
            serde_json::to_value(api::geometric(prob, &shape)?)?
        }
        "triangular" => {
            let (a, b, c) = (p.take("a", None)?, p.take("b", None)?, p.take("c", None)?);
            p.finish()?;
            serde_json::to_value(api::triangular(a, b, c, &shape)?)?
        }
        "randint" => {
            let (low, high) = (p.take("low", Some(0))?, p.take("high", None)?);
            p.finish()?;
            serde_json::to_value(api::randint(low, high, &shape)?)?
        }
        "binomial" => {
            let (n, prob) = (p.take("n", None)?, p.take("p", None)?);
            p.finish()?;
            serde_json::to_value(api::binomial(n, prob, &shape)?)?
        }
        "poisson" => {
            let lambda = p.take("lambda", None)?;
            p.finish()?;
            serde_json::to_value(api::poisson(lambda, &shape)?)?
        }
        "chisquare" | "chi2" => {
            let k = p.take("k", None)?;
            p.finish()?;
            serde_json::to_value(api::chisquare(k, &shape)?)?
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "unknown distribution: {}. Supported: {}",
                other,
                DISTRIBUTIONS.join(", ")
            )))
        }
    };

    Ok(value)
}
