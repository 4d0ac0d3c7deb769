//! CLI configuration management
//!
//! Handles loading configuration from a TOML file, environment variables and
//! command-line flags.

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use sampler_core::rng::Seed;

/// File read when `--config` is not given. Missing is not an error.
pub const DEFAULT_CONFIG_FILE: &str = "sampler.toml";

/// Environment variable overriding the seed.
pub const ENV_SEED: &str = "SAMPLER_SEED";
/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "SAMPLER_LOG_LEVEL";
/// Environment variable overriding the output format.
pub const ENV_FORMAT: &str = "SAMPLER_FORMAT";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: json, plain")]
    InvalidFormat(String),

    #[error("{0}")]
    InvalidSeed(String),

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels accepted by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// How samples are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Nested JSON arrays
    #[default]
    Json,
    /// Whitespace-separated values, one row per line
    Plain,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "plain" | "text" => Ok(OutputFormat::Plain),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Plain => write!(f, "plain"),
        }
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Seed for the default source; entropy when absent
    pub seed: Option<u64>,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Output format
    #[serde(deserialize_with = "deserialize_output_format")]
    pub output_format: OutputFormat,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_output_format<'de, D>(deserializer: D) -> Result<OutputFormat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OutputFormat::from_str(&s).map_err(serde::de::Error::custom)
}

fn parse_seed(value: &str) -> Result<u64, ConfigError> {
    Seed::from_str(value.trim())
        .map(Seed::value)
        .map_err(|e| ConfigError::InvalidSeed(e.to_string()))
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Apply environment overrides on top of `self`.
    ///
    /// `lookup` returns the value of a variable, or `None` when unset.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(seed) = lookup(ENV_SEED) {
            self.seed = Some(parse_seed(&seed)?);
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(format) = lookup(ENV_FORMAT) {
            self.output_format = OutputFormat::from_str(&format)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliOverrides) -> Result<(), ConfigError> {
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        if let Some(format) = &cli.format {
            self.output_format = OutputFormat::from_str(format)?;
        }
        Ok(())
    }
}

/// Command-line overrides
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Seed override
    pub seed: Option<u64>,
    /// Log level override
    pub log_level: Option<String>,
    /// Output format override
    pub format: Option<String>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config<F>(cli: &CliOverrides, env: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                CliConfig::from_file(default_path)?
            } else {
                CliConfig::default()
            }
        }
    };

    config.apply_env(env)?;
    config.merge_with_cli(cli)?;

    Ok(config)
}

/// Reads a variable from the process environment.
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    fn write_temp(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("sampler_cli_{}_{}", std::process::id(), name));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Warn").unwrap(), LogLevel::Warn);
        assert!(LogLevel::from_str("verbose").is_err());
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("plain").unwrap(), OutputFormat::Plain);
        assert!(OutputFormat::from_str("csv").is_err());
        assert_eq!(OutputFormat::Plain.to_string(), "plain");
    }

    #[test]
    fn test_from_file() {
        let path = write_temp(
            "full.toml",
            "seed = 42\nlog_level = \"DEBUG\"\noutput_format = \"plain\"\n",
        );
        let config = CliConfig::from_file(&path).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.output_format, OutputFormat::Plain);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_from_file_partial_uses_defaults() {
        let path = write_temp("partial.toml", "seed = 7\n");
        let config = CliConfig::from_file(&path).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.output_format, OutputFormat::Json);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_from_file_errors() {
        let missing = std::env::temp_dir().join("sampler_cli_does_not_exist.toml");
        assert!(matches!(
            CliConfig::from_file(&missing),
            Err(ConfigError::FileError(_))
        ));

        let path = write_temp("bad.toml", "log_level = \"loud\"\n");
        assert!(matches!(
            CliConfig::from_file(&path),
            Err(ConfigError::FileError(_))
        ));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_env_overrides() {
        let mut config = CliConfig::default();
        config
            .apply_env(env_from(&[
                (ENV_SEED, "123"),
                (ENV_LOG_LEVEL, "info"),
                (ENV_FORMAT, "plain"),
            ]))
            .unwrap();
        assert_eq!(config.seed, Some(123));
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.output_format, OutputFormat::Plain);
    }

    #[test]
    fn test_env_seed_accepts_integral_float() {
        let mut config = CliConfig::default();
        config.apply_env(env_from(&[(ENV_SEED, "42.0")])).unwrap();
        assert_eq!(config.seed, Some(42));

        let mut config = CliConfig::default();
        assert!(matches!(
            config.apply_env(env_from(&[(ENV_SEED, "1.5")])),
            Err(ConfigError::InvalidSeed(_))
        ));
    }

    #[test]
    fn test_priority_cli_over_env_over_file() {
        let path = write_temp(
            "priority.toml",
            "seed = 1\nlog_level = \"error\"\noutput_format = \"plain\"\n",
        );
        let cli = CliOverrides {
            config_file: Some(path.clone()),
            seed: Some(3),
            log_level: None,
            format: None,
        };
        let config = build_config(&cli, env_from(&[(ENV_SEED, "2"), (ENV_LOG_LEVEL, "debug")])).unwrap();
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.output_format, OutputFormat::Plain);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_invalid_cli_override_rejected() {
        let cli = CliOverrides {
            format: Some("xml".to_string()),
            ..Default::default()
        };
        let mut config = CliConfig::default();
        assert!(matches!(
            config.merge_with_cli(&cli),
            Err(ConfigError::InvalidFormat(_))
        ));
    }
}
