//! Sampler CLI - Command Line Access to the Sampling Fabric
//!
//! This is the operational entry point for the sampling workspace.
//!
//! # Commands
//!
//! - `sampler draw <distribution> [--param k=v ...] [--shape S]` - Draw from a univariate distribution
//! - `sampler mvn --means 0,1 --cov "1,0.5;0.5,2" [--count K]` - Draw correlated vectors
//! - `sampler check` - Report configuration and run self-checks
//!
//! # Configuration
//!
//! Settings come from `sampler.toml` (or `--config`), then `SAMPLER_*`
//! environment variables, then command-line flags.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use sampler_core::rng::{self, Seed};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use config::{build_config, process_env, CliOverrides};

/// Deterministic random sampling CLI
#[derive(Parser)]
#[command(name = "sampler")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Seed for the default source
    #[arg(long, global = true)]
    seed: Option<Seed>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Output format (json, plain)
    #[arg(short, long, global = true)]
    format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw samples from a univariate distribution
    Draw {
        /// Distribution name (e.g., normal, poisson, triangular)
        distribution: String,

        /// Distribution parameter as key=value; repeatable
        #[arg(short, long = "param")]
        params: Vec<String>,

        /// Output shape: empty for a scalar, N, or dimensions like 2x3
        #[arg(short, long)]
        shape: Option<String>,
    },

    /// Draw correlated vectors through a Cholesky transform
    Mvn {
        /// Comma-separated means
        #[arg(short, long)]
        means: String,

        /// Covariance rows separated by ';', entries by ','
        #[arg(long)]
        cov: String,

        /// Number of vectors; one vector when omitted
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Noise family (normal, uniform, triangular)
        #[arg(long, default_value = "normal")]
        noise: String,

        /// Skew of triangular noise
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        alpha: f64,
    },

    /// Check configuration and sampler self-consistency
    Check,
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let overrides = CliOverrides {
        config_file: cli.config.clone(),
        seed: cli.seed.map(Seed::value),
        log_level: cli.log_level.clone(),
        format: cli.format.clone(),
    };
    let config = build_config(&overrides, process_env)?;

    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_filter_str()
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    if let Some(seed) = config.seed {
        info!(seed, "seeding default source");
        rng::reseed(seed);
    }

    let rendered = match cli.command {
        Commands::Draw {
            distribution,
            params,
            shape,
        } => output::render(
            &commands::draw::run(&distribution, &params, shape.as_deref())?,
            config.output_format,
        )?,
        Commands::Mvn {
            means,
            cov,
            count,
            noise,
            alpha,
        } => output::render(
            &commands::mvn::run(&means, &cov, count, &noise, alpha)?,
            config.output_format,
        )?,
        Commands::Check => output::render(&commands::check::run(&config)?, config.output_format)?,
    };

    println!("{}", rendered);
    Ok(())
}
