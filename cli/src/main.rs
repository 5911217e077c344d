//! nthprime CLI - binary entry point.
//!
//! ```text
//! main() -> NthPrimeConfig::load() -> init_tracing() -> PrimeSearch::find() per index
//! ```
//!
//! Results go to stdout, one line per index in argument order. Logs go to
//! stderr so they never interleave with results.

use std::io::{Write, stderr, stdout};
use std::num::NonZeroU64;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use nthprime_config::{NthPrimeConfig, witnesses_from_env};
use nthprime_core::{PrimeIndex, PrimeSearch, SearchOptions, WitnessPolicy, estimate};

const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Parser)]
#[command(name = "nthprime", version, about = "Compute the n-th prime exactly")]
struct Cli {
    /// 1-indexed positions in the sequence of primes.
    #[arg(required = true, value_name = "INDEX")]
    indices: Vec<u64>,

    /// Witness policy: standard, extended or auto.
    #[arg(long, value_name = "POLICY")]
    witnesses: Option<WitnessPolicy>,

    /// Print the estimated interval instead of searching.
    #[arg(long)]
    bounds: bool,

    /// Log progress every N primality tests (visible at debug level).
    #[arg(long, value_name = "N")]
    progress: Option<NonZeroU64>,
}

fn init_tracing(config_level: Option<&str>) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config_level.unwrap_or(DEFAULT_LOG_LEVEL)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(stderr))
        .with(env_filter)
        .init();
}

/// Flag > environment > config file > default.
fn resolve_options(cli: &Cli, config: Option<&NthPrimeConfig>) -> Result<SearchOptions> {
    let mut options = config
        .map(NthPrimeConfig::search_options)
        .unwrap_or_default();
    if let Some(policy) = witnesses_from_env()? {
        options.witnesses = policy;
    }
    if let Some(policy) = cli.witnesses {
        options.witnesses = policy;
    }
    if cli.progress.is_some() {
        options.progress_interval = cli.progress;
    }
    Ok(options)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Tracing is not up yet; hold the error until it is.
    let (config, config_error) = match NthPrimeConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (None, Some(err)),
    };
    init_tracing(config.as_ref().and_then(NthPrimeConfig::log_level));
    if let Some(err) = config_error {
        tracing::warn!("Ignoring config: {err}");
    }

    let options = resolve_options(&cli, config.as_ref())?;
    tracing::debug!(?options, "resolved search options");
    let search = PrimeSearch::new(options);

    let mut out = stdout().lock();
    for &raw in &cli.indices {
        let index =
            PrimeIndex::new(raw).with_context(|| format!("invalid prime index {raw}"))?;
        if cli.bounds {
            let bounds =
                estimate(index).with_context(|| format!("failed to estimate p_{index}"))?;
            writeln!(out, "p_{index} in {bounds}")?;
        } else {
            let report = search
                .find(index)
                .with_context(|| format!("failed to find p_{index}"))?;
            writeln!(out, "p_{index} = {}", report.prime)?;
        }
    }
    out.flush()?;

    Ok(())
}
