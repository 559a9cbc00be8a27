//! Bubbletrack CLI — refresh the cached stock dataset for the dashboard.
//!
//! Fetches one year of daily closes from Yahoo Finance and writes
//! `data/stocks.json`. Falls back to seeded sample data when the fetch fails;
//! `--demo` skips the network entirely.
//!
//! Set `BUBBLETRACK_CONFIG` to a TOML file to override tickers, seed, or the
//! output path. Set `RUST_LOG` to adjust log verbosity (default `info`).

use anyhow::{Context, Result};
use bubbletrack_core::data::{QuoteProvider, YahooProvider};
use bubbletrack_core::{run, TrackerConfig};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "bubbletrack",
    about = "Update cached stock data for the AI bubble tracker."
)]
struct Cli {
    /// Force sample data generation instead of live fetch.
    #[arg(long, default_value_t = false)]
    demo: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = TrackerConfig::from_env().context("failed to load tracker config")?;

    // Demo runs never build an HTTP client.
    let provider = if cli.demo {
        None
    } else {
        match YahooProvider::new() {
            Ok(p) => Some(p),
            Err(e) => {
                tracing::warn!(error = %e, "market-data provider unavailable");
                None
            }
        }
    };
    let provider_ref: Option<&dyn QuoteProvider> =
        provider.as_ref().map(|p| p as &dyn QuoteProvider);

    let summary = run(&config, provider_ref, cli.demo, chrono::Utc::now())
        .with_context(|| format!("failed to write {}", config.output_path.display()))?;

    println!(
        "Wrote {} with {} tickers",
        summary.path.display(),
        summary.series_count
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_flag_parses() {
        let cli = Cli::try_parse_from(["bubbletrack", "--demo"]).unwrap();
        assert!(cli.demo);
    }

    #[test]
    fn live_fetch_is_the_default() {
        let cli = Cli::try_parse_from(["bubbletrack"]).unwrap();
        assert!(!cli.demo);
    }

    #[test]
    fn unknown_flags_rejected() {
        assert!(Cli::try_parse_from(["bubbletrack", "--offline"]).is_err());
    }
}
