//! Refresh pipeline: pick a data source, build the dataset, write it out.
//!
//! Fallback policy:
//! 1. `demo` set → sample data, provider never called
//! 2. No provider → sample data
//! 3. Live fetch fails for any symbol → sample data
//! 4. Otherwise → live data
//!
//! A run always produces a complete dataset; only the final write can fail.

use crate::config::TrackerConfig;
use crate::data::{fetch_live_dataset, QuoteProvider};
use crate::domain::{Dataset, DatasetSource};
use crate::output::{write_dataset, OutputError};
use crate::sample::build_sample_dataset;
use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// What a run wrote.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub path: PathBuf,
    pub source: DatasetSource,
    pub series_count: usize,
    pub bagholder_count: usize,
}

/// Choose between live and sample data according to the fallback policy.
pub fn resolve_dataset(
    config: &TrackerConfig,
    provider: Option<&dyn QuoteProvider>,
    demo: bool,
    now: DateTime<Utc>,
) -> Dataset {
    if demo {
        tracing::info!("demo mode: generating sample data");
        return build_sample_dataset(config, now);
    }

    let Some(provider) = provider else {
        tracing::warn!("no market-data provider available, falling back to sample data");
        return build_sample_dataset(config, now);
    };

    match fetch_live_dataset(provider, config, now) {
        Ok(dataset) => dataset,
        Err(e) => {
            tracing::warn!(error = %e, "live fetch failed, falling back to sample data");
            build_sample_dataset(config, now)
        }
    }
}

/// Resolve the dataset and write it to `config.output_path`.
pub fn run(
    config: &TrackerConfig,
    provider: Option<&dyn QuoteProvider>,
    demo: bool,
    now: DateTime<Utc>,
) -> Result<RunSummary, OutputError> {
    let dataset = resolve_dataset(config, provider, demo, now);
    write_dataset(&dataset, &config.output_path)?;

    Ok(RunSummary {
        path: config.output_path.clone(),
        source: dataset.metadata.source,
        series_count: dataset.series.len(),
        bagholder_count: dataset.bagholders.len(),
    })
}
