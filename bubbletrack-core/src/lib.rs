//! Bubbletrack Core — cached stock dataset for the bubble-tracker dashboard.
//!
//! This crate contains:
//! - Dataset domain types (series, sentiment, bagholder charts)
//! - Tracker configuration with built-in defaults and TOML overrides
//! - Quote provider trait, Yahoo Finance client, and all-or-nothing live fetch
//! - Seeded sample synthesizer used for demos and outages
//! - The refresh pipeline that falls back from live to sample data

pub mod config;
pub mod data;
pub mod domain;
pub mod output;
pub mod pipeline;
pub mod rng;
pub mod sample;

pub use config::{BagholderSpec, ConfigError, TickerSpec, TrackerConfig};
pub use domain::{Dataset, DatasetSource};
pub use output::{read_dataset, write_dataset, OutputError};
pub use pipeline::{resolve_dataset, run, RunSummary};
pub use sample::build_sample_dataset;
