//! Tracker configuration: which symbols to track and where to write output.
//!
//! Every field has a built-in default, so a config file only needs to name
//! the values it overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an optional TOML config file.
pub const CONFIG_ENV_VAR: &str = "BUBBLETRACK_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// A primary tracked ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerSpec {
    pub symbol: String,
    /// Starting price for the synthetic walk.
    pub base_price: f64,
    /// Shares outstanding assumed by the sample dataset.
    pub sample_shares: f64,
}

/// A secondary "bagholder" ticker with its chart styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BagholderSpec {
    pub symbol: String,
    pub label: String,
    pub color: String,
    /// Starting price for the synthetic decline.
    pub base_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub tickers: Vec<TickerSpec>,
    pub bagholders: Vec<BagholderSpec>,
    /// Ticker that gets a sentiment record.
    pub sentiment_symbol: String,
    /// Master seed for sample synthesis.
    pub seed: u64,
    pub output_path: PathBuf,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        let ticker = |symbol: &str, base_price: f64, sample_shares: f64| TickerSpec {
            symbol: symbol.to_string(),
            base_price,
            sample_shares,
        };
        Self {
            tickers: vec![
                ticker("NVDA", 140.0, 24.5e9),
                ticker("MSFT", 350.0, 10e9),
                ticker("GOOGL", 135.0, 10e9),
                ticker("META", 300.0, 10e9),
                ticker("AMZN", 120.0, 10e9),
            ],
            bagholders: vec![
                BagholderSpec {
                    symbol: "CRWV".into(),
                    label: "CoreWeave".into(),
                    color: "#ef4444".into(),
                    base_price: 140.0,
                },
                BagholderSpec {
                    symbol: "NBIS".into(),
                    label: "Nebius".into(),
                    color: "#22c55e".into(),
                    base_price: 95.0,
                },
            ],
            sentiment_symbol: "NVDA".into(),
            seed: 1337,
            output_path: PathBuf::from("data/stocks.json"),
        }
    }
}

impl TrackerConfig {
    /// Parse and validate a TOML string. Missing fields keep their defaults.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Load from the file named by `BUBBLETRACK_CONFIG`, or fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) if !path.is_empty() => Self::from_file(Path::new(&path)),
            _ => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.tickers.is_empty() {
            return Err(ConfigError::Invalid("at least one ticker is required".into()));
        }
        let mut seen = std::collections::HashSet::new();
        for symbol in self.all_symbols() {
            if !seen.insert(symbol) {
                return Err(ConfigError::Invalid(format!("duplicate symbol '{symbol}'")));
            }
        }
        if let Some(t) = self.tickers.iter().find(|t| t.base_price <= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "base_price for '{}' must be positive",
                t.symbol
            )));
        }
        if let Some(b) = self.bagholders.iter().find(|b| b.base_price <= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "base_price for '{}' must be positive",
                b.symbol
            )));
        }
        Ok(())
    }

    /// Primary symbols followed by bagholder symbols, in config order.
    pub fn all_symbols(&self) -> impl Iterator<Item = &str> {
        self.tickers
            .iter()
            .map(|t| t.symbol.as_str())
            .chain(self.bagholders.iter().map(|b| b.symbol.as_str()))
    }
}
