//! Live fetch: pull every configured symbol from a provider into a dataset.
//!
//! The fetch is all-or-nothing. A failed request or an empty history for any
//! one symbol abandons the whole dataset.

use super::provider::{DataError, QuoteProvider};
use crate::config::TrackerConfig;
use crate::domain::{BagholderSeries, Dataset, DatasetMetadata, SeriesRecord};
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("fetch failed for {symbol}: {source}")]
    Provider {
        symbol: String,
        #[source]
        source: DataError,
    },

    #[error("empty price history for {symbol}")]
    EmptyHistory { symbol: String },
}

/// Build a live dataset from `provider`, stamped with `now`.
///
/// Shares outstanding are best-effort: a failed lookup leaves market cap
/// unset instead of failing the fetch.
pub fn fetch_live_dataset(
    provider: &dyn QuoteProvider,
    config: &TrackerConfig,
    now: DateTime<Utc>,
) -> Result<Dataset, FetchError> {
    let total = config.tickers.len() + config.bagholders.len();
    tracing::info!(provider = provider.name(), symbols = total, "fetching live quotes");

    let mut dataset = Dataset::new(
        now,
        DatasetMetadata {
            source: provider.source(),
            note: None,
        },
    );

    for ticker in &config.tickers {
        let history = fetch_history(provider, &ticker.symbol)?;
        let shares = lookup_shares(provider, &ticker.symbol);
        let record = SeriesRecord::from_history(&history, shares);
        dataset.insert_series(record, &config.sentiment_symbol);
    }

    for spec in &config.bagholders {
        let history = fetch_history(provider, &spec.symbol)?;
        dataset
            .bagholders
            .push(BagholderSeries::from_history(spec, &history));
    }

    tracing::info!(
        series = dataset.series.len(),
        bagholders = dataset.bagholders.len(),
        "live fetch complete"
    );
    Ok(dataset)
}

fn fetch_history(
    provider: &dyn QuoteProvider,
    symbol: &str,
) -> Result<crate::domain::PriceHistory, FetchError> {
    let history = provider
        .fetch_history(symbol)
        .map_err(|source| FetchError::Provider {
            symbol: symbol.to_string(),
            source,
        })?;

    if history.is_empty() {
        return Err(FetchError::EmptyHistory {
            symbol: symbol.to_string(),
        });
    }

    tracing::debug!(symbol, points = history.len(), "fetched history");
    Ok(history)
}

fn lookup_shares(provider: &dyn QuoteProvider, symbol: &str) -> Option<f64> {
    match provider.shares_outstanding(symbol) {
        Ok(shares) => shares,
        Err(e) => {
            tracing::debug!(symbol, error = %e, "shares outstanding unavailable");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ClosePoint, DatasetSource, PriceHistory};
    use chrono::TimeZone;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory provider keyed by symbol.
    struct MockProvider {
        closes: HashMap<String, Vec<f64>>,
        shares: HashMap<String, f64>,
        calls: RefCell<Vec<String>>,
    }

    impl MockProvider {
        fn full(config: &TrackerConfig) -> Self {
            let closes = config
                .all_symbols()
                .map(|s| (s.to_string(), (0..40).map(|i| 100.0 + i as f64).collect()))
                .collect();
            Self {
                closes,
                shares: HashMap::new(),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl QuoteProvider for MockProvider {
        fn name(&self) -> &str {
            "mock"
        }

        fn source(&self) -> DatasetSource {
            DatasetSource::YahooFinance
        }

        fn fetch_history(&self, symbol: &str) -> Result<PriceHistory, DataError> {
            self.calls.borrow_mut().push(symbol.to_string());
            let closes = self.closes.get(symbol).ok_or_else(|| DataError::SymbolNotFound {
                symbol: symbol.to_string(),
            })?;
            let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
            let points = closes
                .iter()
                .enumerate()
                .map(|(i, &close)| ClosePoint {
                    timestamp: start + chrono::Duration::days(i as i64),
                    close,
                })
                .collect();
            Ok(PriceHistory::new(symbol, points))
        }

        fn shares_outstanding(&self, symbol: &str) -> Result<Option<f64>, DataError> {
            match self.shares.get(symbol) {
                Some(&s) => Ok(Some(s)),
                None => Err(DataError::AuthenticationRequired("no crumb".into())),
            }
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn full_fetch_builds_every_series() {
        let config = TrackerConfig::default();
        let mut provider = MockProvider::full(&config);
        provider.shares.insert("NVDA".into(), 2.0e9);

        let dataset = fetch_live_dataset(&provider, &config, now()).unwrap();

        assert_eq!(dataset.metadata.source, DatasetSource::YahooFinance);
        assert_eq!(dataset.metadata.note, None);
        assert_eq!(dataset.series.len(), 5);
        assert_eq!(dataset.bagholders.len(), 2);
        assert_eq!(dataset.bagholders[0].symbol, "CRWV");
        assert_eq!(dataset.bagholders[1].symbol, "NBIS");
        assert_eq!(dataset.sentiment.len(), 1);
        assert!(dataset.sentiment.contains_key("NVDA"));

        let nvda = &dataset.series["NVDA"];
        assert_eq!(nvda.market_cap, Some(139.0 * 2.0e9));
        // Shares lookup failed for MSFT: market cap absent, fetch still succeeds.
        assert_eq!(dataset.series["MSFT"].market_cap, None);
    }

    #[test]
    fn empty_history_abandons_fetch() {
        let config = TrackerConfig::default();
        let mut provider = MockProvider::full(&config);
        provider.closes.insert("META".into(), Vec::new());

        let err = fetch_live_dataset(&provider, &config, now()).unwrap_err();
        assert!(matches!(err, FetchError::EmptyHistory { ref symbol } if symbol == "META"));
        // Stops at the first failure.
        assert!(!provider.calls.borrow().contains(&"AMZN".to_string()));
    }

    #[test]
    fn empty_bagholder_history_abandons_fetch() {
        let config = TrackerConfig::default();
        let mut provider = MockProvider::full(&config);
        provider.closes.insert("NBIS".into(), Vec::new());

        let err = fetch_live_dataset(&provider, &config, now()).unwrap_err();
        assert!(matches!(err, FetchError::EmptyHistory { ref symbol } if symbol == "NBIS"));
    }

    #[test]
    fn provider_error_abandons_fetch() {
        let config = TrackerConfig::default();
        let mut provider = MockProvider::full(&config);
        provider.closes.remove("GOOGL");

        let err = fetch_live_dataset(&provider, &config, now()).unwrap_err();
        assert!(matches!(err, FetchError::Provider { ref symbol, .. } if symbol == "GOOGL"));
    }
}
