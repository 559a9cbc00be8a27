//! The top-level document consumed by the dashboard.

use super::bagholder::BagholderSeries;
use super::sentiment::SentimentRecord;
use super::series::SeriesRecord;
use super::Symbol;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Where the dataset came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetSource {
    /// Seeded synthetic stand-in.
    Sample,
    YahooFinance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetMetadata {
    pub source: DatasetSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Cached dataset written to `stocks.json`.
///
/// Live and sample datasets share this shape; only `metadata.source` tells
/// them apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub last_updated: DateTime<Utc>,
    pub series: BTreeMap<Symbol, SeriesRecord>,
    pub sentiment: BTreeMap<Symbol, SentimentRecord>,
    pub metadata: DatasetMetadata,
    pub bagholders: Vec<BagholderSeries>,
}

impl Dataset {
    /// Empty dataset stamped with `now`.
    pub fn new(now: DateTime<Utc>, metadata: DatasetMetadata) -> Self {
        Self {
            last_updated: now,
            series: BTreeMap::new(),
            sentiment: BTreeMap::new(),
            metadata,
            bagholders: Vec::new(),
        }
    }

    pub fn is_sample(&self) -> bool {
        self.metadata.source == DatasetSource::Sample
    }

    /// Insert a primary series, attaching sentiment when `symbol` is the
    /// designated sentiment symbol.
    pub fn insert_series(&mut self, record: SeriesRecord, sentiment_symbol: &str) {
        if record.symbol == sentiment_symbol {
            self.sentiment.insert(
                record.symbol.clone(),
                SentimentRecord::from_closes(&record.closes),
            );
        }
        self.series.insert(record.symbol.clone(), record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ClosePoint, PriceHistory};
    use chrono::TimeZone;

    fn record(symbol: &str, n: usize) -> SeriesRecord {
        let points = (0..n)
            .map(|i| ClosePoint {
                timestamp: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
                    + chrono::Duration::days(i as i64),
                close: 100.0 + i as f64,
            })
            .collect();
        SeriesRecord::from_history(&PriceHistory::new(symbol, points), None)
    }

    #[test]
    fn sentiment_only_for_designated_symbol() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let mut dataset = Dataset::new(
            now,
            DatasetMetadata {
                source: DatasetSource::Sample,
                note: None,
            },
        );
        dataset.insert_series(record("NVDA", 40), "NVDA");
        dataset.insert_series(record("MSFT", 40), "NVDA");

        assert_eq!(dataset.series.len(), 2);
        assert_eq!(dataset.sentiment.len(), 1);
        let nvda = dataset.sentiment["NVDA"];
        // latest = 139, 5 back = 134
        assert_eq!(nvda.change_pct_5d, 3.73);
    }

    #[test]
    fn metadata_source_serialization() {
        let sample = DatasetMetadata {
            source: DatasetSource::Sample,
            note: Some("offline".into()),
        };
        let live = DatasetMetadata {
            source: DatasetSource::YahooFinance,
            note: None,
        };
        let sample_json = serde_json::to_value(&sample).unwrap();
        let live_json = serde_json::to_value(&live).unwrap();
        assert_eq!(sample_json["source"], "sample");
        assert_eq!(sample_json["note"], "offline");
        assert_eq!(live_json["source"], "yahoo_finance");
        assert!(live_json.get("note").is_none());
    }

    #[test]
    fn top_level_keys_are_camel_case() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let dataset = Dataset::new(
            now,
            DatasetMetadata {
                source: DatasetSource::Sample,
                note: None,
            },
        );
        let json = serde_json::to_value(&dataset).unwrap();
        for key in ["lastUpdated", "series", "sentiment", "metadata", "bagholders"] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
    }
}
