//! Daily close history and the per-symbol series record written to disk.

use super::round2;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single daily close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClosePoint {
    pub timestamp: DateTime<Utc>,
    pub close: f64,
}

/// Ordered close history for one symbol, as returned by a provider or the
/// synthesizer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceHistory {
    pub symbol: String,
    pub points: Vec<ClosePoint>,
}

impl PriceHistory {
    pub fn new(symbol: impl Into<String>, points: Vec<ClosePoint>) -> Self {
        Self {
            symbol: symbol.into(),
            points,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn last_close(&self) -> Option<f64> {
        self.points.last().map(|p| p.close)
    }
}

/// Price series for one primary symbol.
///
/// `timestamps` and `closes` are parallel arrays of equal length. `market_cap`
/// is `Some` only when `shares_outstanding` is known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesRecord {
    pub symbol: String,
    pub timestamps: Vec<DateTime<Utc>>,
    pub closes: Vec<f64>,
    pub shares_outstanding: Option<f64>,
    pub market_cap: Option<f64>,
}

impl SeriesRecord {
    /// Split a history into parallel arrays and derive market cap from the
    /// last close.
    pub fn from_history(history: &PriceHistory, shares_outstanding: Option<f64>) -> Self {
        let (timestamps, closes): (Vec<_>, Vec<_>) = history
            .points
            .iter()
            .map(|p| (p.timestamp, p.close))
            .unzip();

        let market_cap = match (history.last_close(), shares_outstanding) {
            (Some(last), Some(shares)) => Some(round2(last * shares)),
            _ => None,
        };

        Self {
            symbol: history.symbol.clone(),
            timestamps,
            closes,
            shares_outstanding,
            market_cap,
        }
    }
}
