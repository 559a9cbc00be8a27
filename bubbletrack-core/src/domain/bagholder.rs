//! Bagholder series: decline charts rendered apart from the primary tickers.

use super::series::PriceHistory;
use crate::config::BagholderSpec;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One chart point. Serialized as `{x, y}` for the front-end chart library.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BagholderPoint {
    #[serde(rename = "x")]
    pub date: DateTime<Utc>,
    #[serde(rename = "y")]
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BagholderSeries {
    pub symbol: String,
    pub label: String,
    pub color: String,
    pub data: Vec<BagholderPoint>,
}

impl BagholderSeries {
    pub fn new(spec: &BagholderSpec, data: Vec<BagholderPoint>) -> Self {
        Self {
            symbol: spec.symbol.clone(),
            label: spec.label.clone(),
            color: spec.color.clone(),
            data,
        }
    }

    /// Build a series from live close history.
    pub fn from_history(spec: &BagholderSpec, history: &PriceHistory) -> Self {
        let data = history
            .points
            .iter()
            .map(|p| BagholderPoint {
                date: p.timestamp,
                value: p.close,
            })
            .collect();
        Self::new(spec, data)
    }

    /// True if no point is higher than the one before it.
    pub fn is_non_increasing(&self) -> bool {
        self.data.windows(2).all(|w| w[1].value <= w[0].value)
    }
}
