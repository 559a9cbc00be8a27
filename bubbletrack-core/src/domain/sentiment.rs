//! Short-horizon momentum for the designated sentiment symbol.

use super::round2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentRecord {
    pub change_pct_5d: f64,
    pub change_pct_30d: f64,
}

impl SentimentRecord {
    pub fn from_closes(closes: &[f64]) -> Self {
        Self {
            change_pct_5d: change_pct(closes, 5),
            change_pct_30d: change_pct(closes, 30),
        }
    }
}

/// Percent change between the latest close and the close `days` bars earlier,
/// rounded to two decimals.
///
/// Returns 0.0 when the series has `days` or fewer points, or when the
/// reference close is zero.
pub fn change_pct(closes: &[f64], days: usize) -> f64 {
    if closes.len() <= days {
        return 0.0;
    }
    let past = closes[closes.len() - days - 1];
    let latest = closes[closes.len() - 1];
    if past == 0.0 {
        return 0.0;
    }
    round2((latest - past) / past * 100.0)
}
