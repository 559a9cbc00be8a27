//! Domain types for the cached dashboard dataset.

pub mod bagholder;
pub mod dataset;
pub mod sentiment;
pub mod series;

pub use bagholder::{BagholderPoint, BagholderSeries};
pub use dataset::{Dataset, DatasetMetadata, DatasetSource};
pub use sentiment::{change_pct, SentimentRecord};
pub use series::{ClosePoint, PriceHistory, SeriesRecord};

/// Symbol type alias
pub type Symbol = String;

/// Round to two decimal places (cents / hundredths of a percent).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_rounds_to_cents() {
        assert_eq!(round2(140.123), 140.12);
        assert_eq!(round2(140.126), 140.13);
        assert_eq!(round2(-3.14159), -3.14);
        assert_eq!(round2(0.0), 0.0);
    }
}
